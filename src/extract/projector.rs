use tracing::warn;

use crate::error::ExtractError;
use crate::models::ContactRecord;
use crate::store::MailMessage;

/// Project a message onto the fixed contact shape. Absent properties
/// become empty strings; records carrying no identity field are
/// dropped. A failing property read skips this message only.
pub fn project_contact(message: &dyn MailMessage) -> Option<ContactRecord> {
    match read_fields(message) {
        Ok(record) if record.has_identity() => Some(record),
        Ok(_) => None,
        Err(e) => {
            warn!("Error extracting contact info: {e}");
            None
        }
    }
}

fn read_fields(message: &dyn MailMessage) -> Result<ContactRecord, ExtractError> {
    let text = |name: &str| -> Result<String, ExtractError> {
        Ok(message.property(name)?.unwrap_or_default())
    };

    Ok(ContactRecord {
        display_name: text("display_name")?,
        given_name: text("given_name")?,
        surname: text("surname")?,
        email_address: text("email_address")?,
        business_telephone: text("business_telephone_number")?,
        home_telephone: text("home_telephone_number")?,
        mobile_telephone: text("mobile_telephone_number")?,
        company_name: text("company_name")?,
        job_title: text("title")?,
        department: text("department_name")?,
        business_address: text("business_address_street")?,
        business_city: text("business_address_city")?,
        business_state: text("business_address_state")?,
        business_postal_code: text("business_address_postal_code")?,
        business_country: text("business_address_country")?,
        home_address: text("home_address_street")?,
        home_city: text("home_address_city")?,
        home_state: text("home_address_state")?,
        home_postal_code: text("home_address_postal_code")?,
        home_country: text("home_address_country")?,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    struct FakeMessage {
        properties: BTreeMap<String, String>,
        fail: bool,
    }

    impl FakeMessage {
        fn with(pairs: &[(&str, &str)]) -> Self {
            Self {
                properties: pairs
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                fail: false,
            }
        }
    }

    impl MailMessage for FakeMessage {
        fn property(&self, name: &str) -> Result<Option<String>, ExtractError> {
            if self.fail {
                return Err(ExtractError::Projection("corrupt property stream".into()));
            }
            Ok(self.properties.get(name).cloned())
        }
    }

    #[test]
    fn message_with_no_properties_yields_no_record() {
        let message = FakeMessage::with(&[]);
        assert_eq!(project_contact(&message), None);
    }

    #[test]
    fn display_name_alone_is_enough() {
        let message = FakeMessage::with(&[("display_name", "Jane Doe")]);
        let record = project_contact(&message).expect("record should be kept");
        assert_eq!(record.display_name, "Jane Doe");

        // Every other field defaults to empty text.
        let row = record.to_row();
        let non_empty: Vec<_> = row.iter().filter(|(_, v)| !v.is_empty()).collect();
        assert_eq!(non_empty.len(), 1);
    }

    #[test]
    fn non_identity_fields_do_not_keep_a_record() {
        let message = FakeMessage::with(&[("company_name", "Acme Corp"), ("title", "CTO")]);
        assert_eq!(project_contact(&message), None);
    }

    #[test]
    fn property_read_failure_skips_the_message() {
        let mut message = FakeMessage::with(&[("display_name", "Jane Doe")]);
        message.fail = true;
        assert_eq!(project_contact(&message), None);
    }

    #[test]
    fn message_property_names_map_onto_record_fields() {
        let message = FakeMessage::with(&[
            ("surname", "Doe"),
            ("title", "Engineer"),
            ("department_name", "R&D"),
            ("business_address_street", "1 Main St"),
            ("home_address_postal_code", "12345"),
        ]);
        let record = project_contact(&message).expect("surname carries identity");
        assert_eq!(record.surname, "Doe");
        assert_eq!(record.job_title, "Engineer");
        assert_eq!(record.department, "R&D");
        assert_eq!(record.business_address, "1 Main St");
        assert_eq!(record.home_postal_code, "12345");
    }
}
