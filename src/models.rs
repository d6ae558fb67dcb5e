use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// One extracted contact. All fields are plain text; an empty string
/// means the property was absent on the source message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub display_name: String,
    pub given_name: String,
    pub surname: String,
    pub email_address: String,
    pub business_telephone: String,
    pub home_telephone: String,
    pub mobile_telephone: String,
    pub company_name: String,
    pub job_title: String,
    pub department: String,
    pub business_address: String,
    pub business_city: String,
    pub business_state: String,
    pub business_postal_code: String,
    pub business_country: String,
    pub home_address: String,
    pub home_city: String,
    pub home_state: String,
    pub home_postal_code: String,
    pub home_country: String,
}

impl ContactRecord {
    /// A record is worth keeping only if one of the identity-bearing
    /// fields is non-empty.
    pub fn has_identity(&self) -> bool {
        !self.display_name.is_empty()
            || !self.email_address.is_empty()
            || !self.given_name.is_empty()
            || !self.surname.is_empty()
    }

    /// Flatten into field-name/value pairs for the CSV serializer. The
    /// header union stays computed dynamically over these maps.
    pub fn to_row(&self) -> BTreeMap<String, String> {
        let fields = [
            ("display_name", &self.display_name),
            ("given_name", &self.given_name),
            ("surname", &self.surname),
            ("email_address", &self.email_address),
            ("business_telephone", &self.business_telephone),
            ("home_telephone", &self.home_telephone),
            ("mobile_telephone", &self.mobile_telephone),
            ("company_name", &self.company_name),
            ("job_title", &self.job_title),
            ("department", &self.department),
            ("business_address", &self.business_address),
            ("business_city", &self.business_city),
            ("business_state", &self.business_state),
            ("business_postal_code", &self.business_postal_code),
            ("business_country", &self.business_country),
            ("home_address", &self.home_address),
            ("home_city", &self.home_city),
            ("home_state", &self.home_state),
            ("home_postal_code", &self.home_postal_code),
            ("home_country", &self.home_country),
        ];

        fields
            .into_iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }
}
