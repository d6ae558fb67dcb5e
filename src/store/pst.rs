//! Mail-store backend over the `outlook-pst` crate, which handles the
//! OST/PST binary container itself. This module only walks the folder
//! hierarchy and resolves the projector's property names to MAPI
//! property ids.

use std::path::Path;
use std::rc::Rc;

use outlook_pst::ltp::prop_context::PropertyValue;
use outlook_pst::messaging::folder::{Folder, UnicodeFolder};
use outlook_pst::messaging::message::{Message, UnicodeMessage};
use outlook_pst::messaging::store::{Store, UnicodeStore};
use outlook_pst::ndb::node_id::{NodeId, NodeIdType};
use outlook_pst::UnicodePstFile;
use tracing::warn;

use super::{MailFolder, MailMessage, MailStore};
use crate::error::ExtractError;

// MAPI property ids, per MS-OXPROPS.
const PR_DISPLAY_NAME: u16 = 0x3001;
const PR_EMAIL_ADDRESS: u16 = 0x3003;
const PR_SMTP_ADDRESS: u16 = 0x39FE;
const PR_GIVEN_NAME: u16 = 0x3A06;
const PR_BUSINESS_TELEPHONE_NUMBER: u16 = 0x3A08;
const PR_HOME_TELEPHONE_NUMBER: u16 = 0x3A09;
const PR_SURNAME: u16 = 0x3A11;
const PR_COMPANY_NAME: u16 = 0x3A16;
const PR_TITLE: u16 = 0x3A17;
const PR_DEPARTMENT_NAME: u16 = 0x3A18;
const PR_MOBILE_TELEPHONE_NUMBER: u16 = 0x3A1C;
const PR_BUSINESS_ADDRESS_COUNTRY: u16 = 0x3A26;
const PR_BUSINESS_ADDRESS_CITY: u16 = 0x3A27;
const PR_BUSINESS_ADDRESS_STATE: u16 = 0x3A28;
const PR_BUSINESS_ADDRESS_STREET: u16 = 0x3A29;
const PR_BUSINESS_ADDRESS_POSTAL_CODE: u16 = 0x3A2A;
const PR_HOME_ADDRESS_CITY: u16 = 0x3A59;
const PR_HOME_ADDRESS_COUNTRY: u16 = 0x3A5A;
const PR_HOME_ADDRESS_POSTAL_CODE: u16 = 0x3A5B;
const PR_HOME_ADDRESS_STATE: u16 = 0x3A5C;
const PR_HOME_ADDRESS_STREET: u16 = 0x3A5D;

pub struct PstStore {
    store: Rc<UnicodeStore>,
}

impl PstStore {
    pub fn open(path: &Path) -> Result<Self, ExtractError> {
        let pst = UnicodePstFile::open(path)
            .map_err(|e| ExtractError::Store(format!("failed to open {}: {e}", path.display())))?;
        let store = UnicodeStore::read(Rc::new(pst))
            .map_err(|e| ExtractError::Store(format!("failed to read store: {e}")))?;
        Ok(Self { store })
    }

    /// Depth-first walk from `folder`, pushing the folder itself before
    /// its subfolders. Subfolders that cannot be read are logged and
    /// skipped; the walk carries on.
    fn collect_folders(&self, folder: Rc<UnicodeFolder>, out: &mut Vec<Box<dyn MailFolder>>) {
        let mut subfolders = Vec::new();
        if let Some(hierarchy_table) = folder.hierarchy_table() {
            for row in hierarchy_table.rows_matrix() {
                let row_id: u32 = row.id().into();
                if let Ok(node_id) = NodeId::new(NodeIdType::NormalFolder, row_id) {
                    if let Ok(entry_id) = self.store.properties().make_entry_id(node_id) {
                        match UnicodeFolder::read(Rc::clone(&self.store), &entry_id) {
                            Ok(subfolder) => subfolders.push(subfolder),
                            Err(e) => warn!("Skipping unreadable folder: {e}"),
                        }
                    }
                }
            }
        }

        out.push(Box::new(PstFolder {
            store: Rc::clone(&self.store),
            folder,
        }));

        for subfolder in subfolders {
            self.collect_folders(subfolder, out);
        }
    }
}

impl MailStore for PstStore {
    fn folders(&self) -> Result<Vec<Box<dyn MailFolder>>, ExtractError> {
        let root_entry_id = self
            .store
            .properties()
            .ipm_sub_tree_entry_id()
            .map_err(|e| ExtractError::Store(format!("failed to locate root folder: {e}")))?;
        let root = UnicodeFolder::read(Rc::clone(&self.store), &root_entry_id)
            .map_err(|e| ExtractError::Store(format!("failed to read root folder: {e}")))?;

        let mut folders = Vec::new();
        self.collect_folders(root, &mut folders);
        Ok(folders)
    }
}

struct PstFolder {
    store: Rc<UnicodeStore>,
    folder: Rc<UnicodeFolder>,
}

impl MailFolder for PstFolder {
    fn name(&self) -> Option<String> {
        self.folder.properties().display_name().ok()
    }

    fn messages(&self) -> Result<Vec<Box<dyn MailMessage>>, ExtractError> {
        let mut messages: Vec<Box<dyn MailMessage>> = Vec::new();
        if let Some(contents_table) = self.folder.contents_table() {
            for row in contents_table.rows_matrix() {
                let row_id: u32 = row.id().into();
                if let Ok(node_id) = NodeId::new(NodeIdType::NormalMessage, row_id) {
                    if let Ok(entry_id) = self.store.properties().make_entry_id(node_id) {
                        match UnicodeMessage::read(Rc::clone(&self.store), &entry_id, None) {
                            Ok(message) => messages.push(Box::new(PstMessage { message })),
                            Err(e) => warn!("Skipping unreadable message: {e}"),
                        }
                    }
                }
            }
        }
        Ok(messages)
    }
}

struct PstMessage {
    message: Rc<UnicodeMessage>,
}

impl MailMessage for PstMessage {
    fn property(&self, name: &str) -> Result<Option<String>, ExtractError> {
        // First id that carries a string value wins.
        let ids: &[u16] = match name {
            "display_name" => &[PR_DISPLAY_NAME],
            "given_name" => &[PR_GIVEN_NAME],
            "surname" => &[PR_SURNAME],
            "email_address" => &[PR_EMAIL_ADDRESS, PR_SMTP_ADDRESS],
            "business_telephone_number" => &[PR_BUSINESS_TELEPHONE_NUMBER],
            "home_telephone_number" => &[PR_HOME_TELEPHONE_NUMBER],
            "mobile_telephone_number" => &[PR_MOBILE_TELEPHONE_NUMBER],
            "company_name" => &[PR_COMPANY_NAME],
            "title" => &[PR_TITLE],
            "department_name" => &[PR_DEPARTMENT_NAME],
            "business_address_street" => &[PR_BUSINESS_ADDRESS_STREET],
            "business_address_city" => &[PR_BUSINESS_ADDRESS_CITY],
            "business_address_state" => &[PR_BUSINESS_ADDRESS_STATE],
            "business_address_postal_code" => &[PR_BUSINESS_ADDRESS_POSTAL_CODE],
            "business_address_country" => &[PR_BUSINESS_ADDRESS_COUNTRY],
            "home_address_street" => &[PR_HOME_ADDRESS_STREET],
            "home_address_city" => &[PR_HOME_ADDRESS_CITY],
            "home_address_state" => &[PR_HOME_ADDRESS_STATE],
            "home_address_postal_code" => &[PR_HOME_ADDRESS_POSTAL_CODE],
            "home_address_country" => &[PR_HOME_ADDRESS_COUNTRY],
            _ => return Ok(None),
        };

        let properties = self.message.properties();
        for id in ids {
            if let Some(value) = string_value(properties.get(*id)) {
                return Ok(Some(value));
            }
        }
        Ok(None)
    }
}

fn string_value(value: Option<&PropertyValue>) -> Option<String> {
    match value {
        Some(PropertyValue::String8(s)) => Some(s.to_string()),
        Some(PropertyValue::Unicode(s)) => Some(s.to_string()),
        _ => None,
    }
}
