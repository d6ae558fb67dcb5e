pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod models;
pub mod store;

pub use config::{load_config, Config};
pub use error::ExtractError;
pub use extract::{extract_contacts, is_contact_folder, project_contact};
pub use models::ContactRecord;
pub use store::{MailFolder, MailMessage, MailStore};
