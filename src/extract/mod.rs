pub mod extractor;
pub mod folders;
pub mod projector;

pub use extractor::{collect_contacts, extract_contacts};
pub use folders::is_contact_folder;
pub use projector::project_contact;
