pub mod pst;

pub use pst::PstStore;

use crate::error::ExtractError;

/// A message-like item inside a mail store: a bag of named text
/// properties. `Ok(None)` means the property is absent on this item;
/// callers decide what the default is.
pub trait MailMessage {
    fn property(&self, name: &str) -> Result<Option<String>, ExtractError>;
}

/// A folder in the mail-store tree.
pub trait MailFolder {
    fn name(&self) -> Option<String>;
    fn messages(&self) -> Result<Vec<Box<dyn MailMessage>>, ExtractError>;
}

/// An opened mail store. `folders` yields every folder in the tree in
/// the reader's own traversal order.
pub trait MailStore {
    fn folders(&self) -> Result<Vec<Box<dyn MailFolder>>, ExtractError>;
}
