use std::path::Path;

use tracing::error;

use crate::error::ExtractError;
use crate::export;
use crate::models::ContactRecord;
use crate::store::{MailStore, PstStore};

use super::folders::is_contact_folder;
use super::projector::project_contact;

/// Extract contacts from an OST/PST file and optionally write them to
/// CSV. This is a boundary: every failure is reported on the console
/// and turned into an empty result, so callers never see an error.
pub fn extract_contacts(
    path: &Path,
    output_csv: Option<&Path>,
    keywords: &[String],
) -> Vec<ContactRecord> {
    if !path.exists() {
        error!("{}", ExtractError::InputNotFound(path.to_path_buf()));
        return Vec::new();
    }

    let contacts = match open_and_collect(path, keywords) {
        Ok(contacts) => contacts,
        Err(e) => {
            // A hard failure mid-walk discards anything gathered so far.
            error!("Error processing file: {e}");
            return Vec::new();
        }
    };

    if let Some(output) = output_csv {
        if !contacts.is_empty() {
            let rows: Vec<_> = contacts.iter().map(ContactRecord::to_row).collect();
            match export::write_csv(&rows, output) {
                Ok(()) => println!("Contacts saved to: {}", output.display()),
                // The records still exist in memory; only the file is lost.
                Err(e) => error!("{e}"),
            }
        }
    }

    contacts
}

fn open_and_collect(path: &Path, keywords: &[String]) -> Result<Vec<ContactRecord>, ExtractError> {
    // The store handle lives for this scope only and is released on
    // every exit path.
    let store = PstStore::open(path)?;
    println!("Processing: {}", path.display());
    collect_contacts(&store, keywords)
}

/// Walk every folder of an open store, project messages from folders
/// whose name passes the contact heuristic, and accumulate records in
/// encounter order.
pub fn collect_contacts(
    store: &dyn MailStore,
    keywords: &[String],
) -> Result<Vec<ContactRecord>, ExtractError> {
    let mut contacts = Vec::new();

    for folder in store.folders()? {
        let name = folder.name();
        if !is_contact_folder(name.as_deref(), keywords) {
            continue;
        }
        println!("Found contacts folder: {}", name.unwrap_or_default());

        for message in folder.messages()? {
            if let Some(record) = project_contact(message.as_ref()) {
                contacts.push(record);
            }
        }
    }

    Ok(contacts)
}
