/// Decide by name whether a folder holds contacts. Pure substring
/// containment on the lower-cased name; a missing name never matches.
pub fn is_contact_folder(name: Option<&str>, keywords: &[String]) -> bool {
    let folder_name = name.unwrap_or("").to_lowercase();
    keywords
        .iter()
        .any(|keyword| folder_name.contains(&keyword.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords() -> Vec<String> {
        crate::config::Config::default().folders.keywords
    }

    #[test]
    fn matches_common_contact_folder_names() {
        for name in ["Contacts", "My Address Book", "People I Know"] {
            assert!(is_contact_folder(Some(name), &keywords()), "{name}");
        }
    }

    #[test]
    fn rejects_mail_folders() {
        for name in ["Inbox", "Sent Items", "Deleted Items", "Drafts"] {
            assert!(!is_contact_folder(Some(name), &keywords()), "{name}");
        }
    }

    #[test]
    fn missing_name_never_matches() {
        assert!(!is_contact_folder(None, &keywords()));
    }
}
