use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use tracing::info;

use crate::error::ExtractError;

/// Write contact rows as UTF-8 CSV. The header is the sorted union of
/// every key seen across all rows; rows missing a header field get an
/// empty string. With no rows at all, nothing is written.
pub fn write_csv(rows: &[BTreeMap<String, String>], output: &Path) -> Result<(), ExtractError> {
    if rows.is_empty() {
        info!("No contacts to save");
        return Ok(());
    }

    let header: BTreeSet<&str> = rows
        .iter()
        .flat_map(|row| row.keys().map(String::as_str))
        .collect();

    let mut writer = csv::Writer::from_path(output)?;
    writer.write_record(&header)?;
    for row in rows {
        writer.write_record(
            header
                .iter()
                .map(|field| row.get(*field).map(String::as_str).unwrap_or("")),
        )?;
    }
    writer.flush()?;

    println!(
        "Successfully saved {} contacts to {}",
        rows.len(),
        output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn header_is_the_sorted_union_of_all_keys() {
        let rows = vec![
            row(&[("display_name", "A"), ("email_address", "a@example.com")]),
            row(&[("display_name", "B"), ("company_name", "Acme")]),
            row(&[("display_name", "C")]),
        ];

        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("contacts.csv");
        write_csv(&rows, &output).unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "company_name,display_name,email_address"
        );
        assert_eq!(lines.next().unwrap(), ",A,a@example.com");
        assert_eq!(lines.next().unwrap(), "Acme,B,");
        assert_eq!(lines.next().unwrap(), ",C,");
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn empty_input_writes_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("contacts.csv");
        write_csv(&[], &output).unwrap();
        assert!(!output.exists());
    }

    #[test]
    fn values_with_delimiters_survive_a_round_trip() {
        let rows = vec![row(&[
            ("display_name", "Doe, Jane \"JD\""),
            ("business_address", "1 Main St\nSuite 5"),
            ("email_address", "jane@example.com"),
        ])];

        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("contacts.csv");
        write_csv(&rows, &output).unwrap();

        let mut reader = csv::Reader::from_path(&output).unwrap();
        let headers = reader.headers().unwrap().clone();
        let record = reader.records().next().unwrap().unwrap();
        let get = |field: &str| {
            let idx = headers.iter().position(|h| h == field).unwrap();
            record.get(idx).unwrap().to_string()
        };

        assert_eq!(get("display_name"), "Doe, Jane \"JD\"");
        assert_eq!(get("business_address"), "1 Main St\nSuite 5");
        assert_eq!(get("email_address"), "jane@example.com");
    }

    #[test]
    fn unwritable_path_reports_a_csv_error() {
        let rows = vec![row(&[("display_name", "A")])];
        let err = write_csv(&rows, Path::new("/no/such/directory/contacts.csv"))
            .expect_err("write should fail");
        assert!(matches!(err, ExtractError::CsvWrite(_)));
    }
}
