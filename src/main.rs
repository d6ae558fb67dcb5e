use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use contact_extractor::config::{load_config, Config};
use contact_extractor::extract::extract_contacts;
use contact_extractor::models::Result;

/// Extract contact records from Outlook OST/PST mail stores into CSV.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to the OST/PST file
    mail_store: PathBuf,

    /// Output CSV path (defaults to <input-stem>_contacts.csv)
    output_csv: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let args = Args::parse();

    // Load configuration, falling back to defaults
    let (config, config_error) = match load_config("config.yml").await {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    // Setup logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(
            format!("contact_extractor={}", config.logging.level)
                .parse()
                .unwrap_or_else(|_| "contact_extractor=info".parse().unwrap()),
        ))
        .init();

    if let Some(e) = config_error {
        warn!("Failed to load config.yml: {}. Using defaults.", e);
    }

    let output_csv = args
        .output_csv
        .unwrap_or_else(|| default_output_path(&args.mail_store));

    println!("Extracting contacts from: {}", args.mail_store.display());
    let contacts = extract_contacts(&args.mail_store, Some(&output_csv), &config.folders.keywords);

    if contacts.is_empty() {
        println!("No contacts found");
    } else {
        println!("Extracted {} contacts", contacts.len());
    }

    Ok(())
}

fn default_output_path(mail_store: &Path) -> PathBuf {
    let stem = mail_store
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    PathBuf::from(format!("{stem}_contacts.csv"))
}
