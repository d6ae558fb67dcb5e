use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub folders: FolderMatchConfig,
    pub logging: LoggingConfig,
}

/// Folder-name heuristics: a folder is treated as a contacts folder
/// when its lower-cased display name contains any of these substrings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FolderMatchConfig {
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            folders: FolderMatchConfig {
                keywords: vec![
                    "contact".to_string(),
                    "address".to_string(),
                    "people".to_string(),
                ],
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

pub async fn load_config(path: &str) -> crate::models::Result<Config> {
    let content = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keywords_match_the_usual_folder_names() {
        let config = Config::default();
        assert_eq!(config.folders.keywords, ["contact", "address", "people"]);
    }

    #[tokio::test]
    async fn missing_config_file_is_an_error() {
        assert!(load_config("does-not-exist.yml").await.is_err());
    }
}
