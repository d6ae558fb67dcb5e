use std::fmt;
use std::path::PathBuf;

/// Failure classes for one extraction run. Each variant has its own
/// recovery policy: `InputNotFound` and `Store` empty the whole run,
/// `Projection` skips a single message, `CsvWrite` leaves the
/// in-memory records untouched.
#[derive(Debug)]
pub enum ExtractError {
    InputNotFound(PathBuf),
    Store(String),
    Projection(String),
    CsvWrite(String),
}

impl std::error::Error for ExtractError {}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::InputNotFound(path) => {
                write!(f, "File {} not found", path.display())
            }
            ExtractError::Store(reason) => {
                write!(f, "Failed to read mail store: {}", reason)
            }
            ExtractError::Projection(reason) => {
                write!(f, "Failed to read message properties: {}", reason)
            }
            ExtractError::CsvWrite(reason) => {
                write!(f, "Failed to write CSV: {}", reason)
            }
        }
    }
}

impl From<csv::Error> for ExtractError {
    fn from(err: csv::Error) -> Self {
        ExtractError::CsvWrite(err.to_string())
    }
}

impl From<std::io::Error> for ExtractError {
    fn from(err: std::io::Error) -> Self {
        ExtractError::CsvWrite(err.to_string())
    }
}
