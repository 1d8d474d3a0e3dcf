use std::path::PathBuf;
use thiserror::Error;

/// All errors produced while loading stop-and-frisk data.
///
/// Queries over a loaded [`Dataset`](crate::dataset::Dataset) never fail;
/// every variant here belongs to the input or output boundary.
#[derive(Error, Debug)]
pub enum FriskError {
    /// A file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader rejected the input.
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A data line has fewer fields than the positional layout requires.
    #[error("Line {line}: missing field at index {index}")]
    MissingField { line: u64, index: usize },

    /// The year column of a data line is not an integer.
    #[error("Line {line}: invalid year {value:?}")]
    InvalidYear { line: u64, value: String },

    /// The given data path does not exist.
    #[error("Data path not found: {0}")]
    DataPathNotFound(PathBuf),

    /// No CSV files were found under the given directory.
    #[error("No CSV files found in {0}")]
    NoDataFiles(PathBuf),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl FriskError {
    /// Whether the error describes a single bad data line that a lenient
    /// loader may skip.
    pub fn is_line_error(&self) -> bool {
        matches!(
            self,
            FriskError::MissingField { .. } | FriskError::InvalidYear { .. }
        )
    }
}

/// Convenience alias used throughout the frisk crates.
pub type Result<T> = std::result::Result<T, FriskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_file_read() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = FriskError::FileRead {
            path: PathBuf::from("/some/2011.csv"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to read file"));
        assert!(msg.contains("/some/2011.csv"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_error_display_missing_field() {
        let err = FriskError::MissingField { line: 7, index: 71 };
        assert_eq!(err.to_string(), "Line 7: missing field at index 71");
    }

    #[test]
    fn test_error_display_invalid_year() {
        let err = FriskError::InvalidYear {
            line: 3,
            value: "20x1".to_string(),
        };
        assert_eq!(err.to_string(), "Line 3: invalid year \"20x1\"");
    }

    #[test]
    fn test_error_display_data_path_not_found() {
        let err = FriskError::DataPathNotFound(PathBuf::from("/missing/dir"));
        assert_eq!(err.to_string(), "Data path not found: /missing/dir");
    }

    #[test]
    fn test_error_display_no_data_files() {
        let err = FriskError::NoDataFiles(PathBuf::from("/empty/dir"));
        assert_eq!(err.to_string(), "No CSV files found in /empty/dir");
    }

    #[test]
    fn test_error_display_config() {
        let err = FriskError::Config("year2 requires year1".to_string());
        assert_eq!(err.to_string(), "Configuration error: year2 requires year1");
    }

    #[test]
    fn test_line_errors_are_skippable() {
        assert!(FriskError::MissingField { line: 1, index: 2 }.is_line_error());
        assert!(FriskError::InvalidYear {
            line: 1,
            value: String::new()
        }
        .is_line_error());
        assert!(!FriskError::NoDataFiles(PathBuf::from("/x")).is_line_error());
    }

    #[test]
    fn test_error_from_csv() {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(&b"a,b\nc\n"[..]);
        let err = rdr.records().find_map(|r| r.err()).unwrap();
        let err: FriskError = err.into();
        assert!(err.to_string().starts_with("Failed to parse CSV"));
    }
}
