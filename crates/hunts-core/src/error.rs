use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the car-hunts pipeline.
#[derive(Error, Debug)]
pub enum HuntError {
    /// The hunt log could not be opened or read from disk.
    #[error("Failed to read hunt log {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A date field did not match the expected `DD.MM.YYYY` format.
    #[error("Invalid hunt date in record {record}: '{value}' (expected DD.MM.YYYY)")]
    DateParse { record: usize, value: String },

    /// A record could not be split into fields.
    #[error("Malformed hunt log record: {0}")]
    Csv(#[from] csv::Error),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the hunts crates.
pub type Result<T> = std::result::Result<T, HuntError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_file_read() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = HuntError::FileRead {
            path: PathBuf::from("/some/car_hunts.csv"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to read hunt log"));
        assert!(msg.contains("/some/car_hunts.csv"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_error_display_date_parse() {
        let err = HuntError::DateParse {
            record: 3,
            value: "1-1-2020".to_string(),
        };
        let msg = err.to_string();
        assert_eq!(
            msg,
            "Invalid hunt date in record 3: '1-1-2020' (expected DD.MM.YYYY)"
        );
    }

    #[test]
    fn test_error_display_config() {
        let err = HuntError::Config("unrecognised delimiter: tab".to_string());
        assert_eq!(err.to_string(), "Configuration error: unrecognised delimiter: tab");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: HuntError = io_err.into();
        assert!(err.to_string().contains("denied"));
    }
}
