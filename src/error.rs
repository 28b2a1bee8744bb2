//! Error handling for symbology table conversion.
//!
//! Covers unreadable source tables, rows whose width does not fit their
//! table variant, and serialization of the final dictionary.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SymbolTableError {
    #[error("Table file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Failed to read table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed row in {path} at line {line}: expected {expected} columns, found {found}")]
    MalformedRow {
        path: PathBuf,
        line: usize,
        expected: String,
        found: usize,
    },

    #[error("JSON serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl SymbolTableError {
    /// Map a read failure to `FileNotFound` or `Io` depending on its kind
    pub fn from_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::Io { path, source }
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SymbolTableError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_not_found_maps_to_file_not_found() {
        let err = SymbolTableError::from_read("missing.tsv", Error::from(ErrorKind::NotFound));
        assert!(matches!(err, SymbolTableError::FileNotFound { .. }));
        assert_eq!(err.to_string(), "Table file not found: missing.tsv");
    }

    #[test]
    fn test_other_read_failures_map_to_io() {
        let err = SymbolTableError::from_read(
            "locked.tsv",
            Error::from(ErrorKind::PermissionDenied),
        );
        assert!(matches!(err, SymbolTableError::Io { .. }));
    }

    #[test]
    fn test_malformed_row_message_names_file_and_line() {
        let err = SymbolTableError::MalformedRow {
            path: PathBuf::from("tables/land.tsv"),
            line: 7,
            expected: "5 or 6".to_string(),
            found: 3,
        };
        assert_eq!(
            err.to_string(),
            "Malformed row in tables/land.tsv at line 7: expected 5 or 6 columns, found 3"
        );
    }
}
