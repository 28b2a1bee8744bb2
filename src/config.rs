//! Configuration management and validation.
//!
//! Provides the converter configuration: where source tables live and how
//! rows that do not fit their table layout are treated.

use crate::constants::DEFAULT_DATA_DIR;
use crate::error::{Result, SymbolTableError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Handling of rows whose column count does not fit their table variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RowPolicy {
    /// Fail with the offending file and line
    #[default]
    Strict,
    /// Pass the row through unchanged; cells past the end read as empty
    Lenient,
}

/// Global configuration for table conversion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Directory that registry filenames are resolved against
    pub data_dir: PathBuf,

    /// Row width handling
    pub row_policy: RowPolicy,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            row_policy: RowPolicy::Strict,
        }
    }
}

impl ConverterConfig {
    /// Resolve source tables against a different directory
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Set the row width policy
    pub fn with_row_policy(mut self, row_policy: RowPolicy) -> Self {
        self.row_policy = row_policy;
        self
    }

    /// Best-effort handling of malformed rows
    pub fn lenient(self) -> Self {
        self.with_row_policy(RowPolicy::Lenient)
    }

    /// Absolute location of a registry filename
    pub fn resolve(&self, filename: &str) -> PathBuf {
        self.data_dir.join(filename)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Check the configuration before any table is read
    pub fn validate(&self) -> Result<()> {
        if !self.data_dir.is_dir() {
            return Err(SymbolTableError::configuration(format!(
                "data directory {} does not exist or is not a directory",
                self.data_dir.display()
            )));
        }

        debug!(
            "Configuration valid: data_dir={}, row_policy={:?}",
            self.data_dir.display(),
            self.row_policy
        );
        Ok(())
    }
}
