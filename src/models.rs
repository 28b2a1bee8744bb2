//! Core data structures for symbology table conversion.
//!
//! Defines table descriptors, the table variant that decides how rows are
//! mapped, parsed rows, dictionary entries and run statistics.

use crate::constants::LEGACY_STANDARDS;
use serde::Serialize;
use std::fmt;

/// One source table and the context its rows are interpreted in
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableDescriptor {
    pub filename: &'static str,
    pub standard: &'static str,
    pub symbol_set: &'static str,
    pub sector: Option<&'static str>,
}

impl TableDescriptor {
    pub const fn symbols(
        standard: &'static str,
        symbol_set: &'static str,
        filename: &'static str,
    ) -> Self {
        Self {
            filename,
            standard,
            symbol_set,
            sector: None,
        }
    }

    pub const fn modifiers(
        standard: &'static str,
        symbol_set: &'static str,
        sector: &'static str,
        filename: &'static str,
    ) -> Self {
        Self {
            filename,
            standard,
            symbol_set,
            sector: Some(sector),
        }
    }

    pub fn variant(&self) -> TableVariant {
        TableVariant::for_table(self)
    }
}

/// Row mapping rules, selected once per table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TableVariant {
    /// 15-character codes (2525B/C)
    Legacy,
    /// 20-digit codes (2525D and later)
    Current,
    /// Sector modifiers of a current symbol set
    Modifier,
}

impl TableVariant {
    /// First match wins: sector, then legacy standard, then current
    pub fn for_table(table: &TableDescriptor) -> Self {
        if table.sector.is_some() {
            TableVariant::Modifier
        } else if LEGACY_STANDARDS.contains(&table.standard) {
            TableVariant::Legacy
        } else {
            TableVariant::Current
        }
    }

    /// Whether empty hierarchy cells are copied from the preceding row
    pub fn fills_gaps(&self) -> bool {
        !matches!(self, TableVariant::Legacy)
    }
}

impl fmt::Display for TableVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableVariant::Legacy => write!(f, "legacy"),
            TableVariant::Current => write!(f, "current"),
            TableVariant::Modifier => write!(f, "modifier"),
        }
    }
}

/// Tab-split cells of one source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// 1-based line number in the source file
    pub line: usize,
    pub cells: Vec<String>,
}

impl Row {
    pub fn new(line: usize, cells: Vec<String>) -> Self {
        Self { line, cells }
    }

    pub fn width(&self) -> usize {
        self.cells.len()
    }
}

/// Descriptive metadata for one key; empty fields are never present
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Metadata {
    Legacy {
        #[serde(skip_serializing_if = "Option::is_none")]
        hierarchy: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        geometry: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        remarks: Option<String>,
    },
    Current {
        #[serde(skip_serializing_if = "Option::is_none")]
        entity: Option<String>,
        #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
        entity_type: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        subtype: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        geometry: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        remarks: Option<String>,
    },
    Modifier {
        #[serde(skip_serializing_if = "Option::is_none")]
        modifier: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        category: Option<String>,
    },
}

impl Metadata {
    /// Field names and values that survive the empty-value purge, in output order
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        let named: Vec<(&'static str, &Option<String>)> = match self {
            Metadata::Legacy {
                hierarchy,
                name,
                geometry,
                remarks,
            } => vec![
                ("hierarchy", hierarchy),
                ("name", name),
                ("geometry", geometry),
                ("remarks", remarks),
            ],
            Metadata::Current {
                entity,
                entity_type,
                subtype,
                geometry,
                remarks,
            } => vec![
                ("entity", entity),
                ("type", entity_type),
                ("subtype", subtype),
                ("geometry", geometry),
                ("remarks", remarks),
            ],
            Metadata::Modifier { modifier, category } => {
                vec![("modifier", modifier), ("category", category)]
            }
        };

        named
            .into_iter()
            .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
            .collect()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields()
            .into_iter()
            .find(|(name, _)| *name == field)
            .map(|(_, value)| value)
    }
}

/// Turn an empty cell into an absent field
pub fn present(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    if value.is_empty() { None } else { Some(value) }
}

/// Symbol key paired with its metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub metadata: Metadata,
}

/// Run statistics
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConversionStats {
    pub tables_processed: usize,
    pub entries_built: usize,
    pub keys_overwritten: usize,
    pub processing_time_ms: u128,
}

impl ConversionStats {
    /// Number of keys in the resulting dictionary
    pub fn distinct_keys(&self) -> usize {
        self.entries_built - self.keys_overwritten
    }
}
