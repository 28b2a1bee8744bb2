//! Conversion pipeline.
//!
//! Orchestrates the run: each registered table is parsed and mapped to
//! entries in registry order, and all entries are folded into a single
//! dictionary where later keys overwrite earlier ones.

use crate::config::ConverterConfig;
use crate::entry::EntryBuilder;
use crate::error::Result;
use crate::models::{ConversionStats, Entry, Metadata, TableDescriptor};
use crate::parser::parse_table;
use crate::registry;

use indexmap::IndexMap;
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info};

/// Symbol key to metadata, keyed in first-insertion order
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SymbolDictionary {
    entries: IndexMap<String, Metadata>,
}

impl SymbolDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, returning true if it replaced an existing key
    pub fn insert(&mut self, entry: Entry) -> bool {
        self.entries.insert(entry.key, entry.metadata).is_some()
    }

    pub fn get(&self, key: &str) -> Option<&Metadata> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pretty-printed JSON with 2-space indentation and a trailing newline
    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}

/// Converts the registered tables into one dictionary
pub struct TableConverter {
    config: ConverterConfig,
    tables: Vec<TableDescriptor>,
}

impl TableConverter {
    /// Create a converter over the full registry
    pub fn new(config: ConverterConfig) -> Self {
        Self {
            config,
            tables: registry::tables().to_vec(),
        }
    }

    /// Replace the table list
    pub fn with_tables(mut self, tables: impl Into<Vec<TableDescriptor>>) -> Self {
        self.tables = tables.into();
        self
    }

    pub fn tables(&self) -> &[TableDescriptor] {
        &self.tables
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Parse one table and map its rows to entries
    pub fn convert_table(&self, table: &TableDescriptor) -> Result<Vec<Entry>> {
        let path = self.config.resolve(table.filename);
        let rows = parse_table(&path)?;
        let builder = EntryBuilder::new(table, &path, self.config.row_policy);
        let entries = builder.build_all(rows)?;

        debug!(
            "{} ({} {}): {} entries",
            table.filename,
            builder.variant(),
            table.standard,
            entries.len()
        );
        Ok(entries)
    }

    /// Run the full conversion; any failing table aborts the run
    pub fn convert(&self) -> Result<(SymbolDictionary, ConversionStats)> {
        let start_time = Instant::now();
        self.config.validate()?;

        let mut dictionary = SymbolDictionary::new();
        let mut stats = ConversionStats::default();

        for table in &self.tables {
            for entry in self.convert_table(table)? {
                stats.entries_built += 1;
                if dictionary.contains_key(&entry.key) {
                    debug!("{} overwrites {}", table.filename, entry.key);
                }
                if dictionary.insert(entry) {
                    stats.keys_overwritten += 1;
                }
            }
            stats.tables_processed += 1;
        }

        stats.processing_time_ms = start_time.elapsed().as_millis();
        info!(
            "Converted {} tables: {} entries, {} keys ({} overwritten) in {}ms",
            stats.tables_processed,
            stats.entries_built,
            dictionary.len(),
            stats.keys_overwritten,
            stats.processing_time_ms
        );

        Ok((dictionary, stats))
    }
}
