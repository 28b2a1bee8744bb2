//! Symbology Tables Library
//!
//! Converts tab-separated military symbology reference tables into a single
//! JSON dictionary mapping symbol keys to descriptive metadata, for symbol
//! rendering and lookup libraries that load the mapping at startup.
//!
//! This library provides tools for:
//! - Parsing tab-separated tables, dropping headers and placeholder rows
//! - Mapping rows of legacy (2525B/C), current (2525D/E) and sector modifier
//!   tables to symbol keys and metadata
//! - Merging every registered table into one dictionary, last write wins
//!
//! ## Usage
//!
//! ```no_run
//! use symbol_tables::{ConverterConfig, TableConverter};
//!
//! # fn example() -> symbol_tables::Result<()> {
//! let converter = TableConverter::new(ConverterConfig::default());
//! let (dictionary, stats) = converter.convert()?;
//!
//! println!("{} keys from {} tables", dictionary.len(), stats.tables_processed);
//! print!("{}", dictionary.to_json()?);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod entry;
pub mod error;
pub mod models;
pub mod parser;
pub mod processor;
pub mod registry;

// Re-export commonly used types
pub use config::{ConverterConfig, RowPolicy};
pub use entry::EntryBuilder;
pub use error::{Result, SymbolTableError};
pub use models::{ConversionStats, Entry, Metadata, Row, TableDescriptor, TableVariant};
pub use processor::{SymbolDictionary, TableConverter};
