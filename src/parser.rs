//! Tab-separated table parsing.
//!
//! Reads a source table, drops the column header and blank lines, splits the
//! remaining lines into cells and filters placeholder rows that do not
//! describe a symbol or modifier.

use crate::constants::{CELL_SEPARATOR, VERSION_EXTENSION_FLAG};
use crate::error::{Result, SymbolTableError};
use crate::models::Row;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;
use tracing::debug;

/// `{Reserved for future use}` and similar markers
static BRACED_PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\{[^}]*\}\s*$").expect("placeholder pattern is valid"));

/// Read a table file into memory
pub fn read_table(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| SymbolTableError::from_read(path, e))
}

/// Split table text into data rows, in source order
pub fn parse_rows(text: &str) -> Vec<Row> {
    text.lines()
        .enumerate()
        .skip(1) // column header
        .filter(|(_, line)| !line.is_empty())
        .map(|(index, line)| Row::new(index + 1, split_cells(line)))
        .filter(|row| !is_placeholder(row))
        .collect()
}

/// Read and parse a table file
pub fn parse_table(path: &Path) -> Result<Vec<Row>> {
    let text = read_table(path)?;
    let rows = parse_rows(&text);

    debug!("Parsed {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

fn split_cells(line: &str) -> Vec<String> {
    line.split(CELL_SEPARATOR).map(str::to_string).collect()
}

/// Whether a row only reserves space in the code table
pub fn is_placeholder(row: &Row) -> bool {
    row.cells.first().is_some_and(|first| {
        first.contains(VERSION_EXTENSION_FLAG) || BRACED_PLACEHOLDER.is_match(first)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn cells(row: &Row) -> Vec<&str> {
        row.cells.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_header_and_blank_lines_are_dropped() {
        let text = "Entity\tType\n\nFires\t\t\tPoint\t130000\t\n\n";
        let rows = parse_rows(text);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].line, 3);
        assert_eq!(cells(&rows[0]), vec!["Fires", "", "", "Point", "130000", ""]);
    }

    #[test]
    fn test_crlf_and_lf_line_endings() {
        let text = "A\tB\r\nx\ty\r\nz\tw\n";
        let rows = parse_rows(text);

        assert_eq!(rows.len(), 2);
        assert_eq!(cells(&rows[0]), vec!["x", "y"]);
        assert_eq!(cells(&rows[1]), vec!["z", "w"]);
    }

    #[test]
    fn test_placeholder_rows_are_filtered() {
        let text = "Modifier\tCategory\tCode\n\
                    {Reserved for future use}\t\t00\n\
                    Version Extension Flag\t\t99\n\
                    { Reserved }\tCapability\t98\n\
                    Air Mobile\tCapability\t01\n";
        let rows = parse_rows(text);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].cells[0], "Air Mobile");
        assert_eq!(rows[0].line, 5);
    }

    #[test]
    fn test_braces_inside_text_are_not_placeholders() {
        let row = Row::new(2, vec!["Launcher {Towed}".to_string()]);
        assert!(!is_placeholder(&row));

        let row = Row::new(2, vec!["{Reserved for future use}".to_string()]);
        assert!(is_placeholder(&row));
    }

    #[test]
    fn test_header_only_table_has_no_rows() {
        assert!(parse_rows("Entity\tType").is_empty());
        assert!(parse_rows("").is_empty());
    }

    #[test]
    fn test_parse_table_reads_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "Modifier\tCategory\tCode\nArea\tCapability\t02\n").unwrap();

        let rows = parse_table(temp_file.path()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(cells(&rows[0]), vec!["Area", "Capability", "02"]);
    }

    #[test]
    fn test_missing_table_is_file_not_found() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let err = parse_table(&temp_dir.path().join("absent.tsv")).unwrap_err();
        assert!(matches!(err, SymbolTableError::FileNotFound { .. }));
    }
}
