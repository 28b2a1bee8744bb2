//! Command-line interface components.

use crate::config::{ConverterConfig, RowPolicy};
use crate::models::TableDescriptor;
use crate::processor::TableConverter;
use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use colored::*;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "symbol-tables")]
#[command(about = "Convert military symbology TSV tables into a JSON symbol dictionary")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Directory containing the source tables (defaults to the bundled tsv-tables)
    #[arg(long, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Write the dictionary to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Keep going on rows with an unexpected column count
    #[arg(long)]
    pub lenient: bool,

    /// List the registered tables and exit
    #[arg(long)]
    pub list_tables: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Converter configuration from the command line
    pub fn to_config(&self) -> ConverterConfig {
        let config = match &self.data_dir {
            Some(dir) => ConverterConfig::default().with_data_dir(dir),
            None => ConverterConfig::default(),
        };

        if self.lenient {
            config.with_row_policy(RowPolicy::Lenient)
        } else {
            config
        }
    }
}

/// Set up structured logging on stderr; stdout carries only the JSON output
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("symbol_tables={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
}

/// Run the conversion (or the table listing) described by `args`
pub fn run(args: &Args) -> Result<()> {
    let converter = TableConverter::new(args.to_config());

    if args.list_tables {
        print!("{}", format_table_list(converter.tables()));
        return Ok(());
    }

    let (dictionary, _stats) = converter.convert()?;
    let json = dictionary.to_json()?;

    match &args.output {
        Some(path) => {
            fs::write(path, &json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            debug!("Wrote {} keys to {}", dictionary.len(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(json.as_bytes())
                .and_then(|_| stdout.flush())
                .context("Failed to write to stdout")?;
        }
    }

    Ok(())
}

/// One line per registered table, with a header
pub fn format_table_list(tables: &[TableDescriptor]) -> String {
    let mut out = format!(
        "{}\n",
        format!(
            "{:<36} {:<9} {:<4} {:<7} {}",
            "FILE", "STANDARD", "SET", "SECTOR", "VARIANT"
        )
        .bold()
    );

    for table in tables {
        out.push_str(&format!(
            "{:<36} {:<9} {:<4} {:<7} {}\n",
            table.filename,
            table.standard,
            table.symbol_set,
            table.sector.unwrap_or("-"),
            table.variant()
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    #[test]
    fn test_no_arguments_uses_defaults() {
        let args = Args::try_parse_from(["symbol-tables"]).unwrap();
        assert_eq!(args.get_log_level(), "warn");
        assert!(args.output.is_none());

        let config = args.to_config();
        assert_eq!(config.row_policy, RowPolicy::Strict);
        assert!(config.data_dir.ends_with("tsv-tables"));
    }

    #[test]
    fn test_flags_map_to_config() {
        let args = Args::try_parse_from([
            "symbol-tables",
            "--data-dir",
            "/srv/tables",
            "--lenient",
            "-vv",
        ])
        .unwrap();

        assert_eq!(args.get_log_level(), "debug");
        let config = args.to_config();
        assert_eq!(config.data_dir, PathBuf::from("/srv/tables"));
        assert_eq!(config.row_policy, RowPolicy::Lenient);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Args::try_parse_from(["symbol-tables", "-q", "-v"]).is_err());
        let args = Args::try_parse_from(["symbol-tables", "-q"]).unwrap();
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_table_list_has_one_line_per_table() {
        colored::control::set_override(false);
        let tables = [
            TableDescriptor::symbols("2525+c", "S", "2525c-warfighting.tsv"),
            TableDescriptor::modifiers("2525+d", "10", "1", "2525d-10-land-unit-sector-1.tsv"),
        ];
        let listing = format_table_list(&tables);
        let lines: Vec<&str> = listing.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("FILE"));
        assert!(lines[1].starts_with("2525c-warfighting.tsv"));
        assert!(lines[1].ends_with("legacy"));
        assert!(lines[2].contains(" 1 "));
        assert!(lines[2].ends_with("modifier"));
    }

    #[test]
    fn test_failed_run_writes_no_output() {
        let dir = tempfile::TempDir::new().unwrap();
        let output = dir.path().join("symbols.json");

        let args = Args::try_parse_from([
            OsString::from("symbol-tables"),
            OsString::from("--data-dir"),
            dir.path().as_os_str().to_owned(),
            OsString::from("--output"),
            output.as_os_str().to_owned(),
        ])
        .unwrap();

        // Registry tables are not present in the empty directory
        assert!(run(&args).is_err());
        assert!(!output.exists());
    }
}
