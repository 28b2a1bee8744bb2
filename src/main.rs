use clap::Parser;
use colored::*;
use std::process;
use symbol_tables::cli::{self, Args};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    cli::setup_logging(&args);

    match cli::run(&args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            // Nothing has been written to stdout at this point
            eprintln!("{} {:#}", "Error:".red().bold(), error);
            process::exit(1);
        }
    }
}
