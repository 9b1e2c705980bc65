//! QIF Reader CLI
//!
//! Command-line interface for converting Quicken Interchange Format files
//! to CSV.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- statement.qif > statement.csv
//! cargo run -- --day-first statement.qif > statement.csv
//! RUST_LOG=debug cargo run -- --allow-truncated statement.qif > statement.csv
//! ```
//!
//! The program reads every record from the input file and writes one CSV
//! row per transaction to stdout. Log output goes to stderr and is
//! controlled by `RUST_LOG`.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, unsupported header, malformed field, truncated input, etc.)

use qif_reader::cli;
use qif_reader::pipeline;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = cli::parse_args();

    let mut output = std::io::stdout();
    if let Err(e) = pipeline::process(&args.input_file, &mut output, &args.to_options()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
