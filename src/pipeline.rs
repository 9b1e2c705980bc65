//! File-to-CSV processing pipeline
//!
//! Orchestrates a complete conversion: opens the input file, reads every
//! record through [`QifReader`], and writes them with
//! [`write_transactions_csv`]. This is what the binary runs.

use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

use crate::config::Config;
use crate::io::{write_transactions_csv, QifReader};
use crate::types::QifError;

/// Options for [`process`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessOptions {
    /// Reader configuration
    pub config: Config,

    /// Keep an unterminated final record instead of failing
    pub allow_truncated: bool,
}

/// Convert a QIF file to CSV
///
/// # Returns
///
/// The number of records written.
///
/// # Errors
///
/// Returns the first error from opening or reading the input, except a
/// truncated final record when `allow_truncated` is set. Nothing is
/// written on error.
pub fn process(
    input_path: &Path,
    output: &mut dyn Write,
    options: &ProcessOptions,
) -> Result<usize, QifError> {
    let mut reader = QifReader::open_with_config(input_path, options.config)?;
    let mut transactions = Vec::new();

    loop {
        match reader.read() {
            Ok(Some(transaction)) => transactions.push(transaction),
            Ok(None) => break,
            Err(e) if e.is_truncated() && options.allow_truncated => {
                warn!(
                    path = %input_path.display(),
                    "keeping unterminated final record"
                );
                transactions.extend(e.into_incomplete());
                break;
            }
            Err(e) => return Err(e),
        }
    }

    write_transactions_csv(&transactions, output)?;

    info!(
        path = %input_path.display(),
        records = transactions.len(),
        "converted file"
    );
    Ok(transactions.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary QIF file for testing
    fn create_temp_qif(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_process_writes_rows() {
        let file = create_temp_qif("!Type:Bank\nD6/ 2/94\nT75.00\nPDeposit\n^\n");
        let mut output = Vec::new();

        let written = process(file.path(), &mut output, &ProcessOptions::default()).unwrap();
        assert_eq!(written, 1);

        let output_str = String::from_utf8(output).unwrap();
        assert!(output_str.contains("banking,1994-06-02,75.00,,unknown,,Deposit"));
    }

    #[test]
    fn test_process_rejects_truncated_by_default() {
        let file = create_temp_qif("!Type:Bank\nT1.00\n^\nT2.00\n");
        let mut output = Vec::new();

        let result = process(file.path(), &mut output, &ProcessOptions::default());
        assert!(result.unwrap_err().is_truncated());
        assert!(output.is_empty());
    }

    #[test]
    fn test_process_keeps_truncated_when_allowed() {
        let file = create_temp_qif("!Type:Bank\nT1.00\n^\nT2.00\n");
        let mut output = Vec::new();
        let options = ProcessOptions {
            allow_truncated: true,
            ..ProcessOptions::default()
        };

        let written = process(file.path(), &mut output, &options).unwrap();
        assert_eq!(written, 2);

        let output_str = String::from_utf8(output).unwrap();
        assert!(output_str.contains("2.00"));
    }

    #[test]
    fn test_process_uses_day_first() {
        let file = create_temp_qif("!Type:Cash\nD02/01/2020\n^\n");
        let mut output = Vec::new();
        let options = ProcessOptions {
            config: Config::day_first(),
            ..ProcessOptions::default()
        };

        process(file.path(), &mut output, &options).unwrap();

        let output_str = String::from_utf8(output).unwrap();
        assert!(output_str.contains("2020-01-02"));
    }

    #[test]
    fn test_process_handles_missing_file() {
        let mut output = Vec::new();
        let result = process(
            Path::new("nonexistent.qif"),
            &mut output,
            &ProcessOptions::default(),
        );
        assert_eq!(
            result,
            Err(QifError::FileNotFound {
                path: "nonexistent.qif".to_string()
            })
        );
    }
}
