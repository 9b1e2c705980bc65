//! QIF Reader Library
//! # Overview
//!
//! This library reads Quicken Interchange Format (QIF) files: a line
//! oriented text format where the first line names the account type and
//! every following line is a one-letter field tag and its value. Records
//! end with a `^` line.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (Transaction, Split, QifError, etc.)
//! - [`parse`] - Value parsers for amounts, dates and cleared status
//! - [`core`] - Field parsing:
//!   - [`core::common`] - Fields shared by every record (D, T/U, M, C)
//!   - [`core::banking`] - Cash, bank and credit card fields with splits
//!   - [`core::investment`] - Investment fields
//!   - [`core::builder`] - In-progress record assembly
//! - [`io`] - Header classification, the streaming reader and CSV output
//! - [`pipeline`] - File to CSV conversion used by the binary
//! - [`cli`] - CLI arguments parsing
//!
//! # Example
//!
//! ```
//! use qif_reader::{QifReader, Transaction};
//!
//! let input = "!Type:Bank\nD6/ 1/94\nT-1,000.00\nPBank Of Mortgage\n^\n";
//! let mut reader = QifReader::new(input.as_bytes());
//!
//! let transactions = reader.read_all().unwrap();
//! assert_eq!(transactions.len(), 1);
//! assert_eq!(transactions[0].amount(), -100000);
//! assert!(matches!(transactions[0], Transaction::Banking(_)));
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod core;
pub mod io;
pub mod parse;
pub mod pipeline;
pub mod types;

pub use config::Config;
pub use io::{classify_header, write_transactions_csv, QifReader};
pub use pipeline::{process, ProcessOptions};
pub use types::{
    AccountType, BankingTransaction, ClearedStatus, CommonFields, InvestmentAction,
    InvestmentTransaction, QifError, Split, Transaction, TransactionFamily,
};
