//! I/O module
//!
//! Handles reading QIF input and writing CSV output.
//!
//! # Components
//!
//! - `header` - Account type classification of the first line
//! - `reader` - Streaming record reader with iterator interface
//! - `csv_format` - CSV rendering of parsed transactions

pub mod csv_format;
pub mod header;
pub mod reader;

pub use csv_format::{to_csv_row, write_transactions_csv, CsvRow};
pub use header::classify_header;
pub use reader::{QifReader, RECORD_END};
