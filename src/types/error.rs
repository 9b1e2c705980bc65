//! Error types for the QIF reader
//!
//! This module defines all error types that can occur while reading a file.
//! Errors carry the offending text so a failure can be diagnosed from the
//! message alone.
//!
//! # Error Categories
//!
//! - **Structural**: missing or unrecognized header, empty field line
//! - **Field-value**: malformed amount, date, cleared status or decimal.
//!   The record being built is abandoned.
//! - **Unsupported field**: a tag no parser claims. The common parser uses
//!   this as a signal to fall back to a specialized parser; it is fatal once
//!   a specialized parser returns it.
//! - **Truncation**: input ended inside a record. Carries the incomplete
//!   record so a tolerant caller can still use it.
//! - **File I/O**: file not found, read failures

use thiserror::Error;

use super::transaction::Transaction;

/// Main error type for the QIF reader
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QifError {
    /// The input was empty, so no header line could be read
    #[error("File header not found")]
    MissingHeader,

    /// The first line is not a recognized account type header
    #[error("Unsupported header type '{header}'")]
    UnsupportedHeader {
        /// The header line as read
        header: String,
    },

    /// A field line was empty
    #[error("Line is empty")]
    EmptyLine,

    /// No parser claims the line's field tag
    #[error("Cannot process line '{line}'")]
    UnsupportedField {
        /// The full line, tag included
        line: String,
    },

    /// Amount did not match `[+-]digits.d[d]`
    #[error("Invalid amount '{value}'")]
    InvalidAmount {
        /// The amount text
        value: String,
    },

    /// None of the accepted date layouts matched
    #[error("Failed to parse date '{value}'")]
    InvalidDate {
        /// The date text as it appeared in the file
        value: String,
    },

    /// Cleared status code outside `*`, `c`, `X`, `R` or empty
    #[error("Bad cleared status '{value}'")]
    InvalidClearedStatus {
        /// The status text
        value: String,
    },

    /// A shares, price or commission value is not a decimal number
    #[error("Invalid {field} '{value}'")]
    InvalidDecimal {
        /// Field name (shares, price or commission)
        field: &'static str,
        /// The value text
        value: String,
    },

    /// Input ended after at least one line of a record without a `^` terminator
    #[error("Unexpected end of input")]
    Truncated {
        /// The record that was being built when the input ended
        incomplete: Box<Transaction>,
    },

    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading input or writing output
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },
}

// Conversion from io::Error to QifError
impl From<std::io::Error> for QifError {
    fn from(error: std::io::Error) -> Self {
        QifError::Io {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to QifError
impl From<csv::Error> for QifError {
    fn from(error: csv::Error) -> Self {
        QifError::Io {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl QifError {
    /// Create an UnsupportedHeader error
    pub fn unsupported_header(header: &str) -> Self {
        QifError::UnsupportedHeader {
            header: header.to_string(),
        }
    }

    /// Create an UnsupportedField error
    pub fn unsupported_field(line: &str) -> Self {
        QifError::UnsupportedField {
            line: line.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(value: &str) -> Self {
        QifError::InvalidAmount {
            value: value.to_string(),
        }
    }

    /// Create an InvalidDate error
    pub fn invalid_date(value: &str) -> Self {
        QifError::InvalidDate {
            value: value.to_string(),
        }
    }

    /// Create an InvalidClearedStatus error
    pub fn invalid_cleared_status(value: &str) -> Self {
        QifError::InvalidClearedStatus {
            value: value.to_string(),
        }
    }

    /// Create an InvalidDecimal error
    pub fn invalid_decimal(field: &'static str, value: &str) -> Self {
        QifError::InvalidDecimal {
            field,
            value: value.to_string(),
        }
    }

    /// Create a Truncated error carrying the incomplete record
    pub fn truncated(incomplete: Transaction) -> Self {
        QifError::Truncated {
            incomplete: Box::new(incomplete),
        }
    }

    /// Whether this is the end-of-input-inside-a-record condition
    pub fn is_truncated(&self) -> bool {
        matches!(self, QifError::Truncated { .. })
    }

    /// The incomplete record of a truncation, `None` for every other error
    pub fn incomplete(&self) -> Option<&Transaction> {
        match self {
            QifError::Truncated { incomplete } => Some(incomplete),
            _ => None,
        }
    }

    /// Consume a truncation and return its incomplete record
    pub fn into_incomplete(self) -> Option<Transaction> {
        match self {
            QifError::Truncated { incomplete } => Some(*incomplete),
            _ => None,
        }
    }
}
