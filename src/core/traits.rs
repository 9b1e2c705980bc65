//! Core trait for field-by-field record construction
//!
//! Every record type, and the set of fields shared by all of them, consumes
//! one tagged line at a time through [`FieldParser`]. Specialized parsers
//! call the common parser first and only handle a line themselves when it
//! reports [`QifError::UnsupportedField`].

use crate::config::Config;
use crate::types::{QifError, Transaction};

/// Trait for types that absorb one field line at a time
pub trait FieldParser {
    /// Parse one non-empty field line (`<tag><value>`) into `self`
    ///
    /// # Errors
    ///
    /// - [`QifError::EmptyLine`] if `line` is empty
    /// - [`QifError::UnsupportedField`] if the tag is not handled here
    /// - a field-value error if the tag is handled but the value is malformed
    fn parse_field(&mut self, line: &str, config: &Config) -> Result<(), QifError>;
}

impl FieldParser for Transaction {
    fn parse_field(&mut self, line: &str, config: &Config) -> Result<(), QifError> {
        match self {
            Transaction::Banking(tx) => tx.parse_field(line, config),
            Transaction::Investment(tx) => tx.parse_field(line, config),
        }
    }
}
