//! Record builder
//!
//! Owns the one record currently being read. Lines are applied one at a
//! time; the record is handed out only by [`RecordBuilder::finish`] at the
//! terminator or by [`RecordBuilder::into_incomplete`] when input runs out.
//! A field error leaves the caller free to drop the builder, which discards
//! the partial record with it.

use crate::config::Config;
use crate::core::traits::FieldParser;
use crate::types::{QifError, Transaction, TransactionFamily};

/// Builds one [`Transaction`] from its field lines
#[derive(Debug)]
pub struct RecordBuilder {
    record: Transaction,
    lines: usize,
}

impl RecordBuilder {
    /// Start an empty record of the given family
    pub fn new(family: TransactionFamily) -> Self {
        RecordBuilder {
            record: Transaction::empty(family),
            lines: 0,
        }
    }

    /// Apply one field line to the record
    pub fn apply(&mut self, line: &str, config: &Config) -> Result<(), QifError> {
        self.lines += 1;
        self.record.parse_field(line, config)
    }

    /// Number of lines applied so far
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Whether no line has been applied yet
    pub fn is_empty(&self) -> bool {
        self.lines == 0
    }

    /// Complete the record at its terminator
    pub fn finish(self) -> Transaction {
        self.record
    }

    /// Wrap the unterminated record in a truncation error
    pub fn into_incomplete(self) -> QifError {
        QifError::truncated(self.record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_counts_lines() {
        let mut builder = RecordBuilder::new(TransactionFamily::Banking);
        assert!(builder.is_empty());

        builder.apply("Mmemo", &Config::default()).unwrap();
        builder.apply("Pfred", &Config::default()).unwrap();
        assert_eq!(builder.lines(), 2);

        let tx = builder.finish();
        assert_eq!(tx.memo(), "memo");
        assert_eq!(tx.as_banking().unwrap().payee, "fred");
    }

    #[test]
    fn test_builder_uses_family_parser() {
        let mut builder = RecordBuilder::new(TransactionFamily::Investment);
        builder.apply("NBuy", &Config::default()).unwrap();
        assert_eq!(
            builder.apply("Pfred", &Config::default()),
            Err(QifError::unsupported_field("Pfred"))
        );
    }

    #[test]
    fn test_into_incomplete() {
        let mut builder = RecordBuilder::new(TransactionFamily::Banking);
        builder.apply("T-99.50", &Config::default()).unwrap();

        let error = builder.into_incomplete();
        assert!(error.is_truncated());
        assert_eq!(error.incomplete().map(Transaction::amount), Some(-9950));
    }
}
