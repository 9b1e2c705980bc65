//! Streaming QIF reader
//!
//! Reads the header once, then builds one transaction per `^`-terminated
//! record. Lines are pulled from any [`BufRead`] source on demand and are
//! never replayed.
//!
//! ```no_run
//! use qif_reader::QifReader;
//! use std::path::Path;
//!
//! let mut reader = QifReader::open(Path::new("statement.qif")).unwrap();
//! for result in reader.by_ref() {
//!     match result {
//!         Ok(tx) => println!("{:?} {}", tx.date(), tx.amount()),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Outcomes of a read
//!
//! - `Ok(Some(tx))` - a terminated record
//! - `Ok(None)` - input ended on a record boundary
//! - `Err(QifError::Truncated { .. })` - input ended inside a record; the
//!   error carries the incomplete record
//! - any other `Err` - the record is abandoned and the error propagated

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::core::RecordBuilder;
use crate::io::header::classify_header;
use crate::types::{AccountType, QifError, Transaction, TransactionFamily};

/// Line that ends every record
pub const RECORD_END: &str = "^";

/// Reader of QIF transactions
///
/// Holds the session state: whether the header has been read and which
/// account type it named. Not meant to be shared between threads.
#[derive(Debug)]
pub struct QifReader<R> {
    reader: R,
    buffer: Vec<u8>,
    config: Config,
    account_type: Option<AccountType>,
    line_number: usize,
    finished: bool,
}

impl QifReader<BufReader<File>> {
    /// Open a file with the default configuration
    pub fn open(path: &Path) -> Result<Self, QifError> {
        Self::open_with_config(path, Config::default())
    }

    /// Open a file with the given configuration
    ///
    /// # Errors
    ///
    /// Returns [`QifError::FileNotFound`] if the path does not exist and
    /// [`QifError::Io`] for any other failure to open it.
    pub fn open_with_config(path: &Path, config: Config) -> Result<Self, QifError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => QifError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => QifError::from(e),
        })?;

        Ok(Self::with_config(BufReader::new(file), config))
    }
}

impl<R: BufRead> QifReader<R> {
    /// Create a reader with the default configuration
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, Config::default())
    }

    /// Create a reader with the given configuration
    pub fn with_config(reader: R, config: Config) -> Self {
        QifReader {
            reader,
            buffer: Vec::new(),
            config,
            account_type: None,
            line_number: 0,
            finished: false,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Account type named by the header, `None` until the first read
    pub fn account_type(&self) -> Option<AccountType> {
        self.account_type
    }

    /// Family of the records this reader produces, `None` until the first read
    ///
    /// Every record returned by [`QifReader::read`] has this family, so
    /// callers can narrow with [`Transaction::as_banking`] or
    /// [`Transaction::as_investment`] accordingly.
    pub fn family(&self) -> Option<TransactionFamily> {
        self.account_type.map(AccountType::family)
    }

    /// Number of lines consumed so far, header included
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Next line without its `\n` or `\r\n` ending
    ///
    /// Bytes that are not valid UTF-8 (e.g. Windows-1252 accents) are
    /// replaced with U+FFFD rather than failing the whole read.
    fn next_line(&mut self) -> Result<Option<String>, QifError> {
        self.buffer.clear();
        if self.reader.read_until(b'\n', &mut self.buffer)? == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        if self.buffer.last() == Some(&b'\n') {
            self.buffer.pop();
            if self.buffer.last() == Some(&b'\r') {
                self.buffer.pop();
            }
        }

        let line = match String::from_utf8_lossy(&self.buffer) {
            Cow::Borrowed(line) => line.to_string(),
            Cow::Owned(line) => {
                warn!(line = self.line_number, "replaced invalid UTF-8 bytes");
                line
            }
        };

        Ok(Some(line))
    }

    fn parse_header(&mut self) -> Result<AccountType, QifError> {
        let line = self.next_line()?.ok_or(QifError::MissingHeader)?;
        let account_type = classify_header(&line)?;

        debug!(header = %line, family = %account_type.family(), "parsed file header");
        self.account_type = Some(account_type);

        Ok(account_type)
    }

    /// Read the next transaction
    ///
    /// The header is parsed on the first call.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(tx))` for a complete record
    /// * `Ok(None)` when no lines remain
    ///
    /// # Errors
    ///
    /// - header errors on the first call
    /// - any field error, abandoning the record
    /// - [`QifError::Truncated`] when input ends after at least one line of
    ///   a record with no terminator
    pub fn read(&mut self) -> Result<Option<Transaction>, QifError> {
        let account_type = match self.account_type {
            Some(account_type) => account_type,
            None => self.parse_header()?,
        };

        let mut builder = RecordBuilder::new(account_type.family());

        while let Some(line) = self.next_line()? {
            if line == RECORD_END {
                debug!(
                    line = self.line_number,
                    fields = builder.lines(),
                    "completed record"
                );
                return Ok(Some(builder.finish()));
            }

            if let Err(e) = builder.apply(&line, &self.config) {
                warn!(line = self.line_number, error = %e, "abandoning record");
                return Err(e);
            }
        }

        if builder.is_empty() {
            return Ok(None);
        }

        warn!(
            line = self.line_number,
            fields = builder.lines(),
            "input ended inside a record"
        );
        Err(builder.into_incomplete())
    }

    /// Read every remaining transaction
    ///
    /// Either all records are returned or the first error is; records read
    /// before an error are discarded.
    pub fn read_all(&mut self) -> Result<Vec<Transaction>, QifError> {
        let mut transactions = Vec::new();

        while let Some(transaction) = self.read()? {
            transactions.push(transaction);
        }

        info!(
            records = transactions.len(),
            lines = self.line_number,
            "read all records"
        );
        Ok(transactions)
    }
}

impl<R: BufRead> Iterator for QifReader<R> {
    type Item = Result<Transaction, QifError>;

    /// Yields records until input ends; stops for good after the first error
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.read() {
            Ok(Some(transaction)) => Some(Ok(transaction)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}
