//! Types module
//!
//! Contains core data structures used throughout the crate.
//! This module organizes types into logical submodules:
//! - `account`: Account types named by the file header
//! - `transaction`: Parsed transaction records and their field enums
//! - `error`: Error types for the reader

pub mod account;
pub mod error;
pub mod transaction;

pub use account::{AccountType, TransactionFamily};
pub use error::QifError;
pub use transaction::{
    BankingTransaction, ClearedStatus, CommonFields, InvestmentAction, InvestmentTransaction,
    Split, Transaction,
};
