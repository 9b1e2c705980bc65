//! Header classification
//!
//! The first line of a file names the account type, e.g. `!Type:Bank`.
//! Matching is exact: no trimming, no case folding.

use crate::types::{AccountType, QifError};

const SUPPORTED_ACCOUNT_TYPES: [AccountType; 4] = [
    AccountType::Cash,
    AccountType::Bank,
    AccountType::CreditCard,
    AccountType::Investment,
];

/// Determine the account type from a header line
///
/// # Errors
///
/// Returns [`QifError::UnsupportedHeader`] naming the line if it is not one
/// of the supported headers.
pub fn classify_header(line: &str) -> Result<AccountType, QifError> {
    SUPPORTED_ACCOUNT_TYPES
        .into_iter()
        .find(|account_type| account_type.header() == line)
        .ok_or_else(|| QifError::unsupported_header(line))
}
