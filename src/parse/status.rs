//! Cleared-status parsing

use crate::types::{ClearedStatus, QifError};

/// Map a cleared-status code to a [`ClearedStatus`]
///
/// `*` and `c` are cleared, `X` and `R` reconciled, and an empty code means
/// not cleared. Any other code is an error.
pub fn parse_cleared_status(s: &str) -> Result<ClearedStatus, QifError> {
    match s {
        "*" | "c" => Ok(ClearedStatus::Cleared),
        "X" | "R" => Ok(ClearedStatus::Reconciled),
        "" => Ok(ClearedStatus::NotCleared),
        _ => Err(QifError::invalid_cleared_status(s)),
    }
}
