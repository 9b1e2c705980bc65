//! Split accumulation
//!
//! Splits are not bracketed in the file. A record simply lists `S`
//! (category), `E` (memo) and `$` (amount) lines, and a new split has to be
//! inferred whenever a line would otherwise overwrite data already present
//! in the current one:
//!
//! | Field    | Current split                     | Starts a new split |
//! |----------|-----------------------------------|--------------------|
//! | any      | none                              | yes                |
//! | category | any                               | yes                |
//! | memo     | has a memo or an amount           | yes                |
//! | memo     | otherwise                         | no                 |
//! | amount   | has an amount                     | yes                |
//! | amount   | otherwise                         | no                 |

use crate::types::Split;

/// One split-related field value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitField {
    /// `S` line
    Category(String),
    /// `E` line
    Memo(String),
    /// `$` line, in minor currency units
    Amount(i64),
}

/// Whether `field` must open a new split rather than fill `current`
pub fn starts_new_split(current: Option<&Split>, field: &SplitField) -> bool {
    match (current, field) {
        (None, _) => true,
        (Some(_), SplitField::Category(_)) => true,
        (Some(split), SplitField::Memo(_)) => split.memo.is_some() || split.amount.is_some(),
        (Some(split), SplitField::Amount(_)) => split.amount.is_some(),
    }
}

/// Fold one field into the split list
///
/// Existing splits are never modified except the last one, and only when
/// the field fills an empty slot of it.
pub fn accumulate(mut splits: Vec<Split>, field: SplitField) -> Vec<Split> {
    if starts_new_split(splits.last(), &field) {
        splits.push(Split::default());
    }

    if let Some(current) = splits.last_mut() {
        match field {
            SplitField::Category(category) => current.category = Some(category),
            SplitField::Memo(memo) => current.memo = Some(memo),
            SplitField::Amount(amount) => current.amount = Some(amount),
        }
    }

    splits
}
