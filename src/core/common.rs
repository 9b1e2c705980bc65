//! Parser for the fields shared by every transaction family
//!
//! | Tag       | Field                                  |
//! |-----------|----------------------------------------|
//! | `D`       | date                                   |
//! | `T` / `U` | amount (`U` is a synonym of `T`)       |
//! | `M`       | memo                                   |
//! | `C`       | cleared status                         |
//!
//! Any other tag yields [`QifError::UnsupportedField`], which the
//! specialized parsers treat as their cue to try the line themselves.

use crate::config::Config;
use crate::core::traits::FieldParser;
use crate::parse::{parse_amount_field, parse_cleared_status, parse_date};
use crate::types::{CommonFields, QifError};

/// Split a field line into its tag character and raw value
///
/// # Errors
///
/// Returns [`QifError::EmptyLine`] if the line has no tag.
pub fn split_tag(line: &str) -> Result<(char, &str), QifError> {
    let mut chars = line.chars();
    let tag = chars.next().ok_or(QifError::EmptyLine)?;
    Ok((tag, chars.as_str()))
}

/// Run the common parser first and report whether the line is still unclaimed
///
/// Returns `Ok(true)` when the common parser rejected the line as an
/// unsupported field, `Ok(false)` when it consumed the line, and any other
/// error unchanged.
pub(crate) fn delegate_to_common(
    common: &mut CommonFields,
    line: &str,
    config: &Config,
) -> Result<bool, QifError> {
    match common.parse_field(line, config) {
        Ok(()) => Ok(false),
        Err(QifError::UnsupportedField { .. }) => Ok(true),
        Err(e) => Err(e),
    }
}

impl FieldParser for CommonFields {
    fn parse_field(&mut self, line: &str, config: &Config) -> Result<(), QifError> {
        let (tag, value) = split_tag(line)?;

        match tag {
            'D' => self.date = Some(parse_date(value, config.day_first)?),
            'T' | 'U' => {
                let (amount, amount_decimal) = parse_amount_field(value)?;
                self.amount = amount;
                self.amount_decimal = amount_decimal;
            }
            'M' => self.memo = value.to_string(),
            'C' => self.status = parse_cleared_status(value)?,
            _ => return Err(QifError::unsupported_field(line)),
        }

        Ok(())
    }
}
