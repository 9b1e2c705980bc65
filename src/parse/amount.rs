//! Amount parsing
//!
//! Amounts are written as decimals with one or two fraction digits and an
//! optional sign, e.g. `-1,234.5` or `+12.99`. They are converted to an exact
//! count of minor currency units without going through floating point.

use regex::Regex;
use rust_decimal::Decimal;
use std::sync::OnceLock;

use crate::types::QifError;

fn amount_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([+-]?)(\d+)\.(\d{1,2})$").expect("invalid amount regex"))
}

/// Remove `,` thousands separators
pub fn strip_thousands_separators(s: &str) -> String {
    s.replace(',', "")
}

/// Convert an amount string such as `12.99` into minor currency units (1299)
///
/// The input must already be free of thousands separators. A single fraction
/// digit is padded, so `-12.9` is `-1290`.
///
/// # Errors
///
/// Returns [`QifError::InvalidAmount`] for anything other than an optional
/// sign, one or more digits, a point and one or two digits, or when the
/// value does not fit in an `i64`.
pub fn parse_amount(s: &str) -> Result<i64, QifError> {
    let captures = amount_regex()
        .captures(s)
        .ok_or_else(|| QifError::invalid_amount(s))?;

    let sign = &captures[1];
    let whole = &captures[2];
    let fraction = &captures[3];
    let padding = if fraction.len() == 1 { "0" } else { "" };

    format!("{sign}{whole}{fraction}{padding}")
        .parse::<i64>()
        .map_err(|_| QifError::invalid_amount(s))
}

/// Parse a raw amount field into minor units and an exact decimal
///
/// Thousands separators are stripped first. The decimal carries two places.
pub fn parse_amount_field(raw: &str) -> Result<(i64, Decimal), QifError> {
    let stripped = strip_thousands_separators(raw);
    let minor_units = parse_amount(&stripped).map_err(|_| QifError::invalid_amount(raw))?;
    Ok((minor_units, Decimal::new(minor_units, 2)))
}
