//! Date parsing
//!
//! The file format is vague about dates. Files seen in the wild use
//! `1 March 2017`, `1 March 17`, `03/01/2017`, `3/ 1/17` and `3/1/'7`, with
//! either day or month first in the numeric forms. Before matching, the text
//! is normalized:
//!
//! 1. a leading zero is stripped from each numeric component (`03` -> `3`)
//! 2. spaces are removed from purely numeric dates (`3/ 1/17` -> `3/1/17`)
//! 3. a trailing `'` plus one digit is expanded to a two-digit year in the
//!    current decade (`'7` -> `27` during the 2020s)
//!
//! Layouts are then tried in order and the first match wins.

use chrono::{Datelike, Local, NaiveDate};
use regex::Regex;
use std::sync::OnceLock;

use crate::types::QifError;

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Two-digit years at or above this value belong to the 1900s
const TWO_DIGIT_YEAR_PIVOT: i32 = 69;

#[derive(Debug, Clone, Copy)]
enum Form {
    /// `day monthname year`
    Long,
    /// `first/second/year`
    Numeric,
}

#[derive(Debug, Clone, Copy)]
enum YearWidth {
    Full,
    TwoDigit,
}

const LAYOUTS: [(Form, YearWidth); 4] = [
    (Form::Long, YearWidth::Full),
    (Form::Long, YearWidth::TwoDigit),
    (Form::Numeric, YearWidth::Full),
    (Form::Numeric, YearWidth::TwoDigit),
];

fn leading_zero_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(^|[^\d])0(\d)").expect("invalid leading zero regex"))
}

fn numeric_only_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[\d/ ]+$").expect("invalid numeric date regex"))
}

fn single_digit_year_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"'(\d)$").expect("invalid single digit year regex"))
}

fn long_form_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(\d{1,2}) ([A-Za-z]+) (\d+)$").expect("invalid long form date regex")
    })
}

fn numeric_form_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d+)$").expect("invalid numeric form date regex")
    })
}

/// Parse a date, expanding single-digit years relative to today
///
/// `day_first` selects `dd/mm` over `mm/dd` for the numeric forms.
pub fn parse_date(s: &str, day_first: bool) -> Result<NaiveDate, QifError> {
    parse_date_relative_to(s, day_first, Local::now().date_naive())
}

/// Parse a date, expanding single-digit years relative to `today`
pub fn parse_date_relative_to(
    s: &str,
    day_first: bool,
    today: NaiveDate,
) -> Result<NaiveDate, QifError> {
    let normalized = normalize(s, today);

    LAYOUTS
        .iter()
        .find_map(|&(form, width)| match_layout(&normalized, form, width, day_first))
        .ok_or_else(|| QifError::invalid_date(s))
}

fn normalize(s: &str, today: NaiveDate) -> String {
    let mut normalized = leading_zero_regex()
        .replace_all(s, "${1}${2}")
        .into_owned();

    if numeric_only_regex().is_match(&normalized) {
        normalized.retain(|c| c != ' ');
    }

    let decade = ((today.year() - 2000) / 10).rem_euclid(10);
    single_digit_year_regex()
        .replace(&normalized, format!("{decade}${{1}}"))
        .into_owned()
}

fn match_layout(s: &str, form: Form, width: YearWidth, day_first: bool) -> Option<NaiveDate> {
    let (day, month, year) = match form {
        Form::Long => {
            let captures = long_form_regex().captures(s)?;
            let day: u32 = captures[1].parse().ok()?;
            let month = month_from_name(&captures[2])?;
            (day, month, parse_year(&captures[3], width)?)
        }
        Form::Numeric => {
            let captures = numeric_form_regex().captures(s)?;
            let first: u32 = captures[1].parse().ok()?;
            let second: u32 = captures[2].parse().ok()?;
            let (day, month) = if day_first {
                (first, second)
            } else {
                (second, first)
            };
            (day, month, parse_year(&captures[3], width)?)
        }
    };

    NaiveDate::from_ymd_opt(year, month, day)
}

fn month_from_name(name: &str) -> Option<u32> {
    let name = name.to_ascii_lowercase();
    MONTH_NAMES
        .iter()
        .position(|month| *month == name)
        .map(|index| index as u32 + 1)
}

fn parse_year(digits: &str, width: YearWidth) -> Option<i32> {
    match width {
        YearWidth::Full if digits.len() == 4 => digits.parse().ok(),
        YearWidth::TwoDigit if digits.len() <= 2 => {
            let year: i32 = digits.parse().ok()?;
            Some(if year >= TWO_DIGIT_YEAR_PIVOT {
                1900 + year
            } else {
                2000 + year
            })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn in_2017() -> NaiveDate {
        date(2017, 6, 15)
    }

    #[rstest]
    #[case::long_full_year("1 March 2017")]
    #[case::long_two_digit_year("1 March 17")]
    #[case::long_single_digit_year("1 March '7")]
    #[case::long_lower_case("1 march 2017")]
    #[case::long_padded_day("01 March 2017")]
    #[case::numeric_full_year("03/01/2017")]
    #[case::numeric_two_digit_year("03/01/17")]
    #[case::numeric_single_digit_year("03/01/'7")]
    #[case::numeric_spaces("3/ 1/2017")]
    #[case::numeric_mixed_padding("03/1/2017")]
    #[case::numeric_no_padding("3/1/17")]
    fn test_parse_date_month_first(#[case] input: &str) {
        assert_eq!(
            parse_date_relative_to(input, false, in_2017()),
            Ok(date(2017, 3, 1))
        );
    }

    #[rstest]
    #[case::numeric_full_year("01/03/2017")]
    #[case::numeric_two_digit_year("01/03/17")]
    #[case::numeric_single_digit_year("01/03/'7")]
    #[case::numeric_spaces(" 1/ 3/2017")]
    #[case::long_form_ignores_order("1 March 2017")]
    fn test_parse_date_day_first(#[case] input: &str) {
        assert_eq!(
            parse_date_relative_to(input, true, in_2017()),
            Ok(date(2017, 3, 1))
        );
    }

    #[rstest]
    #[case::pivot_low("6/ 1/94", date(1994, 6, 1))]
    #[case::pivot_boundary("1/1/69", date(1969, 1, 1))]
    #[case::below_pivot("1/1/68", date(2068, 1, 1))]
    #[case::stripped_year("1/1/05", date(2005, 1, 1))]
    #[case::zero_year("12/31/00", date(2000, 12, 31))]
    fn test_two_digit_year_expansion(#[case] input: &str, #[case] expected: NaiveDate) {
        assert_eq!(parse_date_relative_to(input, false, in_2017()), Ok(expected));
    }

    #[test]
    fn test_single_digit_year_uses_current_decade() {
        let today = date(2026, 10, 19);
        assert_eq!(
            parse_date_relative_to("3/1/'7", false, today),
            Ok(date(2027, 3, 1))
        );
        assert_eq!(
            parse_date_relative_to("3/1/'0", false, today),
            Ok(date(2020, 3, 1))
        );
    }

    #[test]
    fn test_parse_date_full_year_ignores_clock() {
        let parsed = parse_date("12/25/2020", false);
        assert_eq!(parsed, Ok(date(2020, 12, 25)));
    }

    #[rstest]
    #[case::empty("")]
    #[case::garbage("yesterday")]
    #[case::month_out_of_range("13/01/2017")]
    #[case::day_out_of_range("02/30/2017")]
    #[case::three_digit_year("1/1/201")]
    #[case::dashes("2017-03-01")]
    #[case::abbreviated_month("1 Mar 2017")]
    #[case::unknown_month("1 Smarch 2017")]
    fn test_parse_date_rejects(#[case] input: &str) {
        assert_eq!(
            parse_date_relative_to(input, false, in_2017()),
            Err(QifError::invalid_date(input))
        );
    }

    #[test]
    fn test_day_first_swaps_numeric_order() {
        assert_eq!(
            parse_date_relative_to("13/01/2017", true, in_2017()),
            Ok(date(2017, 1, 13))
        );
        assert!(parse_date_relative_to("13/01/2017", false, in_2017()).is_err());
    }
}
