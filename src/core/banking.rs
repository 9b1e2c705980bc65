//! Parser for cash, bank and credit-card records
//!
//! Lines are first offered to the common parser. Lines it does not claim are
//! handled here:
//!
//! | Tag | Field                                            |
//! |-----|--------------------------------------------------|
//! | `N` | check or reference number                        |
//! | `P` | payee                                            |
//! | `A` | address line (up to five, then address message)  |
//! | `L` | category                                         |
//! | `S` | split category, always opens a new split         |
//! | `E` | split memo                                       |
//! | `$` | split amount                                     |

use crate::config::Config;
use crate::core::common::{delegate_to_common, split_tag};
use crate::core::splits::{accumulate, SplitField};
use crate::core::traits::FieldParser;
use crate::parse::parse_amount_field;
use crate::types::{BankingTransaction, QifError};

/// Address lines beyond this count are treated as the address message
pub const MAX_ADDRESS_LINES: usize = 5;

impl BankingTransaction {
    fn push_address_line(&mut self, line: &str) {
        if self.address.len() >= MAX_ADDRESS_LINES {
            self.address_message = line.to_string();
        } else {
            self.address.push(line.to_string());
        }
    }

    fn push_split_field(&mut self, field: SplitField) {
        self.splits = accumulate(std::mem::take(&mut self.splits), field);
    }
}

impl FieldParser for BankingTransaction {
    fn parse_field(&mut self, line: &str, config: &Config) -> Result<(), QifError> {
        if !delegate_to_common(&mut self.common, line, config)? {
            return Ok(());
        }

        let (tag, value) = split_tag(line)?;

        match tag {
            'N' => self.number = value.to_string(),
            'P' => self.payee = value.to_string(),
            'A' => self.push_address_line(value),
            'L' => self.category = value.to_string(),
            'S' => self.push_split_field(SplitField::Category(value.to_string())),
            'E' => self.push_split_field(SplitField::Memo(value.to_string())),
            '$' => {
                let (amount, _) = parse_amount_field(value)?;
                self.push_split_field(SplitField::Amount(amount));
            }
            _ => return Err(QifError::unsupported_field(line)),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Split;
    use rstest::rstest;

    fn parse(lines: &[&str]) -> Result<BankingTransaction, QifError> {
        let mut tx = BankingTransaction::default();
        for line in lines {
            tx.parse_field(line, &Config::default())?;
        }
        Ok(tx)
    }

    #[test]
    fn test_check_number() {
        assert_eq!(parse(&["Nnum123"]).unwrap().number, "num123");
    }

    #[test]
    fn test_payee() {
        assert_eq!(parse(&["Pfred"]).unwrap().payee, "fred");
    }

    #[test]
    fn test_category() {
        assert_eq!(parse(&["Lcat"]).unwrap().category, "cat");
    }

    #[test]
    fn test_common_field_is_delegated() {
        let tx = parse(&["Mmemo", "T-99.50"]).unwrap();
        assert_eq!(tx.common.memo, "memo");
        assert_eq!(tx.common.amount, -9950);
    }

    #[test]
    fn test_five_line_address() {
        let tx = parse(&["Aa1", "Aa2", "Aa3", "Aa4", "Aa5"]).unwrap();
        assert_eq!(tx.address, vec!["a1", "a2", "a3", "a4", "a5"]);
        assert_eq!(tx.address_message, "");
    }

    #[test]
    fn test_six_line_address() {
        let tx = parse(&["Aa1", "Aa2", "Aa3", "Aa4", "Aa5", "Amsg"]).unwrap();
        assert_eq!(tx.address, vec!["a1", "a2", "a3", "a4", "a5"]);
        assert_eq!(tx.address_message, "msg");
    }

    #[test]
    fn test_empty_address_lines_count() {
        let tx = parse(&["AP.O. Box 27027", "ATucson, AZ", "A85726", "A", "A"]).unwrap();
        assert_eq!(
            tx.address,
            vec!["P.O. Box 27027", "Tucson, AZ", "85726", "", ""]
        );
    }

    #[test]
    fn test_splits() {
        let tx = parse(&["Scat1", "Ememo1", "$12.99", "$3.99", "Ememo3"]).unwrap();

        assert_eq!(
            tx.splits,
            vec![
                Split {
                    category: Some("cat1".to_string()),
                    memo: Some("memo1".to_string()),
                    amount: Some(1299),
                },
                Split {
                    category: None,
                    memo: None,
                    amount: Some(399),
                },
                Split {
                    category: None,
                    memo: Some("memo3".to_string()),
                    amount: None,
                },
            ]
        );
    }

    #[test]
    fn test_split_amount_accepts_thousands_separator() {
        let tx = parse(&["Sbig", "$-1,000.00"]).unwrap();
        assert_eq!(tx.splits[0].amount, Some(-100000));
    }

    #[rstest]
    #[case::empty("", QifError::EmptyLine)]
    #[case::unknown_tag("Zzz", QifError::unsupported_field("Zzz"))]
    #[case::investment_tag("YACME", QifError::unsupported_field("YACME"))]
    #[case::bad_split_amount("$12", QifError::invalid_amount("12"))]
    #[case::bad_common_field("T1.234", QifError::invalid_amount("1.234"))]
    fn test_errors(#[case] line: &str, #[case] expected: QifError) {
        assert_eq!(parse(&[line]), Err(expected));
    }
}
