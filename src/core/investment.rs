//! Parser for investment account records
//!
//! Lines are first offered to the common parser. Lines it does not claim are
//! handled here:
//!
//! | Tag | Field                                   |
//! |-----|-----------------------------------------|
//! | `N` | action code                             |
//! | `Y` | security name                           |
//! | `Q` | shares, exact decimal                   |
//! | `I` | price, exact decimal                    |
//! | `O` | commission, exact decimal               |

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::config::Config;
use crate::core::common::{delegate_to_common, split_tag};
use crate::core::traits::FieldParser;
use crate::parse::strip_thousands_separators;
use crate::types::{InvestmentAction, InvestmentTransaction, QifError};

fn parse_decimal(field: &'static str, value: &str) -> Result<Decimal, QifError> {
    Decimal::from_str(&strip_thousands_separators(value))
        .map_err(|_| QifError::invalid_decimal(field, value))
}

impl FieldParser for InvestmentTransaction {
    fn parse_field(&mut self, line: &str, config: &Config) -> Result<(), QifError> {
        if !delegate_to_common(&mut self.common, line, config)? {
            return Ok(());
        }

        let (tag, value) = split_tag(line)?;

        match tag {
            'N' => {
                self.action = InvestmentAction::from_code(value);
                self.action_text = value.to_string();
            }
            'Y' => self.security = value.to_string(),
            'Q' => self.shares = parse_decimal("shares", value)?,
            'I' => self.price = parse_decimal("price", value)?,
            'O' => self.commission = parse_decimal("commission", value)?,
            _ => return Err(QifError::unsupported_field(line)),
        }

        Ok(())
    }
}
