//! Account types for the QIF reader
//!
//! The first line of every file names the kind of account the records belong
//! to. Each account type is served by one transaction family, which decides
//! the shape of the records the reader produces.

use serde::Serialize;
use std::fmt;

/// Account type named by a file header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountType {
    /// `!Type:Cash`
    Cash,

    /// `!Type:Bank`
    Bank,

    /// `!Type:CCard`
    CreditCard,

    /// `!Type:Invst`
    Investment,
}

/// The record shape produced for an account type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionFamily {
    /// Cash, bank and credit-card records
    Banking,

    /// Investment account records
    Investment,
}

impl AccountType {
    /// The header line that selects this account type
    pub fn header(self) -> &'static str {
        match self {
            AccountType::Cash => "!Type:Cash",
            AccountType::Bank => "!Type:Bank",
            AccountType::CreditCard => "!Type:CCard",
            AccountType::Investment => "!Type:Invst",
        }
    }

    /// The transaction family whose parser governs records of this account type
    pub fn family(self) -> TransactionFamily {
        match self {
            AccountType::Cash | AccountType::Bank | AccountType::CreditCard => {
                TransactionFamily::Banking
            }
            AccountType::Investment => TransactionFamily::Investment,
        }
    }
}

impl fmt::Display for TransactionFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionFamily::Banking => write!(f, "banking"),
            TransactionFamily::Investment => write!(f, "investment"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::cash(AccountType::Cash, TransactionFamily::Banking)]
    #[case::bank(AccountType::Bank, TransactionFamily::Banking)]
    #[case::credit_card(AccountType::CreditCard, TransactionFamily::Banking)]
    #[case::investment(AccountType::Investment, TransactionFamily::Investment)]
    fn test_account_type_family(#[case] account: AccountType, #[case] expected: TransactionFamily) {
        assert_eq!(account.family(), expected);
    }

    #[test]
    fn test_family_display() {
        assert_eq!(TransactionFamily::Banking.to_string(), "banking");
        assert_eq!(TransactionFamily::Investment.to_string(), "investment");
    }
}
