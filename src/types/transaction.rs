//! Transaction-related types for the QIF reader
//!
//! This module defines the records produced by the reader. Every record
//! carries the [`CommonFields`] shared by all account types; the
//! [`Transaction`] sum type then adds the banking or investment specific
//! fields on top.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::account::TransactionFamily;

/// Cleared status of a transaction
///
/// `Unknown` is the value of a record that never carried a `C` line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClearedStatus {
    /// No status line was present
    #[default]
    Unknown,

    /// `*` or `c`
    Cleared,

    /// `X` or `R`
    Reconciled,

    /// An empty status line
    NotCleared,
}

/// Fields shared by every transaction family
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommonFields {
    /// Calendar date of the transaction, if a `D` line was present
    pub date: Option<NaiveDate>,

    /// Transaction value in minor currency units ($12.99 is 1299)
    pub amount: i64,

    /// Transaction value as an exact decimal
    pub amount_decimal: Decimal,

    /// Free-text description
    pub memo: String,

    /// Cleared status
    pub status: ClearedStatus,
}

/// A fragment of a banking transaction tagged with its own category and memo
///
/// Splits are never declared explicitly in the file; see
/// [`crate::core::splits`] for how they are inferred.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Split {
    /// Category of this split
    pub category: Option<String>,

    /// Description of this split
    pub memo: Option<String>,

    /// Split value in minor currency units
    pub amount: Option<i64>,
}

/// A record from a cash, bank or credit-card account
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BankingTransaction {
    /// Date, amount, memo and cleared status
    pub common: CommonFields,

    /// Check or reference number. May also hold words such as "Deposit",
    /// "Transfer", "ATM" or "EFT".
    pub number: String,

    /// Recipient of the transaction
    pub payee: String,

    /// At most five address lines for the payee
    pub address: Vec<String>,

    /// Extra message carried by a sixth address line, empty otherwise
    pub address_message: String,

    /// Category of the transaction
    pub category: String,

    /// Zero or more splits, in file order
    pub splits: Vec<Split>,
}

/// Action recorded on an investment transaction
///
/// Codes without an entry in the action table map to `Undefined`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum InvestmentAction {
    #[default]
    Undefined,
    Buy,
    BuyX,
    Sell,
    SellX,
    CapitalGainLong,
    CapitalGainLongX,
    CapitalGainMid,
    CapitalGainMidX,
    CapitalGainShort,
    CapitalGainShortX,
    Dividend,
    DividendX,
    InterestIncome,
    InterestIncomeX,
    ReinvestDividend,
    ReinvestInterest,
    ReinvestLong,
    ReinvestMid,
    ReinvestShort,
    Reprice,
    TransferIn,
    TransferOut,
    MiscExpense,
    MiscExpenseX,
    MiscIncome,
    MiscIncomeX,
    MarginInterest,
    MarginInterestX,
    ReturnOfCapital,
    ReturnOfCapitalX,
    StockSplit,
    SharesOut,
    SharesIn,
}

const ACTION_CODES: [(&str, InvestmentAction); 33] = [
    ("Buy", InvestmentAction::Buy),
    ("BuyX", InvestmentAction::BuyX),
    ("Sell", InvestmentAction::Sell),
    ("SellX", InvestmentAction::SellX),
    ("CGLong", InvestmentAction::CapitalGainLong),
    ("CGLongX", InvestmentAction::CapitalGainLongX),
    ("CGMid", InvestmentAction::CapitalGainMid),
    ("CGMidX", InvestmentAction::CapitalGainMidX),
    ("CGShort", InvestmentAction::CapitalGainShort),
    ("CGShortX", InvestmentAction::CapitalGainShortX),
    ("Div", InvestmentAction::Dividend),
    ("DivX", InvestmentAction::DividendX),
    ("IntInc", InvestmentAction::InterestIncome),
    ("IntIncX", InvestmentAction::InterestIncomeX),
    ("ReInvDiv", InvestmentAction::ReinvestDividend),
    ("ReInvInt", InvestmentAction::ReinvestInterest),
    ("ReInvLg", InvestmentAction::ReinvestLong),
    ("ReInvMd", InvestmentAction::ReinvestMid),
    ("ReInvSh", InvestmentAction::ReinvestShort),
    ("Reprice", InvestmentAction::Reprice),
    ("XIn", InvestmentAction::TransferIn),
    ("XOut", InvestmentAction::TransferOut),
    ("MiscExp", InvestmentAction::MiscExpense),
    ("MiscExpX", InvestmentAction::MiscExpenseX),
    ("MiscInc", InvestmentAction::MiscIncome),
    ("MiscIncX", InvestmentAction::MiscIncomeX),
    ("MargInt", InvestmentAction::MarginInterest),
    ("MargIntX", InvestmentAction::MarginInterestX),
    ("RtrnCap", InvestmentAction::ReturnOfCapital),
    ("RtrnCapX", InvestmentAction::ReturnOfCapitalX),
    ("StkSplit", InvestmentAction::StockSplit),
    ("ShrsOut", InvestmentAction::SharesOut),
    ("ShrsIn", InvestmentAction::SharesIn),
];

impl InvestmentAction {
    /// Look up an action code such as `"Buy"` or `"ReInvDiv"`
    ///
    /// Matching is exact. Unknown codes yield [`InvestmentAction::Undefined`]
    /// rather than an error.
    pub fn from_code(code: &str) -> Self {
        ACTION_CODES
            .iter()
            .find(|(known, _)| *known == code)
            .map(|(_, action)| *action)
            .unwrap_or_default()
    }

    /// The file code for this action, `None` for `Undefined`
    pub fn as_code(self) -> Option<&'static str> {
        ACTION_CODES
            .iter()
            .find(|(_, action)| *action == self)
            .map(|(code, _)| *code)
    }
}

/// A record from an investment account
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvestmentTransaction {
    /// Date, amount, memo and cleared status
    pub common: CommonFields,

    /// Action looked up from `action_text`
    pub action: InvestmentAction,

    /// Action code exactly as it appeared in the file
    pub action_text: String,

    /// Name of the stock, fund or other security
    pub security: String,

    /// Quantity of shares, or the split ratio for a stock split
    pub shares: Decimal,

    /// Price the action was executed at
    pub price: Decimal,

    /// Commission paid
    pub commission: Decimal,
}

/// A parsed record of either family
#[derive(Debug, Clone, PartialEq)]
pub enum Transaction {
    /// Record from a cash, bank or credit-card file
    Banking(BankingTransaction),
    /// Record from an investment file
    Investment(InvestmentTransaction),
}

impl Transaction {
    /// Create an empty record of the given family
    pub fn empty(family: TransactionFamily) -> Self {
        match family {
            TransactionFamily::Banking => Transaction::Banking(BankingTransaction::default()),
            TransactionFamily::Investment => {
                Transaction::Investment(InvestmentTransaction::default())
            }
        }
    }

    /// The family this record belongs to
    pub fn family(&self) -> TransactionFamily {
        match self {
            Transaction::Banking(_) => TransactionFamily::Banking,
            Transaction::Investment(_) => TransactionFamily::Investment,
        }
    }

    /// Fields shared by every family
    pub fn common(&self) -> &CommonFields {
        match self {
            Transaction::Banking(tx) => &tx.common,
            Transaction::Investment(tx) => &tx.common,
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.common().date
    }

    pub fn amount(&self) -> i64 {
        self.common().amount
    }

    pub fn amount_decimal(&self) -> Decimal {
        self.common().amount_decimal
    }

    pub fn memo(&self) -> &str {
        &self.common().memo
    }

    pub fn status(&self) -> ClearedStatus {
        self.common().status
    }

    /// Narrow to a banking record
    pub fn as_banking(&self) -> Option<&BankingTransaction> {
        match self {
            Transaction::Banking(tx) => Some(tx),
            Transaction::Investment(_) => None,
        }
    }

    /// Narrow to an investment record
    pub fn as_investment(&self) -> Option<&InvestmentTransaction> {
        match self {
            Transaction::Investment(tx) => Some(tx),
            Transaction::Banking(_) => None,
        }
    }
}
