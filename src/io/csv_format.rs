//! CSV rendering of parsed transactions
//!
//! Produces one row per transaction with a fixed set of columns covering
//! both families. Columns that do not apply to a record's family are left
//! empty. Amounts are written with two decimal places.

use csv::WriterBuilder;
use serde::Serialize;
use std::io::Write;

use crate::types::{
    BankingTransaction, ClearedStatus, InvestmentTransaction, QifError, Split, Transaction,
    TransactionFamily,
};

/// Column names, in output order
pub const CSV_HEADER: [&str; 15] = [
    "type",
    "date",
    "amount",
    "memo",
    "status",
    "number",
    "payee",
    "address",
    "category",
    "splits",
    "action",
    "security",
    "shares",
    "price",
    "commission",
];

/// One output row
///
/// Field order must match [`CSV_HEADER`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CsvRow {
    #[serde(rename = "type")]
    pub family: TransactionFamily,
    pub date: Option<String>,
    pub amount: String,
    pub memo: String,
    pub status: ClearedStatus,
    pub number: Option<String>,
    pub payee: Option<String>,
    pub address: Option<String>,
    pub category: Option<String>,
    pub splits: Option<String>,
    pub action: Option<String>,
    pub security: Option<String>,
    pub shares: Option<String>,
    pub price: Option<String>,
    pub commission: Option<String>,
}

fn format_minor_units(amount: i64) -> String {
    format!("{:.2}", rust_decimal::Decimal::new(amount, 2))
}

/// Render splits as `category|memo|amount` entries joined by `;`
fn format_splits(splits: &[Split]) -> String {
    splits
        .iter()
        .map(|split| {
            format!(
                "{}|{}|{}",
                split.category.as_deref().unwrap_or_default(),
                split.memo.as_deref().unwrap_or_default(),
                split.amount.map(format_minor_units).unwrap_or_default()
            )
        })
        .collect::<Vec<_>>()
        .join(";")
}

fn banking_columns(row: &mut CsvRow, tx: &BankingTransaction) {
    row.number = Some(tx.number.clone());
    row.payee = Some(tx.payee.clone());

    let mut address = tx.address.clone();
    if !tx.address_message.is_empty() {
        address.push(tx.address_message.clone());
    }
    row.address = Some(address.join(" / "));

    row.category = Some(tx.category.clone());
    row.splits = Some(format_splits(&tx.splits));
}

fn investment_columns(row: &mut CsvRow, tx: &InvestmentTransaction) {
    row.action = Some(
        tx.action
            .as_code()
            .map_or_else(|| tx.action_text.clone(), str::to_string),
    );
    row.security = Some(tx.security.clone());
    row.shares = Some(tx.shares.to_string());
    row.price = Some(tx.price.to_string());
    row.commission = Some(tx.commission.to_string());
}

/// Convert a transaction to its output row
pub fn to_csv_row(transaction: &Transaction) -> CsvRow {
    let common = transaction.common();

    let mut row = CsvRow {
        family: transaction.family(),
        date: common.date.map(|date| date.format("%Y-%m-%d").to_string()),
        amount: format!("{:.2}", common.amount_decimal),
        memo: common.memo.clone(),
        status: common.status,
        number: None,
        payee: None,
        address: None,
        category: None,
        splits: None,
        action: None,
        security: None,
        shares: None,
        price: None,
        commission: None,
    };

    match transaction {
        Transaction::Banking(tx) => banking_columns(&mut row, tx),
        Transaction::Investment(tx) => investment_columns(&mut row, tx),
    }

    row
}

/// Write transactions to CSV format
///
/// The header row is always written, even for an empty slice.
///
/// # Arguments
///
/// * `transactions` - Records to write, in order
/// * `output` - Mutable reference to a writer for outputting CSV
pub fn write_transactions_csv(
    transactions: &[Transaction],
    output: &mut dyn Write,
) -> Result<(), QifError> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(output);

    writer.write_record(CSV_HEADER)?;

    for transaction in transactions {
        writer.serialize(to_csv_row(transaction))?;
    }

    writer.flush()?;

    Ok(())
}
