//! Field value parsers
//!
//! Leaf parsers turning raw field text into typed values:
//!
//! - `amount` - decimal amounts to exact minor currency units
//! - `date` - day/month-ambiguous dates to calendar dates
//! - `status` - cleared-status codes

pub mod amount;
pub mod date;
pub mod status;

pub use amount::{parse_amount, parse_amount_field, strip_thousands_separators};
pub use date::{parse_date, parse_date_relative_to};
pub use status::parse_cleared_status;
