//! Core parsing module
//!
//! This module contains the field-level parsing components:
//! - `traits` - The `FieldParser` seam shared by every record type
//! - `common` - Fields shared by all families (date, amount, memo, status)
//! - `banking` - Cash, bank and credit-card fields
//! - `splits` - Split inference for banking records
//! - `investment` - Investment account fields
//! - `builder` - Owner of the record currently being read

pub mod banking;
pub mod builder;
pub mod common;
pub mod investment;
pub mod splits;
pub mod traits;

pub use builder::RecordBuilder;
pub use splits::{accumulate, starts_new_split, SplitField};
pub use traits::FieldParser;
