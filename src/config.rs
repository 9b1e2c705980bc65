//! Reader configuration
//!
//! The only setting is the order of day and month in numeric dates. Files
//! exported in the US write `mm/dd/yy`, so month-first is the default.

/// Configuration of a [`crate::QifReader`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Interpret numeric dates as `dd/mm/yy...` instead of `mm/dd/yy...`
    pub day_first: bool,
}

impl Config {
    pub fn new(day_first: bool) -> Self {
        Config { day_first }
    }

    /// Configuration for `dd/mm` files
    pub fn day_first() -> Self {
        Config::new(true)
    }

    /// Configuration for `mm/dd` files (the default)
    pub fn month_first() -> Self {
        Config::new(false)
    }
}
