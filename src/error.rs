//! Programmer-error surface.
//!
//! Per the discovery pipeline's error-handling policy, every *recoverable*
//! condition (bad input, unparseable format, no date found, out-of-range
//! candidate, ambiguous parse) collapses to `None` inside `find_date` and
//! never reaches this enum. `PageDateError` exists only for misconfiguration
//! a caller can fix at build time — a self-contradictory `Config`, or a
//! config file that doesn't deserialize.

use chrono::NaiveDate;

#[derive(Debug, thiserror::Error)]
pub enum PageDateError {
    #[error("min_date ({min}) is after max_date ({max})")]
    InvalidDateRange { min: NaiveDate, max: NaiveDate },

    #[error("failed to parse configuration: {0}")]
    Config(#[from] serde_json::Error),
}
