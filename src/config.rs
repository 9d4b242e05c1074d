//! Pipeline configuration (spec §3 "Configuration").

use std::io::Read;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::PageDateError;

/// The conventional (not canonical — see DESIGN.md OQ-1) lower bound used
/// when a caller doesn't supply `min_date`.
pub const DEFAULT_MIN_DATE: (i32, u32, u32) = (1995, 1, 1);

/// Default output format, `%Y-%m-%d`.
pub const DEFAULT_OUTPUT_FORMAT: &str = "%Y-%m-%d";

/// Pipeline options. Mirrors `find_date`'s keyword arguments in the
/// reference implementation one field at a time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Enables the free-text fallback and URL probing when the structured
    /// tiers (header/body) fail to produce a date.
    pub extensive_search: bool,
    /// Prefer the earliest plausible date (publication) over the latest
    /// (last modification).
    pub original_date: bool,
    /// `strftime`-style output pattern.
    pub output_format: String,
    /// Supplements the document when the body lacks structured evidence.
    pub url: Option<String>,
    /// Inclusive lower bound on accepted dates. Defaults to 1995-01-01.
    pub min_date: Option<NaiveDate>,
    /// Inclusive upper bound on accepted dates. Defaults to today.
    pub max_date: Option<NaiveDate>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            extensive_search: true,
            original_date: false,
            output_format: DEFAULT_OUTPUT_FORMAT.to_string(),
            url: None,
            min_date: None,
            max_date: None,
        }
    }
}

impl Config {
    pub fn min_date(&self) -> NaiveDate {
        self.min_date.unwrap_or_else(|| {
            let (y, m, d) = DEFAULT_MIN_DATE;
            NaiveDate::from_ymd_opt(y, m, d).expect("DEFAULT_MIN_DATE is a valid date")
        })
    }

    pub fn max_date(&self) -> NaiveDate {
        self.max_date.unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    /// Rejects configurations that can never yield a valid result, e.g. an
    /// inverted date range. This is the one place the crate raises instead
    /// of returning `None` — it's a build-time mistake, not a per-document
    /// condition.
    pub fn validate(&self) -> Result<(), PageDateError> {
        let (min, max) = (self.min_date(), self.max_date());
        if min > max {
            return Err(PageDateError::InvalidDateRange { min, max });
        }
        Ok(())
    }

    /// Loads a `Config` from JSON, the way an ambient config layer typically
    /// does for a CLI tool's `--config` flag.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, PageDateError> {
        let config: Config = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }
}
