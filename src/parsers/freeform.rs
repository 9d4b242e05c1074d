//! Free-text fallback parser (spec §4.2 `try_ymd_date`): the last Low-level
//! Parser tried, delegating to `dateparser` for date shapes the dedicated
//! numeric and locale parsers don't cover (weekday-qualified long forms,
//! RFC 2822/3339 timestamps, relative forms already resolved by the caller).

use chrono::Datelike;

use crate::model::CalendarDate;
use crate::parsers::locale::germanize_to_english;

/// `parse_freeform`: normalizes German month names to English, then hands
/// the fragment to `dateparser`. Any error (unrecognized shape, trailing
/// garbage) collapses to `None` — this parser never raises.
pub fn parse_freeform(fragment: &str) -> Option<CalendarDate> {
    let normalized = germanize_to_english(fragment);
    let parsed = dateparser::parse(&normalized).ok()?;
    CalendarDate::from_ymd_opt(parsed.year(), parsed.month(), parsed.day())
}
