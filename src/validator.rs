//! Date Validator (spec §4.1): bounds-checking and format conversion on
//! already-formatted date strings — the last stop before a candidate is
//! allowed to leave the pipeline.

use chrono::format::{parse, Parsed, StrftimeItems};
use chrono::NaiveDate;

use crate::config::{DEFAULT_MIN_DATE, DEFAULT_OUTPUT_FORMAT};

/// A handful of `strftime` directives the reference implementation checks
/// for when deciding whether an output format is even date-shaped.
const RECOGNIZED_DIRECTIVES: &[&str] = &[
    "%Y", "%y", "%m", "%d", "%B", "%b", "%A", "%a", "%j", "%U", "%W", "%H", "%M", "%S",
];

/// `date_validator(date_string, format) -> bool` using the conventional
/// default bounds (1995-01-01 .. today). Use [`date_validator_bounded`] when
/// a [`crate::Config`] supplies its own `min_date`/`max_date`.
pub fn date_validator(date_string: &str, format: &str) -> bool {
    let (y, m, d) = DEFAULT_MIN_DATE;
    let min = NaiveDate::from_ymd_opt(y, m, d).expect("DEFAULT_MIN_DATE is valid");
    let max = chrono::Local::now().date_naive();
    date_validator_bounded(date_string, format, min, max)
}

/// Parses `date_string` under `format`; accepts iff the parse succeeds and
/// the resulting date lies inside `[min_date, max_date]`.
pub fn date_validator_bounded(
    date_string: &str,
    format: &str,
    min_date: NaiveDate,
    max_date: NaiveDate,
) -> bool {
    match parse_with_defaults(date_string, format) {
        Some(date) => date >= min_date && date <= max_date,
        None => false,
    }
}

/// Parses `date_string` under `format`, defaulting an unspecified month/day
/// to January 1st the way a year-only format (`%Y`) needs to, since
/// `chrono::NaiveDate::parse_from_str` otherwise rejects an underspecified
/// date outright.
fn parse_with_defaults(date_string: &str, format: &str) -> Option<NaiveDate> {
    let mut parsed = Parsed::new();
    parse(&mut parsed, date_string, StrftimeItems::new(format)).ok()?;
    if parsed.month.is_none() {
        parsed.set_month(1).ok()?;
    }
    if parsed.day.is_none() {
        parsed.set_day(1).ok()?;
    }
    parsed.to_naive_date().ok()
}

/// Rejects non-date-shaped formats: no recognized directive, or a directive
/// that produces empty output when applied to a known-good probe date.
pub fn output_format_validator(format: &str) -> bool {
    if format.is_empty() {
        return false;
    }
    if !RECOGNIZED_DIRECTIVES.iter().any(|d| format.contains(d)) {
        return false;
    }
    let probe = NaiveDate::from_ymd_opt(2000, 1, 1).expect("probe date is valid");
    let rendered = probe.format(format).to_string();
    !rendered.is_empty() && rendered != format
}

/// Strict re-format: fails when `in_format` does not match `date_string`.
pub fn convert_date(date_string: &str, in_format: &str, out_format: &str) -> Option<String> {
    let date = NaiveDate::parse_from_str(date_string, in_format).ok()?;
    Some(date.format(out_format).to_string())
}

/// Formats a [`crate::model::CalendarDate`] with the crate's default output
/// format, used for internal debug output only.
pub fn default_format(date: chrono::NaiveDate) -> String {
    date.format(DEFAULT_OUTPUT_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_in_range_dates() {
        assert!(date_validator("2016-01-01", "%Y-%m-%d"));
        assert!(date_validator("1998-08-08", "%Y-%m-%d"));
        assert!(date_validator("2001-12-31", "%Y-%m-%d"));
    }

    #[test]
    fn rejects_out_of_range_and_malformed() {
        assert!(!date_validator("1992-07-30", "%Y-%m-%d"));
        assert!(!date_validator("1901-13-98", "%Y-%m-%d"));
        assert!(!date_validator("202-01", "%Y-%m-%d"));
    }

    #[test]
    fn year_only_format() {
        assert!(!date_validator("1922", "%Y"));
        assert!(date_validator("2004", "%Y"));
    }

    #[test]
    fn output_format_validator_accepts_known_good() {
        assert!(output_format_validator("%Y-%m-%d"));
        assert!(output_format_validator("%d %B %Y"));
    }

    #[test]
    fn output_format_validator_rejects_junk() {
        assert!(!output_format_validator("ABC"));
        assert!(!output_format_validator("X%"));
        assert!(!output_format_validator(""));
    }

    #[test]
    fn convert_date_round_trips() {
        let converted = convert_date("2016-11-18", "%Y-%m-%d", "%d %B %Y").unwrap();
        assert_eq!(converted, "18 November 2016");
        let back = convert_date(&converted, "%d %B %Y", "%Y-%m-%d").unwrap();
        assert_eq!(back, "2016-11-18");
    }

    #[test]
    fn convert_date_rejects_mismatched_input_format() {
        assert!(convert_date("not a date", "%Y-%m-%d", "%d %B %Y").is_none());
    }
}
