//! URL-embedded date fragment (spec §4.2 `extract_partial_url_date`):
//! `/YYYY/MM(/DD)?/` path components, missing fields defaulting to the
//! first day/month.

use std::sync::OnceLock;

use regex::Regex;

use crate::model::CalendarDate;

/// `/YYYY/MM/DD/`, the most specific form.
fn slash_ymd() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"/(19\d{2}|20\d{2})/(\d{1,2})/(\d{1,2})(?:/|\z)").unwrap())
}

/// `/YYYY-MM-DD/`, a single dash-joined path segment.
fn dash_ymd() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"/(19\d{2}|20\d{2})-(\d{2})-(\d{2})(?:/|\z)").unwrap())
}

/// `/YYYY/MM/`, day defaults to the first of the month.
fn slash_ym() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"/(19\d{2}|20\d{2})/(\d{1,2})/").unwrap())
}

/// Searches `url` for a `/YYYY/MM(/DD)?/` or `/YYYY-MM-DD/` path component
/// and returns the corresponding date, with a missing day defaulted to `1`.
/// Rejects matches whose month or day falls outside the calendar range, and
/// does not accept a dash-joined year-month with no day (only the slash
/// form supports that reduced precision).
pub fn extract_partial_url_date(url: &str) -> Option<CalendarDate> {
    for pattern in [slash_ymd(), dash_ymd()] {
        if let Some(caps) = pattern.captures(url) {
            let year: i32 = caps[1].parse().ok()?;
            let month: u32 = caps[2].parse().ok()?;
            let day: u32 = caps[3].parse().ok()?;
            if let Some(date) = CalendarDate::from_ymd_opt(year, month, day) {
                return Some(date);
            }
        }
    }
    if let Some(caps) = slash_ym().captures(url) {
        let year: i32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        return CalendarDate::from_ymd_opt(year, month, 1);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_ymd_path() {
        let d = extract_partial_url_date("https://testsite.org/2018/01/test").unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2018, 1, 1));
    }

    #[test]
    fn rejects_invalid_month() {
        assert!(extract_partial_url_date("https://testsite.org/2018/33/test").is_none());
    }

    #[test]
    fn year_month_day() {
        let d =
            extract_partial_url_date("http://example.com/category/2016/07/12/key-words").unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2016, 7, 12));
    }

    #[test]
    fn bare_year_is_not_enough() {
        assert!(extract_partial_url_date("http://example.com/2016/key-words").is_none());
    }

    #[test]
    fn year_month_only_defaults_day() {
        let d = extract_partial_url_date("http://example.com/blog/2016/07/key-words").unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2016, 7, 1));
    }

    #[test]
    fn rejects_bare_category_year() {
        assert!(extract_partial_url_date("http://example.com/category/2016/").is_none());
    }

    #[test]
    fn dash_joined_path_segment() {
        let d = extract_partial_url_date(
            "http://www.kreditwesen.org/widerstand-berlin/2012-11-29/keine-kurzung",
        )
        .unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2012, 11, 29));
    }

    #[test]
    fn rejects_dash_joined_year_month_only() {
        assert!(extract_partial_url_date(
            "http://www.kreditwesen.org/widerstand-berlin/2012-11/keine-kurzung"
        )
        .is_none());
    }

    #[test]
    fn rejects_out_of_range_dash_fields() {
        assert!(
            extract_partial_url_date("http://www.kreditwesen.org/widerstand-berlin/6666-42-87/")
                .is_none()
        );
    }
}
