//! Locale-aware long-form parsers (spec §4.2 `regex_parse_de`/`regex_parse_en`).
//!
//! Month name lookup tables are the only thing that differs between
//! locales (spec §9: "add a locale by adding a table and a parser entry —
//! no code path changes"); both long-form parsers share the same
//! day/ordinal/year regex skeleton.

use std::sync::OnceLock;

use regex::Regex;

use crate::model::CalendarDate;
use crate::parsers::numeric::expand_two_digit_year;

pub const GERMAN_MONTHS: &[(&str, u32)] = &[
    ("januar", 1),
    ("februar", 2),
    ("märz", 3),
    ("april", 4),
    ("mai", 5),
    ("juni", 6),
    ("juli", 7),
    ("august", 8),
    ("september", 9),
    ("oktober", 10),
    ("november", 11),
    ("dezember", 12),
];

pub const ENGLISH_MONTHS: &[(&str, u32)] = &[
    ("january", 1),
    ("jan", 1),
    ("february", 2),
    ("feb", 2),
    ("march", 3),
    ("mar", 3),
    ("april", 4),
    ("apr", 4),
    ("may", 5),
    ("june", 6),
    ("jun", 6),
    ("july", 7),
    ("jul", 7),
    ("august", 8),
    ("aug", 8),
    ("september", 9),
    ("sep", 9),
    ("sept", 9),
    ("october", 10),
    ("oct", 10),
    ("november", 11),
    ("nov", 11),
    ("december", 12),
    ("dec", 12),
];

fn month_lookup(table: &[(&str, u32)], name: &str) -> Option<u32> {
    let name = name.to_lowercase();
    table
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, n)| *n)
}

/// `D[.] Monat YYYY`, e.g. `3. Dezember 2008`.
fn german_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\b(\d{1,2})\.?\s+([A-Za-zÄÖÜäöü]+)\s+(\d{4})\b").unwrap()
    })
}

/// `regex_parse_de`: `D[.] Monat YYYY` with `Monat` a German month name.
/// Validates day/month combination (e.g. `33. Dezember 2008` is rejected).
pub fn regex_parse_de(fragment: &str) -> Option<CalendarDate> {
    let caps = german_pattern().captures(fragment)?;
    let day: u32 = caps[1].parse().ok()?;
    let month = month_lookup(GERMAN_MONTHS, &caps[2])?;
    let year: i32 = caps[3].parse().ok()?;
    CalendarDate::from_ymd_opt(year, month, day)
}

/// `[Weekday,] Month Dth, YYYY`, e.g. `Tuesday, March 26th, 2019`.
fn english_long_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)\b(?:[A-Za-z]+,\s*)?([A-Za-z]+)\s+(\d{1,2})(?:st|nd|rd|th)?,?\s+(\d{4})\b",
        )
        .unwrap()
    })
}

/// `M/D/YYYY`, assuming month-day-year order.
fn english_slash_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b(\d{1,2})/(\d{1,2})/(\d{4})\b").unwrap())
}

/// `regex_parse_en`: `[Weekday,] Month Dth, YYYY` or `M/D/YYYY`
/// (month-day-year order). Ordinal suffixes are optional.
pub fn regex_parse_en(fragment: &str) -> Option<CalendarDate> {
    if let Some(caps) = english_long_pattern().captures(fragment) {
        if let Some(month) = month_lookup(ENGLISH_MONTHS, &caps[1]) {
            let day: u32 = caps[2].parse().ok()?;
            let year: i32 = caps[3].parse().ok()?;
            if let Some(date) = CalendarDate::from_ymd_opt(year, month, day) {
                return Some(date);
            }
        }
    }
    if let Some(caps) = english_slash_pattern().captures(fragment) {
        let month: u32 = caps[1].parse().ok()?;
        let day: u32 = caps[2].parse().ok()?;
        let year: i32 = caps[3].parse().ok()?;
        return CalendarDate::from_ymd_opt(year, month, day);
    }
    None
}

/// Translates recognized German month names to their English equivalents so
/// the free-text fallback (`dateparser`, English-only) can still make sense
/// of German long-form text — the only locale bridging the fallback needs,
/// per spec §9's "isolate behind a narrow interface" guidance.
pub fn germanize_to_english(text: &str) -> String {
    let mut out = text.to_string();
    for (de, month_num) in GERMAN_MONTHS {
        if let Some((en, _)) = ENGLISH_MONTHS.iter().find(|(_, n)| n == month_num) {
            // Case-insensitive whole-word replace without pulling in a
            // second regex compile per call; months are rare per fragment.
            out = replace_case_insensitive(&out, de, en);
        }
    }
    out
}

fn replace_case_insensitive(haystack: &str, needle: &str, replacement: &str) -> String {
    let lower_haystack = haystack.to_lowercase();
    let lower_needle = needle.to_lowercase();
    match lower_haystack.find(&lower_needle) {
        Some(idx) => {
            let mut result = haystack[..idx].to_string();
            result.push_str(replacement);
            result.push_str(&haystack[idx + needle.len()..]);
            result
        }
        None => haystack.to_string(),
    }
}

#[allow(dead_code)]
pub(crate) fn pivot_two_digit_year(yy: i32) -> i32 {
    expand_two_digit_year(yy)
}
