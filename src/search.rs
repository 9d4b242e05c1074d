//! Pattern Searcher (spec §4.4): the extensive free-text fallback. Scans
//! cleaned document text with three regex tiers of descending specificity,
//! builds a frequency map of every date each tier's matches parse to, and
//! hands that map to the Candidate Selector — falling through to a weaker
//! tier only if a stronger one yields nothing the Date Validator accepts.

use std::sync::OnceLock;

use regex::Regex;

use crate::model::{build_frequency_map, CalendarDate};
use crate::parsers;
use crate::select::select_candidate;

/// Tier 1: compact and separated numeric forms (`custom_parse`'s territory),
/// e.g. `2016-01-01`, `01.01.2016`, `01/01/2016`.
fn numeric_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b\d{4}[-./]\d{1,2}[-./]\d{1,2}\b|\b\d{1,2}[-./]\d{1,2}[-./]\d{4}\b")
            .unwrap()
    })
}

/// Tier 2: long-form dates, German or English, e.g. `3. Dezember 2008`,
/// `March 26th, 2019`.
fn long_form_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)\b\d{1,2}\.?\s+[A-Za-zÄÖÜäöü]+\s+\d{4}\b|\b[A-Za-z]+\s+\d{1,2}(?:st|nd|rd|th)?,?\s+\d{4}\b",
        )
        .unwrap()
    })
}

/// Tier 3: a bare year near a publication-date keyword (`Stand`, `Datum`,
/// `©`, `Copyright`), the weakest signal the searcher accepts. Defaults the
/// day/month to the first of January — spec §4.4 treats a bare-year hit as
/// a last resort, not a precise date.
fn keyword_year_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)(?:stand|datum|copyright|©)\D{0,10}(19\d{2}|20\d{2})").unwrap()
    })
}

fn search_pattern(text: &str, pattern: &Regex) -> Vec<String> {
    pattern
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Runs one regex tier end to end: collect raw matches, parse each into a
/// date, build the frequency map of the successfully parsed ones, and ask
/// the Candidate Selector to pick one.
fn run_tier(
    text: &str,
    pattern: &Regex,
    parse: impl Fn(&str) -> Option<CalendarDate>,
    original_date: bool,
    min_year: i32,
    max_year: i32,
) -> Option<CalendarDate> {
    let matches = search_pattern(text, pattern);
    if matches.is_empty() {
        return None;
    }
    let parsed_iso: Vec<String> = matches
        .iter()
        .filter_map(|m| parse(m))
        .map(|d| d.to_naive().format("%Y-%m-%d").to_string())
        .collect();
    let frequencies = build_frequency_map(parsed_iso);
    select_candidate(&frequencies, original_date, min_year, max_year)
}

/// `search_page`: tries the numeric tier, then the long-form tier, then the
/// bare-year-with-keyword tier, returning the first tier's pick. `min_year`
/// and `max_year` bound the Candidate Selector's year-plausibility filter.
pub fn search_page(text: &str, original_date: bool, min_year: i32, max_year: i32) -> Option<CalendarDate> {
    run_tier(
        text,
        numeric_pattern(),
        parsers::numeric::custom_parse,
        original_date,
        min_year,
        max_year,
    )
    .or_else(|| {
        run_tier(
            text,
            long_form_pattern(),
            parsers::parse_any,
            original_date,
            min_year,
            max_year,
        )
    })
    .or_else(|| {
        run_tier(
            text,
            keyword_year_pattern(),
            |fragment| {
                keyword_year_pattern()
                    .captures(fragment)
                    .and_then(|caps| caps[1].parse::<i32>().ok())
                    .and_then(|year| CalendarDate::from_ymd_opt(year, 1, 1))
            },
            original_date,
            min_year,
            max_year,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_most_frequent_numeric_date() {
        let text = "Published 2016-01-01. Updated 2016-01-01. See also 2015-06-01.";
        let d = search_page(text, false, 1995, 2030).unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2016, 1, 1));
    }

    #[test]
    fn falls_back_to_long_form_when_no_numeric_dates() {
        let text = "Dieser Beitrag stammt vom 3. Dezember 2008 und wurde seitdem nicht verändert.";
        let d = search_page(text, false, 1995, 2030).unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2008, 12, 3));
    }

    #[test]
    fn falls_back_to_keyword_year_as_last_resort() {
        let text = "Impressum. Copyright 2014 Example Corp. Alle Rechte vorbehalten.";
        let d = search_page(text, false, 1995, 2030).unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2014, 1, 1));
    }

    #[test]
    fn empty_text_yields_none() {
        assert!(search_page("", false, 1995, 2030).is_none());
    }
}
