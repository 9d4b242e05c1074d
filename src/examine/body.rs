//! Body Examiner (spec §4.6): probes structured `<body>` markup — JSON-LD,
//! `<time>`, `<abbr>`, `itemprop`-tagged elements — before falling back to a
//! handful of free-text date-announcing phrases (`Stand:`, `Datum:`, `©`).

use std::sync::OnceLock;

use chrono::Datelike;
use regex::Regex;
use scraper::Selector;
use serde_json::Value;

use crate::config::Config;
use crate::html::Document;
use crate::model::CalendarDate;
use crate::parsers;

const PUBLISHED_KEYS: &[&str] = &["datePublished", "dateCreated"];
const MODIFIED_KEYS: &[&str] = &["dateModified"];

/// `examine_body`: JSON-LD, then `<time>`, then `<abbr>`, then `itemprop`
/// hints, then — only when `config.extensive_search` is enabled — a narrow
/// set of free-text date phrases. Each step returns as soon as it finds a
/// fragment the Low-level Parsers accept.
pub fn examine_body(document: &Document, config: &Config) -> Option<CalendarDate> {
    examine_json_ld(document, config)
        .or_else(|| examine_time_elements(document))
        .or_else(|| examine_abbr_elements(document))
        .or_else(|| examine_itemprop(document, config))
        .or_else(|| config.extensive_search.then(|| examine_free_text(document)).flatten())
}

fn examine_json_ld(document: &Document, config: &Config) -> Option<CalendarDate> {
    let (first, second) = if config.original_date {
        (PUBLISHED_KEYS, MODIFIED_KEYS)
    } else {
        (MODIFIED_KEYS, PUBLISHED_KEYS)
    };
    for block in document.ld_json_blocks() {
        let Ok(value) = serde_json::from_str::<Value>(&block) else {
            continue;
        };
        if let Some(date) = find_json_ld_key(&value, first).or_else(|| find_json_ld_key(&value, second)) {
            return Some(date);
        }
    }
    None
}

/// Walks a JSON-LD document (which may nest objects under `@graph`) looking
/// for the first string value under any of `keys`.
fn find_json_ld_key(value: &Value, keys: &[&str]) -> Option<CalendarDate> {
    match value {
        Value::Object(map) => {
            for key in keys {
                if let Some(Value::String(s)) = map.get(*key) {
                    if let Some(date) = parsers::parse_any(s) {
                        return Some(date);
                    }
                }
            }
            map.values().find_map(|v| find_json_ld_key(v, keys))
        }
        Value::Array(items) => items.iter().find_map(|v| find_json_ld_key(v, keys)),
        _ => None,
    }
}

fn examine_time_elements(document: &Document) -> Option<CalendarDate> {
    document.time_elements().find_map(|el| {
        el.value()
            .attr("datetime")
            .and_then(parsers::parse_any)
            .or_else(|| parsers::parse_any(&el.text().collect::<String>()))
    })
}

fn examine_abbr_elements(document: &Document) -> Option<CalendarDate> {
    document.abbr_elements().find_map(|el| {
        el.value()
            .attr("data-utime")
            .and_then(parse_epoch_seconds)
            .or_else(|| el.value().attr("title").and_then(parsers::parse_any))
            .or_else(|| parsers::parse_any(&el.text().collect::<String>()))
    })
}

/// Parses a strict base-10 epoch-seconds string (rejecting anything with a
/// non-digit, e.g. `143809-1078`) into a [`CalendarDate`].
fn parse_epoch_seconds(raw: &str) -> Option<CalendarDate> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let seconds: i64 = raw.parse().ok()?;
    let datetime = chrono::DateTime::from_timestamp(seconds, 0)?;
    CalendarDate::from_ymd_opt(datetime.year(), datetime.month(), datetime.day())
}

fn itemprop_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| {
        Selector::parse("[itemprop], [class*=date], [class*=published], [class*=updated]")
            .expect("hardcoded selector is valid")
    })
}

fn examine_itemprop(document: &Document, config: &Config) -> Option<CalendarDate> {
    let keys: &[&str] = if config.original_date {
        &["datepublished", "datecreated"]
    } else {
        &["datemodified"]
    };
    document
        .select(itemprop_selector())
        .find_map(|el| {
            let is_relevant = el
                .value()
                .attr("itemprop")
                .map(|v| keys.iter().any(|k| v.eq_ignore_ascii_case(k)))
                .unwrap_or(true);
            if !is_relevant {
                return None;
            }
            el.value()
                .attr("content")
                .or_else(|| el.value().attr("datetime"))
                .and_then(parsers::parse_any)
                .or_else(|| parsers::parse_any(&el.text().collect::<String>()))
        })
}

/// A small, intentionally narrow set of date-announcing phrases, spec §4.6's
/// acknowledged weakest body-level signal.
fn free_text_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)(?:stand|datum|zuletzt aktualisiert|published on)\s*:?\s*([^\n<]{4,32})")
            .unwrap()
    })
}

fn examine_free_text(document: &Document) -> Option<CalendarDate> {
    let text = document
        .body()
        .map(|b| b.text().collect::<String>())
        .unwrap_or_default();
    free_text_pattern()
        .captures(&text)
        .and_then(|caps| parsers::parse_any(&caps[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_date_published_in_json_ld() {
        let doc = Document::parse(
            r#"<html><body><script type="application/ld+json">
                {"@context":"https://schema.org","@type":"Article","datePublished":"2019-03-26"}
            </script></body></html>"#,
        );
        let d = examine_body(&doc, &Config::default()).unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2019, 3, 26));
    }

    #[test]
    fn finds_date_in_graph_nested_json_ld() {
        let doc = Document::parse(
            r#"<html><body><script type="application/ld+json">
                {"@graph":[{"@type":"WebPage"},{"@type":"Article","dateModified":"2020-05-01"}]}
            </script></body></html>"#,
        );
        let config = Config {
            original_date: false,
            ..Config::default()
        };
        let d = examine_body(&doc, &config).unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2020, 5, 1));
    }

    #[test]
    fn finds_time_element_datetime_attribute() {
        let doc = Document::parse(r#"<html><body><time datetime="2016-11-18">18 Nov</time></body></html>"#);
        let d = examine_body(&doc, &Config::default()).unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2016, 11, 18));
    }

    #[test]
    fn finds_abbr_title_date() {
        let doc = Document::parse(
            r#"<html><body><abbr class="published" title="2016-01-01">Jan 1</abbr></body></html>"#,
        );
        let d = examine_body(&doc, &Config::default()).unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2016, 1, 1));
    }

    #[test]
    fn finds_abbr_data_utime_epoch_seconds() {
        let doc = Document::parse(
            r#"<html><body><abbr data-utime="1438091078" class="x">28 Jul</abbr></body></html>"#,
        );
        let d = examine_body(&doc, &Config::default()).unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2015, 7, 28));
    }

    #[test]
    fn rejects_non_numeric_data_utime() {
        let doc = Document::parse(
            r#"<html><body><abbr data-utime="143809-1078" class="x">junk</abbr></body></html>"#,
        );
        assert!(examine_body(&doc, &Config::default()).is_none());
    }

    #[test]
    fn falls_back_to_german_free_text_phrase() {
        let doc = Document::parse(
            "<html><body><p>Stand: 10.11.2017</p></body></html>",
        );
        let d = examine_body(&doc, &Config::default()).unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2017, 11, 10));
    }

    #[test]
    fn no_body_evidence_yields_none() {
        let doc = Document::parse("<html><body><p>Hello world.</p></body></html>");
        assert!(examine_body(&doc, &Config::default()).is_none());
    }

    #[test]
    fn free_text_is_skipped_when_extensive_search_disabled() {
        let doc = Document::parse("<html><body><p>Stand: 10.11.2017</p></body></html>");
        let config = Config {
            extensive_search: false,
            ..Config::default()
        };
        assert!(examine_body(&doc, &config).is_none());
    }
}
