#![allow(dead_code)]

//! `pagedate` extracts a single best-guess publication (or last-modified)
//! date from an arbitrary HTML document.
//!
//! It is built for crawlers, archivers and search indexers that need to
//! attach a temporal stamp to documents whose authors encode dates
//! inconsistently across `<meta>` tags, microdata, structural markup, URLs
//! and free text. [`find_date`] walks a prioritized cascade of evidence
//! sources — headers, structured body markup, the URL, and finally free
//! text — and reconciles competing candidates into one validated date.
//!
//! ```
//! use pagedate::{find_date, Config};
//!
//! let html = r#"<html><head>
//!     <meta property="article:published_time" content="2017-09-01"/>
//! </head><body></body></html>"#;
//! assert_eq!(find_date(html, &Config::default()).as_deref(), Some("2017-09-01"));
//! ```

pub(crate) mod helpers;

mod config;
mod error;
mod examine;
mod html;
mod model;
mod parsers;
mod search;
mod select;
mod validator;

#[cfg(feature = "cli")]
pub mod net;

pub use config::Config;
pub use error::PageDateError;
pub use model::{Candidate, CalendarDate, DateKind, SourceTier};
pub use validator::{convert_date, date_validator, output_format_validator};

use chrono::Datelike;

use model::FrequencyMap;

/// Maximum accepted input length (spec §5): a backstop against pathological
/// input rather than a requirement of the regex engine itself, since
/// `regex`'s engine is already linear-time.
const MAX_INPUT_LEN: usize = 10_000_000;

/// The Discovery Pipeline (spec §4.7): normalizes `input`, then walks the
/// Header Examiner, Body Examiner, URL probe, and (if `extensive_search` is
/// enabled) the free-text Pattern Searcher, returning the first validated
/// date unless a later, stronger tier supersedes it.
///
/// Never panics and never raises on malformed input; every recoverable
/// condition collapses to `None`.
pub fn find_date(input: &str, config: &Config) -> Option<String> {
    if input.trim().is_empty() || input.len() > MAX_INPUT_LEN {
        return None;
    }
    if !validator::output_format_validator(&config.output_format) {
        return None;
    }

    let document = html::Document::parse(input);
    find_date_in_document(&document, config)
}

fn find_date_in_document(document: &html::Document, config: &Config) -> Option<String> {
    let (min_date, max_date) = (config.min_date(), config.max_date());
    let finalize = |date: model::CalendarDate| -> Option<String> {
        let formatted = date.to_naive().format(&config.output_format).to_string();
        validator::date_validator_bounded(&formatted, &config.output_format, min_date, max_date)
            .then_some(formatted)
    };

    if let Some(date) = examine::header::examine_header(document, config) {
        if let Some(out) = finalize(date) {
            return Some(out);
        }
    }

    let url = config
        .url
        .clone()
        .or_else(|| document.meta_content("og:url"));
    let url_candidate = url
        .as_deref()
        .and_then(parsers::url::extract_partial_url_date);

    if let Some(date) = examine::body::examine_body(document, config) {
        if let Some(out) = finalize(date) {
            return Some(out);
        }
    }

    if let Some(date) = url_candidate {
        if let Some(out) = finalize(date) {
            return Some(out);
        }
    }

    if config.extensive_search {
        let cleaned = document.cleaned_text();
        let (min_year, max_year) = (min_date.year(), max_date.year());
        if let Some(date) = search::search_page(&cleaned, config.original_date, min_year, max_year) {
            if let Some(out) = finalize(date) {
                return Some(out);
            }
        }
    }

    None
}

pub(crate) fn frequency_map_of<'a>(matches: impl Iterator<Item = &'a str>) -> FrequencyMap {
    model::build_frequency_map(matches)
}
