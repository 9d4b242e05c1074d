//! Header Examiner (spec §4.5): an ordered probe table over `<head>`
//! markup, the strongest evidence tier. Publication- and modification-
//! leaning probes are gathered independently; if both produce a candidate,
//! `config.original_date` decides which one wins.

use std::sync::OnceLock;

use scraper::Selector;

use crate::config::Config;
use crate::html::Document;
use crate::model::CalendarDate;
use crate::parsers;

/// Item 1: `property` values that encode a publication date.
const PUBLISHED_META_PROPERTIES: &[&str] = &[
    "article:published_time",
    "bday:date",
    "og:published_time",
    "og:article:published_time",
    "dc:created",
    "dc:date",
    "dcterms.created",
];

/// Item 2: `property` values that encode a last-modification date.
const MODIFIED_META_PROPERTIES: &[&str] = &[
    "og:updated_time",
    "dc:modified",
    "dcterms.modified",
    "lastmod",
];

/// Item 3 (publication-leaning half): `name`/`itemprop` variants.
const PUBLISHED_NAME_VARIANTS: &[&str] = &[
    "date",
    "pubdate",
    "publishdate",
    "publication_date",
    "date_published",
    "datepublished",
    "created",
    "datecreated",
];

/// Item 3 (modification-leaning half): `name`/`itemprop` variants.
const MODIFIED_NAME_VARIANTS: &[&str] = &["datemodified", "last-modified", "last_updated"];

/// `examine_header`: probes items 1–6 of spec §4.5's priority list (item 7,
/// `og:url`, is the Discovery Pipeline's job — it feeds the URL parser, not
/// the Low-level Parsers directly). Publication and modification evidence
/// are gathered independently; when both are found, `config.original_date`
/// picks the earliest or the latest.
pub fn examine_header(document: &Document, config: &Config) -> Option<CalendarDate> {
    let published = probe_published(document);
    let modified = probe_modified(document);

    match (published, modified) {
        (Some(p), Some(m)) => Some(if config.original_date {
            p.min(m)
        } else {
            p.max(m)
        }),
        (Some(p), None) => Some(p),
        (None, Some(m)) => Some(m),
        (None, None) => probe_copyright_year(document),
    }
}

fn probe_published(document: &Document) -> Option<CalendarDate> {
    probe_meta_properties(document, PUBLISHED_META_PROPERTIES)
        .or_else(|| probe_meta_properties(document, PUBLISHED_NAME_VARIANTS))
        .or_else(|| probe_bare_pubdate_attribute(document))
}

fn probe_modified(document: &Document) -> Option<CalendarDate> {
    probe_meta_properties(document, MODIFIED_META_PROPERTIES)
        .or_else(|| probe_meta_properties(document, MODIFIED_NAME_VARIANTS))
        .or_else(|| probe_http_equiv_last_modified(document))
}

fn probe_meta_properties(document: &Document, properties: &[&str]) -> Option<CalendarDate> {
    properties
        .iter()
        .find_map(|property| document.meta_content(property))
        .and_then(|content| parsers::parse_any(&content))
}

/// Item 4: `<meta http-equiv="last-modified" content="...">`.
fn probe_http_equiv_last_modified(document: &Document) -> Option<CalendarDate> {
    document.meta_elements().find_map(|el| {
        let is_last_modified = el
            .value()
            .attr("http-equiv")
            .map(|v| v.eq_ignore_ascii_case("last-modified"))
            .unwrap_or(false);
        if !is_last_modified {
            return None;
        }
        el.value().attr("content").and_then(parsers::parse_any)
    })
}

fn pubdate_attribute_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| Selector::parse("[pubdate]").expect("hardcoded selector is valid"))
}

/// Item 5: `pubdate` as a bare attribute, historically an HTML5 boolean
/// attribute on `<time>` marking the nearest `<article>`'s publish date.
fn probe_bare_pubdate_attribute(document: &Document) -> Option<CalendarDate> {
    document
        .select(pubdate_attribute_selector())
        .find_map(|el| {
            el.value()
                .attr("datetime")
                .or_else(|| el.value().attr("content"))
                .and_then(parsers::parse_any)
                .or_else(|| parsers::parse_any(&el.text().collect::<String>()))
        })
}

fn copyright_year_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| {
        Selector::parse(r#"[itemprop="copyrightYear"]"#).expect("hardcoded selector is valid")
    })
}

/// Item 6: `itemprop="copyrightYear"`, a bare year defaulted to January 1st.
fn probe_copyright_year(document: &Document) -> Option<CalendarDate> {
    document.select(copyright_year_selector()).find_map(|el| {
        let raw = el
            .value()
            .attr("content")
            .map(str::to_string)
            .unwrap_or_else(|| el.text().collect::<String>());
        let year: i32 = raw.trim().parse().ok()?;
        CalendarDate::from_ymd_opt(year, 1, 1)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_published_time_by_default() {
        let doc = Document::parse(
            r#"<html><head><meta property="article:published_time" content="2017-09-01"/></head></html>"#,
        );
        let d = examine_header(&doc, &Config::default()).unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2017, 9, 1));
    }

    #[test]
    fn finds_colon_form_dublin_core_properties() {
        let doc = Document::parse(
            r#"<html><head><meta property="dc:created" content="2015-04-12"/></head></html>"#,
        );
        let d = examine_header(&doc, &Config::default()).unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2015, 4, 12));
    }

    #[test]
    fn prefers_published_over_modified_when_original_date_set() {
        let doc = Document::parse(
            r#"<html><head>
                <meta property="og:updated_time" content="2018-01-01"/>
                <meta property="article:published_time" content="2017-09-01"/>
            </head></html>"#,
        );
        let config = Config {
            original_date: true,
            ..Config::default()
        };
        let d = examine_header(&doc, &config).unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2017, 9, 1));
    }

    #[test]
    fn prefers_modified_over_published_by_default() {
        let doc = Document::parse(
            r#"<html><head>
                <meta property="og:updated_time" content="2018-01-01"/>
                <meta property="article:published_time" content="2017-09-01"/>
            </head></html>"#,
        );
        let d = examine_header(&doc, &Config::default()).unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2018, 1, 1));
    }

    #[test]
    fn finds_http_equiv_last_modified() {
        let doc = Document::parse(
            r#"<html><head><meta http-equiv="last-modified" content="2014-06-05"/></head></html>"#,
        );
        let d = examine_header(&doc, &Config::default()).unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2014, 6, 5));
    }

    #[test]
    fn finds_bare_pubdate_attribute() {
        let doc = Document::parse(
            r#"<html><body><time pubdate datetime="2013-02-11">Feb 11</time></body></html>"#,
        );
        let d = examine_header(&doc, &Config::default()).unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2013, 2, 11));
    }

    #[test]
    fn falls_back_to_copyright_year() {
        let doc = Document::parse(
            r#"<html><body><span itemprop="copyrightYear">2012</span></body></html>"#,
        );
        let d = examine_header(&doc, &Config::default()).unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2012, 1, 1));
    }

    #[test]
    fn missing_header_evidence_yields_none() {
        let doc = Document::parse("<html><head></head></html>");
        assert!(examine_header(&doc, &Config::default()).is_none());
    }
}
