//! Shared data model: calendar dates, candidates, and the frequency maps the
//! Candidate Selector and Pattern Searcher operate on.

use std::collections::HashMap;

use chrono::NaiveDate;

/// A day-precision calendar date, already resolved (no partial-date variant).
///
/// Month/day defaulting (spec: "missing fields default to the first day or
/// month") happens at construction time in the call sites that need it
/// (header/body probes, URL fragments) — by the time a `CalendarDate`
/// exists, it is always a complete, valid Gregorian date.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    /// Validates year/month/day ranges, leap years, and per-month day
    /// counts. Returns `None` for anything `chrono::NaiveDate` itself would
    /// reject (e.g. `1901-13-98`, Feb 29 in a non-leap year).
    pub fn from_ymd_opt(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(|_| CalendarDate { year, month, day })
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    pub fn day(self) -> u32 {
        self.day
    }

    pub fn to_naive(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .expect("CalendarDate is constructed only from valid y/m/d triples")
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        CalendarDate {
            year: date.year_field(),
            month: date.month_field(),
            day: date.day_field(),
        }
    }
}

// Small accessor shims so `from_naive` doesn't need to import chrono::Datelike
// at every call site across the crate.
trait NaiveDateFields {
    fn year_field(&self) -> i32;
    fn month_field(&self) -> u32;
    fn day_field(&self) -> u32;
}

impl NaiveDateFields for NaiveDate {
    fn year_field(&self) -> i32 {
        use chrono::Datelike;
        self.year()
    }
    fn month_field(&self) -> u32 {
        use chrono::Datelike;
        self.month()
    }
    fn day_field(&self) -> u32 {
        use chrono::Datelike;
        self.day()
    }
}

/// Which evidence tier a candidate fragment was pulled from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SourceTier {
    Header,
    Body,
    Url,
    Text,
}

/// Whether a header/body probe is looking for a publication or a
/// modification date (spec §4.5 distinguishes the two explicitly).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DateKind {
    Published,
    Modified,
    /// The probe doesn't distinguish (e.g. a bare `<time datetime>`).
    Unspecified,
}

/// A textual fragment believed to encode a date, tagged with where it came
/// from and (once run through the Low-level Parsers) its parse result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub text: String,
    pub tier: SourceTier,
    pub kind: DateKind,
    pub date: Option<CalendarDate>,
}

impl Candidate {
    pub fn new(text: impl Into<String>, tier: SourceTier, kind: DateKind) -> Self {
        Candidate {
            text: text.into(),
            tier,
            kind,
            date: None,
        }
    }
}

/// Mapping from candidate string to its occurrence count within the scanned
/// document, exactly the input shape `select_candidate` expects.
pub type FrequencyMap = HashMap<String, usize>;

/// Builds a [`FrequencyMap`] from an iterator of candidate strings, the way
/// `collections.Counter(allmatches)` does in the reference implementation.
pub fn build_frequency_map<I, S>(matches: I) -> FrequencyMap
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut map = FrequencyMap::new();
    for m in matches {
        *map.entry(m.into()).or_insert(0) += 1;
    }
    map
}
