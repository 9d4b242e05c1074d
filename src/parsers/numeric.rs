//! Compact numeric date forms (spec §4.2 `custom_parse`): `YYYYMMDD`,
//! `YYYY-MM-DD`, `DD.MM.YYYY`, and the symmetric slashed variants.
//!
//! Grammar recognition follows the teacher's nom-combinator shape (small
//! digit-count parsers composed with `.and`/`.and_ignore`); the ambiguity
//! policy from spec §4.2 is enforced by only ever trying one fixed field
//! order per separator shape, never both.

use nom::{character::complete as ncc, IResult, Parser};

use crate::helpers::ParserExt;
use crate::model::CalendarDate;

type StrResult<'a, T> = IResult<&'a str, T>;

fn take_n_digits(n: usize) -> impl FnMut(&str) -> StrResult<&str> {
    move |remain| nom::bytes::complete::take_while_m_n(n, n, |c: char| c.is_ascii_digit())(remain)
}

fn digits_as<T: std::str::FromStr>(n: usize) -> impl FnMut(&str) -> StrResult<T> {
    move |remain| {
        let (remain, raw) = take_n_digits(n)(remain)?;
        match raw.parse::<T>() {
            Ok(v) => Ok((remain, v)),
            Err(_) => Err(nom::Err::Error(nom::error::Error::new(
                remain,
                nom::error::ErrorKind::Digit,
            ))),
        }
    }
}

fn sep(c: char) -> impl FnMut(&str) -> StrResult<char> {
    move |remain| ncc::char(c)(remain)
}

/// Expands a two-digit year using the pivot policy from spec §4.2: years at
/// or below `current_two_digit_year + slack` map to the 2000s, otherwise the
/// 1900s.
pub fn expand_two_digit_year(yy: i32) -> i32 {
    const SLACK: i32 = 10;
    let current_two_digit = chrono::Local::now().date_naive();
    let current_yy = {
        use chrono::Datelike;
        current_two_digit.year().rem_euclid(100)
    };
    if yy <= current_yy + SLACK {
        2000 + yy
    } else {
        1900 + yy
    }
}

/// `YYYYMMDD`: eight digits, year-first only. The only no-separator form
/// accepted — a bare eight-digit run never gets a second, day-first
/// interpretation, which is exactly the ambiguity spec §4.2 rules out.
fn compact_ymd(input: &str) -> StrResult<'_, CalendarDate> {
    let year = digits_as::<i32>(4);
    let month = digits_as::<u32>(2);
    let day = digits_as::<u32>(2);
    year.and(month)
        .and(day)
        .complete()
        .map_opt(|((y, m), d)| CalendarDate::from_ymd_opt(y, m, d))
        .parse(input)
}

/// `YYYY[sep]MM[sep]DD` with `-`, `.` or `/` as the separator.
fn sep_ymd(input: &str, separator: char) -> StrResult<'_, CalendarDate> {
    let year = digits_as::<i32>(4);
    let month = digits_as::<u32>(2);
    let day = digits_as::<u32>(2);
    year.and_ignore(sep(separator))
        .and(month)
        .and_ignore(sep(separator))
        .and(day)
        .complete()
        .map_opt(|((y, m), d)| CalendarDate::from_ymd_opt(y, m, d))
        .parse(input)
}

/// `DD[sep]MM[sep]YYYY`, the European day-first convention, used whenever a
/// separator is present and the first group is two digits.
fn sep_dmy(input: &str, separator: char) -> StrResult<'_, CalendarDate> {
    let day = digits_as::<u32>(2);
    let month = digits_as::<u32>(2);
    let year = digits_as::<i32>(4);
    day.and_ignore(sep(separator))
        .and(month)
        .and_ignore(sep(separator))
        .and(year)
        .complete()
        .map_opt(|((d, m), y)| CalendarDate::from_ymd_opt(y, m, d))
        .parse(input)
}

/// `DD[sep]MM[sep]YY`, two-digit-year variant, pivot-expanded.
fn sep_dmy_short_year(input: &str, separator: char) -> StrResult<'_, CalendarDate> {
    let day = digits_as::<u32>(2);
    let month = digits_as::<u32>(2);
    let year = digits_as::<i32>(2);
    day.and_ignore(sep(separator))
        .and(month)
        .and_ignore(sep(separator))
        .and(year)
        .complete()
        .map_opt(|((d, m), yy)| CalendarDate::from_ymd_opt(expand_two_digit_year(yy), m, d))
        .parse(input)
}

/// `custom_parse`: recognizes the unambiguous compact numeric forms and
/// rejects anything with two plausible field orders.
pub fn custom_parse(fragment: &str) -> Option<CalendarDate> {
    let fragment = fragment.trim();

    if let Ok((_, date)) = compact_ymd(fragment) {
        return Some(date);
    }
    for separator in ['-', '.', '/'] {
        if let Ok((_, date)) = sep_ymd(fragment, separator) {
            return Some(date);
        }
        if let Ok((_, date)) = sep_dmy(fragment, separator) {
            return Some(date);
        }
        if let Ok((_, date)) = sep_dmy_short_year(fragment, separator) {
            return Some(date);
        }
    }
    None
}

// Small extension so the parsers above can read naturally left-to-right
// without an intermediate `.map(|...| ...)` on a Result.
trait MapOptExt<'a, O>: Parser<&'a str, O, nom::error::Error<&'a str>> + Sized {
    fn map_opt<O2>(
        self,
        f: impl Fn(O) -> Option<O2>,
    ) -> MapOpt<Self, O, impl Fn(O) -> Option<O2>> {
        MapOpt {
            inner: self,
            f,
            phantom: std::marker::PhantomData,
        }
    }
}
impl<'a, O, P: Parser<&'a str, O, nom::error::Error<&'a str>>> MapOptExt<'a, O> for P {}

struct MapOpt<P, O, F> {
    inner: P,
    f: F,
    phantom: std::marker::PhantomData<O>,
}

impl<'a, O, O2, P, F> Parser<&'a str, O2, nom::error::Error<&'a str>> for MapOpt<P, O, F>
where
    P: Parser<&'a str, O, nom::error::Error<&'a str>>,
    F: Fn(O) -> Option<O2>,
{
    fn parse(&mut self, input: &'a str) -> StrResult<'a, O2> {
        let (remain, out) = self.inner.parse(input)?;
        match (self.f)(out) {
            Some(v) => Ok((remain, v)),
            None => Err(nom::Err::Error(nom::error::Error::new(
                remain,
                nom::error::ErrorKind::Verify,
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_iso_compact() {
        let d = custom_parse("20041212").unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2004, 12, 12));
    }

    #[test]
    fn rejects_ambiguous_compact() {
        assert!(custom_parse("12122004").is_none());
    }

    #[test]
    fn accepts_iso_with_hyphens() {
        let d = custom_parse("2004-12-12").unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2004, 12, 12));
    }

    #[test]
    fn rejects_invalid_month_in_hyphenated_ymd() {
        assert!(custom_parse("1212-20-04").is_none());
    }

    #[test]
    fn accepts_dotted_dmy() {
        let d = custom_parse("12.12.2004").unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2004, 12, 12));
    }

    #[test]
    fn rejects_invalid_calendar_fields() {
        assert!(custom_parse("33.20.2004").is_none());
    }

    #[test]
    fn slashed_dmy_short_year() {
        let d = custom_parse("06/12/06").unwrap();
        assert_eq!((d.year(), d.month()), (2006, 12));
    }
}
