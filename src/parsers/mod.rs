//! Low-level Parsers (spec §4.2): a fixed battery of small, single-purpose
//! parsers tried in descending order of specificity. Each takes a short
//! fragment (never a whole document) and returns a validated date or `None`
//! — none of them ever panics or raises.

pub mod freeform;
pub mod locale;
pub mod numeric;
pub mod url;

use crate::model::CalendarDate;

/// Tries every Low-level Parser against `fragment`, in the fixed order
/// compact-numeric, German long-form, English long-form, free-text fallback.
/// Used by the Header/Body Examiners, which don't know ahead of time which
/// shape a given attribute or element's text will be in.
pub fn parse_any(fragment: &str) -> Option<CalendarDate> {
    let fragment = fragment.trim();
    if fragment.is_empty() {
        return None;
    }
    numeric::custom_parse(fragment)
        .or_else(|| locale::regex_parse_de(fragment))
        .or_else(|| locale::regex_parse_en(fragment))
        .or_else(|| freeform::parse_freeform(fragment))
}
