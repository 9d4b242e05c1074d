//! Candidate Selector (spec §4.3): turns a [`FrequencyMap`] of candidate date
//! strings into a single chosen date, by first agreeing on the most common
//! year and then the most common full date within that year.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::model::{CalendarDate, FrequencyMap};

/// The plausible-year window's default bound (spec §4.3 step 1), used when a
/// caller has no narrower `min_date`/`max_date` configured.
pub const DEFAULT_MIN_YEAR: i32 = 1995;

/// `select_candidate`: discards candidates outside `[min_year, max_year]`,
/// picks the most frequent remaining year, discards within-year stragglers
/// below the 10%-of-mode-year threshold, then the most frequent date within
/// that year. Ties at either stage are broken towards the earliest date when
/// `original_date` is set (publication bias) and towards the latest
/// otherwise (last-modified bias). Returns `None` if nothing survives the
/// year-plausibility filter.
pub fn select_candidate(
    frequencies: &FrequencyMap,
    original_date: bool,
    min_year: i32,
    max_year: i32,
) -> Option<CalendarDate> {
    let parsed: Vec<(CalendarDate, usize)> = frequencies
        .iter()
        .filter_map(|(text, &count)| parse_iso(text).map(|d| (d, count)))
        .filter(|(date, _)| (min_year..=max_year).contains(&date.year()))
        .collect();
    if parsed.is_empty() {
        return None;
    }

    let mut year_counts: HashMap<i32, usize> = HashMap::new();
    for (date, count) in &parsed {
        *year_counts.entry(date.year()).or_insert(0) += count;
    }
    let max_year_count = *year_counts.values().max().expect("non-empty parsed set");
    let mut leading_years: Vec<i32> = year_counts
        .into_iter()
        .filter(|&(_, c)| c == max_year_count)
        .map(|(y, _)| y)
        .collect();
    leading_years.sort_unstable();
    let chosen_year = if original_date {
        *leading_years.first().expect("non-empty leading years")
    } else {
        *leading_years.last().expect("non-empty leading years")
    };

    let within_year: Vec<(CalendarDate, usize)> = parsed
        .into_iter()
        .filter(|(date, _)| date.year() == chosen_year)
        .collect();

    let mode_year_total: usize = within_year.iter().map(|(_, count)| count).sum();
    let threshold = (mode_year_total as f64 * 0.10).ceil() as usize;
    let threshold = threshold.max(2);
    let all_singletons = within_year.iter().all(|&(_, count)| count == 1);
    let survivors: Vec<(CalendarDate, usize)> = if all_singletons {
        within_year
    } else {
        within_year
            .into_iter()
            .filter(|&(_, count)| count >= threshold)
            .collect()
    };

    survivors
        .into_iter()
        .fold(None, |best: Option<(CalendarDate, usize)>, (date, count)| {
            match best {
                None => Some((date, count)),
                Some((best_date, best_count)) => {
                    if count > best_count
                        || (count == best_count && is_preferred(date, best_date, original_date))
                    {
                        Some((date, count))
                    } else {
                        Some((best_date, best_count))
                    }
                }
            }
        })
        .map(|(date, _)| date)
}

fn is_preferred(candidate: CalendarDate, incumbent: CalendarDate, original_date: bool) -> bool {
    if original_date {
        candidate < incumbent
    } else {
        candidate > incumbent
    }
}

fn parse_iso(text: &str) -> Option<CalendarDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .map(CalendarDate::from_naive)
}
