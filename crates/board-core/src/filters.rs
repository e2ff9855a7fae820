// File: crates/board-core/src/filters.rs
// Summary: Option lists for the filter dropdowns (brand, year, month) and month names.

use std::collections::{BTreeSet, HashSet};

use crate::record::Record;

pub const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// Label shown for "no selection" in the brand dropdown.
pub const ALL: &str = "All";

/// Distinct brands in first-seen order.
pub fn brands(records: &[Record]) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|r| !r.brand_name.is_empty() && seen.insert(r.brand_name.as_str()))
        .map(|r| r.brand_name.clone())
        .collect()
}

/// `All` followed by every brand.
pub fn brand_options(records: &[Record]) -> Vec<String> {
    std::iter::once(ALL.to_string()).chain(brands(records)).collect()
}

/// Distinct years, ascending.
pub fn years(records: &[Record]) -> Vec<i32> {
    records.iter().filter_map(Record::year).collect::<BTreeSet<_>>().into_iter().collect()
}

/// Months (1..=12) that have data in `year`, ascending.
pub fn months_for_year(records: &[Record], year: i32) -> Vec<u32> {
    records
        .iter()
        .filter(|r| r.year() == Some(year))
        .filter_map(Record::month)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Name for month number 1..=12.
pub fn month_name(month: u32) -> Option<&'static str> {
    MONTH_NAMES.get((month as usize).checked_sub(1)?).copied()
}

/// Month from a full name, a three-letter abbreviation or a number 1..=12.
pub fn parse_month(s: &str) -> Option<u32> {
    let s = s.trim();
    if let Ok(n) = s.parse::<u32>() {
        return (1..=12).contains(&n).then_some(n);
    }
    if s.len() < 3 {
        return None;
    }
    MONTH_NAMES
        .iter()
        .position(|m| m.eq_ignore_ascii_case(s) || (s.len() == 3 && m[..3].eq_ignore_ascii_case(s)))
        .map(|i| i as u32 + 1)
}
