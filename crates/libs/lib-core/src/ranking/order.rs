//! Ranking comparator for token picker entries.

use super::RankedEntry;
use std::cmp::Ordering;

/// Order two entries for display.
///
/// 1. The native asset comes first.
/// 2. Entries with a USD value come before entries without one.
/// 3. Higher USD value comes first.
/// 4. Symbols ascending, ignoring case.
///
/// Entries equal under all four rules compare `Equal`; callers must use a
/// stable sort so provider order decides.
pub fn compare_entries(a: &RankedEntry, b: &RankedEntry) -> Ordering {
    // `true` sorts after `false`, so reverse to put the native asset first
    b.is_native
        .cmp(&a.is_native)
        .then_with(|| match (&a.usd_value, &b.usd_value) {
            (Some(a_usd), Some(b_usd)) => b_usd.cmp(a_usd),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
        .then_with(|| compare_symbols(&a.symbol, &b.symbol))
}

fn compare_symbols(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
