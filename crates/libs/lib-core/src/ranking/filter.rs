//! # Search Filter
//!
//! Case-insensitive substring search over ranked entries.
//!
//! User input is never interpreted as a regular expression: every
//! metacharacter is escaped before the pattern is built, so `"a.c"` only
//! matches the literal text `a.c`. Address-shaped input is first normalized
//! to its checksummed form so a pasted address matches however it was cased.

use super::RankedEntry;
use lib_utils::checksum_address;
use regex::{Regex, RegexBuilder};
use tracing::{debug, warn};

/// A prepared search query.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    text: String,
    address: Option<String>,
    pattern: Option<Regex>,
}

impl SearchQuery {
    /// Prepare `input` for matching.
    ///
    /// Never fails: if the escaped pattern cannot be compiled (e.g. it exceeds
    /// the regex size limit) matching falls back to a lowercase substring test.
    pub fn new(input: &str) -> Self {
        let address = checksum_address(input);
        let text = address.clone().unwrap_or_else(|| input.to_string());

        let pattern = match RegexBuilder::new(&regex::escape(&text))
            .case_insensitive(true)
            .build()
        {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                warn!(error = %e, len = text.len(), "Search pattern rejected, using plain substring match");
                None
            }
        };

        Self {
            text,
            address,
            pattern,
        }
    }

    /// The text actually searched for (checksummed when the input was an address).
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The checksummed address, when the input was a valid address.
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// True if the query occurs anywhere in `haystack`, ignoring case.
    pub fn matches(&self, haystack: &str) -> bool {
        match &self.pattern {
            Some(pattern) => pattern.is_match(haystack),
            None => haystack.to_lowercase().contains(&self.text.to_lowercase()),
        }
    }

    /// True if any string field of `entry` matches.
    ///
    /// Searched fields: name, symbol, address and the formatted balance. The
    /// USD value is numeric and is not searched; an absent balance is skipped.
    pub fn matches_entry(&self, entry: &RankedEntry) -> bool {
        [
            Some(entry.name.as_str()),
            Some(entry.symbol.as_str()),
            Some(entry.address.as_str()),
            entry.display_balance.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|field| self.matches(field))
    }
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self::new("")
    }
}

/// Keep the entries matching `query`, preserving their order.
pub fn filter_entries(entries: &[RankedEntry], query: &SearchQuery) -> Vec<RankedEntry> {
    if query.is_empty() {
        return entries.to_vec();
    }

    let filtered: Vec<RankedEntry> = entries
        .iter()
        .filter(|entry| query.matches_entry(entry))
        .cloned()
        .collect();

    debug!(
        query = %query.as_str(),
        total = entries.len(),
        matched = filtered.len(),
        "Token list filtered"
    );

    filtered
}
