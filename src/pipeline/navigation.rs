// src/pipeline/navigation.rs
//! Day jump-list and filter options, read off the normalized tree.
//!
//! Day headings keep first-seen order (the feed is chronological; sorting labels
//! like "Fri 23 May" as text would scramble it). A heading whose text was already
//! seen marks a repeated day block, and its whole parent block is dropped.
//!
//! Venues come from a fresh text scan of every `div` starting with `"Venue: "`,
//! not from the nodes tagged during normalization; the prefix scan is looser and
//! can pick up lines outside event blocks.

use std::collections::{BTreeSet, HashSet};
use std::iter;

use crate::config::consts::{ALL_WILDCARD, NAV_ID_PREFIX};
use crate::core::sanitize::normalize_ws;
use crate::core::Document;
use crate::specs::programme::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateHeading {
    /// `nav-day-<n>`, zero-based in first-seen order.
    pub id: String,
    pub label: String,
}

/// Read-only summary handed to the page assembler.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationIndex {
    pub days: Vec<DateHeading>,
    /// `"- All -"` then the distinct labels (inner whitespace as in the markup), sorted.
    pub session_types: Vec<String>,
    /// `"- All -"` then the distinct venue names, sorted.
    pub venues: Vec<String>,
}

pub fn derive(doc: &mut Document) -> NavigationIndex {
    let days = index_days(doc);

    // Option values must stay substrings of the node's textContent, so only the ends are trimmed.
    let session_types = with_wildcard(
        doc.find_all(doc.root(), &SESSION_TYPE)
            .into_iter()
            .map(|n| s!(doc.text(n).trim())),
    );

    let venues = with_wildcard(doc.find_all(doc.root(), &ANY_DIV).into_iter().filter_map(|n| {
        let text = doc.text(n);
        if !text.starts_with(VENUE_PREFIX) {
            return None;
        }
        text.split_once(": ").map(|(_, name)| s!(name.trim_end()))
    }));

    logf!(
        "Navigation: {} days, {} session types, {} venues",
        days.len(),
        session_types.len() - 1,
        venues.len() - 1
    );
    NavigationIndex { days, session_types, venues }
}

/// Assign `nav-day-<n>` to each distinct heading; drop repeated day blocks.
pub fn index_days(doc: &mut Document) -> Vec<DateHeading> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut days = Vec::new();

    for heading in doc.find_all(doc.root(), &DAY_HEADING) {
        if !doc.is_attached(heading) {
            continue;
        }
        let text = doc.text(heading);
        if seen.contains(&text) {
            let block = doc.parent(heading).filter(|&p| p != doc.root()).unwrap_or(heading);
            logd!("Dropping repeated day block {:?}", normalize_ws(&text));
            doc.extract(block);
            continue;
        }
        let id = format!("{NAV_ID_PREFIX}{}", days.len());
        doc.set_attr(heading, "id", id.as_str());
        days.push(DateHeading { id, label: normalize_ws(&text) });
        seen.insert(text);
    }
    days
}

fn with_wildcard(items: impl Iterator<Item = String>) -> Vec<String> {
    let distinct: BTreeSet<String> = items.collect();
    iter::once(s!(ALL_WILDCARD)).chain(distinct).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_leads_sorted_distinct_values() {
        let got = with_wildcard(["Tent B", "Tent A", "Tent A"].into_iter().map(String::from));
        assert_eq!(got, vec!["- All -", "Tent A", "Tent B"]);
    }

    #[test]
    fn empty_input_still_has_wildcard() {
        assert_eq!(with_wildcard(iter::empty()), vec!["- All -"]);
    }
}
