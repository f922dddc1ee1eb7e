// src/pipeline/normalize.rs
//! Event normalization.
//!
//! Walks every event in document order and, per event:
//! 1. reads its id from the first anchor (`product-id-<id>-…`) and rejects repeats,
//! 2. inserts an `<hr>` as its first child,
//! 3. tags the venue line with `class="venue"`,
//! 4. resolves date + time text to an instant and stores it as epoch millis in `timestamp`.
//!
//! Separators already present in the markup are unwrapped first, so the only
//! `<hr>`s left are the ones inserted here.
//!
//! Local times are resolved with the zone's full rules (`chrono-tz`), not a fixed
//! offset, so an event on either side of a DST change gets the right instant.
//! A time that falls in the spring-forward gap is an error; one in the autumn
//! overlap resolves to the earlier instant.

use std::collections::HashSet;

use chrono::{DateTime, NaiveDateTime, TimeZone};
use chrono_tz::Tz;

use crate::config::RunConfig;
use crate::core::sanitize::normalize_ws;
use crate::core::{Document, NodeId};
use crate::error::{Error, Result};
use crate::specs::programme::*;

/// What the normalizer learned about one event. The node itself stays in the tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventRecord {
    pub node: NodeId,
    pub id: String,
    pub date_text: String,
    pub time_text: String,
    pub timestamp_millis: i64,
    /// Venue name with the `Venue:` label removed.
    pub venue: String,
    pub session_type: Option<String>,
}

/// Normalize every event in place. The first bad record aborts the whole pass.
pub fn normalize(doc: &mut Document, config: &RunConfig) -> Result<Vec<EventRecord>> {
    let stripped = strip_separators(doc);
    if stripped > 0 {
        logd!("Unwrapped {stripped} existing separators");
    }

    let mut known_ids: HashSet<String> = HashSet::new();
    let mut records = Vec::new();

    for (index, event) in doc.find_all(doc.root(), &EVENT).into_iter().enumerate() {
        let id = event_id(doc, event, index)?;
        if !known_ids.insert(id.clone()) {
            return Err(Error::DuplicateEventId { id, index });
        }

        let hr = doc.create_element(SEPARATOR_TAG);
        doc.prepend_child(event, hr);

        let venue = tag_venue(doc, event, &id)?;

        let date_text = field_text(doc, event, &DATE, "programme-page--date", &id)?;
        let time_text = field_text(doc, event, &TIME, "programme-page--time", &id)?;
        let when = event_instant(&date_text, &time_text, config.festival_year, config.venue_time_zone)
            .map_err(|reason| Error::UnparsableEventTime {
                event_id: id.clone(),
                date: date_text.clone(),
                time: time_text.clone(),
                reason,
            })?;
        let timestamp_millis = when.timestamp_millis();
        doc.set_attr(event, TIMESTAMP_ATTR, timestamp_millis.to_string());

        let session_type = doc
            .find(event, &SESSION_TYPE)
            .map(|n| normalize_ws(&doc.text(n)))
            .filter(|s| !s.is_empty());

        logd!("event {id}: {date_text} {time_text} -> {timestamp_millis}");
        records.push(EventRecord {
            node: event,
            id,
            date_text,
            time_text,
            timestamp_millis,
            venue,
            session_type,
        });
    }

    Ok(records)
}

/// Replace every `<hr>` by its (normally empty) content.
pub fn strip_separators(doc: &mut Document) -> usize {
    let found = doc.find_all(doc.root(), &SEPARATOR);
    for &hr in &found {
        doc.unwrap(hr);
    }
    found.len()
}

/// `product-id-<id>-<slug>` on the event's first anchor → `<id>`.
fn event_id(doc: &Document, event: NodeId, index: usize) -> Result<String> {
    let malformed = |detail: String| Error::MalformedEventAnchor { index, detail };

    let anchor = doc
        .find(event, &EVENT_ANCHOR)
        .ok_or_else(|| malformed(s!("event has no anchor")))?;
    let name = doc
        .attr(anchor, ANCHOR_NAME_ATTR)
        .ok_or_else(|| malformed(format!("anchor has no name: {}", doc.open_tag(anchor))))?;
    if !name.starts_with(PRODUCT_ID_PREFIX) {
        return Err(malformed(format!("anchor name {name:?} does not start with {PRODUCT_ID_PREFIX:?}")));
    }
    match name.split('-').nth(PRODUCT_ID_FIELD) {
        Some(id) if !id.is_empty() => Ok(s!(id)),
        _ => Err(malformed(format!("anchor name {name:?} has no id field"))),
    }
}

/// Mark the venue line so client-side filtering can find it; returns the venue name.
fn tag_venue(doc: &mut Document, event: NodeId, event_id: &str) -> Result<String> {
    let details = doc.find(event, &DETAILS).ok_or_else(|| Error::MissingElement {
        event_id: s!(event_id),
        what: "product_details_inner",
    })?;
    let venue = doc
        .find_all(details, &DETAIL_DIV)
        .get(VENUE_DIV_INDEX)
        .copied()
        .ok_or_else(|| Error::MissingVenueMarker { event_id: s!(event_id) })?;
    if !doc.text(event).contains(VENUE_LABEL) {
        return Err(Error::MissingVenueMarker { event_id: s!(event_id) });
    }
    doc.set_attr(venue, "class", VENUE_CLASS);

    let line = normalize_ws(&doc.text(venue));
    let name = line.split_once(VENUE_LABEL).map_or(line.as_str(), |(_, rest)| rest);
    Ok(s!(name.trim()))
}

fn field_text(
    doc: &Document,
    event: NodeId,
    sel: &crate::core::Selector,
    what: &'static str,
    event_id: &str,
) -> Result<String> {
    let node = doc
        .find(event, sel)
        .ok_or_else(|| Error::MissingElement { event_id: s!(event_id), what })?;
    Ok(normalize_ws(&doc.text(node)))
}

/// Resolve listing text like `("Fri 23 May", "4:15pm")` in `year` as wall-clock
/// time in `zone`. The weekday must agree with the date in that year.
pub fn event_instant(
    date: &str,
    time: &str,
    year: i32,
    zone: Tz,
) -> std::result::Result<DateTime<Tz>, String> {
    let text = format!("{} {} {}", normalize_ws(date), normalize_ws(time), year);
    let naive = NaiveDateTime::parse_from_str(&text, WHEN_FORMAT)
        .map_err(|e| format!("{text:?} does not match {WHEN_FORMAT:?}: {e}"))?;
    zone.from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| format!("{naive} does not exist in {}", zone.name()))
}
