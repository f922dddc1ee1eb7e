// tests/navigation.rs
mod common;

use common::{day, event};
use festival_programme::config::RunConfig;
use festival_programme::core::{Document, Selector};
use festival_programme::pipeline::navigation::derive;
use festival_programme::pipeline::normalize::normalize;

fn three_days() -> String {
    day("Fri 23 May", &[event("1", "Fri 23 May", "4:15pm", "Tent A", "Debate")])
        + &day("Sat 24 May", &[event("2", "Sat 24 May", "10:00am", "Tent B", "Talk")])
        + &day("Fri 23 May", &[event("3", "Fri 23 May", "6:00pm", "Tent A", "Music")])
}

#[test]
fn repeated_day_blocks_are_dropped() {
    let mut doc = Document::parse(&three_days());
    let nav = derive(&mut doc);

    let ids: Vec<_> = nav.days.iter().map(|d| (d.id.as_str(), d.label.as_str())).collect();
    assert_eq!(ids, [("nav-day-0", "Fri 23 May"), ("nav-day-1", "Sat 24 May")]);

    let html = doc.to_html();
    assert!(html.contains(r#"id="nav-day-0""#));
    assert!(html.contains(r#"id="nav-day-1""#));
    assert!(!html.contains("product-id-3-"));
    assert_eq!(html.matches("htlgi-heading__small--text").count(), 2);
}

#[test]
fn day_order_is_first_seen_not_alphabetical() {
    let mut doc = Document::parse(
        &(day("Sat 24 May", &[]) + &day("Fri 30 May", &[]) + &day("Mon 26 May", &[])),
    );
    let labels: Vec<_> = derive(&mut doc).days.into_iter().map(|d| d.label).collect();
    assert_eq!(labels, ["Sat 24 May", "Fri 30 May", "Mon 26 May"]);
}

#[test]
fn venues_are_distinct_and_sorted_after_wildcard() {
    let mut doc = Document::parse(&day(
        "Fri 23 May",
        &[
            event("1", "Fri 23 May", "4:15pm", "Tent B", "Debate"),
            event("2", "Fri 23 May", "5:15pm", "Tent A", "Debate"),
            event("3", "Fri 23 May", "6:15pm", "Tent A", "Debate"),
        ],
    ));
    let nav = derive(&mut doc);
    assert_eq!(nav.venues, ["- All -", "Tent A", "Tent B"]);
}

#[test]
fn session_types_are_distinct_and_sorted_after_wildcard() {
    let mut doc = Document::parse(&three_days());
    let nav = derive(&mut doc);
    // the repeated Friday block is gone before session types are collected
    assert_eq!(nav.session_types, ["- All -", "Debate", "Talk"]);
}

#[test]
fn venue_scan_is_independent_of_events() {
    let markup = day("Fri 23 May", &[event("1", "Fri 23 May", "4:15pm", "Tent A", "Debate")])
        + "<div>Venue: Garden Stage  </div>";
    let mut doc = Document::parse(&markup);
    assert_eq!(derive(&mut doc).venues, ["- All -", "Garden Stage", "Tent A"]);
}

#[test]
fn works_on_a_normalized_tree() {
    let mut doc = Document::parse(&common::programme());
    normalize(&mut doc, &RunConfig::default()).unwrap();
    let nav = derive(&mut doc);

    assert_eq!(nav.days.len(), 3);
    assert_eq!(nav.venues, ["- All -", "Garden Stage", "Tent A", "Tent B"]);
    assert_eq!(nav.session_types, ["- All -", "Debate", "Music", "Talk"]);
}

#[test]
fn empty_programme_has_only_wildcards() {
    let mut doc = Document::parse("");
    let nav = derive(&mut doc);
    assert!(nav.days.is_empty());
    assert_eq!(nav.venues, ["- All -"]);
    assert_eq!(nav.session_types, ["- All -"]);
}

#[test]
fn multi_line_session_type_stays_a_substring_of_its_text() {
    let markup = day(
        "Fri 23 May",
        &[event("1", "Fri 23 May", "4:15pm", "Tent A", "\n      Panel\n      Debate\n    ")],
    );
    let mut doc = Document::parse(&markup);
    let nav = derive(&mut doc);

    assert_eq!(nav.session_types, ["- All -", "Panel\n      Debate"]);
    let node = doc.find(doc.root(), &Selector::class("sessiontype")).unwrap();
    assert!(doc.text(node).contains(&nav.session_types[1]));
}

#[test]
fn repeated_heading_under_the_root_removes_only_the_heading() {
    let markup = r#"<h2 class="htlgi-heading__small--text">Fri 23 May</h2><p>first</p><h2 class="htlgi-heading__small--text">Fri 23 May</h2><p>second</p>"#;
    let mut doc = Document::parse(markup);
    let nav = derive(&mut doc);

    assert_eq!(nav.days.len(), 1);
    let html = doc.to_html();
    assert_eq!(html.matches("Fri 23 May").count(), 1);
    assert!(html.contains("<p>first</p>"));
    assert!(html.contains("<p>second</p>"));
}

#[test]
fn heading_inside_a_dropped_block_gets_no_id() {
    let markup = day("Fri 23 May", &[])
        + r#"<div class="programme-day"><h2 class="htlgi-heading__small--text">Fri 23 May</h2><h2 class="htlgi-heading__small--text">Sat 24 May</h2></div>"#;
    let mut doc = Document::parse(&markup);
    let nav = derive(&mut doc);

    let labels: Vec<_> = nav.days.iter().map(|d| d.label.as_str()).collect();
    assert_eq!(labels, ["Fri 23 May"]);
    let html = doc.to_html();
    assert!(!html.contains("Sat 24 May"));
    assert!(!html.contains("nav-day-1"));
}
