// tests/pipeline_e2e.rs
mod common;

use std::fs;

use chrono::{TimeZone, Utc};
use festival_programme::config::{Paths, RunConfig, RunOptions};
use festival_programme::pipeline::assemble::{LOCATION_SELECT_ID, SESSION_TYPE_SELECT_ID};
use festival_programme::progress::NullProgress;
use festival_programme::{process, runner, store, Error, RawDocument};
use tempfile::tempdir;

fn noon_utc() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 5, 20, 12, 0, 0).unwrap()
}

#[test]
fn full_page_from_raw_markup() {
    let programme = process(&common::programme(), &RunConfig::default(), noon_utc()).unwrap();
    let page = &programme.page;

    assert_eq!(programme.events.len(), 4);
    assert_eq!(programme.navigation.days.len(), 3);

    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.trim_end().ends_with("</html>"));
    assert!(page.contains("Last updated: 2025-05-20 13:00:00 (Europe/London)"));

    assert!(page.contains(r##"<li><a href="#nav-day-0">Fri 23 May</a></li>"##));
    assert!(page.contains(r##"<li><a href="#nav-day-2">Sun 25 May</a></li>"##));
    assert!(page.contains(&format!(r#"id="{LOCATION_SELECT_ID}""#)));
    assert!(page.contains(&format!(r#"id="{SESSION_TYPE_SELECT_ID}""#)));
    assert!(page.contains(r#"<option value="- All -" selected>- All -</option>"#));
    assert!(page.contains(r#"<option value="Garden Stage">Garden Stage</option>"#));

    assert!(page.contains(r#"timestamp="1748013300000""#));
    assert!(page.contains(r#"class="venue""#));
    assert!(page.contains("https://howthelightgetsin.org/events/101"));
    assert!(page.contains(r#"target="_blank""#));

    assert!(!page.contains("ht-fpe--event-ticket-wrapper"));
    assert!(!page.contains("ht-fpe--festival-ticket"));
    assert!(!page.contains(r#"href="/fastpass""#));
}

#[test]
fn filter_options_are_escaped() {
    let raw = common::day(
        "Fri 23 May",
        &[common::event("1", "Fri 23 May", "4:15pm", "Tent A", "Q&amp;A")],
    );
    let programme = process(&raw, &RunConfig::default(), noon_utc()).unwrap();
    assert_eq!(programme.navigation.session_types, ["- All -", "Q&A"]);
    assert!(programme.page.contains(r#"<option value="Q&amp;A">Q&amp;A</option>"#));
}

#[test]
fn display_zone_drives_the_stamp() {
    let config = RunConfig::default().with_display_time_zone("UTC").unwrap();
    let programme = process(&common::programme(), &config, noon_utc()).unwrap();
    assert!(programme.page.contains("Last updated: 2025-05-20 12:00:00 (UTC)"));
}

#[test]
fn a_bad_event_means_no_page() {
    let raw = common::raw(&[
        common::day("Fri 23 May", &[common::event("1", "Fri 23 May", "4:15pm", "Tent A", "Talk")]),
        common::day("Sat 24 May", &[common::event("1", "Sat 24 May", "4:15pm", "Tent A", "Talk")]),
    ]);
    assert!(matches!(
        process(&raw, &RunConfig::default(), noon_utc()),
        Err(Error::DuplicateEventId { .. })
    ));
}

#[test]
fn build_writes_the_page() {
    let dir = tempdir().unwrap();
    let options = RunOptions {
        download: false,
        paths: Paths { raw: dir.path().join("download.html"), page: dir.path().join("out/result.html") },
    };
    let raw = RawDocument::new(common::programme());

    let summary = runner::build(&raw, &RunConfig::default(), &options).unwrap();
    assert_eq!(summary.events, 4);
    assert_eq!(summary.days, 3);
    assert_eq!(summary.rewrite.tickets_removed, 4);

    let written = fs::read_to_string(&options.paths.page).unwrap();
    assert!(written.contains(r#"id="nav-day-1""#));
}

#[test]
fn skip_download_reuses_the_saved_raw_document() {
    let dir = tempdir().unwrap();
    let options = RunOptions {
        download: false,
        paths: Paths { raw: dir.path().join("download.html"), page: dir.path().join("result.html") },
    };
    store::save_raw(&options.paths.raw, &RawDocument::new(common::programme())).unwrap();

    let summary = runner::run(&RunConfig::default(), &options, Some(&mut NullProgress)).unwrap();
    assert_eq!(summary.events, 4);
    assert!(options.paths.page.exists());
}

#[test]
fn skip_download_without_a_saved_document_fails() {
    let dir = tempdir().unwrap();
    let options = RunOptions {
        download: false,
        paths: Paths { raw: dir.path().join("missing.html"), page: dir.path().join("result.html") },
    };
    let err = runner::run(&RunConfig::default(), &options, None).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(!options.paths.page.exists());
}
