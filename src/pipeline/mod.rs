// src/pipeline/mod.rs
//! The transformation from raw listing markup to the finished page.
//!
//! ```text
//! raw markup → Document::parse → normalize → rewrite → navigation::derive → assemble
//! ```
//!
//! Each stage mutates the one document in place, strictly in that order. Any
//! stage error ends the run; there is no partial page.

pub mod assemble;
pub mod navigation;
pub mod normalize;
pub mod rewrite;

use chrono::{DateTime, Utc};

use crate::config::RunConfig;
use crate::core::Document;
use crate::error::Result;

pub use navigation::{DateHeading, NavigationIndex};
pub use normalize::EventRecord;
pub use rewrite::RewriteSummary;

/// Everything one pass produced.
#[derive(Debug)]
pub struct Programme {
    pub page: String,
    pub events: Vec<EventRecord>,
    pub navigation: NavigationIndex,
    pub rewrite: RewriteSummary,
}

/// Run every stage over `raw`. `now` stamps the page's "Last updated" line.
pub fn process(raw: &str, config: &RunConfig, now: DateTime<Utc>) -> Result<Programme> {
    let mut doc = Document::parse(raw);

    let events = normalize::normalize(&mut doc, config)?;
    logf!("Found {} events.", events.len());

    let rewrite = rewrite::rewrite(&mut doc, &config.upstream_origin)?;
    let navigation = navigation::derive(&mut doc);
    let page = assemble::assemble(&doc, &navigation, now.with_timezone(&config.display_time_zone));

    Ok(Programme { page, events, navigation, rewrite })
}
