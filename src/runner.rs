// src/runner.rs
use std::path::PathBuf;

use chrono::Utc;

use crate::{
    acquire::{self, RawDocument},
    config::{RunConfig, RunOptions},
    core::net::HttpPageSource,
    error::Result,
    pipeline::{self, RewriteSummary},
    progress::Progress,
    store,
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub raw_path: PathBuf,
    pub page_path: PathBuf,
    pub events: usize,
    pub days: usize,
    pub rewrite: RewriteSummary,
}

/// Top-level runner: fetch (or reuse) the raw listing, transform it, write the page.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    config: &RunConfig,
    options: &RunOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let raw = if options.download {
        if let Some(p) = progress.as_deref_mut() {
            p.log("Downloading programme…");
        }
        let mut source = HttpPageSource::new(config)?;
        let raw = acquire::acquire(&mut source, config, progress)?;
        store::save_raw(&options.paths.raw, &raw)?;
        raw
    } else {
        store::load_raw(&options.paths.raw)?
    };

    build(&raw, config, options)
}

/// The offline half of a run: raw document in, page file out.
pub fn build(raw: &RawDocument, config: &RunConfig, options: &RunOptions) -> Result<RunSummary> {
    let programme = pipeline::process(raw.as_str(), config, Utc::now())?;
    store::save_page(&options.paths.page, &programme.page)?;

    Ok(RunSummary {
        raw_path: options.paths.raw.clone(),
        page_path: options.paths.page.clone(),
        events: programme.events.len(),
        days: programme.navigation.days.len(),
        rewrite: programme.rewrite,
    })
}
