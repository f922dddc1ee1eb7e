// src/cli.rs
use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Parser;

use crate::config::{Paths, RunConfig, RunOptions};
use crate::error::Result;
use crate::progress::LogProgress;
use crate::runner::{self, RunSummary};

/// Rebuild the festival programme page.
#[derive(Debug, Parser)]
#[command(name = "festival_programme", version, about)]
pub struct Args {
    /// Reuse the raw download from the previous run instead of fetching again
    #[arg(long)]
    pub skip_download: bool,

    /// Where the raw download is cached
    #[arg(long, value_name = "PATH")]
    pub raw_file: Option<PathBuf>,

    /// Where the finished page is written
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Year the listing's dates belong to
    #[arg(long, value_name = "YEAR")]
    pub year: Option<i32>,

    /// Events requested per listing page (at least 1)
    #[arg(long, value_name = "N")]
    pub page_size: Option<NonZeroUsize>,

    /// Site the listing is fetched from and relative links point back to
    #[arg(long, value_name = "URL")]
    pub origin: Option<String>,

    /// IANA zone the listing's times are written in
    #[arg(long, value_name = "TZ")]
    pub venue_time_zone: Option<String>,

    /// IANA zone for the page's "Last updated" stamp
    #[arg(long, value_name = "TZ")]
    pub display_time_zone: Option<String>,
}

impl Args {
    /// Defaults, overridden by whatever was passed. A bad origin or zone name is an error.
    pub fn resolve(&self) -> Result<(RunConfig, RunOptions)> {
        let mut config = RunConfig::default();
        if let Some(origin) = &self.origin {
            config = config.with_origin(origin)?;
        }
        if let Some(tz) = &self.venue_time_zone {
            config = config.with_venue_time_zone(tz)?;
        }
        if let Some(tz) = &self.display_time_zone {
            config = config.with_display_time_zone(tz)?;
        }
        if let Some(year) = self.year {
            config.festival_year = year;
        }
        if let Some(n) = self.page_size {
            config.page_size = n;
        }

        let defaults = Paths::default();
        let options = RunOptions {
            download: !self.skip_download,
            paths: Paths {
                raw: self.raw_file.clone().unwrap_or(defaults.raw),
                page: self.output.clone().unwrap_or(defaults.page),
            },
        };
        Ok((config, options))
    }
}

pub fn run(args: &Args) -> Result<RunSummary> {
    let (config, options) = args.resolve()?;
    runner::run(&config, &options, Some(&mut LogProgress)).inspect_err(|e| loge!("Run failed: {e}"))
}
