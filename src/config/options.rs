// src/config/options.rs
use std::num::NonZeroUsize;
use std::path::PathBuf;

use chrono_tz::Tz;
use url::Url;

use super::consts::*;
use crate::error::{Error, Result};

/// Everything the pipeline would otherwise read from globals.
#[derive(Clone, Debug, PartialEq)]
pub struct RunConfig {
    /// Scheme + host of the upstream site. Relative links resolve against it.
    pub upstream_origin: Url,
    /// Zone the listing's wall-clock times are written in.
    pub venue_time_zone: Tz,
    /// The listing omits the year; this supplies it.
    pub festival_year: i32,
    /// Events per listing request; also the offset stride.
    pub page_size: NonZeroUsize,
    /// Zone for the "Last updated" stamp on the page.
    pub display_time_zone: Tz,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            upstream_origin: Url::parse(UPSTREAM_ORIGIN).expect("UPSTREAM_ORIGIN is a valid url"),
            venue_time_zone: parse_tz(VENUE_TIME_ZONE).expect("VENUE_TIME_ZONE is an IANA zone"),
            festival_year: FESTIVAL_YEAR,
            page_size: PAGE_SIZE,
            display_time_zone: parse_tz(DISPLAY_TIME_ZONE).expect("DISPLAY_TIME_ZONE is an IANA zone"),
        }
    }
}

impl RunConfig {
    pub fn with_origin(mut self, origin: &str) -> Result<Self> {
        self.upstream_origin = Url::parse(origin).map_err(|source| Error::InvalidUrl {
            url: s!(origin),
            source,
        })?;
        Ok(self)
    }

    pub fn with_venue_time_zone(mut self, name: &str) -> Result<Self> {
        self.venue_time_zone = parse_tz(name)?;
        Ok(self)
    }

    pub fn with_display_time_zone(mut self, name: &str) -> Result<Self> {
        self.display_time_zone = parse_tz(name)?;
        Ok(self)
    }
}

pub fn parse_tz(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|_| Error::UnknownTimeZone(s!(name)))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Paths {
    /// Concatenated raw markup, kept so later runs can skip the download.
    pub raw: PathBuf,
    /// The assembled page.
    pub page: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            raw: PathBuf::from(DEFAULT_RAW_FILE),
            page: PathBuf::from(DEFAULT_PAGE_FILE),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    /// `false` reuses the raw document already at `paths.raw`.
    pub download: bool,
    pub paths: Paths,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self { download: true, paths: Paths::default() }
    }
}
