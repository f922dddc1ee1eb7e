// src/config/consts.rs
use std::num::NonZeroUsize;

// Upstream
pub const UPSTREAM_ORIGIN: &str = "https://howthelightgetsin.org";
pub const LISTING_PATH: &str = "FullEventListPage_Controller/getevents";
pub const FEED_FLAGS: &[(&str, &str)] = &[("isInternationalFestival", "0"), ("festival", "hay")];

// Paging
pub const PAGE_SIZE: NonZeroUsize = NonZeroUsize::new(25).unwrap();
pub const NO_MORE_EVENTS: &str = "(no events found)";
pub const CHUNK_MARKER: &str = "<!--- CHUNK MARKER --->";

// Time
pub const VENUE_TIME_ZONE: &str = "Europe/London";
pub const DISPLAY_TIME_ZONE: &str = "Europe/London";
pub const FESTIVAL_YEAR: i32 = 2025;

// Filters
pub const ALL_WILDCARD: &str = "- All -";
pub const NAV_ID_PREFIX: &str = "nav-day-";

// Local files
pub const DEFAULT_RAW_FILE: &str = "download.html";
pub const DEFAULT_PAGE_FILE: &str = "result.html";
