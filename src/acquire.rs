// src/acquire.rs
//! Paging loop over the listing endpoint.
//!
//! Pages are requested strictly one after another: whether to ask for the next
//! offset depends on the body of the current one. The first body containing the
//! "no events" sentinel ends the loop and is not kept.

use crate::config::consts::{CHUNK_MARKER, NO_MORE_EVENTS};
use crate::config::RunConfig;
use crate::core::net::PageSource;
use crate::error::Result;
use crate::progress::Progress;

/// Every useful page body, in offset order, each preceded by [`CHUNK_MARKER`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawDocument {
    text: String,
}

impl RawDocument {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Pages this document was stitched from.
    pub fn chunk_count(&self) -> usize {
        self.text.matches(CHUNK_MARKER).count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn push_chunk(&mut self, body: &str) {
        self.text.push_str(CHUNK_MARKER);
        self.text.push_str(body);
    }
}

/// Page through `source` until the sentinel page. Any fetch error aborts the
/// whole acquisition; nothing fetched so far is returned.
pub fn acquire(
    source: &mut dyn PageSource,
    config: &RunConfig,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RawDocument> {
    let limit = config.page_size.get();
    let mut raw = RawDocument::default();
    let mut offset = 0usize;
    let mut pages = 0usize;

    loop {
        logf!("Downloading offset: {offset}");
        let body = source.fetch_page(offset, limit)?;
        if body.contains(NO_MORE_EVENTS) {
            break;
        }
        raw.push_chunk(&body);
        pages += 1;
        if let Some(p) = progress.as_deref_mut() {
            p.page_done(offset, body.len());
        }
        offset += limit;
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish(pages);
    }
    Ok(raw)
}
