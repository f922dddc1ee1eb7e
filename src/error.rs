// src/error.rs
//
// One error type for the whole run. Every variant is terminal: the first one
// raised aborts the run and nothing is written past that point.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Connection, TLS or body-read failure talking to the listing endpoint.
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("upstream returned HTTP {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The first anchor of an event is missing, has no `name`, or is not `product-id-…`.
    #[error("event #{index}: malformed product anchor ({detail})")]
    MalformedEventAnchor { index: usize, detail: String },

    #[error("event id {id} listed twice (second occurrence is event #{index})")]
    DuplicateEventId { id: String, index: usize },

    #[error("event {event_id}: expected element `{what}` not found")]
    MissingElement { event_id: String, what: &'static str },

    #[error("event {event_id}: no \"Venue:\" line where the venue should be")]
    MissingVenueMarker { event_id: String },

    #[error("event {event_id}: cannot resolve time from {date:?} {time:?}: {reason}")]
    UnparsableEventTime {
        event_id: String,
        date: String,
        time: String,
        reason: String,
    },

    #[error("image without src: {node}")]
    MissingImageSource { node: String },

    #[error("invalid url {url:?}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("unknown time zone {0:?}")]
    UnknownTimeZone(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }
}
