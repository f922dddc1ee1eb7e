// src/core/net.rs
// Listing endpoint access. One blocking GET per page; no retries, transport default timeouts.

use reqwest::blocking::Client;
use url::Url;

use crate::config::consts::{FEED_FLAGS, LISTING_PATH};
use crate::config::RunConfig;
use crate::error::{Error, Result};

/// Something that can hand back one page of the raw listing.
/// The HTTP client implements it; tests substitute canned pages.
pub trait PageSource {
    /// Body of the page starting at `offset`. A non-success status is an error.
    fn fetch_page(&mut self, offset: usize, limit: usize) -> Result<String>;
}

pub struct HttpPageSource {
    client: Client,
    endpoint: Url,
}

impl HttpPageSource {
    pub fn new(config: &RunConfig) -> Result<Self> {
        let endpoint = config
            .upstream_origin
            .join(LISTING_PATH)
            .map_err(|source| Error::InvalidUrl { url: s!(LISTING_PATH), source })?;
        let client = Client::builder()
            .user_agent(concat!("festival_programme/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| Error::Transport { url: endpoint.to_string(), source })?;
        Ok(Self { client, endpoint })
    }

    /// `…/getevents?offset=N&limit=M&isInternationalFestival=0&festival=hay`
    pub fn page_url(&self, offset: usize, limit: usize) -> Url {
        page_url(&self.endpoint, offset, limit)
    }
}

fn page_url(endpoint: &Url, offset: usize, limit: usize) -> Url {
    let mut url = endpoint.clone();
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("offset", &offset.to_string());
        pairs.append_pair("limit", &limit.to_string());
        for (key, value) in FEED_FLAGS {
            pairs.append_pair(key, value);
        }
    }
    url
}

impl PageSource for HttpPageSource {
    fn fetch_page(&mut self, offset: usize, limit: usize) -> Result<String> {
        let url = self.page_url(offset, limit);
        let resp = self
            .client
            .get(url.clone())
            .send()
            .map_err(|source| Error::Transport { url: url.to_string(), source })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::HttpStatus { url: url.to_string(), status: status.as_u16() });
        }
        resp.text()
            .map_err(|source| Error::Transport { url: url.to_string(), source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_url_carries_cursor_and_feed_flags() {
        let endpoint = RunConfig::default().upstream_origin.join(LISTING_PATH).unwrap();
        let url = page_url(&endpoint, 50, 25);
        assert_eq!(
            url.as_str(),
            "https://howthelightgetsin.org/FullEventListPage_Controller/getevents?offset=50&limit=25&isInternationalFestival=0&festival=hay"
        );
    }
}
