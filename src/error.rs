//! Crawl-level errors.
//!
//! Only whole-phase failures end up here. A missing field becomes a
//! sentinel in [`crate::extract`] and a failed article becomes a sentineled
//! record in [`crate::scrapers::enrich`]; neither is ever surfaced as a
//! [`CrawlError`].

use crate::fetch::FetchError;
use crate::selectors::SelectorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CrawlError {
    /// An index page could not be fetched; the crawl yields nothing.
    #[error("index page {page} ({url}) could not be fetched: {source}")]
    Discovery {
        page: usize,
        url: String,
        #[source]
        source: FetchError,
    },

    #[error(transparent)]
    Selectors(#[from] SelectorError),

    #[error("invalid base URL `{url}`: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}
