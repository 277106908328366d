//! Listing-page discovery.
//!
//! # URL Pattern
//!
//! Page 1 is the bare listing path; later pages append `/page-<n>`:
//! `https://www.hindustantimes.com/india-news`,
//! `https://www.hindustantimes.com/india-news/page-2`, ...

use crate::error::CrawlError;
use crate::extract::extract_list;
use crate::fetch::Fetcher;
use crate::models::ArticleStub;
use crate::selectors::CompiledSelectors;
use scraper::Html;
use tracing::{debug, info, instrument};
use url::Url;

/// URL of listing page `page` (1-based).
pub fn page_url(base: &Url, listing_path: &str, page: usize) -> String {
    let origin = base.as_str().trim_end_matches('/');
    let path = listing_path.trim_matches('/');
    if page <= 1 {
        format!("{origin}/{path}")
    } else {
        format!("{origin}/{path}/page-{page}")
    }
}

/// Walks listing pages and turns their article cards into stubs.
#[derive(Debug)]
pub struct IndexFetcher<'a, F> {
    fetcher: &'a F,
    selectors: &'a CompiledSelectors,
    base: &'a Url,
    listing_path: &'a str,
}

impl<'a, F: Fetcher> IndexFetcher<'a, F> {
    pub fn new(
        fetcher: &'a F,
        selectors: &'a CompiledSelectors,
        base: &'a Url,
        listing_path: &'a str,
    ) -> Self {
        Self {
            fetcher,
            selectors,
            base,
            listing_path,
        }
    }

    /// Fetch pages `1..=page_count` one after another and concatenate their stubs.
    ///
    /// The first page that fails to fetch aborts discovery with
    /// [`CrawlError::Discovery`].
    #[instrument(level = "info", skip(self), fields(listing = %self.listing_path))]
    pub async fn discover(&self, page_count: usize) -> Result<Vec<ArticleStub>, CrawlError> {
        let mut stubs = Vec::new();

        for page in 1..=page_count {
            let url = page_url(self.base, self.listing_path, page);
            debug!(page, %url, "Fetching listing page");

            let html = self
                .fetcher
                .fetch(&url)
                .await
                .map_err(|source| CrawlError::Discovery {
                    page,
                    url: url.clone(),
                    source,
                })?;

            let found = self.parse(&html);
            info!(page, %url, count = found.len(), "Indexed listing page");
            stubs.extend(found);
        }

        info!(pages = page_count, count = stubs.len(), "Discovery complete");
        Ok(stubs)
    }

    fn parse(&self, html: &str) -> Vec<ArticleStub> {
        extract_list(&Html::parse_document(html), self.selectors, self.base)
    }
}
