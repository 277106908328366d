//! Article detail pages.

use crate::extract::extract_detail;
use crate::fetch::{FetchError, Fetcher};
use crate::models::ArticleDetail;
use crate::selectors::CompiledSelectors;
use scraper::Html;
use tracing::{debug, instrument};
use url::Url;

/// Fetches one article page and extracts its [`ArticleDetail`].
#[derive(Debug)]
pub struct DetailFetcher<'a, F> {
    fetcher: &'a F,
    selectors: &'a CompiledSelectors,
    base: &'a Url,
}

impl<'a, F: Fetcher> DetailFetcher<'a, F> {
    pub fn new(fetcher: &'a F, selectors: &'a CompiledSelectors, base: &'a Url) -> Self {
        Self {
            fetcher,
            selectors,
            base,
        }
    }

    /// Fetch and extract the detail page behind `link`.
    ///
    /// Fails with [`FetchError::MissingLink`] when the stub had no link.
    /// Missing fields on a page that did load are sentinels, not errors.
    #[instrument(level = "debug", skip(self))]
    pub async fn fetch_detail(&self, link: Option<&str>) -> Result<ArticleDetail, FetchError> {
        let link = link.ok_or(FetchError::MissingLink)?;
        let html = self.fetcher.fetch(link).await?;
        let detail = self.parse(&html);
        debug!(body_chars = detail.body.len(), "Parsed article detail");
        Ok(detail)
    }

    fn parse(&self, html: &str) -> ArticleDetail {
        extract_detail(&Html::parse_document(html), self.selectors, self.base)
    }
}
