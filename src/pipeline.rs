//! End-to-end crawl: discover, enrich, assemble.

use crate::config::CrawlConfig;
use crate::error::CrawlError;
use crate::fetch::Fetcher;
use crate::models::{Article, EnrichedArticle};
use crate::scrapers::detail::DetailFetcher;
use crate::scrapers::enrich::enrich;
use crate::scrapers::index::IndexFetcher;
use crate::selectors::CompiledSelectors;
use std::time::Instant;
use tracing::{info, instrument};

/// Number enriched records `1..=N` in their existing order and project them
/// into output shape.
pub fn assemble(enriched: Vec<EnrichedArticle>) -> Vec<Article> {
    enriched
        .into_iter()
        .enumerate()
        .map(|(position, article)| Article::from_enriched(position + 1, article))
        .collect()
}

/// Run the whole crawl described by `config`.
///
/// Listing pages are walked sequentially; a failure there is returned as
/// [`CrawlError::Discovery`] and nothing else is fetched. Detail pages are
/// then fetched `config.concurrency` at a time, and per-article failures
/// only affect that article's detail fields.
#[instrument(
    level = "info",
    skip_all,
    fields(base = %config.base_url, pages = config.page_count, concurrency = config.concurrency)
)]
pub async fn run_crawl<F: Fetcher>(
    fetcher: &F,
    selectors: &CompiledSelectors,
    config: &CrawlConfig,
) -> Result<Vec<Article>, CrawlError> {
    let t0 = Instant::now();
    let base = config.base()?;

    let stubs = IndexFetcher::new(fetcher, selectors, &base, &config.listing_path)
        .discover(config.page_count)
        .await?;

    let details = DetailFetcher::new(fetcher, selectors, &base);
    let articles = assemble(enrich(stubs, &details, config.concurrency).await);

    let elapsed = t0.elapsed();
    info!(
        count = articles.len(),
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Crawl complete"
    );
    Ok(articles)
}
