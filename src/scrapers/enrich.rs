//! Bounded-concurrency enrichment of discovered stubs.
//!
//! At most `concurrency` detail pages are in flight at once. Completions
//! arrive in any order; each result carries its input index and is written
//! into a pre-sized slot, so the output order is the discovery order.

use crate::fetch::Fetcher;
use crate::models::{ArticleDetail, ArticleStub, EnrichedArticle};
use crate::scrapers::detail::DetailFetcher;
use futures::stream::{self, StreamExt};
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

/// Enrich every stub with its detail page.
///
/// The result has the same length and order as `stubs`. A stub whose
/// detail fetch fails (including one without a link) is logged and keeps
/// [`ArticleDetail::default`].
#[instrument(level = "info", skip_all, fields(stubs = stubs.len(), concurrency = concurrency))]
pub async fn enrich<F: Fetcher>(
    stubs: Vec<ArticleStub>,
    details: &DetailFetcher<'_, F>,
    concurrency: usize,
) -> Vec<EnrichedArticle> {
    let t0 = Instant::now();
    let total = stubs.len();
    let mut slots: Vec<Option<EnrichedArticle>> = (0..total).map(|_| None).collect();
    let mut failed = 0usize;

    let mut completed = stream::iter(stubs.into_iter().enumerate())
        .map(|(index, stub)| async move {
            match details.fetch_detail(stub.link.as_deref()).await {
                Ok(detail) => {
                    debug!(index, link = ?stub.link, "Enriched article");
                    (index, EnrichedArticle { stub, detail }, true)
                }
                Err(e) => {
                    warn!(
                        index,
                        link = ?stub.link,
                        error = %e,
                        "Detail fetch failed; keeping sentinel fields"
                    );
                    let detail = ArticleDetail::default();
                    (index, EnrichedArticle { stub, detail }, false)
                }
            }
        })
        .buffer_unordered(concurrency.max(1));

    while let Some((index, article, ok)) = completed.next().await {
        if !ok {
            failed += 1;
        }
        slots[index] = Some(article);
    }

    let enriched: Vec<EnrichedArticle> = slots.into_iter().flatten().collect();
    info!(
        total,
        succeeded = total - failed,
        failed,
        elapsed_ms = t0.elapsed().as_millis() as u64,
        "Enrichment complete"
    );
    enriched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NO_PARAGRAPH, NO_SHORT_CONTENT};
    use crate::scrapers::fake::{detail_html, FakeFetcher};
    use crate::selectors::{CompiledSelectors, Profile, SelectorSet};
    use std::time::Duration;
    use url::Url;

    fn setup() -> (CompiledSelectors, Url) {
        (
            SelectorSet::for_profile(Profile::Listing).compile().unwrap(),
            Url::parse("https://news.example.com").unwrap(),
        )
    }

    fn stub(n: usize, link: bool) -> ArticleStub {
        ArticleStub {
            heading: format!("Story {n}"),
            link: link.then(|| format!("https://news.example.com/story-{n}")),
            published_time: "Jun 01, 2025".to_string(),
        }
    }

    /// Earlier stories answer slower, so completion order is reversed.
    fn reversed_latency_fetcher(count: usize) -> FakeFetcher {
        (0..count).fold(FakeFetcher::new(), |fetcher, n| {
            fetcher.slow_page(
                &format!("https://news.example.com/story-{n}"),
                &detail_html(
                    &format!("Summary {n}"),
                    "/img.jpg",
                    &[format!("Body {n}.").as_str()],
                ),
                Duration::from_millis(((count - n) * 3) as u64),
            )
        })
    }

    #[tokio::test]
    async fn test_order_is_independent_of_concurrency() {
        let (selectors, base) = setup();
        let count = 20;
        let fetcher = reversed_latency_fetcher(count);
        let details = DetailFetcher::new(&fetcher, &selectors, &base);
        let stubs: Vec<_> = (0..count).map(|n| stub(n, true)).collect();

        let mut runs = Vec::new();
        for concurrency in [1, 5, 50] {
            let enriched = enrich(stubs.clone(), &details, concurrency).await;
            let order: Vec<_> = enriched.iter().map(|a| a.stub.heading.clone()).collect();
            runs.push(order);

            for (n, article) in enriched.iter().enumerate() {
                assert_eq!(article.stub, stubs[n]);
                assert_eq!(article.detail.short_content, format!("Summary {n}"));
                assert_eq!(article.detail.body, format!("Body {n}."));
            }
        }
        assert!(runs.windows(2).all(|w| w[0] == w[1]));
    }

    #[tokio::test]
    async fn test_concurrency_is_bounded() {
        let (selectors, base) = setup();
        let fetcher = reversed_latency_fetcher(12);
        let details = DetailFetcher::new(&fetcher, &selectors, &base);
        let stubs: Vec<_> = (0..12).map(|n| stub(n, true)).collect();

        let enriched = enrich(stubs, &details, 3).await;

        assert_eq!(enriched.len(), 12);
        assert!(fetcher.peak_in_flight() <= 3);
        assert!(fetcher.peak_in_flight() >= 2);
    }

    #[tokio::test]
    async fn test_failures_are_isolated() {
        let (selectors, base) = setup();
        let fetcher = reversed_latency_fetcher(5).failing("https://news.example.com/story-2", 500);
        let details = DetailFetcher::new(&fetcher, &selectors, &base);
        let stubs = vec![
            stub(0, true),
            stub(1, false),
            stub(2, true),
            stub(3, true),
            stub(4, true),
        ];

        let enriched = enrich(stubs.clone(), &details, 4).await;

        assert_eq!(enriched.len(), 5);
        for failed in [1, 2] {
            assert_eq!(enriched[failed].stub, stubs[failed]);
            assert_eq!(enriched[failed].detail.short_content, NO_SHORT_CONTENT);
            assert_eq!(enriched[failed].detail.image_link, "");
            assert_eq!(enriched[failed].detail.body, NO_PARAGRAPH);
        }
        for ok in [0, 3, 4] {
            assert_eq!(enriched[ok].detail.short_content, format!("Summary {ok}"));
        }
        // the linkless stub never reaches the network
        assert!(!fetcher.calls().iter().any(|u| u.ends_with("story-1")));
    }

    #[tokio::test]
    async fn test_empty_input() {
        let (selectors, base) = setup();
        let fetcher = FakeFetcher::new();
        let details = DetailFetcher::new(&fetcher, &selectors, &base);

        assert!(enrich(Vec::new(), &details, 10).await.is_empty());
    }
}
