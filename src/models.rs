//! Data models for discovered and enriched articles.
//!
//! Records move through the crawl in three shapes:
//! - [`ArticleStub`]: what the listing page tells us (heading, link, time)
//! - [`EnrichedArticle`]: a stub merged with the [`ArticleDetail`] scraped
//!   from its detail page
//! - [`Article`]: the externally visible record, with its sequential id and
//!   fields in canonical output order
//!
//! Fields that cannot be extracted are filled with the sentinel constants
//! below rather than being dropped.

use serde::{Deserialize, Serialize};

/// Heading used when a listing card has no heading element.
pub const NO_HEADING: &str = "No Heading";
/// Time used when a listing card has no timestamp element.
pub const NO_DATE: &str = "No Date";
/// Short description used when the detail page has none, or could not be fetched.
pub const NO_SHORT_CONTENT: &str = "No short content found";
/// Body used when the detail page has no paragraphs, or could not be fetched.
pub const NO_PARAGRAPH: &str = "No paragraph found";

/// An article as discovered on a listing page, before enrichment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleStub {
    /// Headline text, or [`NO_HEADING`].
    pub heading: String,
    /// Absolute URL of the detail page, if the card carried one.
    pub link: Option<String>,
    /// Publication time as displayed on the listing, or [`NO_DATE`].
    pub published_time: String,
}

/// Fields scraped from an article's detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDetail {
    pub short_content: String,
    /// Absolute image URL, empty when the page has no lead image.
    pub image_link: String,
    /// Normalized body text.
    pub body: String,
}

impl Default for ArticleDetail {
    /// The fully sentineled detail, used when nothing could be extracted.
    fn default() -> Self {
        Self {
            short_content: NO_SHORT_CONTENT.to_string(),
            image_link: String::new(),
            body: NO_PARAGRAPH.to_string(),
        }
    }
}

/// A stub merged with its detail; an [`Article`] minus the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedArticle {
    pub stub: ArticleStub,
    pub detail: ArticleDetail,
}

/// The externally visible article record.
///
/// Field declaration order is the serialized order:
/// `id, heading, shortContent, time, imageLink, link, body`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// 1-based position in discovery order.
    pub id: usize,
    pub heading: String,
    pub short_content: String,
    pub time: String,
    pub image_link: String,
    /// `null` when the listing card had no link.
    pub link: Option<String>,
    pub body: String,
}

impl Article {
    /// Project an enriched record into output shape with the given id.
    pub fn from_enriched(id: usize, enriched: EnrichedArticle) -> Self {
        let EnrichedArticle { stub, detail } = enriched;
        Self {
            id,
            heading: stub.heading,
            short_content: detail.short_content,
            time: stub.published_time,
            image_link: detail.image_link,
            link: stub.link,
            body: detail.body,
        }
    }
}
