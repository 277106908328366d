//! Field extraction from listing and detail pages.
//!
//! Every field is looked up independently and comes back as an `Option`;
//! a miss is mapped to its sentinel when the record is built, so one broken
//! field never costs the rest of the card or page.

use crate::models::{
    ArticleDetail, ArticleStub, NO_DATE, NO_HEADING, NO_PARAGRAPH, NO_SHORT_CONTENT,
};
use crate::selectors::CompiledSelectors;
use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html};
use url::Url;

static LINE_BREAKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\n\t\r]+").unwrap());
static DISALLOWED: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z0-9\s.,?!']+").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Normalize body text.
///
/// Line breaks and tabs become spaces, anything outside ASCII alphanumerics,
/// whitespace and `. , ? ! '` is dropped, whitespace runs collapse to one
/// space, and the ends are trimmed. Idempotent.
pub fn normalize_text(text: &str) -> String {
    let text = LINE_BREAKS.replace_all(text, " ");
    let text = DISALLOWED.replace_all(&text, " ");
    let text = WHITESPACE.replace_all(&text, " ");
    text.trim().to_string()
}

/// Resolve an `href`/`src` value against the site base.
///
/// Absolute http(s) URLs are returned untouched.
pub fn resolve_link(base: &Url, raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(parsed) = Url::parse(raw) {
        if matches!(parsed.scheme(), "http" | "https") {
            return Some(raw.to_string());
        }
    }
    base.join(raw).ok().map(|u| u.to_string())
}

/// Descendant text with whitespace collapsed; `None` when blank.
fn element_text(element: ElementRef<'_>) -> Option<String> {
    let text = element.text().collect::<String>().split_whitespace().join(" ");
    (!text.is_empty()).then_some(text)
}

fn first_attr(scope: ElementRef<'_>, selector: &scraper::Selector, attr: &str) -> Option<String> {
    scope
        .select(selector)
        .next()
        .and_then(|el| el.value().attr(attr))
        .map(str::to_string)
}

/// List mode: one stub per article container, in document order.
pub fn extract_list(
    document: &Html,
    selectors: &CompiledSelectors,
    base: &Url,
) -> Vec<ArticleStub> {
    document
        .select(&selectors.article_container)
        .map(|card| {
            let heading = card.select(&selectors.heading).next().and_then(element_text);
            let link = first_attr(card, &selectors.link, "href")
                .and_then(|href| resolve_link(base, &href));
            let published_time = card
                .select(&selectors.timestamp_container)
                .next()
                .and_then(|container| container.select(&selectors.timestamp_text).next())
                .and_then(element_text);

            ArticleStub {
                heading: heading.unwrap_or_else(|| NO_HEADING.to_string()),
                link,
                published_time: published_time.unwrap_or_else(|| NO_DATE.to_string()),
            }
        })
        .collect()
}

/// Detail mode: short description, lead image and normalized body.
pub fn extract_detail(document: &Html, selectors: &CompiledSelectors, base: &Url) -> ArticleDetail {
    let root = document.root_element();

    let short_content = root
        .select(&selectors.short_description)
        .next()
        .and_then(element_text);

    let image_link = root
        .select(&selectors.image_container)
        .next()
        .and_then(|region| first_attr(region, &selectors.image, "src"))
        .and_then(|src| resolve_link(base, &src));

    let body = root
        .select(&selectors.body_container)
        .next()
        .map(|region| {
            region
                .select(&selectors.paragraph)
                .filter_map(element_text)
                .join(" ")
        })
        .map(|raw| normalize_text(&raw))
        .filter(|body| !body.is_empty());

    ArticleDetail {
        short_content: short_content.unwrap_or_else(|| NO_SHORT_CONTENT.to_string()),
        image_link: image_link.unwrap_or_default(),
        body: body.unwrap_or_else(|| NO_PARAGRAPH.to_string()),
    }
}
