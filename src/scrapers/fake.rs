//! In-memory [`Fetcher`] for exercising the pipeline without a network.

use crate::fetch::{FetchError, Fetcher};
use reqwest::StatusCode;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

#[derive(Debug, Clone)]
enum Reply {
    Body(String),
    Status(u16),
}

#[derive(Debug, Default)]
pub struct FakeFetcher {
    pages: HashMap<String, (Duration, Reply)>,
    calls: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, body: &str) -> Self {
        self.pages
            .insert(url.to_string(), (Duration::ZERO, Reply::Body(body.to_string())));
        self
    }

    pub fn slow_page(mut self, url: &str, body: &str, delay: Duration) -> Self {
        self.pages
            .insert(url.to_string(), (delay, Reply::Body(body.to_string())));
        self
    }

    pub fn failing(mut self, url: &str, status: u16) -> Self {
        self.pages
            .insert(url.to_string(), (Duration::ZERO, Reply::Status(status)));
        self
    }

    /// URLs requested so far, in request order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Highest number of fetches observed running at the same time.
    pub fn peak_in_flight(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

impl Fetcher for FakeFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.calls.lock().unwrap().push(url.to_string());
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        let (delay, reply) = self
            .pages
            .get(url)
            .cloned()
            .unwrap_or((Duration::ZERO, Reply::Status(404)));
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        match reply {
            Reply::Body(body) => Ok(body),
            Reply::Status(code) => Err(FetchError::Status {
                url: url.to_string(),
                status: StatusCode::from_u16(code).unwrap(),
            }),
        }
    }
}

/// A listing page in the default layout with one card per `(heading, href)`.
pub fn listing_html(cards: &[(&str, Option<&str>)]) -> String {
    let cards: String = cards
        .iter()
        .map(|(heading, href)| {
            let anchor = href
                .map(|h| format!(r#"<a href="{h}">read</a>"#))
                .unwrap_or_default();
            format!(
                r#"<div class="cartHolder">{anchor}<h2>{heading}</h2><div class="storyShortDetail"><span class="dateTime">Jun 01, 2025</span></div></div>"#
            )
        })
        .collect();
    format!(r#"<html><body><section id="dataHolder">{cards}</section></body></html>"#)
}

/// A detail page in the default layout.
pub fn detail_html(summary: &str, image: &str, paragraphs: &[&str]) -> String {
    let paragraphs: String = paragraphs.iter().map(|p| format!("<p>{p}</p>")).collect();
    format!(
        r#"<html><body><div id="storyMainDiv"><h2 class="sortDec">{summary}</h2><div class="storyDetails"><img src="{image}">{paragraphs}</div></div></body></html>"#
    )
}
