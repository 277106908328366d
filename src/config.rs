//! Crawl settings shared by the CLI and the HTTP server.

use crate::error::CrawlError;
use crate::fetch::DEFAULT_USER_AGENT;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://www.hindustantimes.com";
pub const DEFAULT_LISTING_PATH: &str = "/india-news";
pub const DEFAULT_PAGE_COUNT: usize = 7;
pub const DEFAULT_CONCURRENCY: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlConfig {
    /// Site origin; relative links and images are resolved against it.
    pub base_url: String,
    /// Path of page 1 of the listing, e.g. `/india-news`.
    pub listing_path: String,
    /// Number of listing pages to walk.
    pub page_count: usize,
    /// Maximum detail pages in flight at once.
    pub concurrency: usize,
    pub user_agent: String,
    pub timeout_secs: Option<u64>,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            listing_path: DEFAULT_LISTING_PATH.to_string(),
            page_count: DEFAULT_PAGE_COUNT,
            concurrency: DEFAULT_CONCURRENCY,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: None,
        }
    }
}

impl CrawlConfig {
    pub fn base(&self) -> Result<Url, CrawlError> {
        Url::parse(&self.base_url).map_err(|source| CrawlError::InvalidBaseUrl {
            url: self.base_url.clone(),
            source,
        })
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CrawlConfig::default();
        assert_eq!(config.page_count, 7);
        assert_eq!(config.concurrency, 10);
        assert_eq!(config.timeout(), None);
        assert_eq!(config.base().unwrap().as_str(), "https://www.hindustantimes.com/");
    }

    #[test]
    fn test_invalid_base_url() {
        let config = CrawlConfig {
            base_url: "not a url".to_string(),
            ..CrawlConfig::default()
        };
        assert!(matches!(config.base(), Err(CrawlError::InvalidBaseUrl { .. })));
    }
}
