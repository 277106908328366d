//! Command-line interface definitions.
//!
//! All options can be given as flags or environment variables.

use crate::config::{
    CrawlConfig, DEFAULT_BASE_URL, DEFAULT_CONCURRENCY, DEFAULT_LISTING_PATH, DEFAULT_PAGE_COUNT,
};
use crate::fetch::DEFAULT_USER_AGENT;
use crate::selectors::Profile;
use clap::Parser;
use clap::builder::TypedValueParser as _;
use std::path::PathBuf;

/// Crawl a news listing and print or save every article with its details.
///
/// # Examples
///
/// ```sh
/// # Seven listing pages, JSON to stdout
/// news_index_crawler
///
/// # Three pages, 20 workers, saved under ./json/<date>/<edition>.json
/// news_index_crawler --pages 3 --concurrency 20 -j ./json
///
/// # Serve results over HTTP
/// news_index_crawler --serve 0.0.0.0:5000
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Site origin that listing and article links are resolved against
    #[arg(long, env = "CRAWL_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Path of the first listing page
    #[arg(long, env = "CRAWL_LISTING_PATH", default_value = DEFAULT_LISTING_PATH)]
    pub listing_path: String,

    /// Number of listing pages to walk
    #[arg(short, long, env = "CRAWL_PAGES", default_value_t = DEFAULT_PAGE_COUNT,
          value_parser = clap::value_parser!(u64).range(1..).map(|v| v as usize))]
    pub pages: usize,

    /// Maximum article pages fetched at once
    #[arg(short, long, env = "CRAWL_CONCURRENCY", default_value_t = DEFAULT_CONCURRENCY,
          value_parser = clap::value_parser!(u64).range(1..).map(|v| v as usize))]
    pub concurrency: usize,

    /// Built-in selector profile
    #[arg(long, env = "CRAWL_PROFILE", value_enum, default_value_t = Profile::Listing)]
    pub profile: Profile,

    /// YAML selector table; overrides --profile
    #[arg(long, env = "CRAWL_SELECTORS")]
    pub selectors: Option<PathBuf>,

    /// Per-request timeout in seconds (none by default)
    #[arg(long, env = "CRAWL_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// User-Agent header sent with every request
    #[arg(long, env = "CRAWL_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Output directory for the JSON file; prints to stdout when absent
    #[arg(short, long, env = "CRAWL_JSON_OUTPUT_DIR")]
    pub json_output_dir: Option<String>,

    /// Serve results over HTTP on this address instead of crawling once
    #[arg(long, env = "CRAWL_SERVE")]
    pub serve: Option<String>,
}

impl Cli {
    pub fn crawl_config(&self) -> CrawlConfig {
        CrawlConfig {
            base_url: self.base_url.clone(),
            listing_path: self.listing_path.clone(),
            page_count: self.pages,
            concurrency: self.concurrency,
            user_agent: self.user_agent.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}
