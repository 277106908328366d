//! # News Index Crawler
//!
//! Walks a news site's paginated article listing, then fetches every
//! listed article's page and extracts its short description, lead image and
//! body text, producing one ordered list of articles.
//!
//! ## Usage
//!
//! ```sh
//! news_index_crawler --pages 7 --concurrency 10 -j ./json
//! ```
//!
//! ## Architecture
//!
//! 1. **Discovery**: fetch listing pages 1..N sequentially and collect article stubs
//! 2. **Enrichment**: fetch article pages with a bounded worker pool; failures
//!    leave sentinel fields on that article only
//! 3. **Assembly**: number articles 1..N in discovery order
//! 4. **Output**: print JSON, write it under a dated directory, or serve it over HTTP

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod error;
mod extract;
mod fetch;
mod models;
mod outputs;
mod pipeline;
mod scrapers;
mod selectors;
mod server;
mod utils;

use cli::Cli;
use error::CrawlError;
use fetch::HttpFetcher;
use outputs::json;
use selectors::{CompiledSelectors, SelectorSet};
use utils::{ensure_writable_dir, time_of_day};

/// Load the selector table named on the command line and compile it.
fn load_selectors(args: &Cli) -> Result<CompiledSelectors, CrawlError> {
    let selector_set = match &args.selectors {
        Some(path) => SelectorSet::from_yaml_file(path)?,
        None => SelectorSet::for_profile(args.profile),
    };
    Ok(selector_set.compile()?)
}

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("news_index_crawler starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    // ---- Selectors: validated before any request goes out ----
    let selectors = load_selectors(&args).inspect_err(|e| {
        error!(error = %e, "Selector table is invalid");
    })?;

    let config = args.crawl_config();
    config.base()?;
    let fetcher = HttpFetcher::new(&config.user_agent, config.timeout())?;

    // ---- Serve mode ----
    if let Some(addr) = &args.serve {
        let state = server::AppState {
            fetcher,
            selectors,
            config,
        };
        server::serve(addr, state).await?;
        return Ok(());
    }

    if let Some(dir) = &args.json_output_dir {
        if let Err(e) = ensure_writable_dir(dir).await {
            error!(path = %dir, error = %e, "JSON output directory is not writable");
            return Err(e);
        }
    }

    // ---- Crawl ----
    let articles = match pipeline::run_crawl(&fetcher, &selectors, &config).await {
        Ok(articles) => articles,
        Err(e) => {
            error!(error = %e, "Crawl aborted");
            return Err(e.into());
        }
    };

    // ---- Output ----
    match &args.json_output_dir {
        Some(dir) => {
            let path = json::write_articles(&articles, dir, &time_of_day()).await?;
            info!(path = %path.display(), "Wrote articles");
        }
        None => println!("{}", json::to_pretty_json(&articles)?),
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        articles = articles.len(),
        "Execution complete"
    );

    Ok(())
}
