//! HTTP front end for the crawl.
//!
//! | Route | Response |
//! |-------|----------|
//! | `GET /` | plain-text banner |
//! | `GET /data` | `200` with the article array, or `500` with `{"error": "..."}` |
//!
//! Each `/data` request runs a full crawl.

use crate::config::CrawlConfig;
use crate::fetch::Fetcher;
use crate::pipeline::run_crawl;
use crate::selectors::CompiledSelectors;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

pub const BANNER: &str = "The news index crawler is running! Use /data to get results.";

pub struct AppState<F> {
    pub fetcher: F,
    pub selectors: CompiledSelectors,
    pub config: CrawlConfig,
}

pub fn router<F>(state: Arc<AppState<F>>) -> Router
where
    F: Fetcher + 'static,
{
    Router::new()
        .route("/", get(home))
        .route("/data", get(data::<F>))
        .with_state(state)
        .layer(CorsLayer::permissive())
}

pub async fn serve<F>(addr: &str, state: AppState<F>) -> Result<(), std::io::Error>
where
    F: Fetcher + 'static,
{
    let app = router(Arc::new(state));
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "Serving crawl results");
    axum::serve(listener, app).await
}

async fn home() -> &'static str {
    BANNER
}

async fn data<F: Fetcher>(State(state): State<Arc<AppState<F>>>) -> Response {
    match run_crawl(&state.fetcher, &state.selectors, &state.config).await {
        Ok(articles) => (StatusCode::OK, Json(articles)).into_response(),
        Err(e) => {
            error!(error = %e, "Crawl failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}
