//! Structural selector tables for listing and detail pages.
//!
//! A [`SelectorSet`] names one CSS selector per field role. Two layout
//! profiles ship built in (see [`Profile`]); others can be loaded from a
//! YAML file. Every set is compiled up front with [`SelectorSet::compile`],
//! so a typo in any role is reported before the first page is fetched.

use clap::ValueEnum;
use scraper::Selector;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::{info, instrument};

/// Errors raised while loading or compiling a selector table.
#[derive(Debug, Error)]
pub enum SelectorError {
    #[error("selector for `{role}` is empty")]
    Empty { role: &'static str },

    #[error("selector for `{role}` is invalid: {reason}")]
    Invalid { role: &'static str, reason: String },

    #[error("failed to read selector file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse selector file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Built-in layout profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Profile {
    /// Paginated section listing (`/india-news`, `/india-news/page-2`, ...).
    #[default]
    Listing,
    /// Home-page style "latest stories" layout.
    Home,
}

/// CSS selectors for each field role, as plain strings.
///
/// `link`, `heading`, `timestamp_container` and `timestamp_text` are
/// evaluated relative to one `article_container` match; `timestamp_text`
/// is evaluated inside `timestamp_container`. `image` is evaluated inside
/// `image_container` and `paragraph` inside `body_container`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SelectorSet {
    pub article_container: String,
    pub link: String,
    pub heading: String,
    pub timestamp_container: String,
    pub timestamp_text: String,
    pub short_description: String,
    pub image_container: String,
    pub image: String,
    pub body_container: String,
    pub paragraph: String,
}

impl SelectorSet {
    /// The selector table for a built-in profile.
    pub fn for_profile(profile: Profile) -> Self {
        match profile {
            Profile::Listing => Self {
                article_container: "#dataHolder .cartHolder".to_string(),
                link: "a".to_string(),
                heading: "h2".to_string(),
                timestamp_container: ".storyShortDetail".to_string(),
                timestamp_text: ".dateTime".to_string(),
                short_description: "#storyMainDiv .sortDec".to_string(),
                image_container: "#storyMainDiv .storyDetails".to_string(),
                image: "img".to_string(),
                body_container: "#storyMainDiv .storyDetails".to_string(),
                paragraph: "p".to_string(),
            },
            Profile::Home => Self {
                article_container: "#latestHomeStory .media".to_string(),
                link: "a".to_string(),
                heading: "h2".to_string(),
                timestamp_container: ".time-stamp".to_string(),
                timestamp_text: ".timeAgo".to_string(),
                short_description: "#storyBody .shortDetail".to_string(),
                image_container: "#storyBody .column_1".to_string(),
                image: "figure img".to_string(),
                body_container: "section .storyDetail".to_string(),
                paragraph: "p".to_string(),
            },
        }
    }

    /// Load a selector table from a YAML file. All roles are required.
    #[instrument(level = "info")]
    pub fn from_yaml_file(path: &Path) -> Result<Self, SelectorError> {
        let shown = path.display().to_string();
        let raw = std::fs::read_to_string(path).map_err(|source| SelectorError::Read {
            path: shown.clone(),
            source,
        })?;
        let set: SelectorSet = serde_yaml::from_str(&raw).map_err(|source| SelectorError::Parse {
            path: shown.clone(),
            source,
        })?;
        info!(path = %shown, "Loaded selector table");
        Ok(set)
    }

    /// Parse every role into a [`Selector`].
    pub fn compile(&self) -> Result<CompiledSelectors, SelectorError> {
        Ok(CompiledSelectors {
            article_container: parse_role("article_container", &self.article_container)?,
            link: parse_role("link", &self.link)?,
            heading: parse_role("heading", &self.heading)?,
            timestamp_container: parse_role("timestamp_container", &self.timestamp_container)?,
            timestamp_text: parse_role("timestamp_text", &self.timestamp_text)?,
            short_description: parse_role("short_description", &self.short_description)?,
            image_container: parse_role("image_container", &self.image_container)?,
            image: parse_role("image", &self.image)?,
            body_container: parse_role("body_container", &self.body_container)?,
            paragraph: parse_role("paragraph", &self.paragraph)?,
        })
    }
}

fn parse_role(role: &'static str, css: &str) -> Result<Selector, SelectorError> {
    if css.trim().is_empty() {
        return Err(SelectorError::Empty { role });
    }
    Selector::parse(css).map_err(|e| SelectorError::Invalid {
        role,
        reason: e.to_string(),
    })
}

/// A validated, immutable selector table shared by all extraction calls.
#[derive(Debug, Clone)]
pub struct CompiledSelectors {
    pub article_container: Selector,
    pub link: Selector,
    pub heading: Selector,
    pub timestamp_container: Selector,
    pub timestamp_text: Selector,
    pub short_description: Selector,
    pub image_container: Selector,
    pub image: Selector,
    pub body_container: Selector,
    pub paragraph: Selector,
}
