//! JSON output for crawl results.

use crate::models::Article;
use chrono::Local;
use std::error::Error;
use std::path::PathBuf;
use tokio::fs;
use tracing::{error, info, instrument};

/// Serialize articles as a pretty-printed JSON array.
pub fn to_pretty_json(articles: &[Article]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(articles)
}

/// Write articles to `{json_output_dir}/{date}/{edition}.json`.
///
/// Returns the path that was written.
#[instrument(level = "info", skip_all, fields(json_output_dir = %json_output_dir))]
pub async fn write_articles(
    articles: &[Article],
    json_output_dir: &str,
    edition: &str,
) -> Result<PathBuf, Box<dyn Error>> {
    let json = to_pretty_json(articles)?;

    let local_date = Local::now().date_naive().to_string();
    let full_json_dir = PathBuf::from(json_output_dir).join(local_date);

    info!(full_json_dir = %full_json_dir.display(), "Ensuring JSON directory exists");
    if let Err(e) = fs::create_dir_all(&full_json_dir).await {
        error!(full_json_dir = %full_json_dir.display(), error = %e, "Failed to create JSON dir");
        return Err(e.into());
    }

    let output_json_filename = full_json_dir.join(format!("{edition}.json"));
    fs::write(&output_json_filename, json).await?;
    info!(path = %output_json_filename.display(), count = articles.len(), "Wrote JSON file");

    Ok(output_json_filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(id: usize) -> Article {
        Article {
            id,
            heading: format!("Heading {id}"),
            short_content: "Summary".to_string(),
            time: "Jun 01, 2025".to_string(),
            image_link: String::new(),
            link: None,
            body: "Body.".to_string(),
        }
    }

    #[test]
    fn test_to_pretty_json_is_array() {
        let json = to_pretty_json(&[article(1), article(2)]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
        assert_eq!(value[1]["id"], 2);
    }

    #[tokio::test]
    async fn test_write_articles_layout() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().to_str().unwrap();

        let written = write_articles(&[article(1)], dir, "morning").await.unwrap();

        let today = Local::now().date_naive().to_string();
        assert_eq!(written, tmp.path().join(today).join("morning.json"));
        let parsed: Vec<Article> =
            serde_json::from_str(&std::fs::read_to_string(&written).unwrap()).unwrap();
        assert_eq!(parsed, vec![article(1)]);
    }
}
