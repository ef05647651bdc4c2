use crate::traits::{SourceAdapter, Transport};
use crate::types::{Article, Result, SourceKind};
use crate::utils::text::{non_empty, truncate_summary};
use crate::utils::time::timestamp_or_now;
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

const NO_SUMMARY: &str = "No summary available";
const PAPER_BASE_URL: &str = "https://huggingface.co/papers";

/// Hugging Face daily papers
pub struct HuggingFaceSource {
    url: String,
    transport: Arc<dyn Transport>,
    limit: usize,
    summary_max_chars: usize,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DailyPaper {
    paper: Option<Paper>,
    published_at: Option<String>,
    num_upvotes: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct Paper {
    id: Option<String>,
    title: Option<String>,
    summary: Option<String>,
    image: Option<String>,
}

impl HuggingFaceSource {
    pub fn new(
        url: impl Into<String>,
        transport: Arc<dyn Transport>,
        limit: usize,
        summary_max_chars: usize,
    ) -> Self {
        Self {
            url: url.into(),
            transport,
            limit,
            summary_max_chars,
        }
    }
}

/// Map the daily papers list into articles, looking at the first `limit`
/// elements only.
pub fn parse_daily_papers(
    body: &str,
    limit: usize,
    summary_max_chars: usize,
) -> Result<Vec<Article>> {
    let raw: Vec<serde_json::Value> = serde_json::from_str(body)?;

    Ok(raw
        .into_iter()
        .take(limit)
        .filter_map(|value| match serde_json::from_value::<DailyPaper>(value) {
            Ok(item) => to_article(item, summary_max_chars),
            Err(e) => {
                debug!("Skipping malformed daily paper: {}", e);
                None
            }
        })
        .collect())
}

fn to_article(item: DailyPaper, summary_max_chars: usize) -> Option<Article> {
    let paper = item.paper?;
    let paper_id = non_empty(paper.id.as_deref())?.to_string();
    let title = non_empty(paper.title.as_deref())?.trim().to_string();

    let summary = match non_empty(paper.summary.as_deref()) {
        Some(summary) => truncate_summary(summary, summary_max_chars),
        None => NO_SUMMARY.to_string(),
    };

    Some(Article {
        id: format!("{}-{}", SourceKind::ModelHub.id_prefix(), paper_id),
        title,
        summary,
        url: format!("{}/{}", PAPER_BASE_URL, paper_id),
        source: SourceKind::ModelHub,
        published_at: timestamp_or_now(item.published_at.as_deref()),
        author: Some("Hugging Face".to_string()),
        tags: Some(vec!["Trending".to_string(), "Model".to_string()]),
        image_url: non_empty(paper.image.as_deref()).map(str::to_string),
        metrics: Some(format!("{} upvotes", item.num_upvotes.unwrap_or(0))),
    })
}

#[async_trait]
impl SourceAdapter for HuggingFaceSource {
    fn kind(&self) -> SourceKind {
        SourceKind::ModelHub
    }

    fn source_name(&self) -> String {
        "Hugging Face".to_string()
    }

    async fn pull(&self) -> Result<Vec<Article>> {
        let body = self.transport.get_text(&self.url).await?;
        parse_daily_papers(&body, self.limit, self.summary_max_chars)
    }
}
