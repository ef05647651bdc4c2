use crate::parser::FeedParser;
use crate::traits::{SourceAdapter, Transport};
use crate::types::{Article, ParsedEntry, Result, SourceKind};
use crate::utils::text::{collapse_whitespace, non_empty, truncate_summary};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

/// arXiv cs.AI submissions, newest first
pub struct ArxivSource {
    url: String,
    transport: Arc<dyn Transport>,
    summary_max_chars: usize,
}

impl ArxivSource {
    pub fn new(
        url: impl Into<String>,
        transport: Arc<dyn Transport>,
        summary_max_chars: usize,
    ) -> Self {
        Self {
            url: url.into(),
            transport,
            summary_max_chars,
        }
    }
}

/// Map an arXiv Atom response into articles. One entry or many, the result
/// is always a plain sequence of the same record shape.
pub fn parse_arxiv_feed(body: &str, summary_max_chars: usize) -> Result<Vec<Article>> {
    let feed = FeedParser::parse_feed(body)?;

    Ok(feed
        .entries
        .into_iter()
        .filter_map(|entry| to_article(entry, summary_max_chars))
        .collect())
}

fn to_article(entry: ParsedEntry, summary_max_chars: usize) -> Option<Article> {
    let paper_url = non_empty(Some(entry.id.as_str()))?.trim().to_string();
    let title = collapse_whitespace(entry.title.as_deref()?);
    if title.is_empty() {
        return None;
    }

    let summary = collapse_whitespace(entry.summary.as_deref().unwrap_or_default());

    Some(Article {
        id: format!("{}-{}", SourceKind::Preprint.id_prefix(), paper_url),
        title,
        summary: truncate_summary(&summary, summary_max_chars),
        url: paper_url,
        source: SourceKind::Preprint,
        published_at: entry.published_at.or(entry.updated_at).unwrap_or_else(Utc::now),
        author: entry.authors.into_iter().next(),
        tags: Some(vec!["Research".to_string(), "CS.AI".to_string()]),
        image_url: None,
        metrics: Some("PDF Available".to_string()),
    })
}

#[async_trait]
impl SourceAdapter for ArxivSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Preprint
    }

    fn source_name(&self) -> String {
        "arXiv".to_string()
    }

    async fn pull(&self) -> Result<Vec<Article>> {
        let body = self.transport.get_text(&self.url).await?;
        parse_arxiv_feed(&body, self.summary_max_chars)
    }
}
