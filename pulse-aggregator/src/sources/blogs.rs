use crate::config::BlogFeedConfig;
use crate::sources::RssFeedSource;
use crate::traits::{SourceAdapter, Transport};
use crate::types::{Article, ParsedEntry, Result, SourceKind};
use crate::utils::text::{non_empty, plain_text, truncate_summary};
use async_trait::async_trait;
use chrono::Utc;
use futures::future::join_all;
use std::sync::Arc;
use tracing::warn;

/// Official company blogs, fetched concurrently. A feed that fails is left
/// out; the others still contribute.
pub struct BlogFeedSource {
    feeds: Vec<RssFeedSource>,
    items_per_feed: usize,
    summary_max_chars: usize,
}

impl BlogFeedSource {
    pub fn new(
        feeds: Vec<BlogFeedConfig>,
        transport: Arc<dyn Transport>,
        items_per_feed: usize,
        summary_max_chars: usize,
    ) -> Self {
        let feeds = feeds
            .into_iter()
            .map(|config| RssFeedSource::new(config, transport.clone()))
            .collect();

        Self {
            feeds,
            items_per_feed,
            summary_max_chars,
        }
    }

    fn to_article(&self, entry: &ParsedEntry, name: &str, index: usize) -> Option<Article> {
        let title = non_empty(entry.title.as_deref())?.trim().to_string();
        let url = non_empty(entry.link.as_deref())?.trim().to_string();

        let raw = non_empty(entry.summary.as_deref())
            .or_else(|| non_empty(entry.content.as_deref()))
            .unwrap_or_default();
        let summary = truncate_summary(&plain_text(raw), self.summary_max_chars);

        Some(Article {
            id: format!("{}-{}-{}", SourceKind::Blog.id_prefix(), name, index),
            title,
            summary,
            url,
            source: SourceKind::Blog,
            published_at: entry.published_at.or(entry.updated_at).unwrap_or_else(Utc::now),
            author: Some(name.to_string()),
            tags: Some(vec!["Official".to_string(), name.to_string()]),
            image_url: None,
            metrics: Some("Official Blog".to_string()),
        })
    }
}

#[async_trait]
impl SourceAdapter for BlogFeedSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Blog
    }

    fn source_name(&self) -> String {
        "Company blogs".to_string()
    }

    /// Never fails: per-feed errors are logged and skipped.
    async fn pull(&self) -> Result<Vec<Article>> {
        let results = join_all(self.feeds.iter().map(|feed| feed.pull_entries())).await;
        let mut articles = Vec::new();

        for (feed, result) in self.feeds.iter().zip(results) {
            let entries = match result {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("Blog feed {} ({}) failed: {}", feed.name, feed.url, e);
                    continue;
                }
            };

            for entry in entries.iter().take(self.items_per_feed) {
                // ids index into the accumulated list, not the feed
                if let Some(article) = self.to_article(entry, &feed.name, articles.len()) {
                    articles.push(article);
                }
            }
        }

        Ok(articles)
    }
}
