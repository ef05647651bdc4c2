use crate::config::BlogFeedConfig;
use crate::parser::FeedParser;
use crate::traits::Transport;
use crate::types::{ParsedEntry, Result};
use std::sync::Arc;
use tracing::{debug, info};

/// A single RSS/Atom feed with the label its posts are credited to
pub struct RssFeedSource {
    pub url: String,
    pub name: String,
    transport: Arc<dyn Transport>,
}

impl RssFeedSource {
    pub fn new(config: BlogFeedConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            url: config.url,
            name: config.name,
            transport,
        }
    }

    /// Fetch and parse the feed, returning its entries in document order
    pub async fn pull_entries(&self) -> Result<Vec<ParsedEntry>> {
        debug!("Pulling RSS feed: {}", self.url);

        let content = self.transport.get_text(&self.url).await?;
        let parsed_feed = FeedParser::parse_feed(&content)?;

        info!(
            "Parsed {} entries from {} ({})",
            parsed_feed.entries.len(),
            self.name,
            parsed_feed.title.as_deref().unwrap_or(&self.url)
        );
        Ok(parsed_feed.entries)
    }
}
