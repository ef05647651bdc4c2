use crate::types::{AggregatorError, ParsedEntry, ParsedFeed, Result};
use feed_rs::model::{Entry, Link};
use feed_rs::parser;
use tracing::debug;

/// RSS 2.0 / Atom parser. Both formats come out as the same `ParsedFeed`, with
/// the entry list always a sequence no matter how many entries the document had.
pub struct FeedParser;

impl FeedParser {
    pub fn parse_feed(content: &str) -> Result<ParsedFeed> {
        debug!("Parsing feed content ({} bytes)", content.len());

        if !Self::is_valid_feed_content(content) {
            return Err(AggregatorError::Parse(
                "Content is not an RSS or Atom document".to_string(),
            ));
        }

        let feed = parser::parse(content.as_bytes())
            .map_err(|e| AggregatorError::Parse(format!("Failed to parse feed: {}", e)))?;

        let title = feed.title.map(|t| t.content);
        let entries: Vec<ParsedEntry> = feed.entries.into_iter().map(Self::parse_entry).collect();

        debug!("Parsed feed with {} entries", entries.len());
        Ok(ParsedFeed { title, entries })
    }

    fn parse_entry(entry: Entry) -> ParsedEntry {
        let link = Self::primary_link(&entry.links);

        ParsedEntry {
            id: entry.id,
            title: entry.title.map(|t| t.content),
            link,
            summary: entry.summary.map(|s| s.content),
            content: entry.content.and_then(|c| c.body),
            authors: entry.authors.into_iter().map(|a| a.name).collect(),
            published_at: entry.published,
            updated_at: entry.updated,
        }
    }

    /// The `alternate` link when one is marked, otherwise the first link.
    fn primary_link(links: &[Link]) -> Option<String> {
        links
            .iter()
            .find(|l| l.rel.as_deref().map_or(false, |rel| rel == "alternate"))
            .or_else(|| links.first())
            .map(|l| l.href.clone())
            .filter(|href| !href.trim().is_empty())
    }

    pub fn is_valid_feed_content(content: &str) -> bool {
        let content_lower = content.to_lowercase();

        content_lower.contains("<rss")
            || content_lower.contains("<feed")
            || content_lower.contains("<rdf:rdf")
            || content_lower.contains("<channel")
    }
}
