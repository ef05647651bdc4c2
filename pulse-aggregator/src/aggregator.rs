use crate::cache::{CachedTransport, ResponseCache};
use crate::config::AggregatorConfig;
use crate::sources::{ArxivSource, BlogFeedSource, DevToSource, HuggingFaceSource};
use crate::traits::{SourceAdapter, Transport};
use crate::types::{Article, Result, SourceKind};
use crate::Fetcher;
use futures::future::join_all;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

/// Runs every source concurrently and merges the results newest first.
pub struct FeedAggregator {
    sources: Vec<Box<dyn SourceAdapter>>,
}

impl FeedAggregator {
    /// Production wiring: one shared HTTP fetcher behind the response cache.
    pub fn new(config: &AggregatorConfig) -> Result<Self> {
        let fetcher = Fetcher::new(config.fetch.clone())?;
        let cache = ResponseCache::new(config.cache_ttl());
        let transport = CachedTransport::new(Arc::new(fetcher), cache);
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// The four standard sources, concatenated in this order before sorting.
    pub fn with_transport(config: &AggregatorConfig, transport: Arc<dyn Transport>) -> Self {
        let sources: Vec<Box<dyn SourceAdapter>> = vec![
            Box::new(DevToSource::new(config.devto_url.clone(), transport.clone())),
            Box::new(HuggingFaceSource::new(
                config.huggingface_url.clone(),
                transport.clone(),
                config.huggingface_limit,
                config.summary_max_chars,
            )),
            Box::new(ArxivSource::new(
                config.arxiv_url.clone(),
                transport.clone(),
                config.summary_max_chars,
            )),
            Box::new(BlogFeedSource::new(
                config.blog_feeds.clone(),
                transport,
                config.blog_items_per_feed,
                config.summary_max_chars,
            )),
        ];

        Self::from_sources(sources)
    }

    pub fn from_sources(sources: Vec<Box<dyn SourceAdapter>>) -> Self {
        Self { sources }
    }

    pub fn source_kinds(&self) -> Vec<SourceKind> {
        self.sources.iter().map(|s| s.kind()).collect()
    }

    /// Every article from every source, most recent first. Sources that fail
    /// contribute nothing; this never errors.
    pub async fn get_all_articles(&self) -> Vec<Article> {
        let batches = join_all(self.sources.iter().map(|source| source.fetch_articles())).await;

        let mut articles: Vec<Article> = batches.into_iter().flatten().collect();
        sort_newest_first(&mut articles);

        info!("Aggregated {} articles ({:?})", articles.len(), count_by_source(&articles));
        articles
    }
}

/// Order by publication instant, descending. Ties keep no particular order.
pub fn sort_newest_first(articles: &mut [Article]) {
    articles.sort_by(|a, b| b.published_at.cmp(&a.published_at));
}

pub fn count_by_source(articles: &[Article]) -> HashMap<SourceKind, usize> {
    let mut counts = HashMap::new();
    for article in articles {
        *counts.entry(article.source).or_insert(0) += 1;
    }
    counts
}
