use crate::types::{Article, Result, SourceKind};
use async_trait::async_trait;
use tracing::{info, warn};

/// Anything that can GET a URL and hand back the response body
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get_text(&self, url: &str) -> Result<String>;
}

/// A content source that produces canonical articles.
#[async_trait]
pub trait SourceAdapter: Send + Sync {
    /// Which kind of source this is
    fn kind(&self) -> SourceKind;

    /// Human-readable name for this source
    fn source_name(&self) -> String;

    /// Fetch and normalize the source. Errors here are transport or parse
    /// failures for the source as a whole.
    async fn pull(&self) -> Result<Vec<Article>>;

    /// Like `pull`, but a failing source contributes nothing instead of an error.
    async fn fetch_articles(&self) -> Vec<Article> {
        match self.pull().await {
            Ok(articles) => {
                info!("Pulled {} articles from {}", articles.len(), self.source_name());
                articles
            }
            Err(e) => {
                warn!("{} fetch error: {}", self.source_name(), e);
                Vec::new()
            }
        }
    }
}
