pub mod types;
pub mod config;
pub mod cache;
pub mod fetcher;
pub mod parser;
pub mod traits;
pub mod sources;
pub mod aggregator;
pub mod query;
pub mod prompt;
pub mod utils;

pub use types::*;
pub use config::{AggregatorConfig, BlogFeedConfig};
pub use cache::{CachedTransport, ResponseCache};
pub use fetcher::Fetcher;
pub use parser::FeedParser;
pub use traits::{SourceAdapter, Transport};
pub use aggregator::FeedAggregator;
pub use query::ArticleQuery;
pub use prompt::{analysis_prompt, PromptLanguage};
