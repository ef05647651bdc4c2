use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where an article came from. Serialized with the short wire names the
/// dashboard filters on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceKind {
    #[serde(rename = "devto")]
    Community,
    #[serde(rename = "arxiv")]
    Preprint,
    #[serde(rename = "huggingface")]
    ModelHub,
    #[serde(rename = "blog")]
    Blog,
}

impl SourceKind {
    pub const ALL: [SourceKind; 4] = [
        SourceKind::Community,
        SourceKind::Preprint,
        SourceKind::ModelHub,
        SourceKind::Blog,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Community => "devto",
            SourceKind::Preprint => "arxiv",
            SourceKind::ModelHub => "huggingface",
            SourceKind::Blog => "blog",
        }
    }

    /// Human-readable label used by the listing output
    pub fn label(&self) -> &'static str {
        match self {
            SourceKind::Community => "Community",
            SourceKind::Preprint => "Papers",
            SourceKind::ModelHub => "Models",
            SourceKind::Blog => "Blogs",
        }
    }

    /// Prefix used to namespace article ids
    pub fn id_prefix(&self) -> &'static str {
        match self {
            SourceKind::Community => "devto",
            SourceKind::Preprint => "arxiv",
            SourceKind::ModelHub => "hf",
            SourceKind::Blog => "blog",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceKind {
    type Err = AggregatorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "devto" | "community" => Ok(SourceKind::Community),
            "arxiv" | "preprint" | "papers" => Ok(SourceKind::Preprint),
            "huggingface" | "hf" | "models" => Ok(SourceKind::ModelHub),
            "blog" | "blogs" => Ok(SourceKind::Blog),
            other => Err(AggregatorError::General(format!("Unknown source: {}", other))),
        }
    }
}

/// The normalized record every source maps into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub url: String,
    pub source: SourceKind,
    pub published_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<String>,
}

impl Article {
    /// Checks the record invariants: non-empty id, title and url.
    pub fn is_well_formed(&self) -> bool {
        !self.id.trim().is_empty() && !self.title.trim().is_empty() && !self.url.trim().is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout_seconds: u64,
    pub max_feed_size_mb: usize,
    pub follow_redirects: bool,
    pub max_redirects: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "AI-Pulse/1.0".to_string(),
            timeout_seconds: 15,
            max_feed_size_mb: 10,
            follow_redirects: true,
            max_redirects: 5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FetchResult {
    pub url: String,
    pub content: String,
    pub http_status: u16,
    pub response_time_ms: u64,
}

/// A feed entry after format-specific parsing, before it is mapped into an
/// `Article`.
#[derive(Debug, Clone)]
pub struct ParsedEntry {
    pub id: String,
    pub title: Option<String>,
    pub link: Option<String>,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub authors: Vec<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug)]
pub struct ParsedFeed {
    pub title: Option<String>,
    pub entries: Vec<ParsedEntry>,
}

#[derive(Debug, thiserror::Error)]
pub enum AggregatorError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Feed parse error: {0}")]
    Parse(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Feed size exceeds limit: {size_mb}MB")]
    FeedTooLarge { size_mb: usize },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("General error: {0}")]
    General(String),
}

pub type Result<T> = std::result::Result<T, AggregatorError>;
