use crate::types::FetchConfig;
use crate::utils::text::SUMMARY_MAX_CHARS;
use std::env;
use std::str::FromStr;
use std::time::Duration;

pub const DEVTO_URL: &str = "https://dev.to/api/articles?tag=ai&top=7&per_page=10";
pub const ARXIV_URL: &str = concat!(
    "http://export.arxiv.org/api/query?search_query=cat:cs.AI",
    "&start=0&max_results=10&sortBy=submittedDate&sortOrder=descending"
);
pub const HUGGINGFACE_URL: &str = "https://huggingface.co/api/daily_papers";

/// One RSS/Atom blog feed and the label its posts are attributed to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogFeedConfig {
    pub url: String,
    pub name: String,
}

impl BlogFeedConfig {
    pub fn new(url: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            name: name.into(),
        }
    }
}

pub fn default_blog_feeds() -> Vec<BlogFeedConfig> {
    vec![
        BlogFeedConfig::new("https://openai.com/blog/rss.xml", "OpenAI"),
        BlogFeedConfig::new("https://blog.google/technology/ai/rss/", "Google DeepMind"),
        BlogFeedConfig::new("https://www.anthropic.com/rss", "Anthropic"),
        BlogFeedConfig::new("https://aws.amazon.com/blogs/machine-learning/feed/", "AWS ML"),
        BlogFeedConfig::new("https://aihub.org/category/articles/feed/", "AIhub"),
    ]
}

#[derive(Debug, Clone)]
pub struct AggregatorConfig {
    pub fetch: FetchConfig,
    pub cache_ttl_seconds: u64,
    pub summary_max_chars: usize,
    pub devto_url: String,
    pub arxiv_url: String,
    pub huggingface_url: String,
    /// Only the first N daily papers are used
    pub huggingface_limit: usize,
    pub blog_feeds: Vec<BlogFeedConfig>,
    /// Items taken from the top of each blog feed
    pub blog_items_per_feed: usize,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            fetch: FetchConfig::default(),
            cache_ttl_seconds: 3600,
            summary_max_chars: SUMMARY_MAX_CHARS,
            devto_url: DEVTO_URL.to_string(),
            arxiv_url: ARXIV_URL.to_string(),
            huggingface_url: HUGGINGFACE_URL.to_string(),
            huggingface_limit: 10,
            blog_feeds: default_blog_feeds(),
            blog_items_per_feed: 2,
        }
    }
}

impl AggregatorConfig {
    /// Defaults overridden by any `AI_PULSE_*` variables that are set and valid.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            fetch: FetchConfig {
                user_agent: env::var("AI_PULSE_USER_AGENT").unwrap_or(defaults.fetch.user_agent),
                timeout_seconds: env_parse("AI_PULSE_TIMEOUT_SECONDS")
                    .unwrap_or(defaults.fetch.timeout_seconds),
                ..defaults.fetch
            },
            cache_ttl_seconds: env_parse("AI_PULSE_CACHE_TTL_SECONDS")
                .unwrap_or(defaults.cache_ttl_seconds),
            devto_url: env::var("AI_PULSE_DEVTO_URL").unwrap_or(defaults.devto_url),
            arxiv_url: env::var("AI_PULSE_ARXIV_URL").unwrap_or(defaults.arxiv_url),
            huggingface_url: env::var("AI_PULSE_HF_URL").unwrap_or(defaults.huggingface_url),
            ..defaults
        }
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }
}

fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}
