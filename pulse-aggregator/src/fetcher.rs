use crate::traits::Transport;
use crate::types::{AggregatorError, FetchConfig, FetchResult, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use url::Url;

/// HTTP fetcher shared by every source.
pub struct Fetcher {
    client: Client,
    config: FetchConfig,
}

impl Fetcher {
    pub fn new(config: FetchConfig) -> Result<Self> {
        let redirect = if config.follow_redirects {
            reqwest::redirect::Policy::limited(config.max_redirects)
        } else {
            reqwest::redirect::Policy::none()
        };

        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .redirect(redirect)
            .build()?;

        Ok(Self { client, config })
    }

    /// GET `url` and return the body with status and timing.
    pub async fn fetch_text(&self, url: &str) -> Result<FetchResult> {
        let start_time = Instant::now();
        let parsed = Url::parse(url)?;
        debug!("Fetching: {}", parsed);

        let response = self.client.get(parsed).send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!("HTTP {} from {}", status, url);
            return Err(AggregatorError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let max_bytes = self.config.max_feed_size_mb * 1024 * 1024;
        if let Some(content_length) = response.content_length() {
            if content_length as usize > max_bytes {
                return Err(AggregatorError::FeedTooLarge {
                    size_mb: content_length as usize / (1024 * 1024),
                });
            }
        }

        let content = response.text().await?;
        if content.len() > max_bytes {
            return Err(AggregatorError::FeedTooLarge {
                size_mb: content.len() / (1024 * 1024),
            });
        }

        let response_time_ms = start_time.elapsed().as_millis() as u64;
        info!("Fetched {} ({} bytes in {}ms)", url, content.len(), response_time_ms);

        Ok(FetchResult {
            url: url.to_string(),
            content,
            http_status: status.as_u16(),
            response_time_ms,
        })
    }
}

#[async_trait]
impl Transport for Fetcher {
    async fn get_text(&self, url: &str) -> Result<String> {
        Ok(self.fetch_text(url).await?.content)
    }
}
