use crate::traits::{SourceAdapter, Transport};
use crate::types::{Article, Result, SourceKind};
use crate::utils::text::non_empty;
use crate::utils::time::timestamp_or_now;
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

/// dev.to community articles tagged `ai`
pub struct DevToSource {
    url: String,
    transport: Arc<dyn Transport>,
}

#[derive(Debug, Deserialize)]
struct DevToArticle {
    id: Option<u64>,
    title: Option<String>,
    description: Option<String>,
    url: Option<String>,
    published_at: Option<String>,
    user: Option<DevToUser>,
    tag_list: Option<TagList>,
    cover_image: Option<String>,
    social_image: Option<String>,
    public_reactions_count: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct DevToUser {
    name: Option<String>,
}

/// The list endpoint sends tags as an array, single-article responses as a
/// comma separated string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TagList {
    List(Vec<String>),
    Joined(String),
}

impl TagList {
    fn into_vec(self) -> Vec<String> {
        match self {
            TagList::List(tags) => tags,
            TagList::Joined(joined) => joined
                .split(',')
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }
}

impl DevToSource {
    pub fn new(url: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Self {
            url: url.into(),
            transport,
        }
    }
}

/// Map a dev.to article list into articles. Elements that do not have an id,
/// title and url are dropped.
pub fn parse_devto_articles(body: &str) -> Result<Vec<Article>> {
    let raw: Vec<serde_json::Value> = serde_json::from_str(body)?;

    let articles = raw
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<DevToArticle>(value) {
            Ok(item) => to_article(item),
            Err(e) => {
                debug!("Skipping malformed dev.to item: {}", e);
                None
            }
        })
        .collect();

    Ok(articles)
}

fn to_article(item: DevToArticle) -> Option<Article> {
    let id = item.id?;
    let title = non_empty(item.title.as_deref())?.to_string();
    let url = non_empty(item.url.as_deref())?.to_string();

    let image_url = non_empty(item.cover_image.as_deref())
        .or_else(|| non_empty(item.social_image.as_deref()))
        .map(str::to_string);

    Some(Article {
        id: format!("{}-{}", SourceKind::Community.id_prefix(), id),
        title,
        summary: item.description.unwrap_or_default(),
        url,
        source: SourceKind::Community,
        published_at: timestamp_or_now(item.published_at.as_deref()),
        author: item.user.and_then(|u| u.name),
        tags: item.tag_list.map(TagList::into_vec),
        image_url,
        metrics: Some(format!("{} reactions", item.public_reactions_count.unwrap_or(0))),
    })
}

#[async_trait]
impl SourceAdapter for DevToSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Community
    }

    fn source_name(&self) -> String {
        "Dev.to".to_string()
    }

    async fn pull(&self) -> Result<Vec<Article>> {
        let body = self.transport.get_text(&self.url).await?;
        parse_devto_articles(&body)
    }
}
