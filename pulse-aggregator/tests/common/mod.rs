#![allow(dead_code)]

use async_trait::async_trait;
use pulse_aggregator::{AggregatorError, Result, Transport};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, Once};

static INIT: Once = Once::new();

pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

enum Canned {
    Body(String),
    Status(u16),
}

/// In-memory transport: canned bodies or HTTP failures per URL. Unknown URLs
/// fail like a closed connection.
#[derive(Default)]
pub struct StaticTransport {
    responses: Mutex<HashMap<String, Canned>>,
    requests: AtomicUsize,
}

impl StaticTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(self, url: &str, body: impl Into<String>) -> Self {
        self.responses.lock().unwrap().insert(url.to_string(), Canned::Body(body.into()));
        self
    }

    pub fn with_status(self, url: &str, status: u16) -> Self {
        self.responses.lock().unwrap().insert(url.to_string(), Canned::Status(status));
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for StaticTransport {
    async fn get_text(&self, url: &str) -> Result<String> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        match self.responses.lock().unwrap().get(url) {
            Some(Canned::Body(body)) => Ok(body.clone()),
            Some(Canned::Status(status)) => Err(AggregatorError::Status {
                url: url.to_string(),
                status: *status,
            }),
            None => Err(AggregatorError::General(format!("connection refused: {}", url))),
        }
    }
}

pub fn rss_feed(title: &str, items: &[(&str, Option<&str>, &str, &str)]) -> String {
    let items: String = items
        .iter()
        .map(|(item_title, link, description, pub_date)| {
            let link = link.map(|l| format!("<link>{}</link>", l)).unwrap_or_default();
            format!(
                "<item><title>{}</title>{}<description>{}</description>\
                 <pubDate>{}</pubDate></item>",
                item_title, link, description, pub_date
            )
        })
        .collect();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0"><channel><title>{}</title><link>https://example.com</link>
<description>feed</description>{}</channel></rss>"#,
        title, items
    )
}

pub fn devto_body(ids: &[u64]) -> String {
    let items: Vec<String> = ids
        .iter()
        .enumerate()
        .map(|(i, id)| {
            format!(
                r#"{{"id": {id}, "title": "Dev post {id}", "description": "About {id}",
                   "url": "https://dev.to/p/{id}", "published_at": "2024-06-0{day}T12:00:00Z",
                   "user": {{"name": "Author {id}"}}, "tag_list": ["ai"], "cover_image": null,
                   "social_image": null, "public_reactions_count": {id}}}"#,
                id = id,
                day = i + 1
            )
        })
        .collect();
    format!("[{}]", items.join(","))
}

pub fn arxiv_body(entries: &[(&str, &str)]) -> String {
    let entries: String = entries
        .iter()
        .map(|(id, published)| {
            format!(
                "<entry><id>{id}</id><published>{published}</published>\
                 <updated>{published}</updated>\
                 <title>Paper {id}</title><summary>Abstract for {id}</summary>\
                 <author><name>Researcher</name></author></entry>"
            )
        })
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom"><title>arXiv</title><id>urn:arxiv</id>
<updated>2024-06-01T00:00:00Z</updated>{}</feed>"#,
        entries
    )
}

pub fn huggingface_body(papers: &[(&str, Option<&str>)]) -> String {
    let items: Vec<String> = papers
        .iter()
        .map(|(id, published)| {
            let published = published
                .map(|p| format!(r#", "publishedAt": "{}""#, p))
                .unwrap_or_default();
            format!(
                r#"{{"paper": {{"id": "{id}", "title": "HF paper {id}", "summary": "Summary {id}"}},
                    "numUpvotes": 5{published}}}"#
            )
        })
        .collect();
    format!("[{}]", items.join(","))
}
