mod common;

use common::{init_tracing, rss_feed, StaticTransport};
use pulse_aggregator::config::default_blog_feeds;
use pulse_aggregator::sources::BlogFeedSource;
use pulse_aggregator::{BlogFeedConfig, SourceAdapter, SourceKind};
use std::sync::Arc;

const DATE: &str = "Mon, 03 Jun 2024 09:00:00 GMT";

const BODY_ONLY_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:content="http://purl.org/rss/1.0/modules/content/">
<channel><title>Bodies</title><link>https://bodies.example.com</link><description>feed</description>
<item><title>Full text</title><link>https://bodies.example.com/1</link>
<content:encoded><![CDATA[<p>Body <b>only</b></p>]]></content:encoded>
<pubDate>Mon, 03 Jun 2024 09:00:00 GMT</pubDate></item>
<item><title>Bare</title><link>https://bodies.example.com/2</link>
<pubDate>Mon, 03 Jun 2024 09:00:00 GMT</pubDate></item>
</channel></rss>"#;

fn three_item_feed(name: &str) -> String {
    let links: Vec<String> = (1..=3)
        .map(|i| format!("https://{}.example.com/post-{}", name, i))
        .collect();
    let first = "&lt;p&gt;First &lt;em&gt;post&lt;/em&gt;&lt;/p&gt;";
    rss_feed(
        name,
        &[
            ("Post one", Some(links[0].as_str()), first, DATE),
            ("Post two", Some(links[1].as_str()), "Second post", DATE),
            ("Post three", Some(links[2].as_str()), "Third post", DATE),
        ],
    )
}

fn single_feed_source(url: &str, name: &str, body: impl Into<String>) -> BlogFeedSource {
    let feeds = vec![BlogFeedConfig::new(url, name)];
    let transport = StaticTransport::new().with_body(url, body);
    BlogFeedSource::new(feeds, Arc::new(transport), 2, 200)
}

fn transport_for(feeds: &[BlogFeedConfig], failing: &[usize]) -> StaticTransport {
    feeds.iter().enumerate().fold(StaticTransport::new(), |transport, (i, feed)| {
        if failing.contains(&i) {
            transport.with_status(&feed.url, 502)
        } else {
            let slug = feed.name.replace(' ', "-").to_lowercase();
            transport.with_body(&feed.url, three_item_feed(&slug))
        }
    })
}

#[tokio::test]
async fn caps_each_feed_at_two_items() {
    init_tracing();

    let feeds = default_blog_feeds();
    let source = BlogFeedSource::new(feeds.clone(), Arc::new(transport_for(&feeds, &[])), 2, 200);

    let articles = source.fetch_articles().await;
    assert_eq!(articles.len(), 10);

    for feed in &feeds {
        let from_feed: Vec<_> = articles
            .iter()
            .filter(|a| a.author.as_deref() == Some(feed.name.as_str()))
            .collect();
        assert_eq!(from_feed.len(), 2, "{} should contribute exactly two posts", feed.name);
        for article in from_feed {
            assert_eq!(article.source, SourceKind::Blog);
            assert_eq!(article.tags, Some(vec!["Official".to_string(), feed.name.clone()]));
            assert_eq!(article.metrics.as_deref(), Some("Official Blog"));
        }
    }
}

#[tokio::test]
async fn ids_use_running_index_across_feeds() {
    init_tracing();

    let feeds = default_blog_feeds();
    let source = BlogFeedSource::new(feeds.clone(), Arc::new(transport_for(&feeds, &[])), 2, 200);

    let articles = source.fetch_articles().await;
    assert_eq!(articles[0].id, "blog-OpenAI-0");
    assert_eq!(articles[1].id, "blog-OpenAI-1");
    assert_eq!(articles[2].id, "blog-Google DeepMind-2");
    assert_eq!(articles[9].id, "blog-AIhub-9");
}

#[tokio::test]
async fn summaries_are_stripped_of_markup() {
    init_tracing();

    let body = three_item_feed("example");
    let source = single_feed_source("https://example.com/feed", "Example", body);

    let articles = source.fetch_articles().await;
    assert_eq!(articles[0].summary, "First post");
    assert_eq!(articles[0].url, "https://example.example.com/post-1");
}

#[tokio::test]
async fn summaries_decode_html_entities() {
    init_tracing();

    let description = "<![CDATA[<p>OpenAI&#8217;s model &amp; tools&nbsp;ship</p>]]>";
    let body = rss_feed(
        "Entities",
        &[("Launch", Some("https://entities.example.com/1"), description, DATE)],
    );
    let source = single_feed_source("https://entities.example.com/feed", "Entities", body);

    let articles = source.fetch_articles().await;
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].summary, "OpenAI\u{2019}s model & tools ship");
}

#[tokio::test]
async fn summary_falls_back_to_content_then_empty() {
    init_tracing();

    let source = single_feed_source("https://bodies.example.com/feed", "Bodies", BODY_ONLY_FEED);

    let articles = source.fetch_articles().await;
    assert_eq!(articles.len(), 2);
    assert_eq!(articles[0].title, "Full text");
    assert_eq!(articles[0].summary, "Body only");
    assert_eq!(articles[1].title, "Bare");
    assert_eq!(articles[1].summary, "");
    assert!(articles[1].is_well_formed());
}

#[tokio::test]
async fn one_failing_feed_leaves_the_others_intact() {
    init_tracing();

    let feeds = default_blog_feeds();
    let source = BlogFeedSource::new(feeds.clone(), Arc::new(transport_for(&feeds, &[2])), 2, 200);

    let articles = source.fetch_articles().await;
    assert_eq!(articles.len(), 8);
    assert!(articles.iter().all(|a| a.author.as_deref() != Some("Anthropic")));
    for (i, feed) in feeds.iter().enumerate().filter(|(i, _)| *i != 2) {
        let count = articles
            .iter()
            .filter(|a| a.author.as_deref() == Some(feed.name.as_str()))
            .count();
        assert_eq!(count, 2, "feed {} lost items", i);
    }
}

#[tokio::test]
async fn all_feeds_failing_yields_empty() {
    init_tracing();

    let feeds = default_blog_feeds();
    let transport = transport_for(&feeds, &[0, 1, 2, 3, 4]);
    let source = BlogFeedSource::new(feeds, Arc::new(transport), 2, 200);

    assert!(source.pull().await.unwrap().is_empty());
    assert!(source.fetch_articles().await.is_empty());
}

#[tokio::test]
async fn items_without_title_or_link_are_skipped() {
    init_tracing();

    let body = rss_feed(
        "Sparse",
        &[
            ("", Some("https://sparse.example.com/untitled"), "no title", DATE),
            ("Linkless", None, "no link", DATE),
        ],
    );
    let source = single_feed_source("https://sparse.example.com/feed", "Sparse", body);

    assert!(source.fetch_articles().await.is_empty());
}

#[tokio::test]
async fn long_summaries_are_truncated() {
    init_tracing();

    let long = "lorem ".repeat(100);
    let body = rss_feed(
        "Long",
        &[("Verbose", Some("https://long.example.com/1"), long.as_str(), DATE)],
    );
    let source = single_feed_source("https://long.example.com/feed", "Long", body);

    let articles = source.fetch_articles().await;
    assert_eq!(articles.len(), 1);
    assert!(articles[0].summary.ends_with("..."));
    assert_eq!(articles[0].summary.chars().count(), 203);
}
