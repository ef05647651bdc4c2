use clap::Parser;
use pulse_aggregator::{
    analysis_prompt, AggregatorConfig, ArticleQuery, FeedAggregator, PromptLanguage, SourceKind,
};
use tracing::info;

/// Fetch the latest AI papers, posts and announcements into one feed
#[derive(Parser, Debug)]
#[command(name = "ai-pulse", version)]
struct Cli {
    /// Only show articles whose title or summary contains this text
    #[arg(short, long)]
    search: Option<String>,

    /// Only show one source: devto, arxiv, huggingface or blog
    #[arg(long)]
    source: Option<SourceKind>,

    /// Maximum number of articles to print
    #[arg(short, long)]
    limit: Option<usize>,

    /// Per-request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Print JSON instead of a text listing
    #[arg(long)]
    json: bool,

    /// Print the analysis prompt for the article with this id
    #[arg(long, value_name = "ID")]
    prompt: Option<String>,

    /// Prompt language: en or tr
    #[arg(long, default_value = "en")]
    lang: PromptLanguage,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = AggregatorConfig::from_env();
    if let Some(timeout) = cli.timeout {
        config.fetch.timeout_seconds = timeout;
    }

    info!("Starting AI Pulse aggregation");
    let aggregator = FeedAggregator::new(&config)?;
    let articles = aggregator.get_all_articles().await;

    if let Some(id) = cli.prompt.as_deref() {
        let article = articles
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| anyhow::anyhow!("No article with id {}", id))?;
        println!("{}", analysis_prompt(article, cli.lang));
        return Ok(());
    }

    let query = ArticleQuery {
        search: cli.search,
        source: cli.source,
    };
    let mut selected = query.apply(&articles);
    if let Some(limit) = cli.limit {
        selected.truncate(limit);
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&selected)?);
        return Ok(());
    }

    for article in &selected {
        println!("[{}] {}", article.source.label(), article.title);
        println!("    {} | {}", article.published_at.format("%Y-%m-%d %H:%M"), article.url);
        if let Some(metrics) = &article.metrics {
            println!("    {}", metrics);
        }
        if !article.summary.is_empty() {
            println!("    {}", article.summary);
        }
        println!("    id: {}", article.id);
        println!();
    }

    info!("{} of {} articles shown", selected.len(), articles.len());
    Ok(())
}
