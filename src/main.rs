use clap::{Parser, Subcommand};
use newsdesk::{BackendClient, BackendConfig, DigestOutcome, NewsOps, SearchOutcome};
use std::env;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "newsdesk",
    about = "Aggregate, search, and digest articles from a news dashboard backend"
)]
struct Cli {
    /// Base URL of the dashboard backend (falls back to NEWS_DASHBOARD_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all configured feeds (built-in and custom)
    Feeds,
    /// Fetch articles from one feed or from all feeds, newest first
    Articles {
        /// Feed id to fetch, e.g. "techcrunch". Omit to fetch every feed
        #[arg(long)]
        feed: Option<String>,
        /// Maximum number of articles to return
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Search articles by topic, ranked by relevance then recency
    Search {
        /// Keywords or topic phrase
        query: String,
        /// Restrict the search to these feed ids (repeatable)
        #[arg(long = "feed")]
        feeds: Vec<String>,
        /// Maximum number of results
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Flatten the current top-stories layout into a deduplicated digest
    Digest,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let base_url = cli
        .api_url
        .or_else(|| env::var("NEWS_DASHBOARD_API_URL").ok())
        .unwrap_or_else(|| "http://localhost:3001".to_string());

    info!("Using backend at {}", base_url);

    let config = BackendConfig {
        base_url,
        ..Default::default()
    };
    let ops = NewsOps::new(BackendClient::new(config)?);

    match cli.command {
        Command::Feeds => {
            let feeds = ops.list_feeds().await?;
            println!("{}", serde_json::to_string_pretty(&feeds)?);
        }
        Command::Articles { feed, limit } => {
            let items = ops.get_items(feed.as_deref(), limit).await?;
            if items.is_empty() {
                println!("No articles available.");
            } else {
                println!("{}", serde_json::to_string_pretty(&items)?);
            }
        }
        Command::Search {
            query,
            feeds,
            limit,
        } => {
            let subset = if feeds.is_empty() {
                None
            } else {
                Some(feeds.as_slice())
            };
            match ops.search_items(&query, subset, limit).await? {
                SearchOutcome::Matches(items) => {
                    println!("{}", serde_json::to_string_pretty(&items)?);
                }
                SearchOutcome::NoMatches => {
                    println!("No articles found matching \"{}\".", query);
                }
            }
        }
        Command::Digest => match ops.digest().await? {
            DigestOutcome::Stories(stories) => {
                println!("{}", serde_json::to_string_pretty(&stories)?);
            }
            DigestOutcome::LayoutUnavailable => {
                println!("No layout is currently available; it refreshes every ~20 minutes.");
            }
        },
    }

    Ok(())
}
