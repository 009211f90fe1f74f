use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a feed's content is retrieved by the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    #[default]
    Rss,
    Api,
    BskyProfile,
}

/// Identity and fetch strategy for one configured feed.
///
/// Descriptors are immutable once fetched against; the aggregator only ever
/// reads a snapshot taken at the start of one request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedDescriptor {
    pub feed_id: String,
    pub display_name: String,
    #[serde(rename = "type")]
    pub kind: SourceKind,
    #[serde(default)]
    pub is_built_in: bool,
    #[serde(default)]
    pub rss_url: Option<String>,
    #[serde(default)]
    pub bsky_handle: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// One article or post retrieved from a feed.
///
/// `link` is the canonical identity for deduplication; malformed upstream
/// data can leave it absent. `pub_date` is kept as received; parsing it is
/// the ranker's concern, and an unparseable value must not reject the item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub pub_date: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub creator: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    /// Stamped by the aggregator with the originating feed's display name.
    #[serde(default)]
    pub source_name: Option<String>,
    /// Stamped by the aggregator with the originating feed's id.
    #[serde(default)]
    pub source_id: Option<String>,
}

impl Item {
    /// The item's deduplication identity, if it has one. Blank links count
    /// as absent.
    pub fn canonical_link(&self) -> Option<&str> {
        self.link
            .as_deref()
            .map(str::trim)
            .filter(|link| !link.is_empty())
    }

    /// Parsed publish time. RSS sources emit RFC 2822, API sources RFC 3339;
    /// anything else is treated as missing.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.pub_date.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }
        DateTime::parse_from_rfc2822(raw)
            .or_else(|_| DateTime::parse_from_rfc3339(raw))
            .map(|parsed| parsed.with_timezone(&Utc))
            .ok()
    }

    /// Case-insensitive haystack for relevance scoring.
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {}",
            self.title,
            self.description,
            self.content.as_deref().unwrap_or("")
        )
        .to_lowercase()
    }
}

/// An item paired with its term-frequency score. Exists only transiently
/// during relevance ranking.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredItem {
    #[serde(flatten)]
    pub item: Item,
    pub relevance_score: u32,
}

/// The backend's precomputed "current top stories" layout, organized into
/// named slots. Read-only for this crate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSlots {
    #[serde(default)]
    pub lead: Option<Item>,
    #[serde(default)]
    pub related: Vec<Item>,
    #[serde(default)]
    pub featured: Option<Item>,
    #[serde(default)]
    pub picks: Vec<Item>,
    #[serde(default)]
    pub top_stories: Vec<Item>,
    #[serde(default)]
    pub latest: Vec<Item>,
}

/// Wire shape of the backend's layout lock. Every field is optional; a lock
/// without a layout means none has been computed yet.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutLock {
    #[serde(default)]
    pub expiry: Option<i64>,
    #[serde(default)]
    pub locked_at: Option<i64>,
    #[serde(default)]
    pub layout: Option<LayoutSlots>,
}

#[derive(Debug, thiserror::Error)]
pub enum NewsError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend returned an unexpected payload: {0}")]
    Backend(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Feed '{feed}' is unreachable: {reason}")]
    SourceUnavailable { feed: String, reason: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NewsError>;
