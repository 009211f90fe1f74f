use crate::aggregator::aggregate;
use crate::dedup::dedupe;
use crate::digest::{annotate, extract_digest, DigestStory};
use crate::ranker::{
    self, rank_by_recency, rank_by_relevance, DEFAULT_ARTICLE_LIMIT, DEFAULT_SEARCH_LIMIT,
    MAX_ARTICLE_LIMIT, MAX_SEARCH_LIMIT,
};
use crate::source::FeedSource;
use crate::types::{FeedDescriptor, Item, NewsError, Result, ScoredItem};
use chrono::Utc;
use tracing::info;

/// Result of a relevance search: ranked matches, or an explicit "nothing
/// matched this query", distinguishable from a feed that has no items.
#[derive(Debug)]
pub enum SearchOutcome {
    Matches(Vec<ScoredItem>),
    NoMatches,
}

/// Result of a digest request: stories, or "no layout has been computed
/// yet", distinguishable from a layout with zero stories.
#[derive(Debug)]
pub enum DigestOutcome {
    Stories(Vec<DigestStory>),
    LayoutUnavailable,
}

/// Caller-facing operations over one feed source.
///
/// Holds no global state and has no registration step; whatever boundary
/// layer exposes these composes them explicitly.
pub struct NewsOps<S> {
    source: S,
}

impl<S: FeedSource> NewsOps<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// The current feed configuration snapshot.
    pub async fn list_feeds(&self) -> Result<Vec<FeedDescriptor>> {
        self.source.list_feeds().await
    }

    /// Fetch items from one feed or from all of them, deduplicated and
    /// sorted newest-first.
    ///
    /// An unknown `feed_id` or a zero limit is rejected before any fetch is
    /// issued. A sole requested feed whose fetch fails surfaces as
    /// `SourceUnavailable`; in a multi-feed batch individual failures only
    /// thin the result, and an empty `Ok` means "no results".
    pub async fn get_items(
        &self,
        feed_id: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Vec<Item>> {
        let limit = ranker::effective_limit(limit, DEFAULT_ARTICLE_LIMIT, MAX_ARTICLE_LIMIT)?;
        let feeds = self.source.list_feeds().await?;

        let targets: Vec<FeedDescriptor> = match feed_id {
            Some(id) => {
                let matched: Vec<FeedDescriptor> =
                    feeds.into_iter().filter(|f| f.feed_id == id).collect();
                if matched.is_empty() {
                    return Err(NewsError::InvalidInput(format!(
                        "no feed found with id \"{}\"",
                        id
                    )));
                }
                matched
            }
            None => feeds,
        };

        let report = aggregate(&self.source, &targets).await;

        if let Some(id) = feed_id {
            if report.all_failed() {
                let reason = report
                    .failures
                    .into_iter()
                    .next()
                    .map(|(_, e)| e.to_string())
                    .unwrap_or_else(|| "fetch failed".to_string());
                return Err(NewsError::SourceUnavailable {
                    feed: id.to_string(),
                    reason,
                });
            }
        }

        Ok(rank_by_recency(dedupe(report.items), limit))
    }

    /// Search items across all feeds or a subset, ranked by relevance then
    /// recency.
    ///
    /// A blank query, a zero limit, and unknown feed ids are rejected
    /// before any fetch. A search restricted to exactly one feed whose
    /// fetch fails surfaces as `SourceUnavailable`, matching `get_items`.
    pub async fn search_items(
        &self,
        query: &str,
        feed_ids: Option<&[String]>,
        limit: Option<usize>,
    ) -> Result<SearchOutcome> {
        if query.trim().is_empty() {
            return Err(NewsError::InvalidInput(
                "search query must not be blank".to_string(),
            ));
        }
        let limit = ranker::effective_limit(limit, DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT)?;

        let feeds = self.source.list_feeds().await?;
        let targets: Vec<FeedDescriptor> = match feed_ids {
            Some(ids) => {
                for id in ids {
                    if !feeds.iter().any(|f| &f.feed_id == id) {
                        return Err(NewsError::InvalidInput(format!(
                            "no feed found with id \"{}\"",
                            id
                        )));
                    }
                }
                feeds
                    .into_iter()
                    .filter(|f| ids.contains(&f.feed_id))
                    .collect()
            }
            None => feeds,
        };

        let report = aggregate(&self.source, &targets).await;

        if let Some([id]) = feed_ids {
            if report.all_failed() {
                let reason = report
                    .failures
                    .into_iter()
                    .next()
                    .map(|(_, e)| e.to_string())
                    .unwrap_or_else(|| "fetch failed".to_string());
                return Err(NewsError::SourceUnavailable {
                    feed: id.clone(),
                    reason,
                });
            }
        }

        let ranked = rank_by_relevance(dedupe(report.items), query, limit);

        if ranked.is_empty() {
            info!("No articles matched query \"{}\"", query);
            return Ok(SearchOutcome::NoMatches);
        }
        Ok(SearchOutcome::Matches(ranked))
    }

    /// Flatten the current top-stories layout into an age-annotated digest.
    pub async fn digest(&self) -> Result<DigestOutcome> {
        let Some(layout) = self.source.current_layout().await? else {
            return Ok(DigestOutcome::LayoutUnavailable);
        };

        let stories = extract_digest(Some(&layout));
        Ok(DigestOutcome::Stories(annotate(stories, Utc::now())))
    }
}
