use crate::types::{FeedDescriptor, Item, LayoutSlots, Result};
use async_trait::async_trait;

/// The remote backend that owns feed configuration and performs the actual
/// retrieval of RSS/API/social-profile content.
///
/// Fetches are not idempotent; an item set can change between calls. Any
/// per-fetch timeout or retry policy lives behind this trait; the aggregator
/// imposes neither.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Current feed configuration snapshot.
    async fn list_feeds(&self) -> Result<Vec<FeedDescriptor>>;

    /// Fetch one feed's current items. Fails with `SourceUnavailable` on
    /// network or upstream-parse errors. Items lacking a usable title or
    /// link are still returned as-is; validating them is the pipeline's
    /// concern, not the source's.
    async fn fetch_items(&self, feed: &FeedDescriptor) -> Result<Vec<Item>>;

    /// The precomputed "current top stories" layout, or `None` when no
    /// layout has been computed yet.
    async fn current_layout(&self) -> Result<Option<LayoutSlots>>;
}
