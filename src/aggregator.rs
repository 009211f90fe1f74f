use crate::source::FeedSource;
use crate::types::{FeedDescriptor, Item, NewsError};
use futures::future::join_all;
use tracing::{debug, info, warn};

/// Outcome of one concurrent fan-out over a snapshot of feeds.
#[derive(Debug, Default)]
pub struct FanoutReport {
    /// Successful fetches' items, merged in input feed order and stamped
    /// with their originating feed.
    pub items: Vec<Item>,
    pub attempted: usize,
    /// Per-feed failures, as `(feed_id, error)` pairs.
    pub failures: Vec<(String, NewsError)>,
}

impl FanoutReport {
    pub fn all_failed(&self) -> bool {
        self.attempted > 0 && self.failures.len() == self.attempted
    }
}

/// Fetch every feed concurrently and wait for all of them to settle.
///
/// No fetch's failure cancels a sibling; a failing feed contributes zero
/// items and is recorded in the report rather than propagated. Successes
/// are merged in input feed order, which seeds the stable-sort tie-break
/// used downstream. An empty feed list yields an empty report.
pub async fn aggregate<S: FeedSource + ?Sized>(
    source: &S,
    feeds: &[FeedDescriptor],
) -> FanoutReport {
    if feeds.is_empty() {
        return FanoutReport::default();
    }

    debug!("Fanning out over {} feeds", feeds.len());
    let settled = join_all(feeds.iter().map(|feed| source.fetch_items(feed))).await;

    let mut report = FanoutReport {
        attempted: feeds.len(),
        ..Default::default()
    };

    for (feed, result) in feeds.iter().zip(settled) {
        match result {
            Ok(items) => {
                report.items.extend(items.into_iter().map(|mut item| {
                    item.source_name = Some(feed.display_name.clone());
                    item.source_id = Some(feed.feed_id.clone());
                    item
                }));
            }
            Err(e) => {
                warn!("Feed '{}' failed, dropping from batch: {}", feed.feed_id, e);
                report.failures.push((feed.feed_id.clone(), e));
            }
        }
    }

    info!(
        "Aggregated {} items from {}/{} feeds",
        report.items.len(),
        report.attempted - report.failures.len(),
        report.attempted
    );
    report
}
