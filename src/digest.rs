use crate::dedup::dedupe;
use crate::types::{Item, LayoutSlots};
use crate::utils::time::relative_age;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

/// One story of the digest, annotated for display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DigestStory {
    #[serde(flatten)]
    pub item: Item,
    /// Display label for the originating source: the stamped feed name,
    /// falling back to the item's own source field. Serialized apart from
    /// the item's raw fields so neither is clobbered.
    #[serde(rename = "sourceLabel", skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Relative age such as "45 minutes ago". Absent when the item has no
    /// parseable publish time; omitted rather than shown as "just now".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
}

/// Flatten a layout's slots into one deduplicated story list.
///
/// Slot priority is fixed: lead, related, featured, picks, top stories.
/// The earlier slot wins when the same article appears twice. `latest` is
/// deliberately excluded; it is noise for a top-stories digest. An absent
/// layout yields an empty list, which callers report as "layout not yet
/// available" rather than "zero stories".
pub fn extract_digest(layout: Option<&LayoutSlots>) -> Vec<Item> {
    let Some(layout) = layout else {
        return Vec::new();
    };

    let mut stories: Vec<Item> = Vec::new();
    stories.extend(layout.lead.iter().cloned());
    stories.extend(layout.related.iter().cloned());
    stories.extend(layout.featured.iter().cloned());
    stories.extend(layout.picks.iter().cloned());
    stories.extend(layout.top_stories.iter().cloned());

    let stories = dedupe(stories);
    debug!("Extracted {} digest stories from layout", stories.len());
    stories
}

/// Pair each story with its source label and its age relative to `now`.
pub fn annotate(stories: Vec<Item>, now: DateTime<Utc>) -> Vec<DigestStory> {
    stories
        .into_iter()
        .map(|item| {
            let source = item.source_name.clone().or_else(|| item.source.clone());
            let age = item.published_at().map(|published| relative_age(published, now));
            DigestStory { item, source, age }
        })
        .collect()
}
