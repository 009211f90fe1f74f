#![allow(dead_code)]

use async_trait::async_trait;
use newsdesk::{FeedDescriptor, FeedSource, Item, LayoutSlots, NewsError, Result};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Scripted `FeedSource`: each feed id maps to its item list; a feed absent
/// from the script fails its fetch.
pub struct ScriptedSource {
    pub feeds: Vec<FeedDescriptor>,
    pub items: HashMap<String, Vec<Item>>,
    pub layout: Option<LayoutSlots>,
    pub fetch_calls: Arc<AtomicUsize>,
}

impl ScriptedSource {
    pub fn new(feeds: Vec<FeedDescriptor>) -> Self {
        Self {
            feeds,
            items: HashMap::new(),
            layout: None,
            fetch_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_items(mut self, feed_id: &str, items: Vec<Item>) -> Self {
        self.items.insert(feed_id.to_string(), items);
        self
    }

    pub fn with_layout(mut self, layout: LayoutSlots) -> Self {
        self.layout = Some(layout);
        self
    }
}

#[async_trait]
impl FeedSource for ScriptedSource {
    async fn list_feeds(&self) -> Result<Vec<FeedDescriptor>> {
        Ok(self.feeds.clone())
    }

    async fn fetch_items(&self, feed: &FeedDescriptor) -> Result<Vec<Item>> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        self.items
            .get(&feed.feed_id)
            .cloned()
            .ok_or_else(|| NewsError::SourceUnavailable {
                feed: feed.feed_id.clone(),
                reason: "connection refused".to_string(),
            })
    }

    async fn current_layout(&self) -> Result<Option<LayoutSlots>> {
        Ok(self.layout.clone())
    }
}

pub fn feed(id: &str, name: &str) -> FeedDescriptor {
    FeedDescriptor {
        feed_id: id.to_string(),
        display_name: name.to_string(),
        is_built_in: true,
        ..Default::default()
    }
}

pub fn item(title: &str, link: &str, pub_date: Option<&str>) -> Item {
    Item {
        title: title.to_string(),
        link: if link.is_empty() {
            None
        } else {
            Some(link.to_string())
        },
        pub_date: pub_date.map(str::to_string),
        ..Default::default()
    }
}
