use crate::types::Item;
use std::collections::HashSet;

/// Collapse a collection to one entry per canonical link, keeping the first
/// occurrence in input order.
///
/// Two items sharing a non-empty link are the same article regardless of
/// which feed produced them. Items without a usable link are never treated
/// as duplicates of one another; each is kept. First-seen-wins and the
/// walk order make this deterministic and idempotent.
pub fn dedupe(items: Vec<Item>) -> Vec<Item> {
    let mut seen: HashSet<String> = HashSet::new();
    items
        .into_iter()
        .filter(|item| match item.canonical_link() {
            Some(link) => seen.insert(link.to_string()),
            None => true,
        })
        .collect()
}
