use crate::types::{Item, NewsError, Result, ScoredItem};
use chrono::{DateTime, Utc};

pub const DEFAULT_ARTICLE_LIMIT: usize = 20;
pub const MAX_ARTICLE_LIMIT: usize = 100;
pub const DEFAULT_SEARCH_LIMIT: usize = 15;
pub const MAX_SEARCH_LIMIT: usize = 50;

/// Validate a caller-supplied limit against an operation's default and
/// ceiling. A zero limit is malformed input, not a request for no results;
/// values above the ceiling clamp to it.
pub fn effective_limit(requested: Option<usize>, default: usize, ceiling: usize) -> Result<usize> {
    match requested {
        Some(0) => Err(NewsError::InvalidInput(
            "limit must be at least 1".to_string(),
        )),
        Some(n) => Ok(n.min(ceiling)),
        None => Ok(default),
    }
}

/// Sort newest-first and truncate.
///
/// Items whose publish time is missing or unparseable sort as if published
/// at the minimum possible instant, i.e. last. The sort is stable, so equal
/// timestamps keep their merge order.
pub fn rank_by_recency(items: Vec<Item>, limit: usize) -> Vec<Item> {
    let mut keyed: Vec<(Option<DateTime<Utc>>, Item)> = items
        .into_iter()
        .map(|item| (item.published_at(), item))
        .collect();
    // None < Some(_), so descending order pushes the undated items last
    keyed.sort_by(|a, b| b.0.cmp(&a.0));
    keyed.truncate(limit);
    keyed.into_iter().map(|(_, item)| item).collect()
}

/// Lower-cased whitespace tokens of a search query.
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Non-overlapping literal occurrences of `token` in `haystack`.
///
/// Tokens are matched as plain substrings rather than through a pattern
/// engine, so a partial word (a drug-name fragment, a ticker) still hits
/// and pattern metacharacters need no escaping.
pub fn occurrences(haystack: &str, token: &str) -> usize {
    if token.is_empty() {
        return 0;
    }
    haystack.matches(token).count()
}

/// Term-frequency score of one item: occurrence counts summed across all
/// query tokens, over the item's lower-cased title, description, and body.
pub fn score_item(item: &Item, tokens: &[String]) -> u32 {
    let haystack = item.search_text();
    tokens
        .iter()
        .map(|token| occurrences(&haystack, token) as u32)
        .sum()
}

/// Score every item against the query, drop the zero scorers, and sort by
/// score, then recency, then merge order. Truncates to `limit`.
pub fn rank_by_relevance(items: Vec<Item>, query: &str, limit: usize) -> Vec<ScoredItem> {
    let tokens = tokenize(query);

    let mut scored: Vec<(u32, Option<DateTime<Utc>>, Item)> = items
        .into_iter()
        .filter_map(|item| {
            let score = score_item(&item, &tokens);
            if score == 0 {
                None
            } else {
                Some((score, item.published_at(), item))
            }
        })
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| b.1.cmp(&a.1)));
    scored.truncate(limit);

    scored
        .into_iter()
        .map(|(relevance_score, _, item)| ScoredItem {
            item,
            relevance_score,
        })
        .collect()
}
