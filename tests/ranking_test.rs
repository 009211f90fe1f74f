mod common;

use common::item;
use newsdesk::ranker::{
    effective_limit, occurrences, rank_by_recency, rank_by_relevance, score_item, tokenize,
    DEFAULT_ARTICLE_LIMIT, DEFAULT_SEARCH_LIMIT, MAX_ARTICLE_LIMIT, MAX_SEARCH_LIMIT,
};
use newsdesk::{Item, NewsError};

fn at(title: &str, rfc3339: &str) -> Item {
    item(title, &format!("https://example.com/{}", title), Some(rfc3339))
}

#[test]
fn recency_orders_newest_first_with_undated_last() {
    let items = vec![
        at("t5", "2026-08-01T00:00:05Z"),
        at("t3", "2026-08-01T00:00:03Z"),
        at("t9", "2026-08-01T00:00:09Z"),
        item("undated", "https://example.com/undated", None),
    ];

    let ranked = rank_by_recency(items, DEFAULT_ARTICLE_LIMIT);

    let titles: Vec<&str> = ranked.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, ["t9", "t5", "t3", "undated"]);
}

#[test]
fn unparseable_publish_time_sorts_like_missing() {
    let items = vec![
        at("garbage", "not a timestamp"),
        at("dated", "2026-08-01T12:00:00Z"),
    ];

    let ranked = rank_by_recency(items, DEFAULT_ARTICLE_LIMIT);
    assert_eq!(ranked[0].title, "dated");
    assert_eq!(ranked[1].title, "garbage");
}

#[test]
fn recency_ties_preserve_input_order() {
    let items = vec![
        at("first", "2026-08-01T00:00:00Z"),
        at("second", "2026-08-01T00:00:00Z"),
        item("undated-first", "https://example.com/u1", None),
        item("undated-second", "https://example.com/u2", None),
    ];

    let ranked = rank_by_recency(items, DEFAULT_ARTICLE_LIMIT);
    let titles: Vec<&str> = ranked.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, ["first", "second", "undated-first", "undated-second"]);
}

#[test]
fn recency_truncates_to_limit() {
    let items = vec![
        at("t1", "2026-08-01T00:00:01Z"),
        at("t2", "2026-08-01T00:00:02Z"),
        at("t3", "2026-08-01T00:00:03Z"),
        at("t4", "2026-08-01T00:00:04Z"),
        at("t5", "2026-08-01T00:00:05Z"),
    ];

    let ranked = rank_by_recency(items, 2);

    let titles: Vec<&str> = ranked.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, ["t5", "t4"]);
}

#[test]
fn limits_clamp_to_defaults_and_ceilings() {
    assert_eq!(
        effective_limit(None, DEFAULT_ARTICLE_LIMIT, MAX_ARTICLE_LIMIT).unwrap(),
        20
    );
    assert_eq!(
        effective_limit(Some(500), DEFAULT_ARTICLE_LIMIT, MAX_ARTICLE_LIMIT).unwrap(),
        100
    );
    assert_eq!(
        effective_limit(None, DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT).unwrap(),
        15
    );
    assert_eq!(
        effective_limit(Some(500), DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT).unwrap(),
        50
    );
}

#[test]
fn zero_limit_is_invalid_input_not_a_clamp() {
    let result = effective_limit(Some(0), DEFAULT_ARTICLE_LIMIT, MAX_ARTICLE_LIMIT);
    assert!(matches!(result, Err(NewsError::InvalidInput(_))));
}

#[test]
fn tokenize_lowercases_and_drops_empty_tokens() {
    assert_eq!(tokenize("  Drug   TRIAL "), ["drug", "trial"]);
    assert!(tokenize("   ").is_empty());
}

#[test]
fn occurrences_counts_non_overlapping_literal_matches() {
    assert_eq!(occurrences("aaaa", "aa"), 2);
    assert_eq!(occurrences("c++ then c++ again", "c++"), 2);
    assert_eq!(occurrences("nothing here", "zzz"), 0);
    assert_eq!(occurrences("anything", ""), 0);
}

#[test]
fn term_frequency_sums_across_tokens() {
    let mut hit = item("update", "https://example.com/hit", None);
    hit.description = "new drug trial results; drug approved".to_string();

    let tokens = tokenize("drug trial");
    assert_eq!(score_item(&hit, &tokens), 3);

    let mut miss = item("update", "https://example.com/miss", None);
    miss.description = "markets closed flat today".to_string();
    assert_eq!(score_item(&miss, &tokens), 0);
}

#[test]
fn relevance_excludes_zero_scorers() {
    let mut hit = item("update", "https://example.com/hit", None);
    hit.description = "new drug trial results; drug approved".to_string();
    let mut miss = item("update", "https://example.com/miss", None);
    miss.description = "markets closed flat today".to_string();

    let ranked = rank_by_relevance(vec![miss, hit], "drug trial", DEFAULT_SEARCH_LIMIT);

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].relevance_score, 3);
    assert_eq!(ranked[0].item.canonical_link(), Some("https://example.com/hit"));
}

#[test]
fn relevance_matching_is_case_insensitive_and_substring() {
    let mut it = item("Semaglutide study", "https://example.com/sema", None);
    it.description = "Early semaglutide data".to_string();

    // Partial token should still match inside the longer word
    let ranked = rank_by_relevance(vec![it], "SEMA", DEFAULT_SEARCH_LIMIT);
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].relevance_score, 2);
}

#[test]
fn relevance_searches_body_content_too() {
    let mut it = item("quiet title", "https://example.com/body", None);
    it.content = Some("the trial cohort expanded".to_string());

    let ranked = rank_by_relevance(vec![it], "trial", DEFAULT_SEARCH_LIMIT);
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].relevance_score, 1);
}

#[test]
fn relevance_ties_break_by_recency_then_input_order() {
    let mut older = at("older", "2026-08-01T00:00:50Z");
    older.description = "drug drug".to_string();
    let mut newer = at("newer", "2026-08-01T00:01:40Z");
    newer.description = "drug drug".to_string();
    let mut undated = item("undated", "https://example.com/undated", None);
    undated.description = "drug drug".to_string();

    let ranked = rank_by_relevance(
        vec![older, undated, newer],
        "drug",
        DEFAULT_SEARCH_LIMIT,
    );

    let titles: Vec<&str> = ranked.iter().map(|s| s.item.title.as_str()).collect();
    assert_eq!(titles, ["newer", "older", "undated"]);
    assert!(ranked.iter().all(|s| s.relevance_score == 2));
}

#[test]
fn relevance_truncates_to_limit() {
    let items: Vec<Item> = (0..5)
        .map(|n| {
            let mut it = at(
                &format!("story{}", n),
                &format!("2026-08-01T00:00:0{}Z", n),
            );
            it.description = "trial".to_string();
            it
        })
        .collect();

    let ranked = rank_by_relevance(items, "trial", 2);

    let titles: Vec<&str> = ranked.iter().map(|s| s.item.title.as_str()).collect();
    assert_eq!(titles, ["story4", "story3"]);
}
