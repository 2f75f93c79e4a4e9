//! Degenerate inputs: blank queries, short tokens, empty fields, odd text.

use super::common::{fixture_articles, lwc_pair, make_article, positions};
use lwcsearch::{parse_manifest, search, Article};

#[test]
fn test_blank_queries_pass_through_in_order() {
    let articles = fixture_articles();
    for query in ["", " ", "\t", "\n  \r\n"] {
        let results = search(&articles, query);
        assert_eq!(positions(&articles, &results), (0..articles.len()).collect::<Vec<_>>());
    }
}

#[test]
fn test_only_short_tokens_pass_through() {
    let articles = lwc_pair();
    for query in ["a", "a b c", "x-y", "I"] {
        let results = search(&articles, query);
        assert_eq!(positions(&articles, &results), vec![0, 1], "query {:?}", query);
    }
}

#[test]
fn test_punctuation_only_query_passes_through() {
    let articles = lwc_pair();
    let results = search(&articles, "!!! ??? ...");
    assert_eq!(results.len(), 2);
}

#[test]
fn test_emoji_query_passes_through() {
    let articles = lwc_pair();
    assert_eq!(search(&articles, "🚀 ✨").len(), 2);
}

#[test]
fn test_short_tokens_are_dropped_not_fatal() {
    let articles = lwc_pair();
    let mixed = search(&articles, "a lwc b");
    let plain = search(&articles, "lwc");
    assert_eq!(mixed, plain);
}

#[test]
fn test_articles_with_missing_fields() {
    let articles = vec![
        Article::default(),
        Article::new("Only a title about wire"),
        make_article("", "", &["wire"]),
    ];
    let results = search(&articles, "wire");
    assert_eq!(positions(&articles, &results), vec![1, 2]);
}

#[test]
fn test_uppercase_tags_do_not_match() {
    let articles = vec![make_article("Unrelated", "", &["LWC"])];
    assert!(search(&articles, "lwc").is_empty());
}

#[test]
fn test_non_ascii_letters_act_as_separators() {
    let articles = vec![make_article("Café culture", "", &[])];
    // "café" normalizes to "caf", which the title also contains.
    assert_eq!(search(&articles, "café").len(), 1);
    assert!(search(&articles, "cafe").is_empty());
}

#[test]
fn test_empty_manifest() {
    let articles: Vec<Article> = Vec::new();
    assert!(search(&articles, "").is_empty());
    assert!(search(&articles, "lwc").is_empty());
}

#[test]
fn test_very_long_query() {
    let articles = fixture_articles();
    let query = "lwc ".repeat(1_000);
    let results = search(&articles, &query);
    assert_eq!(positions(&articles, &results), vec![0, 2]);
}

#[test]
fn test_null_fields_are_searched_as_empty() {
    let articles = parse_manifest(
        r#"[
            {"title": "Intro to LWC", "desc": null, "tags": null},
            {"title": null, "desc": "LWC deep dive", "tags": ["lwc"]},
            {"title": null, "desc": null, "tags": null}
        ]"#,
    )
    .unwrap();

    assert!(search(&articles, "xyz123").is_empty());
    assert_eq!(positions(&articles, &search(&articles, "lwc")), vec![0, 1]);
    assert_eq!(search(&articles, "").len(), 3);
}

#[test]
fn test_empty_article_never_matches() {
    let articles = vec![Article::default(), make_article("Wire", "", &[])];
    assert_eq!(positions(&articles, &search(&articles, "wire")), vec![1]);
    assert!(search(&articles, "xyz123").is_empty());
}
