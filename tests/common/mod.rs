//! Shared test utilities and fixtures.

#![allow(dead_code)]

use lwcsearch::{load_manifest, Article};
use std::sync::LazyLock;

/// Fixture manifest modelled on the LWC guide article list.
pub const FIXTURE_MANIFEST: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/fixtures/articles.json");

static FIXTURE_ARTICLES: LazyLock<Vec<Article>> =
    LazyLock::new(|| load_manifest(FIXTURE_MANIFEST).expect("Failed to load fixture manifest"));

/// The fixture manifest, loaded once per test binary.
pub fn fixture_articles() -> Vec<Article> {
    FIXTURE_ARTICLES.clone()
}

/// Create an article from its three scored fields.
pub fn make_article(title: &str, desc: &str, tags: &[&str]) -> Article {
    Article::new(title)
        .with_desc(desc)
        .with_tags(tags.iter().copied())
}

/// The two-article scenario used throughout the ranking tests.
pub fn lwc_pair() -> Vec<Article> {
    vec![
        make_article("Intro to LWC", "basics", &["beginner"]),
        make_article("Advanced Patterns", "LWC deep dive", &["advanced", "lwc"]),
    ]
}

/// Titles of a result list, for compact assertions.
pub fn titles(results: &[&Article]) -> Vec<String> {
    results.iter().map(|a| a.title.clone()).collect()
}

/// Input positions of `results` within `articles`, by pointer identity.
pub fn positions(articles: &[Article], results: &[&Article]) -> Vec<usize> {
    results
        .iter()
        .map(|r| {
            articles
                .iter()
                .position(|a| std::ptr::eq(a, *r))
                .expect("result does not point into the input slice")
        })
        .collect()
}
