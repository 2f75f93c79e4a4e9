// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search over arbitrary manifests and queries.
//!
//! Whatever the articles and the query look like, search must not panic,
//! must only return references into the input, and must keep the ranking
//! order: score descending, then input position.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lwcsearch::{search_scored, Article};

#[derive(Arbitrary, Debug)]
struct FuzzArticle {
    title: String,
    desc: String,
    tags: Vec<String>,
}

#[derive(Arbitrary, Debug)]
struct Input {
    articles: Vec<FuzzArticle>,
    query: String,
}

fuzz_target!(|input: Input| {
    if input.articles.len() > 64 || input.query.len() > 512 {
        return;
    }

    let articles: Vec<Article> = input
        .articles
        .into_iter()
        .map(|a| Article::new(a.title).with_desc(a.desc).with_tags(a.tags))
        .collect();

    let results = search_scored(&articles, &input.query);
    assert!(results.len() <= articles.len());

    let mut seen = vec![false; articles.len()];
    for r in &results {
        assert!(std::ptr::eq(r.article, &articles[r.position]));
        assert!(!seen[r.position], "duplicate result");
        seen[r.position] = true;
        assert!(r.score > 0);
    }

    for pair in results.windows(2) {
        assert!(
            pair[0].score > pair[1].score
                || (pair[0].score == pair[1].score && pair[0].position < pair[1].position)
        );
    }
});
