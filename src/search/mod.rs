// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search over an article manifest.
//!
//! A linear scan: parse the query once, score every article, drop the ones
//! that score nothing, rank the rest. Manifests are a few hundred entries at
//! most, so there is no index to build or keep in sync.
//!
//! # Pass-through
//!
//! A query that is blank, or whose every token is shorter than two
//! characters, is "no query". The input comes back unchanged, in order. This
//! is what lets a search box show the full list before the user types.

pub mod utils;

use crate::scoring::ranking::rank;
use crate::scoring::{score_for_query, NO_QUERY_SCORE};
use crate::types::{Article, ScoredArticle};
use tracing::debug;
use utils::Query;

/// Filter and rank `articles` for a raw `query`.
///
/// Returns references into `articles`: either all of them in input order
/// (no real query), or the matching ones by descending score with ties in
/// input order. Never fails.
pub fn search<'a>(articles: &'a [Article], query: &str) -> Vec<&'a Article> {
    search_scored(articles, query)
        .into_iter()
        .map(|result| result.article)
        .collect()
}

/// Like [`search`], keeping each article's score and input position.
///
/// Pass-through results carry [`NO_QUERY_SCORE`].
pub fn search_scored<'a>(articles: &'a [Article], query: &str) -> Vec<ScoredArticle<'a>> {
    search_query(articles, &Query::parse(query))
}

/// Run an already-parsed query.
pub fn search_query<'a>(articles: &'a [Article], query: &Query) -> Vec<ScoredArticle<'a>> {
    if query.is_empty() {
        return articles
            .iter()
            .enumerate()
            .map(|(position, article)| ScoredArticle {
                article,
                score: NO_QUERY_SCORE,
                position,
            })
            .collect();
    }

    let mut results: Vec<ScoredArticle<'a>> = articles
        .iter()
        .enumerate()
        .filter_map(|(position, article)| {
            let score = score_for_query(article, query);
            (score > 0).then_some(ScoredArticle {
                article,
                score,
                position,
            })
        })
        .collect();

    rank(&mut results);

    debug!(
        terms = query.len(),
        candidates = articles.len(),
        matched = results.len(),
        "search complete"
    );

    results
}
