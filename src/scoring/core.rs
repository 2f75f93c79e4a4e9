// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind article relevance.
//!
//! Every query term is checked against three fields and earns fixed points
//! per field it appears in, plus a bonus when it starts a word. Scores add up
//! across terms. There is no normalization by document length and no IDF:
//! manifests are small and the weights are hand-tuned for blog metadata.
//!
//! # Weights
//!
//! | Check                          | Points |
//! |--------------------------------|--------|
//! | title contains term            | 10     |
//! | description contains term      | 5      |
//! | joined tags contain term       | 3      |
//! | term starts a word in title    | +3     |
//! | term starts a word in desc     | +2     |
//!
//! A term that starts a word in a field is also a substring of it, so a
//! boundary bonus never arrives alone.
//!
//! # Sentinel
//!
//! An empty term list scores [`NO_QUERY_SCORE`] (1), meaning "match
//! everything". A non-empty list of empty terms scores 0.

use crate::search::utils::{Query, QueryTerm};
use crate::types::Article;
use crate::util::normalize::normalize;

/// Title contains the term.
pub const TITLE_MATCH_SCORE: u32 = 10;

/// Description contains the term.
pub const DESC_MATCH_SCORE: u32 = 5;

/// Space-joined tags contain the term.
pub const TAG_MATCH_SCORE: u32 = 3;

/// Term starts a word in the title.
pub const TITLE_BOUNDARY_BONUS: u32 = 3;

/// Term starts a word in the description.
pub const DESC_BOUNDARY_BONUS: u32 = 2;

/// Score for an empty term list.
pub const NO_QUERY_SCORE: u32 = 1;

/// Points per check, summed over all terms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub title: u32,
    pub desc: u32,
    pub tags: u32,
    pub title_boundary: u32,
    pub desc_boundary: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.title + self.desc + self.tags + self.title_boundary + self.desc_boundary
    }

    pub fn is_match(&self) -> bool {
        self.total() > 0
    }
}

/// Article fields in the shape the checks run against.
///
/// Title and description are normalized; tags are only joined.
struct MatchFields {
    title: String,
    desc: String,
    tags: String,
}

impl MatchFields {
    fn of(article: &Article) -> Self {
        Self {
            title: normalize(&article.title),
            desc: normalize(&article.desc),
            tags: article.joined_tags(),
        }
    }
}

/// Relevance of `article` for already-normalized `terms`.
///
/// Returns [`NO_QUERY_SCORE`] for an empty term list, otherwise the sum of
/// the weights above. Empty terms are skipped. Never fails.
pub fn score_article<S: AsRef<str>>(article: &Article, terms: &[S]) -> u32 {
    if terms.is_empty() {
        return NO_QUERY_SCORE;
    }
    score_breakdown(article, terms).total()
}

/// Per-check contributions for `article` against `terms`.
///
/// An empty term list yields an all-zero breakdown; the sentinel lives in
/// [`score_article`] only.
pub fn score_breakdown<S: AsRef<str>>(article: &Article, terms: &[S]) -> ScoreBreakdown {
    breakdown_for_query(article, &Query::from_terms(terms))
}

/// Score against a pre-compiled query. Used by the search scan.
pub(crate) fn score_for_query(article: &Article, query: &Query) -> u32 {
    if query.is_empty() {
        return NO_QUERY_SCORE;
    }
    breakdown_for_query(article, query).total()
}

pub(crate) fn breakdown_for_query(article: &Article, query: &Query) -> ScoreBreakdown {
    let mut breakdown = ScoreBreakdown::default();
    if query.is_empty() {
        return breakdown;
    }

    let fields = MatchFields::of(article);
    for term in query.terms() {
        accumulate(&mut breakdown, &fields, term);
    }
    breakdown
}

fn accumulate(breakdown: &mut ScoreBreakdown, fields: &MatchFields, term: &QueryTerm) {
    if term.is_empty() {
        return;
    }
    let text = term.as_str();

    if fields.title.contains(text) {
        breakdown.title += TITLE_MATCH_SCORE;
    }
    if fields.desc.contains(text) {
        breakdown.desc += DESC_MATCH_SCORE;
    }
    if fields.tags.contains(text) {
        breakdown.tags += TAG_MATCH_SCORE;
    }
    if term.starts_word_in(&fields.title) {
        breakdown.title_boundary += TITLE_BOUNDARY_BONUS;
    }
    if term.starts_word_in(&fields.desc) {
        breakdown.desc_boundary += DESC_BOUNDARY_BONUS;
    }
}
