// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query parsing shared by search, scoring, and the front ends.
//!
//! A raw query becomes a list of normalized terms. Each term carries its
//! word-boundary pattern, compiled once per query so the scan over articles
//! does not rebuild it per article.

use crate::util::normalize::{escape_regex, normalize};
use regex::Regex;
use tracing::debug;

/// Terms shorter than this (in characters) are dropped from queries.
pub const MIN_TERM_LEN: usize = 2;

/// Parse a raw query into normalized terms of at least [`MIN_TERM_LEN`].
///
/// # Example
///
/// ```ignore
/// let terms = parse_terms("Wire a @Record!");
/// assert_eq!(terms, vec!["wire", "record"]);
/// ```
pub fn parse_terms(query: &str) -> Vec<String> {
    normalize(query)
        .split(' ')
        .filter(|t| t.chars().count() >= MIN_TERM_LEN)
        .map(str::to_string)
        .collect()
}

/// One query term plus its start-of-word pattern.
#[derive(Debug, Clone)]
pub struct QueryTerm {
    text: String,
    /// `None` only if the pattern failed to compile; the term then earns
    /// substring points but never the boundary bonus.
    boundary: Option<Regex>,
}

impl QueryTerm {
    pub fn new(term: &str) -> Self {
        let boundary = match Regex::new(&format!(r"\b{}", escape_regex(term))) {
            Ok(pattern) => Some(pattern),
            Err(err) => {
                debug!(term, %err, "boundary pattern rejected");
                None
            }
        };
        Self {
            text: term.to_string(),
            boundary,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Does the term start a word somewhere in `haystack`?
    pub fn starts_word_in(&self, haystack: &str) -> bool {
        self.boundary
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(haystack))
    }
}

/// A parsed query: the terms that survived normalization and filtering.
///
/// An empty `Query` means "no real query", and search passes the input
/// through unchanged.
#[derive(Debug, Clone, Default)]
pub struct Query {
    terms: Vec<QueryTerm>,
}

impl Query {
    pub fn parse(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return Self::default();
        }
        Self::from_terms(&parse_terms(raw))
    }

    /// Build from already-normalized terms. Terms are kept as given, empty
    /// ones included (scoring skips them).
    pub fn from_terms<S: AsRef<str>>(terms: &[S]) -> Self {
        Self {
            terms: terms.iter().map(|t| QueryTerm::new(t.as_ref())).collect(),
        }
    }

    pub fn terms(&self) -> &[QueryTerm] {
        &self.terms
    }

    /// Term texts, for handing to the highlighter.
    pub fn term_strs(&self) -> Vec<&str> {
        self.terms.iter().map(QueryTerm::as_str).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }
}
