// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Wrapping query matches in markers for display.
//!
//! Terms are applied one after another, each over the output of the previous
//! one. Overlapping terms therefore nest ("light" then "ligh" gives
//! `<mark><mark>Ligh</mark>t</mark>`), and a term that happens to match the
//! marker text itself ("mark") matches inside earlier markers too. That is
//! how highlighting has always behaved on the site, and templates rely on it
//! being a plain sequential rewrite.
//!
//! The source text is not escaped. Callers rendering HTML must escape it
//! before highlighting, or trust it.
//!
//! # Case folding
//!
//! Case-insensitive here means what the site's browser patterns mean: two
//! characters match when their single-character uppercase forms agree, and a
//! non-ASCII character never folds onto ASCII. So `ſ` does not match `s` and
//! the Kelvin sign does not match `k`, while `é` still matches `É`. Characters
//! outside the Basic Multilingual Plane only match themselves.

use crate::util::normalize::escape_regex;
use regex::{Captures, Regex};
use tracing::debug;

/// Default opening marker.
pub const MARK_OPEN: &str = "<mark>";

/// Default closing marker.
pub const MARK_CLOSE: &str = "</mark>";

/// Wraps case-insensitive term matches in an open/close marker pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlighter {
    open: String,
    close: String,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new(MARK_OPEN, MARK_CLOSE)
    }
}

impl Highlighter {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    /// Wrap every match of every term, term by term.
    ///
    /// Empty `text` or an empty term list returns `text` unchanged. Empty
    /// terms are skipped.
    pub fn highlight<S: AsRef<str>>(&self, text: &str, terms: &[S]) -> String {
        let mut result = text.to_string();
        if text.is_empty() || terms.is_empty() {
            return result;
        }

        for term in terms {
            let term = term.as_ref();
            if term.is_empty() {
                continue;
            }

            let pattern = match Regex::new(&folded_pattern(term)) {
                Ok(pattern) => pattern,
                Err(err) => {
                    debug!(term, %err, "highlight pattern rejected");
                    continue;
                }
            };

            result = pattern
                .replace_all(&result, |caps: &Captures| {
                    format!("{}{}{}", self.open, &caps[0], self.close)
                })
                .into_owned();
        }

        result
    }
}

/// Pattern matching `term` literally, with each character widened to the
/// characters that share its case key.
fn folded_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() * 4);
    for c in term.chars() {
        let variants = case_variants(c);
        if variants.len() == 1 {
            pattern.push_str(&escape_regex(c.encode_utf8(&mut [0; 4])));
            continue;
        }
        pattern.push_str("(?:");
        for (i, variant) in variants.iter().enumerate() {
            if i > 0 {
                pattern.push('|');
            }
            pattern.push_str(&escape_regex(variant.encode_utf8(&mut [0; 4])));
        }
        pattern.push(')');
    }
    pattern
}

/// The character `c` is compared under: its uppercase form when that is a
/// single character and does not take a non-ASCII character into ASCII.
fn case_key(c: char) -> char {
    if u32::from(c) > 0xFFFF {
        return c;
    }
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) if c.is_ascii() || !u.is_ascii() => u,
        _ => c,
    }
}

/// Every character sharing `c`'s case key, `c` included.
fn case_variants(c: char) -> Vec<char> {
    if c.is_ascii() {
        let mut variants = vec![c.to_ascii_lowercase(), c.to_ascii_uppercase()];
        variants.dedup();
        return variants;
    }
    if u32::from(c) > 0xFFFF {
        return vec![c];
    }

    let key = case_key(c);
    (0..=0xFFFF_u32)
        .filter_map(char::from_u32)
        .filter(|&other| case_key(other) == key)
        .collect()
}

/// Highlight with `<mark>` / `</mark>`.
pub fn highlight<S: AsRef<str>>(text: &str, terms: &[S]) -> String {
    Highlighter::default().highlight(text, terms)
}
