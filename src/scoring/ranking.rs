// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored articles get sorted.
//!
//! Higher score first. Equal scores keep manifest order, so the same query
//! over the same manifest always produces the same list.

use crate::types::ScoredArticle;
use std::cmp::Ordering;

/// Compare two scored articles for ranking.
///
/// Sort order:
/// 1. **Score** - descending
/// 2. **Position** - ascending (earlier in the manifest wins)
pub fn compare_results(a: &ScoredArticle<'_>, b: &ScoredArticle<'_>) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| a.position.cmp(&b.position))
}

/// Sort in place by [`compare_results`].
pub fn rank(results: &mut [ScoredArticle<'_>]) {
    results.sort_by(compare_results);
}
