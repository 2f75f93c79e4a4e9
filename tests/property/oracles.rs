//! Oracle scoring and shared strategies.
//!
//! The oracle spells out the weight table with plain string scans and no
//! regex, so a disagreement points at either the boundary pattern or the
//! field preparation in the library.

use lwcsearch::{normalize, Article};
use proptest::prelude::*;

/// Reference score for one article and already-normalized terms.
pub fn oracle_score(article: &Article, terms: &[String]) -> u32 {
    if terms.is_empty() {
        return 1;
    }

    let title = normalize(&article.title);
    let desc = normalize(&article.desc);
    let tags = article.tags.join(" ");

    let mut score = 0;
    for term in terms.iter().filter(|t| !t.is_empty()) {
        if title.contains(term.as_str()) {
            score += 10;
        }
        if desc.contains(term.as_str()) {
            score += 5;
        }
        if tags.contains(term.as_str()) {
            score += 3;
        }
        if starts_word(&title, term) {
            score += 3;
        }
        if starts_word(&desc, term) {
            score += 2;
        }
    }
    score
}

/// Does `term` occur at the start of a space-separated word in `text`?
///
/// `text` is normalized, so word characters and single spaces only.
pub fn starts_word(text: &str, term: &str) -> bool {
    text.match_indices(term)
        .any(|(i, _)| i == 0 || text.as_bytes()[i - 1] == b' ')
}

// =============================================================================
// STRATEGIES
// =============================================================================

/// Words drawn from a small vocabulary so matches actually happen.
pub fn word_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => prop::sample::select(vec![
            "lwc", "wire", "apex", "jest", "slots", "hooks", "events", "light",
            "lightning", "component", "components", "data", "service", "css",
        ])
        .prop_map(str::to_string),
        1 => "[a-z0-9]{2,7}",
    ]
}

/// Free text with mixed case and punctuation between words.
pub fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        (word_strategy(), prop::sample::select(vec![" ", "-", ", ", "! ", " @", "_"]), any::<bool>()),
        0..8,
    )
    .prop_map(|parts| {
        parts
            .into_iter()
            .map(|(word, sep, upper)| {
                let word = if upper { word.to_uppercase() } else { word };
                format!("{word}{sep}")
            })
            .collect::<String>()
    })
}

pub fn article_strategy() -> impl Strategy<Value = Article> {
    (
        text_strategy(),
        text_strategy(),
        prop::collection::vec(word_strategy(), 0..4),
    )
        .prop_map(|(title, desc, tags)| Article::new(title).with_desc(desc).with_tags(tags))
}

pub fn corpus_strategy() -> impl Strategy<Value = Vec<Article>> {
    prop::collection::vec(article_strategy(), 0..12)
}

/// Queries of one to four real terms.
pub fn terms_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 1..4)
}
