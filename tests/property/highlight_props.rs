//! Highlighting only inserts markers.

use lwcsearch::{highlight, MARK_CLOSE, MARK_OPEN};
use proptest::prelude::*;

/// Remove every marker pair the highlighter inserted.
fn strip_marks(s: &str) -> String {
    s.replace(MARK_OPEN, "").replace(MARK_CLOSE, "")
}

/// Terms that could match inside a marker make stripping ambiguous.
fn matches_marker_text(term: &str) -> bool {
    "mark".contains(term.to_ascii_lowercase().as_str())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// With the markers removed, the text is unchanged.
    #[test]
    fn prop_highlight_only_adds_markers(
        text in "[a-zA-Z .,!]{0,40}",
        terms in prop::collection::vec("[a-zA-Z]{2,4}", 0..4),
    ) {
        prop_assume!(!terms.iter().any(|t| matches_marker_text(t)));
        prop_assert_eq!(strip_marks(&highlight(&text, &terms)), text);
    }

    /// One term wraps each non-overlapping case-insensitive occurrence.
    #[test]
    fn prop_single_term_marks_every_occurrence(
        text in "[a-zA-Z ]{0,40}",
        term in "[a-zA-Z]{2,3}",
    ) {
        prop_assume!(!matches_marker_text(&term));
        let expected = text.to_ascii_lowercase().matches(&term.to_ascii_lowercase()).count();
        let out = highlight(&text, &[term.as_str()]);
        prop_assert_eq!(out.matches(MARK_OPEN).count(), expected);
        prop_assert_eq!(out.matches(MARK_CLOSE).count(), expected);
    }

    /// No terms, no change.
    #[test]
    fn prop_no_terms_is_identity(text in "\\PC{0,40}") {
        let none: [&str; 0] = [];
        prop_assert_eq!(highlight(&text, &none), text);
    }

    /// Metacharacters in a term are matched literally.
    #[test]
    fn prop_metacharacter_terms_are_literal(
        prefix in "[a-z ]{0,10}",
        term in "[.*+?^${}()|\\[\\]\\\\]{1,4}",
        suffix in "[a-z ]{0,10}",
    ) {
        let text = format!("{prefix}{term}{suffix}");
        let out = highlight(&text, &[term.as_str()]);
        let wrapped = format!("{}{}{}", MARK_OPEN, term, MARK_CLOSE);
        prop_assert!(out.contains(&wrapped));
    }
}
