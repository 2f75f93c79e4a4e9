//! Structural invariants of search results.

use super::common::positions;
use super::oracles::{corpus_strategy, oracle_score, terms_strategy};
use lwcsearch::{parse_terms, search, search_scored};
use proptest::prelude::*;
use std::collections::HashSet;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Blank queries return the input unchanged.
    #[test]
    fn prop_blank_query_is_identity(corpus in corpus_strategy(), blank in "[ \t\n]{0,5}") {
        let results = search(&corpus, &blank);
        prop_assert_eq!(positions(&corpus, &results), (0..corpus.len()).collect::<Vec<_>>());
    }

    /// Queries made only of one-character tokens return the input unchanged.
    #[test]
    fn prop_short_tokens_are_identity(
        corpus in corpus_strategy(),
        tokens in prop::collection::vec("[a-z0-9]", 1..5),
    ) {
        let query = tokens.join(" ");
        let results = search(&corpus, &query);
        prop_assert_eq!(positions(&corpus, &results), (0..corpus.len()).collect::<Vec<_>>());
    }

    /// Results are a duplicate-free subset, sorted by score then position.
    #[test]
    fn prop_results_ranked_subset(corpus in corpus_strategy(), terms in terms_strategy()) {
        let query = terms.join(" ");
        let results = search_scored(&corpus, &query);

        let mut seen = HashSet::new();
        for r in &results {
            prop_assert!(r.position < corpus.len());
            prop_assert!(std::ptr::eq(r.article, &corpus[r.position]));
            prop_assert!(seen.insert(r.position), "duplicate position {}", r.position);
            prop_assert!(r.score > 0);
        }

        for pair in results.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(a.score > b.score || (a.score == b.score && a.position < b.position));
        }
    }

    /// Exactly the articles with a positive oracle score are returned.
    #[test]
    fn prop_results_complete(corpus in corpus_strategy(), terms in terms_strategy()) {
        let query = terms.join(" ");
        let parsed = parse_terms(&query);
        let returned: HashSet<usize> = search_scored(&corpus, &query)
            .iter()
            .map(|r| r.position)
            .collect();

        for (i, article) in corpus.iter().enumerate() {
            let expected = oracle_score(article, &parsed) > 0;
            prop_assert_eq!(returned.contains(&i), expected, "article {}", i);
        }
    }

    /// Results never grow past the input.
    #[test]
    fn prop_results_bounded(corpus in corpus_strategy(), query in "\\PC{0,20}") {
        prop_assert!(search(&corpus, &query).len() <= corpus.len());
    }
}
