// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for normalization and term parsing.

#![no_main]

use libfuzzer_sys::fuzz_target;
use lwcsearch::{normalize, parse_terms, MIN_TERM_LEN};

fuzz_target!(|text: &str| {
    let once = normalize(text);
    assert_eq!(normalize(&once), once);
    assert!(!once.contains("  "));

    for term in parse_terms(text) {
        assert!(term.chars().count() >= MIN_TERM_LEN);
        assert!(once.contains(&term));
    }
});
