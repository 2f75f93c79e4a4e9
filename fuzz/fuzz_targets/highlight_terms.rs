// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for highlighting with arbitrary terms.
//!
//! Terms go straight into patterns after escaping, so any term the escaper
//! misses shows up here as a rejected pattern or a panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use lwcsearch::{escape_regex, highlight};

fuzz_target!(|input: (String, Vec<String>)| {
    let (text, terms) = input;
    if text.len() > 1024 || terms.len() > 8 {
        return;
    }

    for term in &terms {
        assert!(
            regex::Regex::new(&escape_regex(term)).is_ok(),
            "escaped term failed to compile: {:?}",
            term
        );
    }

    let out = highlight(&text, &terms);
    if terms.iter().all(|t| t.is_empty()) {
        assert_eq!(out, text);
    }
});
