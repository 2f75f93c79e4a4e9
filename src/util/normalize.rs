// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization for matching.
//!
//! Both sides of a comparison go through [`normalize`] so that "LWC's
//! `@wire`" and "lwc s wire" look the same to substring checks. Only the ASCII
//! word class survives (`[A-Za-z0-9_]`); everything else, accented letters
//! included, turns into a separator. Locale-aware folding is deliberately not
//! attempted here.

/// Lowercase, turn every non-word character into a space, collapse whitespace.
///
/// - `"Lightning Web-Components!"` → `"lightning web components"`
/// - `"  @wire(getRecord)  "` → `"wire getrecord"`
/// - `""` → `""`
///
/// Total and idempotent: `normalize(&normalize(s)) == normalize(s)`.
pub fn normalize(value: &str) -> String {
    let lowered = value.to_lowercase();
    let mut out = String::with_capacity(lowered.len());

    for word in lowered.split(|c: char| !is_word_char(c)) {
        if word.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }

    out
}

/// The `\w` class: ASCII letters, digits, underscore.
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Characters that carry meaning inside a pattern and must be escaped.
const PATTERN_SPECIALS: &[char] = &[
    '.', '*', '+', '?', '^', '$', '{', '}', '(', ')', '|', '[', ']', '\\',
];

/// Backslash-escape pattern metacharacters so user text matches literally.
///
/// Escapes exactly `. * + ? ^ $ { } ( ) | [ ] \`. Everything else passes
/// through untouched.
pub fn escape_regex(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + value.len() / 4);
    for c in value.chars() {
        if PATTERN_SPECIALS.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
