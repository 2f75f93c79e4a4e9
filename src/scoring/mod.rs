// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how articles get their numbers and their order.
//!
//! Title hits outweigh description hits, which outweigh tag hits, and a term
//! that starts a word earns a little extra on top.

mod core;
pub mod ranking;

pub use self::core::*;
