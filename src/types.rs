// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records search works over.
//!
//! Articles come from whatever manifest the site generator emits. Search only
//! ever reads them: it never creates, edits, or drops an article, it only
//! decides which ones to hand back and in what order.
//!
//! # Invariants
//!
//! - **Search output**: every returned reference points into the input slice,
//!   each input article appears at most once, and nothing is fabricated.
//! - **ScoredArticle**: `position < articles.len()` for the slice it was
//!   scored against.

use serde::{Deserialize, Deserializer, Serialize};

/// A searchable article record.
///
/// Only `title`, `desc`, and `tags` take part in scoring. The remaining fields
/// ride along so front ends can render and link results.
///
/// Scored fields that are missing or `null` read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Short description shown under the title.
    #[serde(default, alias = "description", deserialize_with = "null_as_default")]
    pub desc: String,
    /// Tags, in manifest order. Matched verbatim (not normalized).
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl Article {
    /// Article with a title and nothing else.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = desc.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Tags joined with a single space, the form tag matching runs against.
    pub fn joined_tags(&self) -> String {
        self.tags.join(" ")
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// An article paired with its relevance score during ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredArticle<'a> {
    pub article: &'a Article,
    pub score: u32,
    /// Index of the article in the input sequence. Used as the tiebreaker.
    pub position: usize,
}
