// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading the article manifest the site generator emits.
//!
//! Two shapes are accepted: a bare JSON array of articles, or an object with
//! a `version` and an `articles` array. Loading is the only fallible step;
//! once articles are in memory, search never fails.

use crate::types::Article;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Manifest format version this crate reads.
pub const MANIFEST_VERSION: u32 = 1;

#[derive(Deserialize, Clone, Debug)]
#[serde(untagged)]
pub enum ArticleManifest {
    /// `[{ "title": ... }, ...]`
    List(Vec<Article>),
    /// `{ "version": 1, "articles": [...] }`
    Versioned {
        #[serde(default = "default_version")]
        version: u32,
        articles: Vec<Article>,
    },
}

fn default_version() -> u32 {
    MANIFEST_VERSION
}

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid manifest JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported manifest version {found} (expected {})", MANIFEST_VERSION)]
    UnsupportedVersion { found: u32 },
}

impl ArticleManifest {
    pub fn into_articles(self) -> Result<Vec<Article>, ManifestError> {
        match self {
            ArticleManifest::List(articles) => Ok(articles),
            ArticleManifest::Versioned { version, articles } => {
                if version != MANIFEST_VERSION {
                    return Err(ManifestError::UnsupportedVersion { found: version });
                }
                Ok(articles)
            }
        }
    }
}

/// Parse manifest JSON into articles.
pub fn parse_manifest(json: &str) -> Result<Vec<Article>, ManifestError> {
    let manifest: ArticleManifest = serde_json::from_str(json)?;
    manifest.into_articles()
}

/// Read and parse a manifest file.
pub fn load_manifest(path: impl AsRef<Path>) -> Result<Vec<Article>, ManifestError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ManifestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_manifest(&content)
}
