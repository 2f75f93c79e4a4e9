//! Weighted relevance search over a static article manifest.
//!
//! Small sites don't need an index. The manifest is a few hundred articles,
//! already in memory, so a query is a linear scan: normalize, score each
//! article on title, description, and tags, drop the misses, sort.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │ manifest.rs │────▶│  search/     │────▶│ highlight.rs│
//! │ (Article    │     │ (Query,      │     │ (<mark>     │
//! │  loading)   │     │  search)     │     │  wrapping)  │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!                            │
//!                            ▼
//!                     ┌──────────────┐     ┌─────────────┐
//!                     │  scoring/    │     │  page.rs    │
//!                     │ (weights,    │     │ (?q= → box) │
//!                     │  ranking)    │     │             │
//!                     └──────────────┘     └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use lwcsearch::{highlight, parse_terms, search, Article};
//!
//! let articles = vec![Article::new("Intro to LWC").with_tags(["beginner"])];
//! let results = search(&articles, "lwc");
//! let title = highlight(&results[0].title, &parse_terms("lwc"));
//! ```

// Module declarations
pub mod highlight;
pub mod manifest;
pub mod page;
pub mod scoring;
pub mod search;
mod types;
pub mod util;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use highlight::{highlight, Highlighter, MARK_CLOSE, MARK_OPEN};
pub use manifest::{load_manifest, parse_manifest, ArticleManifest, ManifestError};
pub use page::{
    init_url_search, InputEvent, InputField, PageHost, SearchBox, UrlPage, QUERY_PARAM,
    SEARCH_INPUT_ID,
};
pub use scoring::ranking::compare_results;
pub use scoring::{score_article, score_breakdown, ScoreBreakdown, NO_QUERY_SCORE};
pub use search::utils::{parse_terms, Query, QueryTerm, MIN_TERM_LEN};
pub use search::{search, search_query, search_scored};
pub use types::{Article, ScoredArticle};
pub use util::normalize::{escape_regex, normalize};
