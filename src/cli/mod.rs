// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the lwcsearch command-line interface.
//!
//! Three subcommands: `search` to query a manifest the way the site does,
//! `explain` to see where every point of every score came from, and
//! `normalize` to check what the matcher actually sees for a piece of text.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "lwcsearch",
    about = "Weighted relevance search over a static article manifest",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a manifest and display ranked results
    Search {
        /// Path to the article manifest (JSON)
        manifest: String,

        /// Search query. Overrides any `q` parameter from --url
        query: Option<String>,

        /// Page URL to seed the search box from, e.g. "https://lwc.guide/?q=wire"
        ///
        /// The `q` parameter is copied into the search input exactly as the
        /// site does on page load.
        #[arg(long)]
        url: Option<String>,

        /// Maximum number of results to show (all by default)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Highlight matched terms in titles and descriptions
        #[arg(long)]
        highlight: bool,

        /// Show each result's score
        #[arg(long)]
        scores: bool,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the per-field score breakdown for every article
    Explain {
        /// Path to the article manifest (JSON)
        manifest: String,

        /// Search query
        query: String,
    },

    /// Print the normalized form of some text and the query terms it yields
    Normalize {
        /// Text to normalize
        text: String,
    },
}
