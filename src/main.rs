// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use lwcsearch::{
    escape_regex, init_url_search, load_manifest, normalize, parse_terms, score_breakdown,
    search_query, Article, Query, ScoredArticle, UrlPage, MIN_TERM_LEN, NO_QUERY_SCORE,
    SEARCH_INPUT_ID,
};
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod cli;
use cli::display::{pad, truncate, Align, Painter, Panel, Role};
use cli::{Cli, Commands};

/// Log filter env var, e.g. `LWCSEARCH_LOG=debug`.
const LOG_ENV: &str = "LWCSEARCH_LOG";

const TITLE_WIDTH: usize = 60;
const DESC_WIDTH: usize = 70;

fn main() {
    init_logging();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Search {
            manifest,
            query,
            url,
            limit,
            highlight,
            scores,
            json,
        } => {
            let options = SearchOptions {
                limit,
                highlight,
                scores,
                json,
            };
            run_search(&manifest, query, url.as_deref(), &options)
        }
        Commands::Explain { manifest, query } => run_explain(&manifest, &query),
        Commands::Normalize { text } => {
            run_normalize(&text);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

struct SearchOptions {
    limit: Option<usize>,
    highlight: bool,
    scores: bool,
    json: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResultOutput<'a> {
    rank: usize,
    score: u32,
    position: usize,
    #[serde(flatten)]
    article: &'a Article,
}

fn run_search(
    manifest: &str,
    query: Option<String>,
    url: Option<&str>,
    options: &SearchOptions,
) -> Result<()> {
    let articles =
        load_manifest(manifest).with_context(|| format!("Failed to load {}", manifest))?;
    debug!(articles = articles.len(), manifest, "manifest loaded");

    let raw_query = match (query, url) {
        (Some(query), _) => query,
        (None, Some(url)) => query_from_url(url)?,
        (None, None) => String::new(),
    };

    let query = Query::parse(&raw_query);
    let mut results = search_query(&articles, &query);
    if let Some(limit) = options.limit {
        results.truncate(limit);
    }

    if options.json {
        print_json(&results)
    } else {
        print_results(&raw_query, &query, &results, articles.len(), options);
        Ok(())
    }
}

/// Seed the query the way an article page does: `?q=` into the search box,
/// picked up by the page's bubbling input listener.
fn query_from_url(url: &str) -> Result<String> {
    let mut page = UrlPage::parse(url).with_context(|| format!("Invalid --url '{}'", url))?;
    page.add_field(SEARCH_INPUT_ID);

    let seeded: Rc<RefCell<Option<String>>> = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&seeded);
    page.on_input(move |event| *sink.borrow_mut() = Some(event.value.clone()));

    if !init_url_search(&page) {
        info!(url, "no q parameter, listing all articles");
    }

    let value = seeded.borrow_mut().take().unwrap_or_default();
    Ok(value)
}

fn print_json(results: &[ScoredArticle<'_>]) -> Result<()> {
    let output: Vec<ResultOutput> = results
        .iter()
        .enumerate()
        .map(|(rank, result)| ResultOutput {
            rank: rank + 1,
            score: result.score,
            position: result.position,
            article: result.article,
        })
        .collect();
    let json = serde_json::to_string_pretty(&output).context("Failed to serialize results")?;
    println!("{}", json);
    Ok(())
}

fn print_results(
    raw_query: &str,
    query: &Query,
    results: &[ScoredArticle<'_>],
    total: usize,
    options: &SearchOptions,
) {
    let painter = Painter::detect();
    let heading = if query.is_empty() {
        format!("ALL ARTICLES ({})", total)
    } else {
        format!("{} OF {} MATCH \"{}\"", results.len(), total, raw_query.trim())
    };
    let mut panel = Panel::new(&painter, &heading);

    if results.is_empty() {
        panel.line(&painter.paint(Role::Muted, "  No matches"));
        println!("{}", panel.finish());
        return;
    }

    let highlighter = painter.highlighter();
    let terms = query.term_strs();
    let decorate = |text: &str, width: usize, role: Option<Role>| {
        let cut = truncate(text, width);
        match role {
            _ if options.highlight => highlighter.highlight(&cut, &terms),
            Some(role) => painter.paint(role, &cut),
            None => cut,
        }
    };

    for (rank, result) in results.iter().enumerate() {
        let article = result.article;
        let score = if options.scores && !query.is_empty() {
            painter.score(result.score)
        } else {
            String::new()
        };

        panel.line(&format!(
            " {} {} {}",
            pad(&format!("{}.", rank + 1), 4, Align::Right),
            pad(&decorate(&article.title, TITLE_WIDTH, Some(Role::Title)), TITLE_WIDTH + 2, Align::Left),
            score
        ));
        if !article.desc.is_empty() {
            panel.line(&format!("      {}", decorate(&article.desc, DESC_WIDTH, None)));
        }
        if !article.tags.is_empty() {
            panel.line(&format!("      {}", painter.tags(&article.tags)));
        }
        if let Some(href) = &article.href {
            panel.line(&format!("      {}", painter.paint(Role::Muted, href)));
        }
    }

    println!("{}", panel.finish());
}

fn run_explain(manifest: &str, raw_query: &str) -> Result<()> {
    let articles =
        load_manifest(manifest).with_context(|| format!("Failed to load {}", manifest))?;
    let terms = parse_terms(raw_query);

    if terms.is_empty() {
        println!(
            "Query {:?} has no terms of {}+ characters; every article passes through with score {}.",
            raw_query, MIN_TERM_LEN, NO_QUERY_SCORE
        );
        return Ok(());
    }

    let painter = Painter::detect();
    let mut panel = Panel::new(&painter, &format!("SCORE BREAKDOWN: {}", terms.join(" ")));
    panel.line(&painter.paint(
        Role::Muted,
        &format!(
            " {} {} {:>4} {:>4} {:>4} {:>4} {:>4} {:>5}",
            pad("#", 4, Align::Right),
            pad("title", 44, Align::Left),
            "T",
            "D",
            "G",
            "T\\b",
            "D\\b",
            "total"
        ),
    ));
    panel.section("ARTICLES");

    for (position, article) in articles.iter().enumerate() {
        let breakdown = score_breakdown(article, &terms);
        panel.line(&format!(
            " {} {} {} {} {} {} {} {}",
            pad(&position.to_string(), 4, Align::Right),
            pad(&truncate(&article.title, 44), 44, Align::Left),
            painter.points(breakdown.title),
            painter.points(breakdown.desc),
            painter.points(breakdown.tags),
            painter.points(breakdown.title_boundary),
            painter.points(breakdown.desc_boundary),
            painter.score(breakdown.total())
        ));
    }

    println!("{}", panel.finish());
    Ok(())
}

fn run_normalize(text: &str) {
    let painter = Painter::detect();
    println!("normalized: {}", painter.paint(Role::Title, &normalize(text)));

    let terms = parse_terms(text);
    if terms.is_empty() {
        println!(
            "terms:      {}",
            painter.paint(Role::Muted, &format!("(none of {}+ characters)", MIN_TERM_LEN))
        );
    } else {
        println!("terms:      {}", terms.join(", "));
    }

    println!("escaped:    {}", escape_regex(text));
}
