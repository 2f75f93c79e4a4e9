// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings.
//!
//! Exports the five page-facing operations as plain module functions:
//! `search`, `highlight`, `normalize`, `escapeRegex`, `initUrlSearch`.
//! Nothing is attached to `window`; the page imports what it needs.
//!
//! `search` hands back the caller's own article objects, reordered, so
//! identity comparisons and extra fields survive the round trip. Articles are
//! read one at a time; a bad entry never abandons the whole search.

use crate::highlight::highlight;
use crate::page::{init_url_search, InputField, PageHost};
use crate::search::search_query;
use crate::search::utils::Query;
use crate::types::Article;
use crate::util::normalize::{escape_regex, normalize};
use serde_wasm_bindgen::from_value;
use tracing::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventInit, HtmlInputElement, UrlSearchParams, Window};

/// Filter and rank a JS array of articles.
///
/// Returns the input itself when there is no real query or when it is not an
/// array, otherwise a new array of the matching objects. An entry that cannot
/// be read as an article scores as an empty one, so it never matches.
#[wasm_bindgen(js_name = search)]
pub fn search_js(articles: JsValue, query: Option<String>) -> JsValue {
    let query = Query::parse(query.as_deref().unwrap_or(""));
    if query.is_empty() || !js_sys::Array::is_array(&articles) {
        return articles;
    }

    let input = js_sys::Array::from(&articles);
    let parsed: Vec<Article> = input
        .iter()
        .enumerate()
        .map(|(position, value)| {
            from_value(value).unwrap_or_else(|err| {
                debug!(position, %err, "unreadable article scored as empty");
                Article::default()
            })
        })
        .collect();

    let output = js_sys::Array::new();
    for result in search_query(&parsed, &query) {
        output.push(&input.get(result.position as u32));
    }
    output.into()
}

#[wasm_bindgen(js_name = highlight)]
pub fn highlight_js(text: Option<String>, terms: Option<Vec<String>>) -> Option<String> {
    let text = text?;
    match terms {
        Some(terms) => Some(highlight(&text, terms.as_slice())),
        None => Some(text),
    }
}

#[wasm_bindgen(js_name = normalize)]
pub fn normalize_js(text: Option<String>) -> String {
    text.as_deref().map(normalize).unwrap_or_default()
}

#[wasm_bindgen(js_name = escapeRegex)]
pub fn escape_regex_js(text: &str) -> String {
    escape_regex(text)
}

/// Seed `#searchInput` from `?q=` on the current page.
#[wasm_bindgen(js_name = initUrlSearch)]
pub fn init_url_search_js() {
    if let Some(page) = WebPage::current() {
        init_url_search(&page);
    }
}

// =============================================================================
// BROWSER HOST
// =============================================================================

/// The live browser page.
pub struct WebPage {
    window: Window,
}

impl WebPage {
    pub fn current() -> Option<Self> {
        web_sys::window().map(|window| Self { window })
    }
}

/// A `<input>` element found by id.
pub struct WebInput(HtmlInputElement);

impl InputField for WebInput {
    fn set_value(&mut self, value: &str) {
        self.0.set_value(value);
    }

    fn dispatch_input(&self) {
        let init = EventInit::new();
        init.set_bubbles(true);
        if let Ok(event) = Event::new_with_event_init_dict("input", &init) {
            let _ = self.0.dispatch_event(&event);
        }
    }
}

impl PageHost for WebPage {
    type Field = WebInput;

    fn query_param(&self, name: &str) -> Option<String> {
        let search = self.window.location().search().ok()?;
        UrlSearchParams::new_with_str(&search).ok()?.get(name)
    }

    fn find_field(&self, id: &str) -> Option<WebInput> {
        self.window
            .document()?
            .get_element_by_id(id)?
            .dyn_into::<HtmlInputElement>()
            .ok()
            .map(WebInput)
    }
}
