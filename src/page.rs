// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Seeding the search box from the page URL.
//!
//! Article pages link back with `?q=<query>`. On load, the page copies that
//! parameter into its search input and fires an `input` event, so whatever
//! listener drives live search runs as if the user had typed it.
//!
//! The page is reached only through two small traits. [`PageHost`] reads the
//! URL and finds fields, [`InputField`] sets a value and fires the event. The
//! browser implementation lives in the `wasm` module; [`UrlPage`] is the
//! native one, used by the CLI and by tests.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use tracing::debug;
use url::Url;

/// URL parameter carrying the query.
pub const QUERY_PARAM: &str = "q";

/// Element id of the search input.
pub const SEARCH_INPUT_ID: &str = "searchInput";

/// A text input on the page.
pub trait InputField {
    fn set_value(&mut self, value: &str);

    /// Fire a bubbling `input` event at the field.
    fn dispatch_input(&self);
}

/// The page hosting the search box.
pub trait PageHost {
    type Field: InputField;

    /// First value of query parameter `name`, decoded.
    fn query_param(&self, name: &str) -> Option<String>;

    fn find_field(&self, id: &str) -> Option<Self::Field>;
}

/// Copy `?q=` into the search input and notify its listeners.
///
/// Does nothing when the parameter is missing or empty, or the page has no
/// search input. Returns whether the field was filled.
pub fn init_url_search<H: PageHost>(host: &H) -> bool {
    let Some(query) = host.query_param(QUERY_PARAM).filter(|q| !q.is_empty()) else {
        return false;
    };

    let Some(mut field) = host.find_field(SEARCH_INPUT_ID) else {
        debug!(id = SEARCH_INPUT_ID, "no search input on page");
        return false;
    };

    field.set_value(&query);
    field.dispatch_input();
    true
}

// =============================================================================
// NATIVE HOST
// =============================================================================

/// Event delivered to input listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputEvent {
    /// Id of the field the event was fired at.
    pub target_id: String,
    /// Field value at dispatch time.
    pub value: String,
    pub bubbles: bool,
}

type Listener = Rc<dyn Fn(&InputEvent)>;
type Listeners = Rc<RefCell<Vec<Listener>>>;

struct FieldState {
    id: String,
    value: String,
    listeners: Vec<Listener>,
}

/// Handle to an input registered on a [`UrlPage`].
///
/// Clones share the same field, the way DOM element references do.
#[derive(Clone)]
pub struct SearchBox {
    state: Rc<RefCell<FieldState>>,
    page_listeners: Listeners,
}

impl SearchBox {
    pub fn id(&self) -> String {
        self.state.borrow().id.clone()
    }

    pub fn value(&self) -> String {
        self.state.borrow().value.clone()
    }

    /// Listen for `input` events fired at this field.
    pub fn on_input(&self, listener: impl Fn(&InputEvent) + 'static) {
        self.state.borrow_mut().listeners.push(Rc::new(listener));
    }
}

impl fmt::Debug for SearchBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("SearchBox")
            .field("id", &state.id)
            .field("value", &state.value)
            .field("listeners", &state.listeners.len())
            .finish()
    }
}

impl InputField for SearchBox {
    fn set_value(&mut self, value: &str) {
        self.state.borrow_mut().value = value.to_string();
    }

    fn dispatch_input(&self) {
        // Snapshot listeners first so a listener may read the field or
        // register more listeners without a borrow conflict.
        let (event, own) = {
            let state = self.state.borrow();
            let event = InputEvent {
                target_id: state.id.clone(),
                value: state.value.clone(),
                bubbles: true,
            };
            (event, state.listeners.clone())
        };

        for listener in &own {
            listener(&event);
        }

        if event.bubbles {
            let page = self.page_listeners.borrow().clone();
            for listener in &page {
                listener(&event);
            }
        }
    }
}

/// A page known only by its URL, with inputs registered by id.
pub struct UrlPage {
    url: Url,
    fields: Vec<SearchBox>,
    listeners: Listeners,
}

impl UrlPage {
    /// Parse a page URL. Relative inputs such as `?q=wire` or `/posts?q=wire`
    /// resolve against `http://localhost/`.
    pub fn parse(input: &str) -> Result<Self, url::ParseError> {
        let url = match Url::parse(input) {
            Ok(url) => url,
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                Url::parse("http://localhost/")?.join(input)?
            }
            Err(err) => return Err(err),
        };
        Ok(Self::from_url(url))
    }

    pub fn from_url(url: Url) -> Self {
        Self {
            url,
            fields: Vec::new(),
            listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Register an input with `id` and return a handle to it.
    pub fn add_field(&mut self, id: &str) -> SearchBox {
        let field = SearchBox {
            state: Rc::new(RefCell::new(FieldState {
                id: id.to_string(),
                value: String::new(),
                listeners: Vec::new(),
            })),
            page_listeners: Rc::clone(&self.listeners),
        };
        self.fields.push(field.clone());
        field
    }

    /// Listen at page level for bubbling `input` events from any field.
    pub fn on_input(&self, listener: impl Fn(&InputEvent) + 'static) {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }
}

impl fmt::Debug for UrlPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UrlPage")
            .field("url", &self.url.as_str())
            .field("fields", &self.fields)
            .finish()
    }
}

impl PageHost for UrlPage {
    type Field = SearchBox;

    fn query_param(&self, name: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }

    fn find_field(&self, id: &str) -> Option<SearchBox> {
        self.fields
            .iter()
            .find(|field| field.state.borrow().id == id)
            .cloned()
    }
}
