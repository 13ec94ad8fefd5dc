//! Typed request routing
//!
//! Maps the conceptual request surface (paths, form fields, redirects,
//! status codes) onto the application handlers: an explicit table of path
//! patterns instead of framework dispatch. Fixed routes match before the
//! title catch-all.

use crate::application::create_entry::create_entry;
use crate::application::edit_entry::{current_content, edit_entry};
use crate::application::list_entries::list_entries;
use crate::application::random_entry::random_entry;
use crate::application::search_entries::{search_entries, SearchOutcome};
use crate::application::view_entry::view_entry;
use crate::application::EntryPage;
use crate::error::{Result, WikiError};
use crate::infrastructure::EntryStore;
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A single request against the wiki
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub form: BTreeMap<String, String>,
}

impl Request {
    pub fn get(path: impl Into<String>) -> Self {
        Request {
            method: Method::Get,
            path: path.into(),
            form: BTreeMap::new(),
        }
    }

    pub fn post(path: impl Into<String>) -> Self {
        Request {
            method: Method::Post,
            path: path.into(),
            form: BTreeMap::new(),
        }
    }

    /// Attach a form field (builder style)
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.form.insert(key.into(), value.into());
        self
    }

    fn field(&self, key: &str) -> &str {
        self.form.get(key).map(String::as_str).unwrap_or_default()
    }
}

/// Typed response payloads, one per page the wiki can show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Home page: every entry title
    TitleList(Vec<String>),
    /// A rendered entry
    EntryPage(EntryPage),
    /// Titles matching a search query
    SearchResults(Vec<String>),
    /// Blank creation form
    NewForm,
    /// Edit form pre-populated with the stored content, when there is any
    EditForm {
        title: String,
        content: Option<String>,
    },
    /// Follow-up location after a successful mutation
    Redirect(String),
    /// Non-fatal error page with HTTP-equivalent status
    Error { status: u16, message: String },
}

/// HTTP-equivalent status for a user-visible error.
/// `None` for faults that fail the whole request instead of producing a page.
pub fn status_for(error: &WikiError) -> Option<u16> {
    match error {
        WikiError::NotFound(_) => Some(404),
        WikiError::EmptyStore => Some(404),
        WikiError::ValidationFailed(_) => Some(400),
        WikiError::Conflict(_) => Some(403),
        _ => None,
    }
}

/// Dispatches requests to the application handlers over an injected store
pub struct Router<S> {
    store: S,
}

impl<S: EntryStore> Router<S> {
    pub fn new(store: S) -> Self {
        Router { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Route a request to its handler.
    ///
    /// User-visible failures (not found, validation, conflict, empty store)
    /// come back as `Err`; storage faults propagate the same way and are
    /// distinguished by [`status_for`].
    pub fn dispatch(&self, request: &Request) -> Result<Response> {
        debug!(method = ?request.method, path = %request.path, "dispatching request");

        let path = request.path.trim_start_matches('/').trim_end_matches('/');

        match path {
            "" => Ok(Response::TitleList(list_entries(&self.store)?)),

            "search" => {
                let query = request.field("q");
                if query.is_empty() {
                    // No query: back to the list
                    return Ok(Response::Redirect("/".to_string()));
                }
                match search_entries(&self.store, query)? {
                    SearchOutcome::Entry(page) => Ok(Response::EntryPage(page)),
                    SearchOutcome::Matches(titles) => Ok(Response::SearchResults(titles)),
                }
            }

            "new" => match request.method {
                Method::Get => Ok(Response::NewForm),
                Method::Post => {
                    create_entry(&self.store, request.field("title"), request.field("content"))?;
                    Ok(Response::Redirect("/".to_string()))
                }
            },

            "random" => Ok(Response::EntryPage(random_entry(&self.store)?)),

            _ => {
                if let Some(title) = path.strip_prefix("edit/") {
                    match request.method {
                        Method::Get => Ok(Response::EditForm {
                            title: title.to_string(),
                            content: current_content(&self.store, title)?,
                        }),
                        Method::Post => {
                            edit_entry(&self.store, title, request.field("content"))?;
                            Ok(Response::Redirect("/".to_string()))
                        }
                    }
                } else {
                    Ok(Response::EntryPage(view_entry(&self.store, path)?))
                }
            }
        }
    }

    /// Route a request, turning user-visible errors into error pages.
    ///
    /// This is the HTTP-like surface: only storage faults remain `Err`.
    pub fn dispatch_page(&self, request: &Request) -> Result<Response> {
        match self.dispatch(request) {
            Err(err) => match status_for(&err) {
                Some(status) => Ok(Response::Error {
                    status,
                    message: err.to_string(),
                }),
                None => Err(err),
            },
            ok => ok,
        }
    }
}
