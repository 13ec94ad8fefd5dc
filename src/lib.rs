//! pedia - Wiki-style encyclopedia over markdown files
//!
//! A command-line encyclopedia that stores entries as individually named
//! markdown documents and serves list, view, search, create, edit, and
//! random-browse operations through an explicit request router.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod router;

pub use error::WikiError;
