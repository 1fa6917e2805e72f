//! Benchtop - a terminal front end for exploring readout data over mock APIs.
//!
//! Benchtop serves canned JSON fixtures through a small service layer that
//! simulates a backend search/filter/download workflow: a declared field
//! contract, a caching fixture resolver, synthesized search results, and
//! per-field unique-value lookups.
//!
//! # Features
//!
//! - Static contract of queryable readout fields
//! - Fixture resolution with shape normalization and memoization
//! - Search responses shaped by the request's field set
//! - Filter explorer with a unique-values preview
//! - Command console (`view`, `add`, `remove`, `share`, `save`, ...)
//! - Pro/noob color themes
//! - Clipboard hand-off for download and share links
//!
//! # Example
//!
//! ```ignore
//! use benchtop::api::{ApiService, DirStore, FixtureResolver, SearchRequest};
//! use benchtop::clipboard::ClipboardNavigator;
//!
//! // Resolve fixtures from a directory tree
//! let resolver = FixtureResolver::new(Box::new(DirStore::new("fixtures")))?;
//! let mut service = ApiService::new(resolver, Box::new(ClipboardNavigator));
//!
//! // Run a search shaped by the requested fields
//! let response = service.search(&SearchRequest::new().with("cell_type", "Neuron"));
//! println!("{} rows for uid {}", response.total, response.id);
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod api;
pub mod app;
pub mod clipboard;
pub mod console;
pub mod dialog;
pub mod error;
pub mod explorer;
pub mod shared;
pub mod ui;

pub use error::{BenchtopError, Result};
