//! The mock API layer.
//!
//! This module simulates a backend search/filter/download workflow over
//! canned JSON fixtures: a static field contract, a caching fixture
//! resolver, and the search / unique-values / download services the UI
//! calls into.

pub mod contract;
pub mod fixtures;
pub mod service;

pub use contract::{ApiContract, FieldDescriptor};
pub use fixtures::{
    DirStore, Endpoint, FixtureContent, FixtureResolver, FixtureStore, ResponseStatus,
    UniqueValue, ValuesEnvelope,
};
pub use service::{
    share_link, ApiService, FileFormat, Navigator, Notice, Row, SearchRequest, SearchResponse,
};
