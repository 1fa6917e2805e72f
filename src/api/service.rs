//! The mock API service: search, unique values, download and share.
//!
//! Everything here degrades rather than fails: resolver errors are
//! swallowed into deterministic fallbacks (synthetic rows, empty value
//! lists) and surfaced as [`Notice`]s so the UI and tests can observe
//! that the degrade branch ran. Batch callers that must abort on failure
//! use the `_checked` variants instead.

use std::collections::BTreeMap;
use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use rand::Rng;
use serde::Serialize;

use crate::api::contract::ApiContract;
use crate::api::fixtures::{Endpoint, FixtureResolver, UniqueValue};
use crate::error::Result;

/// Base URL all download and share locators are built against.
const API_BASE_URL: &str = "https://api.example.com";

/// Row count used when no readout fixture is available.
const DEFAULT_ROW_COUNT: u64 = 50;

/// Length of generated result identifiers.
const UID_LEN: usize = 36;

/// Format-selector field; echoed into no row.
const FORMAT_FIELD: &str = "file_format";

/// Characters escaped in locator query components, matching the
/// `encodeURIComponent` unreserved set.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Download file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    /// Newline-delimited JSON.
    Json,
    /// Comma-separated values.
    Csv,
    /// Apache Parquet.
    Parquet,
}

impl FileFormat {
    /// All formats, in dialog order.
    pub const ALL: [FileFormat; 3] = [FileFormat::Json, FileFormat::Csv, FileFormat::Parquet];

    /// Lowercase wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            FileFormat::Json => "json",
            FileFormat::Csv => "csv",
            FileFormat::Parquet => "parquet",
        }
    }

    /// Parse a wire name; case-insensitive.
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().to_lowercase().as_str() {
            "json" => Some(FileFormat::Json),
            "csv" => Some(FileFormat::Csv),
            "parquet" => Some(FileFormat::Parquet),
            _ => None,
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field-keyed search request.
///
/// Keys are contract field names; values are the filter expression for
/// that field, possibly empty: presence alone makes the field part of
/// the response rows. Built by UI collaborators; the service only reads
/// the keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    fields: BTreeMap<String, String>,
}

impl SearchRequest {
    /// An empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field's filter expression.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Builder-style [`SearchRequest::set`].
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Parse a `field=value,field2=value2` spec; a token without `=` is a
    /// field present with an empty expression.
    pub fn from_spec(spec: &str) -> Self {
        let mut request = Self::new();
        for token in spec.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            match token.split_once('=') {
                Some((field, value)) => request.set(field.trim(), value.trim()),
                None => request.set(token, ""),
            }
        }
        request
    }

    /// Requested field names, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of requested fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no fields are requested.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// One synthesized result row: requested field name to synthetic value.
pub type Row = BTreeMap<String, String>;

/// A search result set.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    /// Synthesized rows, echoing only requested fields.
    pub data: Vec<Row>,
    /// Total row count.
    pub total: u64,
    /// Result identifier: fixture-supplied uid or a fresh opaque id.
    pub id: String,
}

/// User-facing event raised by the service.
///
/// The terminal rendition of the original's toast notifications: the app
/// drains these into the status line, and tests assert on them to prove
/// a degrade branch ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A resolver failure was swallowed and a deterministic fallback used.
    Degraded {
        /// Which operation degraded ("search" or "unique-values").
        operation: &'static str,
        /// The swallowed error, rendered.
        detail: String,
    },
    /// A locator was handed to the navigator.
    LinkOpened {
        /// The locator that was handed off.
        url: String,
    },
    /// The navigator failed; the hand-off is fire-and-forget.
    LinkFailed {
        /// The locator whose hand-off failed.
        url: String,
        /// The navigator error, rendered.
        detail: String,
    },
}

impl Notice {
    fn degraded(operation: &'static str, detail: impl Into<String>) -> Self {
        Notice::Degraded {
            operation,
            detail: detail.into(),
        }
    }
}

/// Browser-level navigation collaborator.
///
/// Receives fully-built locators (download URLs, `mailto:` links). The
/// production implementation copies them to the system clipboard, the
/// terminal stand-in for anchor-click navigation; tests record them.
pub trait Navigator {
    /// Hand off a locator. What happens afterwards is outside the
    /// service's responsibility.
    fn open(&mut self, url: &str) -> Result<()>;
}

/// The mock API service facade consumed by the UI and by batch mode.
pub struct ApiService {
    resolver: FixtureResolver,
    navigator: Box<dyn Navigator>,
    notices: Vec<Notice>,
}

impl fmt::Debug for ApiService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiService")
            .field("resolver", &self.resolver)
            .field("pending_notices", &self.notices.len())
            .finish()
    }
}

impl ApiService {
    /// Create a service over a resolver and a navigator.
    pub fn new(resolver: FixtureResolver, navigator: Box<dyn Navigator>) -> Self {
        Self {
            resolver,
            navigator,
            notices: Vec::new(),
        }
    }

    /// The static field contract.
    pub fn contract(&self) -> ApiContract {
        ApiContract::builtin()
    }

    /// Run a search. Never fails: resolver errors fall back to a
    /// deterministic synthetic result set.
    ///
    /// Row count comes from the readout fixture's `record_count` (default
    /// 50), the id from its `uid` (default: fresh 36-char id). Each row
    /// echoes exactly the requested fields except `file_format`, with
    /// values `"<field>_value_<i>"`.
    pub fn search(&mut self, request: &SearchRequest) -> SearchResponse {
        match self.resolver.resolve(Endpoint::Readouts, "1") {
            Ok(content) => {
                let row_count = content.record_count().unwrap_or(DEFAULT_ROW_COUNT);
                let id = content
                    .uid()
                    .map(str::to_string)
                    .unwrap_or_else(random_uid);
                synthesize(request, row_count, id)
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    retryable = e.is_retryable(),
                    "readout fixture unavailable; synthesizing fallback result"
                );
                self.notices.push(Notice::degraded("search", e.to_string()));
                synthesize(request, DEFAULT_ROW_COUNT, random_uid())
            }
        }
    }

    /// Unique values for a field; empty on any failure.
    ///
    /// Callers must treat an empty result as "no data available", not as
    /// "field invalid"; the degrade is reported via [`Notice::Degraded`].
    pub fn field_unique_values(&mut self, field: &str) -> Vec<UniqueValue> {
        match self.field_unique_values_checked(field) {
            Ok(values) => values,
            Err(e) => {
                tracing::warn!(
                    field,
                    error = %e,
                    retryable = e.is_retryable(),
                    "unique values unavailable; returning empty"
                );
                self.notices
                    .push(Notice::degraded("unique-values", e.to_string()));
                Vec::new()
            }
        }
    }

    /// Unique values for a field, surfacing resolver errors.
    ///
    /// Batch mode uses this variant and exits non-zero on error. A fixture
    /// that parses but carries no `values` member yields an empty list in
    /// both modes.
    pub fn field_unique_values_checked(&mut self, field: &str) -> Result<Vec<UniqueValue>> {
        let content = self.resolver.resolve(Endpoint::UniqueValues, field)?;
        match content.unique_values() {
            Some(values) => Ok(values),
            None => {
                tracing::warn!(field, "fixture has no decodable 'values' member");
                Ok(Vec::new())
            }
        }
    }

    /// Build the download locator for a result and hand it to the
    /// navigator. Fire-and-forget: navigator failures become notices.
    pub fn download(&mut self, id: &str, format: FileFormat) {
        let url = format!("{API_BASE_URL}/download/{id}?format={format}");
        tracing::info!(%url, "download requested");
        self.hand_off(url);
    }

    /// Build the share mail locator for a result and hand it to the
    /// navigator.
    pub fn share(&mut self, result_id: Option<&str>) {
        let url = share_link(result_id);
        tracing::info!(%url, "share requested");
        self.hand_off(url);
    }

    /// Drain pending notices, oldest first.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    fn hand_off(&mut self, url: String) {
        match self.navigator.open(&url) {
            Ok(()) => self.notices.push(Notice::LinkOpened { url }),
            Err(e) => {
                tracing::error!(error = %e, %url, "navigator hand-off failed");
                self.notices.push(Notice::LinkFailed {
                    url,
                    detail: e.to_string(),
                });
            }
        }
    }
}

/// Build the `mailto:` locator for sharing a result id.
pub fn share_link(result_id: Option<&str>) -> String {
    let subject = utf8_percent_encode("benchtop Query Results", COMPONENT);
    let body = format!(
        "Query UID: {}\n\nGenerated by benchtop",
        result_id.unwrap_or("No results yet")
    );
    format!(
        "mailto:?subject={subject}&body={}",
        utf8_percent_encode(&body, COMPONENT)
    )
}

fn synthesize(request: &SearchRequest, row_count: u64, id: String) -> SearchResponse {
    let data: Vec<Row> = (0..row_count)
        .map(|i| {
            request
                .keys()
                .filter(|key| *key != FORMAT_FIELD)
                .map(|key| (key.to_string(), format!("{key}_value_{i}")))
                .collect()
        })
        .collect();
    SearchResponse {
        data,
        total: row_count,
        id,
    }
}

/// Generate an opaque 36-character base-36 identifier.
fn random_uid() -> String {
    const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut rng = rand::rng();
    (0..UID_LEN)
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect()
}
