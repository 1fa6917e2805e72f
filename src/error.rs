//! Error types for Benchtop.
//!
//! This module provides a unified error handling approach using `thiserror`.

use thiserror::Error;

/// Result type alias for Benchtop operations.
pub type Result<T> = std::result::Result<T, BenchtopError>;

/// Maximum number of characters of raw fixture text kept for diagnostics.
const SNIPPET_LEN: usize = 100;

/// Errors that can occur in Benchtop.
#[derive(Debug, Error)]
pub enum BenchtopError {
    /// Fixture fetch returned a non-success status.
    #[error("failed to fetch fixture '{path}': status {status}")]
    FixtureNotFound { path: String, status: u16 },

    /// Fixture body was fetched but could not be parsed as JSON.
    #[error("malformed fixture '{path}': {detail}; content begins {snippet:?}")]
    MalformedFixture {
        path: String,
        detail: String,
        snippet: String,
    },

    /// No entry for the requested field in the name-to-fixture mapping.
    #[error("no fixture mapping for field '{field}'")]
    UnmappedField { field: String },

    /// The startup name-to-fixture mapping could not be loaded or parsed.
    ///
    /// Without the mapping the unique-values endpoint can never resolve
    /// anything, so startup treats this as fatal.
    #[error("failed to load fixture mapping '{path}': {detail}")]
    MappingLoad { path: String, detail: String },

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BenchtopError {
    /// Create a FixtureNotFound error.
    pub fn not_found(path: impl Into<String>, status: u16) -> Self {
        Self::FixtureNotFound {
            path: path.into(),
            status,
        }
    }

    /// Create a MalformedFixture error, keeping a truncated prefix of the raw text.
    pub fn malformed(path: impl Into<String>, detail: impl Into<String>, raw: &str) -> Self {
        let mut snippet: String = raw.chars().take(SNIPPET_LEN).collect();
        if raw.chars().count() > SNIPPET_LEN {
            snippet.push_str("...");
        }
        Self::MalformedFixture {
            path: path.into(),
            detail: detail.into(),
            snippet,
        }
    }

    /// Create an UnmappedField error.
    pub fn unmapped_field(field: impl Into<String>) -> Self {
        Self::UnmappedField {
            field: field.into(),
        }
    }

    /// Create a MappingLoad error.
    pub fn mapping_load(path: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::MappingLoad {
            path: path.into(),
            detail: detail.into(),
        }
    }

    /// True when a retry with the same key could succeed (fetch/parse failures).
    ///
    /// Unmapped fields are a configuration problem, not a transient one.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::FixtureNotFound { .. } | Self::MalformedFixture { .. } | Self::Io(_)
        )
    }
}
