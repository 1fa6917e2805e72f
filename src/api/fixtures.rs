//! Fixture resolution and response shaping.
//!
//! Fixtures are canned JSON files standing in for a real backend. The
//! resolver maps a logical endpoint plus request key to a fixture path,
//! fetches the raw text through an injected [`FixtureStore`], parses and
//! normalizes it into one canonical [`FixtureContent`] shape, and memoizes
//! the result per path. Only successful loads are cached; a failed fetch
//! or parse is retried on the next request.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{BenchtopError, Result};

/// Fixed path of the readout descriptor fixture.
const READOUTS_PATH: &str = "readouts/1.json";

/// Directory holding one unique-values fixture per mapped field.
const UNIQUE_DIR: &str = "unique";

/// Path of the field-name to fixture-filename mapping.
pub const MAPPING_PATH: &str = "mapping.json";

/// Logical fixture endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// The single readout descriptor (`record_count`, `uid`).
    Readouts,
    /// Per-field unique value listings.
    UniqueValues,
}

impl Endpoint {
    /// Endpoint name used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Endpoint::Readouts => "readouts",
            Endpoint::UniqueValues => "unique-values",
        }
    }
}

/// Source of raw fixture text, addressed by relative path.
///
/// Implementations report fetch failures as
/// [`BenchtopError::FixtureNotFound`] carrying an HTTP-style status code.
pub trait FixtureStore {
    /// Fetch the raw text of the fixture at `path`.
    fn fetch(&mut self, path: &str) -> Result<String>;
}

/// Filesystem-backed fixture store rooted at a directory.
#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    /// Create a store serving files under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl FixtureStore for DirStore {
    fn fetch(&mut self, path: &str) -> Result<String> {
        fs::read_to_string(self.root.join(path)).map_err(|e| {
            let status = match e.kind() {
                io::ErrorKind::NotFound => 404,
                io::ErrorKind::PermissionDenied => 403,
                _ => 500,
            };
            BenchtopError::not_found(path, status)
        })
    }
}

/// Status member of the canonical envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    /// The fixture resolved normally.
    Success,
    /// The fixture itself records a backend-side failure.
    Error,
}

/// One unique value with its occurrence count.
///
/// Fixtures may list entries as bare strings or as `{value, count}`
/// objects; bare entries get a defaulted count of zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawUniqueValue")]
pub struct UniqueValue {
    /// The field value.
    pub value: String,
    /// Number of records carrying this value.
    pub count: u64,
}

impl UniqueValue {
    /// Convenience constructor.
    pub fn new(value: impl Into<String>, count: u64) -> Self {
        Self {
            value: value.into(),
            count,
        }
    }
}

/// Accepts both fixture spellings of a unique value.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawUniqueValue {
    Counted {
        value: String,
        #[serde(default)]
        count: u64,
    },
    Bare(String),
}

impl From<RawUniqueValue> for UniqueValue {
    fn from(raw: RawUniqueValue) -> Self {
        match raw {
            RawUniqueValue::Counted { value, count } => Self { value, count },
            RawUniqueValue::Bare(value) => Self { value, count: 0 },
        }
    }
}

/// Canonical unique-values envelope all array fixtures are wrapped into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuesEnvelope {
    /// Field the values belong to.
    pub field: String,
    /// The values, in fixture order.
    pub values: Vec<UniqueValue>,
    /// Declared number of values.
    pub total: u64,
    /// Success or error, as recorded in the fixture.
    pub status: ResponseStatus,
    /// Optional human-readable detail, usually present on errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Parsed fixture content, normalized at the parse boundary.
///
/// A bare JSON array is wrapped into the canonical envelope at load time;
/// a JSON object passes through unchanged, assumed already canonical.
#[derive(Debug, Clone, PartialEq)]
pub enum FixtureContent {
    /// Canonical envelope built from a bare array fixture.
    Values(ValuesEnvelope),
    /// Object fixture kept as-is (readout descriptors, hand-enveloped files).
    Document(serde_json::Map<String, Value>),
}

impl FixtureContent {
    /// Extract unique values, whichever shape the fixture used.
    ///
    /// Returns `None` for documents without a decodable `values` member.
    pub fn unique_values(&self) -> Option<Vec<UniqueValue>> {
        match self {
            FixtureContent::Values(envelope) => Some(envelope.values.clone()),
            FixtureContent::Document(doc) => {
                let member = doc.get("values")?;
                serde_json::from_value(member.clone()).ok()
            }
        }
    }

    /// Declared total, when the fixture carries one.
    pub fn total(&self) -> Option<u64> {
        match self {
            FixtureContent::Values(envelope) => Some(envelope.total),
            FixtureContent::Document(doc) => doc.get("total").and_then(Value::as_u64),
        }
    }

    /// `record_count` member of a readout descriptor.
    pub fn record_count(&self) -> Option<u64> {
        match self {
            FixtureContent::Values(_) => None,
            FixtureContent::Document(doc) => doc.get("record_count").and_then(Value::as_u64),
        }
    }

    /// `uid` member of a readout descriptor.
    pub fn uid(&self) -> Option<&str> {
        match self {
            FixtureContent::Values(_) => None,
            FixtureContent::Document(doc) => doc.get("uid").and_then(Value::as_str),
        }
    }
}

/// Resolves, caches, and normalizes fixtures.
///
/// Construction loads the name-to-fixture mapping through the store once;
/// the mapping is immutable afterwards. The cache is keyed by resolved
/// path and written only after a successful parse and normalize, so
/// transient fetch failures never poison a field for the session.
pub struct FixtureResolver {
    store: Box<dyn FixtureStore>,
    mapping: HashMap<String, String>,
    cache: HashMap<String, FixtureContent>,
}

impl std::fmt::Debug for FixtureResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FixtureResolver")
            .field("mapping", &self.mapping.len())
            .field("cached", &self.cache.len())
            .finish()
    }
}

impl FixtureResolver {
    /// Create a resolver, loading `mapping.json` through the store.
    ///
    /// Mapping-load failure is surfaced to the caller; without the mapping
    /// the unique-values endpoint can never function, so startup treats
    /// this as fatal.
    pub fn new(mut store: Box<dyn FixtureStore>) -> Result<Self> {
        let raw = store
            .fetch(MAPPING_PATH)
            .map_err(|e| BenchtopError::mapping_load(MAPPING_PATH, e.to_string()))?;
        let mapping: HashMap<String, String> = serde_json::from_str(&raw)
            .map_err(|e| BenchtopError::mapping_load(MAPPING_PATH, e.to_string()))?;
        tracing::info!(fields = mapping.len(), "field-to-fixture mapping loaded");
        Ok(Self {
            store,
            mapping,
            cache: HashMap::new(),
        })
    }

    /// Resolve the fixture for `(endpoint, key)`.
    ///
    /// Cache hits do not touch the store. `key` is ignored for
    /// [`Endpoint::Readouts`]; for [`Endpoint::UniqueValues`] an unmapped
    /// key fails with [`BenchtopError::UnmappedField`] before any fetch.
    pub fn resolve(&mut self, endpoint: Endpoint, key: &str) -> Result<&FixtureContent> {
        let path = self.fixture_path(endpoint, key)?;
        if !self.cache.contains_key(&path) {
            let raw = self.store.fetch(&path)?;
            let content = normalize(&path, key, &raw)?;
            tracing::debug!(endpoint = endpoint.as_str(), path = %path, "fixture loaded");
            self.cache.insert(path.clone(), content);
        } else {
            tracing::trace!(path = %path, "fixture cache hit");
        }
        Ok(&self.cache[&path])
    }

    fn fixture_path(&self, endpoint: Endpoint, key: &str) -> Result<String> {
        match endpoint {
            Endpoint::Readouts => Ok(READOUTS_PATH.to_string()),
            Endpoint::UniqueValues => {
                let file = self
                    .mapping
                    .get(key)
                    .ok_or_else(|| BenchtopError::unmapped_field(key))?;
                Ok(format!("{UNIQUE_DIR}/{file}"))
            }
        }
    }
}

/// Parse raw fixture text and normalize it into [`FixtureContent`].
///
/// The body is parsed from text (never decoded straight into a target
/// type) so parse failures can report the offending raw prefix.
fn normalize(path: &str, key: &str, raw: &str) -> Result<FixtureContent> {
    let parsed: Value =
        serde_json::from_str(raw).map_err(|e| BenchtopError::malformed(path, e.to_string(), raw))?;

    match parsed {
        Value::Array(entries) => {
            let values: Vec<UniqueValue> = entries
                .into_iter()
                .map(serde_json::from_value)
                .collect::<std::result::Result<_, _>>()
                .map_err(|e| BenchtopError::malformed(path, e.to_string(), raw))?;
            Ok(FixtureContent::Values(ValuesEnvelope {
                field: key.to_string(),
                total: values.len() as u64,
                values,
                status: ResponseStatus::Success,
                message: None,
            }))
        }
        Value::Object(doc) => Ok(FixtureContent::Document(doc)),
        other => Err(BenchtopError::malformed(
            path,
            format!("expected array or object, found {}", json_type_name(&other)),
            raw,
        )),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_array_is_wrapped_into_envelope() {
        let content = normalize("unique/uid-001.json", "supplier", r#"["a","b","c"]"#)
            .expect("bare array normalizes");

        let FixtureContent::Values(envelope) = content else {
            panic!("expected envelope");
        };
        assert_eq!(envelope.field, "supplier");
        assert_eq!(envelope.total, 3);
        assert_eq!(envelope.status, ResponseStatus::Success);
        let values: Vec<&str> = envelope.values.iter().map(|v| v.value.as_str()).collect();
        assert_eq!(values, ["a", "b", "c"]);
        assert!(envelope.values.iter().all(|v| v.count == 0));
    }

    #[test]
    fn counted_array_keeps_counts() {
        let raw = r#"[{"value":"HeLa","count":12},{"value":"HEK293"}]"#;
        let content = normalize("unique/uid-002.json", "cell_line", raw).expect("normalizes");

        let FixtureContent::Values(envelope) = content else {
            panic!("expected envelope");
        };
        assert_eq!(
            envelope.values,
            vec![UniqueValue::new("HeLa", 12), UniqueValue::new("HEK293", 0)]
        );
    }

    #[test]
    fn object_passes_through_unchanged() {
        let raw = r#"{"record_count": 10, "uid": "abc", "extra": [1,2]}"#;
        let content = normalize("readouts/1.json", "1", raw).expect("normalizes");

        assert_eq!(content.record_count(), Some(10));
        assert_eq!(content.uid(), Some("abc"));
        let FixtureContent::Document(doc) = content else {
            panic!("expected document");
        };
        assert!(doc.contains_key("extra"));
    }

    #[test]
    fn scalar_fixture_is_malformed() {
        let err = normalize("unique/x.json", "x", "42").expect_err("scalar rejected");
        let BenchtopError::MalformedFixture { detail, .. } = err else {
            panic!("expected MalformedFixture");
        };
        assert!(detail.contains("number"));
    }

    #[test]
    fn parse_failure_reports_truncated_prefix() {
        let raw = format!("{{ not json {}", "x".repeat(400));
        let err = normalize("unique/y.json", "y", &raw).expect_err("bad json rejected");
        let BenchtopError::MalformedFixture { snippet, .. } = err else {
            panic!("expected MalformedFixture");
        };
        assert!(snippet.ends_with("..."));
        assert!(snippet.chars().count() <= 103);
    }

    #[test]
    fn enveloped_document_yields_values() {
        let raw = r#"{"field":"screen","values":[{"value":"s1","count":4}],"total":1,"status":"success"}"#;
        let content = normalize("unique/z.json", "screen", raw).expect("normalizes");
        assert_eq!(
            content.unique_values(),
            Some(vec![UniqueValue::new("s1", 4)])
        );
        assert_eq!(content.total(), Some(1));
    }

    struct StaticStore(Option<String>);

    impl FixtureStore for StaticStore {
        fn fetch(&mut self, path: &str) -> Result<String> {
            self.0
                .clone()
                .ok_or_else(|| BenchtopError::not_found(path, 404))
        }
    }

    #[test]
    fn mapping_failures_are_fatal_at_construction() {
        let err = FixtureResolver::new(Box::new(StaticStore(None))).expect_err("missing mapping");
        assert!(matches!(err, BenchtopError::MappingLoad { .. }));

        let err = FixtureResolver::new(Box::new(StaticStore(Some("not json".to_string()))))
            .expect_err("unparsable mapping");
        assert!(matches!(err, BenchtopError::MappingLoad { .. }));
    }
}
