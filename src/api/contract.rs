//! Field contract provider.
//!
//! The static declaration of queryable readout fields, served to UI
//! collaborators so they can build filter sets and requests. Pure data,
//! no I/O; the fixture resolver never consults it.

use serde::Serialize;

/// Regex source for YYYYMMDD date fields.
const DATE_PATTERN: &str = r"^\d{8}$";

/// Plain filter fields, in contract order. Each gets a derived
/// "Filter by ...(s)" description.
const FILTER_FIELDS: &[&str] = &[
    "cell_type",
    "cell_line",
    "primary_cultured_cell",
    "therapeutic_area",
    "modality_type",
    "modality_effect",
    "modality_concentration",
    "modality_unit_concentration",
    "modality_timepoint",
    "supplier",
    "stimulus_type",
    "stimulus_concentration",
    "stimulus_unit_concentration",
    "stimulus_timepoint",
    "cell_state_pre_stimulus",
    "cell_state_post_stimulus",
    "parameter_entity",
    "parameter_process",
    "parameter_technique",
    "parameter_type",
    "measure_type",
    "instrument",
    "ensembl_id",
    "gene_symbol",
    "primary_annotation",
    "readout_value",
    "qualifier",
    "screen",
    "initials",
    "signoff_initials",
    "analysis_version",
    "eln_assay",
    "eln_analysis",
    "ta_favourable_direction",
    "dose_response",
    "channel_name",
    "iidp",
    "analysis_hash",
    "ano_annotation",
    "aty_annotation_type",
    "pre_cell_state",
    "post_cell_state",
    "modality_supplier",
    "eln_number",
    "analysis_eln",
];

/// Metadata describing one queryable field.
#[derive(Debug, Clone, Serialize)]
pub struct FieldDescriptor {
    /// Field name, unique across the contract.
    pub name: String,
    /// Field type; every contract field is currently a string.
    #[serde(rename = "type")]
    pub field_type: String,
    /// Enumerated allowed values, for closed fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
    /// Human-readable description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Validation pattern (regex source) for constrained free-text fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl FieldDescriptor {
    fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            field_type: "string".to_string(),
            values: None,
            description: Some(description.to_string()),
            pattern: None,
        }
    }

    /// A plain filter field with the stock "Filter by ...(s)" description.
    fn filter(name: &str) -> Self {
        Self::new(name, &format!("Filter by {}(s)", name.replace('_', " ")))
    }

    /// A YYYYMMDD date field.
    fn dated(name: &str, description: &str) -> Self {
        let mut field = Self::new(name, description);
        field.pattern = Some(DATE_PATTERN.to_string());
        field
    }

    /// A closed field with an enumerated value set.
    fn enumerated(name: &str, values: &[&str], description: &str) -> Self {
        let mut field = Self::new(name, description);
        field.values = Some(values.iter().map(|v| v.to_string()).collect());
        field
    }
}

/// The queryable-field contract served to UI collaborators.
#[derive(Debug, Clone, Serialize)]
pub struct ApiContract {
    /// Field descriptors, in declaration order.
    pub fields: Vec<FieldDescriptor>,
}

impl ApiContract {
    /// Build the built-in readout contract.
    pub fn builtin() -> Self {
        let mut fields = Vec::with_capacity(FILTER_FIELDS.len() + 4);
        fields.push(FieldDescriptor::enumerated(
            "file_format",
            &["json", "csv", "parquet"],
            "The format of the requested data",
        ));
        fields.push(FieldDescriptor::dated(
            "created",
            "Filter by specific created date (YYYYMMDD)",
        ));
        fields.push(FieldDescriptor::dated(
            "created_from",
            "Filter by created from date (YYYYMMDD)",
        ));
        fields.push(FieldDescriptor::dated(
            "created_to",
            "Filter by created to date (YYYYMMDD)",
        ));
        fields.extend(FILTER_FIELDS.iter().map(|name| FieldDescriptor::filter(name)));
        Self { fields }
    }

    /// Look up a descriptor by field name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Whether the contract declares a field with this name.
    pub fn contains(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the contract is empty (it never is for the built-in one).
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
