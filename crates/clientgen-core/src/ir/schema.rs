use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Compact description of a JSON schema node.
///
/// References are kept verbatim in `ref_path` and never dereferenced, so a
/// summary is always a finite tree even when the document's `$ref` graph has cycles.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SchemaSummary {
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub ref_path: Option<String>,

    /// `type`, either a single name or an array of names.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub nullable: Option<bool>,

    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Value>,

    /// Present whenever the source declares `default`, including `default: null`.
    #[serde(rename = "default", skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaSummary>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, SchemaSummary>>,

    #[serde(
        rename = "additionalProperties",
        skip_serializing_if = "Option::is_none"
    )]
    pub additional_properties: Option<Box<SchemaSummary>>,

    #[serde(rename = "oneOf", skip_serializing_if = "Option::is_none")]
    pub one_of: Option<Vec<SchemaSummary>>,

    #[serde(rename = "anyOf", skip_serializing_if = "Option::is_none")]
    pub any_of: Option<Vec<SchemaSummary>>,

    #[serde(rename = "allOf", skip_serializing_if = "Option::is_none")]
    pub all_of: Option<Vec<SchemaSummary>>,
}
