pub mod document;

use serde_json::Value;

use crate::error::ParseError;
pub use document::OpenApiDocument;

/// Parse an OpenAPI document from JSON.
pub fn from_json(input: &str) -> Result<OpenApiDocument, ParseError> {
    let value: Value = serde_json::from_str(input)?;
    OpenApiDocument::from_value(value)
}

/// Parse an OpenAPI document from YAML.
pub fn from_yaml(input: &str) -> Result<OpenApiDocument, ParseError> {
    let value: Value = serde_yaml_ng::from_str(input)?;
    OpenApiDocument::from_value(value)
}
