use serde_json::{Map, Value};

use crate::error::ParseError;

/// Fallback used when `info.title` is missing or not a string.
pub const DEFAULT_TITLE: &str = "API";

/// A loaded OpenAPI/Swagger document.
///
/// The document is kept as raw JSON: hand-maintained specs are often
/// imperfect, so fragments are read with explicit presence checks and
/// anything with an unexpected shape is skipped rather than rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenApiDocument {
    root: Map<String, Value>,
}

impl OpenApiDocument {
    pub fn from_value(value: Value) -> Result<Self, ParseError> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            other => Err(ParseError::NotAnObject(json_kind(&other))),
        }
    }

    /// `info.title`, or [`DEFAULT_TITLE`].
    pub fn title(&self) -> &str {
        self.info_str("title").unwrap_or(DEFAULT_TITLE)
    }

    pub fn version(&self) -> Option<&str> {
        self.info_str("version")
    }

    pub fn description(&self) -> Option<&str> {
        self.info_str("description")
    }

    /// Path items in document order. Entries whose value is not an object are skipped.
    pub fn path_items(&self) -> impl Iterator<Item = (&str, &Map<String, Value>)> {
        self.root
            .get("paths")
            .and_then(Value::as_object)
            .into_iter()
            .flat_map(|paths| paths.iter())
            .filter_map(|(path, item)| item.as_object().map(|item| (path.as_str(), item)))
    }

    fn info_str(&self, key: &str) -> Option<&str> {
        self.root
            .get("info")
            .and_then(|info| info.get(key))
            .and_then(Value::as_str)
    }
}

/// Name of a JSON value's kind, for error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
