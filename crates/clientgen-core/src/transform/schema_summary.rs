use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::ir::SchemaSummary;

/// Reduce a schema node to a [`SchemaSummary`].
///
/// Returns `None` when the node is absent or not an object. `$ref` is
/// copied as an opaque string and never followed.
pub fn summarize_schema(node: Option<&Value>) -> Option<SchemaSummary> {
    let schema = node?.as_object()?;

    Some(SchemaSummary {
        ref_path: string_field(schema, "$ref"),
        schema_type: schema.get("type").cloned(),
        format: string_field(schema, "format"),
        nullable: schema.get("nullable").and_then(Value::as_bool),
        enum_values: schema.get("enum").cloned(),
        default_value: schema.get("default").cloned(),
        description: string_field(schema, "description"),
        items: summarize_schema(schema.get("items")).map(Box::new),
        properties: schema
            .get("properties")
            .and_then(Value::as_object)
            .map(summarize_properties),
        additional_properties: summarize_schema(schema.get("additionalProperties")).map(Box::new),
        one_of: summarize_list(schema.get("oneOf")),
        any_of: summarize_list(schema.get("anyOf")),
        all_of: summarize_list(schema.get("allOf")),
    })
}

fn summarize_properties(properties: &Map<String, Value>) -> IndexMap<String, SchemaSummary> {
    properties
        .iter()
        .filter_map(|(name, prop)| summarize_schema(Some(prop)).map(|s| (name.clone(), s)))
        .collect()
}

fn summarize_list(node: Option<&Value>) -> Option<Vec<SchemaSummary>> {
    let items = node?.as_array()?;
    Some(
        items
            .iter()
            .filter_map(|item| summarize_schema(Some(item)))
            .collect(),
    )
}

pub(crate) fn string_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    object.get(key).and_then(Value::as_str).map(String::from)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_absent_and_non_object() {
        assert_eq!(summarize_schema(None), None);
        assert_eq!(summarize_schema(Some(&json!("string"))), None);
        assert_eq!(summarize_schema(Some(&json!(true))), None);
    }

    #[test]
    fn test_copies_scalar_keywords() {
        let schema = json!({
            "type": "string",
            "format": "date-time",
            "enum": ["a", "b"],
            "default": "a",
            "description": "When it happened",
            "minLength": 3
        });
        let summary = summarize_schema(Some(&schema)).unwrap();
        assert_eq!(summary.schema_type, Some(json!("string")));
        assert_eq!(summary.format.as_deref(), Some("date-time"));
        assert_eq!(summary.enum_values, Some(json!(["a", "b"])));
        assert_eq!(summary.default_value, Some(json!("a")));
        assert_eq!(summary.description.as_deref(), Some("When it happened"));
    }

    #[test]
    fn test_nullable_false_is_kept() {
        let summary = summarize_schema(Some(&json!({ "nullable": false }))).unwrap();
        assert_eq!(summary.nullable, Some(false));
        let summary = summarize_schema(Some(&json!({}))).unwrap();
        assert_eq!(summary.nullable, None);
    }

    #[test]
    fn test_null_default_is_kept() {
        let summary = summarize_schema(Some(&json!({ "default": null }))).unwrap();
        assert_eq!(summary.default_value, Some(Value::Null));
    }

    #[test]
    fn test_ref_is_not_followed() {
        let summary =
            summarize_schema(Some(&json!({ "$ref": "#/components/schemas/Post" }))).unwrap();
        assert_eq!(summary.ref_path.as_deref(), Some("#/components/schemas/Post"));
        assert_eq!(summary.properties, None);
    }

    #[test]
    fn test_recurses_into_nested_shapes() {
        let schema = json!({
            "type": "object",
            "properties": {
                "tags": { "type": "array", "items": { "type": "string" } },
                "author": { "$ref": "#/components/schemas/User" }
            },
            "additionalProperties": { "type": "integer" },
            "oneOf": [{ "type": "object" }, { "$ref": "#/components/schemas/Other" }]
        });
        let summary = summarize_schema(Some(&schema)).unwrap();
        let props = summary.properties.as_ref().unwrap();
        assert_eq!(props.keys().collect::<Vec<_>>(), vec!["tags", "author"]);
        let items = props["tags"].items.as_ref().unwrap();
        assert_eq!(items.schema_type, Some(json!("string")));
        assert_eq!(
            props["author"].ref_path.as_deref(),
            Some("#/components/schemas/User")
        );
        assert_eq!(
            summary.additional_properties.unwrap().schema_type,
            Some(json!("integer"))
        );
        assert_eq!(summary.one_of.unwrap().len(), 2);
    }

    #[test]
    fn test_boolean_additional_properties_dropped() {
        let summary = summarize_schema(Some(&json!({ "additionalProperties": true }))).unwrap();
        assert_eq!(summary.additional_properties, None);
    }
}
