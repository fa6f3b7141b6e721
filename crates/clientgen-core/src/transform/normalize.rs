use std::collections::HashSet;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use super::schema_summary::{string_field, summarize_schema};
use crate::ir::{
    HeaderOrRef, MediaContent, Parameter, ParameterLocation, ParameterOrRef, RequestBody,
    RequestBodyOrRef, ResponseOrRef,
};

/// Merge path-level and operation-level parameters.
///
/// Path-level entries come first and the first occurrence of each key wins.
/// A parameter's key is its `$ref` when it has one, else `"{name}:{in}"`.
/// Entries that are not objects are skipped.
pub fn merge_parameters(path_params: &[Value], operation_params: &[Value]) -> Vec<ParameterOrRef> {
    let mut seen = HashSet::new();
    let mut merged = Vec::new();

    for raw in path_params.iter().chain(operation_params) {
        let Some(param) = raw.as_object() else {
            continue;
        };
        if !seen.insert(parameter_key(param)) {
            continue;
        }
        merged.push(normalize_parameter(param));
    }

    merged
}

fn parameter_key(param: &Map<String, Value>) -> String {
    if let Some(ref_path) = param.get("$ref").and_then(Value::as_str) {
        return ref_path.to_string();
    }
    let name = param.get("name").and_then(Value::as_str).unwrap_or_default();
    let location = param.get("in").and_then(Value::as_str).unwrap_or_default();
    format!("{name}:{location}")
}

fn normalize_parameter(param: &Map<String, Value>) -> ParameterOrRef {
    if let Some(ref_path) = string_field(param, "$ref") {
        return ParameterOrRef::Ref { ref_path };
    }

    ParameterOrRef::Parameter(Parameter {
        name: string_field(param, "name").unwrap_or_default(),
        location: param
            .get("in")
            .and_then(Value::as_str)
            .and_then(ParameterLocation::parse),
        required: bool_field(param, "required"),
        description: string_field(param, "description"),
        schema: summarize_schema(param.get("schema")),
        deprecated: bool_field(param, "deprecated"),
        allow_empty_value: bool_field(param, "allowEmptyValue"),
        style: string_field(param, "style"),
        explode: param.get("explode").and_then(Value::as_bool),
    })
}

/// Normalize an operation's `requestBody`. `None` when absent or not an object.
pub fn normalize_request_body(raw: Option<&Value>) -> Option<RequestBodyOrRef> {
    let body = raw?.as_object()?;

    if let Some(ref_path) = string_field(body, "$ref") {
        return Some(RequestBodyOrRef::Ref { ref_path });
    }

    Some(RequestBodyOrRef::RequestBody(RequestBody {
        description: string_field(body, "description"),
        required: bool_field(body, "required"),
        content: normalize_content(body.get("content")),
    }))
}

/// Normalize a `content` map (mime type → media type object) into a list.
///
/// `None` when the map is absent or not an object, so "no content declared"
/// stays distinguishable from "empty content".
pub fn normalize_content(raw: Option<&Value>) -> Option<Vec<MediaContent>> {
    let content = raw?.as_object()?;

    Some(
        content
            .iter()
            .map(|(mime_type, media)| {
                let media = media.as_object();
                MediaContent {
                    mime_type: mime_type.clone(),
                    schema: summarize_schema(media.and_then(|m| m.get("schema"))),
                    example: media.and_then(|m| m.get("example")).cloned(),
                    examples: media.and_then(|m| m.get("examples")).cloned(),
                }
            })
            .collect(),
    )
}

/// Normalize a `responses` map into a list that keeps the declared status order.
pub fn normalize_responses(raw: Option<&Value>) -> Vec<ResponseOrRef> {
    let Some(responses) = raw.and_then(Value::as_object) else {
        return Vec::new();
    };

    responses
        .iter()
        .filter_map(|(status, response)| {
            let response = response.as_object()?;
            let status = status.clone();
            if let Some(ref_path) = string_field(response, "$ref") {
                return Some(ResponseOrRef::Ref { status, ref_path });
            }
            Some(ResponseOrRef::Response {
                status,
                description: string_field(response, "description"),
                headers: normalize_headers(response.get("headers")),
                content: normalize_content(response.get("content")),
            })
        })
        .collect()
}

/// Normalize a response `headers` map. `None` when absent or not an object.
pub fn normalize_headers(raw: Option<&Value>) -> Option<IndexMap<String, HeaderOrRef>> {
    let headers = raw?.as_object()?;

    Some(
        headers
            .iter()
            .filter_map(|(name, header)| {
                let header = header.as_object()?;
                let normalized = match string_field(header, "$ref") {
                    Some(ref_path) => HeaderOrRef::Ref { ref_path },
                    None => HeaderOrRef::Header {
                        description: string_field(header, "description"),
                        required: bool_field(header, "required"),
                        deprecated: bool_field(header, "deprecated"),
                        schema: summarize_schema(header.get("schema")),
                    },
                };
                Some((name.clone(), normalized))
            })
            .collect(),
    )
}

/// A boolean flag that defaults to `false` when missing or not a boolean.
fn bool_field(object: &Map<String, Value>, key: &str) -> bool {
    object.get(key).and_then(Value::as_bool).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn params(value: Value) -> Vec<Value> {
        value.as_array().cloned().unwrap()
    }

    #[test]
    fn test_merge_first_occurrence_wins() {
        let path_level = params(json!([
            { "name": "id", "in": "path", "required": true, "description": "path level" }
        ]));
        let op_level = params(json!([
            { "name": "id", "in": "path", "required": false, "description": "operation level" },
            { "name": "id", "in": "query" }
        ]));
        let merged = merge_parameters(&path_level, &op_level);
        assert_eq!(merged.len(), 2);

        let first = merged[0].as_parameter().unwrap();
        assert_eq!(first.location, Some(ParameterLocation::Path));
        assert!(first.required);
        assert_eq!(first.description.as_deref(), Some("path level"));

        let second = merged[1].as_parameter().unwrap();
        assert_eq!(second.location, Some(ParameterLocation::Query));
        assert!(!second.required);
    }

    #[test]
    fn test_merge_dedupes_refs_and_skips_nulls() {
        let path_level = params(json!([
            { "$ref": "#/components/parameters/ClubId" },
            null
        ]));
        let op_level = params(json!([
            { "$ref": "#/components/parameters/ClubId" },
            "garbage"
        ]));
        let merged = merge_parameters(&path_level, &op_level);
        assert_eq!(
            merged,
            vec![ParameterOrRef::Ref {
                ref_path: "#/components/parameters/ClubId".to_string()
            }]
        );
    }

    #[test]
    fn test_parameter_defaults() {
        let merged = merge_parameters(&params(json!([{ "name": "q", "in": "query" }])), &[]);
        let param = merged[0].as_parameter().unwrap();
        assert!(!param.required);
        assert!(!param.deprecated);
        assert!(!param.allow_empty_value);
        assert_eq!(param.style, None);
        assert_eq!(param.explode, None);
        assert_eq!(param.schema, None);
    }

    #[test]
    fn test_parameter_explicit_false_explode() {
        let raw = params(json!([
            { "name": "ids", "in": "query", "style": "form", "explode": false,
              "schema": { "type": "array", "items": { "type": "string" } } }
        ]));
        let merged = merge_parameters(&raw, &[]);
        let param = merged[0].as_parameter().unwrap();
        assert_eq!(param.style.as_deref(), Some("form"));
        assert_eq!(param.explode, Some(false));
        assert!(param.schema.as_ref().unwrap().items.is_some());
    }

    #[test]
    fn test_request_body_ref_passthrough() {
        let body = json!({ "$ref": "#/components/requestBodies/NewPost" });
        assert_eq!(
            normalize_request_body(Some(&body)),
            Some(RequestBodyOrRef::Ref {
                ref_path: "#/components/requestBodies/NewPost".to_string()
            })
        );
    }

    #[test]
    fn test_request_body_inline() {
        let body = json!({
            "description": "New post",
            "content": {
                "application/json": {
                    "schema": { "$ref": "#/components/schemas/NewPost" },
                    "example": { "title": "Hello" }
                },
                "multipart/form-data": {}
            }
        });
        let Some(RequestBodyOrRef::RequestBody(normalized)) = normalize_request_body(Some(&body))
        else {
            panic!("expected inline body");
        };
        assert!(!normalized.required);
        let content = normalized.content.unwrap();
        assert_eq!(content.len(), 2);
        assert_eq!(content[0].mime_type, "application/json");
        assert_eq!(content[0].example, Some(json!({ "title": "Hello" })));
        assert_eq!(content[1].mime_type, "multipart/form-data");
        assert_eq!(content[1].schema, None);
    }

    #[test]
    fn test_content_absent_vs_empty() {
        assert_eq!(normalize_content(None), None);
        assert_eq!(normalize_content(Some(&json!("x"))), None);
        assert_eq!(normalize_content(Some(&json!({}))), Some(vec![]));
    }

    #[test]
    fn test_responses_keep_declared_order() {
        let responses = json!({
            "404": { "$ref": "#/components/responses/NotFound" },
            "200": {
                "description": "OK",
                "headers": { "X-Rate-Limit": { "schema": { "type": "integer" } } },
                "content": { "application/json": { "schema": { "type": "array" } } }
            },
            "204": { "description": "Deleted" },
            "500": "bogus"
        });
        let normalized = normalize_responses(Some(&responses));
        let statuses: Vec<&str> = normalized.iter().map(ResponseOrRef::status).collect();
        assert_eq!(statuses, vec!["404", "200", "204"]);

        match &normalized[1] {
            ResponseOrRef::Response {
                headers, content, ..
            } => {
                assert!(headers.as_ref().unwrap().contains_key("X-Rate-Limit"));
                assert_eq!(content.as_ref().unwrap().len(), 1);
            }
            other => panic!("expected inline response, got {other:?}"),
        }
        match &normalized[2] {
            ResponseOrRef::Response {
                headers, content, ..
            } => {
                assert!(headers.is_none());
                assert!(content.is_none());
            }
            other => panic!("expected inline response, got {other:?}"),
        }
    }
}
