use serde_json::{Map, Value};

use super::normalize::{merge_parameters, normalize_request_body, normalize_responses};
use super::schema_summary::string_field;
use crate::ir::{Endpoint, HttpMethod};

/// Build the [`Endpoint`] for one `(path, method, operation)` triple.
pub fn build_endpoint(
    path: &str,
    method: HttpMethod,
    operation: &Map<String, Value>,
    path_params: &[Value],
    tags: &[String],
) -> Endpoint {
    let operation_id = string_field(operation, "operationId");
    // Blank labels fall through to the next candidate.
    let declared_id = operation_id.clone().filter(|id| !id.is_empty());
    let summary = string_field(operation, "summary").filter(|s| !s.is_empty());

    let id = declared_id
        .clone()
        .unwrap_or_else(|| synthesize_id(method, path));

    let name = summary
        .or(declared_id)
        .unwrap_or_else(|| format!("{} {}", method.as_str(), path));

    let operation_params = operation
        .get("parameters")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    Endpoint {
        id,
        operation_id,
        name,
        method,
        path: path.to_string(),
        description: string_field(operation, "description"),
        tags: tags.to_vec(),
        parameters: merge_parameters(path_params, operation_params),
        request_body: normalize_request_body(operation.get("requestBody")),
        responses: normalize_responses(operation.get("responses")),
        deprecated: operation
            .get("deprecated")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        security: operation.get("security").cloned(),
    }
}

/// `{method}_{segments}` with empty segments dropped and `{}` stripped,
/// e.g. `get_clubs_clubId_posts` for `GET /clubs/{clubId}/posts` and `get_`
/// for the root path.
pub fn synthesize_id(method: HttpMethod, path: &str) -> String {
    let segments: Vec<String> = path
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|s| s.replace(['{', '}'], ""))
        .collect();

    format!("{}_{}", method.key(), segments.join("_"))
}
