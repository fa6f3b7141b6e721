use std::sync::Arc;

use log::debug;
use serde_json::Value;

use super::collation::locale_cmp;
use super::endpoint_builder::build_endpoint;
use crate::ir::{ApiInfo, ApiSpec, HttpMethod, TagGroups, UNTAGGED};
use crate::parse::OpenApiDocument;

/// Build the full [`ApiSpec`] for a loaded document.
pub fn build_api_spec(doc: &OpenApiDocument) -> ApiSpec {
    ApiSpec {
        info: ApiInfo {
            title: doc.title().to_string(),
            version: doc.version().map(String::from),
            description: doc.description().map(String::from),
        },
        groups: build_tag_groups(doc),
    }
}

/// Walk every path and supported method, grouping endpoints by tag.
///
/// Each tag's list is sorted by endpoint name. Path items or operations that
/// are not objects are skipped, as are keys that are not one of the seven
/// supported lowercase methods (`trace`, `parameters`, `summary`, ...).
pub fn build_tag_groups(doc: &OpenApiDocument) -> TagGroups {
    let mut groups = TagGroups::new();

    for (path, item) in doc.path_items() {
        let path_params = item
            .get("parameters")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();

        for (key, raw) in item {
            let Some(method) = HttpMethod::from_key(key) else {
                continue;
            };
            let Some(operation) = raw.as_object() else {
                continue;
            };

            let tags = operation_tags(operation.get("tags"));
            let endpoint = Arc::new(build_endpoint(path, method, operation, path_params, &tags));
            for tag in tags {
                groups.entry(tag).or_default().push(Arc::clone(&endpoint));
            }
        }
    }

    for (tag, endpoints) in groups.iter_mut() {
        endpoints.sort_by(|a, b| locale_cmp(&a.name, &b.name));
        debug!("tag {tag}: {} endpoints", endpoints.len());
    }

    groups
}

/// The operation's string tags without duplicates, or `["Untagged"]`.
fn operation_tags(raw: Option<&Value>) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in raw.and_then(Value::as_array).into_iter().flatten() {
        if let Some(tag) = tag.as_str()
            && !tags.iter().any(|t| t == tag)
        {
            tags.push(tag.to_string());
        }
    }
    if tags.is_empty() {
        tags.push(UNTAGGED.to_string());
    }
    tags
}
