use std::sync::Arc;

use indexmap::IndexMap;
use serde::Serialize;

use super::endpoint::Endpoint;
use crate::transform::collation::locale_cmp;

/// Tag assigned to operations that declare none.
pub const UNTAGGED: &str = "Untagged";

/// Endpoints grouped by tag, in order of first appearance in the document.
///
/// An operation with several tags shares one `Arc<Endpoint>` across all of its lists.
pub type TagGroups = IndexMap<String, Vec<Arc<Endpoint>>>;

/// Everything the emitters need, built once per run.
#[derive(Debug, Clone, Serialize)]
pub struct ApiSpec {
    pub info: ApiInfo,
    pub groups: TagGroups,
}

/// API metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiInfo {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ApiSpec {
    /// Tag names sorted alphabetically.
    pub fn sorted_tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.groups.keys().map(String::as_str).collect();
        tags.sort_by(|a, b| locale_cmp(a, b));
        tags
    }

    /// Sum of every tag's list length; multi-tag operations count once per tag.
    pub fn endpoint_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}
