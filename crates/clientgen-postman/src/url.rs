use std::sync::OnceLock;

use regex::Regex;

use crate::collection::{PathVariable, Url};

pub const BASE_URL: &str = "{{baseUrl}}";

fn placeholder_re() -> &'static Regex {
    static PLACEHOLDER_RE: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER_RE.get_or_init(|| Regex::new(r"\{([^}]+)\}").expect("Invalid regex constant"))
}

/// Distinct placeholder names in order of first appearance.
pub fn path_placeholders(path: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for cap in placeholder_re().captures_iter(path) {
        let name = &cap[1];
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

/// Rewrite `{name}` to Postman's `:name` form.
fn to_postman_segment(segment: &str) -> String {
    placeholder_re().replace_all(segment, ":$1").into_owned()
}

/// Non-empty path segments with placeholders rewritten.
pub fn postman_path_segments(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|s| !s.is_empty())
        .map(to_postman_segment)
        .collect()
}

/// URL object for `path` relative to the `baseUrl` collection variable.
pub fn build_url(path: &str) -> Url {
    Url {
        raw: format!("{BASE_URL}{path}"),
        host: vec![BASE_URL.to_string()],
        path: postman_path_segments(path),
        variable: path_placeholders(path)
            .into_iter()
            .map(|key| PathVariable {
                key,
                value: String::new(),
            })
            .collect(),
        query: None,
    }
}
