use std::collections::HashSet;

use indexmap::IndexMap;

use crate::ir::{Endpoint, UNTAGGED};

/// Characters that separate words when building PascalCase.
fn is_word_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '_' | '-' | '.' | '/' | ':' | '\\')
}

/// PascalCase: split on separators and lower→upper transitions, then
/// capitalize each lowercased word.
///
/// Characters outside `[A-Za-z0-9]` that are not separators survive; callers strip them.
pub fn to_pascal_case(raw: &str) -> String {
    let mut spaced = String::with_capacity(raw.len() + 8);
    let mut prev: Option<char> = None;
    for c in raw.chars() {
        if let Some(p) = prev
            && p.is_lowercase()
            && c.is_uppercase()
        {
            spaced.push(' ');
        }
        spaced.push(c);
        prev = Some(c);
    }

    spaced
        .split(is_word_separator)
        .filter(|w| !w.is_empty())
        .map(capitalize_word)
        .collect()
}

fn capitalize_word(word: &str) -> String {
    let lower = word.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn strip_non_alphanumeric(s: &str) -> String {
    s.chars().filter(char::is_ascii_alphanumeric).collect()
}

/// Turn an arbitrary string into a camelCase identifier that is safe in
/// TypeScript: `get_/ping` → `getPing`, `2fa-setup` → `endpoint2faSetup`,
/// `!!!` → `endpoint`.
pub fn sanitize_identifier(raw: &str) -> String {
    let pascal = to_pascal_case(raw);
    let mut chars = pascal.chars();
    let camel: String = match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    };

    let cleaned = strip_non_alphanumeric(&camel);
    match cleaned.chars().next() {
        None => "endpoint".to_string(),
        Some(first) if first.is_ascii_digit() => format!("endpoint{}", capitalize_first(&cleaned)),
        Some(_) => cleaned,
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Export name of a tag's aggregate object: `Posts` → `PostsApi`,
/// `2024 season` → `Api2024SeasonApi`.
pub fn build_api_name(tag: &str) -> String {
    let mut name = strip_non_alphanumeric(&to_pascal_case(tag));
    if name.is_empty() {
        name = UNTAGGED.to_string();
    }
    if name.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_') {
        format!("{name}Api")
    } else {
        format!("Api{name}Api")
    }
}

/// Filesystem-safe tag name: lowercase, non-alphanumeric runs become one hyphen.
pub fn slugify(tag: &str) -> String {
    let mut slug = String::with_capacity(tag.len());
    let mut pending_hyphen = false;
    for c in tag.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(c);
            pending_hyphen = false;
        } else {
            pending_hyphen = true;
        }
    }

    if slug.is_empty() {
        "untagged".to_string()
    } else {
        slug
    }
}

/// A set of names already taken within one scope.
#[derive(Debug, Clone, Default)]
pub struct IdentifierSet {
    used: HashSet<String>,
}

impl IdentifierSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `names` already taken.
    pub fn with_reserved<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            used: names.into_iter().map(String::from).collect(),
        }
    }

    /// Take `base`, or the first of `base2`, `base3`, ... that is still free.
    pub fn claim(&mut self, base: &str) -> String {
        self.claim_with(base, "")
    }

    /// Like [`claim`](Self::claim) with `separator` between base and counter.
    pub fn claim_with(&mut self, base: &str, separator: &str) -> String {
        let mut candidate = base.to_string();
        let mut counter = 2;
        while self.used.contains(&candidate) {
            candidate = format!("{base}{separator}{counter}");
            counter += 1;
        }
        self.used.insert(candidate.clone());
        candidate
    }
}

/// Raw string a function name is derived from: the operationId, else
/// `{method}_{path}`, then replaced by an alias when one is configured.
pub fn function_name_source(endpoint: &Endpoint, aliases: &IndexMap<String, String>) -> String {
    let raw = endpoint
        .operation_id
        .clone()
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| format!("{}_{}", endpoint.method.key(), endpoint.path));
    aliases.get(&raw).cloned().unwrap_or(raw)
}

/// Function names for one tag module, in list order.
///
/// `reserved` holds names already bound in the module (imports, the
/// aggregate export) so no generated function can shadow them.
pub fn assign_function_names<'a>(
    endpoints: impl IntoIterator<Item = &'a Endpoint>,
    reserved: &[&str],
    aliases: &IndexMap<String, String>,
) -> Vec<String> {
    let mut used = IdentifierSet::with_reserved(reserved.iter().copied());
    endpoints
        .into_iter()
        .map(|endpoint| used.claim(&sanitize_identifier(&function_name_source(endpoint, aliases))))
        .collect()
}

/// Slug and export name assigned to one tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagNames {
    pub slug: String,
    pub api_name: String,
}

/// Slugs taken by the shared modules of the client tree.
pub const RESERVED_SLUGS: [&str; 2] = ["core", "index"];

/// Assign every tag a unique slug and export name.
///
/// Tags are processed in the order given, so callers pass them sorted to keep
/// suffixes stable between runs.
pub fn assign_tag_names<'a>(tags: impl IntoIterator<Item = &'a str>) -> IndexMap<String, TagNames> {
    let mut slugs = IdentifierSet::with_reserved(RESERVED_SLUGS);
    let mut api_names = IdentifierSet::new();

    tags.into_iter()
        .map(|tag| {
            let names = TagNames {
                slug: slugs.claim_with(&slugify(tag), "-"),
                api_name: api_names.claim(&build_api_name(tag)),
            };
            (tag.to_string(), names)
        })
        .collect()
}
