use std::collections::HashSet;

use super::finish_file;
use crate::generator::CORE_MODULE;

/// Names exported by `core.ts`.
pub const CORE_EXPORTS: [&str; 9] = [
    "HttpMethod",
    "PathParamValue",
    "QueryValue",
    "ApiRequestOptions",
    "ApiRequestConfig",
    "buildPath",
    "buildQuery",
    "resolveUrl",
    "request",
];

/// Names one tag module contributes to the barrel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarrelModule {
    pub slug: String,
    /// Function names in module order, then the aggregate object.
    pub exports: Vec<String>,
}

/// Star re-export used for the core module.
pub fn render_star_export(module: &str) -> String {
    format!("export * from \"./{module}\";")
}

/// One named re-export line of the barrel module.
pub fn render_barrel_entry(module: &str, names: &[&str]) -> String {
    format!("export {{ {} }} from \"./{module}\";", names.join(", "))
}

/// Emit `index.ts`.
///
/// Tag modules are re-exported by name: an operation listed under several
/// tags has a function in each module, and two star exports of one name
/// would cancel each other out. The first module to export a name keeps it.
pub fn emit_barrel(modules: &[BarrelModule]) -> String {
    let mut taken: HashSet<&str> = CORE_EXPORTS.into_iter().collect();
    let mut lines = vec![
        "// Generated by clientgen. Do not edit.".to_string(),
        render_star_export(CORE_MODULE),
    ];
    for module in modules {
        let names: Vec<&str> = module
            .exports
            .iter()
            .map(String::as_str)
            .filter(|name| taken.insert(*name))
            .collect();
        if !names.is_empty() {
            lines.push(render_barrel_entry(&module.slug, &names));
        }
    }
    finish_file(lines.join("\n"))
}
