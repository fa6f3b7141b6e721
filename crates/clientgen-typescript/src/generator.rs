use std::sync::Arc;

use clientgen_core::ir::ApiSpec;
use clientgen_core::transform::identifiers::{assign_function_names, assign_tag_names};
use clientgen_core::{CodeGenerator, GeneratedFile};
use indexmap::IndexMap;
use log::debug;

use crate::emitters::barrel::{BarrelModule, emit_barrel};
use crate::emitters::runtime::emit_core;
use crate::emitters::tag_module::emit_tag_module;

pub const CORE_MODULE: &str = "core";
pub const INDEX_MODULE: &str = "index";

/// Names every tag module binds at top level besides its functions.
const MODULE_BINDINGS: [&str; 2] = ["request", "ApiRequestOptions"];

/// Reserved words that cannot name a function declaration.
const RESERVED_WORDS: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for", "function",
    "if", "implements", "import", "in", "instanceof", "interface", "let", "new", "null",
    "package", "private", "protected", "public", "return", "static", "super", "switch", "this",
    "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
    #[error("failed to encode string literal: {0}")]
    Literal(#[from] serde_json::Error),
}

/// Emits `core.ts`, one module per tag and the `index.ts` barrel.
#[derive(Debug, Clone, Default)]
pub struct TypeScriptClientGenerator {
    aliases: IndexMap<String, String>,
}

impl TypeScriptClientGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace function-name sources (operationId or `{method}_{path}`) before sanitizing.
    pub fn with_aliases(aliases: IndexMap<String, String>) -> Self {
        Self { aliases }
    }
}

impl CodeGenerator for TypeScriptClientGenerator {
    type Error = EmitError;

    fn generate(&self, api: &ApiSpec) -> Result<Vec<GeneratedFile>, EmitError> {
        let tags = api.sorted_tags();
        let tag_names = assign_tag_names(tags.iter().copied());

        let mut files = vec![GeneratedFile {
            path: format!("{CORE_MODULE}.ts"),
            content: emit_core(),
        }];

        let mut barrel = Vec::with_capacity(tags.len());
        for tag in &tags {
            let endpoints = &api.groups[*tag];
            let names = &tag_names[*tag];

            let reserved: Vec<&str> = MODULE_BINDINGS
                .iter()
                .chain(RESERVED_WORDS)
                .copied()
                .chain([names.api_name.as_str()])
                .collect();
            let function_names =
                assign_function_names(endpoints.iter().map(Arc::as_ref), &reserved, &self.aliases);

            let content =
                emit_tag_module(&api.info.title, tag, &names.api_name, endpoints, &function_names)?;
            debug!("emitted {}.ts with {} functions", names.slug, function_names.len());
            files.push(GeneratedFile {
                path: format!("{}.ts", names.slug),
                content,
            });

            let mut exports = function_names;
            exports.push(names.api_name.clone());
            barrel.push(BarrelModule {
                slug: names.slug.clone(),
                exports,
            });
        }

        files.push(GeneratedFile {
            path: format!("{INDEX_MODULE}.ts"),
            content: emit_barrel(&barrel),
        });
        Ok(files)
    }
}
