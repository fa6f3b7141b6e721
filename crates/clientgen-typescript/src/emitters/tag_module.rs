use std::sync::Arc;

use clientgen_core::ir::Endpoint;
use minijinja::context;

use super::docs::render_doc_comment;
use super::functions::{render_aggregate, render_function};
use super::{environment, finish_file};
use crate::generator::EmitError;

/// Emit one tag's module.
///
/// `function_names[i]` is the name assigned to `endpoints[i]`.
pub fn emit_tag_module(
    title: &str,
    tag: &str,
    api_name: &str,
    endpoints: &[Arc<Endpoint>],
    function_names: &[String],
) -> Result<String, EmitError> {
    let env = environment()?;
    let tmpl = env.get_template("tag_module.ts.j2")?;

    let rendered = endpoints
        .iter()
        .zip(function_names)
        .map(|(endpoint, name)| {
            Ok::<_, EmitError>(context! {
                doc => render_doc_comment(tag, endpoint),
                code => render_function(name, endpoint)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let content = tmpl.render(context! {
        title => single_line(title),
        tag => single_line(tag),
        endpoints => rendered,
        aggregate => render_aggregate(api_name, function_names)?,
    })?;
    Ok(finish_file(content))
}

fn single_line(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
