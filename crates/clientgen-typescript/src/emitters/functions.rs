use clientgen_core::ir::Endpoint;
use minijinja::context;

use super::environment;
use crate::generator::EmitError;

/// Render the exported wrapper for one endpoint.
///
/// The fixed `method` and `path` come first in the object literal so that
/// anything the caller passes in `options` wins.
pub fn render_function(name: &str, endpoint: &Endpoint) -> Result<String, EmitError> {
    let env = environment()?;
    let tmpl = env.get_template("endpoint_fn.ts.j2")?;
    Ok(tmpl.render(context! {
        name => name,
        method => endpoint.method.as_str(),
        path_literal => serde_json::to_string(&endpoint.path)?,
    })?)
}

/// Render the `as const` object mapping every function name to its function.
pub fn render_aggregate(api_name: &str, function_names: &[String]) -> Result<String, EmitError> {
    let env = environment()?;
    let tmpl = env.get_template("aggregate.ts.j2")?;
    Ok(tmpl.render(context! {
        api_name => api_name,
        function_names => function_names,
    })?)
}
