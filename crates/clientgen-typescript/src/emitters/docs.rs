use clientgen_core::ir::{Endpoint, ParameterLocation, RequestBodyOrRef};

/// Escape `*/` sequences that would prematurely close the comment block.
pub fn escape_jsdoc(value: &str) -> String {
    value.replace("*/", "*\\/")
}

fn location_label(location: ParameterLocation) -> &'static str {
    match location {
        ParameterLocation::Path => "Path params",
        ParameterLocation::Query => "Query params",
        ParameterLocation::Header => "Header params",
        ParameterLocation::Cookie => "Cookie params",
    }
}

/// Short note on what the endpoint accepts as a body.
pub fn body_note(body: Option<&RequestBodyOrRef>) -> String {
    match body {
        None => "Body: none".to_string(),
        Some(RequestBodyOrRef::Ref { ref_path }) => format!("Body: see {ref_path}"),
        Some(RequestBodyOrRef::RequestBody(body)) => {
            let presence = if body.required { "required" } else { "optional" };
            let mime_types: Vec<&str> = body
                .content
                .iter()
                .flatten()
                .map(|c| c.mime_type.as_str())
                .collect();
            if mime_types.is_empty() {
                format!("Body: {presence}")
            } else {
                format!("Body: {presence} ({})", mime_types.join(", "))
            }
        }
    }
}

/// Unescaped text lines of an endpoint's doc comment. Empty strings are
/// paragraph breaks.
pub fn doc_lines(tag: &str, endpoint: &Endpoint) -> Vec<String> {
    let mut lines = vec![endpoint.name.clone()];

    if let Some(description) = endpoint.description.as_deref()
        && !description.trim().is_empty()
        && description != endpoint.name
    {
        lines.push(String::new());
        lines.extend(description.trim().lines().map(|l| l.trim_end().to_string()));
    }

    lines.push(String::new());
    lines.push(format!("Tag: {tag}"));
    lines.push(format!("Endpoint: {} {}", endpoint.method.as_str(), endpoint.path));

    for location in ParameterLocation::ALL {
        let names: Vec<&str> = endpoint.parameters_in(location).map(|p| p.name.as_str()).collect();
        if !names.is_empty() {
            lines.push(format!("{}: {}", location_label(location), names.join(", ")));
        }
    }
    let unplaced: Vec<&str> = endpoint
        .parameters
        .iter()
        .filter_map(|p| p.as_parameter())
        .filter(|p| p.location.is_none())
        .map(|p| p.name.as_str())
        .collect();
    if !unplaced.is_empty() {
        lines.push(format!("Other params: {}", unplaced.join(", ")));
    }
    let refs: Vec<&str> = endpoint.parameter_refs().collect();
    if !refs.is_empty() {
        lines.push(format!("Parameter refs: {}", refs.join(", ")));
    }

    lines.push(body_note(endpoint.request_body.as_ref()));

    let statuses: Vec<&str> = endpoint.responses.iter().map(|r| r.status()).collect();
    if statuses.is_empty() {
        lines.push("Responses: none declared".to_string());
    } else {
        lines.push(format!("Responses: {}", statuses.join(", ")));
    }

    if endpoint.deprecated {
        lines.push("@deprecated".to_string());
    }
    lines
}

/// Render the `/** ... */` block placed above an endpoint's function.
pub fn render_doc_comment(tag: &str, endpoint: &Endpoint) -> String {
    let mut out = String::from("/**\n");
    for line in doc_lines(tag, endpoint) {
        if line.is_empty() {
            out.push_str(" *\n");
        } else {
            out.push_str(" * ");
            out.push_str(&escape_jsdoc(&line));
            out.push('\n');
        }
    }
    out.push_str(" */");
    out
}
