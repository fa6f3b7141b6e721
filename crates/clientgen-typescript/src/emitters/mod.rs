//! Pure formatting functions, one per emitted construct.

pub mod barrel;
pub mod docs;
pub mod functions;
pub mod runtime;
pub mod tag_module;

use minijinja::Environment;

/// Template environment shared by every fragment renderer.
pub(crate) fn environment() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.add_template(
        "endpoint_fn.ts.j2",
        include_str!("../../templates/endpoint_fn.ts.j2"),
    )?;
    env.add_template(
        "aggregate.ts.j2",
        include_str!("../../templates/aggregate.ts.j2"),
    )?;
    env.add_template(
        "tag_module.ts.j2",
        include_str!("../../templates/tag_module.ts.j2"),
    )?;
    Ok(env)
}

/// Whole files end with exactly one newline.
pub(crate) fn finish_file(mut content: String) -> String {
    let trimmed = content.trim_end_matches('\n').len();
    content.truncate(trimmed);
    content.push('\n');
    content
}
