/// Emit `core.ts`: the `request` primitive every tag module delegates to.
pub fn emit_core() -> String {
    include_str!("../../templates/core.ts").to_string()
}
