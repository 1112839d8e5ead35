use super::Generator;
use crate::doc;
use crate::schema::{BUILTIN_SCALARS, ScalarType};

/// Type alias for a custom scalar; `None` for the built-in ones.
pub fn emit_scalar(scalar: &ScalarType, generator: &Generator<'_>) -> Option<String> {
    if BUILTIN_SCALARS.contains(&scalar.name.as_str()) {
        return None;
    }
    let name = generator.idents().to_type_identifier(&scalar.name);
    let doc = doc::render_or(scalar.description.as_deref(), &scalar.name);
    let mut lines = doc::doc_lines(&doc, "");
    lines.push(format!(
        "pub type {name} = {};",
        generator.config().scalar_type(&scalar.name)
    ));
    Some(lines.join("\n"))
}
