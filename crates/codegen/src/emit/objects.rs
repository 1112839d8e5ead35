use super::{Generator, string_literal};
use crate::doc;
use crate::schema::{InterfaceType, ObjectType};

/// Scope marker of an object type.
pub fn emit_object(object: &ObjectType, generator: &Generator<'_>) -> String {
    marker(&object.name, object.description.as_deref(), generator)
}

/// Scope marker of an interface, with its polymorphism impls.
pub fn emit_interface(interface: &InterfaceType, generator: &Generator<'_>) -> String {
    let rt = generator.rt();
    let name = generator.idents().to_type_identifier(&interface.name);

    let mut blocks = vec![
        marker(&interface.name, interface.description.as_deref(), generator),
        format!("impl {rt}::Polymorphic for {name} {{}}"),
    ];
    blocks.extend(interface.possible_types.iter().map(|possible| {
        format!(
            "impl {rt}::PossibleType<{name}> for {} {{}}",
            generator.named_path(possible)
        )
    }));
    blocks.join("\n\n")
}

/// Zero-sized marker struct plus its `Scope` impl.
pub(crate) fn marker(
    raw_name: &str,
    description: Option<&str>,
    generator: &Generator<'_>,
) -> String {
    let rt = generator.rt();
    let name = generator.idents().to_type_identifier(raw_name);
    let mut lines = doc::doc_lines(&doc::render_or(description, raw_name), "");
    lines.push("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]".into());
    lines.push(format!("pub struct {name};"));
    lines.push(String::new());
    lines.push(scope_impl(raw_name, &name, rt));
    lines.join("\n")
}

pub(crate) fn scope_impl(raw_name: &str, ident: &str, rt: &str) -> String {
    format!(
        "impl {rt}::Scope for {ident} {{
    const TYPE_NAME: &'static str = {};
}}",
        string_literal(raw_name)
    )
}
