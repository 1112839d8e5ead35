use super::{Generator, INDENT, member_attributes, string_literal};
use crate::doc;
use crate::schema::InputObjectType;

/// Input object struct plus its `IntoArgument` impl.
///
/// Nullable fields render through `Arguments::optional` and are left out of
/// the literal when `None`.
pub fn emit_input(input: &InputObjectType, generator: &Generator<'_>) -> String {
    let rt = generator.rt();
    let idents = generator.idents();
    let name = idents.to_type_identifier(&input.name);
    let field_names = idents.unique(
        input
            .input_fields
            .iter()
            .map(|field| idents.to_field_identifier(&field.name)),
    );

    let fields = input
        .input_fields
        .iter()
        .zip(&field_names)
        .map(|(field, ident)| {
            let mut lines = member_attributes(
                field.description.as_deref(),
                field.is_deprecated,
                field.deprecation_reason.as_deref(),
                INDENT,
            );
            lines.push(format!(
                "{INDENT}pub {ident}: {},",
                generator.input_field_type(&field.ty)
            ));
            lines.join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n");

    let mut arguments = format!("{rt}::Arguments::new()");
    for (field, ident) in input.input_fields.iter().zip(&field_names) {
        let method = if field.ty.is_non_null() { "arg" } else { "optional" };
        arguments.push_str(&format!(
            "\n            .{method}({}, &self.{ident})",
            string_literal(&field.name)
        ));
    }

    let mut lines = doc::doc_lines(&doc::render_or(input.description.as_deref(), &input.name), "");
    lines.push("#[derive(Debug, Clone, PartialEq)]".into());
    lines.push(format!("pub struct {name} {{"));
    lines.push(fields);
    lines.push("}".into());
    lines.push(String::new());
    lines.push(format!(
        "#[allow(deprecated)]
impl {rt}::IntoArgument for {name} {{
    fn to_argument(&self) -> {rt}::ArgumentValue {{
        {arguments}
            .into_object()
    }}
}}"
    ));
    lines.join("\n")
}
