//! Accessor traits over the runtime's field handle.

use super::{Generator, INDENT, Section, member_attributes, string_literal};
use crate::schema::{Field, InputValue};

/// One signature plus its body, before being laid out.
struct Accessor {
    attributes: Vec<String>,
    signature: String,
    body: String,
}

/// The `<Type>Fields` trait and its impl for the type's field handle.
///
/// `possible_types` is non-empty for interfaces and unions, which get an
/// `on` method dispatching to one selection per concrete type.
pub fn emit_fields_trait(
    type_name: &str,
    section: Section,
    fields: &[Field],
    possible_types: &[String],
    generator: &Generator<'_>,
) -> String {
    let rt = generator.rt();
    let marker = format!(
        "super::{}::{}",
        section.module_name(),
        generator.idents().to_type_identifier(type_name)
    );
    let trait_name = generator.fields_trait_name(type_name);

    let idents = generator.idents();
    let names = idents.unique(fields.iter().map(|field| idents.to_field_identifier(&field.name)));
    let mut accessors: Vec<Accessor> = fields
        .iter()
        .zip(&names)
        .map(|(field, ident)| field_accessor(field, ident, generator))
        .collect();
    if matches!(section, Section::Interfaces | Section::Unions) {
        accessors.push(on_accessor(type_name, &marker, possible_types, generator));
    }

    let declarations = accessors
        .iter()
        .map(|accessor| {
            let mut lines = accessor.attributes.clone();
            lines.push(format!("{INDENT}{};", accessor.signature));
            lines.join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n");
    let implementations = accessors
        .iter()
        .map(|accessor| {
            format!(
                "{INDENT}{} {{\n{INDENT}{INDENT}{}\n{INDENT}}}",
                accessor.signature, accessor.body
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "/// Field accessors of [`{type_name}`]({marker}).
pub trait {trait_name} {{
{declarations}
}}

#[allow(deprecated)]
impl {trait_name} for {rt}::Fields<'_, {marker}> {{
{implementations}
}}"
    )
}

fn field_accessor(field: &Field, ident: &str, generator: &Generator<'_>) -> Accessor {
    let rt = generator.rt();
    let attributes = member_attributes(
        field.description.as_deref(),
        field.is_deprecated,
        field.deprecation_reason.as_deref(),
        INDENT,
    );

    let idents = generator.idents();
    let arg_names = idents.unique(
        field
            .args
            .iter()
            .map(|arg| idents.to_field_identifier(&arg.name)),
    );
    let mut params: Vec<String> = vec!["&mut self".into()];
    params.extend(
        field
            .args
            .iter()
            .zip(&arg_names)
            .map(|(arg, name)| format!("{name}: {}", generator.value_type(&arg.ty))),
    );
    let arguments = arguments_expr(&field.args, &arg_names, rt);
    let raw_name = string_literal(&field.name);

    if generator.is_leaf(&field.ty) {
        let ty = generator.value_type(&field.ty);
        Accessor {
            attributes,
            signature: format!(
                "fn {ident}({}) -> Result<{ty}, {rt}::DecodeError>",
                params.join(", ")
            ),
            body: format!("self.leaf({raw_name}, {arguments})"),
        }
    } else {
        params.push(format!(
            "selection: &{rt}::SelectionSet<T, {}>",
            generator.scope_type(&field.ty)
        ));
        Accessor {
            attributes,
            signature: format!(
                "fn {ident}<T: 'static>({}) -> Result<T, {rt}::DecodeError>",
                params.join(", ")
            ),
            body: format!("self.composite({raw_name}, {arguments}, selection)"),
        }
    }
}

/// `Arguments::new().arg(..).optional(..)` for a field's arguments.
fn arguments_expr(args: &[InputValue], names: &[String], rt: &str) -> String {
    let mut expr = format!("{rt}::Arguments::new()");
    for (arg, name) in args.iter().zip(names) {
        let method = if arg.ty.is_non_null() { "arg" } else { "optional" };
        expr.push_str(&format!(".{method}({}, &{name})", string_literal(&arg.name)));
    }
    expr
}

fn on_accessor(
    type_name: &str,
    marker: &str,
    possible_types: &[String],
    generator: &Generator<'_>,
) -> Accessor {
    let rt = generator.rt();
    let idents = generator.idents();
    let names = idents.unique(
        possible_types
            .iter()
            .map(|name| idents.to_field_identifier(name)),
    );

    let mut params: Vec<String> = vec!["&mut self".into()];
    params.extend(possible_types.iter().zip(&names).map(|(ty, name)| {
        format!(
            "{name}: &{rt}::SelectionSet<T, {}>",
            generator.named_path(ty)
        )
    }));
    let cases = names
        .iter()
        .map(|name| format!("{rt}::Case::new({name})"))
        .collect::<Vec<_>>()
        .join(", ");

    Accessor {
        attributes: vec![format!(
            "{INDENT}/// Selects one branch per concrete type of [`{type_name}`]({marker})."
        )],
        signature: format!(
            "fn on<T: 'static>({}) -> Result<T, {rt}::DecodeError>",
            params.join(", ")
        ),
        body: format!("self.fragments(vec![{cases}])"),
    }
}
