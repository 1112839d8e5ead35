use super::objects::scope_impl;
use super::{Generator, string_literal};
use crate::doc;
use crate::schema::UnionType;

/// A closed enum of the union's members, usable as a polymorphic scope.
pub fn emit_union(union: &UnionType, generator: &Generator<'_>) -> String {
    let rt = generator.rt();
    let idents = generator.idents();
    let name = idents.to_type_identifier(&union.name);
    let variants = idents.unique(
        union
            .possible_types
            .iter()
            .map(|member| idents.to_type_identifier(member)),
    );

    let mut lines = doc::doc_lines(&doc::render_or(union.description.as_deref(), &union.name), "");
    lines.push("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]".into());
    lines.push(format!("pub enum {name} {{"));
    lines.push(
        variants
            .iter()
            .map(|variant| format!("    {variant},"))
            .collect::<Vec<_>>()
            .join("\n"),
    );
    lines.push("}".into());
    let declaration = lines.join("\n");

    let members = || union.possible_types.iter().zip(&variants);
    let typename_arms: String = members()
        .map(|(member, variant)| {
            format!(
                "            {name}::{variant} => {},\n",
                string_literal(member)
            )
        })
        .collect();
    let from_typename_arms: String = members()
        .map(|(member, variant)| {
            format!(
                "            {} => Some({name}::{variant}),\n",
                string_literal(member)
            )
        })
        .collect();
    let inherent = format!(
        "impl {name} {{
    /// `__typename` of the member.
    pub fn typename(&self) -> &'static str {{
        match *self {{
{typename_arms}        }}
    }}

    pub fn from_typename(typename: &str) -> Option<Self> {{
        match typename {{
{from_typename_arms}            _ => None,
        }}
    }}
}}"
    );

    let mut blocks = vec![
        declaration,
        inherent,
        scope_impl(&union.name, &name, rt),
        format!("impl {rt}::Polymorphic for {name} {{}}"),
    ];
    blocks.extend(union.possible_types.iter().map(|member| {
        format!(
            "impl {rt}::PossibleType<{name}> for {} {{}}",
            generator.named_path(member)
        )
    }));
    blocks.join("\n\n")
}
