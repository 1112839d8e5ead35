use super::{Generator, INDENT, member_attributes, string_literal};
use crate::doc;
use crate::schema::EnumType;

/// The enum declaration.
///
/// One case block per value in declaration order, separated by exactly one
/// blank line. A value keeps its schema name through `#[serde(rename)]`.
pub fn emit_enum(enum_type: &EnumType, generator: &Generator<'_>) -> String {
    let name = generator.idents().to_type_identifier(&enum_type.name);
    let variants = variant_identifiers(enum_type, generator);

    let cases: Vec<String> = enum_type
        .enum_values
        .iter()
        .zip(&variants)
        .map(|(value, variant)| {
            let mut lines = member_attributes(
                value.description.as_deref(),
                value.is_deprecated,
                value.deprecation_reason.as_deref(),
                INDENT,
            );
            lines.push(format!(
                "{INDENT}#[serde(rename = {})]",
                string_literal(&value.name)
            ));
            lines.push(format!("{INDENT}{variant},"));
            lines.join("\n")
        })
        .collect();

    let mut out = doc::doc_lines(
        &doc::render_or(enum_type.description.as_deref(), &enum_type.name),
        "",
    );
    out.push("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]".into());
    out.push(format!(
        "#[serde(crate = {})]",
        string_literal(&format!("{}::serde", generator.rt()))
    ));
    out.push(format!("pub enum {name} {{"));
    out.push(cases.join("\n\n"));
    out.push("}".into());
    out.join("\n")
}

/// Constants and trait impls that let an enum be used as a leaf value and
/// as an argument.
pub fn emit_enum_impl(enum_type: &EnumType, generator: &Generator<'_>) -> String {
    let rt = generator.rt();
    let name = generator.idents().to_type_identifier(&enum_type.name);
    let variants = variant_identifiers(enum_type, generator);

    let all = variants
        .iter()
        .map(|variant| format!("{name}::{variant}"))
        .collect::<Vec<_>>()
        .join(", ");
    let arms: String = enum_type
        .enum_values
        .iter()
        .zip(&variants)
        .map(|(value, variant)| {
            format!(
                "            {name}::{variant} => {},\n",
                string_literal(&value.name)
            )
        })
        .collect();

    let mut blocks = vec![format!(
        "#[allow(deprecated)]
impl {name} {{
    pub const ALL: &'static [{name}] = &[{all}];

    /// The value as it appears in the schema.
    pub fn as_str(&self) -> &'static str {{
        match *self {{
{arms}        }}
    }}
}}"
    )];

    if let Some(first) = variants.first() {
        blocks.push(format!(
            "#[allow(deprecated)]
impl {rt}::Leaf for {name} {{
    fn placeholder() -> Self {{
        {name}::{first}
    }}
}}"
        ));
    }

    blocks.push(format!(
        "impl {rt}::IntoArgument for {name} {{
    fn to_argument(&self) -> {rt}::ArgumentValue {{
        {rt}::ArgumentValue::Enum(self.as_str().to_string())
    }}
}}"
    ));
    blocks.join("\n\n")
}

fn variant_identifiers(enum_type: &EnumType, generator: &Generator<'_>) -> Vec<String> {
    let idents = generator.idents();
    idents.unique(
        enum_type
            .enum_values
            .iter()
            .map(|value| idents.to_variant_identifier(&value.name)),
    )
}
