//! Rust source emission.
//!
//! Every schema type is turned into one or more [`Block`]s, each tagged with
//! the [`Section`] (generated `pub mod`) it belongs to. Emitters are pure
//! functions of the type, the schema and the configuration, so types are
//! emitted in parallel and then assembled in declaration order.

mod enums;
mod fields;
mod inputs;
mod objects;
mod operations;
mod scalars;
mod types;
mod unions;

use rayon::prelude::*;
use tracing::debug;

use crate::config::CodegenConfig;
use crate::identifier::IdentifierPolicy;
use crate::schema::{NamedType, SchemaModel};

pub use enums::{emit_enum, emit_enum_impl};
pub use fields::emit_fields_trait;
pub use inputs::emit_input;
pub use objects::{emit_interface, emit_object};
pub use scalars::emit_scalar;
pub use unions::emit_union;

/// First line of every generated file.
pub const HEADER: &str = "// Code generated by gqlbind. DO NOT EDIT.";

pub(crate) const INDENT: &str = "    ";

/// A generated `pub mod`, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    Scalars,
    Enums,
    Objects,
    Interfaces,
    Unions,
    Inputs,
    Fields,
    Operations,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Scalars,
        Section::Enums,
        Section::Objects,
        Section::Interfaces,
        Section::Unions,
        Section::Inputs,
        Section::Fields,
        Section::Operations,
    ];

    pub fn module_name(&self) -> &'static str {
        match self {
            Section::Scalars => "scalars",
            Section::Enums => "enums",
            Section::Objects => "objects",
            Section::Interfaces => "interfaces",
            Section::Unions => "unions",
            Section::Inputs => "inputs",
            Section::Fields => "fields",
            Section::Operations => "operations",
        }
    }
}

/// One top-level item, or a group of items emitted together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub section: Section,
    pub code: String,
}

impl Block {
    pub fn new(section: Section, code: String) -> Self {
        Block { section, code }
    }
}

/// Emission context shared by all emitters.
#[derive(Debug)]
pub struct Generator<'a> {
    schema: &'a SchemaModel,
    config: &'a CodegenConfig,
    idents: IdentifierPolicy,
}

impl<'a> Generator<'a> {
    pub fn new(schema: &'a SchemaModel, config: &'a CodegenConfig) -> Self {
        let idents =
            IdentifierPolicy::default().with_reserved_words(config.reserved_words.iter().cloned());
        Generator {
            schema,
            config,
            idents,
        }
    }

    pub fn schema(&self) -> &SchemaModel {
        self.schema
    }

    pub fn config(&self) -> &CodegenConfig {
        self.config
    }

    pub fn idents(&self) -> &IdentifierPolicy {
        &self.idents
    }

    /// Path of the runtime crate in generated code.
    pub(crate) fn rt(&self) -> &str {
        &self.config.runtime
    }

    /// All blocks of one schema type.
    pub fn emit_type(&self, ty: &NamedType) -> Vec<Block> {
        match ty {
            NamedType::Scalar(scalar) => emit_scalar(scalar, self)
                .map(|code| Block::new(Section::Scalars, code))
                .into_iter()
                .collect(),
            NamedType::Enum(enum_type) => vec![
                Block::new(Section::Enums, emit_enum(enum_type, self)),
                Block::new(Section::Enums, emit_enum_impl(enum_type, self)),
            ],
            NamedType::Object(object) => vec![
                Block::new(Section::Objects, emit_object(object, self)),
                Block::new(
                    Section::Fields,
                    emit_fields_trait(ty.name(), Section::Objects, &object.fields, &[], self),
                ),
            ],
            NamedType::Interface(interface) => vec![
                Block::new(Section::Interfaces, emit_interface(interface, self)),
                Block::new(
                    Section::Fields,
                    emit_fields_trait(
                        ty.name(),
                        Section::Interfaces,
                        &interface.fields,
                        &interface.possible_types,
                        self,
                    ),
                ),
            ],
            NamedType::Union(union) => vec![
                Block::new(Section::Unions, emit_union(union, self)),
                Block::new(
                    Section::Fields,
                    emit_fields_trait(ty.name(), Section::Unions, &[], &union.possible_types, self),
                ),
            ],
            NamedType::InputObject(input) => {
                vec![Block::new(Section::Inputs, emit_input(input, self))]
            }
        }
    }

    /// All blocks of the schema, in declaration order.
    pub fn emit_blocks(&self) -> Vec<Block> {
        let per_type: Vec<Vec<Block>> = self
            .schema
            .types()
            .par_iter()
            .map(|ty| self.emit_type(ty))
            .collect();
        let mut blocks: Vec<Block> = per_type.into_iter().flatten().collect();
        blocks.extend(
            operations::emit_operations(self)
                .into_iter()
                .map(|code| Block::new(Section::Operations, code)),
        );
        blocks
    }

    /// The complete generated file.
    pub fn emit_module(&self) -> String {
        let blocks = self.emit_blocks();
        debug!(blocks = blocks.len(), "Emitted type blocks.");

        let mut out = String::from(HEADER);
        out.push('\n');
        for section in Section::ALL {
            let codes: Vec<&str> = blocks
                .iter()
                .filter(|block| block.section == section)
                .map(|block| block.code.as_str())
                .collect();
            if codes.is_empty() {
                continue;
            }

            out.push('\n');
            out.push_str(&format!("pub mod {} {{\n", section.module_name()));
            let mut items: Vec<String> = Vec::with_capacity(codes.len() + 1);
            if section == Section::Enums {
                items.push(format!(
                    "use {}::serde::{{Deserialize, Serialize}};",
                    self.rt()
                ));
            }
            items.extend(codes.into_iter().map(str::to_string));
            out.push_str(&indent(&items.join("\n\n"), INDENT));
            out.push_str("\n}\n");
        }
        out
    }
}

/// Prefixes every non-empty line with `prefix`.
pub(crate) fn indent(text: &str, prefix: &str) -> String {
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{prefix}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Doc comment and deprecation lines shared by enum values and fields.
pub(crate) fn member_attributes(
    description: Option<&str>,
    is_deprecated: bool,
    deprecation_reason: Option<&str>,
    indent: &str,
) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(text) = crate::doc::render(description) {
        lines.extend(crate::doc::doc_lines(&text, indent));
    }
    if is_deprecated {
        lines.push(format!(
            "{indent}#[deprecated(note = {})]",
            string_literal(deprecation_reason.unwrap_or_default())
        ));
    }
    lines
}

/// A Rust string literal for `value`.
pub(crate) fn string_literal(value: &str) -> String {
    format!("{value:?}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_skips_blank_lines() {
        assert_eq!(indent("a\n\nb", "    "), "    a\n\n    b");
    }

    #[test]
    fn test_member_attributes() {
        assert_eq!(
            member_attributes(Some("Gone."), true, None, "    "),
            vec!["    /// Gone.", "    #[deprecated(note = \"\")]"]
        );
        assert!(member_attributes(None, false, Some("ignored"), "").is_empty());
    }

    #[test]
    fn test_string_literal_escapes() {
        assert_eq!(string_literal("say \"hi\""), r#""say \"hi\"""#);
    }

    #[test]
    fn test_section_order() {
        let names: Vec<_> = Section::ALL.iter().map(Section::module_name).collect();
        assert_eq!(
            names,
            vec![
                "scalars",
                "enums",
                "objects",
                "interfaces",
                "unions",
                "inputs",
                "fields",
                "operations"
            ]
        );
    }
}
