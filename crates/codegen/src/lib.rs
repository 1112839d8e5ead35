//! GraphQL schema to Rust bindings generator.
//!
//! This crate parses a GraphQL introspection result and generates one Rust
//! source file with:
//! - Scope markers for every object, interface and union type
//! - Enums, input objects and custom scalar aliases
//! - Field accessor traits used to build `gqlbind_runtime::SelectionSet`s
//! - `Operation` impls for the root types

mod config;
pub mod doc;
mod emit;
mod error;
mod generator;
mod identifier;
mod schema;

pub use config::{CodegenConfig, DEFAULT_RUNTIME};
pub use emit::{
    Block, Generator, HEADER, Section, emit_enum, emit_enum_impl, emit_fields_trait, emit_input,
    emit_interface, emit_object, emit_scalar, emit_union,
};
pub use error::{ConfigError, GenerateError, SchemaError};
pub use generator::{generate, generate_file, generate_from_model, read_schema};
pub use identifier::IdentifierPolicy;
pub use schema::{
    BUILTIN_SCALARS, EnumType, EnumValue, Field, InputObjectType, InputValue, InterfaceType,
    NamedType, ObjectType, RootTypes, ScalarType, SchemaModel, TypeKind, TypeRef, UnionType, parse,
};
