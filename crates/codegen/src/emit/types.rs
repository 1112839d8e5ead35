//! Schema type references to Rust type expressions.

use super::{Generator, Section};
use crate::schema::{TypeKind, TypeRef};

impl Generator<'_> {
    /// Generated module a named type lives in.
    pub(crate) fn section_of(&self, name: &str) -> Option<Section> {
        match self.schema().kind_of(name)? {
            TypeKind::Scalar => Some(Section::Scalars),
            TypeKind::Enum => Some(Section::Enums),
            TypeKind::Object => Some(Section::Objects),
            TypeKind::Interface => Some(Section::Interfaces),
            TypeKind::Union => Some(Section::Unions),
            TypeKind::InputObject => Some(Section::Inputs),
        }
    }

    /// Path of a named type as seen from any generated module.
    pub(crate) fn named_path(&self, name: &str) -> String {
        if let Some(builtin) = builtin_scalar(name) {
            return builtin.to_string();
        }
        let ident = self.idents().to_type_identifier(name);
        match self.section_of(name) {
            Some(section) => format!("super::{}::{ident}", section.module_name()),
            None => ident,
        }
    }

    /// Rust type of a leaf value, argument or input field.
    ///
    /// `NonNull(T)` is `T`, a nullable `T` is `Option<T>`, `List(T)` is
    /// `Vec<T>`.
    pub(crate) fn value_type(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::NonNull(inner) => self.value_type_non_null(inner),
            other => format!("Option<{}>", self.value_type_non_null(other)),
        }
    }

    fn value_type_non_null(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Named(name) => self.named_path(name),
            TypeRef::List(inner) => format!("Vec<{}>", self.value_type(inner)),
            TypeRef::NonNull(inner) => self.value_type_non_null(inner),
        }
    }

    /// Like [`Self::value_type`], boxing a directly nullable input object so
    /// input types may refer to themselves.
    pub(crate) fn input_field_type(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Named(name) if self.schema().kind_of(name) == Some(TypeKind::InputObject) => {
                format!("Option<Box<{}>>", self.named_path(name))
            }
            other => self.value_type(other),
        }
    }

    /// Scope marker of a composite field's nested selection.
    pub(crate) fn scope_type(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::NonNull(inner) => self.scope_type_non_null(inner),
            other => format!("{}::Nullable<{}>", self.rt(), self.scope_type_non_null(other)),
        }
    }

    fn scope_type_non_null(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Named(name) => self.named_path(name),
            TypeRef::List(inner) => format!("{}::List<{}>", self.rt(), self.scope_type(inner)),
            TypeRef::NonNull(inner) => self.scope_type_non_null(inner),
        }
    }

    /// Whether a field of this type is selected without a nested selection.
    pub(crate) fn is_leaf(&self, ty: &TypeRef) -> bool {
        matches!(
            self.schema().kind_of(ty.base_name()),
            Some(TypeKind::Scalar | TypeKind::Enum) | None
        )
    }

    /// Name of the accessor trait generated for a type.
    ///
    /// Schema type names are unique and already valid identifiers, so the
    /// raw name keeps trait names apart (`Foo_Bar` and `FooBar`).
    pub(crate) fn fields_trait_name(&self, name: &str) -> String {
        format!("{name}Fields")
    }
}

fn builtin_scalar(name: &str) -> Option<&'static str> {
    match name {
        "Int" => Some("i32"),
        "Float" => Some("f64"),
        "String" | "ID" => Some("String"),
        "Boolean" => Some("bool"),
        _ => None,
    }
}
