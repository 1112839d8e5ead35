//! In-memory schema model.
//!
//! The model is what the emitters walk. It is built either by
//! [`parse`] from an introspection result or programmatically through
//! [`SchemaModel::new`]; both paths resolve every type reference before a
//! model is handed out, so emitters never see a dangling name.

mod introspection;

use std::collections::HashMap;

use crate::error::SchemaError;

pub use introspection::parse;

/// Scalars every GraphQL schema has, declared or not.
pub const BUILTIN_SCALARS: &[&str] = &["Int", "Float", "String", "Boolean", "ID"];

/// Reference to a type from a field, argument or input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    Named(String),
    NonNull(Box<TypeRef>),
    List(Box<TypeRef>),
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(name.into())
    }

    pub fn non_null(inner: TypeRef) -> Self {
        TypeRef::NonNull(Box::new(inner))
    }

    pub fn list(inner: TypeRef) -> Self {
        TypeRef::List(Box::new(inner))
    }

    /// The named type at the bottom of the wrapping.
    pub fn base_name(&self) -> &str {
        match self {
            TypeRef::Named(name) => name,
            TypeRef::NonNull(inner) | TypeRef::List(inner) => inner.base_name(),
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, TypeRef::NonNull(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    pub name: String,
    pub description: Option<String>,
    pub is_deprecated: bool,
    pub deprecation_reason: Option<String>,
}

/// Argument of a field, or field of an input object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputValue {
    pub name: String,
    pub description: Option<String>,
    pub ty: TypeRef,
    pub default_value: Option<String>,
    pub is_deprecated: bool,
    pub deprecation_reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub description: Option<String>,
    pub args: Vec<InputValue>,
    pub ty: TypeRef,
    pub is_deprecated: bool,
    pub deprecation_reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarType {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectType {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<Field>,
    pub interfaces: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceType {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<Field>,
    pub possible_types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionType {
    pub name: String,
    pub description: Option<String>,
    pub possible_types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumType {
    pub name: String,
    pub description: Option<String>,
    pub enum_values: Vec<EnumValue>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputObjectType {
    pub name: String,
    pub description: Option<String>,
    pub input_fields: Vec<InputValue>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamedType {
    Scalar(ScalarType),
    Object(ObjectType),
    Interface(InterfaceType),
    Union(UnionType),
    Enum(EnumType),
    InputObject(InputObjectType),
}

impl NamedType {
    pub fn name(&self) -> &str {
        match self {
            NamedType::Scalar(t) => &t.name,
            NamedType::Object(t) => &t.name,
            NamedType::Interface(t) => &t.name,
            NamedType::Union(t) => &t.name,
            NamedType::Enum(t) => &t.name,
            NamedType::InputObject(t) => &t.name,
        }
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            NamedType::Scalar(_) => TypeKind::Scalar,
            NamedType::Object(_) => TypeKind::Object,
            NamedType::Interface(_) => TypeKind::Interface,
            NamedType::Union(_) => TypeKind::Union,
            NamedType::Enum(_) => TypeKind::Enum,
            NamedType::InputObject(_) => TypeKind::InputObject,
        }
    }
}

/// Names of the root operation types.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootTypes {
    pub query: Option<String>,
    pub mutation: Option<String>,
    pub subscription: Option<String>,
}

/// A fully resolved schema.
#[derive(Debug, Clone)]
pub struct SchemaModel {
    types: Vec<NamedType>,
    index: HashMap<String, usize>,
    roots: RootTypes,
}

impl SchemaModel {
    /// Builds a model and checks that every referenced name is declared.
    ///
    /// Built-in scalars resolve without a declaration. Fails on the first
    /// duplicate or unresolved name, in declaration order.
    pub fn new(types: Vec<NamedType>, roots: RootTypes) -> Result<Self, SchemaError> {
        let mut index = HashMap::with_capacity(types.len());
        for (position, ty) in types.iter().enumerate() {
            if index.insert(ty.name().to_string(), position).is_some() {
                return Err(SchemaError::DuplicateType(ty.name().to_string()));
            }
        }

        let model = SchemaModel {
            types,
            index,
            roots,
        };
        model.resolve_references()?;
        Ok(model)
    }

    fn resolve_references(&self) -> Result<(), SchemaError> {
        for ty in &self.types {
            match ty {
                NamedType::Scalar(_) | NamedType::Enum(_) => {}
                NamedType::Object(object) => {
                    self.resolve_fields(&object.fields)?;
                    self.resolve_names(&object.interfaces)?;
                }
                NamedType::Interface(interface) => {
                    self.resolve_fields(&interface.fields)?;
                    self.resolve_names(&interface.possible_types)?;
                }
                NamedType::Union(union) => self.resolve_names(&union.possible_types)?,
                NamedType::InputObject(input) => {
                    for value in &input.input_fields {
                        self.resolve(value.ty.base_name())?;
                    }
                }
            }
        }

        let roots = [
            &self.roots.query,
            &self.roots.mutation,
            &self.roots.subscription,
        ];
        for name in roots.into_iter().flatten() {
            self.resolve(name)?;
        }
        Ok(())
    }

    fn resolve_fields(&self, fields: &[Field]) -> Result<(), SchemaError> {
        for field in fields {
            self.resolve(field.ty.base_name())?;
            for arg in &field.args {
                self.resolve(arg.ty.base_name())?;
            }
        }
        Ok(())
    }

    fn resolve_names(&self, names: &[String]) -> Result<(), SchemaError> {
        names.iter().try_for_each(|name| self.resolve(name))
    }

    fn resolve(&self, name: &str) -> Result<(), SchemaError> {
        if self.index.contains_key(name) || BUILTIN_SCALARS.contains(&name) {
            Ok(())
        } else {
            Err(SchemaError::UnresolvedType(name.to_string()))
        }
    }

    /// All declared types in declaration order.
    pub fn types(&self) -> &[NamedType] {
        &self.types
    }

    pub fn get(&self, name: &str) -> Option<&NamedType> {
        self.index.get(name).map(|&position| &self.types[position])
    }

    /// Kind of a resolvable name; undeclared built-in scalars are scalars.
    pub fn kind_of(&self, name: &str) -> Option<TypeKind> {
        match self.get(name) {
            Some(ty) => Some(ty.kind()),
            None if BUILTIN_SCALARS.contains(&name) => Some(TypeKind::Scalar),
            None => None,
        }
    }

    pub fn roots(&self) -> &RootTypes {
        &self.roots
    }
}
