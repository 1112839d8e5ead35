//! Introspection result structs for serde deserialization.
//!
//! Only the parts of `__schema` the generator reads are modelled. Fields that
//! a server may send as `null` instead of omitting are all `Option` or
//! defaulted.

use serde::Deserialize;
use tracing::debug;

use super::{
    EnumType, EnumValue, Field, InputObjectType, InputValue, InterfaceType, NamedType,
    ObjectType, RootTypes, ScalarType, SchemaModel, TypeRef, UnionType,
};
use crate::error::SchemaError;

/// Either `{"data": {"__schema": ...}}` or a bare `{"__schema": ...}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Document {
    Response { data: SchemaHolder },
    Bare(SchemaHolder),
}

#[derive(Debug, Deserialize)]
struct SchemaHolder {
    #[serde(rename = "__schema")]
    schema: IntrospectionSchema,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntrospectionSchema {
    query_type: Option<RootName>,
    mutation_type: Option<RootName>,
    subscription_type: Option<RootName>,
    types: Vec<FullType>,
}

#[derive(Debug, Deserialize)]
struct RootName {
    name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
enum Kind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
    List,
    NonNull,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FullType {
    kind: Kind,
    name: String,
    description: Option<String>,
    fields: Option<Vec<IntrospectionField>>,
    input_fields: Option<Vec<IntrospectionInputValue>>,
    interfaces: Option<Vec<IntrospectionTypeRef>>,
    enum_values: Option<Vec<IntrospectionEnumValue>>,
    possible_types: Option<Vec<IntrospectionTypeRef>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntrospectionField {
    name: String,
    description: Option<String>,
    #[serde(default)]
    args: Vec<IntrospectionInputValue>,
    #[serde(rename = "type")]
    ty: IntrospectionTypeRef,
    #[serde(default)]
    is_deprecated: bool,
    deprecation_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntrospectionInputValue {
    name: String,
    description: Option<String>,
    #[serde(rename = "type")]
    ty: IntrospectionTypeRef,
    default_value: Option<String>,
    #[serde(default)]
    is_deprecated: bool,
    deprecation_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntrospectionEnumValue {
    name: String,
    description: Option<String>,
    #[serde(default)]
    is_deprecated: bool,
    deprecation_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntrospectionTypeRef {
    kind: Kind,
    name: Option<String>,
    of_type: Option<Box<IntrospectionTypeRef>>,
}

/// Parses an introspection result into a resolved [`SchemaModel`].
///
/// Meta types (`__Schema`, `__Type`, ...) are skipped. A deprecation reason
/// on a member that is not deprecated is dropped.
pub fn parse(introspection_json: &str) -> Result<SchemaModel, SchemaError> {
    let document: Document = serde_json::from_str(introspection_json)
        .map_err(|err| SchemaError::Json(err.to_string()))?;
    let schema = match document {
        Document::Response { data } => data.schema,
        Document::Bare(holder) => holder.schema,
    };

    let types = schema
        .types
        .into_iter()
        .filter(|ty| !ty.name.starts_with("__"))
        .map(convert_type)
        .collect::<Result<Vec<_>, _>>()?;
    debug!(types = types.len(), "Parsed introspection schema.");

    let roots = RootTypes {
        query: schema.query_type.map(|root| root.name),
        mutation: schema.mutation_type.map(|root| root.name),
        subscription: schema.subscription_type.map(|root| root.name),
    };
    SchemaModel::new(types, roots)
}

fn convert_type(ty: FullType) -> Result<NamedType, SchemaError> {
    let FullType {
        kind,
        name,
        description,
        ..
    } = ty;
    let converted = match kind {
        Kind::Scalar => NamedType::Scalar(ScalarType { name, description }),
        Kind::Object => NamedType::Object(ObjectType {
            name,
            description,
            fields: convert_fields(ty.fields)?,
            interfaces: convert_names(ty.interfaces)?,
        }),
        Kind::Interface => NamedType::Interface(InterfaceType {
            name,
            description,
            fields: convert_fields(ty.fields)?,
            possible_types: convert_names(ty.possible_types)?,
        }),
        Kind::Union => NamedType::Union(UnionType {
            name,
            description,
            possible_types: convert_names(ty.possible_types)?,
        }),
        Kind::Enum => NamedType::Enum(EnumType {
            name,
            description,
            enum_values: ty
                .enum_values
                .unwrap_or_default()
                .into_iter()
                .map(|value| EnumValue {
                    deprecation_reason: reason_if_deprecated(
                        value.is_deprecated,
                        value.deprecation_reason,
                    ),
                    name: value.name,
                    description: value.description,
                    is_deprecated: value.is_deprecated,
                })
                .collect(),
        }),
        Kind::InputObject => NamedType::InputObject(InputObjectType {
            name,
            description,
            input_fields: convert_input_values(ty.input_fields.unwrap_or_default())?,
        }),
        Kind::List | Kind::NonNull => {
            return Err(SchemaError::InvalidTypeRef(format!(
                "`{name}` is declared with a wrapper kind"
            )));
        }
    };
    Ok(converted)
}

fn convert_fields(fields: Option<Vec<IntrospectionField>>) -> Result<Vec<Field>, SchemaError> {
    fields
        .unwrap_or_default()
        .into_iter()
        .map(|field| {
            Ok(Field {
                ty: convert_type_ref(&field.ty)?,
                args: convert_input_values(field.args)?,
                deprecation_reason: reason_if_deprecated(
                    field.is_deprecated,
                    field.deprecation_reason,
                ),
                name: field.name,
                description: field.description,
                is_deprecated: field.is_deprecated,
            })
        })
        .collect()
}

fn convert_input_values(
    values: Vec<IntrospectionInputValue>,
) -> Result<Vec<InputValue>, SchemaError> {
    values
        .into_iter()
        .map(|value| {
            Ok(InputValue {
                ty: convert_type_ref(&value.ty)?,
                deprecation_reason: reason_if_deprecated(
                    value.is_deprecated,
                    value.deprecation_reason,
                ),
                name: value.name,
                description: value.description,
                default_value: value.default_value,
                is_deprecated: value.is_deprecated,
            })
        })
        .collect()
}

/// Names of the object types in an `interfaces` or `possibleTypes` list.
fn convert_names(refs: Option<Vec<IntrospectionTypeRef>>) -> Result<Vec<String>, SchemaError> {
    refs.unwrap_or_default()
        .into_iter()
        .map(|reference| match convert_type_ref(&reference)? {
            TypeRef::Named(name) => Ok(name),
            other => Err(SchemaError::InvalidTypeRef(format!(
                "expected a named type, got a wrapper around `{}`",
                other.base_name()
            ))),
        })
        .collect()
}

fn convert_type_ref(reference: &IntrospectionTypeRef) -> Result<TypeRef, SchemaError> {
    match reference.kind {
        Kind::NonNull => {
            let inner = wrapped(reference, "NON_NULL")?;
            if inner.kind == Kind::NonNull {
                return Err(SchemaError::InvalidTypeRef(
                    "NON_NULL wraps another NON_NULL".to_string(),
                ));
            }
            Ok(TypeRef::non_null(convert_type_ref(inner)?))
        }
        Kind::List => Ok(TypeRef::list(convert_type_ref(wrapped(reference, "LIST")?)?)),
        _ => match &reference.name {
            Some(name) => Ok(TypeRef::named(name.clone())),
            None => Err(SchemaError::InvalidTypeRef(
                "named type reference without a name".to_string(),
            )),
        },
    }
}

fn wrapped<'a>(
    reference: &'a IntrospectionTypeRef,
    kind: &str,
) -> Result<&'a IntrospectionTypeRef, SchemaError> {
    reference
        .of_type
        .as_deref()
        .ok_or_else(|| SchemaError::InvalidTypeRef(format!("{kind} without ofType")))
}

fn reason_if_deprecated(is_deprecated: bool, reason: Option<String>) -> Option<String> {
    if is_deprecated { reason } else { None }
}
