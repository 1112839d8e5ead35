use serde_json::Value;
use thiserror::Error;

/// Failure to decode a response tree into the selection's result.
///
/// Any error aborts the whole decode call; there is no partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The response object has no entry for a requested field.
    #[error("missing field `{0}` in response")]
    MissingField(String),
    /// A node has a different shape than the declared type.
    #[error("type mismatch at `{field}`: expected {expected}, got {got}")]
    TypeMismatch {
        field: String,
        expected: String,
        got: String,
    },
    /// A polymorphic node names a concrete type no fragment was registered for.
    #[error("no fragment registered for concrete type `{0}`")]
    UnknownVariant(String),
    /// A field declared non-null came back as `null`.
    #[error("field `{0}` is non-nullable but the response contains null")]
    NullNonNullable(String),
}

impl DecodeError {
    pub(crate) fn mismatch(field: &str, expected: impl Into<String>, got: &Value) -> Self {
        DecodeError::TypeMismatch {
            field: field.to_string(),
            expected: expected.into(),
            got: kind_of(got).to_string(),
        }
    }
}

/// Short name of a JSON node's shape, used in mismatch messages.
pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mismatch_reports_node_kind() {
        let err = DecodeError::mismatch("name", "String", &json!(42));
        assert_eq!(
            err.to_string(),
            "type mismatch at `name`: expected String, got number"
        );
    }

    #[test]
    fn test_error_messages_name_the_field() {
        assert_eq!(
            DecodeError::MissingField("hero".into()).to_string(),
            "missing field `hero` in response"
        );
        assert_eq!(
            DecodeError::UnknownVariant("Starship".into()).to_string(),
            "no fragment registered for concrete type `Starship`"
        );
    }
}
