//! GraphQL input literals.
//!
//! Arguments are inlined into the rendered document rather than sent as
//! variables, so every argument type knows how to turn itself into a
//! literal through [`IntoArgument`].

use std::fmt::{self, Write as _};

use serde_json::Value;
use sha2::{Digest, Sha256};

/// A GraphQL input value literal.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgumentValue {
    Null,
    Boolean(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// Enum literal, rendered without quotes.
    Enum(String),
    List(Vec<ArgumentValue>),
    /// Input object literal; field order is preserved.
    Object(Vec<(String, ArgumentValue)>),
}

impl fmt::Display for ArgumentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentValue::Null => f.write_str("null"),
            ArgumentValue::Boolean(b) => write!(f, "{b}"),
            ArgumentValue::Int(n) => write!(f, "{n}"),
            ArgumentValue::Float(x) if x.is_finite() => write!(f, "{x:?}"),
            ArgumentValue::Float(_) => f.write_str("null"),
            // JSON string escaping is a valid GraphQL string literal.
            ArgumentValue::String(s) => write!(f, "{}", Value::String(s.clone())),
            ArgumentValue::Enum(name) => f.write_str(name),
            ArgumentValue::List(items) => {
                f.write_char('[')?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_char(']')
            }
            ArgumentValue::Object(fields) => {
                f.write_char('{')?;
                for (i, (name, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{name}: {value}")?;
                }
                f.write_char('}')
            }
        }
    }
}

/// Conversion into a GraphQL input literal.
///
/// Implemented for the built-in scalar types, containers, and by generated
/// code for enums and input objects.
pub trait IntoArgument {
    fn to_argument(&self) -> ArgumentValue;
}

impl IntoArgument for ArgumentValue {
    fn to_argument(&self) -> ArgumentValue {
        self.clone()
    }
}

impl IntoArgument for str {
    fn to_argument(&self) -> ArgumentValue {
        ArgumentValue::String(self.to_string())
    }
}

impl IntoArgument for String {
    fn to_argument(&self) -> ArgumentValue {
        ArgumentValue::String(self.clone())
    }
}

impl IntoArgument for bool {
    fn to_argument(&self) -> ArgumentValue {
        ArgumentValue::Boolean(*self)
    }
}

impl IntoArgument for i32 {
    fn to_argument(&self) -> ArgumentValue {
        ArgumentValue::Int(i64::from(*self))
    }
}

impl IntoArgument for i64 {
    fn to_argument(&self) -> ArgumentValue {
        ArgumentValue::Int(*self)
    }
}

impl IntoArgument for f64 {
    fn to_argument(&self) -> ArgumentValue {
        ArgumentValue::Float(*self)
    }
}

impl<T: IntoArgument> IntoArgument for Option<T> {
    fn to_argument(&self) -> ArgumentValue {
        match self {
            Some(value) => value.to_argument(),
            None => ArgumentValue::Null,
        }
    }
}

impl<T: IntoArgument> IntoArgument for Vec<T> {
    fn to_argument(&self) -> ArgumentValue {
        self.as_slice().to_argument()
    }
}

impl<T: IntoArgument> IntoArgument for [T] {
    fn to_argument(&self) -> ArgumentValue {
        ArgumentValue::List(self.iter().map(IntoArgument::to_argument).collect())
    }
}

impl<T: IntoArgument + ?Sized> IntoArgument for Box<T> {
    fn to_argument(&self) -> ArgumentValue {
        (**self).to_argument()
    }
}

impl<T: IntoArgument + ?Sized> IntoArgument for &T {
    fn to_argument(&self) -> ArgumentValue {
        (**self).to_argument()
    }
}

impl IntoArgument for Value {
    fn to_argument(&self) -> ArgumentValue {
        match self {
            Value::Null => ArgumentValue::Null,
            Value::Bool(b) => ArgumentValue::Boolean(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => ArgumentValue::Int(i),
                None => ArgumentValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => ArgumentValue::String(s.clone()),
            Value::Array(items) => {
                ArgumentValue::List(items.iter().map(IntoArgument::to_argument).collect())
            }
            Value::Object(map) => ArgumentValue::Object(
                map.iter()
                    .map(|(key, value)| (key.clone(), value.to_argument()))
                    .collect(),
            ),
        }
    }
}

/// Ordered argument list of one field request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments(Vec<(String, ArgumentValue)>);

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an argument that is always rendered.
    pub fn arg<V: IntoArgument + ?Sized>(mut self, name: &str, value: &V) -> Self {
        self.0.push((name.to_string(), value.to_argument()));
        self
    }

    /// Adds an argument that is left out of the document when `None`.
    pub fn optional<V: IntoArgument>(self, name: &str, value: &Option<V>) -> Self {
        match value {
            Some(value) => self.arg(name, value),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Turns the list into an input object literal.
    pub fn into_object(self) -> ArgumentValue {
        ArgumentValue::Object(self.0)
    }

    /// `(name: value, ...)`, or nothing for an empty list.
    pub fn render(&self) -> String {
        if self.is_empty() {
            return String::new();
        }
        let rendered = self
            .0
            .iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!("({rendered})")
    }

    /// Response key for a field requested with these arguments.
    ///
    /// Fields without arguments are not aliased. Otherwise the alias is the
    /// field name plus the first 8 hex digits of the SHA-256 of the rendered
    /// arguments, so the same field requested with different arguments
    /// lands under different keys.
    pub(crate) fn alias_for(&self, name: &str) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        let digest = Sha256::digest(self.render().as_bytes());
        let hash = hex::encode(digest);
        Some(format!("{name}__{}", &hash[..8]))
    }
}
