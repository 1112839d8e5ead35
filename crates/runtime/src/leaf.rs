use serde::de::DeserializeOwned;
use serde_json::Value;

/// A scalar or enum value that can be read straight out of a response node.
///
/// While a builder runs in recording mode there is no response to read
/// from, so every leaf also has a placeholder value handed back instead.
pub trait Leaf: DeserializeOwned {
    /// Whether `null` is a valid response value for this type.
    const NULLABLE: bool = false;

    fn placeholder() -> Self;
}

impl Leaf for String {
    fn placeholder() -> Self {
        String::new()
    }
}

impl Leaf for bool {
    fn placeholder() -> Self {
        false
    }
}

impl Leaf for i32 {
    fn placeholder() -> Self {
        0
    }
}

impl Leaf for i64 {
    fn placeholder() -> Self {
        0
    }
}

impl Leaf for f64 {
    fn placeholder() -> Self {
        0.0
    }
}

/// Untyped custom scalar. A non-null field still rejects `null`; use
/// `Option<Value>` for nullable ones.
impl Leaf for Value {
    fn placeholder() -> Self {
        Value::Null
    }
}

impl<T: Leaf> Leaf for Option<T> {
    const NULLABLE: bool = true;

    fn placeholder() -> Self {
        None
    }
}

impl<T: Leaf> Leaf for Vec<T> {
    fn placeholder() -> Self {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nullability() {
        assert!(!<String as Leaf>::NULLABLE);
        assert!(!<Vec<Option<String>> as Leaf>::NULLABLE);
        assert!(<Option<Vec<String>> as Leaf>::NULLABLE);
        assert!(!<Value as Leaf>::NULLABLE);
        assert!(<Option<Value> as Leaf>::NULLABLE);
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(<Option<i32> as Leaf>::placeholder(), None);
        assert!(<Vec<String> as Leaf>::placeholder().is_empty());
        assert_eq!(<String as Leaf>::placeholder(), "");
    }
}
