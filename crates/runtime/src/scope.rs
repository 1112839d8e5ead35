//! Phantom scope markers.
//!
//! Generated code emits one zero-sized marker per object, interface and
//! union type. A [`SelectionSet`](crate::SelectionSet) carries its marker as
//! a type parameter, which is how the compiler rejects a `Human` selection
//! passed where a `Droid` one is expected.

use std::marker::PhantomData;

/// A schema type a selection can be bound to.
pub trait Scope: 'static {
    /// The schema's name for this type, as returned in `__typename`.
    const TYPE_NAME: &'static str;
}

/// Capability marker for interfaces and unions: selections over these
/// scopes may dispatch on the concrete type with
/// [`Fields::fragments`](crate::Fields::fragments).
pub trait Polymorphic: Scope {}

/// Declares that `Self` is one of the concrete types of `P`.
pub trait PossibleType<P: Polymorphic>: Scope {}

/// The kind of a root operation type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    /// Keyword that opens a document of this kind.
    pub fn keyword(&self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
            OperationKind::Subscription => "subscription",
        }
    }
}

/// A root operation type (`Query`, `Mutation`, `Subscription`).
pub trait Operation: Scope {
    const KIND: OperationKind;
}

/// Scope of a list-typed field whose elements are selected with `S`.
#[derive(Debug)]
pub struct List<S>(PhantomData<fn() -> S>);

/// Scope of a nullable field whose value is selected with `S`.
#[derive(Debug)]
pub struct Nullable<S>(PhantomData<fn() -> S>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_keywords() {
        assert_eq!(OperationKind::Query.keyword(), "query");
        assert_eq!(OperationKind::Mutation.keyword(), "mutation");
        assert_eq!(OperationKind::Subscription.keyword(), "subscription");
    }
}
