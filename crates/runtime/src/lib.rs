//! Selection-set runtime for gqlbind bindings.
//!
//! Application code declares the fields it wants by building a
//! [`SelectionSet`] over a scope marker emitted by `gqlbind-codegen`:
//!
//! ```ignore
//! let human = SelectionSet::<_, objects::Human>::new(|f| {
//!     Ok(Human { id: f.id()?, home_planet: f.home_planet()? })
//! });
//! let query = SelectionSet::<_, objects::Query>::new(move |f| {
//!     f.human("1000".to_owned(), &human.clone().nullable())
//! });
//! // Fields requested with arguments are aliased `<name>__<hash>`.
//! assert!(query.document().ends_with(r#": human(id: "1000") { id homePlanet } }"#));
//! ```
//!
//! The builder closure runs once against a recording handle to collect the
//! field requests, and once per decode against a handle bound to the
//! response object. See [`SelectionSet::new`].

mod argument;
mod error;
mod fields;
mod fragment;
mod leaf;
mod request;
mod response;
mod scope;
mod selection;

pub use argument::{ArgumentValue, Arguments, IntoArgument};
pub use error::DecodeError;
pub use fields::Fields;
pub use fragment::Case;
pub use leaf::Leaf;
pub use request::{FieldRequest, Selection};
pub use response::{GraphQLError, Request, Response, SendError, Transport};
pub use scope::{List, Nullable, Operation, OperationKind, Polymorphic, PossibleType, Scope};
pub use selection::SelectionSet;

// Re-exported so generated code only needs a dependency on this crate.
pub use serde;
pub use serde_json;
