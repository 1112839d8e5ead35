use std::marker::PhantomData;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::argument::Arguments;
use crate::error::DecodeError;
use crate::fragment::Case;
use crate::leaf::Leaf;
use crate::request::{FieldRequest, Selection, merge_all, merge_selection};
use crate::scope::{Polymorphic, Scope};
use crate::selection::SelectionSet;

/// Discriminant field of polymorphic response objects.
const TYPENAME: &str = "__typename";

/// Field-accessor handle passed to a selection builder.
///
/// Generated code adds one accessor per schema field through an extension
/// trait implemented for `Fields<'_, Marker>`. The methods here are the
/// primitives those accessors delegate to.
#[derive(Debug)]
pub struct Fields<'a, S> {
    mode: Mode<'a>,
    scope: PhantomData<fn() -> S>,
}

#[derive(Debug)]
enum Mode<'a> {
    /// Collecting field requests while the selection is being built.
    Recording(Vec<Selection>),
    /// Reading values out of one response object.
    Decoding {
        node: &'a Value,
        object: &'a Map<String, Value>,
    },
}

impl<'a, S: Scope> Fields<'a, S> {
    pub(crate) fn recording() -> Self {
        Fields {
            mode: Mode::Recording(Vec::new()),
            scope: PhantomData,
        }
    }

    pub(crate) fn decoding(node: &'a Value, object: &'a Map<String, Value>) -> Self {
        Fields {
            mode: Mode::Decoding { node, object },
            scope: PhantomData,
        }
    }

    /// Ends the building phase. Consuming the handle is what makes further
    /// registration impossible.
    pub(crate) fn seal(self) -> Vec<Selection> {
        match self.mode {
            Mode::Recording(selections) => selections,
            Mode::Decoding { .. } => Vec::new(),
        }
    }

    /// Whether accessors currently record requests instead of decoding.
    pub fn is_recording(&self) -> bool {
        matches!(self.mode, Mode::Recording(_))
    }

    /// Requests a scalar or enum field.
    pub fn leaf<T: Leaf>(&mut self, name: &str, arguments: Arguments) -> Result<T, DecodeError> {
        let request = FieldRequest::with_arguments(name, arguments);
        match &mut self.mode {
            Mode::Recording(selections) => {
                merge_selection(selections, Selection::Field(request));
                Ok(T::placeholder())
            }
            Mode::Decoding { object, .. } => {
                let key = request.response_key();
                let node = object
                    .get(key)
                    .ok_or_else(|| DecodeError::MissingField(key.to_string()))?;
                decode_leaf(key, node)
            }
        }
    }

    /// Requests an object, interface or union field with a nested selection.
    ///
    /// The scope of `selection` encodes the field's wrapping (`List`,
    /// `Nullable`); generated accessors pin it to the field's schema type.
    pub fn composite<T: 'static, C: 'static>(
        &mut self,
        name: &str,
        arguments: Arguments,
        selection: &SelectionSet<T, C>,
    ) -> Result<T, DecodeError> {
        let mut request = FieldRequest::with_arguments(name, arguments);
        match &mut self.mode {
            Mode::Recording(selections) => {
                request.selections = selection.selections().to_vec();
                merge_selection(selections, Selection::Field(request));
                selection.placeholder()
            }
            Mode::Decoding { object, .. } => {
                let key = request.response_key();
                let node = object
                    .get(key)
                    .ok_or_else(|| DecodeError::MissingField(key.to_string()))?;
                selection.decode_field(key, node)
            }
        }
    }

    /// Splices another selection over the same scope into this one.
    pub fn include<T: 'static>(
        &mut self,
        selection: &SelectionSet<T, S>,
    ) -> Result<T, DecodeError> {
        match &mut self.mode {
            Mode::Recording(selections) => {
                merge_all(selections, selection.selections().to_vec());
                selection.placeholder()
            }
            Mode::Decoding { node, .. } => selection.decode_field(S::TYPE_NAME, *node),
        }
    }

    /// Requests `__typename`.
    pub fn typename(&mut self) -> Result<String, DecodeError> {
        self.leaf(TYPENAME, Arguments::new())
    }
}

impl<S: Polymorphic> Fields<'_, S> {
    /// Dispatches on the concrete type of an interface or union node.
    ///
    /// Recording registers `__typename` plus one inline fragment per case.
    /// Decoding reads `__typename` and runs the case registered for that
    /// type; a type without a case fails with
    /// [`DecodeError::UnknownVariant`].
    pub fn fragments<T: 'static>(&mut self, cases: Vec<Case<T, S>>) -> Result<T, DecodeError> {
        let typename = self.typename()?;
        match &mut self.mode {
            Mode::Recording(selections) => {
                for case in &cases {
                    merge_selection(
                        selections,
                        Selection::Fragment {
                            type_condition: case.type_name().to_string(),
                            selections: case.selection().selections().to_vec(),
                        },
                    );
                }
                match cases.first() {
                    Some(case) => case.selection().placeholder(),
                    None => Err(DecodeError::UnknownVariant(String::new())),
                }
            }
            Mode::Decoding { node, .. } => {
                let case = cases
                    .iter()
                    .find(|case| case.type_name() == typename)
                    .ok_or_else(|| DecodeError::UnknownVariant(typename.clone()))?;
                case.selection().decode_field(case.type_name(), *node)
            }
        }
    }
}

fn decode_leaf<T: Leaf>(key: &str, node: &Value) -> Result<T, DecodeError> {
    if node.is_null() && !T::NULLABLE {
        return Err(DecodeError::NullNonNullable(key.to_string()));
    }
    T::deserialize(node).map_err(|_| DecodeError::mismatch(key, std::any::type_name::<T>(), node))
}
