use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::error::DecodeError;
use crate::fields::Fields;
use crate::request::{Selection, merge_all, render_block, render_list};
use crate::response::{GraphQLError, Request, Response, SendError, Transport};
use crate::scope::{List, Nullable, Operation, Scope};

/// Label used in decode errors for the node handed to [`SelectionSet::decode`].
const ROOT: &str = "$";

type Decoder<T> = Arc<dyn Fn(&str, &Value) -> Result<T, DecodeError> + Send + Sync>;
type Placeholder<T> = Arc<dyn Fn() -> Result<T, DecodeError> + Send + Sync>;

/// The fields requested from one schema type, plus how to decode them.
///
/// `T` is the decoded result, `S` the scope marker of the schema type the
/// selection is bound to. A selection is sealed once constructed: its
/// field requests never change, and it can be cloned and decoded from any
/// number of threads.
pub struct SelectionSet<T, S> {
    selections: Vec<Selection>,
    decoder: Decoder<T>,
    placeholder: Placeholder<T>,
    scope: PhantomData<fn() -> S>,
}

impl<T, S> Clone for SelectionSet<T, S> {
    fn clone(&self) -> Self {
        SelectionSet {
            selections: self.selections.clone(),
            decoder: Arc::clone(&self.decoder),
            placeholder: Arc::clone(&self.placeholder),
            scope: PhantomData,
        }
    }
}

impl<T, S> fmt::Debug for SelectionSet<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionSet")
            .field("result", &std::any::type_name::<T>())
            .field("scope", &std::any::type_name::<S>())
            .field("selections", &render_list(&self.selections))
            .finish()
    }
}

impl<T: 'static, S: Scope> SelectionSet<T, S> {
    /// Builds a selection from a builder callback.
    ///
    /// The builder runs once right away against a recording handle: every
    /// accessor it calls registers a field and hands back a placeholder
    /// value. The recorded fields are then sealed. When a response is
    /// decoded the same builder runs against a handle bound to the response
    /// object, and accessors return the decoded values instead.
    ///
    /// The builder must therefore call the same accessors regardless of the
    /// values it gets back. Work that can fail on a placeholder (parsing a
    /// string, indexing a list) must be skipped while
    /// [`Fields::is_recording`] is true: a builder that fails while recording
    /// only requests the fields registered before the failure. Use
    /// [`SelectionSet::try_new`] to reject such builders instead.
    ///
    /// Name the scope explicitly (`SelectionSet::<_, Human>::new`) when
    /// several accessor traits are in scope; the compiler cannot pick a
    /// trait from the return type alone.
    pub fn new<F>(builder: F) -> Self
    where
        F: Fn(&mut Fields<'_, S>) -> Result<T, DecodeError> + Send + Sync + 'static,
    {
        let builder = Arc::new(builder);
        let (selections, recorded) = record(&*builder);
        if let Err(err) = recorded {
            warn!(
                scope = S::TYPE_NAME,
                error = %err,
                fields = %render_list(&selections),
                "Builder failed while recording; later fields are not requested."
            );
        }
        SelectionSet::sealed(selections, builder)
    }

    /// Like [`SelectionSet::new`], but fails when the builder returns an
    /// error while recording.
    pub fn try_new<F>(builder: F) -> Result<Self, DecodeError>
    where
        F: Fn(&mut Fields<'_, S>) -> Result<T, DecodeError> + Send + Sync + 'static,
    {
        let builder = Arc::new(builder);
        let (selections, recorded) = record(&*builder);
        recorded?;
        Ok(SelectionSet::sealed(selections, builder))
    }

    fn sealed<F>(selections: Vec<Selection>, builder: Arc<F>) -> Self
    where
        F: Fn(&mut Fields<'_, S>) -> Result<T, DecodeError> + Send + Sync + 'static,
    {
        let decode_builder = Arc::clone(&builder);
        let decoder: Decoder<T> = Arc::new(move |field, node| match node {
            Value::Object(object) => (*decode_builder)(&mut Fields::decoding(node, object)),
            Value::Null => Err(DecodeError::NullNonNullable(field.to_string())),
            other => Err(DecodeError::mismatch(field, "object", other)),
        });
        let placeholder: Placeholder<T> = Arc::new(move || (*builder)(&mut Fields::recording()));

        SelectionSet::from_parts(selections, decoder, placeholder)
    }
}

/// Runs `builder` against a recording handle and seals what it registered.
fn record<T, S, F>(builder: &F) -> (Vec<Selection>, Result<(), DecodeError>)
where
    S: Scope,
    F: Fn(&mut Fields<'_, S>) -> Result<T, DecodeError>,
{
    let mut recorder = Fields::recording();
    let recorded = builder(&mut recorder).map(drop);
    (recorder.seal(), recorded)
}

impl<T: 'static, S: 'static> SelectionSet<T, S> {
    fn from_parts(
        selections: Vec<Selection>,
        decoder: Decoder<T>,
        placeholder: Placeholder<T>,
    ) -> Self {
        SelectionSet {
            selections,
            decoder,
            placeholder,
            scope: PhantomData,
        }
    }

    /// The sealed field requests.
    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    /// The selection as GraphQL field syntax, without surrounding braces.
    pub fn render(&self) -> String {
        render_list(&self.selections)
    }

    /// Decodes a response node for this selection.
    pub fn decode(&self, node: &Value) -> Result<T, DecodeError> {
        (self.decoder)(ROOT, node)
    }

    pub(crate) fn decode_field(&self, field: &str, node: &Value) -> Result<T, DecodeError> {
        (self.decoder)(field, node)
    }

    pub(crate) fn placeholder(&self) -> Result<T, DecodeError> {
        (self.placeholder)()
    }

    /// Selects every element of a list-typed field with this selection.
    ///
    /// Element order is preserved; the first element that fails to decode
    /// fails the whole list.
    pub fn list(self) -> SelectionSet<Vec<T>, List<S>> {
        let inner = self.decoder;
        let decoder: Decoder<Vec<T>> = Arc::new(move |field, node| match node {
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(index, item)| inner(&format!("{field}[{index}]"), item))
                .collect(),
            Value::Null => Err(DecodeError::NullNonNullable(field.to_string())),
            other => Err(DecodeError::mismatch(field, "list", other)),
        });
        SelectionSet::from_parts(self.selections, decoder, Arc::new(|| Ok(Vec::new())))
    }

    /// Accepts `null` for the field, decoding it to `None` without running
    /// this selection's decoder.
    pub fn nullable(self) -> SelectionSet<Option<T>, Nullable<S>> {
        let inner = self.decoder;
        let decoder: Decoder<Option<T>> = Arc::new(move |field, node| match node {
            Value::Null => Ok(None),
            node => inner(field, node).map(Some),
        });
        SelectionSet::from_parts(self.selections, decoder, Arc::new(|| Ok(None)))
    }

    /// Transforms the decoded result.
    pub fn map<U, F>(self, f: F) -> SelectionSet<U, S>
    where
        U: 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        let inner = self.decoder;
        let decode_f = Arc::clone(&f);
        let decoder: Decoder<U> = Arc::new(move |field, node| inner(field, node).map(&*decode_f));
        let inner_placeholder = self.placeholder;
        let placeholder: Placeholder<U> = Arc::new(move || inner_placeholder().map(&*f));
        SelectionSet::from_parts(self.selections, decoder, placeholder)
    }

    /// Combines two selections over the same scope.
    ///
    /// The merged selection requests the deduplicated union of both field
    /// sets; decoding runs both decoders on the same node and combines the
    /// results.
    pub fn merge<U, V, F>(self, other: SelectionSet<U, S>, combine: F) -> SelectionSet<V, S>
    where
        U: 'static,
        V: 'static,
        F: Fn(T, U) -> V + Send + Sync + 'static,
    {
        let mut selections = self.selections;
        merge_all(&mut selections, other.selections);

        let combine = Arc::new(combine);
        let (left, right) = (self.decoder, other.decoder);
        let decode_combine = Arc::clone(&combine);
        let decoder: Decoder<V> = Arc::new(move |field, node| {
            Ok(decode_combine(left(field, node)?, right(field, node)?))
        });
        let (left, right) = (self.placeholder, other.placeholder);
        let placeholder: Placeholder<V> = Arc::new(move || Ok(combine(left()?, right()?)));

        SelectionSet::from_parts(selections, decoder, placeholder)
    }

    /// Rebinds the selection to another scope marker.
    pub(crate) fn cast<R: 'static>(self) -> SelectionSet<T, R> {
        SelectionSet::from_parts(self.selections, self.decoder, self.placeholder)
    }
}

impl<T: 'static, S: Operation> SelectionSet<T, S> {
    /// The full operation document, e.g. `query { hero { name } }`.
    pub fn document(&self) -> String {
        format!("{} {}", S::KIND.keyword(), render_block(&self.selections))
    }

    /// The full operation document with an operation name.
    pub fn document_named(&self, name: &str) -> String {
        format!("{} {name} {}", S::KIND.keyword(), render_block(&self.selections))
    }

    /// The request body the transport should send.
    pub fn request(&self) -> Request {
        Request {
            query: self.document(),
            operation_name: None,
        }
    }

    /// Decodes a complete `{"data": ..., "errors": [...]}` payload.
    ///
    /// A missing or `null` `data` entry yields `data: None`; errors reported
    /// by the server are passed through unchanged.
    pub fn decode_response(&self, payload: &Value) -> Result<Response<T>, DecodeError> {
        let Value::Object(object) = payload else {
            return Err(DecodeError::mismatch("response", "object", payload));
        };

        let errors = match object.get("errors") {
            None | Some(Value::Null) => Vec::new(),
            Some(node) => Vec::<GraphQLError>::deserialize(node)
                .map_err(|_| DecodeError::mismatch("errors", "list of errors", node))?,
        };
        let data = match object.get("data") {
            None | Some(Value::Null) => None,
            Some(node) => Some(self.decode_field("data", node)?),
        };

        Ok(Response { data, errors })
    }

    /// Sends the selection through `transport` and decodes the answer.
    pub fn send<C: Transport>(&self, transport: &C) -> Result<Response<T>, SendError<C::Error>> {
        let payload = transport
            .send(&self.request())
            .map_err(SendError::Transport)?;
        Ok(self.decode_response(&payload)?)
    }
}
