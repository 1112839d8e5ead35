//! The boundary with the transport collaborator.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::error::DecodeError;

/// Request body for a GraphQL-over-HTTP POST.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
}

/// An entry of the response's `errors` list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GraphQLError {
    pub message: String,
    #[serde(default)]
    pub path: Vec<Value>,
    #[serde(default)]
    pub extensions: Option<Value>,
}

/// A decoded operation result.
#[derive(Debug, Clone, PartialEq)]
pub struct Response<T> {
    pub data: Option<T>,
    pub errors: Vec<GraphQLError>,
}

/// Sends a request and hands back the parsed response payload.
///
/// This crate does not implement any transport; HTTP clients, retries and
/// timeouts live on the other side of this trait.
pub trait Transport {
    type Error;

    fn send(&self, request: &Request) -> Result<Value, Self::Error>;
}

#[derive(Debug, Error)]
pub enum SendError<E> {
    #[error("transport failed: {0}")]
    Transport(E),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
