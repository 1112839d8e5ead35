use std::path::PathBuf;

use thiserror::Error;

/// A schema document could not be turned into a [`SchemaModel`](crate::SchemaModel).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("invalid introspection JSON: {0}")]
    Json(String),
    #[error("type `{0}` is referenced but never declared")]
    UnresolvedType(String),
    #[error("type `{0}` is declared more than once")]
    DuplicateType(String),
    #[error("invalid type reference: {0}")]
    InvalidTypeRef(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to read schema {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
