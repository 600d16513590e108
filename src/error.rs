// src/error.rs
use tagstream_schema::SchemaError;
use tagstream_stream::StreamError;
use thiserror::Error;

/// Top-level error for the `tagstream` binary.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("Markup error: {0}")]
    Stream(#[from] StreamError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown element: <{0}>")]
    UnknownElement(String),
}
