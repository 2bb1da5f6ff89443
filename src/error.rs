//! Error types for snipman

use thiserror::Error;

/// Result type alias for snipman operations
pub type Result<T> = std::result::Result<T, SnipError>;

/// Application error types
#[derive(Error, Debug)]
pub enum SnipError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snippet store is not valid: {0}")]
    StoreParse(#[from] toml::de::Error),

    #[error("could not serialize snippet store: {0}")]
    StoreWrite(#[from] toml::ser::Error),

    #[error("no snippet with id {0}")]
    SnippetNotFound(String),

    #[error("snippet title must not be empty")]
    EmptyTitle,

    #[error("{0}")]
    Usage(String),
}
