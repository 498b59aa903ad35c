//! Errors raised while ingesting a caller graph or its options.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("edge {from} -> {to} points at a vertex the navigator never reported")]
    MissingEndpoint { from: String, to: String },

    #[error("vertex {vertex} was reported more than once")]
    DuplicateVertex { vertex: String },

    #[error("vertex {vertex} has a negative or non-finite size")]
    InvalidSize { vertex: String },

    #[error("invalid layout option `{name}`: {value}")]
    InvalidOption { name: &'static str, value: String },

    #[error("invalid layout options: {0}")]
    Config(#[from] serde_json::Error),

    #[error("failed to serialize layout: {0}")]
    Dump(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
