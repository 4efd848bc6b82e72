//! Embedding error types.

use thiserror::Error;

/// Errors that can occur while requesting an embedding.
#[derive(Debug, Error)]
pub enum EmbedError {
    /// A required environment variable is unset or blank.
    #[error("{env_var} is not set")]
    MissingSetting { env_var: String },

    /// The text to embed is empty.
    #[error("cannot embed empty text")]
    EmptyInput,

    /// The endpoint answered with a non-success status.
    #[error("HTTP {status} from embeddings endpoint: {message}")]
    Http { status: u16, message: String },

    /// The response body could not be decoded.
    #[error("parse error from embeddings endpoint: {message}")]
    Parse { message: String },

    /// The response contained no embedding.
    #[error("embeddings endpoint returned no data")]
    EmptyResponse,

    /// An error propagated from `reqwest`.
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
}

/// Convenience alias for embedding results.
pub type EmbedResult<T> = std::result::Result<T, EmbedError>;
