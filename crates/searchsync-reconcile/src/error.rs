//! Error types for reconciliation.

use thiserror::Error;

/// Errors that can occur while resolving settings or talking to the
/// index-admin API.
#[derive(Debug, Error)]
pub enum SyncError {
    /// A required setting was found in no source.
    #[error("{name} is not set (set {env_var} or run interactively)")]
    MissingSetting { name: String, env_var: String },

    /// Reading an answer from the prompt failed.
    #[error("prompt failed: {0}")]
    Prompt(#[from] std::io::Error),

    /// A definition could not be loaded.
    #[error(transparent)]
    Definition(#[from] searchsync_core::Error),

    /// A definition could not be converted into a BSON document.
    #[error("definition for {index} is not a document: {message}")]
    Conversion { index: String, message: String },

    /// An error propagated from the MongoDB driver.
    #[error("database error: {0}")]
    Driver(#[from] mongodb::error::Error),

    /// The server rejected or failed an admin command.
    #[error("admin command failed on {collection}: {message}")]
    Admin { collection: String, message: String },
}

/// Convenience alias for reconciliation results.
pub type SyncResult<T> = std::result::Result<T, SyncError>;
