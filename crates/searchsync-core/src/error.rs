use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid index definition in {}: {source}", .path.display())]
    InvalidDefinition {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid index catalog in {}: {message}", .path.display())]
    InvalidCatalog { path: PathBuf, message: String },
}

impl Error {
    /// The file the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Io { path, .. }
            | Self::InvalidDefinition { path, .. }
            | Self::InvalidCatalog { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
