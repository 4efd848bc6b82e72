//! Index definitions loaded from disk.
//!
//! Definitions are opaque: whatever JSON the file holds is passed through to
//! the database verbatim. The only check made here is that it parses.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::IndexSpec;
use crate::error::{Error, Result};

/// Definitions directory used when none is configured, relative to the
/// working directory.
pub const DEFAULT_DEFINITIONS_DIR: &str = "config/indexes";

/// A search index definition document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndexDefinition(Value);

impl IndexDefinition {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

/// Reads definition files from a single root directory.
#[derive(Debug, Clone)]
pub struct DefinitionStore {
    root: PathBuf,
}

impl Default for DefinitionStore {
    fn default() -> Self {
        Self::new(DEFAULT_DEFINITIONS_DIR)
    }
}

impl DefinitionStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Where the definition for `spec` is expected to live.
    pub fn path_for(&self, spec: &IndexSpec) -> PathBuf {
        self.root.join(&spec.definition_file)
    }

    /// Load and parse the definition for `spec`.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] if the file cannot be read, [`Error::InvalidDefinition`]
    /// if it is not valid JSON. Both carry the offending path.
    pub fn load(&self, spec: &IndexSpec) -> Result<IndexDefinition> {
        let path = self.path_for(spec);
        log::debug!("Loading definition for {} from {}", spec, path.display());

        let contents = std::fs::read_to_string(&path).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;

        let value: Value = serde_json::from_str(&contents)
            .map_err(|source| Error::InvalidDefinition { path, source })?;

        Ok(IndexDefinition(value))
    }
}
