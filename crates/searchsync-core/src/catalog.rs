//! Desired index specifications.
//!
//! An [`IndexCatalog`] is built once at program start (either the compiled-in
//! list or a JSON file) and handed to the reconciler by value. Order is
//! significant: specs are reconciled strictly in catalog order.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One desired index: which collection, what it is called, and which file
/// under the definitions directory holds its definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexSpec {
    pub collection: String,
    pub name: String,
    pub definition_file: PathBuf,
}

impl IndexSpec {
    pub fn new(
        collection: impl Into<String>,
        name: impl Into<String>,
        definition_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            collection: collection.into(),
            name: name.into(),
            definition_file: definition_file.into(),
        }
    }
}

impl fmt::Display for IndexSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.collection, self.name)
    }
}

/// Ordered list of desired indexes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexCatalog {
    specs: Vec<IndexSpec>,
}

impl IndexCatalog {
    pub fn new(specs: Vec<IndexSpec>) -> Self {
        Self { specs }
    }

    /// The indexes this deployment ships with.
    pub fn builtin() -> Self {
        Self::new(vec![
            IndexSpec::new("products", "products_search", "products_search.json"),
            IndexSpec::new("products", "products_vector", "products_vector.json"),
            IndexSpec::new("reviews", "reviews_vector", "reviews_vector.json"),
        ])
    }

    /// Load a catalog from a JSON array of `{collection, name, definitionFile}`.
    ///
    /// An empty array is rejected, as are specs with a blank collection or
    /// name.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let specs: Vec<IndexSpec> =
            serde_json::from_str(&contents).map_err(|e| Error::InvalidCatalog {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        if specs.is_empty() {
            return Err(Error::InvalidCatalog {
                path: path.to_path_buf(),
                message: "catalog contains no index specs".to_string(),
            });
        }

        if let Some(bad) = specs
            .iter()
            .find(|s| s.collection.trim().is_empty() || s.name.trim().is_empty())
        {
            return Err(Error::InvalidCatalog {
                path: path.to_path_buf(),
                message: format!(
                    "spec for definition file {} has a blank collection or name",
                    bad.definition_file.display()
                ),
            });
        }

        Ok(Self::new(specs))
    }

    /// Keep only the specs whose collection is listed, preserving order.
    ///
    /// Names that match no spec are logged and otherwise ignored.
    pub fn only<S: AsRef<str>>(&self, collections: &[S]) -> Self {
        for wanted in collections {
            let wanted = wanted.as_ref();
            if !self.specs.iter().any(|s| s.collection == wanted) {
                log::warn!("No index specs for collection '{}'", wanted);
            }
        }

        let specs = self
            .specs
            .iter()
            .filter(|spec| collections.iter().any(|c| c.as_ref() == spec.collection))
            .cloned()
            .collect();

        Self::new(specs)
    }

    /// Distinct collection names, in first-seen order.
    pub fn collections(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for spec in &self.specs {
            if !seen.contains(&spec.collection.as_str()) {
                seen.push(&spec.collection);
            }
        }
        seen
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IndexSpec> {
        self.specs.iter()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl<'a> IntoIterator for &'a IndexCatalog {
    type Item = &'a IndexSpec;
    type IntoIter = std::slice::Iter<'a, IndexSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.specs.iter()
    }
}
