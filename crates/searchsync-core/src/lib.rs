//! Core model for searchsync.
//!
//! This crate defines the desired-state side of reconciliation: the
//! [`IndexSpec`] tuples naming which search indexes should exist, the
//! [`IndexCatalog`] that orders them, and the [`DefinitionStore`] that loads
//! each index's JSON definition from disk.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod catalog;
pub mod definition;
pub mod error;

pub use catalog::{IndexCatalog, IndexSpec};
pub use definition::{DefinitionStore, IndexDefinition, DEFAULT_DEFINITIONS_DIR};
pub use error::{Error, Result};
