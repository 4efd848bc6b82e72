//! Search index reconciliation for searchsync.
//!
//! Compares the desired indexes of an [`IndexCatalog`] with what a MongoDB
//! deployment reports through its search-index admin commands, and creates
//! or updates indexes to match. Also hosts configuration loading and the
//! connection-setting resolution that precedes a run.
//!
//! [`IndexCatalog`]: searchsync_core::IndexCatalog

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod admin;
pub mod config;
pub mod error;
pub mod inspect;
pub mod mongo;
pub mod reconcile;
pub mod resolve;

pub use admin::IndexAdmin;
pub use config::Config;
pub use error::{SyncError, SyncResult};
pub use inspect::inspect;
pub use mongo::MongoIndexAdmin;
pub use reconcile::{Action, ReconcileOptions, Reconciler, SpecOutcome};
pub use resolve::{
    ConnectionSettings, NoPrompt, Prompter, Resolver, Source, TerminalPrompter,
};
