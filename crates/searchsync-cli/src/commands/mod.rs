pub mod config;
pub mod embed;
pub mod inspect;
pub mod specs;
pub mod sync;

use anyhow::{Context, Result};
use std::path::Path;

use searchsync_core::IndexCatalog;
use searchsync_reconcile::{Config, ConnectionSettings, NoPrompt, Resolver, TerminalPrompter};

pub use embed::run_embed;
pub use inspect::run_inspect;
pub use specs::show_specs;
pub use sync::run_sync;

/// Build the catalog for this run, narrowed by `--only` when given.
pub fn load_catalog(path: Option<&Path>, only: &[String]) -> Result<IndexCatalog> {
    let catalog = match path {
        Some(path) => IndexCatalog::from_file(path)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?,
        None => IndexCatalog::builtin(),
    };

    if only.is_empty() {
        Ok(catalog)
    } else {
        Ok(catalog.only(only))
    }
}

/// Resolve MongoDB connection settings, prompting on the terminal if allowed.
pub fn connection_settings(config: &Config, interactive: bool) -> Result<ConnectionSettings> {
    let settings = if interactive {
        Resolver::from_process_env(TerminalPrompter).connection(config)?
    } else {
        Resolver::from_process_env(NoPrompt).connection(config)?
    };
    Ok(settings)
}
