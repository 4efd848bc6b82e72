use anyhow::{Context, Result};

use searchsync_core::{DefinitionStore, IndexCatalog};
use searchsync_reconcile::{Config, MongoIndexAdmin, ReconcileOptions, Reconciler};

pub async fn run_sync(
    config: &Config,
    catalog: &IndexCatalog,
    options: ReconcileOptions,
    interactive: bool,
) -> Result<()> {
    log::info!("Starting search index sync");

    if catalog.is_empty() {
        println!("No index specs selected; nothing to do.");
        return Ok(());
    }

    let settings = super::connection_settings(config, interactive)?;
    let admin = MongoIndexAdmin::connect(&settings.uri, &settings.database)
        .await
        .context("Failed to connect to MongoDB")?;

    println!(
        "Reconciling {} index specs in database '{}'{}",
        catalog.len(),
        admin.database_name(),
        if options.dry_run { " (dry run)" } else { "" }
    );

    let store = DefinitionStore::new(&config.definitions_dir);
    let result = Reconciler::new(&admin, store, options)
        .run(catalog, |outcome| println!("  {}", outcome))
        .await;

    // Release the connection whether or not the run succeeded.
    admin.shutdown().await;

    let outcomes = result.context("Search index sync failed")?;

    if options.dry_run {
        println!("\nDry run complete: {} actions reported, nothing changed", outcomes.len());
    } else {
        println!("\n✓ Submitted {} index changes", outcomes.len());
        println!("Index builds continue on the server; run 'searchsync inspect <collection>' to check them");
    }

    Ok(())
}
