use anyhow::{Context, Result};

use searchsync_reconcile::{inspect, Config, MongoIndexAdmin};

pub async fn run_inspect(config: &Config, collection: &str, interactive: bool) -> Result<()> {
    let settings = super::connection_settings(config, interactive)?;
    let admin = MongoIndexAdmin::connect(&settings.uri, &settings.database)
        .await
        .context("Failed to connect to MongoDB")?;

    let result = inspect(&admin, collection).await;
    admin.shutdown().await;

    let indexes = result.with_context(|| format!("Failed to list search indexes on '{}'", collection))?;

    if indexes.is_empty() {
        println!("No search indexes on '{}'", collection);
        return Ok(());
    }

    println!("{} search indexes on '{}':\n", indexes.len(), collection);
    for index in &indexes {
        println!("{}", serde_json::to_string_pretty(index)?);
    }

    Ok(())
}
