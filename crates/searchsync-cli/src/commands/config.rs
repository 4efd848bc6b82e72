use anyhow::Result;
use searchsync_reconcile::{config, Config};

/// Show the current effective configuration.
pub fn show_config(config: &Config) {
    println!("Current Configuration");
    println!("=====================\n");

    let path = config::config_file_path();
    println!("Config file: {}", path.display());
    println!("File exists: {}\n", if path.exists() { "yes" } else { "no (using defaults)" });

    println!("Settings:");
    println!(
        "  mongodb_uri: {}",
        if config.mongodb_uri.is_some() { "<set>" } else { "<not set>" }
    );
    println!("  mongodb_db: {}", config.mongodb_db.as_deref().unwrap_or("<not set>"));
    println!("  definitions_dir: {}", config.definitions_dir.display());
    println!("  logging.level: {:?}", config.logging.level());
    println!("  logging.coloured: {}", config.logging.coloured());
    println!("  logging.output: {:?}", config.logging.output());

    println!("\nEnvironment:");
    for var in ["MONGODB_URI", "MONGODB_DB"] {
        let state = if std::env::var(var).is_ok() { "set" } else { "not set" };
        println!("  {}: {}", var, state);
    }

    println!("\nPriority: CLI args > MONGODB_* / SEARCHSYNC_* env vars > Config file > Prompt > Defaults");
}

/// Show the config file path.
pub fn show_path() {
    println!("{}", config::config_file_path().display());
}

/// Show example configuration.
pub fn show_example() {
    print!("{}", config::example_config());
}

/// Initialize config file with defaults.
pub fn init_config() -> Result<()> {
    let created = config::ensure_config_file()?;
    let config_path = config::config_file_path();

    if created {
        println!("✓ Created config file: {}", config_path.display());
        println!("\nEdit this file to configure searchsync.");
    } else {
        println!("Config file already exists: {}", config_path.display());
    }

    Ok(())
}
