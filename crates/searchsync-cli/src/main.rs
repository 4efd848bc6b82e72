use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use searchsync_reconcile::{Config, ReconcileOptions};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "searchsync", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding index definition files (default: config/indexes)
    #[arg(long, global = true)]
    definitions_dir: Option<PathBuf>,

    /// Fail instead of asking for missing connection settings
    #[arg(long, global = true)]
    no_prompt: bool,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Create or update search indexes to match their definition files
    ///
    /// For every index spec in the catalog, in order:
    ///
    /// - Lists the search indexes that already exist on the spec's collection
    /// - Loads the spec's JSON definition from the definitions directory
    /// - Updates the index if it exists, creates it otherwise
    ///
    /// If the existing indexes cannot be listed (for example on a server
    /// without search support) the collection is treated as having none and
    /// the run continues. A missing or malformed definition file stops the run.
    ///
    /// Index builds happen asynchronously on the server; this command does not
    /// wait for them. Use 'searchsync inspect' to check their status.
    ///
    /// Connection: MONGODB_URI and MONGODB_DB, then the config file, then an
    /// interactive prompt (unless --no-prompt).
    Sync {
        /// Only reconcile specs for these collections (comma-separated)
        #[arg(long, value_delimiter = ',')]
        only: Vec<String>,

        /// Print what would be done without changing any index
        #[arg(long)]
        dry_run: bool,

        /// Drop and recreate existing indexes instead of updating them
        #[arg(long)]
        force_recreate: bool,

        /// Read the index specs from a JSON file instead of the built-in list
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Print the definitions of the search indexes on a collection
    Inspect {
        /// Collection to inspect
        collection: String,
    },
    /// List the index specs and where their definitions are read from
    Specs {
        /// Only list specs for these collections (comma-separated)
        #[arg(long, value_delimiter = ',')]
        only: Vec<String>,

        /// Read the index specs from a JSON file instead of the built-in list
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Request an embedding for some text and print a summary
    ///
    /// Reads AZURE_OPENAI_API_KEY, AZURE_OPENAI_ENDPOINT,
    /// AZURE_OPENAI_API_VERSION and AZURE_OPENAI_EMBEDDING_DEPLOYMENT.
    Embed {
        /// Text to embed
        text: String,

        /// Print the whole vector as JSON
        #[arg(long)]
        full: bool,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Print an example config file
    Example,
    /// Create the config file with defaults if it does not exist
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match cli.definitions_dir {
        Some(dir) => Config::load_with_definitions_dir(dir)?,
        None => Config::load()?,
    };

    if let Err(e) = twyg::setup(config.logging.clone()) {
        eprintln!("Could not set up logging: {}", e);
    }

    let interactive = !cli.no_prompt;

    match cli.command {
        Commands::Sync {
            only,
            dry_run,
            force_recreate,
            catalog,
        } => {
            let catalog = commands::load_catalog(catalog.as_deref(), &only)?;
            let options = ReconcileOptions {
                dry_run,
                force_recreate,
            };
            commands::run_sync(&config, &catalog, options, interactive).await?;
        }
        Commands::Inspect { collection } => {
            commands::run_inspect(&config, &collection, interactive).await?;
        }
        Commands::Specs { only, catalog } => {
            let catalog = commands::load_catalog(catalog.as_deref(), &only)?;
            commands::show_specs(&config, &catalog);
        }
        Commands::Embed { text, full } => {
            commands::run_embed(&text, full).await?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show_config(&config),
            ConfigAction::Path => commands::config::show_path(),
            ConfigAction::Example => commands::config::show_example(),
            ConfigAction::Init => commands::config::init_config()?,
        },
    }

    Ok(())
}
