//! Hamartia CLI binary.
//!
//! This binary provides command-line access to Hamartia's functionality:
//! - Analyze single characters or whole batches
//! - Ask the model for characters matching a theme
//! - Query and edit stored records

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    use cli::{
        Cli, Commands, handle_analyze, handle_batch, handle_delete, handle_find, handle_get,
        handle_list, handle_suggest, handle_update,
    };
    use hamartia::{HamartiaConfig, init_tracing, open_store, open_store_for_save};

    // Load .env before anything reads the environment
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    init_tracing(if cli.verbose { "debug" } else { "info" })?;

    let mut config = HamartiaConfig::load_with(cli.config.as_deref())?;
    if let Some(backend) = cli.store {
        config.store.backend = backend;
    }

    match cli.command {
        Commands::Analyze { name, save } => {
            let store = open_store_for_save(&config.store, save)?;
            handle_analyze(&config, store, &name).await?;
        }

        Commands::Batch(args) => {
            let store = open_store_for_save(&config.store, args.save || config.batch.save)?;
            handle_batch(&config, store, args).await?;
        }

        Commands::Suggest { theme, count } => {
            handle_suggest(&config, &theme, count).await?;
        }

        Commands::Get { name } => {
            handle_get(open_store(&config.store)?.as_ref(), &name).await?;
        }

        Commands::List => {
            handle_list(open_store(&config.store)?.as_ref()).await?;
        }

        Commands::Find { field, value } => {
            handle_find(open_store(&config.store)?.as_ref(), &field, &value).await?;
        }

        Commands::Update { name, field, value } => {
            handle_update(open_store(&config.store)?.as_ref(), &name, &field, &value).await?;
        }

        Commands::Delete { name } => {
            handle_delete(open_store(&config.store)?.as_ref(), &name).await?;
        }
    }

    Ok(())
}
