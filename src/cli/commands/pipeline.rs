//! Pipeline subcommands: each runs the prefix of the fetch pipeline it
//! needs (exchange -> accounts -> transactions -> aggregate) in one process.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use uuid::Uuid;

use crate::cli::{output, Cli, Commands};
use crate::domain::models::Config;
use crate::domain::ports::{CacheStore, DataGateway};
use crate::infrastructure::cache::InMemoryCacheStore;
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::gateway::HttpDataGateway;
use crate::infrastructure::logging;
use crate::services::FetchOrchestrator;

/// Dispatch the parsed CLI invocation.
pub async fn execute(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    logging::init(&config.logging)?;

    let gateway = HttpDataGateway::new(&config.provider, &config.http)
        .context("Failed to build HTTP gateway")?;
    let store = InMemoryCacheStore::new();
    let orchestrator = FetchOrchestrator::new(
        Arc::new(gateway) as Arc<dyn DataGateway>,
        Arc::new(store) as Arc<dyn CacheStore>,
        config.provider.clone(),
    );

    // The cache is process-local, so each run gets a fresh session key.
    let session_key = Uuid::new_v4().to_string();
    info!(%session_key, "starting pipeline run");

    match cli.command {
        Commands::Exchange(args) => {
            orchestrator.exchange_code(&session_key, &args.code).await?;
            if cli.json {
                println!("{}", serde_json::json!({ "exchanged": true }));
            } else {
                println!("Authorization code exchanged; session is ready.");
            }
        }
        Commands::Accounts(args) => {
            orchestrator.exchange_code(&session_key, &args.code).await?;
            let accounts = orchestrator.fetch_accounts(&session_key).await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&accounts)?);
            } else if accounts.is_empty() {
                println!("No accounts found.");
            } else {
                println!("{}", output::format_accounts(&accounts));
            }
        }
        Commands::Transactions(args) => {
            orchestrator.exchange_code(&session_key, &args.code).await?;
            let transactions = orchestrator.fetch_transactions(&session_key).await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&transactions)?);
            } else if transactions.is_empty() {
                println!("No transactions found.");
            } else {
                println!("{}", output::format_transactions(&transactions));
            }
        }
        Commands::Aggregate(args) => {
            orchestrator.exchange_code(&session_key, &args.code).await?;
            let totals = orchestrator.aggregate(&session_key).await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&totals)?);
            } else if totals.is_empty() {
                println!("No transactions in the last 7 days.");
            } else {
                println!("{}", output::format_totals(&totals));
            }
        }
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
}
