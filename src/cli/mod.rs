//! Command-line interface for driving the fetch pipeline.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Bankfeed: open-banking account and transaction aggregation
#[derive(Parser)]
#[command(name = "bankfeed", version, about)]
pub struct Cli {
    /// Path to a config file (defaults to the .bankfeed/ hierarchy)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Exchange an authorization code for a session access token
    Exchange(CodeArgs),

    /// Exchange a code, then list the session's accounts
    Accounts(CodeArgs),

    /// Exchange a code, then fetch and merge transactions across accounts
    Transactions(CodeArgs),

    /// Exchange a code, then total the last week's transactions by category
    Aggregate(CodeArgs),
}

/// Arguments shared by every pipeline subcommand
#[derive(Args)]
pub struct CodeArgs {
    /// Authorization code returned by the provider's consent flow
    #[arg(long)]
    pub code: String,
}

/// Print an error and exit non-zero.
pub fn handle_error(err: anyhow::Error, json: bool) -> ! {
    if json {
        eprintln!(
            "{}",
            serde_json::json!({ "error": format!("{err:#}") })
        );
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1);
}
