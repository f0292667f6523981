//! Bankfeed CLI entry point.

use clap::Parser;

use bankfeed::cli::{self, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = cli::commands::pipeline::execute(cli).await {
        cli::handle_error(err, json);
    }
}
