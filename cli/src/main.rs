mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{handle_ask, handle_chunk, handle_stats, Cli, Commands};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Chunk { output, pretty } => {
            handle_chunk(&config, output, pretty).await?;
        }
        Commands::Ask { query, top } => {
            handle_ask(&config, &query, top).await?;
        }
        Commands::Stats => {
            handle_stats(&config).await?;
        }
    }

    Ok(())
}
