use clap::Parser;
use colored::*;
use dmetrics::cli::{DiscordCli, DiscordCommands};
use dmetrics::commands;
use dmetrics::error::{MetricsError, Result};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = DiscordCli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("{} {}", "Error:".bold().red(), e);
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: DiscordCli) -> Result<()> {
    match cli.command {
        DiscordCommands::Stats { username } => {
            let token = std::env::var("DISCORD_TOKEN")
                .map_err(|_| MetricsError::AuthError("DISCORD_TOKEN is not set".to_string()))?;
            commands::run_discord_stats(token, &username).await
        }
    }
}
