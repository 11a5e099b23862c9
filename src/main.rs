use clap::Parser;
use colored::*;
use dmetrics::cli::{Cli, Commands};
use dmetrics::commands;
use dmetrics::config::ConfigStore;
use dmetrics::error::Result;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("{} {}", "Error:".bold().red(), e);
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli) -> Result<()> {
    let store = ConfigStore::default_location()?;

    match cli.command {
        Commands::Stats {
            username,
            token,
            save,
        } => commands::run_stats(&store, &username, token, save).await,
        Commands::Compare {
            user1,
            user2,
            token,
        } => commands::run_compare(&store, &user1, &user2, token).await,
        Commands::Config { token, show, clear } => commands::run_config(&store, token, show, clear),
        Commands::Open { username } => commands::run_open(&username),
    }
}
