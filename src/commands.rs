use crate::config::{Config, ConfigStore};
use crate::discord::DiscordClient;
use crate::error::{MetricsError, Result};
use crate::github::GitHubClient;
use crate::models::AggregatedStats;
use crate::{render, stats};
use colored::*;
use std::process::Command;
use tracing::debug;

/// Run the full fetch pipeline for one user. Fetch failures abort
/// before anything is rendered, so a failed command never prints a
/// partial report.
async fn fetch_stats(client: &GitHubClient, username: &str) -> Result<AggregatedStats> {
    let profile = client.get_user(username).await?;
    let repos = client.list_repos(username).await?;
    let contributions = client.contribution_summary(username).await;
    let activity = client.activity_series();

    debug!(username, repos = repos.len(), "fetched user data");
    Ok(stats::aggregate(profile, &repos, contributions, activity))
}

/// Persist the token when `--save` was given. Saving without a token
/// is not an error: warn and carry on with the rest of the command.
pub fn persist_token(store: &ConfigStore, token: Option<&str>, save: bool) -> Result<()> {
    if !save {
        return Ok(());
    }
    match token {
        Some(t) => {
            store.save(&Config {
                github_token: Some(t.to_string()),
            })?;
            println!("{}", "Token saved".green());
        }
        None => println!("{}", "No token given; nothing to save".yellow()),
    }
    Ok(())
}

/// Token resolution order: command-line flag (or its env fallback),
/// then the saved config file.
fn resolve_token(store: &ConfigStore, flag: Option<String>) -> Result<Option<String>> {
    if flag.is_some() {
        return Ok(flag);
    }
    Ok(store.load()?.github_token)
}

pub async fn run_stats(
    store: &ConfigStore,
    username: &str,
    token: Option<String>,
    save: bool,
) -> Result<()> {
    persist_token(store, token.as_deref(), save)?;

    let token = resolve_token(store, token)?;
    let client = GitHubClient::new(token)?;

    println!(
        "\n{} - Analyzing GitHub user: {}\n",
        "🚀 dmetrics".bold().blue(),
        username.bold()
    );

    let aggregated = fetch_stats(&client, username).await?;
    print!("{}", render::full_report(&aggregated));
    Ok(())
}

pub async fn run_compare(
    store: &ConfigStore,
    user1: &str,
    user2: &str,
    token: Option<String>,
) -> Result<()> {
    let token = resolve_token(store, token)?;
    let client = GitHubClient::new(token)?;

    println!(
        "\n{} - Comparing users: {} vs {}\n",
        "🚀 dmetrics".bold().blue(),
        user1.bold(),
        user2.bold()
    );

    // Sequential by design; the two pipelines share nothing.
    let first = fetch_stats(&client, user1).await?;
    let second = fetch_stats(&client, user2).await?;

    print!("{}", render::comparison_table(&first, &second));
    Ok(())
}

/// Flag priority: clear short-circuits, then show, then token-set.
pub fn run_config(
    store: &ConfigStore,
    token: Option<String>,
    show: bool,
    clear: bool,
) -> Result<()> {
    if clear {
        store.clear()?;
        println!("{}", "Configuration cleared".yellow());
        return Ok(());
    }
    if show {
        match store.load()?.github_token {
            Some(t) => println!("github_token: {}", mask_token(&t)),
            None => println!("No saved configuration"),
        }
        return Ok(());
    }
    if let Some(t) = token {
        store.save(&Config {
            github_token: Some(t),
        })?;
        println!("{}", "Token saved".green());
        return Ok(());
    }

    println!("Nothing to do; pass --token, --show or --clear");
    Ok(())
}

pub fn run_open(username: &str) -> Result<()> {
    let url = GitHubClient::profile_url(username);

    #[cfg(target_os = "macos")]
    let status = Command::new("open").arg(&url).status()?;
    #[cfg(target_os = "windows")]
    let status = Command::new("cmd").args(["/C", "start", url.as_str()]).status()?;
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let status = Command::new("xdg-open").arg(&url).status()?;

    if !status.success() {
        return Err(MetricsError::ApiError(format!(
            "Browser launcher exited with {}",
            status
        )));
    }
    println!("Opened {}", url.underline());
    Ok(())
}

pub async fn run_discord_stats(token: String, username: &str) -> Result<()> {
    let client = DiscordClient::new(token)?;
    client.login().await?;

    println!(
        "\n{} - Analyzing user: {}\n",
        "🎮 DiscoMetrics".bold().blue(),
        username.bold()
    );

    let profile = client.find_member(username).await?;
    print!("{}", render::discord_panel(&profile));
    Ok(())
}

/// Mask a token for display, keeping a short prefix. Slices on char
/// boundaries so multi-byte tokens never panic.
pub fn mask_token(token: &str) -> String {
    let count = token.chars().count();
    if count <= 8 {
        return "*".repeat(count);
    }
    let prefix: String = token.chars().take(4).collect();
    format!("{}…{}", prefix, "*".repeat(4))
}
