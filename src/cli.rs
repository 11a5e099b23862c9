use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "dmetrics")]
#[command(about = "🚀 dmetrics - GitHub analytics for the terminal")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// View GitHub user statistics and analytics
    Stats {
        /// GitHub username to analyze
        username: String,

        /// GitHub personal access token
        #[arg(long, short, env = "GITHUB_TOKEN")]
        token: Option<String>,

        /// Persist the token for future invocations
        #[arg(long)]
        save: bool,
    },

    /// Compare two GitHub users side by side
    Compare {
        user1: String,
        user2: String,

        /// GitHub personal access token
        #[arg(long, short, env = "GITHUB_TOKEN")]
        token: Option<String>,
    },

    /// Manage the saved access token
    Config {
        /// Save this token
        #[arg(long)]
        token: Option<String>,

        /// Show the saved configuration
        #[arg(long)]
        show: bool,

        /// Delete the saved configuration
        #[arg(long)]
        clear: bool,
    },

    /// Open a user's GitHub profile in the browser
    Open { username: String },
}

#[derive(Parser)]
#[command(name = "discometrics")]
#[command(about = "🎮 DiscoMetrics - Discord user analytics for the terminal")]
#[command(version = "0.1.0")]
pub struct DiscordCli {
    #[command(subcommand)]
    pub command: DiscordCommands,
}

#[derive(Subcommand)]
pub enum DiscordCommands {
    /// View Discord user statistics
    Stats {
        /// Username to look up across the bot's guilds
        username: String,
    },
}
