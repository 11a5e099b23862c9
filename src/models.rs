use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// GitHub user profile as returned by the user lookup endpoint.
/// Fetched once per invocation and owned by the aggregation step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    #[serde(rename = "twitter_username")]
    pub twitter: Option<String>,
    pub created_at: DateTime<Utc>,
    pub followers: u32,
    pub following: u32,
    pub public_repos: u32,
}

impl UserProfile {
    /// Display name, falling back to the login when the profile has none.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(n) if !n.is_empty() => n,
            _ => &self.login,
        }
    }
}

/// One repository row from the repository listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoSummary {
    pub name: String,
    #[serde(rename = "stargazers_count")]
    pub stars: u32,
    #[serde(rename = "forks_count")]
    pub forks: u32,
    pub language: Option<String>,
    pub description: Option<String>,
}

/// One day of commit activity in the trailing window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivitySample {
    pub date: NaiveDate,
    pub commits: u32,
}

/// Best-effort contribution totals scraped from the public calendar HTML.
/// Not authoritative; zero when the scrape fails or the markup changes.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ContributionSummary {
    pub total: u32,
    pub streak: u32,
}

/// Percentage share of repositories written in one language.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LanguageShare {
    pub language: String,
    pub percent: f64,
}

/// The flattened per-command result record. The sole input to the
/// presenter, which performs no validation of its own: every field is
/// always populated, with empty collections standing in for "unknown".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregatedStats {
    pub profile: UserProfile,
    pub total_stars: u64,
    pub contributions: ContributionSummary,
    pub languages: Vec<LanguageShare>,
    pub top_repos: Vec<RepoSummary>,
    pub activity: Vec<ActivitySample>,
}

/// Discord member matched by the guild scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscordProfile {
    pub username: String,
    pub id: u64,
    pub created_at: DateTime<Utc>,
    pub guild: String,
    pub roles: Vec<String>,
    pub avatar_url: Option<String>,
}
