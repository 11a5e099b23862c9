use crate::error::{MetricsError, Result};
use crate::models::DiscordProfile;
use chrono::{DateTime, Utc};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};

const API_BASE_URL: &str = "https://discord.com/api/v10";
const CDN_BASE_URL: &str = "https://cdn.discordapp.com";
const MEMBERS_PER_PAGE: u32 = 1000;

/// Milliseconds between the Unix epoch and Discord's snowflake epoch
/// (2015-01-01T00:00:00Z).
const DISCORD_EPOCH_MS: u64 = 1_420_070_400_000;

#[derive(Debug, Deserialize)]
struct Guild {
    id: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct Member {
    user: MemberUser,
    #[serde(default)]
    roles: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct MemberUser {
    id: String,
    username: String,
    global_name: Option<String>,
    avatar: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Role {
    id: String,
    name: String,
}

#[derive(Debug)]
pub struct DiscordClient {
    client: Client,
    token: String,
}

impl DiscordClient {
    pub fn new(token: String) -> Result<Self> {
        if token.is_empty() {
            return Err(MetricsError::AuthError(
                "DISCORD_TOKEN is not set".to_string(),
            ));
        }
        let client = Client::builder()
            .user_agent("discometrics/0.1.0")
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        Ok(DiscordClient { client, token })
    }

    async fn make_request(&self, url: &str, what: &str) -> Result<Response> {
        debug!(url, "Discord API request");

        let response = self
            .client
            .get(url)
            .header("Authorization", format!("Bot {}", self.token))
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(response),
            StatusCode::UNAUTHORIZED => Err(MetricsError::AuthError(
                "Discord rejected the bot token".to_string(),
            )),
            StatusCode::FORBIDDEN => Err(MetricsError::AuthError(format!(
                "Bot lacks access to {}",
                what
            ))),
            StatusCode::NOT_FOUND => Err(MetricsError::NotFound(what.to_string())),
            StatusCode::TOO_MANY_REQUESTS => Err(MetricsError::RateLimited(
                "Discord API rate limit exhausted".to_string(),
            )),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(MetricsError::ApiError(format!(
                    "Discord API returned {} for {}: {}",
                    status, what, body
                )))
            }
        }
    }

    /// Validates the bot token before any guild scanning.
    pub async fn login(&self) -> Result<()> {
        let url = format!("{}/users/@me", API_BASE_URL);
        self.make_request(&url, "bot identity").await?;
        Ok(())
    }

    async fn list_guilds(&self) -> Result<Vec<Guild>> {
        let url = format!("{}/users/@me/guilds", API_BASE_URL);
        let response = self.make_request(&url, "guild list").await?;
        Ok(response.json().await?)
    }

    async fn guild_members(&self, guild_id: &str) -> Result<Vec<Member>> {
        let mut members = Vec::new();
        let mut after = "0".to_string();

        loop {
            let url = format!(
                "{}/guilds/{}/members?limit={}&after={}",
                API_BASE_URL, guild_id, MEMBERS_PER_PAGE, after
            );
            let response = self.make_request(&url, "guild members").await?;
            let batch: Vec<Member> = response.json().await?;
            let len = batch.len();
            if let Some(last) = batch.last() {
                after = last.user.id.clone();
            }
            members.extend(batch);

            if len < MEMBERS_PER_PAGE as usize {
                return Ok(members);
            }
        }
    }

    async fn guild_roles(&self, guild_id: &str) -> Result<Vec<Role>> {
        let url = format!("{}/guilds/{}/roles", API_BASE_URL, guild_id);
        let response = self.make_request(&url, "guild roles").await?;
        Ok(response.json().await?)
    }

    /// Scan every guild the bot belongs to for a member whose username
    /// (or display name) matches exactly. First match wins; when several
    /// members share the name, which one is returned depends on the
    /// enumeration order of guilds and members and is not guaranteed.
    pub async fn find_member(&self, username: &str) -> Result<DiscordProfile> {
        let guilds = self.list_guilds().await?;
        debug!(guilds = guilds.len(), "scanning guilds");

        for guild in &guilds {
            let members = match self.guild_members(&guild.id).await {
                Ok(m) => m,
                Err(e) => {
                    warn!(guild = %guild.name, error = %e, "skipping unreadable guild");
                    continue;
                }
            };

            for member in members {
                let display = member.user.global_name.as_deref();
                if member.user.username == username || display == Some(username) {
                    return self.resolve_member(guild, member).await;
                }
            }
        }

        Err(MetricsError::NotFound(username.to_string()))
    }

    async fn resolve_member(&self, guild: &Guild, member: Member) -> Result<DiscordProfile> {
        let id: u64 = member
            .user
            .id
            .parse()
            .map_err(|_| MetricsError::ApiError(format!("Bad snowflake: {}", member.user.id)))?;

        let roles = self.guild_roles(&guild.id).await?;
        let role_names: Vec<String> = roles
            .into_iter()
            .filter(|r| member.roles.contains(&r.id) && r.name != "@everyone")
            .map(|r| r.name)
            .collect();

        let avatar_url = member
            .user
            .avatar
            .as_ref()
            .map(|hash| format!("{}/avatars/{}/{}.png", CDN_BASE_URL, member.user.id, hash));

        Ok(DiscordProfile {
            username: member.user.username,
            id,
            created_at: snowflake_timestamp(id),
            guild: guild.name.clone(),
            roles: role_names,
            avatar_url,
        })
    }
}

/// Account creation time encoded in the upper bits of the snowflake.
pub fn snowflake_timestamp(id: u64) -> DateTime<Utc> {
    let ms = (id >> 22) + DISCORD_EPOCH_MS;
    DateTime::from_timestamp_millis(ms as i64).unwrap_or_else(Utc::now)
}
