use crate::error::{MetricsError, Result};
use crate::models::{ActivitySample, ContributionSummary, RepoSummary, UserProfile};
use chrono::{Duration, NaiveDate, Utc};
use reqwest::{Client, Response, StatusCode};
use tracing::{debug, warn};

const API_BASE_URL: &str = "https://api.github.com";
const HTML_BASE_URL: &str = "https://github.com";
const PER_PAGE: u32 = 100;
const ACTIVITY_WINDOW_DAYS: i64 = 7;

pub struct GitHubClient {
    client: Client,
    token: Option<String>,
}

impl GitHubClient {
    /// Unauthenticated calls work but hit stricter rate limits.
    pub fn new(token: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent("dmetrics/0.1.0")
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        Ok(GitHubClient { client, token })
    }

    pub fn profile_url(username: &str) -> String {
        format!("{}/{}", HTML_BASE_URL, username)
    }

    async fn make_request(&self, url: &str, what: &str) -> Result<Response> {
        debug!(url, "GitHub API request");

        let mut request = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github.v3+json");
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("token {}", token));
        }
        let response = request.send().await?;

        let rate_limit_remaining = response
            .headers()
            .get("X-RateLimit-Remaining")
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.parse::<u32>().ok());

        match response.status() {
            StatusCode::OK => Ok(response),
            StatusCode::NOT_FOUND => Err(MetricsError::NotFound(what.to_string())),
            StatusCode::UNAUTHORIZED => Err(MetricsError::AuthError(
                "GitHub rejected the access token".to_string(),
            )),
            StatusCode::FORBIDDEN if rate_limit_remaining == Some(0) => {
                let reset = response
                    .headers()
                    .get("X-RateLimit-Reset")
                    .and_then(|h| h.to_str().ok())
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                Err(MetricsError::RateLimited(format!(
                    "GitHub API rate limit exhausted (resets at epoch {})",
                    reset
                )))
            }
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(MetricsError::ApiError(format!(
                    "GitHub API returned {} for {}: {}",
                    status, what, body
                )))
            }
        }
    }

    pub async fn get_user(&self, username: &str) -> Result<UserProfile> {
        let url = format!("{}/users/{}", API_BASE_URL, username);
        let response = self.make_request(&url, username).await?;
        let profile: UserProfile = response.json().await?;
        Ok(profile)
    }

    /// List every repository owned by the user, following pagination
    /// until a short page.
    pub async fn list_repos(&self, username: &str) -> Result<Vec<RepoSummary>> {
        let mut repos = Vec::new();
        let mut page = 1u32;

        loop {
            let url = format!(
                "{}/users/{}/repos?type=owner&per_page={}&page={}",
                API_BASE_URL, username, PER_PAGE, page
            );
            let response = self.make_request(&url, username).await?;
            let batch: Vec<RepoSummary> = response.json().await?;
            let len = batch.len();
            repos.extend(batch);

            if len < PER_PAGE as usize {
                return Ok(repos);
            }
            page += 1;
        }
    }

    /// Scrape the public contribution calendar. This counts marker
    /// substrings in the HTML fragment and is best-effort telemetry:
    /// a failed fetch or unrecognized markup yields zeros, never an
    /// error, so the rest of the pipeline is unaffected.
    pub async fn contribution_summary(&self, username: &str) -> ContributionSummary {
        let url = format!("{}/users/{}/contributions", HTML_BASE_URL, username);
        let response = match self.client.get(&url).send().await {
            Ok(r) => r,
            Err(e) => {
                warn!(username, error = %e, "contribution calendar fetch failed");
                return ContributionSummary::default();
            }
        };
        if !response.status().is_success() {
            warn!(username, status = %response.status(), "contribution calendar unavailable");
            return ContributionSummary::default();
        }
        match response.text().await {
            Ok(html) => parse_contribution_calendar(&html),
            Err(e) => {
                warn!(username, error = %e, "contribution calendar body unreadable");
                ContributionSummary::default()
            }
        }
    }

    /// Trailing commit-activity window. The per-day counts are a
    /// placeholder at zero.
    /// TODO: populate from the commit search endpoint
    /// (`GET /search/commits?q=author:{user}+author-date:{day}`) once
    /// its preview status settles.
    pub fn activity_series(&self) -> Vec<ActivitySample> {
        let today = Utc::now().date_naive();
        activity_window(today)
    }
}

/// One sample per day, oldest first, ending today.
pub fn activity_window(today: NaiveDate) -> Vec<ActivitySample> {
    (0..ACTIVITY_WINDOW_DAYS)
        .rev()
        .map(|offset| ActivitySample {
            date: today - Duration::days(offset),
            commits: 0,
        })
        .collect()
}

/// Extract day cells from the contribution-calendar HTML by scanning
/// for `data-date`/`data-level` attribute pairs. The markup is
/// undocumented upstream, so this is a heuristic: days are ordered by
/// date, the total counts days with a non-zero level, and the streak is
/// the trailing run of non-zero days.
pub fn parse_contribution_calendar(html: &str) -> ContributionSummary {
    let mut days: Vec<(NaiveDate, u32)> = Vec::new();

    for cell in html.split("<td").skip(1) {
        let date = attr_value(cell, "data-date")
            .and_then(|v| NaiveDate::parse_from_str(v, "%Y-%m-%d").ok());
        let level = attr_value(cell, "data-level").and_then(|v| v.parse::<u32>().ok());
        if let (Some(date), Some(level)) = (date, level) {
            days.push((date, level));
        }
    }

    if days.is_empty() {
        return ContributionSummary::default();
    }
    days.sort_by_key(|(date, _)| *date);

    let total = days.iter().filter(|(_, level)| *level > 0).count() as u32;
    let streak = days
        .iter()
        .rev()
        .take_while(|(_, level)| *level > 0)
        .count() as u32;

    ContributionSummary { total, streak }
}

fn attr_value<'a>(fragment: &'a str, attr: &str) -> Option<&'a str> {
    let needle = format!("{}=\"", attr);
    let start = fragment.find(&needle)? + needle.len();
    let rest = &fragment[start..];
    let end = rest.find('"')?;
    Some(&rest[..end])
}
