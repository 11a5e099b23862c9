use chrono::{TimeZone, Utc};
use dmetrics::models::{ContributionSummary, RepoSummary, UserProfile};

#[allow(dead_code)]
pub fn make_repo(name: &str, stars: u32, language: Option<&str>) -> RepoSummary {
    RepoSummary {
        name: name.to_string(),
        stars,
        forks: stars / 2,
        language: language.map(|l| l.to_string()),
        description: None,
    }
}

#[allow(dead_code)]
pub fn make_profile(login: &str) -> UserProfile {
    UserProfile {
        login: login.to_string(),
        name: None,
        bio: None,
        location: None,
        email: None,
        company: None,
        blog: None,
        twitter: None,
        created_at: Utc.with_ymd_and_hms(2020, 1, 15, 12, 0, 0).unwrap(),
        followers: 10,
        following: 5,
        public_repos: 3,
    }
}

#[allow(dead_code)]
pub fn make_contributions(total: u32, streak: u32) -> ContributionSummary {
    ContributionSummary { total, streak }
}
