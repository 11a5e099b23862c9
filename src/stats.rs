use crate::models::{
    ActivitySample, AggregatedStats, ContributionSummary, LanguageShare, RepoSummary, UserProfile,
};
use std::collections::HashMap;

/// How many repositories the top-repositories table shows.
pub const TOP_REPOS: usize = 5;

/// Sum of star counts across a repository listing.
pub fn total_stars(repos: &[RepoSummary]) -> u64 {
    repos.iter().map(|r| u64::from(r.stars)).sum()
}

/// At most `k` repositories sorted by stars descending. The sort is
/// stable, so repositories with equal star counts keep their listing
/// order.
pub fn top_repos(repos: &[RepoSummary], k: usize) -> Vec<RepoSummary> {
    let mut sorted: Vec<RepoSummary> = repos.to_vec();
    sorted.sort_by(|a, b| b.stars.cmp(&a.stars));
    sorted.truncate(k);
    sorted
}

/// Language histogram as percentages of the repositories with a detected
/// primary language. Repositories without one are excluded from both the
/// numerator and the denominator, so the shares sum to 100 whenever at
/// least one language is known. Ordered by share descending, then name,
/// for deterministic output.
pub fn language_breakdown(repos: &[RepoSummary]) -> Vec<LanguageShare> {
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for repo in repos {
        if let Some(lang) = repo.language.as_deref() {
            *counts.entry(lang).or_insert(0) += 1;
        }
    }

    let known: u32 = counts.values().sum();
    if known == 0 {
        return Vec::new();
    }

    let mut shares: Vec<LanguageShare> = counts
        .into_iter()
        .map(|(language, count)| LanguageShare {
            language: language.to_string(),
            percent: f64::from(count) * 100.0 / f64::from(known),
        })
        .collect();

    shares.sort_by(|a, b| {
        b.percent
            .partial_cmp(&a.percent)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.language.cmp(&b.language))
    });
    shares
}

/// Assemble the flattened record handed to the presenter. Pure: every
/// derived field is computed from the arguments alone.
pub fn aggregate(
    profile: UserProfile,
    repos: &[RepoSummary],
    contributions: ContributionSummary,
    activity: Vec<ActivitySample>,
) -> AggregatedStats {
    AggregatedStats {
        total_stars: total_stars(repos),
        languages: language_breakdown(repos),
        top_repos: top_repos(repos, TOP_REPOS),
        contributions,
        activity,
        profile,
    }
}
