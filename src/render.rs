use crate::models::{ActivitySample, AggregatedStats, DiscordProfile, LanguageShare, RepoSummary};
use colored::*;

const BAR_WIDTH: usize = 40;
const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Bordered panel around label/value rows. Widths are computed from the
/// plain text before any color is applied, so ANSI codes never skew the
/// alignment.
fn panel(title: &str, rows: &[(String, String)], border: Color) -> String {
    let label_width = rows.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);
    let row_width = rows
        .iter()
        .map(|(_, v)| label_width + 2 + v.chars().count())
        .max()
        .unwrap_or(0)
        .max(title.chars().count() + 2);

    let mut out = String::new();
    out.push_str(&format!(
        "{}{}{}\n",
        "┌─ ".color(border),
        title.bold(),
        format!(" {}┐", "─".repeat(row_width.saturating_sub(title.chars().count() + 1))).color(border)
    ));
    for (label, value) in rows {
        let body = format!("{:<label_width$}  {}", label, value);
        let pad = row_width.saturating_sub(body.chars().count());
        out.push_str(&format!(
            "{} {}{} {}\n",
            "│".color(border),
            format!("{:<label_width$}", label).bold(),
            format!("  {}{}", value, " ".repeat(pad)),
            "│".color(border)
        ));
    }
    out.push_str(&format!(
        "{}\n",
        format!("└{}┘", "─".repeat(row_width + 2)).color(border)
    ));
    out
}

/// Profile panel: the name row is mandatory, optional fields appear
/// only when non-empty.
pub fn profile_panel(stats: &AggregatedStats) -> String {
    let profile = &stats.profile;
    let mut rows = vec![("Name".to_string(), profile.display_name().to_string())];

    let optional = [
        ("Bio", &profile.bio),
        ("Location", &profile.location),
        ("Email", &profile.email),
        ("Company", &profile.company),
        ("Blog", &profile.blog),
        ("Twitter", &profile.twitter),
    ];
    for (label, value) in optional {
        if let Some(v) = value {
            if !v.is_empty() {
                rows.push((label.to_string(), v.clone()));
            }
        }
    }
    panel("Profile", &rows, Color::Blue)
}

pub fn stats_panel(stats: &AggregatedStats) -> String {
    let rows = vec![
        ("Repositories".to_string(), stats.profile.public_repos.to_string()),
        ("Followers".to_string(), stats.profile.followers.to_string()),
        ("Following".to_string(), stats.profile.following.to_string()),
        ("Total Stars".to_string(), stats.total_stars.to_string()),
        ("Contributions".to_string(), stats.contributions.total.to_string()),
        ("Streak".to_string(), format!("{} days", stats.contributions.streak)),
    ];
    panel("Statistics", &rows, Color::Green)
}

/// Top repositories table. Empty listing renders nothing rather than an
/// empty frame.
pub fn top_repos_table(repos: &[RepoSummary]) -> String {
    if repos.is_empty() {
        return String::new();
    }

    let name_width = repos
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Repository".len());
    let lang_width = repos
        .iter()
        .map(|r| r.language.as_deref().unwrap_or("N/A").chars().count())
        .max()
        .unwrap_or(0)
        .max("Language".len());

    let mut out = String::new();
    out.push_str(&format!("{}\n", "Top Repositories".bold()));
    out.push_str(&format!(
        "{}\n",
        format!(
            "{:<name_width$}  {:>7}  {:>7}  {:<lang_width$}",
            "Repository", "Stars", "Forks", "Language"
        )
        .dimmed()
    ));
    for repo in repos {
        out.push_str(&format!(
            "{:<name_width$}  {:>7}  {:>7}  {:<lang_width$}\n",
            repo.name,
            repo.stars,
            repo.forks,
            repo.language.as_deref().unwrap_or("N/A"),
        ));
    }
    out
}

/// Horizontal bar chart of language shares. Bars scale against the
/// largest share; an empty histogram renders nothing.
pub fn language_chart(languages: &[LanguageShare]) -> String {
    if languages.is_empty() {
        return String::new();
    }

    let label_width = languages
        .iter()
        .map(|l| l.language.chars().count())
        .max()
        .unwrap_or(0);
    let max_percent = languages
        .iter()
        .map(|l| l.percent)
        .fold(f64::MIN, f64::max)
        .max(1.0);

    let mut out = String::new();
    out.push_str(&format!("{}\n", "Language Distribution (%)".bold()));
    for share in languages {
        let len = ((share.percent / max_percent) * BAR_WIDTH as f64).round() as usize;
        out.push_str(&format!(
            "{:<label_width$}  {} {:.1}%\n",
            share.language,
            "█".repeat(len.max(1)).cyan(),
            share.percent,
        ));
    }
    out
}

/// Sparkline over the trailing activity window, scaled to the highest
/// daily count. An empty series renders nothing.
pub fn activity_chart(activity: &[ActivitySample]) -> String {
    if activity.is_empty() {
        return String::new();
    }

    let max = activity.iter().map(|a| a.commits).max().unwrap_or(0);
    let spark: String = activity
        .iter()
        .map(|a| {
            if max == 0 {
                SPARK_LEVELS[0]
            } else {
                let idx = (a.commits as usize * (SPARK_LEVELS.len() - 1)) / max as usize;
                SPARK_LEVELS[idx]
            }
        })
        .collect();

    let first = activity.first().map(|a| a.date.to_string()).unwrap_or_default();
    let last = activity.last().map(|a| a.date.to_string()).unwrap_or_default();

    let mut out = String::new();
    out.push_str(&format!("{}\n", "Commit Activity".bold()));
    out.push_str(&format!("{}  {}\n", spark.yellow(), format!("(max {}/day)", max).dimmed()));
    out.push_str(&format!("{} .. {}\n", first, last));
    out
}

/// Two-column comparison over the fixed metric set.
pub fn comparison_table(a: &AggregatedStats, b: &AggregatedStats) -> String {
    let left = a.profile.login.as_str();
    let right = b.profile.login.as_str();

    let rows: Vec<(&str, String, String)> = vec![
        (
            "Repositories",
            a.profile.public_repos.to_string(),
            b.profile.public_repos.to_string(),
        ),
        (
            "Followers",
            a.profile.followers.to_string(),
            b.profile.followers.to_string(),
        ),
        (
            "Following",
            a.profile.following.to_string(),
            b.profile.following.to_string(),
        ),
        ("Stars", a.total_stars.to_string(), b.total_stars.to_string()),
        (
            "Contributions",
            a.contributions.total.to_string(),
            b.contributions.total.to_string(),
        ),
        (
            "Streak",
            a.contributions.streak.to_string(),
            b.contributions.streak.to_string(),
        ),
    ];

    let metric_width = rows.iter().map(|(m, _, _)| m.len()).max().unwrap_or(0);
    let left_width = rows
        .iter()
        .map(|(_, v, _)| v.chars().count())
        .max()
        .unwrap_or(0)
        .max(left.chars().count());
    let right_width = rows
        .iter()
        .map(|(_, _, v)| v.chars().count())
        .max()
        .unwrap_or(0)
        .max(right.chars().count());

    let mut out = String::new();
    out.push_str(&format!("{}\n", "Comparison".bold()));
    out.push_str(&format!(
        "{}\n",
        format!(
            "{:<metric_width$}  {:>left_width$}  {:>right_width$}",
            "Metric", left, right
        )
        .dimmed()
    ));
    for (metric, lhs, rhs) in rows {
        out.push_str(&format!(
            "{:<metric_width$}  {:>left_width$}  {:>right_width$}\n",
            metric, lhs, rhs
        ));
    }
    out
}

pub fn discord_panel(profile: &DiscordProfile) -> String {
    let mut rows = vec![
        ("Username".to_string(), profile.username.clone()),
        ("User ID".to_string(), profile.id.to_string()),
        (
            "Account Created".to_string(),
            profile.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        ),
        ("Found In".to_string(), profile.guild.clone()),
    ];
    let roles = if profile.roles.is_empty() {
        "No roles".to_string()
    } else {
        profile.roles.join(", ")
    };
    rows.push(("Roles".to_string(), roles));
    if let Some(url) = &profile.avatar_url {
        rows.push(("Avatar".to_string(), url.clone()));
    }
    panel("User Information", &rows, Color::Blue)
}

/// Full report for a single user: panels first, then the optional
/// table and charts.
pub fn full_report(stats: &AggregatedStats) -> String {
    let mut out = String::new();
    out.push_str(&profile_panel(stats));
    out.push('\n');
    out.push_str(&stats_panel(stats));

    let repos = top_repos_table(&stats.top_repos);
    if !repos.is_empty() {
        out.push('\n');
        out.push_str(&repos);
    }
    let langs = language_chart(&stats.languages);
    if !langs.is_empty() {
        out.push('\n');
        out.push_str(&langs);
    }
    let activity = activity_chart(&stats.activity);
    if !activity.is_empty() {
        out.push('\n');
        out.push_str(&activity);
    }
    out
}
