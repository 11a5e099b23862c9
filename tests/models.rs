use dmetrics::models::{RepoSummary, UserProfile};

#[test]
fn test_user_profile_deserialization() {
    // Representative subset of the GitHub user endpoint payload.
    let json = r#"{
        "login": "octocat",
        "name": "The Octocat",
        "bio": null,
        "location": "San Francisco",
        "email": null,
        "company": "@github",
        "blog": "https://github.blog",
        "twitter_username": null,
        "created_at": "2011-01-25T18:44:36Z",
        "followers": 4000,
        "following": 9,
        "public_repos": 8,
        "html_url": "https://github.com/octocat"
    }"#;

    let profile: UserProfile = serde_json::from_str(json).expect("deserialization failed");
    assert_eq!(profile.login, "octocat");
    assert_eq!(profile.display_name(), "The Octocat");
    assert_eq!(profile.location.as_deref(), Some("San Francisco"));
    assert!(profile.bio.is_none());
    assert_eq!(profile.followers, 4000);
    assert_eq!(profile.public_repos, 8);
}

#[test]
fn test_display_name_falls_back_to_login() {
    let json = r#"{
        "login": "ghost",
        "name": null,
        "created_at": "2018-03-07T00:00:00Z",
        "followers": 0,
        "following": 0,
        "public_repos": 0
    }"#;

    let profile: UserProfile = serde_json::from_str(json).expect("deserialization failed");
    assert_eq!(profile.display_name(), "ghost");

    let empty_name = r#"{
        "login": "ghost",
        "name": "",
        "created_at": "2018-03-07T00:00:00Z",
        "followers": 0,
        "following": 0,
        "public_repos": 0
    }"#;
    let profile: UserProfile = serde_json::from_str(empty_name).expect("deserialization failed");
    assert_eq!(profile.display_name(), "ghost");
}

#[test]
fn test_repo_summary_deserialization() {
    let json = r#"{
        "name": "hello-world",
        "stargazers_count": 1500,
        "forks_count": 300,
        "language": "Rust",
        "description": "A greeting",
        "private": false
    }"#;

    let repo: RepoSummary = serde_json::from_str(json).expect("deserialization failed");
    assert_eq!(repo.name, "hello-world");
    assert_eq!(repo.stars, 1500);
    assert_eq!(repo.forks, 300);
    assert_eq!(repo.language.as_deref(), Some("Rust"));
}

#[test]
fn test_repo_summary_null_language() {
    let json = r#"{
        "name": "dotfiles",
        "stargazers_count": 2,
        "forks_count": 0,
        "language": null,
        "description": null
    }"#;

    let repo: RepoSummary = serde_json::from_str(json).expect("deserialization failed");
    assert!(repo.language.is_none());
    assert!(repo.description.is_none());
}
