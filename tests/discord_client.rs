use chrono::{Datelike, TimeZone, Utc};
use dmetrics::discord::{snowflake_timestamp, DiscordClient};
use dmetrics::error::MetricsError;

#[test]
fn test_client_rejects_empty_token() {
    let result = DiscordClient::new(String::new());
    assert!(matches!(result.unwrap_err(), MetricsError::AuthError(_)));
}

#[test]
fn test_client_creation() {
    assert!(DiscordClient::new("bot-token".to_string()).is_ok());
}

#[test]
fn test_snowflake_epoch_start() {
    // A snowflake of 0 decodes to Discord's epoch.
    let ts = snowflake_timestamp(0);
    assert_eq!(ts, Utc.with_ymd_and_hms(2015, 1, 1, 0, 0, 0).unwrap());
}

#[test]
fn test_snowflake_timestamp_known_id() {
    // 175928847299117063 is the documented example snowflake, created
    // 2016-04-30.
    let ts = snowflake_timestamp(175928847299117063);
    assert_eq!(ts.year(), 2016);
    assert_eq!(ts.month(), 4);
    assert_eq!(ts.day(), 30);
}

#[tokio::test]
#[ignore = "Requires a valid Discord bot token"]
async fn test_login() {
    let token = std::env::var("DISCORD_TOKEN").expect("DISCORD_TOKEN not set");
    let client = DiscordClient::new(token).expect("Failed to create client");
    client.login().await.expect("Login failed");
}

#[tokio::test]
#[ignore = "Requires a valid Discord bot token"]
async fn test_member_not_found() {
    let token = std::env::var("DISCORD_TOKEN").expect("DISCORD_TOKEN not set");
    let client = DiscordClient::new(token).expect("Failed to create client");

    let result = client.find_member("nobody-by-this-name-dmetrics-test").await;
    assert!(matches!(result.unwrap_err(), MetricsError::NotFound(_)));
}
