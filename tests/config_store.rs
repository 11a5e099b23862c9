use dmetrics::commands::{mask_token, persist_token, run_config};
use dmetrics::config::{Config, ConfigStore};
use tempfile::TempDir;

fn temp_store() -> (TempDir, ConfigStore) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = ConfigStore::new(dir.path().join("dmetrics").join("config.json"));
    (dir, store)
}

#[test]
fn test_load_missing_file_is_empty_config() {
    let (_dir, store) = temp_store();
    let config = store.load().expect("load should not fail");
    assert!(config.github_token.is_none());
}

#[test]
fn test_save_then_load_roundtrip() {
    let (_dir, store) = temp_store();
    store
        .save(&Config {
            github_token: Some("ghp_example".to_string()),
        })
        .expect("save failed");

    let config = store.load().expect("load failed");
    assert_eq!(config.github_token.as_deref(), Some("ghp_example"));
}

#[test]
fn test_clear_then_show_reports_nothing() {
    let (_dir, store) = temp_store();
    store
        .save(&Config {
            github_token: Some("ghp_example".to_string()),
        })
        .expect("save failed");

    store.clear().expect("clear failed");
    let config = store.load().expect("load failed");
    assert!(config.github_token.is_none());
    assert!(!store.path().exists());
}

#[test]
fn test_clear_missing_file_is_noop() {
    let (_dir, store) = temp_store();
    store.clear().expect("clearing an absent config should succeed");
}

#[test]
fn test_mask_token_respects_char_boundaries() {
    // Tokens are arbitrary strings; masking must not byte-slice.
    let masked = mask_token("✓✓✓-a-long-token");
    assert!(masked.starts_with("✓✓✓-"));
    assert!(!masked.contains("long"));

    assert_eq!(mask_token("short"), "*****");
    assert_eq!(mask_token("✓✓✓✓✓"), "*****");
}

#[test]
fn test_show_handles_multibyte_token() {
    let (_dir, store) = temp_store();
    store
        .save(&Config {
            github_token: Some("✓✓✓-a-long-token".to_string()),
        })
        .expect("save failed");

    run_config(&store, None, true, false).expect("show failed");
}

#[test]
fn test_save_without_token_warns_and_continues() {
    let (_dir, store) = temp_store();

    persist_token(&store, None, true).expect("saving nothing should not fail");
    assert!(!store.path().exists());

    persist_token(&store, Some("ghp_example"), true).expect("save failed");
    assert_eq!(
        store.load().expect("load failed").github_token.as_deref(),
        Some("ghp_example")
    );

    // Without --save the store is never touched.
    persist_token(&store, Some("other"), false).expect("no-op failed");
    assert_eq!(
        store.load().expect("load failed").github_token.as_deref(),
        Some("ghp_example")
    );
}

#[test]
fn test_saved_file_is_json_object() {
    let (_dir, store) = temp_store();
    store
        .save(&Config {
            github_token: Some("abc".to_string()),
        })
        .expect("save failed");

    let raw = std::fs::read_to_string(store.path()).expect("read failed");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("not valid JSON");
    assert_eq!(value["github_token"], "abc");
}
