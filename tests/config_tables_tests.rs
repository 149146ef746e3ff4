//! Tests for loading curated tables from a config file and feeding them to the pipeline.

use emoji_names::picker::NameMap;
use emoji_names::{AppError, Config, emoji_names_for_picker};
use tempfile::tempdir;

fn flag_map() -> NameMap {
    [
        ("uk", "1f1ec-1f1e7"),
        ("gb", "1f1ec-1f1e7"),
        ("flag_gb", "1f1ec-1f1e7"),
        ("us", "1f1fa-1f1f8"),
        ("flag_us", "1f1fa-1f1f8"),
    ]
    .into_iter()
    .map(|(name, codepoint)| (name.to_string(), codepoint.to_string()))
    .collect()
}

#[tokio::test]
async fn test_tables_from_config_file_drive_reduction() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    tokio::fs::write(
        &config_path,
        r#"
blacklist = ["us"]
whitelist = [["uk", "gb"]]
"#,
    )
    .await
    .unwrap();

    let config = Config::load(config_path.to_str()).await.unwrap();
    let names = emoji_names_for_picker(&flag_map(), &config.tables()).unwrap();

    assert_eq!(names, vec!["flag_us", "gb", "uk"]);
}

#[tokio::test]
async fn test_stale_whitelist_in_config_is_reported() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    tokio::fs::write(
        &config_path,
        r#"
blacklist = []
whitelist = [["uk", "us"], ["gb", "flag_gb"]]
"#,
    )
    .await
    .unwrap();

    let config = Config::load(config_path.to_str()).await.unwrap();
    let error = emoji_names_for_picker(&flag_map(), &config.tables()).unwrap_err();

    assert!(matches!(error, AppError::WhitelistInconsistent { .. }));
    assert!(error.to_string().contains("'us' maps to 1f1fa-1f1f8"));
}

#[tokio::test]
async fn test_missing_custom_config_is_an_error() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("missing.toml");

    let result = Config::load(config_path.to_str()).await;
    assert!(matches!(result.unwrap_err(), AppError::Io(_)));
}
