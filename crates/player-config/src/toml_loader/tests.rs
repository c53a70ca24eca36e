//! Tests for TOML config loading, creation, and path resolution.

use super::template::default_config_toml;
use super::*;
use crate::schema::{LogLevel, PlayerConfig};
use player_common::ConfigError;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_player_windows_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[poll]
interval_ms = 250

[logging]
level = "debug"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.poll.interval_ms, 250);
    assert_eq!(config.logging.level, LogLevel::Debug);
    // Defaults preserved
    assert_eq!(config.failures.max_consecutive_poll_failures, 0);
    assert!(!config.failures.strict_registration);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn load_config_with_invalid_values_keeps_parsed_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[poll]\ninterval_ms = 5\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.poll.interval_ms, 5);
    assert!(crate::validation::validate(&config).is_err());
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("player-windows").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.poll.interval_ms, 500);
    assert_eq!(config.logging.level, LogLevel::Info);
}

#[test]
fn default_config_toml_is_valid() {
    let config: PlayerConfig = toml::from_str(&default_config_toml()).unwrap();
    assert_eq!(config.poll.interval_ms, 500);
}

#[test]
fn default_config_path_is_reasonable() {
    // Not every CI environment has a config dir.
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("player-windows"));
        assert!(path_str.ends_with("config.toml"));
    }
}

#[test]
fn unreadable_path_is_not_reported_as_missing() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_from_path(dir.path());
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}
