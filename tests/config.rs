//! Configuration system tests
//!
//! Tests for config paths and config parsing.

use text_helper::config::HelperConfig;
use text_helper::config_paths;
use text_helper::format::OutputFormat;
use text_helper::model::Session;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_returns_some() {
    assert!(config_paths::config_dir().is_some());
}

#[test]
fn test_config_dir_contains_app_name() {
    let dir = config_paths::config_dir().unwrap();
    assert!(dir.to_string_lossy().contains("text-helper"));
}

#[test]
fn test_config_file_ends_with_yaml() {
    let path = config_paths::config_file().unwrap();
    assert!(path.to_string_lossy().ends_with("config.yaml"));
}

#[test]
fn test_logs_dir_is_subdir_of_config() {
    let config = config_paths::config_dir().unwrap();
    let logs = config_paths::logs_dir().unwrap();
    assert!(logs.starts_with(&config));
}

// ========================================================================
// Helper Config Tests
// ========================================================================

#[test]
fn test_empty_yaml_gives_defaults() {
    let config = HelperConfig::from_yaml("{}").unwrap();
    assert_eq!(config, HelperConfig::default());
}

#[test]
fn test_config_feeds_new_sessions() {
    let config = HelperConfig::from_yaml(
        "preview_lines: 7\ndefault_format: .MD\ntimestamp_format: \"%H:%M\"\n",
    )
    .unwrap();
    let session = Session::with_config("text", "base", &config);

    assert_eq!(session.preview_lines, 7);
    assert_eq!(session.format, OutputFormat::Markdown);
    assert_eq!(session.timestamp_format, "%H:%M");
}

#[test]
fn test_unknown_keys_are_ignored() {
    let config = HelperConfig::from_yaml("theme: dark\npreview_lines: 4\n").unwrap();
    assert_eq!(config.preview_lines, 4);
}
