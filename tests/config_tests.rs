//! Integration tests for configuration management

use std::fs;
use std::path::PathBuf;
use tallybook::config::{Config, ConfigOverrides};
use tallybook::core::gradebook::PASS_THRESHOLD;
use tempfile::TempDir;

/// Helper to create a temporary config directory
fn setup_temp_config() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("config.toml");
    (temp_dir, config_file)
}

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.paths.reports_dir.is_empty(),
        "Default reports_dir should not be empty"
    );
    assert_eq!(config.paths.calorie_log, "calorie_log.txt");
    assert_eq!(config.grading.pass_threshold, PASS_THRESHOLD);
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[grading]
pass_threshold = 50

[paths]
reports_dir = "./reports"
calorie_log = "meals.txt"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.grading.pass_threshold, 50);
    assert_eq!(config.paths.reports_dir, "./reports");
    assert_eq!(config.paths.calorie_log, "meals.txt");
}

#[test]
fn test_config_from_toml_partial() {
    // Missing fields and sections fall back to serde defaults
    let toml_str = r#"
[logging]
level = "error"

[paths]
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "");
    assert!(!config.logging.verbose);
    assert_eq!(config.grading.pass_threshold, PASS_THRESHOLD);
    assert_eq!(config.paths.calorie_log, "");
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$TALLYBOOK/test.log"

[paths]
reports_dir = "$TALLYBOOK/reports"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    assert!(config.logging.file.contains("tallybook"));
    assert!(!config.logging.file.contains("$TALLYBOOK"));
    assert!(config.paths.reports_dir.ends_with("reports"));
    assert!(!config.paths.reports_dir.contains("$TALLYBOOK"));
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    assert!(config.get("level").is_some());

    config.set("level", "debug").expect("Failed to set level");
    assert_eq!(config.get("level").as_deref(), Some("debug"));

    config
        .set("verbose", "true")
        .expect("Failed to set verbose");
    assert_eq!(config.get("verbose").as_deref(), Some("true"));
    assert!(config.logging.verbose);

    config
        .set("pass-threshold", "55")
        .expect("Failed to set threshold");
    assert_eq!(config.grading.pass_threshold, 55);
    assert_eq!(config.get("pass_threshold").as_deref(), Some("55"));

    assert!(config.get("unknown_key").is_none());
    assert!(config.set("unknown_key", "value").is_err());
}

#[test]
fn test_config_set_rejects_bad_values() {
    let mut config = Config::from_defaults();
    assert!(config.set("level", "loud").is_err());
    assert!(config.set("verbose", "sometimes").is_err());
    assert!(config.set("pass_threshold", "forty").is_err());
    assert_eq!(config.grading.pass_threshold, PASS_THRESHOLD);
}

#[test]
fn test_config_unset() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("level", "debug").expect("Failed to set level");
    config
        .set("calorie_log", "elsewhere.txt")
        .expect("Failed to set calorie_log");

    config
        .unset("level", &defaults)
        .expect("Failed to unset level");
    config
        .unset("calorie-log", &defaults)
        .expect("Failed to unset calorie_log");
    assert_eq!(config.logging.level, defaults.logging.level);
    assert_eq!(config.paths.calorie_log, defaults.paths.calorie_log);
    assert!(config.unset("nope", &defaults).is_err());
}

#[test]
fn test_config_save_and_load() {
    let (_temp_dir, config_file) = setup_temp_config();

    let mut config = Config::from_defaults();
    config.set("level", "info").expect("Failed to set level");
    config
        .set("pass_threshold", "45")
        .expect("Failed to set threshold");

    let toml_str = toml::to_string_pretty(&config).expect("Failed to serialize");
    fs::write(&config_file, toml_str).expect("Failed to write config");

    let content = fs::read_to_string(&config_file).expect("Failed to read config");
    let loaded_config = Config::from_toml(&content).expect("Failed to parse loaded config");

    assert_eq!(loaded_config.logging.level, "info");
    assert_eq!(loaded_config.grading.pass_threshold, 45);
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        file: Some("/custom/path.log".to_string()),
        verbose: Some(true),
        pass_threshold: Some(60),
        reports_dir: Some("./custom_reports".to_string()),
        calorie_log: Some("./custom_log.txt".to_string()),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/custom/path.log");
    assert!(config.logging.verbose);
    assert_eq!(config.grading.pass_threshold, 60);
    assert_eq!(config.paths.reports_dir, "./custom_reports");
    assert_eq!(config.paths.calorie_log, "./custom_log.txt");
}

#[test]
fn test_config_overrides_partial() {
    let mut config = Config::from_defaults();
    let before = config.clone();

    let overrides = ConfigOverrides {
        level: Some("debug".to_string()),
        ..Default::default()
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.grading.pass_threshold, before.grading.pass_threshold);
    assert_eq!(config.paths.reports_dir, before.paths.reports_dir);
}

#[test]
fn test_config_display_format() {
    let config = Config::from_defaults();
    let display_str = format!("{config}");

    assert!(display_str.contains("[logging]"));
    assert!(display_str.contains("[grading]"));
    assert!(display_str.contains("[paths]"));

    assert!(display_str.contains("level"));
    assert!(display_str.contains("pass_threshold = 40"));
    assert!(display_str.contains("calorie_log"));
}

#[test]
fn test_merge_defaults_adds_missing_fields() {
    let toml_str = r#"
[logging]
level = "error"
file = ""
verbose = false

[paths]
reports_dir = ""
calorie_log = ""
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse minimal config");
    let defaults = Config::from_defaults();

    let changed = config.merge_defaults(&defaults);

    assert!(
        changed,
        "merge_defaults should return true when fields are added"
    );
    assert_eq!(config.paths.calorie_log, defaults.paths.calorie_log);
    assert_eq!(config.paths.reports_dir, defaults.paths.reports_dir);
}

#[test]
fn test_merge_defaults_preserves_existing() {
    let toml_str = r#"
[logging]
level = "error"
file = "/my/custom/path.log"
verbose = false

[paths]
reports_dir = "/srv/reports"
calorie_log = "food.txt"
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse config");
    let defaults = Config::from_defaults();

    assert!(!config.merge_defaults(&defaults));

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/my/custom/path.log");
    assert_eq!(config.paths.reports_dir, "/srv/reports");
    assert_eq!(config.paths.calorie_log, "food.txt");
}

#[test]
fn test_get_tallybook_dir() {
    let dir = Config::get_tallybook_dir();

    assert!(dir.to_string_lossy().contains("tallybook"));
    assert_ne!(dir, PathBuf::from("."));
}

#[test]
fn test_get_config_file_path() {
    let path = Config::get_config_file_path();

    let path_str = path.to_string_lossy();
    assert!(path_str.ends_with("config.toml") || path_str.ends_with("dconfig.toml"));
}
