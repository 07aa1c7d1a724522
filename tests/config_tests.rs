//! Integration tests for configuration management

use gpa_planner::config::{Config, ConfigOverrides};

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    // Should have non-empty defaults for critical fields
    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.paths.data_dir.is_empty(),
        "Default data_dir should not be empty"
    );
    assert!(
        !config.paths.out_dir.is_empty(),
        "Default out_dir should not be empty"
    );
    assert!(
        config.planner.total_credits > 0.0,
        "Default total_credits should be positive"
    );
    assert!(
        config.planner.term_count > 0,
        "Default term_count should be positive"
    );
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[paths]
data_dir = "./data"
out_dir = "./plans"

[planner]
total_credits = 120.0
baseline_gpa = 2.5
max_credits_per_term = 15.0
term_count = 3
"#;

    let config = Config::from_toml(toml_str).expect("parse config");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.data_dir, "./data");
    assert_eq!(config.paths.out_dir, "./plans");
    assert!((config.planner.total_credits - 120.0).abs() < f32::EPSILON);
    assert!((config.planner.baseline_gpa - 2.5).abs() < f32::EPSILON);
    assert!((config.planner.max_credits_per_term - 15.0).abs() < f32::EPSILON);
    assert_eq!(config.planner.term_count, 3);
}

#[test]
fn test_config_from_toml_missing_sections() {
    let toml_str = r#"
[logging]
level = "warn"
"#;

    let config = Config::from_toml(toml_str).expect("parse config");

    assert_eq!(config.logging.level, "warn");
    assert!(config.paths.data_dir.is_empty());
    assert!((config.planner.total_credits - 0.0).abs() < f32::EPSILON);
    assert_eq!(config.planner.term_count, 0);
}

#[test]
fn test_config_expands_variables() {
    let toml_str = r#"
[logging]
level = "info"
file = "$GPA_PLANNER/logs/app.log"

[paths]
data_dir = "$GPA_PLANNER/data"
out_dir = "./plans"
"#;

    let config = Config::from_toml(toml_str).expect("parse config");

    assert!(
        !config.logging.file.contains("$GPA_PLANNER"),
        "Variable should be expanded in logging.file"
    );
    assert!(
        !config.paths.data_dir.contains("$GPA_PLANNER"),
        "Variable should be expanded in paths.data_dir"
    );
    assert_eq!(config.paths.out_dir, "./plans");
}

#[test]
fn test_apply_overrides() {
    let mut config = Config::from_defaults();
    let overrides = ConfigOverrides {
        level: Some("debug".to_string()),
        file: Some("/tmp/override.log".to_string()),
        verbose: Some(true),
        data_dir: Some("/data".to_string()),
        out_dir: Some("/out".to_string()),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.file, "/tmp/override.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.data_dir, "/data");
    assert_eq!(config.paths.out_dir, "/out");
}

#[test]
fn test_apply_empty_overrides_changes_nothing() {
    let mut config = Config::from_defaults();
    let before = config.get("level");

    config.apply_overrides(&ConfigOverrides::default());

    assert_eq!(config.get("level"), before);
}

#[test]
fn test_get_set_round_trip() {
    let mut config = Config::from_defaults();

    config.set("level", "error").expect("set level");
    assert_eq!(config.get("level"), Some("error".to_string()));

    config.set("baseline_gpa", "3.0").expect("set baseline");
    assert_eq!(config.get("baseline_gpa"), Some("3".to_string()));

    config.set("term_count", "4").expect("set term count");
    assert_eq!(config.get("term_count"), Some("4".to_string()));
}

#[test]
fn test_set_rejects_invalid_values() {
    let mut config = Config::from_defaults();

    assert!(config.set("verbose", "maybe").is_err());
    assert!(config.set("total_credits", "abc").is_err());
    assert!(config.set("total_credits", "-5").is_err());
    assert!(config.set("term_count", "two").is_err());
    assert!(config.set("no_such_key", "1").is_err());
}

#[test]
fn test_unset_restores_defaults() {
    let defaults = Config::from_defaults();
    let mut config = Config::from_defaults();

    config.set("level", "error").expect("set level");
    config.set("baseline_gpa", "3.9").expect("set baseline");

    config.unset("level", &defaults).expect("unset level");
    config.unset("baseline_gpa", &defaults).expect("unset baseline");

    assert_eq!(config.logging.level, defaults.logging.level);
    assert!(
        (config.planner.baseline_gpa - defaults.planner.baseline_gpa).abs() < f32::EPSILON
    );
}

#[test]
fn test_unset_unknown_key_errors() {
    let defaults = Config::from_defaults();
    let mut config = Config::from_defaults();

    assert!(config.unset("no_such_key", &defaults).is_err());
}

#[test]
fn test_kebab_and_snake_keys_are_equivalent() {
    let mut config = Config::from_defaults();

    config.set("max-credits-per-term", "12").expect("set");
    assert_eq!(
        config.get("max_credits_per_term"),
        Some("12".to_string())
    );
}

#[test]
fn test_display_includes_all_sections() {
    let config = Config::from_defaults();
    let shown = config.to_string();

    assert!(shown.contains("[logging]"));
    assert!(shown.contains("[paths]"));
    assert!(shown.contains("[planner]"));
    assert!(shown.contains("total_credits"));
}
