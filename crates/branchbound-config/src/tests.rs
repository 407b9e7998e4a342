//! Tests for search configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        pruning = false
        initial_queue_capacity = 1024

        [termination]
        seconds_spent_limit = 30
        node_count_limit = 5000
    "#;

    let config = SearchConfig::from_toml_str(toml).unwrap();
    assert!(!config.pruning);
    assert_eq!(config.initial_queue_capacity, Some(1024));
    let termination = config.termination.unwrap();
    assert_eq!(termination.seconds_spent_limit, Some(30));
    assert_eq!(termination.node_count_limit, Some(5000));
    assert_eq!(termination.solution_count_limit, None);
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        pruning: true
        termination:
          millis_spent_limit: 250
          solution_count_limit: 3
    "#;

    let config = SearchConfig::from_yaml_str(yaml).unwrap();
    assert!(config.pruning);
    assert_eq!(config.time_limit(), Some(Duration::from_millis(250)));
    assert_eq!(config.termination.unwrap().solution_count_limit, Some(3));
}

#[test]
fn test_empty_toml_uses_defaults() {
    let config = SearchConfig::from_toml_str("").unwrap();
    assert!(config.pruning);
    assert!(config.termination.is_none());
    assert!(config.time_limit().is_none());
}

#[test]
fn test_seconds_and_millis_add_up() {
    let termination = TerminationConfig {
        seconds_spent_limit: Some(2),
        millis_spent_limit: Some(500),
        ..Default::default()
    };
    assert_eq!(termination.time_limit(), Some(Duration::from_millis(2500)));
}

#[test]
fn test_zero_time_limit_is_kept() {
    let config = SearchConfig::new().with_termination_millis(0);
    assert_eq!(config.time_limit(), Some(Duration::ZERO));
}

#[test]
fn test_zero_node_limit_rejected() {
    let toml = r#"
        [termination]
        node_count_limit = 0
    "#;

    let err = SearchConfig::from_toml_str(toml).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_malformed_toml_rejected() {
    let err = SearchConfig::from_toml_str("pruning = \"sometimes\"").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_missing_file() {
    let err = SearchConfig::load("definitely/not/here.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_builder() {
    let config = SearchConfig::new()
        .with_pruning(false)
        .with_termination_seconds(60)
        .with_node_count_limit(10)
        .with_initial_queue_capacity(64);

    assert!(!config.pruning);
    assert_eq!(config.time_limit(), Some(Duration::from_secs(60)));
    assert_eq!(config.termination.unwrap().node_count_limit, Some(10));
    assert_eq!(config.initial_queue_capacity, Some(64));
}
