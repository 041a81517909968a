// tests/integration/logging_filter.rs

use project_tracker::cli::LogLevel;
use project_tracker::logging::resolve_filter;

#[test]
fn test_cli_level_overrides_env() {
    let filter = resolve_filter(Some(LogLevel::Debug), Some("project_tracker=loud")).unwrap();
    assert_eq!(filter.to_string(), "debug");
}

#[test]
fn test_env_directives_are_used() {
    let filter = resolve_filter(None, Some("project_tracker::dag=trace")).unwrap();
    assert!(filter.to_string().contains("project_tracker::dag=trace"));
}

#[test]
fn test_default_is_info() {
    assert_eq!(resolve_filter(None, None).unwrap().to_string(), "info");
    assert_eq!(resolve_filter(None, Some("  ")).unwrap().to_string(), "info");
}

#[test]
fn test_invalid_env_value_is_an_error() {
    let err = resolve_filter(None, Some("project_tracker=loud")).unwrap_err();
    assert!(err.to_string().contains("PROJECT_TRACKER_LOG"));
}
