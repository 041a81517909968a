// tests/integration/config_loading.rs

use std::fs;
use std::io::Write;

use project_tracker::config::loader::DEFAULT_CONFIG_FILE;
use project_tracker::config::{load_and_validate, load_for_project};
use project_tracker::errors::TrackerError;
use tempfile::{tempdir, NamedTempFile};

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn test_full_config_is_loaded() {
    let file = config_file(
        r#"
[project]
name = "billing-service"

[paths]
docs_dir = "design"
functions = "units.json"
"#,
    );

    let config = load_and_validate(file.path()).unwrap();

    assert_eq!(config.project.name.as_deref(), Some("billing-service"));
    assert_eq!(config.paths.docs_dir, "design");
    assert_eq!(config.paths.functions, "units.json");
    assert_eq!(config.paths.progress, "progress.json");
    assert_eq!(config.paths.architecture, "architecture.json");
}

#[test]
fn test_absolute_path_returns_config_error() {
    let file = config_file(
        r#"
[paths]
progress = "/etc/progress.json"
"#,
    );

    match load_and_validate(file.path()) {
        Err(TrackerError::ConfigError(msg)) => {
            assert!(msg.contains("[paths].progress"));
            assert!(msg.contains("relative"));
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_parent_dir_returns_config_error() {
    let file = config_file(
        r#"
[paths]
docs_dir = "../elsewhere"
"#,
    );

    match load_and_validate(file.path()) {
        Err(TrackerError::ConfigError(msg)) => assert!(msg.contains("'..'")),
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_empty_project_name_returns_config_error() {
    let file = config_file(
        r#"
[project]
name = "  "
"#,
    );

    assert!(matches!(
        load_and_validate(file.path()),
        Err(TrackerError::ConfigError(_))
    ));
}

#[test]
fn test_invalid_toml_returns_toml_error() {
    let file = config_file("[paths\ndocs_dir = ");

    assert!(matches!(
        load_and_validate(file.path()),
        Err(TrackerError::Toml(_))
    ));
}

#[test]
fn test_project_config_is_discovered_in_root() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join(DEFAULT_CONFIG_FILE),
        "[project]\nname = \"found\"\n",
    )
    .unwrap();

    let config = load_for_project(dir.path(), None).unwrap();

    assert_eq!(config.project.name.as_deref(), Some("found"));
}

#[test]
fn test_defaults_without_config_file() {
    let dir = tempdir().unwrap();

    let config = load_for_project(dir.path(), None).unwrap();

    assert_eq!(config.project.name, None);
    assert_eq!(config.paths.docs_dir, "docs");
}

#[test]
fn test_missing_explicit_config_returns_config_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    match load_for_project(dir.path(), Some(missing.as_path())) {
        Err(TrackerError::ConfigError(msg)) => assert!(msg.contains("not found")),
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}
