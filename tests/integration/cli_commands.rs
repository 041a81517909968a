// tests/integration/cli_commands.rs

use std::fs;
use std::path::Path;

use clap::Parser;
use project_tracker::cli::{CliArgs, Command};
use project_tracker::run_command;
use project_tracker_test_utils::builders::unit;
use serde_json::Value;
use tempfile::tempdir;

fn write_catalog(root: &Path, docs_dir: &str) {
    let docs = root.join(docs_dir);
    fs::create_dir_all(&docs).unwrap();
    let units = vec![unit("parse", &[]), unit("render", &["parse"])];
    fs::write(
        docs.join("functions.json"),
        serde_json::to_string_pretty(&units).unwrap(),
    )
    .unwrap();
}

fn run(root: &Path, command: Command) -> Value {
    run_command(root, None, &command)
}

#[test]
fn test_update_then_status_round_through_disk() {
    project_tracker_test_utils::init_tracing();
    let dir = tempdir().unwrap();
    write_catalog(dir.path(), "docs");

    let response = run(
        dir.path(),
        Command::Update {
            function_id: "parse".to_string(),
            status: "completed".to_string(),
            notes: Some("first pass".to_string()),
        },
    );
    assert_eq!(response["success"], true);

    let response = run(dir.path(), Command::Status);
    assert_eq!(response["data"]["completed"], 1);
    assert_eq!(response["data"]["completion_rate"], "50.0%");

    let response = run(dir.path(), Command::Context);
    assert_eq!(response["data"]["current_task"]["task_id"], "render");

    let response = run(
        dir.path(),
        Command::Deps {
            function_id: "render".to_string(),
        },
    );
    assert_eq!(response["data"]["dependencies"][0]["id"], "parse");
    assert_eq!(response["data"]["dependencies"][0]["notes"], "first pass");
}

#[test]
fn test_config_redirects_docs_dir() {
    project_tracker_test_utils::init_tracing();
    let dir = tempdir().unwrap();
    write_catalog(dir.path(), "design");
    fs::write(
        dir.path().join(".project-tracker.toml"),
        "[project]\nname = \"renderer\"\n\n[paths]\ndocs_dir = \"design\"\n",
    )
    .unwrap();

    let response = run(dir.path(), Command::Status);

    assert_eq!(response["success"], true);
    assert_eq!(response["data"]["project_name"], "renderer");
    assert_eq!(response["data"]["total_tasks"], 2);
}

#[test]
fn test_bad_config_is_reported_as_failure() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join(".project-tracker.toml"),
        "[paths]\ndocs_dir = \"/abs\"\n",
    )
    .unwrap();

    let response = run(dir.path(), Command::Status);

    assert_eq!(response["success"], false);
    assert!(response["error"].as_str().unwrap().starts_with("configuration error"));
}

#[test]
fn test_cli_parses_update_with_notes() {
    let args = CliArgs::try_parse_from([
        "project-tracker",
        "--project",
        "/tmp/demo",
        "update",
        "parse",
        "in_progress",
        "--notes",
        "halfway",
    ])
    .unwrap();

    assert_eq!(args.project, Path::new("/tmp/demo"));
    match args.command {
        Command::Update {
            function_id,
            status,
            notes,
        } => {
            assert_eq!(function_id, "parse");
            assert_eq!(status, "in_progress");
            assert_eq!(notes.as_deref(), Some("halfway"));
        }
        other => panic!("expected update, got {other:?}"),
    }
}

#[test]
fn test_cli_defaults_project_to_current_dir() {
    let args = CliArgs::try_parse_from(["project-tracker", "status"]).unwrap();

    assert_eq!(args.project, Path::new("."));
    assert!(args.config.is_none());
    assert!(matches!(args.command, Command::Status));
}
