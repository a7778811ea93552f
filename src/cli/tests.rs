//! Unit tests for CLI commands

use crate::cli::{execute, Cli, Commands};
use clap::Parser;
use std::io::Write;

fn run(args: &[&str]) -> (bool, String) {
    let cli = Cli::try_parse_from(args).unwrap();
    let mut out = Vec::new();
    let ok = execute(&cli.command, &mut out).unwrap();
    (ok, String::from_utf8(out).unwrap())
}

fn routes_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

const ROUTES: &str = r#"
routes:
  - name: get_user
    template: /users/{id}
  - name: get_file
    template: /files/{path*}
  - name: odd
    template: /a/{rest*}/b
"#;

#[test]
fn test_match_command_parses() {
    let cli = Cli::try_parse_from(["routepath", "match", "--template", "/a/{b}", "/a/1"]).unwrap();
    match cli.command {
        Commands::Match { template, path } => {
            assert_eq!(template, "/a/{b}");
            assert_eq!(path, "/a/1");
        }
        _ => panic!("Expected Match command"),
    }
}

#[test]
fn test_lint_command_with_flags() {
    let cli = Cli::try_parse_from([
        "routepath",
        "lint",
        "--config",
        "routes.yaml",
        "--fail-on-warning",
    ])
    .unwrap();
    match cli.command {
        Commands::Lint {
            config,
            fail_on_warning,
        } => {
            assert_eq!(config.to_string_lossy(), "routes.yaml");
            assert!(fail_on_warning);
        }
        _ => panic!("Expected Lint command"),
    }
}

#[test]
fn test_missing_path_is_rejected() {
    assert!(Cli::try_parse_from(["routepath", "match", "--template", "/a"]).is_err());
}

#[test]
fn test_match_prints_json() {
    let (ok, out) = run(&["routepath", "match", "-t", "/users/{id}", "/users/42?x=1"]);
    assert!(ok);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["template"], "/users/{id}");
    assert_eq!(json["path"], "/users/42?x=1");
    assert_eq!(json["params"][0]["name"], "id");
    assert_eq!(json["params"][0]["value"], "42");
    assert!(json.get("route").is_none());
}

#[test]
fn test_match_miss() {
    let (ok, out) = run(&["routepath", "match", "-t", "/users/{id}", "/users"]);
    assert!(!ok);
    assert!(out.starts_with("no match"));
}

#[test]
fn test_route_against_config() {
    let file = routes_file(ROUTES);
    let config = file.path().to_str().unwrap();
    let (ok, out) = run(&["routepath", "route", "-c", config, "/files/a/b"]);
    assert!(ok);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["route"], "get_file");
    assert_eq!(json["params"][0]["value"], "a/b");
}

#[test]
fn test_inspect_lists_variables() {
    let file = routes_file(ROUTES);
    let config = file.path().to_str().unwrap();
    let (ok, out) = run(&["routepath", "inspect", "-c", config]);
    assert!(ok);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 3);
    assert_eq!(json[0]["name"], "get_user");
    assert_eq!(json[0]["template"], "/users/{id}");
    assert_eq!(json[2]["name"], "odd");
    assert_eq!(json[1]["variables"], serde_json::json!(["path"]));
    assert_eq!(json[2]["issues"].as_array().unwrap().len(), 1);
}

#[test]
fn test_lint_reports_and_fails_when_asked() {
    let file = routes_file(ROUTES);
    let config = file.path().to_str().unwrap();
    let (ok, out) = run(&["routepath", "lint", "-c", config]);
    assert!(ok);
    assert!(out.contains("non_trailing_wildcard"));
    assert!(out.contains("3 routes checked, 1 issues"));

    let (ok, _) = run(&["routepath", "lint", "-c", config, "--fail-on-warning"]);
    assert!(!ok);
}

#[test]
fn test_unreadable_config_is_an_error() {
    let cli = Cli::try_parse_from(["routepath", "inspect", "-c", "/nonexistent/routes.yaml"])
        .unwrap();
    let mut out = Vec::new();
    assert!(execute(&cli.command, &mut out).is_err());
}
