//! Settings as seen by the compiled binary.
//!
//! Each test lays out config files in a temp tree, runs a command from some
//! directory in it, and reads the outcome from `--json` output.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// A temp tree with files written relative to its root.
struct Project(TempDir);

impl Project {
    fn new() -> Self {
        Self(TempDir::new().unwrap())
    }

    fn root(&self) -> &Path {
        self.0.path()
    }

    fn dir(&self, rel: &str) -> PathBuf {
        let path = self.root().join(rel);
        fs::create_dir_all(&path).unwrap();
        path
    }

    fn file(&self, rel: &str, body: &str) -> PathBuf {
        let path = self.root().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, body).unwrap();
        path
    }
}

fn json_in(dir: &Path, args: &[&str]) -> Value {
    let output = cmd()
        .arg("-C")
        .arg(dir)
        .args(args)
        .arg("--json")
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "{args:?} exited with {}: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

/// The `config` object of `info --json`.
fn settings_in(dir: &Path) -> Value {
    json_in(dir, &["info"])["config"].take()
}

// -- discovery ---------------------------------------------------------------

#[test]
fn bare_directory_reports_defaults() {
    let project = Project::new();
    let settings = settings_in(project.root());

    assert_eq!(settings["log_level"], "info");
    assert_eq!(settings["dataset"], "bundled sample");
    assert_eq!(settings["default_store"], "all");
    assert!(settings["config_file"].is_null(), "{settings}");
}

#[test]
fn dotfile_is_picked_up_and_named() {
    let project = Project::new();
    project.file(".review-pulse.toml", "log_level = \"debug\"\n");

    let settings = settings_in(project.root());

    assert_eq!(settings["log_level"], "debug");
    let source = settings["config_file"].as_str().unwrap();
    assert!(source.ends_with(".review-pulse.toml"), "{source}");
}

#[test]
fn search_climbs_out_of_subdirectories() {
    let project = Project::new();
    project.file(".review-pulse.toml", "default_store = 3\n");
    let deep = project.dir("clients/north");

    let settings = settings_in(&deep);

    assert_eq!(settings["default_store"], "3");
    assert!(settings["config_file"].is_string());
}

#[test]
fn plain_name_beats_dotfile_in_same_directory() {
    let project = Project::new();
    project.file(".review-pulse.toml", "recent_limit = 1\n");
    project.file("review-pulse.toml", "recent_limit = 7\n");

    assert_eq!(settings_in(project.root())["recent_limit"], 7);
}

#[test]
fn yaml_and_json_files_are_understood() {
    let yaml = Project::new();
    yaml.file(".review-pulse.yaml", "log_level: warn\nrecent_limit: 4\n");
    let settings = settings_in(yaml.root());
    assert_eq!(settings["log_level"], "warn");
    assert_eq!(settings["recent_limit"], 4);

    let json = Project::new();
    json.file(
        ".review-pulse.json",
        r#"{"default_store": 4, "disable_input_limit": true}"#,
    );
    let settings = settings_in(json.root());
    assert_eq!(settings["default_store"], "4");
    assert_eq!(settings["disable_input_limit"], true);
}

// -- layering ----------------------------------------------------------------

#[test]
fn nearest_project_directory_wins() {
    let project = Project::new();
    project.file(".review-pulse.toml", "default_store = 1\n");
    project.file("downtown/.review-pulse.toml", "default_store = 2\n");

    let settings = settings_in(&project.dir("downtown"));

    assert_eq!(settings["default_store"], "2");
}

#[test]
fn config_flag_layers_over_discovered_file() {
    let project = Project::new();
    project.file(".review-pulse.toml", "log_level = \"debug\"\nrecent_limit = 3\n");
    let extra = project.file("ci.toml", "log_level = \"error\"\n");

    let settings = json_in(
        project.root(),
        &["--config", extra.to_str().unwrap(), "info"],
    )["config"]
        .take();

    assert_eq!(settings["log_level"], "error");
    // Keys the flag file leaves out still come from the project file.
    assert_eq!(settings["recent_limit"], 3);
    assert!(
        settings["config_file"]
            .as_str()
            .unwrap()
            .ends_with("ci.toml")
    );
}

#[test]
fn environment_beats_every_file() {
    let project = Project::new();
    project.file(".review-pulse.toml", "default_store = 1\nrecent_limit = 3\n");

    let output = cmd()
        .env("REVIEW_PULSE_DEFAULT_STORE", "2")
        .env("REVIEW_PULSE_RECENT_LIMIT", "9")
        .arg("-C")
        .arg(project.root())
        .args(["info", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["default_store"], "2");
    assert_eq!(json["config"]["recent_limit"], 9);
}

// -- settings reach the commands ---------------------------------------------

#[test]
fn default_store_scopes_analyze_until_flag_overrides() {
    let project = Project::new();
    project.file(".review-pulse.toml", "default_store = 2\n");

    let report = json_in(project.root(), &["analyze"]);
    assert_eq!(report["store"], 2);
    assert_eq!(report["brand_health"]["total_reviews"], 3);

    let report = json_in(project.root(), &["analyze", "--store", "all"]);
    assert_eq!(report["brand_health"]["total_reviews"], 12);
}

#[test]
fn dataset_path_resolves_from_working_directory() {
    let project = Project::new();
    project.file(
        "exports/march.json",
        r#"[{"id": 1, "store_id": 5, "rating": 4, "text": "Snug hoodie"}]"#,
    );
    project.file(".review-pulse.toml", "dataset = \"exports/march.json\"\n");

    let report = json_in(project.root(), &["analyze"]);

    assert_eq!(report["brand_health"]["total_reviews"], 1);
    assert_eq!(report["product_feedback"][0]["name"], "Hoodie");
    assert_eq!(report["demographics"]["stores"][0]["name"], "Store 5");
}

#[test]
fn recent_limit_caps_reviews_listing() {
    let project = Project::new();
    project.file(".review-pulse.toml", "recent_limit = 2\n");

    let listed = json_in(project.root(), &["reviews"]);

    assert_eq!(listed.as_array().unwrap().len(), 2);
}

// -- bad input ---------------------------------------------------------------

#[test]
fn unparsable_file_is_fatal() {
    let project = Project::new();
    project.file(".review-pulse.toml", "default_store = [[[\n");

    cmd()
        .arg("-C")
        .arg(project.root())
        .arg("info")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid configuration"));
}

#[test]
fn store_name_instead_of_id_is_fatal() {
    let project = Project::new();
    project.file(".review-pulse.toml", "default_store = \"uptown\"\n");

    cmd()
        .arg("-C")
        .arg(project.root())
        .arg("info")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid store selector"));
}

#[test]
fn unrecognized_keys_are_tolerated() {
    let project = Project::new();
    project.file(".review-pulse.toml", "recent_limit = 5\ntheme = \"dark\"\n");

    assert_eq!(settings_in(project.root())["recent_limit"], 5);
}

// -- repository root ---------------------------------------------------------

#[test]
fn search_stops_at_repository_root() {
    let project = Project::new();
    project.file(".review-pulse.toml", "log_level = \"error\"\n");
    project.dir("shop/.git");
    let src = project.dir("shop/src");

    let settings = settings_in(&src);

    assert_eq!(settings["log_level"], "info");
    assert!(settings["config_file"].is_null(), "{settings}");
}

#[test]
fn file_beside_git_dir_is_still_read() {
    let project = Project::new();
    project.dir("shop/.git");
    project.file("shop/.review-pulse.toml", "log_level = \"debug\"\n");

    let settings = settings_in(&project.dir("shop/src"));

    assert_eq!(settings["log_level"], "debug");
}
