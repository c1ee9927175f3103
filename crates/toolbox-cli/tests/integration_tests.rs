//! Integration tests for the tolgee-toolbox binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

const SOURCES: &str = r#"
[tolgee.api]
url = "API_URL"

[[projects]]
tolgee.id = 12
tolgee.namespace = "web"

[[projects.sources]]
files = "i18n/Messages_${locale separator=underscore, region_case=upper}.properties"
type = "PROPERTIES_JAVA"

[[projects.targets]]
files = "out/${locale separator=dash, region_case=lower}.json"
type = "JSON"
excluded_locales = ["fr"]
"#;

fn workspace(api_url: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "tolgee-toolbox.toml",
        &SOURCES.replace("API_URL", api_url),
    );
    write(dir.path(), "i18n/Messages_en_US.properties", "hello=Hello\n");
    write(dir.path(), "i18n/Messages_nl.properties", "hello=Hallo\n");
    write(dir.path(), "i18n/README.md", "not a message file\n");
    dir
}

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// The binary with a clean environment and no colours.
fn toolbox(dir: &Path) -> Command {
    let mut cmd = cargo::cargo_bin_cmd!("tolgee-toolbox");
    cmd.current_dir(dir)
        .env_remove("TOLGEE_TOOLBOX_API_KEY")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    toolbox(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("pull"))
        .stdout(predicate::str::contains("push-single-step"))
        .stdout(predicate::str::contains("projects"));
}

#[test]
fn version_flag() {
    let dir = TempDir::new().unwrap();
    toolbox(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_subcommand_is_usage_error() {
    let dir = TempDir::new().unwrap();
    toolbox(dir.path()).assert().code(2);
}

#[test]
fn projects_lists_discovered_sources() {
    let dir = workspace("https://tolgee.example");
    toolbox(dir.path())
        .args(["projects", "--base-path"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Project 12 [namespace web]"))
        .stdout(predicate::str::contains("Messages_en_US.properties [en-US]"))
        .stdout(predicate::str::contains("Messages_nl.properties [nl]"))
        .stdout(predicate::str::contains("README").not());
}

#[test]
fn projects_json_is_parseable() {
    let dir = workspace("https://tolgee.example");
    let out = toolbox(dir.path())
        .args(["projects", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json[0]["id"], 12);
    assert_eq!(json[0]["files"].as_array().unwrap().len(), 2);
    assert_eq!(json[0]["targets"][0]["excluded_locales"][0], "fr");
}

#[test]
fn projects_without_config_warns() {
    let dir = TempDir::new().unwrap();
    toolbox(dir.path())
        .arg("projects")
        .assert()
        .success()
        .stdout(predicate::str::contains("No projects configured"));
}

#[test]
fn bad_placeholder_is_user_error() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "tolgee-toolbox.toml",
        r#"
[tolgee.api]
url = "https://tolgee.example"

[[projects]]
tolgee.id = 1

[[projects.sources]]
files = "Messages_${locale region_case=upper}.xlf"
type = "XLIFF_JAVA"
"#,
    );

    toolbox(dir.path())
        .arg("projects")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("${locale region_case=upper}"));
}

#[test]
fn missing_api_url_is_configuration_error() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "tolgee-toolbox.toml",
        "[[projects]]\ntolgee.id = 1\n",
    );

    toolbox(dir.path()).arg("projects").assert().code(4);
}

#[test]
fn pull_without_api_key_fails() {
    let dir = workspace("https://tolgee.example");
    toolbox(dir.path())
        .arg("pull")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("No Tolgee API key configured"))
        .stderr(predicate::str::contains("TOLGEE_TOOLBOX_API_KEY"));
}

#[test]
fn unknown_project_filter_is_not_found() {
    let dir = workspace("https://tolgee.example");
    toolbox(dir.path())
        .env("TOLGEE_TOOLBOX_API_KEY", "tgpak_test")
        .args(["push", "--project", "99"])
        .assert()
        .code(3);
}

#[test]
fn unreachable_server_is_remote_error() {
    let dir = workspace("http://127.0.0.1:1");
    toolbox(dir.path())
        .env("TOLGEE_TOOLBOX_API_KEY", "tgpak_test")
        .arg("push")
        .assert()
        .code(5);
}

#[test]
fn pull_writes_target_files() {
    let mut server = mockito::Server::new();
    let languages = server
        .mock("GET", "/v2/projects/12/languages")
        .match_header("x-api-key", "tgpak_test")
        .with_status(200)
        .with_body(
            r#"{"_embedded":{"languages":[{"id":1,"tag":"en-US"},{"id":2,"tag":"fr"},{"id":3,"tag":"nl"}]}}"#,
        )
        .create();
    let namespaces = server
        .mock("GET", "/v2/projects/12/used-namespaces")
        .with_status(200)
        .with_body(r#"{"_embedded":{"namespaces":[{"id":5,"name":"web"}]}}"#)
        .create();
    let export = server
        .mock("POST", "/v2/projects/12/export")
        .with_status(200)
        .with_body(r#"{"hello":"translated"}"#)
        .expect(2)
        .create();

    let dir = workspace(&server.url());
    toolbox(dir.path())
        .env("TOLGEE_TOOLBOX_API_KEY", "tgpak_test")
        .arg("pull")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pulled 2 file(s) for 1 project(s)"));

    languages.assert();
    namespaces.assert();
    export.assert();
    assert_eq!(
        fs::read_to_string(dir.path().join("out/en-us.json")).unwrap(),
        r#"{"hello":"translated"}"#
    );
    assert!(dir.path().join("out/nl.json").exists());
    assert!(!dir.path().join("out/fr.json").exists());
}

#[test]
fn completions_for_bash() {
    let dir = TempDir::new().unwrap();
    toolbox(dir.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tolgee-toolbox"));
}
