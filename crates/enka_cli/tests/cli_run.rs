use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

use mockito::{Server, ServerGuard};

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..")
}

fn fixture_body(name: &str) -> String {
    let path = workspace_root().join("tests/fixtures").join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read {:?}: {}", path, e))
}

fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_enka-showcase"))
        .args(args)
        .output()
        .expect("failed to run enka-showcase CLI")
}

fn serve_fixture(uid: &str, fixture: &str) -> ServerGuard {
    let mut server = Server::new();
    server
        .mock("GET", format!("/uid/{uid}").as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(fixture_body(fixture))
        .create();
    server
}

fn temp_output_path(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("{prefix}_{}_{}.csv", std::process::id(), nanos))
}

#[test]
fn missing_uid_is_a_usage_error() {
    let output = run_cli(&[]);
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("<UID>"));
}

#[test]
fn csv_without_character_is_a_usage_error() {
    let output = run_cli(&["618285049", "--csv"]);
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--csv requires --character <NAME>"));
}

#[test]
fn output_without_csv_is_a_usage_error() {
    let output = run_cli(&["618285049", "--output", "somewhere.csv"]);
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--output requires --csv"));
}

#[test]
fn profile_view_prints_summary_and_characters() {
    let server = serve_fixture("618285049", "uid_618285049.json");

    let output = run_cli(&["618285049", "--base-url", &server.url()]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Fetching player information for UID: 618285049"));
    assert!(stdout.contains("=== PROFILE INFORMATION ==="));
    assert!(stdout.contains("Nickname: Aquabelle"));
    assert!(stdout.contains("Response TTL: 60 seconds"));
    assert!(stdout.contains("=== CHARACTERS (3 total) ==="));
    assert!(stdout.contains("--- Furina (ID: 10000089) ---"));
    assert!(stdout.contains("--- Zhongli (ID: 10000030) ---"));
    assert!(stdout.contains("--- Character 99999999 (ID: 99999999) ---"));
}

#[test]
fn character_view_prints_details_and_artifact_table() {
    let server = serve_fixture("618285049", "uid_618285049.json");

    let output = run_cli(&["618285049", "--character", "furina", "--base-url", &server.url()]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Looking for character: furina"));
    assert!(stdout.contains("--- Furina (ID: 10000089) ---"));
    assert!(stdout.contains("    Favonius Sword: Level 90, Refinement R3"));
    assert!(stdout.contains("ARTIFACTS FOR FURINA"));
    assert!(stdout.contains("Flower"));
    assert!(stdout.contains("CRIT DMG 62.3%"));
    assert!(!stdout.contains("=== CHARACTERS"));
}

#[test]
fn csv_flag_writes_the_artifact_table() {
    let server = serve_fixture("618285049", "uid_618285049.json");
    let path = temp_output_path("enka_cli_csv");
    let path_arg = path.to_string_lossy().to_string();

    let output = run_cli(&[
        "618285049",
        "--character",
        "Furina",
        "--csv",
        "--output",
        &path_arg,
        "--base-url",
        &server.url(),
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Artifact table exported to"));

    let csv_text = fs::read_to_string(&path).expect("CSV file should exist");
    let mut lines = csv_text.lines();
    assert_eq!(
        lines.next(),
        Some("Artifact,Main Stat,Substat 1,Substat 2,Substat 3,Substat 4")
    );
    assert_eq!(csv_text.lines().count(), 6);
    assert!(csv_text.contains("Circlet,CRIT DMG 62.3%"));

    fs::remove_file(&path).expect("failed to remove temp CSV");
}

#[test]
fn unknown_character_lists_available_names() {
    let server = serve_fixture("618285049", "uid_618285049.json");

    let output = run_cli(&["618285049", "--character", "Diluc", "--base-url", &server.url()]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Character 'Diluc' not found in this showcase"));
    assert!(stderr.contains("Available characters:"));
    assert!(stderr.contains("  - Furina"));
    assert!(stderr.contains("  - Zhongli"));
    assert!(stderr.contains("  - Character 99999999"));
}

#[test]
fn fetch_failure_reports_status_and_body() {
    let mut server = Server::new();
    server
        .mock("GET", "/uid/618285049")
        .with_status(404)
        .with_body(r#"{"detail": "Player does not exist"}"#)
        .create();

    let output = run_cli(&["618285049", "--base-url", &server.url()]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error fetching UID 618285049"));
    assert!(stderr.contains("HTTP 404"));
    assert!(stderr.contains("Player does not exist"));
}

#[test]
fn invalid_payload_reports_every_issue() {
    let mut server = Server::new();
    server
        .mock("GET", "/uid/618285049")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{}")
        .create();

    let output = run_cli(&["618285049", "--base-url", &server.url()]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error validating response for UID 618285049"));
    assert!(stderr.contains("validation failed with 4 issue(s)"));
    assert!(stderr.contains("playerInfo"));
    assert!(stderr.contains("avatarInfoList"));
}

#[test]
fn json_flag_prints_the_raw_payload() {
    let server = serve_fixture("618285049", "uid_618285049.json");

    let output = run_cli(&["618285049", "--json", "--base-url", &server.url()]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("PROFILE INFORMATION"));
    let value: serde_json::Value =
        serde_json::from_str(&stdout).expect("stdout should be a JSON document");
    assert_eq!(value["uid"], "618285049");
    assert_eq!(value["playerInfo"]["nickname"], "Aquabelle");
}
