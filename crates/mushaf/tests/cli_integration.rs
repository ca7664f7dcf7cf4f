//! CLI integration tests for the mushaf command-line interface.
//!
//! Every invocation runs with an empty config directory and working directory
//! and with the `QURAN_*` variables cleared, so the host environment never
//! leaks in.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Get an isolated command for the mushaf binary.
fn mushaf(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mushaf").unwrap();
    cmd.current_dir(home.path())
        .env("MUSHAF_CONFIG_DIR", home.path())
        .env_remove("QURAN_CLIENT_ID")
        .env_remove("QURAN_CLIENT_SECRET")
        .env_remove("QURAN_API_AUTH_URL")
        .env_remove("QURAN_API_BASE_URL");
    cmd
}

// ─────────────────────────────────────────────────────────────────────────────
// Help and Version Tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_help_lists_subcommands() {
    let home = TempDir::new().unwrap();
    mushaf(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("chapters"))
        .stdout(predicate::str::contains("verses"))
        .stdout(predicate::str::contains("verse"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("serve"));
}

#[test]
fn test_version_displays() {
    let home = TempDir::new().unwrap();
    mushaf(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mushaf"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Argument Validation
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_verses_requires_chapter() {
    let home = TempDir::new().unwrap();
    mushaf(&home).arg("verses").assert().failure();
}

#[test]
fn test_verses_rejects_zero_page() {
    let home = TempDir::new().unwrap();
    mushaf(&home)
        .args(["verses", "1", "--page", "0"])
        .assert()
        .failure();
}

#[test]
fn test_verses_rejects_non_numeric_chapter() {
    let home = TempDir::new().unwrap();
    mushaf(&home).args(["verses", "baqarah"]).assert().failure();
}

#[test]
fn test_search_rejects_empty_query() {
    let home = TempDir::new().unwrap();
    mushaf(&home)
        .args(["search", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("search query must not be empty"));
}

#[test]
fn test_serve_rejects_bad_bind() {
    let home = TempDir::new().unwrap();
    mushaf(&home)
        .args(["serve", "--bind", "not-an-address"])
        .assert()
        .failure();
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_missing_credentials_are_reported() {
    let home = TempDir::new().unwrap();
    mushaf(&home)
        .arg("chapters")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "QURAN_CLIENT_ID and QURAN_CLIENT_SECRET must be set",
        ));
}

#[test]
fn test_plaintext_secret_warning() {
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join("config.toml"),
        "[auth]\nclient_secret = \"hunter2\"\n",
    )
    .unwrap();

    mushaf(&home)
        .arg("chapters")
        .assert()
        .failure()
        .stderr(predicate::str::contains("plaintext"))
        .stderr(predicate::str::contains("client id is not set"));
}

#[test]
fn test_invalid_base_url_is_rejected() {
    let home = TempDir::new().unwrap();
    mushaf(&home)
        .env("QURAN_API_BASE_URL", "ftp://example.com")
        .arg("chapters")
        .assert()
        .failure()
        .stderr(predicate::str::contains("api.base_url"));
}

// ─────────────────────────────────────────────────────────────────────────────
// End to End
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_chapters_json_against_mock_api() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "cli-token",
            "token_type": "bearer",
            "expires_in": 3600,
            "scope": "content"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/content/api/v4/chapters"))
        .and(header("x-auth-token", "cli-token"))
        .and(header("x-client-id", "cli-client"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "chapters": [{
                "id": 1,
                "revelation_place": "makkah",
                "revelation_order": 5,
                "bismillah_pre": false,
                "name_simple": "Al-Fatihah",
                "name_complex": "Al-Fātiĥah",
                "name_arabic": "الفاتحة",
                "verses_count": 7,
                "pages": [1, 1],
                "translated_name": { "language_name": "english", "name": "The Opener" }
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    let output = mushaf(&home)
        .env("QURAN_CLIENT_ID", "cli-client")
        .env("QURAN_CLIENT_SECRET", "cli-secret")
        .env("QURAN_API_AUTH_URL", format!("{}/oauth2/token", server.uri()))
        .env("QURAN_API_BASE_URL", format!("{}/content/api/v4", server.uri()))
        .args(["--json", "chapters"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let body: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(body["chapters"][0]["name_simple"], "Al-Fatihah");
}
