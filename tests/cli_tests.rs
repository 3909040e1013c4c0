//! Smoke tests for the drillflow binary

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn drillflow(workdir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("drillflow").unwrap();
    cmd.current_dir(workdir)
        .env_remove("RUST_LOG")
        .env_remove("DRILLFLOW_API_TOKEN")
        .env_remove("DRILLFLOW__SESSION__USER_ID")
        .env_remove("DRILLFLOW__SESSION__ROLE");
    cmd
}

#[test]
fn test_help_lists_workflow_commands() {
    let dir = tempfile::tempdir().unwrap();
    drillflow(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("assign-surveyor"))
        .stdout(predicate::str::contains("complete-drilling"))
        .stdout(predicate::str::contains("revert"));
}

#[test]
fn test_missing_session_user_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    drillflow(dir.path())
        .args(["--base-url", "http://127.0.0.1:9", "show", "job-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No acting user"));
}

#[tokio::test]
async fn test_show_and_assign_against_mock_backend() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs/job-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "job-1", "status": "created"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "s1", "role": "surveyor", "name": "Amina"},
            {"id": "d1", "role": "driller"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/jobs/job-1/assign-surveyor"))
        .and(body_json(json!({"surveyorId": "s1"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let base_url = server.uri();
    let dir = tempfile::tempdir().unwrap();
    let workdir = dir.path().to_path_buf();

    tokio::task::spawn_blocking(move || {
        drillflow(&workdir)
            .args(["--base-url", base_url.as_str(), "--user-id", "pm-1", "--role", "project_manager"])
            .args(["show", "job-1"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Assign surveyor"))
            .stdout(predicate::str::contains("--surveyor s1"));

        drillflow(&workdir)
            .args(["--base-url", base_url.as_str(), "--user-id", "pm-1", "--role", "project_manager"])
            .args(["assign-surveyor", "job-1", "--surveyor", "s1"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Done"));

        // A driller has nothing to do on a created job; nothing is sent.
        drillflow(&workdir)
            .args(["--base-url", base_url.as_str(), "--user-id", "d1", "--role", "driller"])
            .args(["assign-surveyor", "job-1", "--surveyor", "s1"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("not available"));
    })
    .await
    .unwrap();
}

#[tokio::test]
async fn test_backend_message_reaches_stderr() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs/job-9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "job-9", "status": "completed"})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/jobs/job-9/revert-status"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({"message": "Invoice already issued"})),
        )
        .mount(&server)
        .await;

    let base_url = server.uri();
    let dir = tempfile::tempdir().unwrap();
    let workdir = dir.path().to_path_buf();

    tokio::task::spawn_blocking(move || {
        drillflow(&workdir)
            .args(["--base-url", base_url.as_str(), "--user-id", "a1", "--role", "admin"])
            .args(["revert", "job-9", "--reason", "billing error"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invoice already issued"));
    })
    .await
    .unwrap();
}

#[tokio::test]
async fn test_personnel_listing_ignores_session_role() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "a1", "role": "admin"},
            {"id": "s1", "role": "surveyor", "name": "Amina"},
            {"id": "d1", "role": "driller"}
        ])))
        .mount(&server)
        .await;

    let base_url = server.uri();
    let dir = tempfile::tempdir().unwrap();
    let workdir = dir.path().to_path_buf();

    tokio::task::spawn_blocking(move || {
        // Acting as admin must not narrow the directory to admins.
        drillflow(&workdir)
            .args(["--base-url", base_url.as_str(), "--role", "admin", "personnel"])
            .assert()
            .success()
            .stdout(predicate::str::contains("3 user(s)"))
            .stdout(predicate::str::contains("Amina"))
            .stdout(predicate::str::contains("d1"));

        drillflow(&workdir)
            .args(["--base-url", base_url.as_str(), "personnel", "--only", "surveyor"])
            .assert()
            .success()
            .stdout(predicate::str::contains("1 user(s)"))
            .stdout(predicate::str::contains("s1"))
            .stdout(predicate::str::contains("d1").not());
    })
    .await
    .unwrap();
}

#[tokio::test]
async fn test_negative_depth_shows_form_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs/job-4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "job-4", "status": "drilling"})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let base_url = server.uri();
    let dir = tempfile::tempdir().unwrap();
    let workdir = dir.path().to_path_buf();

    tokio::task::spawn_blocking(move || {
        drillflow(&workdir)
            .args(["--base-url", base_url.as_str(), "--user-id", "a1", "--role", "admin"])
            .args(["complete-drilling", "job-4", "--final-depth", "-5"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Final depth must be greater than zero"));
    })
    .await
    .unwrap();
}
