// tests/integration_test.rs
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const COMPARE_PATH: &str = "/repos/foo/bar/compare/abcdef123456...123456abcdef";

/// Run the binary in `dir` with a private config directory, feeding `stdin`.
fn run_gomod_bump(dir: &Path, args: &[&str], api_base: &str, stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_gomod-bump"))
        .args(args)
        .current_dir(dir)
        .env("XDG_CONFIG_HOME", dir)
        .env("GOMOD_BUMP_API_BASE", api_base)
        .env_remove("GOMOD_BUMP_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn gomod-bump");

    // the process may exit before reading stdin (usage errors), so a broken pipe is fine
    if let Some(mut pipe) = child.stdin.take() {
        let _ = pipe.write_all(stdin.as_bytes());
    }

    child.wait_with_output().expect("Failed to wait for gomod-bump")
}

async fn run_blocking(args: Vec<&'static str>, api_base: String, stdin: String) -> Output {
    tokio::task::spawn_blocking(move || {
        let dir = TempDir::new().unwrap();
        run_gomod_bump(dir.path(), &args, &api_base, &stdin)
    })
    .await
    .unwrap()
}

fn fixture_diff() -> String {
    std::fs::read_to_string("tests/fixtures/bump.diff").unwrap()
}

#[test]
fn test_gomod_bump_help() {
    let dir = TempDir::new().unwrap();
    let output = run_gomod_bump(dir.path(), &["--help"], "http://127.0.0.1:9", "");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("gomod-bump"));
    assert!(stdout.contains("<OWNER>"));
    assert!(stdout.contains("<PROJECT>"));
}

#[test]
fn test_gomod_bump_version() {
    let dir = TempDir::new().unwrap();
    let output = run_gomod_bump(dir.path(), &["--version"], "http://127.0.0.1:9", "");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[tokio::test]
async fn test_wrong_arity_prints_usage_and_exits_one() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    for args in [vec!["foo"], vec![], vec!["foo", "bar", "baz"]] {
        let output = run_blocking(args, server.uri(), fixture_diff()).await;

        assert_eq!(output.status.code(), Some(1));
        assert!(output.stdout.is_empty());
        let stderr = String::from_utf8(output.stderr).unwrap();
        assert!(stderr.contains("Usage"), "stderr was: {}", stderr);
    }
}

#[tokio::test]
async fn test_invalid_owner_is_rejected_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let output = run_blocking(
        vec!["--stdin", "foo;id", "bar"],
        server.uri(),
        fixture_diff(),
    )
    .await;

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("invalid arguments"));
}

#[tokio::test]
async fn test_stdin_pipeline_prints_report() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(COMPARE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "commits": [
                {"sha": "deadbeef", "commit": {"message": "Fix bug\nDetails here"}},
                {"sha": "cafebabe", "commit": {"message": "Add feature"}}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_blocking(vec!["--stdin", "foo", "bar"], server.uri(), fixture_diff()).await;

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        "Bump github.com/foo/bar\n\
         \n\
         abcdef123456 -> 123456abcdef\n\
         \n\
         Commits:\n  - deadbeef\n    Fix bug\n\n  - cafebabe\n    Add feature\n\n"
    );
}

#[tokio::test]
async fn test_stdin_pipeline_without_commits() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(COMPARE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "commits": []
        })))
        .mount(&server)
        .await;

    let output = run_blocking(vec!["--stdin", "foo", "bar"], server.uri(), fixture_diff()).await;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.ends_with("Commits:\n\n"));
}

#[tokio::test]
async fn test_http_error_prints_nothing_on_stdout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(COMPARE_PATH))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "message": "Not Found"
        })))
        .mount(&server)
        .await;

    let output = run_blocking(vec!["--stdin", "foo", "bar"], server.uri(), fixture_diff()).await;

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("404"));
}

#[tokio::test]
async fn test_missing_dependency_reports_old_phase() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let output = run_blocking(vec!["--stdin", "foo", "qux"], server.uri(), fixture_diff()).await;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("error checking old version in diff"));
    assert!(stderr.contains("version information not found"));
}

#[tokio::test]
async fn test_staged_manifest_pipeline() {
    use git2::{Repository, Signature};

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(COMPARE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "commits": [{"sha": "deadbeef", "commit": {"message": "Fix bug"}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api_base = server.uri();
    let output = tokio::task::spawn_blocking(move || {
        let dir = TempDir::new().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        let go_mod = dir.path().join("go.mod");

        std::fs::write(
            &go_mod,
            "module m\n\nrequire (\n\tgithub.com/foo/bar v0.0.0-20210101000000-abcdef123456\n)\n",
        )
        .unwrap();
        let mut index = repo.index().unwrap();
        index.add_path(Path::new("go.mod")).unwrap();
        index.write().unwrap();
        let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();
        let sig = Signature::now("Test", "test@example.com").unwrap();
        repo.commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[])
            .unwrap();

        std::fs::write(
            &go_mod,
            "module m\n\nrequire (\n\tgithub.com/foo/bar v0.0.0-20210202000000-123456abcdef\n)\n",
        )
        .unwrap();
        index.add_path(Path::new("go.mod")).unwrap();
        index.write().unwrap();

        run_gomod_bump(dir.path(), &["foo", "bar"], &api_base, "")
    })
    .await
    .unwrap();

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Bump github.com/foo/bar\n\nabcdef123456 -> 123456abcdef\n"));
    assert!(stdout.contains("  - deadbeef\n    Fix bug\n"));
}
