use dashboard_api::config::ScriptConfig;
use dashboard_api::runner::{Launcher, ScriptRunner, StartRequest, run_command};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

// Helper function to create a fake autostart script inside a fresh project root
// Returns both the script path and the tempdir to ensure proper cleanup
fn create_script(body: &str) -> Result<(PathBuf, TempDir), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    std::fs::create_dir_all(dir.path().join("scripts"))?;
    let script_path = dir.path().join("scripts").join("autostart-service.sh");

    let mut file = File::create(&script_path)?;
    file.write_all(format!("#!/bin/bash\n{}\n", body).as_bytes())?;

    Ok((script_path, dir))
}

fn request(service: &str, url: &str) -> StartRequest {
    StartRequest::from_params(Some(service.to_string()), Some(url.to_string())).unwrap()
}

fn bash(script: &str) -> Vec<String> {
    vec!["-c".to_string(), script.to_string()]
}

#[tokio::test]
async fn test_successful_exit_captures_trimmed_output() {
    let outcome = run_command(
        "bash",
        &bash("echo '  hello  '; echo warning >&2"),
        Path::new("."),
        "demo",
    )
    .await;

    assert!(outcome.succeeded);
    assert_eq!(outcome.exit_code, Some(0));
    assert_eq!(outcome.stdout, "hello");
    assert_eq!(outcome.stderr, "warning");
    assert!(outcome.launch_error.is_none());
}

#[tokio::test]
async fn test_non_zero_exit_is_a_failure() {
    let outcome = run_command("bash", &bash("echo partial; exit 4"), Path::new("."), "demo").await;

    assert!(!outcome.succeeded);
    assert_eq!(outcome.exit_code, Some(4));
    assert_eq!(outcome.stdout, "partial");
    assert!(outcome.launch_error.is_none());
}

#[tokio::test]
async fn test_output_is_accumulated_across_chunks() {
    let outcome = run_command(
        "bash",
        &bash("for i in 1 2 3; do echo line$i; sleep 0.05; done"),
        Path::new("."),
        "demo",
    )
    .await;

    assert!(outcome.succeeded);
    assert_eq!(outcome.stdout, "line1\nline2\nline3");
}

#[tokio::test]
async fn test_missing_executable_is_a_launch_error() {
    let outcome = run_command(
        "definitely-not-a-real-interpreter",
        &[],
        Path::new("."),
        "demo",
    )
    .await;

    assert!(!outcome.succeeded);
    assert_eq!(outcome.exit_code, None);
    assert!(outcome.launch_error.is_some());
    assert!(outcome.stdout.is_empty());
}

#[tokio::test]
async fn test_stdin_is_closed() {
    // `read` fails immediately on a closed stdin instead of hanging
    let outcome = run_command(
        "bash",
        &bash("if read -r line; then echo got-input; else echo no-input; fi"),
        Path::new("."),
        "demo",
    )
    .await;

    assert_eq!(outcome.stdout, "no-input");
}

#[tokio::test]
async fn test_killed_process_has_no_exit_code() {
    let outcome = run_command("bash", &bash("kill -9 $$"), Path::new("."), "demo").await;

    assert!(!outcome.succeeded);
    assert_eq!(outcome.exit_code, None);
    assert!(outcome.launch_error.is_none());
}

#[tokio::test]
async fn test_script_runner_passes_contract_arguments() -> Result<(), Box<dyn std::error::Error>> {
    let (_script, dir) = create_script(r#"echo "$1|$2|$3"; pwd"#)?;
    let runner = ScriptRunner::new(ScriptConfig::for_project_root(dir.path()));

    let outcome = runner.run(&request("web", "http://localhost:8080")).await;

    assert!(outcome.succeeded);
    let mut lines = outcome.stdout.lines();
    assert_eq!(lines.next(), Some("start|web|http://localhost:8080"));

    // Runs from the project root
    let cwd = PathBuf::from(lines.next().unwrap_or_default());
    assert_eq!(cwd.canonicalize()?, dir.path().canonicalize()?);

    Ok(())
}

#[tokio::test]
async fn test_script_runner_reports_script_failure() -> Result<(), Box<dyn std::error::Error>> {
    let (_script, dir) = create_script("echo \"cannot start $2\" >&2; exit 2")?;
    let runner = ScriptRunner::new(ScriptConfig::for_project_root(dir.path()));

    let outcome = runner.run(&request("db", "postgres://localhost")).await;

    assert!(!outcome.succeeded);
    assert_eq!(outcome.exit_code, Some(2));
    assert_eq!(outcome.stderr, "cannot start db");

    Ok(())
}

#[tokio::test]
async fn test_script_runner_missing_project_root_is_a_launch_error() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("does-not-exist");
    let runner = ScriptRunner::new(ScriptConfig::for_project_root(&root));

    let outcome = runner.run(&request("web", "http://localhost")).await;

    assert!(!outcome.succeeded);
    assert!(outcome.launch_error.is_some());
}

#[tokio::test]
async fn test_parallel_invocations_run_independently() -> Result<(), Box<dyn std::error::Error>> {
    let (_script, dir) = create_script("sleep 0.5; echo \"$2 up\"")?;
    let runner = ScriptRunner::new(ScriptConfig::for_project_root(dir.path()));

    let first = request("web", "http://localhost:1");
    let second = request("worker", "http://localhost:2");

    let started = std::time::Instant::now();
    let (web, worker) = tokio::join!(runner.run(&first), runner.run(&second));

    assert_eq!(web.stdout, "web up");
    assert_eq!(worker.stdout, "worker up");
    // Sequential execution would take at least a second
    assert!(started.elapsed() < std::time::Duration::from_millis(950));

    Ok(())
}
