use std::io::Write;
use std::process::Command;

fn binary() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_logtail-console"));
    command.env("RUST_LOG", "error");
    command
}

#[test]
fn cli_mode_with_config_and_dry_run_works() {
    let config_path = format!("{}/demos/console.yaml", env!("CARGO_MANIFEST_DIR"));

    let output = binary()
        .arg("--config")
        .arg(config_path)
        .arg("--dry-run")
        .output()
        .expect("Failed to start logtail-console binary");

    assert!(
        output.status.success(),
        "Process exited with non-zero status: {}\nStdout: {}\nStderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn dry_run_rejects_zero_poll_interval() {
    let mut file = tempfile_in_target("zero_poll.yaml");
    writeln!(file.1, "poll_interval_secs: 0").expect("write config");

    let output = binary()
        .arg("--config")
        .arg(&file.0)
        .arg("--dry-run")
        .output()
        .expect("Failed to start logtail-console binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("poll_interval_secs"), "stderr: {stderr}");
}

#[test]
fn base_url_override_is_validated() {
    let config_path = format!("{}/demos/console.yaml", env!("CARGO_MANIFEST_DIR"));

    let output = binary()
        .args(["--config", &config_path, "--base-url", "not a url", "--dry-run", "tail"])
        .output()
        .expect("Failed to start logtail-console binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid base_url"), "stderr: {stderr}");
}

fn tempfile_in_target(name: &str) -> (std::path::PathBuf, std::fs::File) {
    let dir = std::path::Path::new(env!("CARGO_TARGET_TMPDIR"));
    let path = dir.join(name);
    let file = std::fs::File::create(&path).expect("create config");
    (path, file)
}
