use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

use mk_test_example::lint_tree;

fn temp_dir(name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time should move forward")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("check-globals-cli-{}-{}", name, nanos));
    fs::create_dir_all(&dir).expect("temp dir should be created");
    dir
}

#[cfg(unix)]
#[test]
fn reports_linter_output_for_non_excluded_files() {
    let dir = temp_dir("report");
    let config = dir.join("config.json");
    let report = dir.join("globals.txt");
    fs::write(
        &config,
        r#"{"config":{"exclude":["libs"],"command":{"program":"sh","args":["-c","echo \"checked $(basename \"$LUAFILE\")\""]}}}"#,
    )
    .expect("config should be written");

    let output = Command::new(env!("CARGO_BIN_EXE_check-globals"))
        .arg("--config")
        .arg(&config)
        .arg("--folder")
        .arg(lint_tree())
        .arg("--output")
        .arg(&report)
        .output()
        .expect("cli should execute");

    assert!(
        output.status.success(),
        "stderr:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        fs::read_to_string(&report).expect("report should exist"),
        "checked addon.lua\n\nchecked options.lua\n\n"
    );
}

#[test]
fn missing_folder_fails_with_walk_error() {
    let dir = temp_dir("missing");
    let output = Command::new(env!("CARGO_BIN_EXE_check-globals"))
        .arg("--config")
        .arg(dir.join("absent.json"))
        .arg("--folder")
        .arg(dir.join("no-such-folder"))
        .arg("--output")
        .arg(dir.join("report.txt"))
        .output()
        .expect("cli should execute");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("error[LINT_WALK]"));
}

#[test]
fn missing_config_without_flags_fails() {
    let dir = temp_dir("no-config");
    let output = Command::new(env!("CARGO_BIN_EXE_check-globals"))
        .arg("--config")
        .arg(dir.join("absent.json"))
        .output()
        .expect("cli should execute");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("error[CONFIG_READ]"));
}
