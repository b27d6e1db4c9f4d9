// Drives the binary's headless replay mode. Config lookups are pointed at a
// temp dir so a developer's saved settings don't leak in.

use assert_cmd::Command;
use std::fs;
use tempfile::tempdir;

fn cmd(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("typestreak").unwrap();
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("TYPESTREAK_LOG");
    cmd
}

#[test]
fn replay_reports_typo_from_custom_wordlist() {
    let dir = tempdir().unwrap();
    let list = dir.path().join("words.txt");
    fs::write(&list, "hello\nworld\n").unwrap();

    let output = cmd(dir.path())
        .arg("--replay")
        .arg("--wordlist")
        .arg(&list)
        .write_stdin("h\nxello\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);

    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["buffer"], "h");
    assert_eq!(first["last_event"], "type");

    let last: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(last["typo_text"], "xello");
    assert_eq!(last["buffer"], "");
    assert_eq!(last["word"]["streak"], 0);
    assert_eq!(last["last_event"], "failureTypo");

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("events type,failureTypo"));
}

#[test]
fn replay_advances_a_level() {
    let dir = tempdir().unwrap();
    let list = dir.path().join("words.txt");
    fs::write(&list, "hello\nworld\n").unwrap();

    let output = cmd(dir.path())
        .args(["--replay", "--streak-mode", "--target-streak", "1", "-w", "1"])
        .arg("--wordlist")
        .arg(&list)
        .args(["--ms-per-line", "200"])
        .write_stdin("h\nhe\nhel\nhell\nhello\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let last: serde_json::Value = serde_json::from_str(stdout.lines().last().unwrap()).unwrap();
    assert_eq!(last["level"], 1);
    assert_eq!(last["last_wpm"], 75);
    assert_eq!(last["last_event"], "streakComplete");

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("level 1 finished false"));
}

#[test]
fn replay_accepts_json_actions() {
    let dir = tempdir().unwrap();
    let output = cmd(dir.path())
        .arg("--replay")
        .write_stdin("{\"type\":\"SET_SHOW_INSTRUCTIONS\",\"payload\":true}\nt\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let last: serde_json::Value = serde_json::from_str(stdout.lines().last().unwrap()).unwrap();
    // gated by the instructions modal
    assert_eq!(last["show_instructions"], true);
    assert_eq!(last["buffer"], "");
}

#[test]
fn save_config_persists_settings() {
    let dir = tempdir().unwrap();
    cmd(dir.path())
        .args(["--replay", "--save-config", "--streak-mode", "-w", "42"])
        .write_stdin("")
        .assert()
        .success();

    let path = dir
        .path()
        .join(".config")
        .join("typestreak")
        .join("config.json");
    let saved: serde_json::Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(saved["streak_mode"], true);
    assert_eq!(saved["target_wpm"], 42);
}

#[test]
fn missing_wordlist_fails() {
    let dir = tempdir().unwrap();
    cmd(dir.path())
        .args(["--replay", "--wordlist"])
        .arg(dir.path().join("nope.txt"))
        .write_stdin("")
        .assert()
        .failure();
}
