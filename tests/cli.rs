use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn zentimer(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("zentimer").unwrap();
    cmd.env("HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("ZENTIMER_SERVER")
        .env_remove("ZENTIMER_DEBUG_LOG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_lists_commands() {
    let home = TempDir::new().unwrap();
    zentimer(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("settings"))
        .stdout(predicate::str::contains("history"));
}

#[test]
fn settings_show_defaults() {
    let home = TempDir::new().unwrap();
    zentimer(&home)
        .args(["-o", "json", "settings", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"focus_duration\": 25"))
        .stdout(predicate::str::contains("\"sessions_until_long_break\": 4"));
}

#[test]
fn settings_set_persists() {
    let home = TempDir::new().unwrap();
    zentimer(&home)
        .args(["settings", "set", "--focus", "30", "--auto-start-breaks", "true"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings saved!"));

    zentimer(&home)
        .args(["-o", "json", "settings", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"focus_duration\": 30"))
        .stdout(predicate::str::contains("\"auto_start_breaks\": true"));
}

#[test]
fn settings_set_rejects_zero() {
    let home = TempDir::new().unwrap();
    zentimer(&home)
        .args(["settings", "set", "--long-break", "0"])
        .assert()
        .failure();
}

#[test]
fn log_then_history() {
    let home = TempDir::new().unwrap();
    zentimer(&home)
        .args(["log", "--type", "focus", "--minutes", "25", "--notes", "draft"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged"));

    zentimer(&home)
        .args(["-o", "json", "history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\": 1"))
        .stdout(predicate::str::contains("\"notes\": \"draft\""));
}

#[test]
fn stats_counts_logged_focus() {
    let home = TempDir::new().unwrap();
    zentimer(&home)
        .args(["log", "--minutes", "25"])
        .assert()
        .success();

    zentimer(&home)
        .args(["-o", "json", "stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"pomodoro_count\": 1"))
        .stdout(predicate::str::contains("\"focus_minutes\": 25"));
}

#[test]
fn stats_unsupported_on_remote() {
    let home = TempDir::new().unwrap();
    zentimer(&home)
        .args(["stats", "--backend", "remote"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not supported"));
}

#[test]
fn unreachable_server_is_an_error() {
    let home = TempDir::new().unwrap();
    zentimer(&home)
        .args(["settings", "show", "--server", "http://127.0.0.1:9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn completions_bash() {
    let home = TempDir::new().unwrap();
    zentimer(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("zentimer"));
}

#[test]
fn invalid_config_is_reported() {
    let home = TempDir::new().unwrap();
    let root = home.path().join(".zentimer");
    std::fs::create_dir_all(&root).unwrap();
    std::fs::write(root.join("config.yaml"), "timer:\n  focus_duration: 0\n").unwrap();

    zentimer(&home)
        .args(["settings", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("focus_duration"));
}
