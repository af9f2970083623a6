use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn config_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "numbers: [5, 3, 8]\nspeed_ms: 10").unwrap();
    file
}

fn sortviz(config: &NamedTempFile) -> Command {
    let mut cmd = Command::cargo_bin("sortviz").unwrap();
    cmd.arg("--config").arg(config.path());
    cmd
}

#[test]
fn test_parse_prints_command_and_reply() {
    let config = config_file();
    sortviz(&config)
        .args(["parse", "make", "it", "faster"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"action\": \"change_speed\""))
        .stdout(predicate::str::contains("\"speed_ms\": 500"))
        .stdout(predicate::str::contains("Each step now takes 500ms"));
}

#[test]
fn test_steps_uses_config_numbers() {
    let config = config_file();
    sortviz(&config)
        .args(["steps", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"description\":\"Comparing 5 and 3\""))
        .stdout(predicate::str::contains("Sorting complete!"));
}

#[test]
fn test_play_emits_completion() {
    let config = config_file();
    sortviz(&config)
        .args(["play", "2", "1", "--speed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\":\"step_shown\""))
        .stdout(predicate::str::contains("\"type\":\"completed\""));
}

#[test]
fn test_chat_replies_per_line() {
    let config = config_file();
    sortviz(&config)
        .arg("chat")
        .write_stdin("use the numbers 9 4\nhello\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("I'll sort these numbers instead: 9, 4."))
        .stdout(predicate::str::contains("I'm not sure what you'd like to change."));
}

#[test]
fn test_invalid_config_fails() {
    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, "speed_ms: 0").unwrap();
    sortviz(&config)
        .args(["steps"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("speed_ms must be greater than 0"));
}
