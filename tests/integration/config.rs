use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn nixplat() -> Command {
    let mut cmd = Command::cargo_bin("nixplat").unwrap();
    cmd.env_remove("RUST_LOG").env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_config_path_honours_flag_and_env() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("custom.toml");

    nixplat()
        .arg("--config")
        .arg(&path)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(format!("{}\n", path.display()));

    nixplat()
        .env("NIXPLAT_CONFIG", &path)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(format!("{}\n", path.display()));
}

#[test]
fn test_config_init_and_show() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("config.toml");

    nixplat()
        .arg("--config")
        .arg(&path)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config at:"));
    assert!(path.exists());

    nixplat()
        .arg("--config")
        .arg(&path)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    nixplat()
        .arg("--config")
        .arg(&path)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("linux_issue_file = \"/etc/issue\""))
        .stdout(predicate::str::contains("color = \"auto\""));
}

#[test]
fn test_config_init_force_replaces_broken_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "not toml at all [").unwrap();

    nixplat().arg("--config").arg(&path).args(["config", "show"]).assert().code(1);

    nixplat()
        .arg("--config")
        .arg(&path)
        .args(["config", "init", "--force"])
        .assert()
        .success();

    nixplat().arg("--config").arg(&path).args(["config", "show"]).assert().success();
}
