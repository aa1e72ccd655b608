use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// The binary with a private, nonexistent config file and plain output.
fn nixplat(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("nixplat").unwrap();
    cmd.env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .arg("--config")
        .arg(temp.path().join("config.toml"));
    cmd
}

#[test]
fn test_info_text() {
    let temp = TempDir::new().unwrap();
    nixplat(&temp)
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("Architecture"))
        .stdout(predicate::str::contains("Byte order"));
}

#[test]
fn test_info_json() {
    let temp = TempDir::new().unwrap();
    let output = nixplat(&temp).args(["info", "--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(json["uname"]["sysname"].is_string());
    assert!(json["identification"]["status"].is_string());
    assert_eq!(json["compiled_endianness"], json["runtime_endianness"]);

    #[cfg(target_os = "linux")]
    assert_eq!(json["identification"]["version"]["family"], "linux");
}

#[test]
fn test_info_uses_configured_issue_file() {
    let temp = TempDir::new().unwrap();
    let issue = temp.path().join("issue");
    fs::write(&issue, "Nixplat Test Linux 1.0").unwrap();
    fs::write(
        temp.path().join("config.toml"),
        format!("linux_issue_file = {:?}\n", issue.display().to_string()),
    )
    .unwrap();

    let assert = nixplat(&temp).args(["info", "--format", "json"]).assert().success();
    if cfg!(target_os = "linux") {
        assert.stdout(predicate::str::contains("Nixplat Test Linux 1.0"));
    }
}

#[test]
fn test_exists() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("present.txt");
    fs::write(&file, "hi").unwrap();

    nixplat(&temp)
        .arg("exists")
        .arg(&file)
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("file (file=true, dir=false)"))
        .stdout(predicate::str::contains("directory (file=true, dir=true)"));

    nixplat(&temp)
        .arg("exists")
        .arg(&file)
        .arg(temp.path().join("absent"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("missing"))
        .stderr(predicate::str::contains("1 of 2 path(s) do not exist"));
}

#[test]
fn test_realpath() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("a");
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join("f.txt"), "x").unwrap();

    let expected = fs::canonicalize(dir.join("f.txt")).unwrap();
    nixplat(&temp)
        .arg("realpath")
        .arg(dir.join("..").join("a").join("f.txt"))
        .assert()
        .success()
        .stdout(format!("{}\n", expected.display()));

    nixplat(&temp)
        .arg("realpath")
        .arg(temp.path().join("nope"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("nope"));
}

#[test]
fn test_size() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("data");
    fs::write(&file, vec![7u8; 1234]).unwrap();

    nixplat(&temp).arg("size").arg(&file).assert().success().stdout("1234\n");
    nixplat(&temp).arg("size").arg(temp.path().join("nope")).assert().code(1);
}

#[test]
fn test_palette() {
    let temp = TempDir::new().unwrap();
    nixplat(&temp)
        .arg("palette")
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[1;31mred"))
        .stdout(predicate::str::contains("\x1b[0m"));

    nixplat(&temp)
        .args(["palette", "--background"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[7;1;31mred"));
}

#[test]
fn test_time() {
    let temp = TempDir::new().unwrap();
    nixplat(&temp)
        .args(["time", "--", "sh", "-c", "exit 0"])
        .assert()
        .success()
        .stderr(predicate::str::contains("elapsed:"));

    nixplat(&temp).args(["time", "--", "sh", "-c", "exit 3"]).assert().code(1);
}

#[test]
fn test_invalid_config_is_reported() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("config.toml"), "color = \"sometimes\"").unwrap();

    nixplat(&temp)
        .arg("info")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse config"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_info_strict_on_linux() {
    let temp = TempDir::new().unwrap();
    nixplat(&temp).args(["info", "--strict"]).assert().success();
}
