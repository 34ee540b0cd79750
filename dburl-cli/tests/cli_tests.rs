//! Integration tests for the dburl CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get the dburl binary with a clean descriptor environment
#[allow(deprecated)]
fn dburl_cmd() -> Command {
    let mut cmd = Command::cargo_bin("dburl").unwrap();
    cmd.env_remove("DATABASE_URL")
        .env_remove("DBURL_DEBUG")
        .env_remove("DBURL_LOG_LEVEL");
    cmd
}

#[test]
fn test_help_command() {
    dburl_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: dburl"))
        .stdout(predicate::str::contains("parse"))
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn test_version_command() {
    dburl_cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("Version"))
        .stdout(predicate::str::contains("sqlite, sqlite3"))
        .stdout(predicate::str::contains("DATABASE_URL"));
}

#[test]
fn test_render_postgres_argument() {
    dburl_cmd()
        .args(["render", "postgres://U:P@H:5432/N"])
        .assert()
        .success()
        .stdout("host=H port=5432 user=U password=P dbname=N sslmode=disable\n");
}

#[test]
fn test_render_mssql_from_default_env() {
    dburl_cmd()
        .env("DATABASE_URL", "mssql://U:P@H:1433/N")
        .arg("render")
        .assert()
        .success()
        .stdout("sqlserver://U:P@H:1433?database=N\n");
}

#[test]
fn test_render_sqlite_from_named_env() {
    dburl_cmd()
        .env("DB_URL", "sqlite3:///some/path/to/database.db")
        .args(["render", "--env", "DB_URL"])
        .assert()
        .success()
        .stdout("/some/path/to/database.db\n");
}

#[test]
fn test_missing_env_fails() {
    dburl_cmd()
        .args(["render", "--env", "DB_URL_XYZ"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not found"))
        .stderr(predicate::str::contains("DB_URL_XYZ"));
}

#[test]
fn test_unsupported_engine_fails() {
    dburl_cmd()
        .args(["check", "unsupported://x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported"));
}

#[test]
fn test_password_with_delimiter_fails() {
    dburl_cmd()
        .args(["check", "mssql://USER:PASS/WORD@HOST:1433/NAME"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be parsed"));
}

#[test]
fn test_descriptor_error_shows_help() {
    dburl_cmd()
        .args(["render", "postgres://u:p@h:1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("help:"))
        .stderr(predicate::str::contains(
            "expected <dialect>://user:password@host:port/dbname",
        ));
}

#[test]
fn test_config_error_has_no_descriptor_help() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("dburl.toml"), "[source\n").unwrap();

    dburl_cmd()
        .current_dir(temp_dir.path())
        .args(["check", "sqlite://:memory:"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("help:").not());
}

#[test]
fn test_check_valid() {
    dburl_cmd()
        .args(["check", "sqlite://:memory:"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Descriptor is valid (sqlite)"));
}

#[test]
fn test_parse_masks_password() {
    dburl_cmd()
        .args(["parse", "postgres://app:hunter2@db:5432/main"])
        .assert()
        .success()
        .stdout(predicate::str::contains("postgres"))
        .stdout(predicate::str::contains("5432"))
        .stdout(predicate::str::contains("hunter2").not());
}

#[test]
fn test_parse_json() {
    let output = dburl_cmd()
        .args(["parse", "--json", "--show-password", "mssql://U:P@H:1433/N"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["dialect"], "mssql");
    assert_eq!(value["host"], "H");
    assert_eq!(value["port"], 1433);
    assert_eq!(value["password"], "P");
    assert!(value.get("path").is_none());
}

#[test]
fn test_strict_port_rejected() {
    dburl_cmd()
        .args(["render", "postgres://U:P@H:pg/N"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid port"));
}

#[test]
fn test_lenient_port_flag() {
    dburl_cmd()
        .args(["render", "--lenient-port", "postgres://U:P@H:pg/N"])
        .assert()
        .success()
        .stdout(predicate::str::contains("port=0"));
}

#[test]
fn test_config_file_in_working_directory() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("dburl.toml"),
        "[source]\nenv = \"APP_DB\"\n\n[parse]\nport_policy = \"lenient\"\n",
    )
    .unwrap();

    dburl_cmd()
        .current_dir(temp_dir.path())
        .env("APP_DB", "mssql://U:P@H:port/N")
        .arg("render")
        .assert()
        .success()
        .stdout("sqlserver://U:P@H:0?database=N\n");
}

#[test]
fn test_explicit_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("custom.toml");
    fs::write(&config_path, "[source]\nenv = \"OTHER_DB\"\n").unwrap();

    dburl_cmd()
        .env("OTHER_DB", "sqlite://:memory:")
        .args(["render", "--config", config_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(":memory:\n");
}

#[test]
fn test_invalid_config_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("dburl.toml"), "[source\n").unwrap();

    dburl_cmd()
        .current_dir(temp_dir.path())
        .args(["check", "sqlite://:memory:"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}
