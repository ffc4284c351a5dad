//! Tests for loading GameConfig from disk.

use std::io::Write;
use std::path::PathBuf;
use strictly_connect::GameConfig;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes()).expect("Failed to write config");
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config(
        r#"
num_players = 3
rows = 6
columns = 7
win_length = 4
log_filter = "debug"
log_path = "connect.log"
"#,
    );

    let config = GameConfig::from_file(file.path()).expect("valid config");
    assert_eq!(*config.num_players(), 3);
    assert_eq!(*config.rows(), 6);
    assert_eq!(*config.columns(), 7);
    assert_eq!(config.log_filter(), "debug");
    assert_eq!(config.log_path(), &Some(PathBuf::from("connect.log")));
}

#[test]
fn test_empty_file_yields_defaults() {
    let file = write_config("");
    let config = GameConfig::from_file(file.path()).expect("valid config");
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_missing_file_reports_read_error() {
    let err = GameConfig::from_file("/definitely/not/here.toml").unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_invalid_values_rejected() {
    let file = write_config("rows = 0\n");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("at least one row"));

    let file = write_config("rows = \"four\"\n");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}
