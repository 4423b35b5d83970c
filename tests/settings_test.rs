//! Tests for loading settings from TOML.

use clap::Parser;
use std::io::Write;
use std::path::Path;
use tictac::{Cli, Settings};

fn write_settings(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write settings");
    file
}

#[test]
fn test_defaults() {
    let settings = Settings::default();
    assert!(!*settings.vs_computer());
    assert_eq!(*settings.computer_delay_ms(), 500);
    assert_eq!(settings.log_file(), Path::new("tictac.log"));
    assert_eq!(settings.log_level(), "info");
}

#[test]
fn test_partial_file_keeps_defaults() {
    let file = write_settings("vs_computer = true\n");
    let settings = Settings::from_file(file.path()).unwrap();

    assert!(*settings.vs_computer());
    assert_eq!(*settings.computer_delay_ms(), 500);
}

#[test]
fn test_full_file() {
    let file = write_settings(
        r#"
vs_computer = true
computer_delay_ms = 0
log_file = "/tmp/tictac-test.log"
log_level = "debug"
"#,
    );
    let settings = Settings::from_file(file.path()).unwrap();

    assert_eq!(*settings.computer_delay_ms(), 0);
    assert_eq!(settings.log_level(), "debug");
    assert_eq!(settings.log_file(), Path::new("/tmp/tictac-test.log"));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Settings::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let file = write_settings("computer_delay_ms = \"soon\"\n");
    let err = Settings::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse"));
}

#[test]
fn test_explicit_path_wins() {
    let file = write_settings("computer_delay_ms = 42\n");
    let settings = Settings::load(Some(file.path())).unwrap();
    assert_eq!(*settings.computer_delay_ms(), 42);
}

#[test]
fn test_overrides() {
    let settings = Settings::default()
        .with_vs_computer(true)
        .with_computer_delay_ms(10);
    assert!(*settings.vs_computer());
    assert_eq!(*settings.computer_delay_ms(), 10);
}

#[test]
fn test_vs_human_flag_overrides_file() {
    let file = write_settings("vs_computer = true\n");
    let settings = Settings::load(Some(file.path())).unwrap();
    let cli = Cli::try_parse_from(["tictac", "play", "--vs-human"]).unwrap();

    let settings = match cli.command.vs_computer_override() {
        Some(vs_computer) => settings.with_vs_computer(vs_computer),
        None => settings,
    };
    assert!(!*settings.vs_computer());
}
