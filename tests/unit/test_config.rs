//! Unit tests for config loading from disk

use roastgen::config::Config;
use roastgen::output::OutputFormat;
use roastgen::RoastError;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_explicit_file() {
    let file = write_config("filtered = true\ncolor = false\nseed = 3\n");
    let config = Config::from_file(file.path()).unwrap();
    assert!(config.filtered);
    assert!(!config.color);
    assert_eq!(config.seed, Some(3));
    assert_eq!(config.format, OutputFormat::Text);
}

#[test]
fn test_load_json_format() {
    let file = write_config("format = \"json\"\n");
    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.format, OutputFormat::Json);
}

#[test]
fn test_missing_explicit_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    let err = Config::from_file(&missing).unwrap_err();
    assert!(matches!(err, RoastError::Config(_)));
}

#[test]
fn test_malformed_file_is_config_error() {
    let file = write_config("filtered = [\n");
    let err = Config::from_file(file.path()).unwrap_err();
    match err {
        RoastError::Config(msg) => assert!(msg.contains(&file.path().display().to_string())),
        other => panic!("expected config error, got {:?}", other),
    }
}

#[test]
fn test_unknown_format_is_config_error() {
    let file = write_config("format = \"yaml\"\n");
    assert!(Config::from_file(file.path()).is_err());
}
