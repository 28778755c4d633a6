//! Tests for loading game configuration from TOML files.

use notie_games::{Difficulty, GameConfig, GameMode};
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

#[test]
fn test_load_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "mode = \"pve\"\ndifficulty = \"medium\"\nautomated_delay_ms = 0\nseed = 42"
    )
    .unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.mode(), GameMode::Pve);
    assert_eq!(*config.difficulty(), Difficulty::Medium);
    assert_eq!(config.automated_delay(), Duration::ZERO);
    assert_eq!(*config.seed(), Some(42));
}

#[test]
fn test_empty_file_gives_defaults() {
    let file = NamedTempFile::new().unwrap();
    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_invalid_toml_is_an_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "difficulty = \"impossible\"").unwrap();

    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}
