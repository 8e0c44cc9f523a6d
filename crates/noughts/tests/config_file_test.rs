//! Loading session config from disk.

use noughts::{GameMode, SessionConfig};
use noughts_rules::Player;
use std::io::Write;

#[test]
fn test_loads_toml_file() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    writeln!(
        file,
        r#"
mode = "player-vs-computer"
user_name = "Grace"
computer_name = "HAL"
computer_mark = "X"
move_delay_ms = 250
"#
    )
    .unwrap();

    let config = SessionConfig::from_file(file.path()).expect("config should load");

    assert_eq!(*config.mode(), GameMode::PlayerVsComputer);
    assert_eq!(config.user_name(), "Grace");
    assert_eq!(config.computer_name(), "HAL");
    assert_eq!(*config.computer_mark(), Player::X);
    assert_eq!(*config.move_delay_ms(), 250);
    assert_eq!(config.player_one(), "Player 1");
}

#[test]
fn test_empty_file_gives_defaults() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let config = SessionConfig::from_file(file.path()).unwrap();
    assert_eq!(config, SessionConfig::default());
}

#[test]
fn test_missing_file_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = SessionConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
    assert!(err.to_string().starts_with("Config error:"));
}
