//! Tests for loading the TOML configuration.

use std::io::Write;
use tictactoe_cli::config::ConsoleConfig;
use tictactoe_cli::mode::GameMode;
use tictactoe_engine::Player;

#[test]
fn test_load_full_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
mode = "vs-computer"
computer_mark = "X"
think_ms = 0
seed = 42
"#
    )
    .unwrap();

    let config = ConsoleConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.mode(), GameMode::VsComputer);
    assert_eq!(*config.computer_mark(), Player::X);
    assert_eq!(*config.think_ms(), 0);
    assert_eq!(*config.seed(), Some(42));
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = ConsoleConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, ConsoleConfig::default());
}

#[test]
fn test_invalid_config_reports_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "mode = \"solitaire\"").unwrap();

    let err = ConsoleConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}
