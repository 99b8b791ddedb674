//! Tests for loading configuration files and layering CLI overrides.

use clap::Parser;
use std::io::Write;
use tictactoe::{Cli, GameConfig};
use tictactoe_engine::Player;

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_from_file() {
    let file = write_config(
        r#"
[first]
name = "Ada"
marker = "A"

[second]
name = "Bob"
marker = "B"
"#,
    );
    let config = GameConfig::load(Some(file.path())).unwrap();
    let players = config.into_players().unwrap();
    assert_eq!(players, [Player::new("Ada", 'A'), Player::new("Bob", 'B')]);
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let file = write_config("[first\nname = ");
    assert!(GameConfig::from_file(file.path()).is_err());
}

#[test]
fn test_cli_overrides_file() {
    let file = write_config("[first]\nname = \"Ada\"\nmarker = \"A\"\n");
    let path = file.path().to_string_lossy().into_owned();
    let cli = Cli::try_parse_from([
        "tictactoe",
        "--config",
        path.as_str(),
        "--player-one",
        "Grace",
        "--marker-two",
        "Z",
    ])
    .unwrap();

    let config = GameConfig::load(cli.config.as_deref())
        .unwrap()
        .with_overrides(cli.overrides());
    let [first, second] = config.into_players().unwrap();
    assert_eq!(first, Player::new("Grace", 'A'));
    assert_eq!(second, Player::new("Player 2", 'Z'));
}

#[test]
fn test_cli_marker_clash_is_rejected() {
    let cli = Cli::try_parse_from(["tictactoe", "--marker-one", "O"]).unwrap();
    let config = GameConfig::default().with_overrides(cli.overrides());
    assert!(config.into_players().is_err());
}
