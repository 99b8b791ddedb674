//! Command-line interface for tictactoe.

use crate::config::{ConfigFile, PlayerOverrides};
use clap::Parser;
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictactoe.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Name of the player who moves first
    #[arg(long)]
    pub player_one: Option<String>,

    /// Name of the player who moves second
    #[arg(long)]
    pub player_two: Option<String>,

    /// Marker of the player who moves first
    #[arg(long)]
    pub marker_one: Option<String>,

    /// Marker of the player who moves second
    #[arg(long)]
    pub marker_two: Option<String>,

    /// File that receives log output
    #[arg(long, default_value = "tictactoe.log")]
    pub log_file: PathBuf,
}

impl Cli {
    /// Player settings given on the command line, to layer over the config file.
    pub fn overrides(&self) -> ConfigFile {
        ConfigFile {
            first: PlayerOverrides {
                name: self.player_one.clone(),
                marker: self.marker_one.clone(),
            },
            second: PlayerOverrides {
                name: self.player_two.clone(),
                marker: self.marker_two.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["tictactoe"]).unwrap();
        assert_eq!(cli.config, None);
        assert_eq!(cli.log_file, PathBuf::from("tictactoe.log"));
        assert_eq!(cli.overrides(), ConfigFile::default());
    }

    #[test]
    fn test_overrides_from_flags() {
        let cli = Cli::try_parse_from([
            "tictactoe",
            "--player-one",
            "Ada",
            "--marker-two",
            "@",
            "-c",
            "game.toml",
        ])
        .unwrap();
        let overrides = cli.overrides();
        assert_eq!(overrides.first.name.as_deref(), Some("Ada"));
        assert_eq!(overrides.first.marker, None);
        assert_eq!(overrides.second.marker.as_deref(), Some("@"));
        assert_eq!(cli.config, Some(PathBuf::from("game.toml")));
    }
}
