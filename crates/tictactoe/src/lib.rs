//! Two-player tic-tac-toe in the terminal.
//!
//! # Architecture
//!
//! - **Engine**: board, players and rules live in `tictactoe_engine`
//! - **Config**: player names and markers from TOML plus CLI overrides
//! - **TUI**: a [`DisplayManager`](tui::DisplayManager) owns the game, turns
//!   keys and mouse clicks into moves, and is rendered with ratatui

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod logging;
pub mod tui;

pub use cli::Cli;
pub use config::{ConfigError, ConfigFile, GameConfig, PlayerOverrides, PlayerSettings};
pub use tui::{DisplayManager, Flow};
