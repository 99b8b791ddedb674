//! tictactoe - terminal entry point.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use tictactoe::{Cli, GameConfig, logging, tui};
use tictactoe_engine::Game;
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init(&cli.log_file)?;

    let config = GameConfig::load(cli.config.as_deref())?.with_overrides(cli.overrides());
    let [first, second] = config.into_players()?;
    info!(first = %first, second = %second, "Players ready");

    tui::run(Game::new(first, second))
}
