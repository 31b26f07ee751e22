//! TUI command for the interactive menu browser.

use crate::cli::GlobalArgs;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "tui", about = "Browse the menu and spin the roulette interactively")]
pub struct TuiCommand {}

pub async fn execute(_command: TuiCommand, global: &GlobalArgs) -> anyhow::Result<()> {
    crate::tui::run_tui(global.menu.clone(), global.roulette_config())
        .await
        .map_err(|e| anyhow::anyhow!("TUI error: {}", e))
}
