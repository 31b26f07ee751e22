#[cfg(feature = "tui")]
use crate::cli::commands::TuiCommand;
use crate::cli::commands::{ListCommand, SpinCommand};
use crate::config::RouletteConfig;
use crate::core::constants::{DEFAULT_MENU_PATH, MAX_WEDGES, SPIN_DURATION_MS};
use clap::{Args, Parser, Subcommand};
use std::time::Duration;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(about = "Drinks menu browser with a roulette picker", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    List(ListCommand),
    Spin(SpinCommand),
    #[cfg(feature = "tui")]
    Tui(TuiCommand),
}

/// Options shared by every command
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Menu JSON file or http(s) URL
    #[arg(short, long, global = true, env = "DRINKMENU_SOURCE", default_value = DEFAULT_MENU_PATH)]
    pub menu: String,

    /// Spin animation length in milliseconds
    #[arg(long, global = true, env = "DRINKMENU_SPIN_MS", default_value_t = SPIN_DURATION_MS)]
    pub spin_ms: u64,

    /// Most drinks shown on the wheel
    #[arg(long, global = true, env = "DRINKMENU_MAX_WEDGES", default_value_t = MAX_WEDGES)]
    pub max_wedges: usize,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl GlobalArgs {
    pub fn roulette_config(&self) -> RouletteConfig {
        RouletteConfig::default()
            .max_wedges(self.max_wedges)
            .spin_duration(Duration::from_millis(self.spin_ms))
    }

    pub fn log_level(&self) -> Level {
        match (self.quiet, self.verbose) {
            (true, _) => Level::ERROR,
            (false, 0) => Level::WARN,
            (false, 1) => Level::DEBUG,
            (false, _) => Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["drinkmenu", "list"]).unwrap();

        assert_eq!(cli.global.menu, "./menu.json");
        assert_eq!(cli.global.log_level(), Level::WARN);
        let config = cli.global.roulette_config();
        assert_eq!(config.max_wedges, 8);
        assert_eq!(config.spin_duration, Duration::from_millis(4000));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "drinkmenu",
            "spin",
            "--category",
            "tea",
            "--menu",
            "https://example.com/menu.json",
            "--spin-ms",
            "0",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.global.menu, "https://example.com/menu.json");
        assert_eq!(cli.global.roulette_config().spin_duration, Duration::ZERO);
        assert_eq!(cli.global.log_level(), Level::TRACE);
        assert!(matches!(cli.command, Commands::Spin(ref cmd) if cmd.category.as_deref() == Some("tea")));
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["drinkmenu", "list", "-v", "-q"]).is_err());
    }
}
