pub mod cli;
pub mod commands;
pub mod ui;

pub use cli::{Cli, Commands, GlobalArgs};
pub use commands::ListCommand;
pub use commands::SpinCommand;
pub use commands::{run_list, run_spin};
#[cfg(feature = "tui")]
pub use commands::{TuiCommand, run_tui};
