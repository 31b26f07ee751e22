pub mod list;
pub mod spin;
#[cfg(feature = "tui")]
pub mod tui;

pub use list::ListCommand;
pub use spin::SpinCommand;
#[cfg(feature = "tui")]
pub use tui::TuiCommand;

pub use list::execute as run_list;
pub use spin::execute as run_spin;
#[cfg(feature = "tui")]
pub use tui::execute as run_tui;

use crate::catalog::{CatalogStore, MenuDocument};
use crate::source::open_source;
use std::sync::Arc;

/// Load the menu named by `--menu`
pub(crate) async fn load_menu(location: &str) -> anyhow::Result<Arc<MenuDocument>> {
    let source = open_source(location);
    let mut store = CatalogStore::new();
    store
        .load(source.as_ref())
        .await
        .map_err(|e| anyhow::anyhow!("Could not load menu from {}: {}", source.describe(), e))
}
