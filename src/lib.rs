pub mod catalog;
pub mod config;
pub mod core;
pub mod error;
pub mod source;
pub mod prelude;

// Re-export commonly used types
pub use crate::catalog::{CatalogStore, Category, Item, MenuDocument, Subcategory, validate_document};
pub use crate::config::RouletteConfig;
pub use crate::core::{
    CategoryFilter, DrinkSummary, FlattenedDrink, MenuBrowser, RouletteResult, RouletteSession,
    SpinEngine, SpinOutcome, WedgeSet, filter_by_category, flatten_all, present,
};
pub use crate::error::{MenuError, Result};
pub use crate::source::{FileSource, HttpSource, MemorySource, MenuSource, open_source};

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "tui")]
pub mod tui;
