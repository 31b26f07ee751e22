//! Prelude module for convenient imports
//!
//! Use `use drinkmenu_rs::prelude::*;` to import commonly used types

// Catalog
pub use crate::catalog::{
    CatalogStore, Category, Item, MenuDocument, Subcategory, validate_category, validate_document,
};

// Core types
pub use crate::core::{
    CategoryBuilder, CategoryFilter, DrinkCard, DrinkSummary, EngineState, FilterOption,
    FlattenedDrink, ItemBuilder, Layout, MenuBrowser, MenuDocumentBuilder, RouletteResult,
    RouletteSession, SpinAnimation, SpinEngine, SpinHandle, SpinId, SpinOutcome, SpinRandom,
    SpinTrigger, WedgeSet, filter_by_category, filter_options, flatten_all, present,
    resolve_image_src,
};

// Configuration
pub use crate::config::RouletteConfig;

// Sources
pub use crate::source::{FileSource, HttpSource, MemorySource, MenuSource, open_source};

// Error handling
pub use crate::error::{MenuError, Result};
