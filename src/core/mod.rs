pub mod aggregator;
pub mod browser;
pub mod builders;
pub mod constants;
pub mod easing;
pub mod presenter;
pub mod session;
pub mod spin;
pub mod wheel;

pub use aggregator::{
    CategoryFilter, FilterOption, FlattenedDrink, filter_by_category, filter_options, flatten_all,
};
pub use browser::{MenuBrowser, Tab};
pub use builders::{CategoryBuilder, ItemBuilder, MenuDocumentBuilder};
pub use easing::{CubicBezier, SPIN_EASE_OUT};
pub use presenter::{DrinkCard, DrinkSummary, Layout, entrance_delay, present, resolve_image_src};
pub use session::{RouletteResult, RouletteSession};
pub use spin::{
    EngineState, ScriptedRandom, SpinAnimation, SpinEngine, SpinHandle, SpinId, SpinOutcome,
    SpinRandom, SpinTrigger, ThreadRandom, draw_outcome,
};
pub use wheel::{PALETTE, Point, Rgb, Wedge, WedgeSet, wedge_color};
