/// Relative path of the menu document when none is configured
pub const DEFAULT_MENU_PATH: &str = "./menu.json";

/// Most wedges a roulette wheel shows; longer selections are cut to a prefix
pub const MAX_WEDGES: usize = 8;

/// Length of one spin animation
pub const SPIN_DURATION_MS: u64 = 4000;

/// Full turns the wheel makes before settling, inclusive range
pub const MIN_ROTATIONS: u32 = 4;
pub const MAX_ROTATIONS: u32 = 6;

/// Wedge labels sit at this fraction of the wheel radius
pub const LABEL_RADIUS_RATIO: f64 = 0.65;

/// Value of the roulette filter that selects every category
pub const FILTER_ALL: &str = "all";
