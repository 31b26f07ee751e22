use crate::catalog::Item;
use crate::core::aggregator::FlattenedDrink;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Heading shown above a roulette result
pub const RESULT_HEADLINE: &str = "🎉 Congratulations! You got";

const IMAGE_DIR: &str = "./images/";

/// Display payload for the drink the roulette picked
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DrinkSummary {
    pub headline: String,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    /// "Category > Subcategory", or just "Category"
    pub breadcrumb: String,
    pub image: String,
}

impl fmt::Display for DrinkSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.headline)?;
        writeln!(f, "{}", self.name)?;
        if !self.description.is_empty() {
            writeln!(f, "{}", self.description)?;
        }
        if !self.tags.is_empty() {
            writeln!(f, "[{}]", self.tags.join("] ["))?;
        }
        write!(f, "{}", self.breadcrumb)
    }
}

/// Build the result payload for `drink`
pub fn present(drink: &FlattenedDrink) -> DrinkSummary {
    DrinkSummary {
        headline: RESULT_HEADLINE.to_string(),
        name: drink.item.name.clone(),
        description: drink.item.description.clone(),
        tags: drink.item.tags().to_vec(),
        breadcrumb: breadcrumb(&drink.category_name, drink.subcategory_name.as_deref()),
        image: resolve_image_src(&drink.item.image),
    }
}

fn breadcrumb(category: &str, subcategory: Option<&str>) -> String {
    match subcategory {
        Some(sub) => format!("{category} > {sub}"),
        None => category.to_string(),
    }
}

/// Where an item image is loaded from.
///
/// Paths already under `images/` and absolute URLs are kept; any other
/// relative name is looked up in `./images/`. An empty path stays empty.
pub fn resolve_image_src(path: &str) -> String {
    if path.is_empty()
        || path.starts_with(IMAGE_DIR)
        || path.starts_with("images/")
        || path.starts_with("http")
        || path.starts_with("//")
    {
        path.to_string()
    } else {
        format!("{IMAGE_DIR}{path}")
    }
}

/// Viewport class driving the card entrance schedule
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Layout {
    #[default]
    Desktop,
    Compact,
}

impl Layout {
    /// Terminals narrower than this many columns use the compact schedule
    pub const COMPACT_WIDTH: u16 = 80;

    pub fn for_width(width: u16) -> Self {
        if width < Self::COMPACT_WIDTH {
            Self::Compact
        } else {
            Self::Desktop
        }
    }

    fn stagger(self) -> (Duration, Duration) {
        match self {
            Self::Desktop => (Duration::from_millis(150), Duration::from_millis(500)),
            Self::Compact => (Duration::from_millis(100), Duration::from_millis(300)),
        }
    }

    /// How long one card takes to fade in
    pub fn entrance_duration(self) -> Duration {
        match self {
            Self::Desktop => Duration::from_millis(600),
            Self::Compact => Duration::from_millis(400),
        }
    }
}

/// Delay before card `index` starts its entrance
pub fn entrance_delay(index: usize, layout: Layout) -> Duration {
    let (base, max) = layout.stagger();
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    base.saturating_mul(index).min(max)
}

/// One card of the menu grid
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrinkCard {
    pub index: usize,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub image: String,
    pub delay: Duration,
}

impl DrinkCard {
    pub fn new(index: usize, item: &Item, layout: Layout) -> Self {
        Self {
            index,
            name: item.name.clone(),
            description: item.description.clone(),
            tags: item.tags().to_vec(),
            image: resolve_image_src(&item.image),
            delay: entrance_delay(index, layout),
        }
    }

    /// Entrance progress in `[0, 1]`, `elapsed` since the grid was shown
    pub fn entrance_progress(&self, elapsed: Duration, layout: Layout) -> f64 {
        let Some(since) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        let duration = layout.entrance_duration();
        (since.as_secs_f64() / duration.as_secs_f64()).min(1.0)
    }
}

/// Cards for `items`, in order
pub fn cards(items: &[Item], layout: Layout) -> Vec<DrinkCard> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| DrinkCard::new(index, item, layout))
        .collect()
}
