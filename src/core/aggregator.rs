use crate::catalog::{Category, Item, MenuDocument};
use crate::core::constants::FILTER_ALL;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A menu item annotated with the category (and subcategory) it came from
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlattenedDrink {
    #[serde(flatten)]
    pub item: Item,
    pub category_name: String,
    pub category_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory_id: Option<String>,
}

impl FlattenedDrink {
    pub fn name(&self) -> &str {
        &self.item.name
    }
}

/// Roulette filter: every drink, or only one category's drinks
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    pub fn matches(&self, drink: &FlattenedDrink) -> bool {
        match self {
            Self::All => true,
            Self::Category(id) => drink.category_id == *id,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        if value == FILTER_ALL {
            Self::All
        } else {
            Self::Category(value.to_string())
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<CategoryFilter> for String {
    fn from(value: CategoryFilter) -> Self {
        value.to_string()
    }
}

impl FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(FILTER_ALL),
            Self::Category(id) => f.write_str(id),
        }
    }
}

/// One entry of the roulette filter selector
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterOption {
    pub filter: CategoryFilter,
    pub label: String,
}

/// Flatten every drink in document order.
///
/// A category carrying a `subcategories` list contributes only its
/// subcategory items, even when that list is empty; its direct `items` are
/// then ignored.
pub fn flatten_all(document: &MenuDocument) -> Vec<FlattenedDrink> {
    document
        .categories
        .iter()
        .flat_map(flatten_category)
        .collect()
}

fn flatten_category(category: &Category) -> Vec<FlattenedDrink> {
    match category.subcategories.as_deref() {
        Some(subcategories) => subcategories
            .iter()
            .flat_map(|subcategory| {
                subcategory.items.iter().map(move |item| FlattenedDrink {
                    item: item.clone(),
                    category_name: category.name.clone(),
                    category_id: category.id.clone(),
                    subcategory_name: Some(subcategory.name.clone()),
                    subcategory_id: Some(subcategory.id.clone()),
                })
            })
            .collect(),
        None => category
            .items
            .iter()
            .flatten()
            .map(|item| FlattenedDrink {
                item: item.clone(),
                category_name: category.name.clone(),
                category_id: category.id.clone(),
                subcategory_name: None,
                subcategory_id: None,
            })
            .collect(),
    }
}

/// Keep the drinks matching `filter`, preserving order
pub fn filter_by_category(
    flattened: &[FlattenedDrink],
    filter: &CategoryFilter,
) -> Vec<FlattenedDrink> {
    flattened
        .iter()
        .filter(|drink| filter.matches(drink))
        .cloned()
        .collect()
}

/// Entries for the roulette filter selector: "all" first, then each category
pub fn filter_options(document: &MenuDocument) -> Vec<FilterOption> {
    std::iter::once(FilterOption {
        filter: CategoryFilter::All,
        label: "All drinks".to_string(),
    })
    .chain(document.categories.iter().map(|category| FilterOption {
        filter: CategoryFilter::Category(category.id.clone()),
        label: category.label(),
    }))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::builders::{CategoryBuilder, MenuDocumentBuilder};

    fn names(drinks: &[FlattenedDrink]) -> Vec<&str> {
        drinks.iter().map(|d| d.name()).collect()
    }

    fn create_test_document() -> MenuDocument {
        MenuDocumentBuilder::new()
            .category(
                CategoryBuilder::new("coffee", "Coffee")
                    .icon("☕")
                    .item("Espresso")
                    .item("Latte")
                    .item("Mocha"),
            )
            .category(
                CategoryBuilder::new("tea", "Tea")
                    .icon("🍵")
                    .subcategory("green", "Green", &["Sencha", "Gyokuro"])
                    .subcategory("black", "Black", &["Assam"]),
            )
            .category(CategoryBuilder::new("empty", "Empty"))
            .build()
    }

    #[test]
    fn test_flatten_preserves_document_order() {
        let drinks = flatten_all(&create_test_document());

        assert_eq!(
            names(&drinks),
            ["Espresso", "Latte", "Mocha", "Sencha", "Gyokuro", "Assam"]
        );
        assert_eq!(drinks[0].category_id, "coffee");
        assert_eq!(drinks[0].subcategory_id, None);
        assert_eq!(drinks[4].category_name, "Tea");
        assert_eq!(drinks[4].subcategory_name.as_deref(), Some("Green"));
        assert_eq!(drinks[5].subcategory_id.as_deref(), Some("black"));
    }

    #[test]
    fn test_subcategories_take_precedence_over_items() {
        let document = MenuDocumentBuilder::new()
            .category(
                CategoryBuilder::new("tea", "Tea")
                    .item("Direct Tea")
                    .subcategory("green", "Green", &["Sencha"]),
            )
            .build();

        let drinks = flatten_all(&document);
        assert_eq!(names(&drinks), ["Sencha"]);
        assert!(drinks.iter().all(|d| d.name() != "Direct Tea"));
    }

    #[test]
    fn test_empty_subcategory_list_hides_items() {
        let mut document = MenuDocumentBuilder::new()
            .category(CategoryBuilder::new("tea", "Tea").item("Direct Tea"))
            .category(CategoryBuilder::new("coffee", "Coffee").item("Espresso"))
            .build();
        document.categories[0].subcategories = Some(Vec::new());

        let drinks = flatten_all(&document);
        assert_eq!(names(&drinks), ["Espresso"]);
        assert!(filter_by_category(&drinks, &"tea".into()).is_empty());
    }

    #[test]
    fn test_filter_by_category() {
        let drinks = flatten_all(&create_test_document());

        let all = filter_by_category(&drinks, &CategoryFilter::All);
        assert_eq!(all, drinks);

        let tea = filter_by_category(&drinks, &"tea".into());
        assert_eq!(names(&tea), ["Sencha", "Gyokuro", "Assam"]);

        let none = filter_by_category(&drinks, &"juice".into());
        assert!(none.is_empty());
    }

    #[test]
    fn test_filter_parsing() {
        assert_eq!(CategoryFilter::from("all"), CategoryFilter::All);
        assert_eq!(
            "coffee".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Category("coffee".into())
        );
        assert_eq!(CategoryFilter::All.to_string(), "all");
    }

    #[test]
    fn test_filter_options() {
        let options = filter_options(&create_test_document());

        assert_eq!(options.len(), 4);
        assert_eq!(options[0].filter, CategoryFilter::All);
        assert_eq!(options[1].label, "☕ Coffee");
        assert_eq!(options[2].filter, CategoryFilter::Category("tea".into()));
    }
}
