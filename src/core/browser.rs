use crate::catalog::{Category, Item, MenuDocument, Subcategory};
use crate::core::presenter::{DrinkCard, Layout, cards};
use std::sync::Arc;

/// One entry of a tab row
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tab {
    pub id: String,
    pub label: String,
    pub active: bool,
}

/// Category and subcategory navigation over a loaded menu
#[derive(Clone, Debug)]
pub struct MenuBrowser {
    document: Arc<MenuDocument>,
    category: Option<String>,
    subcategory: Option<String>,
}

impl MenuBrowser {
    /// Start on the first category and its first subcategory, if any
    pub fn new(document: Arc<MenuDocument>) -> Self {
        let category = document.categories.first();
        let subcategory = category.and_then(first_subcategory_id);
        let category = category.map(|c| c.id.clone());

        Self {
            document,
            category,
            subcategory,
        }
    }

    pub fn document(&self) -> &MenuDocument {
        &self.document
    }

    pub fn current_category(&self) -> Option<&Category> {
        self.category
            .as_deref()
            .and_then(|id| self.document.category(id))
    }

    pub fn current_subcategory(&self) -> Option<&Subcategory> {
        let id = self.subcategory.as_deref()?;
        self.current_category()?.subcategory(id)
    }

    /// Select a category; selecting the current one changes nothing.
    ///
    /// Returns whether the selection changed. Unknown ids are ignored.
    pub fn select_category(&mut self, id: &str) -> bool {
        if self.category.as_deref() == Some(id) {
            return false;
        }
        let Some(category) = self.document.category(id) else {
            tracing::debug!("Ignoring unknown category '{}'", id);
            return false;
        };

        self.subcategory = first_subcategory_id(category);
        self.category = Some(category.id.clone());
        true
    }

    /// Select a subcategory of the current category.
    ///
    /// Returns whether the selection changed.
    pub fn select_subcategory(&mut self, id: &str) -> bool {
        if self.subcategory.as_deref() == Some(id) {
            return false;
        }
        if self
            .current_category()
            .and_then(|category| category.subcategory(id))
            .is_none()
        {
            return false;
        }

        self.subcategory = Some(id.to_string());
        true
    }

    /// Move the category selection by `step`, wrapping around
    pub fn step_category(&mut self, step: isize) -> bool {
        let ids: Vec<String> = self.document.categories.iter().map(|c| c.id.clone()).collect();
        match step_id(&ids, self.category.as_deref(), step) {
            Some(id) => self.select_category(&id),
            None => false,
        }
    }

    /// Move the subcategory selection by `step`, wrapping around
    pub fn step_subcategory(&mut self, step: isize) -> bool {
        let ids: Vec<String> = match self.current_category().and_then(Category::subcategories) {
            Some(subcategories) => subcategories.iter().map(|s| s.id.clone()).collect(),
            None => return false,
        };
        match step_id(&ids, self.subcategory.as_deref(), step) {
            Some(id) => self.select_subcategory(&id),
            None => false,
        }
    }

    /// The category row
    pub fn category_tabs(&self) -> Vec<Tab> {
        self.document
            .categories
            .iter()
            .map(|category| Tab {
                id: category.id.clone(),
                label: category.label(),
                active: self.category.as_deref() == Some(category.id.as_str()),
            })
            .collect()
    }

    /// The subcategory row; `None` hides it
    pub fn subcategory_tabs(&self) -> Option<Vec<Tab>> {
        let subcategories = self.current_category()?.subcategories()?;
        Some(
            subcategories
                .iter()
                .map(|subcategory| Tab {
                    id: subcategory.id.clone(),
                    label: subcategory.name.clone(),
                    active: self.subcategory.as_deref() == Some(subcategory.id.as_str()),
                })
                .collect(),
        )
    }

    /// Items shown in the grid.
    ///
    /// The selected subcategory's items; without one, the category's direct
    /// items, falling back to its first subcategory.
    pub fn visible_items(&self) -> &[Item] {
        if let Some(subcategory) = self.current_subcategory() {
            return &subcategory.items;
        }
        let Some(category) = self.current_category() else {
            return &[];
        };
        if let Some(items) = category.items.as_deref().filter(|items| !items.is_empty()) {
            return items;
        }
        category
            .subcategories()
            .and_then(|subs| subs.first())
            .map(|sub| sub.items.as_slice())
            .unwrap_or_default()
    }

    /// Cards for the visible items with their entrance schedule
    pub fn visible_cards(&self, layout: Layout) -> Vec<DrinkCard> {
        cards(self.visible_items(), layout)
    }
}

fn first_subcategory_id(category: &Category) -> Option<String> {
    category
        .subcategories()
        .and_then(|subs| subs.first())
        .map(|sub| sub.id.clone())
}

fn step_id(ids: &[String], current: Option<&str>, step: isize) -> Option<String> {
    if ids.is_empty() {
        return None;
    }
    let len = ids.len() as isize;
    let position = current
        .and_then(|id| ids.iter().position(|candidate| candidate == id))
        .unwrap_or(0) as isize;
    Some(ids[(position + step).rem_euclid(len) as usize].clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::builders::{CategoryBuilder, MenuDocumentBuilder};

    fn names(items: &[Item]) -> Vec<&str> {
        items.iter().map(|item| item.name.as_str()).collect()
    }

    fn create_test_browser() -> MenuBrowser {
        let document = MenuDocumentBuilder::new()
            .category(
                CategoryBuilder::new("tea", "Tea")
                    .icon("🍵")
                    .subcategory("green", "Green", &["Sencha", "Gyokuro"])
                    .subcategory("black", "Black", &["Assam"]),
            )
            .category(
                CategoryBuilder::new("coffee", "Coffee")
                    .item("Espresso")
                    .item("Latte"),
            )
            .build();
        MenuBrowser::new(Arc::new(document))
    }

    #[test]
    fn test_starts_on_first_category_and_subcategory() {
        let browser = create_test_browser();

        assert_eq!(browser.current_category().map(|c| c.id.as_str()), Some("tea"));
        assert_eq!(
            browser.current_subcategory().map(|s| s.id.as_str()),
            Some("green")
        );
        assert_eq!(names(browser.visible_items()), ["Sencha", "Gyokuro"]);
    }

    #[test]
    fn test_select_category() {
        let mut browser = create_test_browser();
        browser.select_subcategory("black");

        assert!(!browser.select_category("tea"));
        // Reselecting keeps the subcategory
        assert_eq!(browser.current_subcategory().map(|s| s.name.as_str()), Some("Black"));

        assert!(browser.select_category("coffee"));
        assert!(browser.current_subcategory().is_none());
        assert!(browser.subcategory_tabs().is_none());
        assert_eq!(names(browser.visible_items()), ["Espresso", "Latte"]);

        assert!(browser.select_category("tea"));
        assert_eq!(browser.current_subcategory().map(|s| s.id.as_str()), Some("green"));

        assert!(!browser.select_category("juice"));
    }

    #[test]
    fn test_select_subcategory() {
        let mut browser = create_test_browser();

        assert!(!browser.select_subcategory("green"));
        assert!(!browser.select_subcategory("oolong"));
        assert!(browser.select_subcategory("black"));
        assert_eq!(names(browser.visible_items()), ["Assam"]);
    }

    #[test]
    fn test_tabs() {
        let browser = create_test_browser();

        let tabs = browser.category_tabs();
        assert_eq!(tabs.len(), 2);
        assert_eq!(tabs[0].label, "🍵 Tea");
        assert!(tabs[0].active);
        assert!(!tabs[1].active);

        let subtabs = browser.subcategory_tabs().unwrap();
        assert_eq!(subtabs.iter().map(|t| t.label.as_str()).collect::<Vec<_>>(), ["Green", "Black"]);
        assert!(subtabs[0].active);
    }

    #[test]
    fn test_step_wraps() {
        let mut browser = create_test_browser();

        assert!(browser.step_subcategory(1));
        assert_eq!(browser.current_subcategory().map(|s| s.id.as_str()), Some("black"));
        assert!(browser.step_subcategory(1));
        assert_eq!(browser.current_subcategory().map(|s| s.id.as_str()), Some("green"));

        assert!(browser.step_category(-1));
        assert_eq!(browser.current_category().map(|c| c.id.as_str()), Some("coffee"));
        assert!(!browser.step_subcategory(1));
    }

    #[test]
    fn test_empty_document() {
        let browser = MenuBrowser::new(Arc::new(MenuDocument::default()));

        assert!(browser.current_category().is_none());
        assert!(browser.category_tabs().is_empty());
        assert!(browser.visible_items().is_empty());
    }

    #[test]
    fn test_visible_cards_are_staggered() {
        let browser = create_test_browser();
        let cards = browser.visible_cards(Layout::Compact);

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[1].delay, std::time::Duration::from_millis(100));
    }
}
