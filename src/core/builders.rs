use crate::catalog::{Category, Item, MenuDocument, Subcategory};

/// Builder for menu items with empty defaults
#[derive(Clone, Debug)]
pub struct ItemBuilder {
    name: String,
    description: String,
    image: String,
    tags: Vec<String>,
}

impl ItemBuilder {
    /// Create a new ItemBuilder with the drink name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            image: String::new(),
            tags: Vec::new(),
        }
    }

    /// Set the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the image path or URL
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Add a tag
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Build the Item
    pub fn build(self) -> Item {
        Item {
            name: self.name,
            description: self.description,
            image: self.image,
            tags: if self.tags.is_empty() {
                None
            } else {
                Some(self.tags)
            },
        }
    }
}

/// Builder for a category and its items or subcategories
#[derive(Clone, Debug)]
pub struct CategoryBuilder {
    id: String,
    name: String,
    icon: String,
    items: Option<Vec<Item>>,
    subcategories: Option<Vec<Subcategory>>,
}

impl CategoryBuilder {
    /// Create a new CategoryBuilder with required fields
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: String::new(),
            items: None,
            subcategories: None,
        }
    }

    /// Set the tab icon
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Add a direct item by name
    pub fn item(self, name: impl Into<String>) -> Self {
        self.item_with(ItemBuilder::new(name).build())
    }

    /// Add a fully specified direct item
    pub fn item_with(mut self, item: Item) -> Self {
        self.items.get_or_insert_with(Vec::new).push(item);
        self
    }

    /// Add a subcategory holding the named items
    pub fn subcategory(
        mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        items: &[&str],
    ) -> Self {
        let subcategory = Subcategory {
            id: id.into(),
            name: name.into(),
            items: items
                .iter()
                .map(|name| ItemBuilder::new(*name).build())
                .collect(),
        };
        self.subcategories
            .get_or_insert_with(Vec::new)
            .push(subcategory);
        self
    }

    /// Build the Category
    pub fn build(self) -> Category {
        Category {
            id: self.id,
            name: self.name,
            icon: self.icon,
            items: self.items,
            subcategories: self.subcategories,
        }
    }
}

/// Builder for a whole menu document
#[derive(Clone, Debug, Default)]
pub struct MenuDocumentBuilder {
    categories: Vec<Category>,
}

impl MenuDocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a category
    pub fn category(mut self, category: CategoryBuilder) -> Self {
        self.categories.push(category.build());
        self
    }

    /// Build the MenuDocument without validation
    pub fn build(self) -> MenuDocument {
        MenuDocument {
            categories: self.categories,
        }
    }
}
