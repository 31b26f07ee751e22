use serde::{Deserialize, Serialize};

/// Root of the menu JSON document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuDocument {
    #[serde(default)]
    pub categories: Vec<Category>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Item>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategories: Option<Vec<Subcategory>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Subcategory {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

/// A single drink on the menu.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl MenuDocument {
    /// Decode and validate a menu document.
    ///
    /// A document without a `categories` field is an empty menu, not an error.
    pub fn from_slice(bytes: &[u8]) -> crate::error::Result<Self> {
        let document: MenuDocument = serde_json::from_slice(bytes)?;
        crate::catalog::validate_document(&document)?;
        Ok(document)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }
}

impl Category {
    /// Subcategories, if the category declares a non-empty list of them.
    pub fn subcategories(&self) -> Option<&[Subcategory]> {
        self.subcategories
            .as_deref()
            .filter(|subcategories| !subcategories.is_empty())
    }

    pub fn has_subcategories(&self) -> bool {
        self.subcategories().is_some()
    }

    pub fn subcategory(&self, id: &str) -> Option<&Subcategory> {
        self.subcategories
            .as_deref()
            .and_then(|subs| subs.iter().find(|s| s.id == id))
    }

    /// Tab label as shown in the category row and the roulette filter.
    pub fn label(&self) -> String {
        if self.icon.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.icon, self.name)
        }
    }
}

impl Item {
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }
}
