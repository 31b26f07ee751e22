use crate::catalog::{Category, MenuDocument, Subcategory};
use crate::error::Result;
use crate::source::MenuSource;
use std::sync::Arc;

/// Holds the loaded menu document.
///
/// The document is replaced wholesale on a successful load and never
/// mutated in place. A store that has never loaded serves an empty menu.
#[derive(Clone, Debug, Default)]
pub struct CatalogStore {
    document: Arc<MenuDocument>,
    loaded: bool,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with an already validated document
    pub fn with_document(document: MenuDocument) -> Self {
        Self {
            document: Arc::new(document),
            loaded: true,
        }
    }

    /// Fetch, parse and validate a document, replacing the current one.
    ///
    /// On failure the previous document stays in place.
    pub async fn load(&mut self, source: &dyn MenuSource) -> Result<Arc<MenuDocument>> {
        let location = source.describe();

        let document = match fetch_document(source).await {
            Ok(document) => document,
            Err(e) => {
                tracing::warn!("Failed to load menu from {}: {}", location, e);
                return Err(e);
            }
        };

        tracing::info!(
            "Loaded menu from {} ({} categories)",
            location,
            document.categories.len()
        );

        self.document = Arc::new(document);
        self.loaded = true;
        Ok(self.document.clone())
    }

    /// Shared handle to the current document
    pub fn document(&self) -> Arc<MenuDocument> {
        self.document.clone()
    }

    /// Whether any load has succeeded
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn find_category(&self, id: &str) -> Option<&Category> {
        self.document.category(id)
    }

    pub fn find_subcategory(&self, category_id: &str, subcategory_id: &str) -> Option<&Subcategory> {
        self.find_category(category_id)
            .and_then(|category| category.subcategory(subcategory_id))
    }
}

async fn fetch_document(source: &dyn MenuSource) -> Result<MenuDocument> {
    let bytes = source.fetch().await?;
    MenuDocument::from_slice(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MenuError;
    use crate::source::{FileSource, MemorySource};

    const MENU: &str = r#"{
        "categories": [
            {"id": "coffee", "name": "Coffee", "icon": "☕",
             "items": [{"name": "Espresso", "description": "Short", "image": "espresso.jpg"}]},
            {"id": "tea", "name": "Tea", "icon": "🍵",
             "subcategories": [
                {"id": "green", "name": "Green", "items": [{"name": "Sencha", "description": "", "image": ""}]}
             ]}
        ]
    }"#;

    #[tokio::test]
    async fn test_load_and_lookup() {
        let mut store = CatalogStore::new();
        let document = store.load(&MemorySource::new(MENU)).await.unwrap();

        assert!(store.is_loaded());
        assert_eq!(document.categories.len(), 2);
        assert_eq!(store.find_category("coffee").unwrap().name, "Coffee");
        assert!(store.find_category("juice").is_none());
        assert_eq!(store.find_subcategory("tea", "green").unwrap().name, "Green");
        assert!(store.find_subcategory("tea", "black").is_none());
        assert!(store.find_subcategory("coffee", "green").is_none());
    }

    #[tokio::test]
    async fn test_failed_first_load_leaves_store_empty() {
        let mut store = CatalogStore::new();
        let result = store.load(&MemorySource::new("not json")).await;

        assert!(matches!(result, Err(MenuError::Serde { .. })));
        assert!(!store.is_loaded());
        assert!(store.document().is_empty());
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_previous_document() {
        let mut store = CatalogStore::new();
        store.load(&MemorySource::new(MENU)).await.unwrap();

        let result = store
            .load(&FileSource::new("/nonexistent/drinkmenu/menu.json"))
            .await;
        assert!(result.unwrap_err().is_load_error());

        assert_eq!(store.document().categories.len(), 2);
        assert!(store.find_category("tea").is_some());
    }

    #[tokio::test]
    async fn test_invalid_schema_is_load_error() {
        let mut store = CatalogStore::new();
        let duplicate = r#"{"categories": [
            {"id": "coffee", "name": "A"}, {"id": "coffee", "name": "B"}
        ]}"#;

        let err = store.load(&MemorySource::new(duplicate)).await.unwrap_err();
        assert!(matches!(err, MenuError::InvalidCatalog { .. }));
        assert!(!store.is_loaded());
    }

    #[tokio::test]
    async fn test_reload_replaces_document() {
        let mut store = CatalogStore::new();
        store.load(&MemorySource::new(MENU)).await.unwrap();
        let before = store.document();

        store
            .load(&MemorySource::new(r#"{"categories": []}"#))
            .await
            .unwrap();

        // Old handles keep seeing the old document
        assert_eq!(before.categories.len(), 2);
        assert!(store.document().is_empty());
    }
}
