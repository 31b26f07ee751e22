use crate::catalog::{Category, MenuDocument};
use crate::error::{MenuError, Result};
use std::collections::HashSet;

/// Validates identifiers across the whole document
///
/// Category ids must be non-empty and unique within the document; subcategory
/// ids must be non-empty and unique within their category.
pub fn validate_document(document: &MenuDocument) -> Result<()> {
    let mut seen = HashSet::new();

    for category in &document.categories {
        if category.id.trim().is_empty() {
            return Err(MenuError::invalid_catalog(format!(
                "Category '{}' has an empty id",
                category.name
            )));
        }

        if !seen.insert(category.id.as_str()) {
            return Err(MenuError::invalid_catalog(format!(
                "Duplicate category id '{}'",
                category.id
            )));
        }

        validate_category(category)?;
    }

    Ok(())
}

/// Validates the subcategories of a single category
pub fn validate_category(category: &Category) -> Result<()> {
    let Some(subcategories) = category.subcategories.as_deref() else {
        return Ok(());
    };

    let mut seen = HashSet::new();
    for subcategory in subcategories {
        if subcategory.id.trim().is_empty() {
            return Err(MenuError::invalid_catalog(format!(
                "Subcategory '{}' in '{}' has an empty id",
                subcategory.name, category.id
            )));
        }

        if !seen.insert(subcategory.id.as_str()) {
            return Err(MenuError::invalid_catalog(format!(
                "Duplicate subcategory id '{}' in category '{}'",
                subcategory.id, category.id
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::builders::{CategoryBuilder, MenuDocumentBuilder};

    #[test]
    fn test_valid_document() {
        let document = MenuDocumentBuilder::new()
            .category(CategoryBuilder::new("coffee", "Coffee").item("Latte"))
            .category(
                CategoryBuilder::new("tea", "Tea")
                    .subcategory("green", "Green", &["Sencha"])
                    .subcategory("black", "Black", &["Assam"]),
            )
            .build();

        assert!(validate_document(&document).is_ok());
    }

    #[test]
    fn test_duplicate_category_id() {
        let document = MenuDocumentBuilder::new()
            .category(CategoryBuilder::new("coffee", "Coffee"))
            .category(CategoryBuilder::new("coffee", "More Coffee"))
            .build();

        assert!(matches!(
            validate_document(&document),
            Err(MenuError::InvalidCatalog { .. })
        ));
    }

    #[test]
    fn test_empty_category_id() {
        let document = MenuDocumentBuilder::new()
            .category(CategoryBuilder::new("  ", "Blank"))
            .build();

        assert!(validate_document(&document).is_err());
    }

    #[test]
    fn test_subcategory_ids_scoped_to_category() {
        // Same subcategory id under two categories is fine
        let document = MenuDocumentBuilder::new()
            .category(CategoryBuilder::new("tea", "Tea").subcategory("hot", "Hot", &["Oolong"]))
            .category(
                CategoryBuilder::new("coffee", "Coffee").subcategory("hot", "Hot", &["Drip"]),
            )
            .build();
        assert!(validate_document(&document).is_ok());

        // But not twice within one category
        let document = MenuDocumentBuilder::new()
            .category(
                CategoryBuilder::new("tea", "Tea")
                    .subcategory("hot", "Hot", &["Oolong"])
                    .subcategory("hot", "Also Hot", &["Pu'er"]),
            )
            .build();
        assert!(validate_document(&document).is_err());
    }
}
