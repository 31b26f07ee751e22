pub mod store;
pub mod types;
pub mod validation;

pub use store::CatalogStore;
pub use types::{Category, Item, MenuDocument, Subcategory};
pub use validation::{validate_category, validate_document};
