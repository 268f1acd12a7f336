//! Product catalog module.
//!
//! Contains types for products, categories and the read-only catalog.

mod category;
mod product;
mod product_catalog;

pub use category::Category;
pub use product::{Product, ProductBadge, MAX_RATING};
pub use product_catalog::{ProductCatalog, RELATED_PRODUCTS_LIMIT};
