//! Catalog, cart pricing and product filtering for the storefront.
//!
//! This crate provides the logic behind the shop pages:
//!
//! - **Catalog**: Products, categories, the read-only product catalog
//! - **Cart**: Cart engine with line items and derived pricing (subtotal,
//!   shipping, tax, total)
//! - **Search**: Multi-criteria product filter and listing sort
//!
//! # Example
//!
//! ```rust
//! use storefront_commerce::prelude::*;
//!
//! let catalog = demo_catalog();
//!
//! // Filter the shop listing
//! let watches = filter_products(catalog.products(), &ProductFilter::new().search("watch"));
//! assert_eq!(watches.len(), 1);
//!
//! // Put it in a cart and price it
//! let mut cart = CartEngine::new();
//! cart.add_item(&watches[0], 2);
//! assert_eq!(cart.subtotal().display(), "$499.98");
//! assert!(cart.shipping().is_zero());
//! println!("Total: {}", cart.total());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod fixtures;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Category, Product, ProductBadge, ProductCatalog};
    pub use crate::fixtures::demo_catalog;

    // Cart
    pub use crate::cart::{
        CartEngine, CartLineItem, CartOperation, CartSummary, LineSummary, PricingPolicy,
        QuantityStepper, TaxRate,
    };

    // Search
    pub use crate::search::{filter_products, sort_products, PriceRange, ProductFilter, SortOption};
}
