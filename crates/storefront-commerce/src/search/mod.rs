//! Search module.
//!
//! Filter criteria and ordering for the shop listing.

mod filter;
mod query;

pub use filter::{PriceRange, ProductFilter};
pub use query::{filter_products, sort_products, SortOption};
