//! Filtering and ordering the shop listing.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::catalog::Product;
use crate::search::ProductFilter;
use serde::{Deserialize, Serialize};

/// Products passing `filter`, in catalog order.
pub fn filter_products(catalog: &[Arc<Product>], filter: &ProductFilter) -> Vec<Arc<Product>> {
    let matched: Vec<Arc<Product>> = catalog
        .iter()
        .filter(|p| filter.matches(p))
        .cloned()
        .collect();
    tracing::debug!(
        scanned = catalog.len(),
        matched = matched.len(),
        search = %filter.search_text,
        "filtered products"
    );
    matched
}

/// Sort options for the shop listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Catalog order.
    #[default]
    Featured,
    /// Most recently added first.
    Newest,
    /// Price, low to high.
    PriceAsc,
    /// Price, high to low.
    PriceDesc,
    /// Highest rated first.
    Rating,
    /// Most reviewed first; review count stands in for sales volume.
    Bestselling,
}

impl SortOption {
    pub const ALL: [SortOption; 6] = [
        SortOption::Featured,
        SortOption::Newest,
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::Rating,
        SortOption::Bestselling,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Featured => "featured",
            SortOption::Newest => "newest",
            SortOption::PriceAsc => "price-asc",
            SortOption::PriceDesc => "price-desc",
            SortOption::Rating => "rating",
            SortOption::Bestselling => "bestselling",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Featured => "Featured",
            SortOption::Newest => "Newest",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::Rating => "Highest Rated",
            SortOption::Bestselling => "Best Selling",
        }
    }

    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortOption::Featured => Ordering::Equal,
            SortOption::Newest => b.created_at.cmp(&a.created_at),
            SortOption::PriceAsc => a.price.cmp(&b.price),
            SortOption::PriceDesc => b.price.cmp(&a.price),
            SortOption::Rating => b.rating.total_cmp(&a.rating),
            SortOption::Bestselling => b.review_count.cmp(&a.review_count),
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOption::ALL
            .into_iter()
            .find(|option| option.as_str() == s.to_lowercase())
            .ok_or_else(|| {
                let valid: Vec<&str> = SortOption::ALL.iter().map(SortOption::as_str).collect();
                format!("unknown sort '{}', expected one of: {}", s, valid.join(", "))
            })
    }
}

/// Order products in place. Ties keep their current relative order.
pub fn sort_products(products: &mut [Arc<Product>], sort: SortOption) {
    products.sort_by(|a, b| sort.compare(a, b));
}
