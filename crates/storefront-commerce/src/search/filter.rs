//! Shop listing filter criteria.

use crate::catalog::Product;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Inclusive price range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Money,
    pub max: Money,
}

impl PriceRange {
    /// Every non-negative price.
    pub const UNBOUNDED: PriceRange = PriceRange {
        min: Money::ZERO,
        max: Money::from_cents(i64::MAX),
    };

    pub fn new(min: Money, max: Money) -> Self {
        Self { min, max }
    }

    /// From zero up to `ceiling`, the shop slider's starting position.
    pub fn up_to(ceiling: Money) -> Self {
        Self::new(Money::ZERO, ceiling)
    }

    /// `min <= price <= max`.
    pub fn contains(&self, price: Money) -> bool {
        self.min <= price && price <= self.max
    }

    /// Whether this range excludes anything `bounds` includes.
    pub fn is_narrower_than(&self, bounds: &PriceRange) -> bool {
        self.min > bounds.min || self.max < bounds.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

/// Criteria for the shop listing. All criteria are ANDed; a default
/// criterion matches every product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProductFilter {
    /// Case-insensitive substring matched against name or description.
    pub search_text: String,
    /// Category slugs; empty matches all.
    pub categories: Vec<String>,
    /// Brand names; empty matches all.
    pub brands: Vec<String>,
    /// Inclusive price range.
    pub price_range: PriceRange,
    /// Minimum average rating.
    pub min_rating: Option<f64>,
    /// Hide products with no stock.
    pub in_stock_only: bool,
    /// Range `price_range` resets to; a narrower range counts as an active filter.
    pub price_bounds: PriceRange,
}

impl ProductFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A filter whose price range starts at, and resets to, `bounds`.
    pub fn with_price_bounds(bounds: PriceRange) -> Self {
        Self {
            price_range: bounds,
            price_bounds: bounds,
            ..Self::default()
        }
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn category(mut self, slug: impl Into<String>) -> Self {
        let slug = slug.into();
        if !self.categories.contains(&slug) {
            self.categories.push(slug);
        }
        self
    }

    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        let brand = brand.into();
        if !self.brands.contains(&brand) {
            self.brands.push(brand);
        }
        self
    }

    pub fn price_between(mut self, min: Money, max: Money) -> Self {
        self.price_range = PriceRange::new(min, max);
        self
    }

    pub fn min_rating(mut self, rating: f64) -> Self {
        self.min_rating = Some(rating);
        self
    }

    pub fn in_stock_only(mut self) -> Self {
        self.in_stock_only = true;
        self
    }

    /// Select a category if unselected, deselect it otherwise.
    pub fn toggle_category(&mut self, slug: &str) {
        toggle(&mut self.categories, slug);
    }

    /// Select a brand if unselected, deselect it otherwise.
    pub fn toggle_brand(&mut self, brand: &str) {
        toggle(&mut self.brands, brand);
    }

    /// Reset every criterion; the price range returns to its bounds.
    pub fn clear(&mut self) {
        *self = Self::with_price_bounds(self.price_bounds);
    }

    /// Whether any category, brand or price narrowing is selected.
    ///
    /// Search text is not counted; it has its own clear control.
    pub fn has_active_filters(&self) -> bool {
        !self.categories.is_empty()
            || !self.brands.is_empty()
            || self.price_range.is_narrower_than(&self.price_bounds)
    }

    /// Whether a product passes every criterion.
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_search(product)
            && (self.categories.is_empty() || self.categories.contains(&product.category.slug))
            && (self.brands.is_empty() || self.brands.contains(&product.brand))
            && self.price_range.contains(product.price)
            && self.min_rating.map_or(true, |min| product.rating >= min)
            && (!self.in_stock_only || product.is_in_stock())
    }

    fn matches_search(&self, product: &Product) -> bool {
        if self.search_text.is_empty() {
            return true;
        }
        let needle = self.search_text.to_lowercase();
        product.name.to_lowercase().contains(&needle)
            || product.description.to_lowercase().contains(&needle)
    }
}

fn toggle(selection: &mut Vec<String>, value: &str) {
    if let Some(position) = selection.iter().position(|v| v == value) {
        selection.remove(position);
    } else {
        selection.push(value.to_string());
    }
}
