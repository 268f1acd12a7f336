//! Read-only, ordered product catalog.

use std::collections::HashMap;
use std::sync::Arc;

use crate::catalog::{Category, Product, ProductBadge};
use crate::error::CommerceError;
use crate::ids::ProductId;

/// Number of related products the product page shows.
pub const RELATED_PRODUCTS_LIMIT: usize = 4;

/// An ordered, immutable sequence of products, unique by id.
///
/// Products are handed out as `Arc<Product>` so carts can reference them by
/// identity without copying.
///
/// A catalog may also declare the categories and brands the shop offers as
/// filter options, which can include ones with no product yet. Without a
/// declaration they are taken from the products themselves.
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    products: Vec<Arc<Product>>,
    index: HashMap<ProductId, usize>,
    declared_categories: Vec<Category>,
    declared_brands: Vec<String>,
}

impl ProductCatalog {
    /// Build a catalog, validating each product and rejecting duplicate ids.
    pub fn new(products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut index = HashMap::with_capacity(products.len());
        let mut shared = Vec::with_capacity(products.len());

        for product in products {
            if let Err(e) = product.validate() {
                tracing::warn!(product_id = %product.id, error = %e, "rejected catalog product");
                return Err(e);
            }
            if index.contains_key(&product.id) {
                tracing::warn!(product_id = %product.id, "duplicate product id in catalog");
                return Err(CommerceError::DuplicateProduct(product.id.into_inner()));
            }
            index.insert(product.id.clone(), shared.len());
            shared.push(Arc::new(product));
        }

        tracing::debug!(products = shared.len(), "catalog built");
        Ok(Self {
            products: shared,
            index,
            ..Self::default()
        })
    }

    /// Build a catalog from products already known to be valid and unique.
    pub(crate) fn assemble(products: Vec<Product>) -> Self {
        let products: Vec<Arc<Product>> = products.into_iter().map(Arc::new).collect();
        let index = products
            .iter()
            .enumerate()
            .map(|(position, p)| (p.id.clone(), position))
            .collect();
        Self {
            products,
            index,
            ..Self::default()
        }
    }

    /// Declare the categories offered as filter options, in display order.
    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.declared_categories = categories;
        self
    }

    /// Declare the brands offered as filter options, in display order.
    pub fn with_brands<I, S>(mut self, brands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.declared_brands = brands.into_iter().map(Into::into).collect();
        self
    }

    /// Parse a JSON array of products.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Arc<Product>] {
        &self.products
    }

    /// Look up a product by id.
    pub fn get(&self, id: &str) -> Option<&Arc<Product>> {
        self.index
            .get(&ProductId::new(id))
            .map(|&position| &self.products[position])
    }

    /// Look up a product by id, failing if it is not in the catalog.
    pub fn require(&self, id: &str) -> Result<&Arc<Product>, CommerceError> {
        self.get(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Categories offered by the shop: the declared list, or else the
    /// distinct product categories in order of first appearance.
    pub fn categories(&self) -> Vec<&Category> {
        if !self.declared_categories.is_empty() {
            return self.declared_categories.iter().collect();
        }
        let mut seen: Vec<&Category> = Vec::new();
        for product in &self.products {
            if !seen.iter().any(|c| c.id == product.category.id) {
                seen.push(&product.category);
            }
        }
        seen
    }

    /// Brands offered by the shop: the declared list, or else the distinct
    /// product brands in order of first appearance.
    pub fn brands(&self) -> Vec<&str> {
        if !self.declared_brands.is_empty() {
            return self.declared_brands.iter().map(String::as_str).collect();
        }
        let mut seen: Vec<&str> = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.brand.as_str()) {
                seen.push(&product.brand);
            }
        }
        seen
    }

    /// Products carrying a badge, in catalog order.
    pub fn with_badge(&self, badge: ProductBadge) -> Vec<Arc<Product>> {
        self.products
            .iter()
            .filter(|p| p.has_badge(badge))
            .cloned()
            .collect()
    }

    /// Bestselling or trending products for the home page.
    pub fn featured(&self) -> Vec<Arc<Product>> {
        self.products
            .iter()
            .filter(|p| p.has_badge(ProductBadge::Bestseller) || p.has_badge(ProductBadge::Trending))
            .cloned()
            .collect()
    }

    pub fn on_sale(&self) -> Vec<Arc<Product>> {
        self.with_badge(ProductBadge::Sale)
    }

    pub fn new_arrivals(&self) -> Vec<Arc<Product>> {
        self.with_badge(ProductBadge::New)
    }

    /// Other products in the same category, in catalog order.
    pub fn related(&self, product: &Product, limit: usize) -> Vec<Arc<Product>> {
        self.products
            .iter()
            .filter(|p| p.category.id == product.category.id && p.id != product.id)
            .take(limit)
            .cloned()
            .collect()
    }
}
