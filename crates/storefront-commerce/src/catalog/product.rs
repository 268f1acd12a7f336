//! Product types.

use crate::catalog::Category;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Highest rating a product can carry.
pub const MAX_RATING: f64 = 5.0;

/// Merchandising badge shown on product cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductBadge {
    Sale,
    New,
    Trending,
    Bestseller,
}

impl ProductBadge {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductBadge::Sale => "sale",
            ProductBadge::New => "new",
            ProductBadge::Trending => "trending",
            ProductBadge::Bestseller => "bestseller",
        }
    }
}

/// A product in the catalog.
///
/// Products are immutable once they enter a catalog; carts hold shared
/// handles to them rather than copies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Long description (searched by the shop filter).
    pub description: String,
    /// Current unit price.
    pub price: Money,
    /// Pre-discount price, when the product is marked down.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Money>,
    /// Image URLs, primary image first.
    #[serde(default)]
    pub images: Vec<String>,
    /// Category this product belongs to.
    pub category: Category,
    /// Brand name.
    pub brand: String,
    /// Units in stock.
    pub stock: u32,
    /// Average rating, 0.0 to 5.0.
    pub rating: f64,
    /// Number of reviews behind the rating.
    #[serde(default)]
    pub review_count: u32,
    /// Merchandising badges.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub badges: Vec<ProductBadge>,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
}

impl Product {
    /// Check if any units are in stock.
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Check if the product carries a badge.
    pub fn has_badge(&self, badge: ProductBadge) -> bool {
        self.badges.contains(&badge)
    }

    /// Check if the product is marked down from an original price.
    pub fn is_on_sale(&self) -> bool {
        self.original_price
            .map(|original| original > self.price)
            .unwrap_or(false)
    }

    /// Whole-number discount off the original price, e.g. 25 for 25% off.
    pub fn discount_percent(&self) -> Option<u32> {
        let original = self.original_price?;
        if original.cents() <= 0 || original <= self.price {
            return None;
        }
        let ratio = self.price.cents() as f64 / original.cents() as f64;
        Some(((1.0 - ratio) * 100.0).round() as u32)
    }

    /// Primary image, if any.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Check the record's data invariants.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let invalid = |reason: String| CommerceError::InvalidProduct {
            id: self.id.to_string(),
            reason,
        };

        if self.id.as_str().is_empty() {
            return Err(invalid("id must not be empty".to_string()));
        }
        if self.price.is_negative() {
            return Err(invalid(format!("price {} is negative", self.price)));
        }
        if let Some(original) = self.original_price {
            if original < self.price {
                return Err(invalid(format!(
                    "original price {} is below price {}",
                    original, self.price
                )));
            }
        }
        if !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(invalid(format!("rating {} outside 0-5", self.rating)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headphones() -> Product {
        Product {
            id: ProductId::new("1"),
            name: "Premium Wireless Headphones".to_string(),
            description: "Active noise cancellation".to_string(),
            price: Money::from_decimal(299.99),
            original_price: Some(Money::from_decimal(399.99)),
            images: vec!["https://example.com/a.jpg".to_string()],
            category: Category::new("1", "Electronics", "electronics"),
            brand: "Sony".to_string(),
            stock: 45,
            rating: 4.8,
            review_count: 324,
            badges: vec![ProductBadge::Sale, ProductBadge::Bestseller],
            created_at: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            updated_at: NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
        }
    }

    #[test]
    fn test_discount_percent() {
        let product = headphones();
        assert!(product.is_on_sale());
        assert_eq!(product.discount_percent(), Some(25));
    }

    #[test]
    fn test_no_discount_without_original_price() {
        let mut product = headphones();
        product.original_price = None;
        assert!(!product.is_on_sale());
        assert_eq!(product.discount_percent(), None);
    }

    #[test]
    fn test_stock_and_badges() {
        let mut product = headphones();
        assert!(product.is_in_stock());
        assert!(product.has_badge(ProductBadge::Bestseller));
        assert!(!product.has_badge(ProductBadge::New));

        product.stock = 0;
        assert!(!product.is_in_stock());
    }

    #[test]
    fn test_validate_rejects_original_below_price() {
        let mut product = headphones();
        product.original_price = Some(Money::from_decimal(199.99));
        let err = product.validate().unwrap_err();
        assert!(matches!(err, CommerceError::InvalidProduct { .. }));
    }

    #[test]
    fn test_validate_accepts_fixture_record() {
        assert!(headphones().validate().is_ok());
    }

    #[test]
    fn test_deserialize_camel_case_record() {
        let json = r#"{
            "id": "2",
            "name": "Smart Fitness Watch",
            "description": "Heart rate monitoring",
            "price": 249.99,
            "category": {"id": "1", "name": "Electronics", "slug": "electronics"},
            "brand": "Apple",
            "stock": 28,
            "rating": 4.9,
            "reviewCount": 512,
            "badges": ["trending"],
            "createdAt": "2024-02-01",
            "updatedAt": "2024-02-05"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.price.cents(), 24_999);
        assert_eq!(product.original_price, None);
        assert_eq!(product.badges, vec![ProductBadge::Trending]);
        assert!(product.images.is_empty());
    }
}
