//! Demo catalog data for the storefront.
//!
//! Six categories, twelve brands and eight products. Used when no catalog
//! file is configured, and by tests.

use chrono::NaiveDate;

use crate::catalog::{Category, Product, ProductBadge, ProductCatalog};
use crate::ids::ProductId;
use crate::money::Money;

/// Brand names offered on the shop filter panel, in display order.
pub const DEMO_BRANDS: [&str; 12] = [
    "Apple", "Samsung", "Nike", "Adidas", "Sony", "LG", "Puma", "Levi's", "H&M", "Zara", "IKEA",
    "Dyson",
];

/// The storefront's category list.
pub fn demo_categories() -> Vec<Category> {
    vec![
        Category::new("1", "Electronics", "electronics").with_product_count(24),
        Category::new("2", "Clothing", "clothing").with_product_count(36),
        Category::new("3", "Home & Living", "home-living").with_product_count(18),
        Category::new("4", "Sports", "sports").with_product_count(12),
        Category::new("5", "Beauty", "beauty").with_product_count(28),
        Category::new("6", "Books", "books").with_product_count(42),
    ]
}

/// The demo product catalog, offering the full category and brand lists.
pub fn demo_catalog() -> ProductCatalog {
    ProductCatalog::assemble(demo_products())
        .with_categories(demo_categories())
        .with_brands(DEMO_BRANDS)
}

/// The demo products, in catalog order.
pub fn demo_products() -> Vec<Product> {
    let categories = demo_categories();
    let electronics = &categories[0];
    let clothing = &categories[1];
    let home = &categories[2];
    let sports = &categories[3];

    vec![
        Product {
            id: ProductId::new("1"),
            name: "Premium Wireless Headphones".to_string(),
            description: "Experience crystal-clear audio with our premium wireless headphones. \
                Features active noise cancellation, 30-hour battery life, and ultra-comfortable \
                ear cushions."
                .to_string(),
            price: Money::from_cents(29_999),
            original_price: Some(Money::from_cents(39_999)),
            images: vec![
                unsplash("photo-1505740420928-5e560c06d30e"),
                unsplash("photo-1484704849700-f032a568e944"),
            ],
            category: electronics.clone(),
            brand: "Sony".to_string(),
            stock: 45,
            rating: 4.8,
            review_count: 324,
            badges: vec![ProductBadge::Sale, ProductBadge::Bestseller],
            created_at: date(2024, 1, 15),
            updated_at: date(2024, 1, 20),
        },
        Product {
            id: ProductId::new("2"),
            name: "Smart Fitness Watch".to_string(),
            description: "Track your health and fitness with precision. Heart rate monitoring, \
                GPS tracking, sleep analysis, and 7-day battery life."
                .to_string(),
            price: Money::from_cents(24_999),
            original_price: None,
            images: vec![unsplash("photo-1523275335684-37898b6baf30")],
            category: electronics.clone(),
            brand: "Apple".to_string(),
            stock: 28,
            rating: 4.9,
            review_count: 512,
            badges: vec![ProductBadge::Trending],
            created_at: date(2024, 2, 1),
            updated_at: date(2024, 2, 5),
        },
        Product {
            id: ProductId::new("3"),
            name: "Minimalist Leather Backpack".to_string(),
            description: "Crafted from genuine leather with modern design. Fits 15\" laptops, \
                water-resistant lining, and hidden anti-theft pocket."
                .to_string(),
            price: Money::from_cents(18_999),
            original_price: None,
            images: vec![unsplash("photo-1553062407-98eeb64c6a62")],
            category: clothing.clone(),
            brand: "Zara".to_string(),
            stock: 62,
            rating: 4.7,
            review_count: 189,
            badges: vec![ProductBadge::New],
            created_at: date(2024, 2, 10),
            updated_at: date(2024, 2, 12),
        },
        Product {
            id: ProductId::new("4"),
            name: "Ultra-Thin Laptop Stand".to_string(),
            description: "Ergonomic aluminum laptop stand with adjustable height. Improves \
                posture and increases productivity. Foldable for easy transport."
                .to_string(),
            price: Money::from_cents(7_999),
            original_price: Some(Money::from_cents(9_999)),
            images: vec![unsplash("photo-1527864550417-7fd91fc51a46")],
            category: electronics.clone(),
            brand: "IKEA".to_string(),
            stock: 120,
            rating: 4.6,
            review_count: 256,
            badges: vec![ProductBadge::Sale],
            created_at: date(2024, 1, 20),
            updated_at: date(2024, 1, 25),
        },
        Product {
            id: ProductId::new("5"),
            name: "Organic Cotton T-Shirt".to_string(),
            description: "100% organic cotton, sustainably sourced. Soft, breathable, and \
                available in 12 colors."
                .to_string(),
            price: Money::from_cents(3_999),
            original_price: None,
            images: vec![unsplash("photo-1521572163474-6864f9cf17ab")],
            category: clothing.clone(),
            brand: "H&M".to_string(),
            stock: 200,
            rating: 4.5,
            review_count: 428,
            badges: Vec::new(),
            created_at: date(2024, 2, 5),
            updated_at: date(2024, 2, 8),
        },
        Product {
            id: ProductId::new("6"),
            name: "Smart Home Speaker".to_string(),
            description: "Voice-controlled speaker with rich, room-filling sound. Works with \
                all major smart home platforms."
                .to_string(),
            price: Money::from_cents(12_999),
            original_price: None,
            images: vec![unsplash("photo-1543512214-318c7553f230")],
            category: electronics.clone(),
            brand: "Samsung".to_string(),
            stock: 85,
            rating: 4.7,
            review_count: 367,
            badges: vec![ProductBadge::Trending],
            created_at: date(2024, 1, 28),
            updated_at: date(2024, 2, 1),
        },
        Product {
            id: ProductId::new("7"),
            name: "Premium Running Shoes".to_string(),
            description: "Lightweight and responsive running shoes with advanced cushioning \
                technology. Perfect for long-distance running."
                .to_string(),
            price: Money::from_cents(15_999),
            original_price: Some(Money::from_cents(19_999)),
            images: vec![unsplash("photo-1542291026-7eec264c27ff")],
            category: sports.clone(),
            brand: "Nike".to_string(),
            stock: 75,
            rating: 4.8,
            review_count: 892,
            badges: vec![ProductBadge::Sale, ProductBadge::Bestseller],
            created_at: date(2024, 1, 10),
            updated_at: date(2024, 2, 15),
        },
        Product {
            id: ProductId::new("8"),
            name: "Ceramic Pour-Over Coffee Set".to_string(),
            description: "Handcrafted ceramic pour-over coffee maker with matching cups. Brew \
                the perfect cup every time."
                .to_string(),
            price: Money::from_cents(6_899),
            original_price: None,
            images: vec![unsplash("photo-1495474472287-4d71bcdd2085")],
            category: home.clone(),
            brand: "IKEA".to_string(),
            stock: 42,
            rating: 4.9,
            review_count: 156,
            badges: vec![ProductBadge::New],
            created_at: date(2024, 2, 12),
            updated_at: date(2024, 2, 14),
        },
    ]
}

fn unsplash(photo: &str) -> String {
    format!("https://images.unsplash.com/{}?w=800", photo)
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_products_pass_validation() {
        let products = demo_products();
        for product in &products {
            product.validate().unwrap();
        }
        assert!(ProductCatalog::new(products).is_ok());
    }

    #[test]
    fn test_demo_catalog_offers_all_brands() {
        let catalog = demo_catalog();
        assert_eq!(catalog.brands(), DEMO_BRANDS.to_vec());
        assert_eq!(catalog.brands()[..8], DEMO_BRANDS[..8]);
    }

    #[test]
    fn test_demo_categories() {
        let slugs: Vec<_> = demo_categories().into_iter().map(|c| c.slug).collect();
        assert_eq!(
            slugs,
            vec!["electronics", "clothing", "home-living", "sports", "beauty", "books"]
        );
    }
}
