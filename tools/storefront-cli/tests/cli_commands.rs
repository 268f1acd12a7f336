mod common;

use common::TestContext;
use predicates::prelude::*;
use std::fs;
use storefront_commerce::catalog::Product;
use storefront_commerce::fixtures::demo_products;

fn ids(listing: &serde_json::Value) -> Vec<String> {
    listing["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_products_lists_demo_catalog() {
    let ctx = TestContext::new();
    ctx.cli()
        .arg("products")
        .assert()
        .success()
        .stdout(predicate::str::contains("8 products found"))
        .stdout(predicate::str::contains("Premium Wireless Headphones"));
}

#[test]
fn test_products_search_is_case_insensitive() {
    let ctx = TestContext::new();
    let listing = ctx.json(&["products", "--search", "WATCH"]);
    assert_eq!(listing["count"], 1);
    assert_eq!(ids(&listing), vec!["2"]);
}

#[test]
fn test_products_price_range_and_sort() {
    let ctx = TestContext::new();

    let cheap = ctx.json(&["products", "--max-price", "50"]);
    assert_eq!(ids(&cheap), vec!["5"]);

    let listing = ctx.json(&["products", "--min-price", "100", "--sort", "price-asc"]);
    assert_eq!(ids(&listing), vec!["6", "7", "3", "2", "1"]);
    assert_eq!(listing["has_active_filters"], true);
}

#[test]
fn test_products_without_filters_is_not_active() {
    let ctx = TestContext::new();
    let listing = ctx.json(&["products", "--search", "wireless"]);
    assert_eq!(listing["has_active_filters"], false);
}

#[test]
fn test_products_rejects_unknown_sort() {
    let ctx = TestContext::new();
    ctx.cli()
        .args(["products", "--sort", "cheapest"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown sort"));
}

#[test]
fn test_products_no_match() {
    let ctx = TestContext::new();
    ctx.cli()
        .args(["products", "--search", "zzz-nothing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 products found"));
}

#[test]
fn test_product_page() {
    let ctx = TestContext::new();
    ctx.cli()
        .args(["product", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Premium Wireless Headphones"))
        .stdout(predicate::str::contains("In Stock (45 available)"))
        .stdout(predicate::str::contains("You May Also Like"));
}

#[test]
fn test_product_page_json_lists_related() {
    let ctx = TestContext::new();
    let page = ctx.json(&["product", "1"]);
    assert_eq!(page["product"]["id"], "1");
    let related: Vec<_> = page["related"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(related, vec!["2", "4", "6"]);
}

#[test]
fn test_unknown_product_fails() {
    let ctx = TestContext::new();
    ctx.cli()
        .args(["product", "999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Product not found: 999"));
}

#[test]
fn test_cart_free_shipping() {
    let ctx = TestContext::new();
    ctx.cli()
        .args(["cart", "add:2:2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$499.98"))
        .stdout(predicate::str::contains("Free"))
        .stdout(predicate::str::contains("$40.00"))
        .stdout(predicate::str::contains("$539.98"));
}

#[test]
fn test_cart_below_threshold_shows_gap() {
    let ctx = TestContext::new();
    ctx.cli()
        .args(["cart", "add:8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$10.00"))
        .stdout(predicate::str::contains("$84.51"))
        .stdout(predicate::str::contains("Add $31.01 more for free shipping!"));
}

#[test]
fn test_cart_operations_apply_in_order() {
    let ctx = TestContext::new();
    let summary = ctx.json(&["cart", "add:1", "add:5:3", "add:1", "set:5:1", "remove:8"]);
    assert_eq!(summary["item_count"], 3);
    assert_eq!(summary["unique_items"], 2);
    assert_eq!(summary["lines"][0]["product_id"], "1");
    assert_eq!(summary["lines"][0]["quantity"], 2);
    // 2 x 299.99 + 39.99
    assert_eq!(summary["subtotal"], 639.97);
    assert_eq!(summary["shipping"], 0.0);
}

#[test]
fn test_cart_clear_is_empty() {
    let ctx = TestContext::new();
    ctx.cli()
        .args(["cart", "add:3", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Your cart is empty"));

    let summary = ctx.json(&["cart", "add:3", "set:3:0"]);
    assert_eq!(summary["total"], 0.0);
}

#[test]
fn test_cart_rejects_bad_operation() {
    let ctx = TestContext::new();
    ctx.cli()
        .args(["cart", "buy:1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid cart operation"));
}

#[test]
fn test_cart_add_unknown_product_fails() {
    let ctx = TestContext::new();
    ctx.cli()
        .args(["cart", "add:42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Product not found: 42"));
}

#[test]
fn test_config_init_and_force() {
    let ctx = TestContext::new();
    ctx.cli().args(["config", "init"]).assert().success();
    assert!(ctx.config_path().exists());

    ctx.cli()
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    ctx.cli().args(["config", "init", "--force"]).assert().success();
}

#[test]
fn test_config_pricing_applies_to_cart() {
    let ctx = TestContext::new();
    ctx.write_file(
        "storefront.toml",
        r#"
[pricing]
shipping_fee = 4.99
tax_rate_percent = 10.0
"#,
    );

    // 68.99 + 4.99 + 6.90
    let summary = ctx.json(&["cart", "add:8"]);
    assert_eq!(summary["shipping"], 4.99);
    assert_eq!(summary["tax"], 6.9);
    assert_eq!(summary["total"], 80.88);

    ctx.cli()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$4.99"))
        .stdout(predicate::str::contains("10%"));
}

#[test]
fn test_invalid_config_is_reported() {
    let ctx = TestContext::new();
    ctx.write_file("storefront.toml", "[pricing]\nshipping_fee = -1.0\n");
    ctx.cli()
        .args(["cart", "add:1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid [pricing]"));
}

#[test]
fn test_catalog_file_replaces_demo_catalog() {
    let ctx = TestContext::new();
    let products: Vec<Product> = demo_products()
        .into_iter()
        .filter(|p| p.id.as_str() == "5" || p.id.as_str() == "8")
        .collect();
    let path = ctx.write_file("catalog.json", &serde_json::to_string(&products).unwrap());

    let listing = ctx.json(&["--catalog", path.to_str().unwrap(), "products"]);
    assert_eq!(ids(&listing), vec!["5", "8"]);

    ctx.cli()
        .args(["--catalog", "catalog.json", "product", "1"])
        .assert()
        .failure();
}

#[test]
fn test_config_catalog_path_is_relative_to_config() {
    let ctx = TestContext::new();
    let nested = ctx.work_dir().join("shop");
    fs::create_dir_all(&nested).unwrap();
    let products: Vec<Product> = demo_products().into_iter().take(2).collect();
    fs::write(nested.join("items.json"), serde_json::to_string(&products).unwrap()).unwrap();
    fs::write(nested.join("storefront.toml"), "[catalog]\npath = \"items.json\"\n").unwrap();

    let listing = ctx.json(&["--config", "shop/storefront.toml", "products"]);
    assert_eq!(listing["count"], 2);
}

#[test]
fn test_shop_sidebar_lists_declared_brands_up_to_limit() {
    let ctx = TestContext::new();
    ctx.cli()
        .args(["-v", "products", "--brand", "Nobody"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 products found"))
        .stdout(predicate::str::contains("Books (books) - 42 products"))
        .stdout(predicate::str::contains("Beauty (beauty) - 28 products"))
        .stdout(predicate::str::contains("Adidas"))
        .stdout(predicate::str::contains("Levi's"))
        .stdout(predicate::str::contains("H&M").not())
        .stdout(predicate::str::contains("Dyson").not());
}

#[test]
fn test_brand_facet_limit_from_config() {
    let ctx = TestContext::new();
    ctx.write_file("storefront.toml", "[shop]\nbrand_facet_limit = 3\n");
    ctx.cli()
        .args(["products", "--brand", "Nobody"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nike"))
        .stdout(predicate::str::contains("Adidas").not());
}

#[test]
fn test_products_rejects_non_finite_price() {
    let ctx = TestContext::new();
    ctx.cli()
        .args(["products", "--min-price", "NaN"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid price"));
}

#[test]
fn test_search_text_is_matched_as_typed() {
    let ctx = TestContext::new();
    // No product mentions "watch " followed by a space.
    let listing = ctx.json(&["products", "--search", " watch "]);
    assert_eq!(listing["count"], 0);
}

#[test]
fn test_cart_warns_when_line_exceeds_stock() {
    let ctx = TestContext::new();
    ctx.cli()
        .args(["cart", "add:1:30"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Only").not());

    ctx.cli()
        .args(["cart", "add:1:30", "add:1:30"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Only 45 of Premium Wireless Headphones available, cart has 60",
        ))
        .stdout(predicate::str::contains("$17999.40"));

    ctx.cli()
        .args(["cart", "add:1:60", "set:1:10"])
        .assert()
        .success()
        .stderr(predicate::str::contains("cart has 60"))
        .stderr(predicate::str::contains("cart has 10").not());
}
