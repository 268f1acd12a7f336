//! Product detail page.

use anyhow::Result;
use serde::Serialize;
use storefront_commerce::cart::QuantityStepper;
use storefront_commerce::catalog::{Product, RELATED_PRODUCTS_LIMIT};

use super::ProductArgs;
use crate::context::Context;
use crate::output::{badge_label, price_label, rating_label, stock_label};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProductReport<'a> {
    product: &'a Product,
    discount_percent: Option<u32>,
    max_quantity: u32,
    related: Vec<&'a Product>,
}

/// Run the product command.
pub fn run(args: ProductArgs, ctx: &Context) -> Result<()> {
    let product = ctx.catalog.require(&args.id)?;
    let related = ctx.catalog.related(product, RELATED_PRODUCTS_LIMIT);
    let stepper = QuantityStepper::for_product(product);

    if ctx.output.is_json() {
        ctx.output.json(&ProductReport {
            product: product.as_ref(),
            discount_percent: product.discount_percent(),
            max_quantity: stepper.max(),
            related: related.iter().map(|p| p.as_ref()).collect(),
        });
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.kv("id", product.id.as_str());
    ctx.output.kv("brand", &product.brand);
    ctx.output.kv("category", &product.category.name);
    ctx.output.kv("price", &price_label(product));
    ctx.output.kv(
        "rating",
        &format!(
            "{} ({} reviews)",
            rating_label(product.rating),
            product.review_count
        ),
    );
    ctx.output.kv("stock", &stock_label(product));
    if !product.badges.is_empty() {
        let badges: Vec<String> = product.badges.iter().map(|b| badge_label(*b)).collect();
        ctx.output.kv("badges", &badges.join(" "));
    }
    ctx.output.info(&product.description);

    if !related.is_empty() {
        ctx.output.header("You May Also Like");
        for other in &related {
            ctx.output.list_item(&format!(
                "[{}] {} {}",
                other.id,
                other.name,
                price_label(other)
            ));
        }
    }

    Ok(())
}
