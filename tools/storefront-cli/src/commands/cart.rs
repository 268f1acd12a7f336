//! Build a cart from a list of operations and price it.

use anyhow::{Context as _, Result};
use storefront_commerce::cart::{CartEngine, CartLineItem, CartOperation};

use super::CartArgs;
use crate::context::Context;
use crate::output::shipping_label;

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut cart = CartEngine::with_policy(ctx.config.pricing);

    for operation in &args.operations {
        operation
            .apply(&mut cart, &ctx.catalog)
            .with_context(|| format!("Failed to apply '{}'", operation))?;
        tracing::debug!(%operation, items = cart.item_count(), "cart operation applied");
        warn_on_stock(operation, &cart, ctx);
    }

    let summary = cart.summary();

    if ctx.output.is_json() {
        ctx.output.json(&summary);
        return Ok(());
    }

    ctx.output.header("Shopping Cart");
    if cart.is_empty() {
        ctx.output.info("Your cart is empty");
        return Ok(());
    }

    let widths = [4, 28, 10, 5, 10];
    ctx.output
        .table_row(&["ID", "NAME", "PRICE", "QTY", "TOTAL"], &widths);
    for line in &summary.lines {
        ctx.output.table_row(
            &[
                line.product_id.as_str(),
                &line.name,
                &line.unit_price.display(),
                &line.quantity.to_string(),
                &line.line_total.display(),
            ],
            &widths,
        );
    }

    ctx.output.header("Order Summary");
    ctx.output.kv(
        &format!("Subtotal ({} items)", summary.item_count),
        &summary.subtotal.display(),
    );
    ctx.output.kv("Shipping", &shipping_label(summary.shipping));
    ctx.output.kv(
        &format!("Tax ({}%)", cart.policy().tax_rate.as_percent()),
        &summary.tax.display(),
    );
    ctx.output.kv("Total", &summary.total.display());

    if let Some(gap) = summary.amount_until_free_shipping {
        ctx.output
            .info(&format!("Add {} more for free shipping!", gap.display()));
    }

    Ok(())
}

/// The cart itself does not track stock; flag lines the product page would
/// not have allowed after an add or set.
fn warn_on_stock(operation: &CartOperation, cart: &CartEngine, ctx: &Context) {
    let product_id = match operation {
        CartOperation::Add { product_id, .. } | CartOperation::Set { product_id, .. } => {
            product_id
        }
        _ => return,
    };
    let Some(quantity) = cart.get_item(product_id).map(CartLineItem::quantity) else {
        return;
    };
    let Some(product) = ctx.catalog.get(product_id.as_str()) else {
        return;
    };
    if !product.is_in_stock() {
        ctx.output.warn(&format!("{} is out of stock", product.name));
    } else if quantity > product.stock {
        ctx.output.warn(&format!(
            "Only {} of {} available, cart has {}",
            product.stock, product.name, quantity
        ));
    }
}
