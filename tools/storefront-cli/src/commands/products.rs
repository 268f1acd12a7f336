//! Shop listing: filter and sort the catalog.

use anyhow::{anyhow, bail, Result};
use serde::Serialize;
use storefront_commerce::catalog::Product;
use storefront_commerce::money::Money;
use storefront_commerce::search::{filter_products, sort_products, ProductFilter};

use super::ProductsArgs;
use crate::context::Context;
use crate::output::{badge_label, price_label, rating_label};

#[derive(Serialize)]
struct ProductsReport<'a> {
    count: usize,
    sort: String,
    filter: &'a ProductFilter,
    has_active_filters: bool,
    products: Vec<&'a Product>,
}

/// Run the products command.
pub fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let filter = build_filter(&args, ctx)?;

    let mut listing = filter_products(ctx.catalog.products(), &filter);
    sort_products(&mut listing, args.sort);

    if ctx.output.is_json() {
        ctx.output.json(&ProductsReport {
            count: listing.len(),
            sort: args.sort.to_string(),
            filter: &filter,
            has_active_filters: filter.has_active_filters(),
            products: listing.iter().map(|p| p.as_ref()).collect(),
        });
        return Ok(());
    }

    ctx.output.header("Shop");
    ctx.output.info(&format!(
        "{} products found (sorted by {})",
        listing.len(),
        args.sort.display_name()
    ));

    if listing.is_empty() {
        ctx.output.warn("No products match your filters");
        print_facets(ctx);
        return Ok(());
    }

    let widths = [4, 28, 12, 22, 14];
    ctx.output
        .table_row(&["ID", "NAME", "BRAND", "PRICE", "RATING"], &widths);
    for product in &listing {
        let mut name = product.name.clone();
        if !product.is_in_stock() {
            name.push_str(" (sold out)");
        }
        ctx.output.table_row(
            &[
                product.id.as_str(),
                &name,
                &product.brand,
                &price_label(product),
                &rating_label(product.rating),
            ],
            &widths,
        );
        if ctx.output.is_verbose() && !product.badges.is_empty() {
            let badges: Vec<String> = product.badges.iter().map(|b| badge_label(*b)).collect();
            ctx.output.list_item(&badges.join(" "));
        }
    }

    if ctx.output.is_verbose() {
        print_facets(ctx);
    }

    Ok(())
}

/// Turn command line flags into a listing filter. The price range starts at
/// the configured shop bounds; either end can be overridden.
fn build_filter(args: &ProductsArgs, ctx: &Context) -> Result<ProductFilter> {
    let bounds = ctx.config.shop.price_bounds();
    let mut filter = ProductFilter::with_price_bounds(bounds);

    if let Some(text) = &args.search {
        filter = filter.search(text.as_str());
    }
    for slug in &args.categories {
        filter = filter.category(slug.as_str());
    }
    for brand in &args.brands {
        filter = filter.brand(brand.as_str());
    }

    if args.min_price.is_some() || args.max_price.is_some() {
        let min = price_arg(args.min_price, bounds.min)?;
        let max = price_arg(args.max_price, bounds.max)?;
        if min.is_negative() || min > max {
            bail!("Invalid price range: {} to {}", min, max);
        }
        filter = filter.price_between(min, max);
    }

    if let Some(rating) = args.min_rating {
        filter = filter.min_rating(rating);
    }
    if args.in_stock {
        filter = filter.in_stock_only();
    }

    tracing::debug!(?filter, "shop filter built");
    Ok(filter)
}

fn price_arg(value: Option<f64>, default: Money) -> Result<Money> {
    match value {
        Some(amount) => Money::try_from(amount).map_err(|e| anyhow!("Invalid price: {}", e)),
        None => Ok(default),
    }
}

/// Categories and brands offered in the shop sidebar.
fn print_facets(ctx: &Context) {
    ctx.output.info("Categories:");
    for category in ctx.catalog.categories() {
        let label = match category.product_count {
            Some(count) => format!("{} ({}) - {} products", category.name, category.slug, count),
            None => format!("{} ({})", category.name, category.slug),
        };
        ctx.output.list_item(&label);
    }

    ctx.output.info("Brands:");
    for brand in ctx
        .catalog
        .brands()
        .into_iter()
        .take(ctx.config.shop.brand_facet_limit)
    {
        ctx.output.list_item(brand);
    }
}
