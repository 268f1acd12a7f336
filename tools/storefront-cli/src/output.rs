//! Output formatting for the CLI.

use console::style;
use storefront_commerce::catalog::{Product, ProductBadge};
use storefront_commerce::money::Money;

/// Output handler for CLI messages.
///
/// Human-readable output goes to stdout. In JSON mode only `json` writes to
/// stdout, so the result can be piped.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  ").trim_end());
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Colored badge label.
pub fn badge_label(badge: ProductBadge) -> String {
    let label = badge.as_str().to_uppercase();
    match badge {
        ProductBadge::Sale => style(label).red().to_string(),
        ProductBadge::New => style(label).green().to_string(),
        ProductBadge::Trending => style(label).magenta().to_string(),
        ProductBadge::Bestseller => style(label).yellow().to_string(),
    }
}

/// Price with the original price struck through, as on product cards.
pub fn price_label(product: &Product) -> String {
    match (product.original_price, product.discount_percent()) {
        (Some(original), Some(percent)) => format!(
            "{} {} (-{}%)",
            product.price,
            style(original.display()).dim().strikethrough(),
            percent
        ),
        _ => product.price.display(),
    }
}

/// "Free" for zero shipping, the amount otherwise.
pub fn shipping_label(shipping: Money) -> String {
    if shipping.is_zero() {
        "Free".to_string()
    } else {
        shipping.display()
    }
}

/// Stock line shown on the product page.
pub fn stock_label(product: &Product) -> String {
    if product.is_in_stock() {
        style(format!("In Stock ({} available)", product.stock))
            .green()
            .to_string()
    } else {
        style("Out of Stock").red().to_string()
    }
}

/// Star rating rounded down to whole stars, e.g. "★★★★☆ 4.8".
pub fn rating_label(rating: f64) -> String {
    let full = rating.floor().clamp(0.0, 5.0) as usize;
    format!("{}{} {:.1}", "★".repeat(full), "☆".repeat(5 - full), rating)
}
