//! Cart state and derived pricing.

use std::sync::Arc;

use crate::cart::{CartSummary, LineSummary, PricingPolicy};
use crate::catalog::Product;
use crate::money::Money;

/// One product-quantity pairing in the cart.
///
/// Holds the catalog's product handle, so price changes to a product are
/// never snapshotted into the cart. Quantity is always at least 1.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLineItem {
    product: Arc<Product>,
    quantity: u32,
}

impl CartLineItem {
    pub fn product(&self) -> &Arc<Product> {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.product.price * self.quantity
    }
}

/// A shopping cart: an ordered list of line items, unique by product id,
/// plus the pricing policy its totals are derived with.
///
/// Every mutation is total. Unknown product ids are ignored, non-positive
/// add quantities count as 1, and quantities set to zero or below remove
/// the line. Stock is not checked here; callers bound quantities (see
/// [`QuantityStepper`](crate::cart::QuantityStepper)).
///
/// Derived values are recomputed from the items on every call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartEngine {
    items: Vec<CartLineItem>,
    policy: PricingPolicy,
}

impl CartEngine {
    /// Create an empty cart with the default pricing policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cart that prices with `policy`.
    pub fn with_policy(policy: PricingPolicy) -> Self {
        Self {
            items: Vec::new(),
            policy,
        }
    }

    pub fn policy(&self) -> &PricingPolicy {
        &self.policy
    }

    /// Add `quantity` units of a product.
    ///
    /// Increments the existing line for the product, or appends a new line at
    /// the end of the cart. A quantity of zero or below is treated as 1.
    pub fn add_item(&mut self, product: &Arc<Product>, quantity: i64) {
        let quantity = coerce_add_quantity(quantity);

        if let Some(existing) = self.find_mut(product.id.as_str()) {
            existing.quantity = existing.quantity.saturating_add(quantity);
            tracing::debug!(
                product_id = %product.id,
                added = quantity,
                quantity = existing.quantity,
                "incremented cart line"
            );
            return;
        }

        self.items.push(CartLineItem {
            product: Arc::clone(product),
            quantity,
        });
        tracing::debug!(product_id = %product.id, quantity, "added cart line");
    }

    /// Add a single unit of a product.
    pub fn add_one(&mut self, product: &Arc<Product>) {
        self.add_item(product, 1);
    }

    /// Remove the line for a product. Does nothing if it is not in the cart.
    pub fn remove_item(&mut self, product_id: impl AsRef<str>) {
        let product_id = product_id.as_ref();
        let len_before = self.items.len();
        self.items.retain(|i| i.product.id.as_str() != product_id);
        if self.items.len() < len_before {
            tracing::debug!(product_id, "removed cart line");
        }
    }

    /// Set a line's quantity exactly. Zero or below removes the line.
    pub fn update_quantity(&mut self, product_id: impl AsRef<str>, new_quantity: i64) {
        let product_id = product_id.as_ref();
        if new_quantity <= 0 {
            self.remove_item(product_id);
            return;
        }

        let quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
        if let Some(item) = self.find_mut(product_id) {
            item.quantity = quantity;
            tracing::debug!(product_id, quantity, "updated cart line");
        }
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        tracing::debug!(lines = self.items.len(), "cleared cart");
        self.items.clear();
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn get_item(&self, product_id: impl AsRef<str>) -> Option<&CartLineItem> {
        let product_id = product_id.as_ref();
        self.items.iter().find(|i| i.product.id.as_str() == product_id)
    }

    pub fn contains(&self, product_id: impl AsRef<str>) -> bool {
        self.get_item(product_id).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of all quantities.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Price times quantity for one product's line, if present.
    pub fn line_total(&self, product_id: impl AsRef<str>) -> Option<Money> {
        self.get_item(product_id).map(CartLineItem::line_total)
    }

    /// Sum of price times quantity over all lines. Exact to the cent.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    /// Free at or above the threshold, otherwise the flat fee.
    pub fn shipping(&self) -> Money {
        self.policy.shipping_for(self.subtotal(), self.is_empty())
    }

    /// Tax on the subtotal, rounded half away from zero to the cent.
    ///
    /// The exact product can carry fractions of a cent ($68.99 at 8% is
    /// $5.5192, stored as $5.52). At the default 8% rate the exact value is
    /// never a half cent, so `total` matches the exact sum rounded once.
    pub fn tax(&self) -> Money {
        self.policy.tax_for(self.subtotal())
    }

    /// Subtotal plus shipping plus tax.
    pub fn total(&self) -> Money {
        self.subtotal() + self.shipping() + self.tax()
    }

    /// How much more must be spent to reach free shipping.
    pub fn amount_until_free_shipping(&self) -> Option<Money> {
        self.subtotal()
            .shortfall_to(self.policy.free_shipping_threshold)
    }

    /// Pricing snapshot for rendering.
    pub fn summary(&self) -> CartSummary {
        let lines = self
            .items
            .iter()
            .map(|item| LineSummary {
                product_id: item.product.id.clone(),
                name: item.product.name.clone(),
                unit_price: item.product.price,
                quantity: item.quantity,
                line_total: item.line_total(),
            })
            .collect();

        let subtotal = self.subtotal();
        let shipping = self.policy.shipping_for(subtotal, self.is_empty());
        let tax = self.policy.tax_for(subtotal);

        CartSummary {
            item_count: self.item_count(),
            unique_items: self.unique_item_count(),
            lines,
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
            amount_until_free_shipping: subtotal
                .shortfall_to(self.policy.free_shipping_threshold),
        }
    }

    fn find_mut(&mut self, product_id: &str) -> Option<&mut CartLineItem> {
        self.items
            .iter_mut()
            .find(|i| i.product.id.as_str() == product_id)
    }
}

fn coerce_add_quantity(quantity: i64) -> u32 {
    if quantity <= 0 {
        1
    } else {
        u32::try_from(quantity).unwrap_or(u32::MAX)
    }
}
