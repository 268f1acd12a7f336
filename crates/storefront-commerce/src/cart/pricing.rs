//! Cart pricing policy and pricing snapshots.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Money, BASIS_POINTS_PER_UNIT};
use serde::{Deserialize, Serialize};

/// Subtotal at or above which shipping is free.
pub const DEFAULT_FREE_SHIPPING_THRESHOLD: Money = Money::from_dollars(100);

/// Flat shipping fee charged below the threshold.
pub const DEFAULT_SHIPPING_FEE: Money = Money::from_dollars(10);

/// Flat sales tax rate, in basis points (8%).
pub const DEFAULT_TAX_RATE_BPS: u32 = 800;

/// A tax rate stored in basis points.
///
/// Serializes as a percentage (`8.0` for 8%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct TaxRate(u32);

impl TaxRate {
    /// Create a tax rate from basis points (800 = 8%).
    pub const fn from_basis_points(bps: u32) -> Self {
        Self(bps)
    }

    /// Create a tax rate from a percentage, rounded to the basis point.
    pub fn from_percent(percent: f64) -> Result<Self, CommerceError> {
        if !percent.is_finite() || !(0.0..=100.0).contains(&percent) {
            return Err(CommerceError::InvalidPricingPolicy(format!(
                "tax rate must be between 0 and 100 percent, got {}",
                percent
            )));
        }
        Ok(Self((percent * 100.0).round() as u32))
    }

    pub fn basis_points(&self) -> u32 {
        self.0
    }

    pub fn as_percent(&self) -> f64 {
        f64::from(self.0) / 100.0
    }

    /// Tax owed on an amount.
    pub fn apply(&self, amount: Money) -> Money {
        amount.percentage_bps(self.0)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        Self(DEFAULT_TAX_RATE_BPS)
    }
}

impl TryFrom<f64> for TaxRate {
    type Error = CommerceError;

    fn try_from(percent: f64) -> Result<Self, Self::Error> {
        Self::from_percent(percent)
    }
}

impl From<TaxRate> for f64 {
    fn from(rate: TaxRate) -> f64 {
        rate.as_percent()
    }
}

/// Shipping and tax rules applied to a cart subtotal.
///
/// The defaults are the storefront's published policy: free shipping from
/// $100, otherwise a flat $10, and 8% tax on the subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingPolicy {
    /// Subtotal at or above which shipping is free.
    pub free_shipping_threshold: Money,
    /// Flat fee charged when the subtotal is below the threshold.
    pub shipping_fee: Money,
    /// Tax rate applied to the subtotal.
    #[serde(rename = "tax_rate_percent")]
    pub tax_rate: TaxRate,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            free_shipping_threshold: DEFAULT_FREE_SHIPPING_THRESHOLD,
            shipping_fee: DEFAULT_SHIPPING_FEE,
            tax_rate: TaxRate::default(),
        }
    }
}

impl PricingPolicy {
    /// Check that amounts are non-negative and the tax rate is at most 100%.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.free_shipping_threshold.is_negative() {
            return Err(CommerceError::InvalidPricingPolicy(format!(
                "free shipping threshold {} is negative",
                self.free_shipping_threshold
            )));
        }
        if self.shipping_fee.is_negative() {
            return Err(CommerceError::InvalidPricingPolicy(format!(
                "shipping fee {} is negative",
                self.shipping_fee
            )));
        }
        if i64::from(self.tax_rate.basis_points()) > BASIS_POINTS_PER_UNIT {
            return Err(CommerceError::InvalidPricingPolicy(format!(
                "tax rate {}% exceeds 100%",
                self.tax_rate.as_percent()
            )));
        }
        Ok(())
    }

    /// Shipping owed for a subtotal. An empty cart ships nothing.
    pub fn shipping_for(&self, subtotal: Money, is_empty: bool) -> Money {
        if is_empty || subtotal >= self.free_shipping_threshold {
            Money::ZERO
        } else {
            self.shipping_fee
        }
    }

    /// Tax owed for a subtotal.
    pub fn tax_for(&self, subtotal: Money) -> Money {
        self.tax_rate.apply(subtotal)
    }
}

/// Pricing snapshot of a whole cart, computed on demand for rendering.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartSummary {
    /// Sum of quantities.
    pub item_count: u64,
    /// Number of distinct products.
    pub unique_items: usize,
    /// Per-line breakdown, in cart order.
    pub lines: Vec<LineSummary>,
    pub subtotal: Money,
    pub shipping: Money,
    pub tax: Money,
    pub total: Money,
    /// How much more to spend for free shipping, if below the threshold.
    pub amount_until_free_shipping: Option<Money>,
}

impl CartSummary {
    /// Whether shipping is free for this cart.
    pub fn has_free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }
}

/// Pricing breakdown for a single line item.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LineSummary {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
    /// Unit price times quantity.
    pub line_total: Money,
}
