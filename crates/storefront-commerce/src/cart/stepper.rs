//! Caller-side quantity bounds.
//!
//! The cart accepts any positive quantity. Product pages bound the quantity
//! a shopper can pick to `1..=stock` before calling into the cart.

use crate::catalog::Product;

/// A quantity picker clamped to `1..=max`.
///
/// `max` below 1 is treated as 1, so the picked value is always a valid add
/// quantity; whether adding is allowed at all (out of stock) is the caller's
/// decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantityStepper {
    value: u32,
    max: u32,
}

impl QuantityStepper {
    /// Start at 1 with an upper bound.
    pub fn new(max: u32) -> Self {
        Self { value: 1, max }
    }

    /// Bounded by a product's stock.
    pub fn for_product(product: &Product) -> Self {
        Self::new(product.stock)
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Largest value the stepper allows.
    pub fn max(&self) -> u32 {
        self.upper()
    }

    fn upper(&self) -> u32 {
        self.max.max(1)
    }

    pub fn can_increment(&self) -> bool {
        self.value < self.upper()
    }

    pub fn can_decrement(&self) -> bool {
        self.value > 1
    }

    pub fn increment(&mut self) -> u32 {
        self.value = self.value.saturating_add(1).min(self.upper());
        self.value
    }

    pub fn decrement(&mut self) -> u32 {
        self.value = self.value.saturating_sub(1).max(1);
        self.value
    }

    /// Set a value, clamped into range.
    pub fn set(&mut self, value: i64) -> u32 {
        let upper = i64::from(self.upper());
        self.value = value.clamp(1, upper) as u32;
        self.value
    }
}
