//! Shopping cart module.
//!
//! Contains the cart engine, its pricing policy and caller-side helpers.

mod engine;
mod operation;
mod pricing;
mod stepper;

pub use engine::{CartEngine, CartLineItem};
pub use operation::CartOperation;
pub use pricing::{
    CartSummary, LineSummary, PricingPolicy, TaxRate, DEFAULT_FREE_SHIPPING_THRESHOLD,
    DEFAULT_SHIPPING_FEE, DEFAULT_TAX_RATE_BPS,
};
pub use stepper::QuantityStepper;
