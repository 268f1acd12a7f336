//! Commerce error types.

use thiserror::Error;

/// Errors that can occur when building catalogs, policies or cart scripts.
///
/// Cart mutations and product filtering never fail; these errors only come
/// from data entering the system from outside.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Two products in one catalog share an id.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProduct(String),

    /// Product record violates a data invariant.
    #[error("Invalid product {id}: {reason}")]
    InvalidProduct { id: String, reason: String },

    /// Pricing policy values out of range.
    #[error("Invalid pricing policy: {0}")]
    InvalidPricingPolicy(String),

    /// A textual cart operation could not be parsed.
    #[error("Invalid cart operation '{0}': expected add:ID[:QTY], remove:ID, set:ID:QTY or clear")]
    InvalidCartOperation(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::Serialization(e.to_string())
    }
}
