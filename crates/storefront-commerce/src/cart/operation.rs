//! Textual cart operations, as issued by the command line.

use std::fmt;
use std::str::FromStr;

use crate::cart::CartEngine;
use crate::catalog::ProductCatalog;
use crate::error::CommerceError;
use crate::ids::ProductId;

/// A single user action against a cart.
///
/// Parsed from `add:ID`, `add:ID:QTY`, `remove:ID`, `set:ID:QTY` or `clear`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartOperation {
    Add { product_id: ProductId, quantity: i64 },
    Remove { product_id: ProductId },
    Set { product_id: ProductId, quantity: i64 },
    Clear,
}

impl CartOperation {
    /// Apply to a cart. Adding needs the product from the catalog; the other
    /// operations follow the cart's no-op rules for unknown ids.
    pub fn apply(
        &self,
        cart: &mut CartEngine,
        catalog: &ProductCatalog,
    ) -> Result<(), CommerceError> {
        match self {
            CartOperation::Add {
                product_id,
                quantity,
            } => {
                let product = catalog.require(product_id.as_str())?;
                cart.add_item(product, *quantity);
            }
            CartOperation::Remove { product_id } => cart.remove_item(product_id),
            CartOperation::Set {
                product_id,
                quantity,
            } => cart.update_quantity(product_id, *quantity),
            CartOperation::Clear => cart.clear_cart(),
        }
        Ok(())
    }
}

impl FromStr for CartOperation {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CommerceError::InvalidCartOperation(s.to_string());
        let parts: Vec<&str> = s.trim().split(':').collect();

        let id = |raw: &str| -> Result<ProductId, CommerceError> {
            if raw.is_empty() {
                Err(invalid())
            } else {
                Ok(ProductId::new(raw))
            }
        };
        let qty = |raw: &str| raw.parse::<i64>().map_err(|_| invalid());

        match parts[..] {
            ["add", product_id] => Ok(CartOperation::Add {
                product_id: id(product_id)?,
                quantity: 1,
            }),
            ["add", product_id, quantity] => Ok(CartOperation::Add {
                product_id: id(product_id)?,
                quantity: qty(quantity)?,
            }),
            ["remove", product_id] => Ok(CartOperation::Remove {
                product_id: id(product_id)?,
            }),
            ["set", product_id, quantity] => Ok(CartOperation::Set {
                product_id: id(product_id)?,
                quantity: qty(quantity)?,
            }),
            ["clear"] => Ok(CartOperation::Clear),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for CartOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartOperation::Add {
                product_id,
                quantity,
            } => write!(f, "add:{}:{}", product_id, quantity),
            CartOperation::Remove { product_id } => write!(f, "remove:{}", product_id),
            CartOperation::Set {
                product_id,
                quantity,
            } => write!(f, "set:{}:{}", product_id, quantity),
            CartOperation::Clear => write!(f, "clear"),
        }
    }
}
