//! Cart line items.

use serde::{Deserialize, Serialize};

use super::price::Price;
use super::product::Product;

/// One cart entry: a product snapshot plus its quantity.
///
/// The product fields are copied at add time; later catalog edits must not
/// retroactively change cart contents. Serialized flattened
/// (`{...product fields, "quantity": n}`), which is the persisted wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartLineItem {
    /// Create a line item snapshotting `product` with quantity 1.
    #[must_use]
    pub fn new(product: &Product) -> Self {
        Self {
            product: product.clone(),
            quantity: 1,
        }
    }

    /// Price of this line: unit price times quantity, saturating.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price * self.quantity
    }
}
