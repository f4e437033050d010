//! The cart state machine.
//!
//! A `CartStore` owns the ordered list of line items and writes it through
//! to its storage slot after every mutation, so storage and in-memory state
//! never diverge across a synchronous observation. Restore tolerates absent
//! or malformed payloads by starting empty.

use sneaker_hub_core::{CartLineItem, Price, Product, ProductId};

use crate::storage::CartStorage;

/// Cart over a durable storage slot.
///
/// Invariant: at most one line item per product id. `add` merges quantities;
/// a persisted payload that violates the invariant is merged on restore.
pub struct CartStore {
    items: Vec<CartLineItem>,
    storage: Box<dyn CartStorage>,
}

impl CartStore {
    /// Open the cart, restoring whatever the slot holds.
    ///
    /// Read failures and malformed payloads degrade to an empty cart with a
    /// warning; they are never surfaced as errors.
    #[must_use]
    pub fn open(storage: Box<dyn CartStorage>) -> Self {
        let items = match storage.load() {
            Ok(Some(payload)) => match serde_json::from_str::<Vec<CartLineItem>>(&payload) {
                Ok(items) => merge_duplicates(items),
                Err(err) => {
                    tracing::warn!(error = %err, "Malformed cart payload, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!(error = %err, "Cart slot unreadable, starting empty");
                Vec::new()
            }
        };
        Self { items, storage }
    }

    /// Add one unit of `product`.
    ///
    /// If a line item with the same id exists its quantity is incremented;
    /// otherwise a new line item is appended with a snapshot of the product
    /// as of now.
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self.items.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity += 1;
        } else {
            self.items.push(CartLineItem::new(product));
        }
        self.persist();
    }

    /// Remove the line item with `id`. No-op if absent.
    pub fn remove(&mut self, id: ProductId) {
        self.items.retain(|line| line.product.id != id);
        self.persist();
    }

    /// Empty the cart (checkout confirmation).
    pub fn clear(&mut self) {
        self.items.clear();
        self.persist();
    }

    /// Sum of all quantities.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    /// Sum of `price * quantity` over all line items.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    /// The line items, insertion-order preserved.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Write the cart through to the storage slot.
    ///
    /// A failed write is logged and the in-memory state stays authoritative;
    /// the next successful write rewrites the whole slot.
    fn persist(&self) {
        let payload = match serde_json::to_string(&self.items) {
            Ok(payload) => payload,
            Err(err) => {
                tracing::error!(error = %err, "Failed to serialize cart");
                return;
            }
        };
        if let Err(err) = self.storage.save(&payload) {
            tracing::error!(error = %err, "Failed to persist cart");
        }
    }
}

/// Collapse duplicate product ids by summing quantities, preserving the
/// position of each id's first occurrence.
fn merge_duplicates(items: Vec<CartLineItem>) -> Vec<CartLineItem> {
    let mut merged: Vec<CartLineItem> = Vec::with_capacity(items.len());
    for item in items {
        if let Some(existing) = merged.iter_mut().find(|l| l.product.id == item.product.id) {
            debug_assert!(false, "duplicate product id in persisted cart: {}", item.product.id);
            existing.quantity = existing.quantity.saturating_add(item.quantity);
        } else {
            merged.push(item);
        }
    }
    merged
}
