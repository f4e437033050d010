//! The per-session product catalog.
//!
//! Loaded once, read-only afterwards. The catalog is the root of the
//! id-uniqueness invariant: construction rejects duplicate ids so every
//! downstream component can rely on `id` being a key.

use std::collections::HashMap;

use thiserror::Error;

use sneaker_hub_core::{Product, ProductId};

/// Error constructing a catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Two products carried the same id.
    #[error("duplicate product id: {0}")]
    DuplicateId(ProductId),
}

/// Immutable, ordered product list with id lookup.
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    products: Vec<Product>,
    by_id: HashMap<ProductId, usize>,
}

impl ProductCatalog {
    /// Build a catalog from an ordered product list.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if two products share an id.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(products.len());
        for (index, product) in products.iter().enumerate() {
            if by_id.insert(product.id, index).is_some() {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }
        Ok(Self { products, by_id })
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.by_id.get(&id).and_then(|&index| self.products.get(index))
    }

    /// The full product list, in load order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
