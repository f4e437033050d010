//! Unified error handling.
//!
//! Provides a single `StorefrontError` that wraps every failure the engine
//! can produce. Nothing here is fatal to a session: callers are expected to
//! log the error, show [`StorefrontError::user_message`] through their
//! presenter, and degrade to a safe default.

use thiserror::Error;

use sneaker_hub_core::ProductId;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::loader::LoadError;
use crate::storage::StorageError;

/// Application-level error type for the storefront engine.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Catalog document could not be fetched or parsed.
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    /// Cart storage slot could not be read or written.
    #[error("Persistence error: {0}")]
    Persistence(#[from] StorageError),

    /// Catalog construction rejected the product list.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Product id not present in the catalog.
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl StorefrontError {
    /// The notification text shown to the user.
    ///
    /// Internal detail (URLs, paths, serde messages) stays in the logs.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Load(_) => "Could not load the catalog. Please try again.".to_string(),
            Self::Persistence(_) => "Your cart could not be saved.".to_string(),
            Self::Catalog(_) => "The catalog data is invalid.".to_string(),
            Self::NotFound(_) => "Product not found!".to_string(),
            Self::Config(_) => "The shop is misconfigured.".to_string(),
        }
    }
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;
