//! Catalog document loading.
//!
//! The catalog is a JSON array of product records fetched once per session.
//! Parsed catalogs are cached by source URL so detail lookups never trigger
//! a refetch. On any failure the loader falls back to a built-in single-item
//! demo catalog and hands back the notice to show the user - a load failure
//! is never fatal.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use thiserror::Error;

use sneaker_hub_core::{Category, Price, Product, ProductId};

use crate::catalog::{CatalogError, ProductCatalog};

/// Parsed catalogs kept per source URL.
const CACHE_CAPACITY: u64 = 8;

/// How long a cached catalog stays fresh.
const CACHE_TTL: Duration = Duration::from_secs(60 * 60);

/// Notice shown when the demo catalog stands in for the real one.
pub const DEMO_NOTICE: &str = "Showing demo products (catalog could not be loaded)";

/// Error fetching the raw catalog document.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP transport or status error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-HTTP source failure.
    #[error("catalog source unavailable: {0}")]
    Unavailable(String),
}

/// Error loading and constructing a catalog.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("malformed catalog document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Source of the raw catalog document.
pub trait CatalogFetcher {
    /// Fetch the document at `url`.
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// HTTP fetcher for hosted catalog documents.
#[derive(Debug, Clone, Default)]
pub struct HttpCatalogFetcher {
    client: reqwest::Client,
}

impl HttpCatalogFetcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CatalogFetcher for HttpCatalogFetcher {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, FetchError>> + Send {
        let request = self.client.get(url);
        async move {
            let response = request.send().await?.error_for_status()?;
            Ok(response.text().await?)
        }
    }
}

/// Loads, parses, and caches product catalogs.
pub struct CatalogLoader<F> {
    fetcher: F,
    cache: Cache<String, Arc<ProductCatalog>>,
}

impl<F: CatalogFetcher> CatalogLoader<F> {
    #[must_use]
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            cache: Cache::builder()
                .max_capacity(CACHE_CAPACITY)
                .time_to_live(CACHE_TTL)
                .build(),
        }
    }

    /// Load the catalog at `url`, hitting the cache first.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if the document cannot be fetched, parsed, or
    /// violates the unique-id invariant.
    pub async fn load(&self, url: &str) -> Result<Arc<ProductCatalog>, LoadError> {
        if let Some(hit) = self.cache.get(url).await {
            return Ok(hit);
        }

        let body = self.fetcher.fetch(url).await?;
        let products: Vec<Product> = serde_json::from_str(&body)?;
        tracing::info!(count = products.len(), "Catalog loaded");

        let catalog = Arc::new(ProductCatalog::new(products)?);
        self.cache
            .insert(url.to_string(), Arc::clone(&catalog))
            .await;
        Ok(catalog)
    }

    /// Load the catalog, falling back to the demo catalog on any failure.
    ///
    /// Returns the catalog plus the user-facing notice when the fallback was
    /// taken.
    pub async fn load_or_demo(&self, url: &str) -> (Arc<ProductCatalog>, Option<String>) {
        match self.load(url).await {
            Ok(catalog) => (catalog, None),
            Err(err) => {
                tracing::warn!(error = %err, "Catalog load failed, using demo catalog");
                (Arc::new(demo_catalog()), Some(DEMO_NOTICE.to_string()))
            }
        }
    }
}

/// The built-in single-item catalog used when loading fails.
#[must_use]
pub fn demo_catalog() -> ProductCatalog {
    let demo = Product {
        id: ProductId::new(1),
        name: "Demo: Air Max".to_string(),
        price: Price::new(9999),
        category: Category::Men,
        description: "Demonstration product".to_string(),
        image: "https://images.unsplash.com/photo-1542291026-7eec264c27ff?auto=format&fit=crop&w=800&q=80"
            .to_string(),
        featured: false,
    };
    // A single product cannot violate the unique-id invariant.
    ProductCatalog::new(vec![demo]).unwrap_or_default()
}
