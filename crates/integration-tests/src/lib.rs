//! Integration tests for Sneaker Hub.
//!
//! End-to-end flows through the storefront's public API with in-process
//! doubles: a canned catalog fetcher, memory-backed cart storage, and the
//! recording presenter.
//!
//! # Test Categories
//!
//! - `catalog_flow` - Load, filter, sort, and paginate the catalog
//! - `cart_checkout` - Cart persistence across sessions and checkout
//! - `category_pages` - Category landing-page selection and stats

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::future::Future;
use std::sync::Once;

use serde_json::json;

use sneaker_hub_storefront::loader::{CatalogFetcher, FetchError};

/// Install a fmt subscriber once for the whole test binary.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "sneaker_hub_storefront=debug".into()),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Fetcher returning a canned document (or a canned failure).
pub struct StaticFetcher {
    body: Result<String, String>,
}

impl StaticFetcher {
    #[must_use]
    pub fn ok(body: String) -> Self {
        Self { body: Ok(body) }
    }

    #[must_use]
    pub fn failing(reason: &str) -> Self {
        Self {
            body: Err(reason.to_string()),
        }
    }
}

impl CatalogFetcher for StaticFetcher {
    fn fetch(&self, _url: &str) -> impl Future<Output = Result<String, FetchError>> + Send {
        let result = self.body.clone().map_err(FetchError::Unavailable);
        async move { result }
    }
}

/// A 16-product catalog document spanning every category, with prices
/// stepping 2 000 apart and two featured pairs.
#[must_use]
pub fn catalog_json() -> String {
    let products: Vec<serde_json::Value> = (1..=16)
        .map(|id| {
            let category = match id % 3 {
                0 => "Unisex",
                1 => "Men",
                _ => "Women",
            };
            let mut product = json!({
                "id": id,
                "name": format!("Sneaker {id:02}"),
                "price": 3000 + id * 2000,
                "category": category,
                "description": format!("Pair number {id} in the lineup"),
                "image": format!("https://img.example/sneaker-{id:02}.jpg"),
            });
            if id == 4 || id == 9 {
                product["featured"] = json!(true);
            }
            product
        })
        .collect();
    serde_json::Value::Array(products).to_string()
}
