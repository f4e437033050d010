//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `STOREFRONT_CATALOG_URL` - Catalog document URL
//!   (default: `http://127.0.0.1:3000/data/products.json`)
//! - `STOREFRONT_CART_PATH` - Path of the cart storage slot
//!   (default: `sneaker_cart.json`)

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

const DEFAULT_CATALOG_URL: &str = "http://127.0.0.1:3000/data/products.json";
const DEFAULT_CART_PATH: &str = "sneaker_cart.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// URL of the catalog JSON document
    pub catalog_url: Url,
    /// Path of the file-backed cart storage slot
    pub cart_path: PathBuf,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let catalog_url = std::env::var("STOREFRONT_CATALOG_URL")
            .unwrap_or_else(|_| DEFAULT_CATALOG_URL.to_string());
        let catalog_url = Url::parse(&catalog_url).map_err(|err| {
            ConfigError::InvalidEnvVar("STOREFRONT_CATALOG_URL".to_string(), err.to_string())
        })?;

        let cart_path = std::env::var("STOREFRONT_CART_PATH")
            .map_or_else(|_| PathBuf::from(DEFAULT_CART_PATH), PathBuf::from);
        if cart_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "STOREFRONT_CART_PATH".to_string(),
                "path must not be empty".to_string(),
            ));
        }

        Ok(Self {
            catalog_url,
            cart_path,
        })
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            catalog_url: Url::parse(DEFAULT_CATALOG_URL).expect("default catalog URL parses"),
            cart_path: PathBuf::from(DEFAULT_CART_PATH),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StorefrontConfig::default();
        assert_eq!(config.catalog_url.as_str(), DEFAULT_CATALOG_URL);
        assert_eq!(config.cart_path, PathBuf::from(DEFAULT_CART_PATH));
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        let err = Url::parse("not a url").map_err(|err| {
            ConfigError::InvalidEnvVar("STOREFRONT_CATALOG_URL".to_string(), err.to_string())
        });
        assert!(matches!(err, Err(ConfigError::InvalidEnvVar(_, _))));
    }
}
