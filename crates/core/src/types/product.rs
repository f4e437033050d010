//! Product records and the closed category set.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::id::ProductId;
use super::price::Price;

/// The closed set of catalog categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Men,
    Women,
    Unisex,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Self; 3] = [Self::Men, Self::Women, Self::Unisex];

    /// The display label, identical to the serialized form.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Men => "Men",
            Self::Women => "Women",
            Self::Unisex => "Unisex",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Error parsing a category label.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct CategoryParseError(pub String);

impl std::str::FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Men" => Ok(Self::Men),
            "Women" => Ok(Self::Women),
            "Unisex" => Ok(Self::Unisex),
            other => Err(CategoryParseError(other.to_string())),
        }
    }
}

/// A catalog product record.
///
/// Loaded once per session from the catalog document and treated as
/// read-only afterwards. `id` is unique across the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub category: Category,
    pub description: String,
    /// Display asset reference, opaque to the engine.
    pub image: String,
    /// Flag used by the special-category selection. Absent in most records.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub featured: bool,
}
