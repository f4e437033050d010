//! Category landing pages.
//!
//! Each page selects a capped subset of the catalog plus static display
//! metadata. Thin pages (fewer than the display cap) are backfilled with
//! Unisex products in catalog order.

use serde::{Deserialize, Serialize};

use sneaker_hub_core::{Category, Price, Product};

use crate::catalog::ProductCatalog;

/// Maximum products shown on a category page.
pub const DISPLAY_CAP: usize = 12;

/// Price above which a non-featured product qualifies for the special page.
pub const SPECIAL_PRICE_FLOOR: Price = Price::new(20_000);

/// The category pages the shop exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKey {
    Men,
    Women,
    Special,
}

/// Static display metadata for a category page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryConfig {
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Icon reference, opaque to the engine.
    pub icon: &'static str,
    pub description: &'static str,
    /// Accent color as a CSS hex value.
    pub color: &'static str,
    /// The catalog category the page maps to.
    pub filter: Category,
}

const MEN: CategoryConfig = CategoryConfig {
    title: "MEN'S SNEAKERS",
    subtitle: "Strength, style and technology for true champions",
    icon: "fas fa-dumbbell",
    description: "From running to basketball - find your strength",
    color: "#4ecdc4",
    filter: Category::Men,
};

const WOMEN: CategoryConfig = CategoryConfig {
    title: "WOMEN'S SNEAKERS",
    subtitle: "Lightness, grace and comfort in every step",
    icon: "fas fa-heart",
    description: "For sport, fitness and everyday style",
    color: "#ff6b6b",
    filter: Category::Women,
};

const SPECIAL: CategoryConfig = CategoryConfig {
    title: "STANDOUT MODELS",
    subtitle: "Exclusives, collaborations and one-of-a-kind designs",
    icon: "fas fa-star",
    description: "The pairs that set you apart from the crowd",
    color: "#ffd166",
    filter: Category::Unisex,
};

/// Display metadata for `key`.
#[must_use]
pub const fn describe(key: CategoryKey) -> &'static CategoryConfig {
    match key {
        CategoryKey::Men => &MEN,
        CategoryKey::Women => &WOMEN,
        CategoryKey::Special => &SPECIAL,
    }
}

/// Whether `product` belongs on the page for `key`.
///
/// Men/women pages match the exact category. The special page selects
/// featured products and anything priced above [`SPECIAL_PRICE_FLOOR`],
/// regardless of category.
fn belongs(key: CategoryKey, product: &Product) -> bool {
    match key {
        CategoryKey::Men => product.category == Category::Men,
        CategoryKey::Women => product.category == Category::Women,
        CategoryKey::Special => product.featured || product.price > SPECIAL_PRICE_FLOOR,
    }
}

/// Select the products for a category page, capped at [`DISPLAY_CAP`].
///
/// Pages with fewer than the cap are backfilled with Unisex products in
/// catalog order, skipping products already selected.
#[must_use]
pub fn select(catalog: &ProductCatalog, key: CategoryKey) -> Vec<Product> {
    let mut picked: Vec<Product> = catalog
        .products()
        .iter()
        .filter(|product| belongs(key, product))
        .cloned()
        .collect();

    if picked.len() < DISPLAY_CAP {
        let missing = DISPLAY_CAP - picked.len();
        let backfill: Vec<Product> = catalog
            .products()
            .iter()
            .filter(|product| {
                product.category == Category::Unisex
                    && !picked.iter().any(|p| p.id == product.id)
            })
            .take(missing)
            .cloned()
            .collect();
        picked.extend(backfill);
    }

    picked.truncate(DISPLAY_CAP);
    picked
}

/// Arithmetic mean of the prices, rounded to nearest. `None` when empty.
#[must_use]
pub fn average_price(products: &[Product]) -> Option<Price> {
    if products.is_empty() {
        return None;
    }
    let count = products.len() as u64;
    let sum: u64 = products.iter().map(|p| p.price.amount()).sum();
    Some(Price::new((sum + count / 2) / count))
}
