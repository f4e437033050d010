//! Category landing pages: selection policy, backfill, and stats.

use sneaker_hub_core::{Category, Price};
use sneaker_hub_storefront::category::{CategoryKey, DISPLAY_CAP};
use sneaker_hub_storefront::config::StorefrontConfig;
use sneaker_hub_storefront::loader::CatalogLoader;
use sneaker_hub_storefront::presenter::RecordingPresenter;
use sneaker_hub_storefront::storage::MemoryStorage;
use sneaker_hub_storefront::Storefront;

use sneaker_hub_integration_tests::{StaticFetcher, catalog_json, init_tracing};

async fn booted_shop() -> Storefront<RecordingPresenter> {
    init_tracing();
    let loader = CatalogLoader::new(StaticFetcher::ok(catalog_json()));
    Storefront::boot(
        &StorefrontConfig::default(),
        &loader,
        Box::new(MemoryStorage::new()),
        RecordingPresenter::new(),
    )
    .await
}

fn ids(products: &[sneaker_hub_core::Product]) -> Vec<i32> {
    products.iter().map(|p| p.id.as_i32()).collect()
}

#[tokio::test]
async fn test_men_page_backfills_with_unisex() {
    let mut shop = booted_shop().await;
    let page = shop.category_page(CategoryKey::Men);

    assert_eq!(page.config.filter, Category::Men);
    // Six Men pairs, then Unisex backfill in catalog order.
    assert_eq!(ids(&page.products), [1, 4, 7, 10, 13, 16, 3, 6, 9, 12, 15]);
    assert!(page.products.len() <= DISPLAY_CAP);
}

#[tokio::test]
async fn test_special_page_selects_featured_or_high_priced() {
    let mut shop = booted_shop().await;
    let page = shop.category_page(CategoryKey::Special);

    // Featured pairs 4 and 9 qualify regardless of price; everything above
    // 20 000 qualifies regardless of category; Unisex 3 and 6 backfill.
    assert_eq!(
        ids(&page.products),
        [4, 9, 10, 11, 12, 13, 14, 15, 16, 3, 6]
    );
}

#[tokio::test]
async fn test_average_price_stat() {
    let mut shop = booted_shop().await;
    let page = shop.category_page(CategoryKey::Special);
    assert_eq!(page.average_price, Some(Price::new(23545)));
}

#[tokio::test]
async fn test_page_renders_through_presenter() {
    let mut shop = booted_shop().await;
    let page = shop.category_page(CategoryKey::Women);
    assert_eq!(
        shop.presenter().last_products().unwrap(),
        ids(&page.products).as_slice()
    );
    assert_eq!(page.config.title, "WOMEN'S SNEAKERS");
}
