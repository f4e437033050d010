//! The storefront controller.
//!
//! UI events invoke named commands here instead of reaching into engine or
//! cart state; each command mutates the owned state, recomputes what changed,
//! and pushes the result through the injected [`Presenter`]. This is the
//! single mutation entry point for the filter spec and the cart.

use std::sync::Arc;

use sneaker_hub_core::{Category, Price, Product, ProductId};

use crate::cart::CartStore;
use crate::catalog::ProductCatalog;
use crate::category::{self, CategoryConfig, CategoryKey};
use crate::config::StorefrontConfig;
use crate::engine::{self, FilterSpec, PageView, SortMode};
use crate::error::{Result, StorefrontError};
use crate::loader::{CatalogFetcher, CatalogLoader};
use crate::presenter::Presenter;
use crate::storage::CartStorage;

/// Everything a category landing page shows.
#[derive(Debug, Clone)]
pub struct CategoryPage {
    pub config: &'static CategoryConfig,
    pub products: Vec<Product>,
    pub average_price: Option<Price>,
}

/// Owns the session state and dispatches UI commands.
pub struct Storefront<P: Presenter> {
    catalog: Arc<ProductCatalog>,
    cart: CartStore,
    spec: FilterSpec,
    presenter: P,
}

impl<P: Presenter> Storefront<P> {
    /// Assemble a storefront from already-loaded parts.
    #[must_use]
    pub fn new(catalog: Arc<ProductCatalog>, cart: CartStore, presenter: P) -> Self {
        Self {
            catalog,
            cart,
            spec: FilterSpec::default(),
            presenter,
        }
    }

    /// Load the catalog, restore the cart, and render the initial state.
    ///
    /// A failed catalog load falls back to the demo catalog and surfaces the
    /// notice as a notification; boot itself never fails.
    pub async fn boot<F: CatalogFetcher>(
        config: &StorefrontConfig,
        loader: &CatalogLoader<F>,
        storage: Box<dyn CartStorage>,
        presenter: P,
    ) -> Self {
        let (catalog, notice) = loader.load_or_demo(config.catalog_url.as_str()).await;
        let cart = CartStore::open(storage);
        let mut storefront = Self::new(catalog, cart, presenter);
        if let Some(notice) = notice {
            storefront.presenter.notify(&notice);
        }
        storefront.refresh();
        storefront.render_cart();
        storefront
    }

    /// Recompute the current page and render it.
    pub fn refresh(&mut self) -> PageView {
        let view = engine::apply(&self.catalog, &self.spec);
        self.presenter.render_products(&view.items);
        view
    }

    /// The current page without rendering (pagination buttons, stats).
    #[must_use]
    pub fn page_view(&self) -> PageView {
        engine::apply(&self.catalog, &self.spec)
    }

    // ========================================================================
    // Filter commands
    // ========================================================================

    pub fn set_sort(&mut self, sort: SortMode) -> PageView {
        self.spec.set_sort(sort);
        self.refresh()
    }

    pub fn set_search(&mut self, term: &str) -> PageView {
        self.spec.set_search(term);
        self.refresh()
    }

    pub fn toggle_category(&mut self, category: Category) -> PageView {
        self.spec.toggle_category(category);
        self.refresh()
    }

    pub fn set_min_price(&mut self, price: Price) -> PageView {
        self.spec.set_min_price(price);
        self.refresh()
    }

    pub fn set_max_price(&mut self, price: Price) -> PageView {
        self.spec.set_max_price(price);
        self.refresh()
    }

    /// Reset every filter to its default.
    pub fn clear_filters(&mut self) -> PageView {
        self.spec.reset();
        self.refresh()
    }

    pub fn go_to_page(&mut self, page: u32) -> PageView {
        self.spec.go_to_page(page);
        self.refresh()
    }

    /// "Load more": advance one page if more matches remain.
    pub fn load_more(&mut self) -> PageView {
        let total = engine::filter_all(&self.catalog, &self.spec).len();
        self.spec.advance_page(total);
        self.refresh()
    }

    // ========================================================================
    // Cart commands
    // ========================================================================

    /// Look up a product in the session catalog.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::NotFound`] for an unknown id.
    pub fn product(&self, id: ProductId) -> Result<&Product> {
        self.catalog.get(id).ok_or(StorefrontError::NotFound(id))
    }

    /// Add a product to the cart by id.
    ///
    /// An unknown id surfaces as a notification, not an error.
    pub fn add_to_cart(&mut self, id: ProductId) {
        match self.product(id).map(Product::clone) {
            Ok(product) => {
                self.cart.add(&product);
                self.presenter
                    .notify(&format!("{} added to cart!", product.name));
                self.render_cart();
            }
            Err(err) => self.presenter.notify(&err.user_message()),
        }
    }

    /// Remove a line item by product id. No-op if absent.
    pub fn remove_from_cart(&mut self, id: ProductId) {
        self.cart.remove(id);
        self.presenter.notify("Item removed from cart");
        self.render_cart();
    }

    /// Show the detail view for a product.
    pub fn show_details(&mut self, id: ProductId) {
        match self.product(id).map(Product::clone) {
            Ok(product) => self.presenter.show_details(&product),
            Err(err) => self.presenter.notify(&err.user_message()),
        }
    }

    /// Present the order total for confirmation; clear the cart on yes.
    ///
    /// Returns whether an order was placed.
    pub fn checkout(&mut self) -> bool {
        if self.cart.is_empty() {
            self.presenter.notify("Your cart is empty!");
            return false;
        }
        let total = self.cart.total_price();
        if !self.presenter.confirm_order(total) {
            return false;
        }
        self.cart.clear();
        self.presenter.notify("Order placed! This is a demo.");
        self.render_cart();
        true
    }

    // ========================================================================
    // Category pages
    // ========================================================================

    /// Select and render a category landing page.
    pub fn category_page(&mut self, key: CategoryKey) -> CategoryPage {
        let products = category::select(&self.catalog, key);
        let average_price = category::average_price(&products);
        self.presenter.render_products(&products);
        CategoryPage {
            config: category::describe(key),
            products,
            average_price,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[must_use]
    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    #[must_use]
    pub const fn spec(&self) -> &FilterSpec {
        &self.spec
    }

    #[must_use]
    pub const fn presenter(&self) -> &P {
        &self.presenter
    }

    fn render_cart(&mut self) {
        self.presenter.render_cart(
            self.cart.items(),
            self.cart.total_items(),
            self.cart.total_price(),
        );
    }
}
