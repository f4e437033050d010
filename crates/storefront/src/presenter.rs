//! The presentation seam.
//!
//! The engine computes values; whatever renders them (DOM, server template,
//! terminal) implements [`Presenter`] and is injected into the controller.
//! No component in this crate locates or touches presentation state itself.

use sneaker_hub_core::{CartLineItem, Price, Product};

/// Callbacks the presentation layer implements.
pub trait Presenter {
    /// Render a product listing (catalog page or category page).
    fn render_products(&mut self, products: &[Product]);

    /// Render the cart contents and totals.
    fn render_cart(&mut self, items: &[CartLineItem], total_items: u32, total_price: Price);

    /// Show a transient user notification.
    fn notify(&mut self, message: &str);

    /// Show the detail view for a product.
    fn show_details(&mut self, product: &Product);

    /// Ask the user to confirm an order at `total`. Returns the choice.
    fn confirm_order(&mut self, total: Price) -> bool;
}

/// Test double that records every callback.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    /// Product id lists passed to `render_products`, in call order.
    pub rendered_products: Vec<Vec<i32>>,
    /// `(total_items, total_price)` passed to `render_cart`, in call order.
    pub rendered_carts: Vec<(u32, Price)>,
    pub notifications: Vec<String>,
    /// Product names passed to `show_details`.
    pub details_shown: Vec<String>,
    /// Totals passed to `confirm_order`.
    pub confirmations_asked: Vec<Price>,
    /// Answer `confirm_order` will give.
    pub confirm_answer: bool,
}

impl RecordingPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A presenter that answers `yes` to order confirmations.
    #[must_use]
    pub fn confirming(yes: bool) -> Self {
        Self {
            confirm_answer: yes,
            ..Self::default()
        }
    }

    /// The most recent product listing.
    #[must_use]
    pub fn last_products(&self) -> Option<&[i32]> {
        self.rendered_products.last().map(Vec::as_slice)
    }
}

impl Presenter for RecordingPresenter {
    fn render_products(&mut self, products: &[Product]) {
        self.rendered_products
            .push(products.iter().map(|p| p.id.as_i32()).collect());
    }

    fn render_cart(&mut self, _items: &[CartLineItem], total_items: u32, total_price: Price) {
        self.rendered_carts.push((total_items, total_price));
    }

    fn notify(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }

    fn show_details(&mut self, product: &Product) {
        self.details_shown.push(product.name.clone());
    }

    fn confirm_order(&mut self, total: Price) -> bool {
        self.confirmations_asked.push(total);
        self.confirm_answer
    }
}
