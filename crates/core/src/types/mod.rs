//! Core types for Sneaker Hub.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod id;
pub mod price;
pub mod product;

pub use cart::CartLineItem;
pub use id::*;
pub use price::Price;
pub use product::{Category, CategoryParseError, Product};
