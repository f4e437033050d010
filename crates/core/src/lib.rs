//! Sneaker Hub Core - Shared types library.
//!
//! This crate provides common types used across all Sneaker Hub components:
//! - `storefront` - The catalog/cart engine consumed by presentation layers
//! - `integration-tests` - End-to-end flows over the public API
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no storage
//! access. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices, plus the
//!   product and cart records that make up the domain

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
