//! NO DISTRAXIONZ Core - Shared domain types.
//!
//! This crate provides the value types used across the cart store
//! components:
//! - `cart` - Reducer-driven cart and wishlist stores
//! - `cli` - Command-line tools for inspecting persisted stores
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access. Product
//! values are immutable snapshots taken at the moment an item enters the
//! cart; nothing in this crate re-fetches or mutates catalog data.
//!
//! # Modules
//!
//! - [`types`] - Product snapshots, the price union, and line identity

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
