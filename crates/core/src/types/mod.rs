//! Core types for the NO DISTRAXIONZ cart store.
//!
//! This module provides the domain values the cart and wishlist stores
//! operate on.

pub mod id;
pub mod line;
pub mod money;
pub mod product;

pub use id::ProductId;
pub use line::{CartLine, LineKey};
pub use money::{PriceError, RawPrice};
pub use product::Product;
