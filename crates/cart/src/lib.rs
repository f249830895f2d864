//! NO DISTRAXIONZ Cart - Reducer-driven cart and wishlist stores.
//!
//! The cart is a single-writer state container: callers go through the
//! [`CartStore`] façade, which dispatches actions into a pure reducer and
//! persists the resulting line items to local storage after every change.
//! Derived values (`total`, `item_count`) are always recomputed from the
//! line items, never mutated independently.
//!
//! # Architecture
//!
//! ```text
//! caller -> CartStore method -> CartAction -> reduce() -> CartState
//!                                                 |
//!                                                 +-> PersistenceAdapter::save
//! ```
//!
//! On startup the persistence adapter reads storage once and the store
//! rehydrates through a `Load` action. Corrupt or missing persisted data
//! is treated as an empty cart and logged, never surfaced.
//!
//! # Modules
//!
//! - [`state`] - The cart state shape and derived totals
//! - [`reducer`] - Pure state-transition function and its actions
//! - [`store`] - The `CartStore` façade and `CartContext` provider
//! - [`wishlist`] - Wishlist store persisted alongside the cart
//! - [`storage`] - File and in-memory storage backends
//! - [`persist`] - JSON persistence adapter over a storage backend
//! - [`config`] - Storage location and key configuration

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod persist;
pub mod reducer;
pub mod state;
pub mod storage;
pub mod store;
pub mod wishlist;

pub use config::StoreConfig;
pub use error::CartError;
pub use reducer::{CartAction, reduce};
pub use state::CartState;
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};
pub use store::{CartContext, CartStore};
pub use wishlist::WishlistStore;
