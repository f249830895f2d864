//! Store configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `NDX_DATA_DIR` - Directory holding the persisted store files
//!   (default: `.no-distraxionz`)
//!
//! Every variable has a valid default, so loading cannot fail; the
//! config exists so the CLI and embedding applications agree on where
//! the persisted stores live.

use std::path::PathBuf;

use crate::storage::FileStorage;

/// Well-known storage key for the cart line items.
pub const CART_STORAGE_KEY: &str = "no-distraxionz-cart";

/// Well-known storage key for the wishlist products.
pub const WISHLIST_STORAGE_KEY: &str = "no-distraxionz-wishlist";

/// Location and namespacing of the persisted stores.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding one JSON file per storage key.
    pub data_dir: PathBuf,
    /// Storage key for the cart.
    pub cart_key: String,
    /// Storage key for the wishlist.
    pub wishlist_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".no-distraxionz"),
            cart_key: CART_STORAGE_KEY.to_owned(),
            wishlist_key: WISHLIST_STORAGE_KEY.to_owned(),
        }
    }
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    #[must_use]
    pub fn from_env() -> Self {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self {
            data_dir: PathBuf::from(get_env_or_default("NDX_DATA_DIR", ".no-distraxionz")),
            ..Self::default()
        }
    }

    /// File-backed storage for the cart store.
    #[must_use]
    pub fn cart_storage(&self) -> FileStorage {
        FileStorage::new(&self.data_dir)
    }

    /// File-backed storage for the wishlist store.
    #[must_use]
    pub fn wishlist_storage(&self) -> FileStorage {
        FileStorage::new(&self.data_dir)
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
