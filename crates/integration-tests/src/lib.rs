//! Integration tests for the NO DISTRAXIONZ cart store.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p no-distraxionz-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - Full store lifecycle through the façade
//! - `persistence` - File-backed round-trips and corrupt-storage recovery
//!
//! The tests in `tests/` exercise the stores against real file-backed
//! storage in per-test temp directories; [`TempDir`] creates a unique
//! directory per test and removes it on drop.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::{Path, PathBuf};

use no_distraxionz_cart::FileStorage;
use uuid::Uuid;

/// A uniquely named temp directory, removed on drop.
pub struct TempDir {
    path: PathBuf,
}

impl TempDir {
    /// Create a fresh directory under the system temp dir.
    #[must_use]
    pub fn new() -> Self {
        let path = std::env::temp_dir().join(format!("ndx-it-{}", Uuid::new_v4()));
        Self { path }
    }

    /// The directory path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A file-backed storage rooted here.
    #[must_use]
    pub fn storage(&self) -> FileStorage {
        FileStorage::new(&self.path)
    }
}

impl Default for TempDir {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}
