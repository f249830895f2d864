//! Storage backends for persisted store data.
//!
//! The stores only need a string key-value surface (the local-storage
//! model): read a value, write a value, remove a key. [`FileStorage`]
//! backs each key with a JSON file on disk; [`MemoryStorage`] keeps
//! everything in a map for isolated tests.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use thiserror::Error;

/// Errors that can occur in a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying filesystem operation failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Durable string key-value storage.
///
/// Implementations must treat a missing key as `Ok(None)`, not an error;
/// the persistence adapter relies on that to distinguish "no saved cart"
/// from a real backend failure.
pub trait Storage {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any existing value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be written.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

// Stores take storage by value; the blanket impl lets callers hand in a
// borrow instead and keep inspecting the backend from outside.
impl<T: Storage + ?Sized> Storage for &T {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
