//! Store-level error type.
//!
//! Recoverable conditions (corrupt persisted data, failed writes) never
//! reach this type; they degrade to safe values inside the persistence
//! adapter and are logged there. What remains are programming errors and
//! the storage failures callers explicitly ask about.

use thiserror::Error;

use crate::storage::StorageError;

/// Errors surfaced by the cart store façade.
#[derive(Debug, Error)]
pub enum CartError {
    /// A context accessor was called before a store was provided.
    ///
    /// This only happens from a wiring mistake and should fail loud
    /// during development; it is not a runtime/user-facing condition.
    #[error("cart store used before initialization")]
    StoreNotInitialized,

    /// A storage backend operation failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CartError::StoreNotInitialized;
        assert_eq!(err.to_string(), "cart store used before initialization");
    }
}
