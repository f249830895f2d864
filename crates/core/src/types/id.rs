//! Product identifier newtype.
//!
//! Catalog products are keyed by string handles (e.g. `"focus-hoodie"`),
//! so the wrapper holds a `String` rather than a numeric ID.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A catalog product identifier.
///
/// Wrapping the handle in a newtype keeps product IDs from being mixed up
/// with line keys, which are also strings but carry variant information.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a new product ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `ProductId` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let id = ProductId::new("focus-hoodie");
        assert_eq!(format!("{id}"), "focus-hoodie");
    }

    #[test]
    fn test_serde_transparent() {
        let id = ProductId::new("shirt-1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"shirt-1\"");

        let parsed: ProductId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_from_str_slice() {
        let id: ProductId = "shirt-1".into();
        assert_eq!(id.as_str(), "shirt-1");
    }
}
