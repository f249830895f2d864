//! Cart line items and their identity keys.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::product::Product;

/// Placeholder for a variant axis the product does not define.
const DEFAULT_AXIS: &str = "default";

/// The stable composite identity of a cart line.
///
/// Shaped as `{productId}-{size}-{color}`, with missing axes normalized
/// to the literal `"default"`. Two additions of the same product and
/// variant resolve to the same key and merge into one line; a different
/// size or color resolves to a distinct key and gets its own line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineKey(String);

impl LineKey {
    /// Resolve the key for a product/variant combination.
    ///
    /// Deterministic: the same inputs always produce the same key.
    #[must_use]
    pub fn resolve(product_id: &ProductId, size: Option<&str>, color: Option<&str>) -> Self {
        Self(format!(
            "{product_id}-{}-{}",
            size.unwrap_or(DEFAULT_AXIS),
            color.unwrap_or(DEFAULT_AXIS)
        ))
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for LineKey {
    fn from(key: &str) -> Self {
        Self(key.to_owned())
    }
}

impl From<String> for LineKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// One line in the cart: a product snapshot, the selected variant, and a
/// quantity.
///
/// A line with quantity zero never exists in visible or persisted state;
/// the reducer removes it instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Derived composite key; stable for the lifetime of the line.
    pub id: LineKey,
    /// Product snapshot taken when the item was added.
    pub product: Product,
    /// Positive quantity, always >= 1.
    pub quantity: u32,
    /// Selected size, present only if the product defines sizes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Selected color, present only if the product defines colors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl CartLine {
    /// Create a line for a product/variant combination.
    #[must_use]
    pub fn new(product: Product, size: Option<String>, color: Option<String>, quantity: u32) -> Self {
        Self {
            id: LineKey::resolve(&product.id, size.as_deref(), color.as_deref()),
            product,
            quantity,
            size,
            color,
        }
    }

    /// The line's contribution to the cart total.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price.normalize() * Decimal::from(self.quantity)
    }
}
