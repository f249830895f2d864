//! Catalog product snapshot.

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::money::RawPrice;

/// A catalog product as snapshotted at the moment it enters the cart.
///
/// The cart store treats this as an immutable value: prices are not
/// re-fetched after the item is added, and nothing here is ever written
/// back to the catalog. Field names serialize camelCase to match the
/// persisted storage layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Catalog handle for the product.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Current price, numeric or currency-formatted string.
    pub price: RawPrice,
    /// Compare-at price shown struck through, if the product is on sale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<RawPrice>,
    /// Primary image reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Available sizes, if the product has a size axis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Vec<String>>,
    /// Available colors, if the product has a color axis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    /// Catalog category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Whether the product is featured on the shop page.
    #[serde(default)]
    pub featured: bool,
}

impl Product {
    /// Create a minimal product snapshot with just an ID, name, and price.
    ///
    /// Optional catalog fields default to absent; useful for tests and
    /// for callers that only have the fields the cart actually needs.
    #[must_use]
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: impl Into<RawPrice>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: price.into(),
            original_price: None,
            image: None,
            sizes: None,
            colors: None,
            category: None,
            featured: false,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "id": "focus-hoodie",
            "name": "Focus Hoodie",
            "price": "$89.99",
            "originalPrice": 120,
            "sizes": ["S", "M", "L"],
            "featured": true
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id.as_str(), "focus-hoodie");
        assert_eq!(product.price, RawPrice::from("$89.99"));
        assert_eq!(product.original_price, Some(RawPrice::Amount(120.0)));
        assert_eq!(product.sizes.unwrap().len(), 3);
        assert!(product.featured);
        assert!(product.image.is_none());
    }

    #[test]
    fn test_absent_optionals_are_skipped() {
        let product = Product::new("shirt-1", "Logo Tee", 45.0);
        let json = serde_json::to_string(&product).unwrap();
        assert!(!json.contains("originalPrice"));
        assert!(!json.contains("image"));
        assert!(json.contains("\"featured\":false"));
    }

    #[test]
    fn test_snapshot_round_trip() {
        let product = Product {
            id: ProductId::new("shirt-1"),
            name: "Logo Tee".to_owned(),
            price: RawPrice::from("$45.00"),
            original_price: Some(RawPrice::Amount(60.0)),
            image: Some("/images/logo-tee.webp".to_owned()),
            sizes: Some(vec!["M".to_owned(), "L".to_owned()]),
            colors: Some(vec!["Black".to_owned()]),
            category: Some("tees".to_owned()),
            featured: false,
        };

        let json = serde_json::to_string(&product).unwrap();
        let parsed: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, product);
    }
}
