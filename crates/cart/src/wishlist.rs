//! Wishlist store.
//!
//! A much simpler sibling of the cart: a set of product snapshots unique
//! by product ID, no quantities, no variants, no derived money. It shares
//! the cart's persistence pattern (write-through JSON under its own
//! namespaced key, corrupt data treated as empty).

use no_distraxionz_core::{Product, ProductId};

use crate::persist::PersistenceAdapter;
use crate::storage::Storage;

/// Wishlist of saved products, persisted to local storage.
#[derive(Debug)]
pub struct WishlistStore<S> {
    items: Vec<Product>,
    persistence: PersistenceAdapter<S>,
}

impl<S: Storage> WishlistStore<S> {
    /// Create a store persisting under `key`, rehydrating any previously
    /// saved products. Never fails; unreadable data starts empty.
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        let persistence = PersistenceAdapter::new(storage, key);
        let items = persistence.load::<Vec<Product>>().unwrap_or_default();
        Self { items, persistence }
    }

    /// Add the product if absent, remove it if present.
    ///
    /// Returns `true` if the product was added.
    pub fn toggle(&mut self, product: Product) -> bool {
        let added = if self.contains(&product.id) {
            self.items.retain(|item| item.id != product.id);
            false
        } else {
            self.items.push(product);
            true
        };
        self.persistence.save(&self.items);
        added
    }

    /// Remove a product by ID. Removing an absent product is a no-op,
    /// but still rewrites storage.
    pub fn remove(&mut self, id: &ProductId) {
        self.items.retain(|item| &item.id != id);
        self.persistence.save(&self.items);
    }

    /// Empty the wishlist.
    pub fn clear(&mut self) {
        self.items.clear();
        self.persistence.save(&self.items);
    }

    /// Whether the wishlist holds the given product.
    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.items.iter().any(|item| &item.id == id)
    }

    /// Saved products, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Number of saved products.
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Whether the wishlist is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    const KEY: &str = "test-wishlist";

    fn hoodie() -> Product {
        Product::new("hoodie-1", "Focus Hoodie", "$89.99")
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut wishlist = WishlistStore::new(MemoryStorage::new(), KEY);

        assert!(wishlist.toggle(hoodie()));
        assert!(wishlist.contains(&ProductId::new("hoodie-1")));
        assert_eq!(wishlist.count(), 1);

        assert!(!wishlist.toggle(hoodie()));
        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_persists_across_instances() {
        let storage = MemoryStorage::new();
        {
            let mut wishlist = WishlistStore::new(&storage, KEY);
            wishlist.toggle(hoodie());
        }

        let wishlist = WishlistStore::new(&storage, KEY);
        assert!(wishlist.contains(&ProductId::new("hoodie-1")));
    }

    #[test]
    fn test_corrupt_storage_starts_empty() {
        let storage = MemoryStorage::new();
        storage.seed(KEY, "not json");
        let wishlist = WishlistStore::new(&storage, KEY);
        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_remove_and_clear() {
        let mut wishlist = WishlistStore::new(MemoryStorage::new(), KEY);
        wishlist.toggle(hoodie());
        wishlist.toggle(Product::new("shirt-1", "Logo Tee", 45.0));

        wishlist.remove(&ProductId::new("hoodie-1"));
        assert_eq!(wishlist.count(), 1);

        wishlist.clear();
        assert!(wishlist.is_empty());
    }
}
