//! The cart store façade and its provider context.
//!
//! [`CartStore`] is the only entry point consumers use: imperative
//! operations backed by the reducer, plus read-only access to the
//! derived state. Mutations take `&mut self`, so transitions are
//! serialized by construction; there is exactly one writer path.
//!
//! [`CartContext`] gives the store an explicit `create -> use -> dispose`
//! lifecycle instead of a module-level singleton, so tests can run
//! isolated instances and missing wiring fails loud.

use no_distraxionz_core::{CartLine, LineKey, Product};
use rust_decimal::Decimal;

use crate::error::CartError;
use crate::persist::PersistenceAdapter;
use crate::reducer::{CartAction, reduce};
use crate::state::CartState;
use crate::storage::Storage;

/// Reducer-driven cart store with write-through persistence.
#[derive(Debug)]
pub struct CartStore<S> {
    state: CartState,
    persistence: PersistenceAdapter<S>,
}

impl<S: Storage> CartStore<S> {
    /// Create a store persisting under `key`, rehydrating any previously
    /// saved line items.
    ///
    /// Corrupt or unreadable persisted data is logged by the persistence
    /// adapter and treated as an empty cart; construction never fails.
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        let persistence = PersistenceAdapter::new(storage, key);
        let mut store = Self {
            state: CartState::empty(),
            persistence,
        };

        if let Some(items) = store.persistence.load::<Vec<CartLine>>() {
            store.apply(CartAction::Load { items });
        }

        store
    }

    /// Dispatch an action through the reducer.
    ///
    /// Actions that change the line set trigger a fire-and-forget save
    /// after the state commits; `Load` and panel flips do not.
    pub fn apply(&mut self, action: CartAction) {
        let persist = action.mutates_items();
        self.state = reduce(std::mem::take(&mut self.state), action);
        if persist {
            self.persistence.save(&self.state.items);
        }
    }

    /// Add a product/variant to the cart.
    ///
    /// Re-adding the same variant increments the existing line's
    /// quantity. `quantity` defaults to 1. Opens the cart panel.
    pub fn add_item(
        &mut self,
        product: Product,
        size: Option<&str>,
        color: Option<&str>,
        quantity: Option<u32>,
    ) {
        self.apply(CartAction::AddItem {
            product,
            size: size.map(str::to_owned),
            color: color.map(str::to_owned),
            quantity: quantity.unwrap_or(1),
        });
    }

    /// Remove a line by key.
    pub fn remove_item(&mut self, id: &LineKey) {
        self.apply(CartAction::RemoveItem { id: id.clone() });
    }

    /// Set a line's quantity; zero or negative removes the line.
    pub fn update_quantity(&mut self, id: &LineKey, quantity: i64) {
        self.apply(CartAction::UpdateQuantity {
            id: id.clone(),
            quantity,
        });
    }

    /// Empty the cart. Called by checkout after the order is confirmed;
    /// the store itself knows nothing about payment state.
    pub fn clear(&mut self) {
        self.apply(CartAction::Clear);
    }

    /// Open the cart panel. Visibility only, no commerce effect.
    pub fn open(&mut self) {
        self.apply(CartAction::Open);
    }

    /// Close the cart panel.
    pub fn close(&mut self) {
        self.apply(CartAction::Close);
    }

    /// Toggle the cart panel.
    pub fn toggle(&mut self) {
        self.apply(CartAction::Toggle);
    }

    /// The current state, read-only.
    #[must_use]
    pub const fn state(&self) -> &CartState {
        &self.state
    }

    /// Current line items.
    #[must_use]
    pub fn items(&self) -> &[CartLine] {
        &self.state.items
    }

    /// Derived cart total.
    #[must_use]
    pub const fn total(&self) -> Decimal {
        self.state.total
    }

    /// Derived item count.
    #[must_use]
    pub const fn item_count(&self) -> u32 {
        self.state.item_count
    }

    /// Whether the cart panel is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.state.is_open
    }
}

/// Provider wrapper giving the cart store an explicit lifecycle.
///
/// Consumers receive a context rather than a global; using it before a
/// store has been provided is a programming error and returns
/// [`CartError::StoreNotInitialized`].
#[derive(Debug, Default)]
pub struct CartContext<S> {
    store: Option<CartStore<S>>,
}

impl<S: Storage> CartContext<S> {
    /// An uninitialized context.
    #[must_use]
    pub const fn new() -> Self {
        Self { store: None }
    }

    /// Provide the store, replacing any previous one.
    pub fn init(&mut self, store: CartStore<S>) {
        self.store = Some(store);
    }

    /// Whether a store has been provided.
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.store.is_some()
    }

    /// Read access to the provided store.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::StoreNotInitialized`] if no store was
    /// provided.
    pub fn store(&self) -> Result<&CartStore<S>, CartError> {
        self.store.as_ref().ok_or(CartError::StoreNotInitialized)
    }

    /// Write access to the provided store.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::StoreNotInitialized`] if no store was
    /// provided.
    pub fn store_mut(&mut self) -> Result<&mut CartStore<S>, CartError> {
        self.store.as_mut().ok_or(CartError::StoreNotInitialized)
    }

    /// Drop the store. Persisted data is left in place.
    pub fn dispose(&mut self) {
        self.store = None;
    }
}
