//! Pure cart state transitions.
//!
//! The reducer is the single writer path for [`CartState`]. It performs
//! no I/O, never panics, and recomputes the derived totals from the full
//! line set on every transition. Persistence happens after the fact, in
//! the store façade.

use no_distraxionz_core::{CartLine, LineKey, Product};

use crate::state::CartState;

/// A cart state transition.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Add a product/variant combination to the cart.
    ///
    /// Merges into an existing line when the resolved key matches
    /// (incrementing its quantity), otherwise appends a new line. Also
    /// opens the cart panel; that is a deliberate UX side effect of the
    /// action's contract, not an accident of the implementation.
    AddItem {
        /// Product snapshot at the moment of adding.
        product: Product,
        /// Selected size, if the product has a size axis.
        size: Option<String>,
        /// Selected color, if the product has a color axis.
        color: Option<String>,
        /// Quantity to add; values below 1 are treated as 1.
        quantity: u32,
    },
    /// Remove the line with the given key.
    RemoveItem {
        /// Key of the line to remove.
        id: LineKey,
    },
    /// Set a line's quantity. A quantity of zero or less removes the
    /// line, so no line with a non-positive quantity can ever persist.
    UpdateQuantity {
        /// Key of the line to update.
        id: LineKey,
        /// New quantity; signed so callers can express "below zero".
        quantity: i64,
    },
    /// Empty the cart.
    Clear,
    /// Replace the line set wholesale from persisted data.
    ///
    /// Dispatched once at startup by the store; the panel flag is left
    /// untouched.
    Load {
        /// Rehydrated line items.
        items: Vec<CartLine>,
    },
    /// Open the cart panel. No commerce effect.
    Open,
    /// Close the cart panel. No commerce effect.
    Close,
    /// Toggle the cart panel. No commerce effect.
    Toggle,
}

impl CartAction {
    /// Whether this action can change the persisted line set.
    ///
    /// `Load` is excluded: it originates from storage, so writing it
    /// straight back would be a no-op.
    #[must_use]
    pub const fn mutates_items(&self) -> bool {
        matches!(
            self,
            Self::AddItem { .. }
                | Self::RemoveItem { .. }
                | Self::UpdateQuantity { .. }
                | Self::Clear
        )
    }
}

/// Apply `action` to `state`, producing the next state.
#[must_use]
pub fn reduce(state: CartState, action: CartAction) -> CartState {
    match action {
        CartAction::AddItem {
            product,
            size,
            color,
            quantity,
        } => add_item(state, product, size, color, quantity.max(1)),
        CartAction::RemoveItem { id } => remove_item(state, &id),
        CartAction::UpdateQuantity { id, quantity } => {
            if quantity <= 0 {
                remove_item(state, &id)
            } else {
                update_quantity(state, &id, u32::try_from(quantity).unwrap_or(u32::MAX))
            }
        }
        CartAction::Clear => CartState::from_items(Vec::new(), state.is_open),
        CartAction::Load { items } => CartState::from_items(items, state.is_open),
        CartAction::Open => CartState { is_open: true, ..state },
        CartAction::Close => CartState {
            is_open: false,
            ..state
        },
        CartAction::Toggle => CartState {
            is_open: !state.is_open,
            ..state
        },
    }
}

fn add_item(
    state: CartState,
    product: Product,
    size: Option<String>,
    color: Option<String>,
    quantity: u32,
) -> CartState {
    let key = LineKey::resolve(&product.id, size.as_deref(), color.as_deref());
    let mut items = state.items;

    if let Some(line) = items.iter_mut().find(|line| line.id == key) {
        line.quantity = line.quantity.saturating_add(quantity);
    } else {
        items.push(CartLine::new(product, size, color, quantity));
    }

    // Adding always opens the panel so the shopper sees the result.
    CartState::from_items(items, true)
}

fn remove_item(state: CartState, id: &LineKey) -> CartState {
    let is_open = state.is_open;
    let items = state
        .items
        .into_iter()
        .filter(|line| &line.id != id)
        .collect();
    CartState::from_items(items, is_open)
}

fn update_quantity(state: CartState, id: &LineKey, quantity: u32) -> CartState {
    let is_open = state.is_open;
    let mut items = state.items;
    if let Some(line) = items.iter_mut().find(|line| &line.id == id) {
        line.quantity = quantity;
    }
    CartState::from_items(items, is_open)
}
