//! Cart state shape.

use no_distraxionz_core::{CartLine, LineKey};
use rust_decimal::Decimal;

/// The full cart state: ordered line items plus derived totals and the
/// slide-over panel visibility flag.
///
/// `total` and `item_count` are derived values. They are recomputed from
/// `items` on every reducer transition and never mutated independently,
/// which removes the class of bugs where a total drifts from the lines
/// it supposedly summarizes. `is_open` is UI state and is not persisted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CartState {
    /// Line items, ordered by insertion, unique by key.
    pub items: Vec<CartLine>,
    /// Sum of `normalized price * quantity` over all lines.
    pub total: Decimal,
    /// Sum of quantities over all lines.
    pub item_count: u32,
    /// Whether the cart panel is open.
    pub is_open: bool,
}

impl CartState {
    /// An empty, closed cart.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a state from line items, recomputing the derived totals.
    #[must_use]
    pub(crate) fn from_items(items: Vec<CartLine>, is_open: bool) -> Self {
        let (total, item_count) = totals(&items);
        Self {
            items,
            total,
            item_count,
            is_open,
        }
    }

    /// Look up a line by its key.
    #[must_use]
    pub fn line(&self, id: &LineKey) -> Option<&CartLine> {
        self.items.iter().find(|line| &line.id == id)
    }
}

/// Compute `(total, item_count)` from a set of lines.
#[must_use]
pub fn totals(items: &[CartLine]) -> (Decimal, u32) {
    items.iter().fold(
        (Decimal::ZERO, 0u32),
        |(total, count), line| {
            (
                total + line.line_total(),
                count.saturating_add(line.quantity),
            )
        },
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::str::FromStr;

    use no_distraxionz_core::Product;

    use super::*;

    #[test]
    fn test_empty_state() {
        let state = CartState::empty();
        assert!(state.items.is_empty());
        assert_eq!(state.total, Decimal::ZERO);
        assert_eq!(state.item_count, 0);
        assert!(!state.is_open);
    }

    #[test]
    fn test_totals_mixed_price_shapes() {
        let items = vec![
            CartLine::new(Product::new("shirt-1", "Logo Tee", 45.0), None, None, 1),
            CartLine::new(
                Product::new("hoodie-1", "Focus Hoodie", "$49.99"),
                Some("M".to_owned()),
                None,
                2,
            ),
        ];

        let (total, count) = totals(&items);
        assert_eq!(total, Decimal::from_str("144.98").unwrap());
        assert_eq!(count, 3);
    }

    #[test]
    fn test_from_items_recomputes() {
        let items = vec![CartLine::new(
            Product::new("shirt-1", "Logo Tee", 45.0),
            None,
            None,
            3,
        )];
        let state = CartState::from_items(items, true);
        assert_eq!(state.total, Decimal::from(135));
        assert_eq!(state.item_count, 3);
        assert!(state.is_open);
    }

    #[test]
    fn test_line_lookup() {
        let line = CartLine::new(
            Product::new("shirt-1", "Logo Tee", 45.0),
            Some("M".to_owned()),
            Some("Black".to_owned()),
            1,
        );
        let key = line.id.clone();
        let state = CartState::from_items(vec![line], false);

        assert!(state.line(&key).is_some());
        assert!(state.line(&LineKey::from("shirt-1-L-Black")).is_none());
    }
}
