//! The shopping-list store.

use crate::cart::{CartItem, ListSummary, NewItem};
use crate::ids::CartItemId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// In-memory shopping list with exclusive ownership of its rows.
///
/// All operations are total: absent ids are no-ops, and quantities are
/// floored at zero with zero-quantity rows removed. Process-scoped and
/// single-writer; a multi-threaded host should guard the whole store
/// behind one mutex.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ShoppingList {
    items: Vec<CartItem>,
}

impl ShoppingList {
    /// Create an empty shopping list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Demo fixture: three seeded rows of concrete, cement, and rebar.
    pub fn demo() -> Self {
        let mut list = Self::new();
        list.add_item(NewItem::new(
            "QUIKRETE Concrete Mix",
            "QUIKRETE",
            "Home Depot",
            Money::from_cents(498),
            "80 lb bag",
            134,
        ));
        list.add_item(NewItem::new(
            "Portland Cement",
            "QUIKRETE",
            "Menards",
            Money::from_cents(449),
            "80 lb bag",
            5,
        ));
        list.add_item(NewItem::new(
            "Rebar #4",
            "Steel Dynamics",
            "Lowe's",
            Money::from_cents(897),
            "20 ft bar",
            12,
        ));
        list
    }

    /// Add a candidate row, merging on `(supplier, brand)`.
    ///
    /// A match bumps the existing row's quantity and keeps every other
    /// field of the existing row; no match creates a fresh row with a
    /// generated id. Quantities floor at zero uniformly: a merge driven
    /// to zero removes the row, and a non-positive candidate with no
    /// match creates nothing.
    ///
    /// Returns the id of the affected row if one exists afterwards.
    pub fn add_item(&mut self, candidate: NewItem) -> Option<CartItemId> {
        if let Some(pos) = self
            .items
            .iter()
            .position(|i| i.supplier == candidate.supplier && i.brand == candidate.brand)
        {
            let new_quantity = (self.items[pos].quantity + candidate.quantity).max(0);
            if new_quantity == 0 {
                self.items.remove(pos);
                return None;
            }
            self.items[pos].quantity = new_quantity;
            return Some(self.items[pos].id.clone());
        }

        if candidate.quantity <= 0 {
            return None;
        }

        let item = CartItem {
            id: CartItemId::generate(),
            name: candidate.name,
            brand: candidate.brand,
            supplier: candidate.supplier,
            price: candidate.price,
            unit: candidate.unit,
            quantity: candidate.quantity,
        };
        let id = item.id.clone();
        self.items.push(item);
        Some(id)
    }

    /// Apply a quantity delta to a row. Absent ids are ignored.
    ///
    /// The new quantity is floored at zero; a row at zero is removed.
    pub fn update_quantity(&mut self, id: &CartItemId, delta: i64) {
        if let Some(pos) = self.items.iter().position(|i| &i.id == id) {
            let new_quantity = (self.items[pos].quantity + delta).max(0);
            if new_quantity == 0 {
                self.items.remove(pos);
            } else {
                self.items[pos].quantity = new_quantity;
            }
        }
    }

    /// Remove a row unconditionally. Absent ids are ignored.
    pub fn remove_item(&mut self, id: &CartItemId) {
        self.items.retain(|i| &i.id != id);
    }

    /// Drop every row.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Number of rows (line entries, not unit sum).
    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    /// Sum of quantities across all rows.
    pub fn total_units(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Sum of price * quantity across all rows.
    pub fn total_cost(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Whether a row with this exact `(supplier, brand)` pair exists.
    pub fn is_item_added(&self, supplier: &str, brand: &str) -> bool {
        self.items
            .iter()
            .any(|i| i.supplier == supplier && i.brand == brand)
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get a row by id.
    pub fn get_item(&self, id: &CartItemId) -> Option<&CartItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Read-only snapshot of the current rows.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Order-summary breakdown for the current rows.
    pub fn summary(&self) -> ListSummary {
        ListSummary::for_list(self)
    }
}
