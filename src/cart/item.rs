//! Shopping-list item types.

use crate::ids::CartItemId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A row in the shopping list.
///
/// Owned exclusively by [`ShoppingList`](crate::cart::ShoppingList);
/// callers read rows through its queries and mutate them only through
/// its operations. At most one row exists per `(supplier, brand)` pair
/// and `quantity` is always positive — a row at zero is removed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Unique row identifier, stable for the row's lifetime.
    pub id: CartItemId,
    /// Product name (e.g., "Concrete Mix").
    pub name: String,
    /// Brand name.
    pub brand: String,
    /// Supplier name.
    pub supplier: String,
    /// Price per unit.
    pub price: Money,
    /// Purchasable unit label (e.g., "80 lb bag").
    pub unit: String,
    /// Units to purchase.
    pub quantity: i64,
}

impl CartItem {
    /// Line total: price * quantity.
    pub fn line_total(&self) -> Money {
        self.price * self.quantity
    }
}

/// An id-less candidate row, as submitted by a caller.
///
/// Merging happens on `(supplier, brand)`; when a matching row already
/// exists the candidate's other fields are discarded and only the
/// quantity is applied.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewItem {
    /// Product name.
    pub name: String,
    /// Brand name.
    pub brand: String,
    /// Supplier name.
    pub supplier: String,
    /// Price per unit.
    pub price: Money,
    /// Purchasable unit label.
    pub unit: String,
    /// Units to purchase.
    pub quantity: i64,
}

impl NewItem {
    pub fn new(
        name: impl Into<String>,
        brand: impl Into<String>,
        supplier: impl Into<String>,
        price: Money,
        unit: impl Into<String>,
        quantity: i64,
    ) -> Self {
        Self {
            name: name.into(),
            brand: brand.into(),
            supplier: supplier.into(),
            price,
            unit: unit.into(),
            quantity,
        }
    }

    /// Build a candidate from a calculator quote: the quote's bag count
    /// becomes the quantity and the material name becomes "<name> Mix".
    pub fn from_quote(material_name: &str, quote: &crate::calc::SupplierQuote) -> Self {
        Self::new(
            format!("{} Mix", material_name),
            quote.brand.clone(),
            quote.supplier.clone(),
            quote.price,
            quote.bag_size.clone(),
            quote.bags,
        )
    }
}
