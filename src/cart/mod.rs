//! Shopping-list module.
//!
//! Contains the cart item types, the list store, and the order summary.

mod item;
mod store;
mod summary;

pub use item::{CartItem, NewItem};
pub use store::ShoppingList;
pub use summary::{ListSummary, DELIVERY_FEE, TAX_RATE};
