//! Construction-materials pricing and shopping-list domain logic.
//!
//! This crate provides the core behind a material-estimation app:
//!
//! - **Catalog**: materials, supplier offerings, coverage data
//! - **Calculator**: project dimensions to bag counts and ranked supplier quotes
//! - **Cart**: shopping list with merge-on-add, quantity deltas, and totals
//! - **Suppliers**: static directory of supplier profiles
//!
//! # Example
//!
//! ```rust
//! use buildmat::prelude::*;
//!
//! let catalog = Catalog::standard();
//! let calculator = Calculator::new(&catalog);
//!
//! // Price a 40 x 20 ft slab poured 2 inches deep.
//! let result = calculator
//!     .calculate(&CalcRequest::new("40", "20", "2", "concrete"))
//!     .unwrap();
//! let best = result.best_quote().unwrap().clone();
//!
//! // Put the cheapest offer on the shopping list.
//! let mut list = ShoppingList::new();
//! list.add_item(NewItem::from_quote(&result.material_name, &best));
//! assert!(list.is_item_added(&best.supplier, &best.brand));
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod calc;
pub mod cart;
pub mod catalog;
pub mod suppliers;

pub use error::MaterialsError;
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::MaterialsError;
    pub use crate::ids::*;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Catalog, Material, MaterialEntry, SupplierOffering};

    // Calculator
    pub use crate::calc::{CalcRequest, CalcResult, Calculator, SupplierQuote};

    // Cart
    pub use crate::cart::{CartItem, ListSummary, NewItem, ShoppingList};

    // Suppliers
    pub use crate::suppliers::{MaterialListing, SupplierDirectory, SupplierProfile};
}
