//! Materials catalog module.
//!
//! Contains the material reference data: materials, supplier offerings,
//! and the load-once catalog table.

mod data;
mod material;

pub use data::Catalog;
pub use material::{Material, MaterialEntry, SupplierOffering};
