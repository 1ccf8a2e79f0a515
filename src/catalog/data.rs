//! The load-once materials catalog.

use crate::catalog::{Material, MaterialEntry, SupplierOffering};
use crate::error::MaterialsError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Static reference table mapping each material to its catalog entry.
///
/// Built once (from the built-in standard data or from JSON) and handed
/// to the calculator at construction; never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    entries: Vec<MaterialEntry>,
}

impl Catalog {
    /// Build a catalog from entries, validating each one.
    pub fn new(entries: Vec<MaterialEntry>) -> Result<Self, MaterialsError> {
        for entry in &entries {
            entry.validate()?;
        }
        Ok(Self { entries })
    }

    /// Load a catalog from a JSON array of entries.
    pub fn from_json(json: &str) -> Result<Self, MaterialsError> {
        let entries: Vec<MaterialEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// Serialize the catalog to JSON.
    pub fn to_json(&self) -> Result<String, MaterialsError> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }

    /// Look up the entry for a material.
    pub fn entry(&self, material: Material) -> Option<&MaterialEntry> {
        self.entries.iter().find(|e| e.material == material)
    }

    /// All entries, in declaration order.
    pub fn entries(&self) -> &[MaterialEntry] {
        &self.entries
    }

    /// The standard retail catalog: big-box supplier pricing for the
    /// four supported materials.
    pub fn standard() -> Self {
        let entries = vec![
            MaterialEntry {
                material: Material::Concrete,
                name: "Concrete".to_string(),
                description: "Ready-mix concrete for foundations, slabs".to_string(),
                // cubic feet per 80 lb bag
                coverage_cu_ft: 0.6,
                offerings: vec![
                    offering("Home Depot", "QUIKRETE", "80 lb", 4.98, 79.0, true),
                    offering("Home Depot", "Sakrete Fast Setting", "80 lb", 5.47, 79.0, true),
                    offering("Menards", "Mastercraft", "80 lb", 4.49, 59.0, true),
                    offering("Menards", "QUIKRETE", "80 lb", 4.89, 59.0, true),
                    offering("Lowe's", "QUIKRETE", "80 lb", 5.12, 69.0, true),
                    offering("Lowe's", "Sakrete", "80 lb", 4.78, 69.0, false),
                ],
            },
            MaterialEntry {
                material: Material::Sand,
                name: "Sand".to_string(),
                description: "Play sand, masonry sand, leveling sand".to_string(),
                coverage_cu_ft: 0.5,
                offerings: vec![
                    offering("Home Depot", "QUIKRETE Play Sand", "50 lb", 3.48, 79.0, true),
                    offering("Menards", "Mastercraft Sand", "50 lb", 2.99, 59.0, true),
                    offering("Lowe's", "QUIKRETE All-Purpose Sand", "50 lb", 3.67, 69.0, true),
                ],
            },
            MaterialEntry {
                material: Material::Gravel,
                name: "Gravel".to_string(),
                description: "Pea gravel, crushed stone, drainage gravel".to_string(),
                coverage_cu_ft: 0.5,
                offerings: vec![
                    offering("Home Depot", "QUIKRETE Pea Gravel", "50 lb", 4.28, 79.0, true),
                    offering("Menards", "Mastercraft Gravel", "50 lb", 3.89, 59.0, true),
                    offering("Lowe's", "QUIKRETE Crushed Stone", "50 lb", 4.45, 69.0, true),
                ],
            },
            MaterialEntry {
                material: Material::Mulch,
                name: "Mulch".to_string(),
                description: "Bark mulch, wood chips, rubber mulch".to_string(),
                coverage_cu_ft: 2.0,
                offerings: vec![
                    offering("Home Depot", "Vigoro Red Mulch", "2 cu ft", 3.97, 79.0, true),
                    offering("Menards", "Nature Scapes Mulch", "2 cu ft", 3.49, 59.0, true),
                    offering("Lowe's", "Sta-Green Mulch", "2 cu ft", 4.15, 69.0, true),
                ],
            },
        ];

        // The built-in table upholds the entry invariants.
        Self::new(entries).expect("standard catalog is valid")
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn offering(
    supplier: &str,
    brand: &str,
    bag_size: &str,
    price: f64,
    delivery_fee: f64,
    in_stock: bool,
) -> SupplierOffering {
    SupplierOffering::new(
        supplier,
        brand,
        format!("{} bag", bag_size),
        Money::from_decimal(price),
        Money::from_decimal(delivery_fee),
        in_stock,
    )
}
