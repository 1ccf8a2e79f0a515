//! Material and supplier offering types.

use crate::error::MaterialsError;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A category of bulk construction substance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Material {
    #[default]
    Concrete,
    Sand,
    Gravel,
    Mulch,
}

impl Material {
    /// All materials, in catalog order.
    pub const ALL: [Material; 4] = [
        Material::Concrete,
        Material::Sand,
        Material::Gravel,
        Material::Mulch,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Material::Concrete => "concrete",
            Material::Sand => "sand",
            Material::Gravel => "gravel",
            Material::Mulch => "mulch",
        }
    }

    /// Parse a material id string.
    pub fn parse(s: &str) -> Result<Self, MaterialsError> {
        match s.to_lowercase().as_str() {
            "concrete" => Ok(Material::Concrete),
            "sand" => Ok(Material::Sand),
            "gravel" => Ok(Material::Gravel),
            "mulch" => Ok(Material::Mulch),
            _ => Err(MaterialsError::UnknownMaterial(s.to_string())),
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A specific supplier+brand purchasable product for a material.
///
/// `(supplier, brand)` identifies a distinct product line and must be
/// unique within one catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SupplierOffering {
    /// Supplier name (e.g., "Home Depot").
    pub supplier: String,
    /// Brand name (e.g., "QUIKRETE").
    pub brand: String,
    /// Purchasable unit label (e.g., "80 lb bag").
    pub bag_size: String,
    /// Price per bag.
    pub price: Money,
    /// Flat per-order delivery fee.
    pub delivery_fee: Money,
    /// Stock status. Informational only: out-of-stock offerings are
    /// still priced and ranked.
    pub in_stock: bool,
}

impl SupplierOffering {
    pub fn new(
        supplier: impl Into<String>,
        brand: impl Into<String>,
        bag_size: impl Into<String>,
        price: Money,
        delivery_fee: Money,
        in_stock: bool,
    ) -> Self {
        Self {
            supplier: supplier.into(),
            brand: brand.into(),
            bag_size: bag_size.into(),
            price,
            delivery_fee,
            in_stock,
        }
    }
}

/// A material's catalog entry: coverage data plus its supplier offerings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MaterialEntry {
    /// Material this entry describes.
    pub material: Material,
    /// Display name (e.g., "Concrete").
    pub name: String,
    /// Short description for listings.
    pub description: String,
    /// Cubic feet covered by one bag.
    pub coverage_cu_ft: f64,
    /// Supplier offerings, in declaration order.
    pub offerings: Vec<SupplierOffering>,
}

impl MaterialEntry {
    /// Validate the entry invariants: positive coverage and unique
    /// `(supplier, brand)` pairs.
    pub fn validate(&self) -> Result<(), MaterialsError> {
        if !(self.coverage_cu_ft.is_finite() && self.coverage_cu_ft > 0.0) {
            return Err(MaterialsError::InvalidCatalogEntry {
                material: self.material.to_string(),
                reason: format!("coverage must be positive, got {}", self.coverage_cu_ft),
            });
        }
        for (i, a) in self.offerings.iter().enumerate() {
            for b in &self.offerings[i + 1..] {
                if a.supplier == b.supplier && a.brand == b.brand {
                    return Err(MaterialsError::InvalidCatalogEntry {
                        material: self.material.to_string(),
                        reason: format!("duplicate offering {} / {}", a.supplier, a.brand),
                    });
                }
            }
        }
        Ok(())
    }
}
