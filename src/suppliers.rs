//! Static supplier directory.
//!
//! Reference profiles for the local big-box suppliers: rating, distance,
//! delivery fee, and a sample of their material listings.

use crate::ids::SupplierId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A material product as listed by one supplier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MaterialListing {
    /// Listing name (e.g., "QUIKRETE Concrete Mix").
    pub name: String,
    /// Brand name.
    pub brand: String,
    /// Price per unit.
    pub price: Money,
    /// Purchasable unit label.
    pub unit: String,
    /// Stock status.
    pub in_stock: bool,
}

impl MaterialListing {
    pub fn new(
        name: impl Into<String>,
        brand: impl Into<String>,
        price: Money,
        unit: impl Into<String>,
        in_stock: bool,
    ) -> Self {
        Self {
            name: name.into(),
            brand: brand.into(),
            price,
            unit: unit.into(),
            in_stock,
        }
    }
}

/// A supplier's directory profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SupplierProfile {
    /// Unique supplier identifier.
    pub id: SupplierId,
    /// Display name.
    pub name: String,
    /// Customer rating out of 5.
    pub rating: f64,
    /// Distance from the user in miles.
    pub distance_miles: f64,
    /// Flat per-order delivery fee.
    pub delivery_fee: Money,
    /// Sample material listings.
    pub listings: Vec<MaterialListing>,
}

impl SupplierProfile {
    /// Listings currently in stock.
    pub fn listings_in_stock(&self) -> impl Iterator<Item = &MaterialListing> {
        self.listings.iter().filter(|l| l.in_stock)
    }
}

/// Read-only directory of supplier profiles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SupplierDirectory {
    profiles: Vec<SupplierProfile>,
}

impl SupplierDirectory {
    pub fn new(profiles: Vec<SupplierProfile>) -> Self {
        Self { profiles }
    }

    /// Look up a profile by id.
    pub fn get(&self, id: &SupplierId) -> Option<&SupplierProfile> {
        self.profiles.iter().find(|p| &p.id == id)
    }

    /// All profiles, in declaration order.
    pub fn profiles(&self) -> &[SupplierProfile] {
        &self.profiles
    }

    /// Profiles sorted by rating, best first.
    pub fn sorted_by_rating(&self) -> Vec<&SupplierProfile> {
        let mut sorted: Vec<_> = self.profiles.iter().collect();
        sorted.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        sorted
    }

    /// The closest supplier.
    pub fn nearest(&self) -> Option<&SupplierProfile> {
        self.profiles
            .iter()
            .min_by(|a, b| a.distance_miles.total_cmp(&b.distance_miles))
    }

    /// The standard local directory: Home Depot, Menards, and Lowe's
    /// with their concrete listings.
    pub fn standard() -> Self {
        Self::new(vec![
            SupplierProfile {
                id: SupplierId::new("home-depot"),
                name: "Home Depot".to_string(),
                rating: 4.3,
                distance_miles: 2.1,
                delivery_fee: Money::from_cents(7_900),
                listings: vec![
                    MaterialListing::new(
                        "QUIKRETE Concrete Mix",
                        "QUIKRETE",
                        Money::from_cents(498),
                        "80 lb bag",
                        true,
                    ),
                    MaterialListing::new(
                        "Sakrete Fast Setting Concrete",
                        "Sakrete",
                        Money::from_cents(547),
                        "80 lb bag",
                        true,
                    ),
                    MaterialListing::new(
                        "QUIKRETE High Strength Concrete",
                        "QUIKRETE",
                        Money::from_cents(628),
                        "80 lb bag",
                        false,
                    ),
                ],
            },
            SupplierProfile {
                id: SupplierId::new("menards"),
                name: "Menards".to_string(),
                rating: 4.1,
                distance_miles: 3.7,
                delivery_fee: Money::from_cents(5_900),
                listings: vec![
                    MaterialListing::new(
                        "Mastercraft Concrete Mix",
                        "Mastercraft",
                        Money::from_cents(449),
                        "80 lb bag",
                        true,
                    ),
                    MaterialListing::new(
                        "QUIKRETE Concrete Mix",
                        "QUIKRETE",
                        Money::from_cents(489),
                        "80 lb bag",
                        true,
                    ),
                    MaterialListing::new(
                        "Rapid Set Concrete",
                        "Rapid Set",
                        Money::from_cents(799),
                        "80 lb bag",
                        true,
                    ),
                ],
            },
            SupplierProfile {
                id: SupplierId::new("lowes"),
                name: "Lowe's".to_string(),
                rating: 4.2,
                distance_miles: 4.2,
                delivery_fee: Money::from_cents(6_900),
                listings: vec![
                    MaterialListing::new(
                        "QUIKRETE Concrete Mix",
                        "QUIKRETE",
                        Money::from_cents(512),
                        "80 lb bag",
                        true,
                    ),
                    MaterialListing::new(
                        "Sakrete Concrete Mix",
                        "Sakrete",
                        Money::from_cents(478),
                        "80 lb bag",
                        true,
                    ),
                    MaterialListing::new(
                        "Red Devil Concrete Patch",
                        "Red Devil",
                        Money::from_cents(1_299),
                        "25 lb bag",
                        true,
                    ),
                ],
            },
        ])
    }
}

impl Default for SupplierDirectory {
    fn default() -> Self {
        Self::standard()
    }
}
