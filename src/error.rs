//! Materials error types.

use thiserror::Error;

/// Errors that can occur when validating calculator input.
///
/// The shopping-list store has no error kind: all of its operations are
/// total over their inputs (absent ids are no-ops).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MaterialsError {
    /// A required measurement field was left empty.
    #[error("Missing input: {0}")]
    MissingInput(&'static str),

    /// A measurement field did not parse to a finite number.
    #[error("Invalid number for {field}: {value:?}")]
    InvalidNumber {
        field: &'static str,
        value: String,
    },

    /// A measurement parsed but was zero or negative.
    #[error("Dimension {field} must be positive, got {value}")]
    NonPositiveDimension {
        field: &'static str,
        value: f64,
    },

    /// The requested material id is not in the catalog.
    #[error("Unknown material: {0}")]
    UnknownMaterial(String),

    /// A material id parsed but the catalog has no entry for it.
    #[error("Material not in catalog: {0}")]
    MaterialNotInCatalog(String),

    /// Catalog data failed validation (bad coverage, duplicate offering).
    #[error("Invalid catalog entry for {material}: {reason}")]
    InvalidCatalogEntry { material: String, reason: String },

    /// Catalog JSON could not be parsed.
    #[error("Catalog parse error: {0}")]
    CatalogParse(String),
}

impl From<serde_json::Error> for MaterialsError {
    fn from(e: serde_json::Error) -> Self {
        MaterialsError::CatalogParse(e.to_string())
    }
}
