//! Materials quantity and pricing calculator.
//!
//! Turns project dimensions into a required volume, a bag count per
//! supplier offering, and a list of supplier quotes ranked by total
//! product cost.

use crate::catalog::{Catalog, Material, MaterialEntry};
use crate::error::MaterialsError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Raw calculation request as collected at the UI boundary.
///
/// All fields are strings: validation (missing, non-numeric, unknown
/// material) happens inside [`Calculator::calculate`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CalcRequest {
    /// Project length in feet.
    pub length: String,
    /// Project width in feet.
    pub width: String,
    /// Project depth in inches.
    pub depth_inches: String,
    /// Material id (e.g., "concrete").
    pub material: String,
}

impl CalcRequest {
    pub fn new(
        length: impl Into<String>,
        width: impl Into<String>,
        depth_inches: impl Into<String>,
        material: impl Into<String>,
    ) -> Self {
        Self {
            length: length.into(),
            width: width.into(),
            depth_inches: depth_inches.into(),
            material: material.into(),
        }
    }
}

/// A priced supplier option for one calculation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SupplierQuote {
    /// Supplier name.
    pub supplier: String,
    /// Brand name.
    pub brand: String,
    /// Purchasable unit label (e.g., "80 lb bag").
    pub bag_size: String,
    /// Price per bag.
    pub price: Money,
    /// Bags needed to cover the required volume.
    pub bags: i64,
    /// Product cost: price * bags. Excludes delivery.
    pub total_cost: Money,
    /// Stock status, informational only.
    pub in_stock: bool,
    /// Flat per-order delivery fee.
    pub delivery_fee: Money,
}

impl SupplierQuote {
    /// Product cost plus the supplier's flat delivery fee.
    pub fn total_with_delivery(&self) -> Money {
        self.total_cost + self.delivery_fee
    }
}

/// Result of one calculation: required volume plus ranked supplier quotes.
///
/// Recomputed on every request, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalcResult {
    /// Required volume in cubic feet, unrounded.
    pub volume_cu_ft: f64,
    /// Material that was priced.
    pub material: Material,
    /// Material display name.
    pub material_name: String,
    /// Cubic feet covered by one bag.
    pub coverage_cu_ft: f64,
    /// Bags needed for the top-ranked quote.
    pub bags_needed: i64,
    /// Product cost of the top-ranked quote.
    pub estimated_cost: Money,
    /// Bag size of the top-ranked quote.
    pub bag_size: String,
    /// Quotes for every offering, ascending by `total_cost`. Ties keep
    /// catalog order; out-of-stock offerings rank like any other.
    pub quotes: Vec<SupplierQuote>,
}

impl CalcResult {
    /// Required volume rounded to two decimals for display.
    pub fn display_volume(&self) -> f64 {
        (self.volume_cu_ft * 100.0).round() / 100.0
    }

    /// The cheapest quote. Present for any catalog entry with offerings.
    pub fn best_quote(&self) -> Option<&SupplierQuote> {
        self.quotes.first()
    }

    /// Quotes currently in stock, cheapest first.
    pub fn quotes_in_stock(&self) -> impl Iterator<Item = &SupplierQuote> {
        self.quotes.iter().filter(|q| q.in_stock)
    }
}

/// Stateless pricing calculator over a fixed catalog.
#[derive(Debug, Clone)]
pub struct Calculator<'a> {
    catalog: &'a Catalog,
}

impl<'a> Calculator<'a> {
    /// Create a calculator over the given catalog.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Validate a raw request and run the calculation.
    ///
    /// Fails with `MissingInput` on an empty field, `InvalidNumber` on a
    /// non-finite parse, `UnknownMaterial` on an unrecognized material id,
    /// and `NonPositiveDimension` on a zero or negative measurement.
    pub fn calculate(&self, request: &CalcRequest) -> Result<CalcResult, MaterialsError> {
        for (field, value) in [
            ("length", &request.length),
            ("width", &request.width),
            ("depth_inches", &request.depth_inches),
        ] {
            if value.trim().is_empty() {
                return Err(MaterialsError::MissingInput(field));
            }
        }

        let length = parse_dimension("length", &request.length)?;
        let width = parse_dimension("width", &request.width)?;
        let depth_inches = parse_dimension("depth_inches", &request.depth_inches)?;
        let material = Material::parse(&request.material)?;

        self.calculate_dimensions(length, width, depth_inches, material)
    }

    /// Typed entry point for callers that already hold numbers.
    ///
    /// `depth_inches` is in inches; length and width are in feet.
    pub fn calculate_dimensions(
        &self,
        length: f64,
        width: f64,
        depth_inches: f64,
        material: Material,
    ) -> Result<CalcResult, MaterialsError> {
        for (field, value) in [
            ("length", length),
            ("width", width),
            ("depth_inches", depth_inches),
        ] {
            if !value.is_finite() {
                return Err(MaterialsError::InvalidNumber {
                    field,
                    value: value.to_string(),
                });
            }
            if value <= 0.0 {
                return Err(MaterialsError::NonPositiveDimension { field, value });
            }
        }

        let entry = self
            .catalog
            .entry(material)
            .ok_or_else(|| MaterialsError::MaterialNotInCatalog(material.to_string()))?;

        let volume = length * width * (depth_inches / 12.0);
        Ok(price_entry(entry, volume))
    }
}

/// Price every offering of an entry against a required volume.
fn price_entry(entry: &MaterialEntry, volume_cu_ft: f64) -> CalcResult {
    let bags = (volume_cu_ft / entry.coverage_cu_ft).ceil() as i64;

    let mut quotes: Vec<SupplierQuote> = entry
        .offerings
        .iter()
        .map(|o| SupplierQuote {
            supplier: o.supplier.clone(),
            brand: o.brand.clone(),
            bag_size: o.bag_size.clone(),
            price: o.price,
            bags,
            total_cost: o.price * bags,
            in_stock: o.in_stock,
            delivery_fee: o.delivery_fee,
        })
        .collect();

    // Stable: ties keep catalog declaration order.
    quotes.sort_by_key(|q| q.total_cost);

    // Entry validation guarantees coverage > 0; an entry with no
    // offerings yields an empty quote list and zeroed headline fields.
    let (bags_needed, estimated_cost, bag_size) = match quotes.first() {
        Some(best) => (best.bags, best.total_cost, best.bag_size.clone()),
        None => (bags, Money::zero(), String::new()),
    };

    CalcResult {
        volume_cu_ft,
        material: entry.material,
        material_name: entry.name.clone(),
        coverage_cu_ft: entry.coverage_cu_ft,
        bags_needed,
        estimated_cost,
        bag_size,
        quotes,
    }
}

fn parse_dimension(field: &'static str, value: &str) -> Result<f64, MaterialsError> {
    let parsed: f64 = value
        .trim()
        .parse()
        .map_err(|_| MaterialsError::InvalidNumber {
            field,
            value: value.to_string(),
        })?;
    if !parsed.is_finite() {
        return Err(MaterialsError::InvalidNumber {
            field,
            value: value.to_string(),
        });
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{MaterialEntry, SupplierOffering};

    fn standard() -> Catalog {
        Catalog::standard()
    }

    #[test]
    fn test_concrete_slab_anchor() {
        // 40 x 20 ft at 2 inches: 133.33 cu ft, 223 bags of QUIKRETE
        // at $4.98 from Home Depot ranks second; Menards Mastercraft
        // at $4.49 wins.
        let catalog = standard();
        let calculator = Calculator::new(&catalog);
        let result = calculator
            .calculate(&CalcRequest::new("40", "20", "2", "concrete"))
            .unwrap();

        assert!((result.volume_cu_ft - 133.3333).abs() < 0.001);
        assert_eq!(result.display_volume(), 133.33);
        assert_eq!(result.bags_needed, 223);
        assert_eq!(result.coverage_cu_ft, 0.6);

        let quikrete_hd = result
            .quotes
            .iter()
            .find(|q| q.supplier == "Home Depot" && q.brand == "QUIKRETE")
            .unwrap();
        assert_eq!(quikrete_hd.bags, 223);
        assert_eq!(quikrete_hd.total_cost, Money::from_cents(111_054)); // $1110.54

        let best = result.best_quote().unwrap();
        assert_eq!(best.supplier, "Menards");
        assert_eq!(best.brand, "Mastercraft");
        assert_eq!(result.estimated_cost, best.total_cost);
        assert_eq!(result.bag_size, "80 lb bag");
    }

    #[test]
    fn test_bags_is_ceiling_of_volume_over_coverage() {
        let catalog = standard();
        let calculator = Calculator::new(&catalog);
        for (l, w, d) in [(10.0, 10.0, 3.0), (7.5, 3.2, 1.0), (1.0, 1.0, 12.0)] {
            for material in Material::ALL {
                let result = calculator
                    .calculate_dimensions(l, w, d, material)
                    .unwrap();
                let volume = l * w * (d / 12.0);
                let expected = (volume / result.coverage_cu_ft).ceil() as i64;
                for quote in &result.quotes {
                    assert_eq!(quote.bags, expected);
                    assert_eq!(quote.total_cost, quote.price * expected);
                }
            }
        }
    }

    #[test]
    fn test_quotes_sorted_ascending_by_total_cost() {
        let catalog = standard();
        let calculator = Calculator::new(&catalog);
        let result = calculator
            .calculate_dimensions(40.0, 20.0, 2.0, Material::Concrete)
            .unwrap();

        for pair in result.quotes.windows(2) {
            assert!(pair[0].total_cost <= pair[1].total_cost);
        }
    }

    #[test]
    fn test_tied_quotes_keep_catalog_order() {
        let price = Money::from_cents(500);
        let fee = Money::from_cents(7900);
        let entry = MaterialEntry {
            material: Material::Sand,
            name: "Sand".to_string(),
            description: String::new(),
            coverage_cu_ft: 0.5,
            offerings: vec![
                SupplierOffering::new("First", "Brand A", "50 lb bag", price, fee, true),
                SupplierOffering::new("Second", "Brand B", "50 lb bag", price, fee, true),
                SupplierOffering::new("Third", "Brand C", "50 lb bag", price, fee, false),
            ],
        };
        let catalog = Catalog::new(vec![entry]).unwrap();
        let calculator = Calculator::new(&catalog);
        let result = calculator
            .calculate_dimensions(10.0, 10.0, 1.0, Material::Sand)
            .unwrap();

        let suppliers: Vec<_> = result.quotes.iter().map(|q| q.supplier.as_str()).collect();
        assert_eq!(suppliers, ["First", "Second", "Third"]);
    }

    #[test]
    fn test_out_of_stock_offerings_are_ranked() {
        // Lowe's Sakrete is out of stock but cheap; it must still appear
        // in rank order, and can even be the headline quote.
        let catalog = standard();
        let calculator = Calculator::new(&catalog);
        let result = calculator
            .calculate_dimensions(40.0, 20.0, 2.0, Material::Concrete)
            .unwrap();

        assert_eq!(result.quotes.len(), 6);
        let sakrete = result
            .quotes
            .iter()
            .position(|q| q.supplier == "Lowe's" && q.brand == "Sakrete")
            .unwrap();
        // $4.78 ranks between Mastercraft ($4.49) and Menards QUIKRETE ($4.89).
        assert_eq!(sakrete, 1);
        assert!(!result.quotes[sakrete].in_stock);
    }

    #[test]
    fn test_missing_input() {
        let catalog = standard();
        let calculator = Calculator::new(&catalog);
        let result = calculator.calculate(&CalcRequest::new("", "20", "2", "concrete"));
        assert_eq!(result, Err(MaterialsError::MissingInput("length")));

        let result = calculator.calculate(&CalcRequest::new("40", "20", "  ", "concrete"));
        assert_eq!(result, Err(MaterialsError::MissingInput("depth_inches")));
    }

    #[test]
    fn test_invalid_number() {
        let catalog = standard();
        let calculator = Calculator::new(&catalog);
        let result = calculator.calculate(&CalcRequest::new("40", "twenty", "2", "concrete"));
        assert!(matches!(
            result,
            Err(MaterialsError::InvalidNumber { field: "width", .. })
        ));
    }

    #[test]
    fn test_unknown_material() {
        let catalog = standard();
        let calculator = Calculator::new(&catalog);
        let result = calculator.calculate(&CalcRequest::new("40", "20", "2", "lumber"));
        assert_eq!(
            result,
            Err(MaterialsError::UnknownMaterial("lumber".to_string()))
        );
    }

    #[test]
    fn test_nonpositive_dimension() {
        let catalog = standard();
        let calculator = Calculator::new(&catalog);
        let result = calculator.calculate(&CalcRequest::new("0", "20", "2", "concrete"));
        assert_eq!(
            result,
            Err(MaterialsError::NonPositiveDimension {
                field: "length",
                value: 0.0
            })
        );

        let result = calculator.calculate_dimensions(40.0, -1.0, 2.0, Material::Concrete);
        assert!(matches!(
            result,
            Err(MaterialsError::NonPositiveDimension { field: "width", .. })
        ));
    }

    #[test]
    fn test_total_with_delivery() {
        let catalog = standard();
        let calculator = Calculator::new(&catalog);
        let result = calculator
            .calculate_dimensions(40.0, 20.0, 2.0, Material::Concrete)
            .unwrap();
        let quote = result
            .quotes
            .iter()
            .find(|q| q.supplier == "Home Depot" && q.brand == "QUIKRETE")
            .unwrap();
        assert_eq!(
            quote.total_with_delivery(),
            Money::from_cents(111_054 + 7_900)
        );
    }

    #[test]
    fn test_result_serializes() {
        let catalog = standard();
        let calculator = Calculator::new(&catalog);
        let result = calculator
            .calculate_dimensions(10.0, 10.0, 2.0, Material::Mulch)
            .unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let back: CalcResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, back);
    }
}
