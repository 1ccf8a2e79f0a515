//! Order-summary breakdown for the shopping list.

use crate::cart::ShoppingList;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Estimated sales tax rate applied to the subtotal.
pub const TAX_RATE: f64 = 0.08;

/// Flat delivery fee charged on any non-empty list.
pub const DELIVERY_FEE: Money = Money::from_cents(7_900);

/// Summary totals for a shopping list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ListSummary {
    /// Sum of price * quantity over all rows.
    pub subtotal: Money,
    /// Estimated tax on the subtotal.
    pub tax_estimate: Money,
    /// Flat delivery fee; zero for an empty list.
    pub delivery_fee: Money,
    /// Subtotal + tax + delivery.
    pub grand_total: Money,
}

impl ListSummary {
    /// Compute the summary for a list.
    pub fn for_list(list: &ShoppingList) -> Self {
        let subtotal = list.total_cost();
        let tax_estimate = subtotal.multiply_decimal(TAX_RATE);
        let delivery_fee = if list.is_empty() {
            Money::zero()
        } else {
            DELIVERY_FEE
        };
        Self {
            subtotal,
            tax_estimate,
            delivery_fee,
            grand_total: subtotal + tax_estimate + delivery_fee,
        }
    }
}
