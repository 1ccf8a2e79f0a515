//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues that plague monetary calculations. The domain is
//! US retail pricing, so there is a single implicit currency (USD).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Sub};

/// A monetary value in US dollars, stored as whole cents.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money {
    /// Amount in cents.
    pub cents: i64,
}

impl Money {
    /// Create a new Money value from cents.
    pub const fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Create a Money value from a decimal dollar amount.
    ///
    /// ```
    /// use buildmat::money::Money;
    /// let price = Money::from_decimal(4.98);
    /// assert_eq!(price.cents, 498);
    /// ```
    pub fn from_decimal(dollars: f64) -> Self {
        Self::from_cents((dollars * 100.0).round() as i64)
    }

    /// The zero amount.
    pub const fn zero() -> Self {
        Self::from_cents(0)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.cents > 0
    }

    /// Convert to a decimal dollar value.
    pub fn to_decimal(&self) -> f64 {
        self.cents as f64 / 100.0
    }

    /// Multiply by a unit count (e.g., bags needed).
    pub fn multiply(&self, factor: i64) -> Money {
        Money::from_cents(self.cents * factor)
    }

    /// Multiply by a decimal factor (e.g., a tax rate).
    ///
    /// Rounds to the nearest cent.
    pub fn multiply_decimal(&self, factor: f64) -> Money {
        Money::from_cents((self.cents as f64 * factor).round() as i64)
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        if self.cents < 0 {
            format!("-${:.2}", -self.to_decimal())
        } else {
            format!("${:.2}", self.to_decimal())
        }
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::from_cents(self.cents + other.cents)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money::from_cents(self.cents - other.cents)
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.multiply(factor)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
