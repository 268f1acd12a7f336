//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues that plague monetary calculations. The storefront
//! prices everything in US dollars, so there is no currency field.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

/// Number of basis points in 100%.
pub const BASIS_POINTS_PER_UNIT: i64 = 10_000;

/// A monetary value in US dollars.
///
/// Amounts are stored in cents. Sums and integer multiples are exact; only
/// percentage application rounds, and it rounds to the nearest cent with
/// halves going away from zero.
///
/// Serializes as a decimal dollar amount (`49.99`) so catalog files stay
/// readable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(try_from = "f64", into = "f64")]
pub struct Money {
    amount_cents: i64,
}

impl Money {
    /// Zero dollars.
    pub const ZERO: Money = Money { amount_cents: 0 };

    /// Create a new Money value from cents.
    pub const fn from_cents(amount_cents: i64) -> Self {
        Self { amount_cents }
    }

    /// Create a Money value from whole dollars.
    pub const fn from_dollars(dollars: i64) -> Self {
        Self {
            amount_cents: dollars * 100,
        }
    }

    /// Create a Money value from a decimal amount, rounded to the cent.
    ///
    /// ```
    /// use storefront_commerce::money::Money;
    /// let price = Money::from_decimal(49.99);
    /// assert_eq!(price.cents(), 4999);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        Self::from_cents((amount * 100.0).round() as i64)
    }

    /// Amount in cents.
    pub fn cents(&self) -> i64 {
        self.amount_cents
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / 100.0
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let abs = self.amount_cents.unsigned_abs();
        format!("{}${}.{:02}", sign, abs / 100, abs % 100)
    }

    /// Multiply by a quantity, saturating at the representable bounds.
    pub fn times(&self, quantity: u32) -> Money {
        Money::from_cents(self.amount_cents.saturating_mul(i64::from(quantity)))
    }

    /// Apply a rate expressed in basis points (800 = 8%).
    pub fn percentage_bps(&self, basis_points: u32) -> Money {
        let scaled = i128::from(self.amount_cents) * i128::from(basis_points);
        let divisor = i128::from(BASIS_POINTS_PER_UNIT);
        let half = divisor / 2;
        let rounded = if scaled >= 0 {
            (scaled + half) / divisor
        } else {
            (scaled - half) / divisor
        };
        Money::from_cents(rounded.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64)
    }

    /// Difference to `other` if this value is below it.
    pub fn shortfall_to(&self, other: Money) -> Option<Money> {
        (self.amount_cents < other.amount_cents).then(|| other - *self)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::from_cents(self.amount_cents.saturating_add(other.amount_cents))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money::from_cents(self.amount_cents.saturating_sub(other.amount_cents))
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, quantity: u32) -> Money {
        self.times(quantity)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl TryFrom<f64> for Money {
    type Error = String;

    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        if !amount.is_finite() {
            return Err(format!("amount must be a finite number, got {}", amount));
        }
        Ok(Money::from_decimal(amount))
    }
}

impl From<Money> for f64 {
    fn from(m: Money) -> f64 {
        m.to_decimal()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
