//! Price type for storefront monetary values.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues. The storefront sells in a single currency, so there
//! is no currency dimension here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// A monetary value in US cents.
///
/// Arithmetic saturates rather than overflowing, so totals derived from a
/// cart can never fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Price {
    cents: i64,
}

impl Price {
    /// Create a price from cents.
    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Create a price from whole dollars.
    ///
    /// ```
    /// use aura_commerce::price::Price;
    /// assert_eq!(Price::from_dollars(3_499).cents(), 349_900);
    /// ```
    pub fn from_dollars(dollars: i64) -> Self {
        Self {
            cents: dollars.saturating_mul(100),
        }
    }

    /// The zero price.
    pub fn zero() -> Self {
        Self { cents: 0 }
    }

    /// Amount in cents.
    pub fn cents(&self) -> i64 {
        self.cents
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.cents < 0
    }

    /// Multiply by a quantity, saturating at the numeric bounds.
    pub fn times(self, quantity: i64) -> Price {
        Price::from_cents(self.cents.saturating_mul(quantity))
    }

    /// Add another price, saturating at the numeric bounds.
    pub fn plus(self, other: Price) -> Price {
        Price::from_cents(self.cents.saturating_add(other.cents))
    }

    /// Format for display with thousands separators.
    ///
    /// Whole-dollar amounts drop the decimals, matching the price strings
    /// shown on the site (e.g., "$3,499"); fractional amounts keep two
    /// (e.g., "$3,499.50").
    pub fn display(&self) -> String {
        let dollars = self.cents / 100;
        let rem = (self.cents % 100).unsigned_abs();
        if rem == 0 {
            format!("${}", group_thousands(dollars))
        } else {
            format!("${}.{:02}", group_thousands(dollars), rem)
        }
    }
}

/// Insert a comma between every group of three digits.
fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, other: Price) -> Price {
        self.plus(other)
    }
}

impl Mul<i64> for Price {
    type Output = Price;

    fn mul(self, quantity: i64) -> Price {
        self.times(quantity)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::zero(), Price::plus)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
