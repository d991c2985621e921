//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues. The storefront trades in a single currency, so an
//! amount is just a signed count of cents; it serializes as a bare
//! number, which keeps the persisted revenue value a plain JSON integer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A monetary amount in cents.
///
/// Negative amounts represent debits (refunds, manual downward
/// adjustments); item prices are always non-negative.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money {
    /// Amount in cents.
    pub cents: i64,
}

impl Money {
    /// Zero cents.
    pub const ZERO: Money = Money { cents: 0 };

    /// Create a new Money value from cents.
    pub fn new(cents: i64) -> Self {
        Self { cents }
    }

    /// Create a Money value from a decimal dollar amount.
    ///
    /// ```
    /// use oak_commerce::money::Money;
    /// let price = Money::from_dollars(2.99);
    /// assert_eq!(price.cents, 299);
    /// ```
    pub fn from_dollars(amount: f64) -> Self {
        Self::new((amount * 100.0).round() as i64)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.cents > 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.cents < 0
    }

    /// Get the absolute value.
    pub fn abs(&self) -> Self {
        Self::new(self.cents.abs())
    }

    /// Convert to a decimal dollar value.
    pub fn to_dollars(&self) -> f64 {
        self.cents as f64 / 100.0
    }

    /// Format as a display string (e.g., "$2.99", "-$3.00").
    pub fn display(&self) -> String {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.unsigned_abs();
        format!("{sign}${}.{:02}", abs / 100, abs % 100)
    }

    /// Try to add another amount, returning None on overflow.
    pub fn try_add(&self, other: Money) -> Option<Money> {
        self.cents.checked_add(other.cents).map(Money::new)
    }

    /// Try to subtract another amount, returning None on overflow.
    pub fn try_sub(&self, other: Money) -> Option<Money> {
        self.cents.checked_sub(other.cents).map(Money::new)
    }

    /// Try to multiply by a quantity, returning None on overflow.
    pub fn try_mul(&self, factor: i64) -> Option<Money> {
        self.cents.checked_mul(factor).map(Money::new)
    }

    /// Sum an iterator of amounts, returning None on overflow.
    pub fn try_sum(mut iter: impl Iterator<Item = Money>) -> Option<Money> {
        iter.try_fold(Money::ZERO, |acc, m| acc.try_add(m))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::new(self.cents + other.cents)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money::new(self.cents - other.cents)
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        Money::new(self.cents * factor)
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money::new(-self.cents)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_cents() {
        let m = Money::new(299);
        assert_eq!(m.cents, 299);
    }

    #[test]
    fn test_money_from_dollars() {
        assert_eq!(Money::from_dollars(2.99).cents, 299);
        assert_eq!(Money::from_dollars(1.0).cents, 100);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(299).display(), "$2.99");
        assert_eq!(Money::new(100).display(), "$1.00");
        assert_eq!(Money::new(5).display(), "$0.05");
        assert_eq!(Money::new(-300).display(), "-$3.00");
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::new(200);
        let b = Money::new(100);
        assert_eq!((a + b).cents, 300);
        assert_eq!((a - b).cents, 100);
        assert_eq!((a * 3).cents, 600);
        assert_eq!((-a).cents, -200);
    }

    #[test]
    fn test_money_checked_arithmetic() {
        let max = Money::new(i64::MAX);
        assert!(max.try_add(Money::new(1)).is_none());
        assert!(max.try_mul(2).is_none());
        assert_eq!(Money::new(200).try_mul(2), Some(Money::new(400)));
    }

    #[test]
    fn test_money_try_sum() {
        let amounts = [Money::new(100), Money::new(250), Money::new(50)];
        assert_eq!(
            Money::try_sum(amounts.iter().copied()),
            Some(Money::new(400))
        );
    }

    #[test]
    fn test_money_serializes_as_bare_number() {
        let json = serde_json::to_string(&Money::new(300)).unwrap();
        assert_eq!(json, "300");

        let parsed: Money = serde_json::from_str("-150").unwrap();
        assert_eq!(parsed, Money::new(-150));
    }
}
