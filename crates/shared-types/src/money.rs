//! Integer-cent money type
//!
//! All amounts in the order flow are whole cents stored as `i64`. The
//! newtype keeps unit prices, line totals, and tax from mixing with
//! plain integers (quantities, counts) by accident.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// A monetary amount in whole cents.
///
/// Serializes as the raw cent count. Display renders two decimals with
/// no currency symbol ("12.50"); callers prepend "$" where needed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    pub fn cents(&self) -> i64 {
        self.0
    }

    /// Multiply a per-unit price by a quantity, clamping on overflow.
    /// Quantities are capped upstream, so the clamp is unreachable in
    /// practice.
    pub fn saturating_mul(self, qty: u32) -> Money {
        Money(self.0.saturating_mul(i64::from(qty)))
    }

    /// Take a percentage expressed in basis points, rounding half-up to
    /// the nearest cent. `percent_bp(625)` is 6.25%.
    pub fn percent_bp(self, basis_points: i64) -> Money {
        Money((self.0 * basis_points + 5_000) / 10_000)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}
