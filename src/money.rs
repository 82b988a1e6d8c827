//! Whole-unit currency amounts.
//!
//! Inputs are integer hours and integer hourly rates, so payouts are exact
//! integers and never need rounding.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// A currency amount in whole units, displayed with a `$` prefix.
///
/// `Display` respects width and alignment flags, so amounts can be placed
/// directly in padded table columns.
///
/// # Examples
///
/// ```
/// use payout_report::Money;
///
/// let payout = Money::payout(40, 25);
/// assert_eq!(payout.to_string(), "$1000");
/// assert_eq!(format!("{:<7}|", payout), "$1000  |");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Money(i64);

impl Money {
    /// Zero value.
    pub const ZERO: Self = Money(0);

    /// Currency symbol used when displaying amounts.
    pub const SYMBOL: &'static str = "$";

    pub fn new(amount: i64) -> Self {
        Money(amount)
    }

    /// `hours × rate`. Widening to `i64` first keeps the product exact for
    /// every pair of `i32` inputs.
    pub fn payout(hours_worked: i32, hourly_rate: i32) -> Self {
        Money(i64::from(hours_worked) * i64::from(hourly_rate))
    }

    pub fn amount(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("{}{}", Self::SYMBOL, self.0))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
