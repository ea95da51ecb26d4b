use std::fmt::{self, Display};
use std::iter::Sum;
use std::ops::{Add, Sub};

use crate::error::{ExpenseError, Result};

/// A money value held as a whole number of hundredths.
///
/// Every amount in the ledger is already rounded to 2 fractional digits,
/// so sums and differences stay exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(i64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub const fn from_cents(cents: i64) -> Self {
        Amount(cents)
    }

    pub const fn cents(&self) -> i64 {
        self.0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Parse any finite number, then round it to 2 fractional digits.
    ///
    /// The sign is kept: positivity is a concern of the caller.
    pub fn parse(s: &str) -> Result<Self> {
        let value = s
            .trim()
            .parse::<f64>()
            .map_err(|_| ExpenseError::InvalidAmount)?;
        Self::from_f64(value)
    }

    /// Round half away from zero on the shortest decimal form of `value`,
    /// so `10.005` becomes `10.01` even though the binary value sits
    /// slightly below it.
    pub fn from_f64(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(ExpenseError::InvalidAmount);
        }

        // f64 Display never switches to exponent notation
        let as_str = format!("{}", value.abs());
        let (units, decimals) = match as_str.split_once('.') {
            Some((units, decimals)) => (units, decimals),
            None => (as_str.as_str(), ""),
        };

        let mut decimals_iter = decimals.chars().map(|c| c.to_digit(10).unwrap_or(0) as i64);
        let char0 = decimals_iter.next().unwrap_or(0);
        let char1 = decimals_iter.next().unwrap_or(0);
        let char2 = decimals_iter.next().unwrap_or(0);

        let units = units
            .parse::<i64>()
            .map_err(|_| ExpenseError::InvalidAmount)?;
        let mut cents = units
            .checked_mul(100)
            .and_then(|c| c.checked_add(char0 * 10 + char1))
            .ok_or(ExpenseError::InvalidAmount)?;
        if char2 >= 5 {
            cents = cents.checked_add(1).ok_or(ExpenseError::InvalidAmount)?;
        }

        if value < 0.0 {
            cents = -cents;
        }
        Ok(Amount(cents))
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        // padding to 3 guarantees at least one unit digit
        let as_str = format!("{:0>3}", self.0.unsigned_abs());
        let (units, decimals) = as_str.split_at(as_str.len() - 2);
        write!(f, "{sign}{units}.{decimals}")
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        Amount(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Amount {
    type Output = Amount;

    fn sub(self, rhs: Amount) -> Amount {
        Amount(self.0.saturating_sub(rhs.0))
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Amount {
        iter.fold(Amount::ZERO, Add::add)
    }
}
