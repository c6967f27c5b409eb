// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Identity of a seat in the grid.
///
/// Rows and columns are 1-indexed. A position says nothing about whether
/// it lies inside a particular grid; bounds are checked by `SeatGrid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeatPosition {
    /// The row (1-indexed).
    pub row: u8,
    /// The column (1-indexed).
    pub col: u8,
}

impl SeatPosition {
    /// Creates a new seat position.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Returns the `"row,col"` label used on screen and in storage.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{},{}", self.row, self.col)
    }
}

impl std::fmt::Display for SeatPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// A film that can be booked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Film(String);

impl Film {
    /// Creates a film from its display name.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(name.to_string())
    }

    /// Returns the film's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Film {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A monetary amount in minor units (cents).
///
/// Integer storage keeps running totals exact: adding and removing the
/// same seat always returns the total to its previous value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Price(u64);

impl Price {
    /// The zero amount.
    pub const ZERO: Self = Self(0);

    /// Creates a price from minor units.
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Creates a price from whole currency units.
    #[must_use]
    pub const fn from_units(units: u64) -> Self {
        Self(units.saturating_mul(100))
    }

    /// Returns the amount in minor units.
    #[must_use]
    pub const fn cents(&self) -> u64 {
        self.0
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Scales the price by a percentage, rounding half-up to the nearest cent.
    ///
    /// Returns `None` if the scaled amount is not representable.
    #[must_use]
    pub const fn checked_scaled_by_percent(self, percent: u64) -> Option<Self> {
        match self.0.checked_mul(percent) {
            Some(v) => match v.checked_add(50) {
                Some(rounded) => Some(Self(rounded / 100)),
                None => None,
            },
            None => None,
        }
    }

    /// Multiplies the price by a count, returning `None` on overflow.
    #[must_use]
    pub const fn checked_mul(self, count: u64) -> Option<Self> {
        match self.0.checked_mul(count) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Adds two prices, returning `None` on overflow.
    #[must_use]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Subtracts a price, returning `None` if the result would be negative.
    #[must_use]
    pub const fn checked_sub(self, other: Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl std::iter::Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.map(|p| p.0).fold(0, u64::saturating_add))
    }
}

impl<'a> std::iter::Sum<&'a Self> for Price {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for Price {
    type Err = DomainError;

    /// Parses `"10"`, `"10.5"` or `"10.50"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed: &str = s.trim();
        let (units, fraction) = trimmed.split_once('.').unwrap_or((trimmed, ""));

        if units.is_empty() || !units.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::InvalidPrice(format!(
                "'{s}' is not a non-negative amount"
            )));
        }
        if fraction.len() > 2 || !fraction.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::InvalidPrice(format!(
                "'{s}' has more than two decimal places"
            )));
        }
        if trimmed.ends_with('.') {
            return Err(DomainError::InvalidPrice(format!("'{s}' ends with '.'")));
        }

        let units: u64 = units
            .parse()
            .map_err(|e| DomainError::InvalidPrice(format!("'{s}': {e}")))?;
        let cents: u64 = match fraction.len() {
            0 => 0,
            1 => u64::from(fraction.as_bytes()[0] - b'0') * 10,
            _ => fraction
                .parse()
                .map_err(|e| DomainError::InvalidPrice(format!("'{s}': {e}")))?,
        };

        units
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .map(Self)
            .ok_or_else(|| DomainError::InvalidPrice(format!("'{s}' is too large")))
    }
}
