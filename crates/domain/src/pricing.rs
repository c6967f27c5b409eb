// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::Price;
use serde::{Deserialize, Serialize};

/// The default base price: 10 currency units.
pub const DEFAULT_BASE_PRICE: Price = Price::from_units(10);

/// Row-based pricing tier.
///
/// Rows are 1-indexed. The column never affects the tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PricingTier {
    /// Rows 1-2: 1.5x base.
    Premium,
    /// Rows 3-4: 1.2x base.
    Preferred,
    /// Rows 5 and beyond: 1.0x base.
    Standard,
}

impl PricingTier {
    /// Returns the tier a row falls in.
    #[must_use]
    pub const fn for_row(row: u8) -> Self {
        match row {
            0..=2 => Self::Premium,
            3..=4 => Self::Preferred,
            _ => Self::Standard,
        }
    }

    /// Returns the tier multiplier as a percentage of the base price.
    #[must_use]
    pub const fn multiplier_percent(&self) -> u64 {
        match self {
            Self::Premium => 150,
            Self::Preferred => 120,
            Self::Standard => 100,
        }
    }

    /// Returns the tier name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Premium => "Premium",
            Self::Preferred => "Preferred",
            Self::Standard => "Standard",
        }
    }
}

impl std::fmt::Display for PricingTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a seat's row to its unit price.
///
/// Tier prices are computed once from the base price, so `price_for` cannot
/// fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPolicy {
    base_price: Price,
    premium: Price,
    preferred: Price,
}

impl PricingPolicy {
    /// Creates a pricing policy with the given base price.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPrice` if a tier price would not be
    /// representable.
    pub fn new(base_price: Price) -> Result<Self, DomainError> {
        let scale = |tier: PricingTier| {
            base_price
                .checked_scaled_by_percent(tier.multiplier_percent())
                .ok_or_else(|| {
                    DomainError::InvalidPrice(format!(
                        "{base_price} is too large for the {tier} tier"
                    ))
                })
        };

        Ok(Self {
            base_price,
            premium: scale(PricingTier::Premium)?,
            preferred: scale(PricingTier::Preferred)?,
        })
    }

    /// Returns the base price tiers are scaled from.
    #[must_use]
    pub const fn base_price(&self) -> Price {
        self.base_price
    }

    /// Returns the unit price for any seat in the given row.
    #[must_use]
    pub const fn price_for(&self, row: u8) -> Price {
        match PricingTier::for_row(row) {
            PricingTier::Premium => self.premium,
            PricingTier::Preferred => self.preferred,
            PricingTier::Standard => self.base_price,
        }
    }

    /// Returns the total of selecting every seat in a `rows` x `cols` grid.
    ///
    /// This bounds every selection total on such a grid. Returns `None` if
    /// it is not representable.
    #[must_use]
    pub fn full_grid_total(&self, rows: u8, cols: u8) -> Option<Price> {
        (1..=rows).try_fold(Price::ZERO, |total, row| {
            self.price_for(row)
                .checked_mul(u64::from(cols))
                .and_then(|row_total| total.checked_add(row_total))
        })
    }
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            base_price: DEFAULT_BASE_PRICE,
            premium: Price::from_units(15),
            preferred: Price::from_units(12),
        }
    }
}
