// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cinema_booking_domain::{
    DEFAULT_COLS, DEFAULT_ROWS, FilmCatalog, Price, PricingPolicy, SeatGrid,
};
use std::collections::HashSet;
use thiserror::Error;

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Film catalog must contain at least one film")]
    EmptyCatalog,
    #[error("Film names must not be blank")]
    BlankFilmName,
    #[error("Film '{0}' appears more than once in the catalog")]
    DuplicateFilm(String),
    #[error("Base price must be greater than zero")]
    ZeroBasePrice,
    #[error("Seat grid must have at least one row and one column, got {rows}x{cols}")]
    EmptyGrid { rows: u8, cols: u8 },
    #[error("Base price {base_price} is too large for a {rows}x{cols} seat grid")]
    BasePriceTooLarge { base_price: Price, rows: u8, cols: u8 },
}

/// Which incomplete reservations are refused at confirmation.
///
/// Both checks are off by default: an empty customer name and an empty
/// seat selection are both accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DraftPolicy {
    /// Refuse drafts whose customer name is blank.
    pub require_customer_name: bool,
    /// Refuse drafts with no seats selected.
    pub require_seats: bool,
}

/// Process-wide booking configuration.
///
/// Built once at startup and shared by every session; never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingConfig {
    catalog: FilmCatalog,
    pricing: PricingPolicy,
    rows: u8,
    cols: u8,
    draft_policy: DraftPolicy,
}

impl BookingConfig {
    /// Creates a configuration with a 10x10 grid and the permissive draft policy.
    ///
    /// # Arguments
    ///
    /// * `films` - The film names, in display order
    /// * `base_price` - The price of a standard seat
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The catalog is empty
    /// - A film name is blank or repeated
    /// - The base price is zero
    /// - Selecting every seat of the default grid would overflow the total
    pub fn new<S: AsRef<str>>(films: &[S], base_price: Price) -> Result<Self, ConfigError> {
        if films.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }

        let mut seen: HashSet<&str> = HashSet::new();
        for film in films {
            let name: &str = film.as_ref();
            if name.trim().is_empty() {
                return Err(ConfigError::BlankFilmName);
            }
            if !seen.insert(name) {
                return Err(ConfigError::DuplicateFilm(name.to_string()));
            }
        }

        if base_price.is_zero() {
            return Err(ConfigError::ZeroBasePrice);
        }

        let too_large = || ConfigError::BasePriceTooLarge {
            base_price,
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        };
        let pricing: PricingPolicy = PricingPolicy::new(base_price).map_err(|_| too_large())?;
        validate_grid_total(&pricing, DEFAULT_ROWS, DEFAULT_COLS)?;

        Ok(Self {
            catalog: FilmCatalog::new(films),
            pricing,
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            draft_policy: DraftPolicy::default(),
        })
    }

    /// Replaces the seat grid dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero, or if selecting every
    /// seat would overflow the total at the configured base price.
    pub fn with_grid_size(mut self, rows: u8, cols: u8) -> Result<Self, ConfigError> {
        if rows == 0 || cols == 0 {
            return Err(ConfigError::EmptyGrid { rows, cols });
        }
        validate_grid_total(&self.pricing, rows, cols)?;
        self.rows = rows;
        self.cols = cols;
        Ok(self)
    }

    /// Replaces the draft policy.
    #[must_use]
    pub const fn with_draft_policy(mut self, draft_policy: DraftPolicy) -> Self {
        self.draft_policy = draft_policy;
        self
    }

    /// Returns the film catalog.
    #[must_use]
    pub const fn catalog(&self) -> &FilmCatalog {
        &self.catalog
    }

    /// Returns the pricing policy.
    #[must_use]
    pub const fn pricing(&self) -> &PricingPolicy {
        &self.pricing
    }

    /// Returns the number of seat rows.
    #[must_use]
    pub const fn rows(&self) -> u8 {
        self.rows
    }

    /// Returns the number of seats per row.
    #[must_use]
    pub const fn cols(&self) -> u8 {
        self.cols
    }

    /// Returns the draft policy.
    #[must_use]
    pub const fn draft_policy(&self) -> DraftPolicy {
        self.draft_policy
    }

    /// Builds a fresh, fully unselected seat grid.
    #[must_use]
    pub fn build_seat_grid(&self) -> SeatGrid {
        SeatGrid::build(self.rows, self.cols, &self.pricing)
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            catalog: FilmCatalog::default(),
            pricing: PricingPolicy::default(),
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            draft_policy: DraftPolicy::default(),
        }
    }
}

/// Rejects grids whose full selection total is not representable.
fn validate_grid_total(pricing: &PricingPolicy, rows: u8, cols: u8) -> Result<(), ConfigError> {
    pricing
        .full_grid_total(rows, cols)
        .map(|_| ())
        .ok_or(ConfigError::BasePriceTooLarge {
            base_price: pricing.base_price(),
            rows,
            cols,
        })
}
