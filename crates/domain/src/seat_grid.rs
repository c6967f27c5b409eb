// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::pricing::PricingPolicy;
use crate::types::{Price, SeatPosition};

/// Default number of rows in the auditorium.
pub const DEFAULT_ROWS: u8 = 10;

/// Default number of seats per row.
pub const DEFAULT_COLS: u8 = 10;

/// A single bookable seat.
///
/// Position and unit price are fixed when the grid is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    position: SeatPosition,
    unit_price: Price,
    selected: bool,
}

impl Seat {
    /// Returns the seat's position.
    #[must_use]
    pub const fn position(&self) -> SeatPosition {
        self.position
    }

    /// Returns the seat's unit price.
    #[must_use]
    pub const fn unit_price(&self) -> Price {
        self.unit_price
    }

    /// Returns whether the seat is part of the current selection.
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.selected
    }
}

/// The outcome of toggling a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatToggle {
    /// The seat was added to the selection.
    Selected,
    /// The seat was removed from the selection.
    Deselected,
}

/// A fixed-size matrix of seats with a running selection total.
///
/// Invariant: `total_price()` always equals the sum of the unit prices of
/// `selected_seats()`. Both are only changed together inside `toggle` and
/// `clear_selection`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatGrid {
    rows: u8,
    cols: u8,
    /// Row-major.
    seats: Vec<Seat>,
    /// Selected positions in the order they were selected.
    selection: Vec<SeatPosition>,
    total: Price,
}

impl SeatGrid {
    /// Builds a grid of `rows` x `cols` unselected seats.
    ///
    /// Each seat's unit price is taken from `pricing` for its row.
    #[must_use]
    pub fn build(rows: u8, cols: u8, pricing: &PricingPolicy) -> Self {
        let seats: Vec<Seat> = (1..=rows)
            .flat_map(|row| {
                (1..=cols).map(move |col| Seat {
                    position: SeatPosition::new(row, col),
                    unit_price: pricing.price_for(row),
                    selected: false,
                })
            })
            .collect();

        Self {
            rows,
            cols,
            seats,
            selection: Vec::new(),
            total: Price::ZERO,
        }
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn rows(&self) -> u8 {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn cols(&self) -> u8 {
        self.cols
    }

    /// Returns all seats in row-major order.
    #[must_use]
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// Returns the seat at `position`, if it lies inside the grid.
    #[must_use]
    pub fn seat(&self, position: SeatPosition) -> Option<&Seat> {
        self.index_of(position).and_then(|i| self.seats.get(i))
    }

    /// Flips the selection state of the seat at `position`.
    ///
    /// The selection list and the running total are updated together.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SeatOutOfRange` if `position` is outside the
    /// grid, or `DomainError::InvalidPrice` if the new total would not be
    /// representable. The grid is left unchanged in both cases.
    pub fn toggle(&mut self, position: SeatPosition) -> Result<SeatToggle, DomainError> {
        let (rows, cols) = (self.rows, self.cols);
        let out_of_range = move || DomainError::SeatOutOfRange {
            row: position.row,
            col: position.col,
            rows,
            cols,
        };
        let index: usize = self.index_of(position).ok_or_else(out_of_range)?;
        let seat: &mut Seat = self.seats.get_mut(index).ok_or_else(out_of_range)?;

        let new_total: Price = if seat.selected {
            self.total.checked_sub(seat.unit_price)
        } else {
            self.total.checked_add(seat.unit_price)
        }
        .ok_or_else(|| {
            DomainError::InvalidPrice(format!(
                "toggling seat ({position}) takes the total outside the representable range"
            ))
        })?;

        self.total = new_total;
        if seat.selected {
            seat.selected = false;
            self.selection.retain(|p| *p != position);
            Ok(SeatToggle::Deselected)
        } else {
            seat.selected = true;
            self.selection.push(position);
            Ok(SeatToggle::Selected)
        }
    }

    /// Returns the selected seats in selection order.
    #[must_use]
    pub fn selected_seats(&self) -> &[SeatPosition] {
        &self.selection
    }

    /// Returns the running total of the selection.
    #[must_use]
    pub const fn total_price(&self) -> Price {
        self.total
    }

    /// Recomputes the total from the selected seats' unit prices.
    ///
    /// Always equal to `total_price()`.
    #[must_use]
    pub fn recompute_total(&self) -> Price {
        self.selection
            .iter()
            .filter_map(|p| self.seat(*p))
            .map(Seat::unit_price)
            .sum()
    }

    /// Deselects every seat.
    pub fn clear_selection(&mut self) {
        for seat in &mut self.seats {
            seat.selected = false;
        }
        self.selection.clear();
        self.total = Price::ZERO;
    }

    fn index_of(&self, position: SeatPosition) -> Option<usize> {
        let in_range: bool = (1..=self.rows).contains(&position.row)
            && (1..=self.cols).contains(&position.col);
        in_range.then(|| {
            usize::from(position.row - 1) * usize::from(self.cols) + usize::from(position.col - 1)
        })
    }
}

impl Default for SeatGrid {
    fn default() -> Self {
        Self::build(DEFAULT_ROWS, DEFAULT_COLS, &PricingPolicy::default())
    }
}
