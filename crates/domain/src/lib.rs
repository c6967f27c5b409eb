// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Domain types for the cinema booking system.
//!
//! Everything here is pure: seats, prices, the film catalog and the
//! reservation shapes carry no I/O and no logging.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod catalog;
mod error;
mod pricing;
mod reservation;
mod seat_grid;
mod types;

#[cfg(test)]
mod tests;

pub use catalog::{DEFAULT_FILMS, FilmCatalog};
pub use error::DomainError;
pub use pricing::{DEFAULT_BASE_PRICE, PricingPolicy, PricingTier};
pub use reservation::{Reservation, ReservationDraft, format_seat_labels, parse_seat_labels};
pub use seat_grid::{DEFAULT_COLS, DEFAULT_ROWS, Seat, SeatGrid, SeatToggle};
pub use types::{Film, Price, SeatPosition};
