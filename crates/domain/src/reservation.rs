// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Film, Price, SeatPosition};
use serde::{Deserialize, Serialize};

/// Joins seat labels into the stored form, e.g. `"1,1,3,4"`.
///
/// An empty selection produces an empty string.
#[must_use]
pub fn format_seat_labels(seats: &[SeatPosition]) -> String {
    seats
        .iter()
        .map(SeatPosition::label)
        .collect::<Vec<String>>()
        .join(",")
}

/// Parses the stored seat form back into positions.
///
/// The stored form is a flat list of numbers taken two at a time.
///
/// # Errors
///
/// Returns `DomainError::InvalidSeatLabel` if the string holds an odd
/// number of values or a value that is not a row/column number.
pub fn parse_seat_labels(labels: &str) -> Result<Vec<SeatPosition>, DomainError> {
    if labels.trim().is_empty() {
        return Ok(Vec::new());
    }

    let values: Vec<u8> = labels
        .split(',')
        .map(|v| {
            v.trim()
                .parse::<u8>()
                .map_err(|e| DomainError::InvalidSeatLabel(format!("'{labels}': {e}")))
        })
        .collect::<Result<_, _>>()?;

    if values.len() % 2 == 1 {
        return Err(DomainError::InvalidSeatLabel(format!(
            "'{labels}' does not contain whole row,col pairs"
        )));
    }

    Ok(values
        .chunks_exact(2)
        .map(|pair| SeatPosition::new(pair[0], pair[1]))
        .collect())
}

/// An in-memory reservation candidate built from a booking session.
///
/// A draft has no id; the repository assigns one when it is committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationDraft {
    /// The chosen film.
    pub film: Film,
    /// Selected seats in selection order.
    pub seats: Vec<SeatPosition>,
    /// The customer name as entered. May be empty.
    pub customer_name: String,
    /// The total price of the selected seats.
    pub total_price: Price,
}

impl ReservationDraft {
    /// Returns the seats in their stored form.
    #[must_use]
    pub fn seat_labels(&self) -> String {
        format_seat_labels(&self.seats)
    }
}

/// A committed reservation.
///
/// Reservations are append-only; there is no update or delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// The identifier assigned by the repository.
    pub id: i64,
    /// The film name.
    pub film: String,
    /// The reserved seats in selection order.
    pub seats: Vec<SeatPosition>,
    /// The customer name. May be empty.
    pub customer_name: String,
}

impl Reservation {
    /// Creates the committed form of a draft.
    #[must_use]
    pub fn from_draft(id: i64, draft: &ReservationDraft) -> Self {
        Self {
            id,
            film: draft.film.name().to_string(),
            seats: draft.seats.clone(),
            customer_name: draft.customer_name.clone(),
        }
    }

    /// Returns the seats in their stored form.
    #[must_use]
    pub fn seat_labels(&self) -> String {
        format_seat_labels(&self.seats)
    }
}
