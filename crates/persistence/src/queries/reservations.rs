// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cinema_booking_domain::{Reservation, SeatPosition, parse_seat_labels};
use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;

use crate::diesel_schema::reservations;
use crate::error::PersistenceError;

/// Diesel Queryable struct for reservation rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = reservations)]
struct ReservationRow {
    id: i64,
    film: String,
    seats: String,
    customer_name: String,
}

impl TryFrom<ReservationRow> for Reservation {
    type Error = PersistenceError;

    fn try_from(row: ReservationRow) -> Result<Self, Self::Error> {
        let seats: Vec<SeatPosition> =
            parse_seat_labels(&row.seats).map_err(|e| PersistenceError::CorruptRecord {
                id: row.id,
                reason: e.to_string(),
            })?;

        Ok(Self {
            id: row.id,
            film: row.film,
            seats,
            customer_name: row.customer_name,
        })
    }
}

/// Retrieves a reservation by id.
///
/// # Errors
///
/// Returns an error if the reservation does not exist, the query fails, or
/// the stored seats cannot be parsed.
pub fn get_reservation(
    conn: &mut SqliteConnection,
    reservation_id: i64,
) -> Result<Reservation, PersistenceError> {
    debug!(reservation_id, "Looking up reservation");

    let row: ReservationRow = reservations::table
        .find(reservation_id)
        .select(ReservationRow::as_select())
        .first(conn)
        .optional()?
        .ok_or(PersistenceError::ReservationNotFound(reservation_id))?;

    row.try_into()
}

/// Lists all reservations in id order.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row cannot be parsed.
pub fn list_reservations(
    conn: &mut SqliteConnection,
) -> Result<Vec<Reservation>, PersistenceError> {
    reservations::table
        .order(reservations::id.asc())
        .select(ReservationRow::as_select())
        .load(conn)?
        .into_iter()
        .map(Reservation::try_from)
        .collect()
}

/// Counts stored reservations.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn count_reservations(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    Ok(reservations::table.count().get_result(conn)?)
}
