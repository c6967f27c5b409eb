// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reservation inserts.

use cinema_booking_domain::{Reservation, ReservationDraft};
use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::info;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::reservations;
use crate::error::PersistenceError;

/// Appends a reservation draft as a new row.
///
/// The insert and the id lookup run in one transaction, so a failure
/// leaves no partial row behind.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `draft` - The draft to store
///
/// # Returns
///
/// The stored reservation with its assigned id.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn append_reservation(
    conn: &mut SqliteConnection,
    draft: &ReservationDraft,
) -> Result<Reservation, PersistenceError> {
    let seats: String = draft.seat_labels();

    let id: i64 = conn.transaction::<i64, PersistenceError, _>(|conn| {
        diesel::insert_into(reservations::table)
            .values((
                reservations::film.eq(draft.film.name()),
                reservations::seats.eq(&seats),
                reservations::customer_name.eq(&draft.customer_name),
            ))
            .execute(conn)?;

        get_last_insert_rowid(conn)
    })?;

    info!(
        reservation_id = id,
        film = %draft.film,
        seats = %seats,
        "Reservation stored"
    );

    Ok(Reservation::from_draft(id, draft))
}
