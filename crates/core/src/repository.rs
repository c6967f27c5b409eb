// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cinema_booking_domain::{Reservation, ReservationDraft};

/// The durable store committed reservations are appended to.
///
/// Implementations must make `append` atomic and durable: when it returns
/// `Ok` the full record is stored, and when it returns `Err` nothing is.
pub trait ReservationRepository {
    /// The error type reported by the store.
    type Error: std::error::Error;

    /// Creates the reservation store if it does not exist.
    ///
    /// Safe to call on every startup; a no-op when the store exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be created.
    fn ensure_schema(&mut self) -> Result<(), Self::Error>;

    /// Stores a draft as a new reservation with a store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails. Nothing is stored in that case.
    fn append(&mut self, draft: &ReservationDraft) -> Result<Reservation, Self::Error>;
}
