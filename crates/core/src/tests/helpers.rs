// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::sync::Arc;

use crate::{BookingConfig, FlowController, ReservationRepository};
use cinema_booking_domain::{Reservation, ReservationDraft};

/// Error reported by `RecordingRepository` when told to fail.
#[derive(Debug)]
pub struct StoreUnavailable;

impl std::fmt::Display for StoreUnavailable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "store unavailable")
    }
}

impl std::error::Error for StoreUnavailable {}

/// In-memory repository that records every call.
#[derive(Debug, Default)]
pub struct RecordingRepository {
    pub reservations: Vec<Reservation>,
    pub schema_calls: usize,
    pub append_calls: usize,
    pub fail_appends: bool,
    pub fail_schema: bool,
}

impl ReservationRepository for RecordingRepository {
    type Error = StoreUnavailable;

    fn ensure_schema(&mut self) -> Result<(), Self::Error> {
        self.schema_calls += 1;
        if self.fail_schema {
            return Err(StoreUnavailable);
        }
        Ok(())
    }

    fn append(&mut self, draft: &ReservationDraft) -> Result<Reservation, Self::Error> {
        self.append_calls += 1;
        if self.fail_appends {
            return Err(StoreUnavailable);
        }
        let id: i64 = i64::try_from(self.reservations.len()).unwrap() + 1;
        let reservation: Reservation = Reservation::from_draft(id, draft);
        self.reservations.push(reservation.clone());
        Ok(reservation)
    }
}

pub fn create_test_config() -> Arc<BookingConfig> {
    Arc::new(BookingConfig::default())
}

pub fn create_test_flow() -> FlowController<RecordingRepository> {
    FlowController::new(create_test_config(), RecordingRepository::default()).unwrap()
}
