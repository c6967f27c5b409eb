// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::sync::Arc;

use cinema_booking::{BookingConfig, FlowController, ReservationRepository};
use cinema_booking_domain::{Reservation, ReservationDraft};
use cinema_booking_persistence::Persistence;

use crate::{
    ConfirmRequest, SelectFilmRequest, ToggleSeatRequest, proceed, select_film, toggle_seat,
};

/// A repository whose appends always fail.
#[derive(Debug, Default)]
pub struct UnavailableRepository;

#[derive(Debug)]
pub struct DiskFull;

impl std::fmt::Display for DiskFull {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "disk full")
    }
}

impl std::error::Error for DiskFull {}

impl ReservationRepository for UnavailableRepository {
    type Error = DiskFull;

    fn ensure_schema(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn append(&mut self, _draft: &ReservationDraft) -> Result<Reservation, Self::Error> {
        Err(DiskFull)
    }
}

pub fn create_test_flow() -> FlowController<Persistence> {
    FlowController::new(
        Arc::new(BookingConfig::default()),
        Persistence::new_in_memory().unwrap(),
    )
    .unwrap()
}

pub fn create_unavailable_flow() -> FlowController<UnavailableRepository> {
    FlowController::new(Arc::new(BookingConfig::default()), UnavailableRepository).unwrap()
}

/// Drives a flow to confirmation with the given film and seats.
pub fn advance_to_confirmation<R: ReservationRepository>(
    flow: &mut FlowController<R>,
    film: &str,
    seats: &[(u8, u8)],
) {
    select_film(
        flow,
        &SelectFilmRequest {
            film: film.to_string(),
        },
    )
    .unwrap();
    proceed(flow).unwrap();
    for (row, col) in seats {
        toggle_seat(flow, ToggleSeatRequest { row: *row, col: *col }).unwrap();
    }
    proceed(flow).unwrap();
}

pub fn confirm_request(name: &str) -> ConfirmRequest {
    ConfirmRequest {
        customer_name: name.to_string(),
    }
}
