// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::sync::Arc;

use cinema_booking::{BookingConfig, Command, CoreError, FlowController, FlowEvent, Stage};
use cinema_booking_domain::SeatPosition;

use crate::Persistence;

fn create_flow() -> FlowController<Persistence> {
    FlowController::new(
        Arc::new(BookingConfig::default()),
        Persistence::new_in_memory().unwrap(),
    )
    .unwrap()
}

fn book(flow: &mut FlowController<Persistence>, film: &str, seats: &[(u8, u8)], name: &str) -> i64 {
    flow.dispatch(Command::SelectFilm {
        name: film.to_string(),
    })
    .unwrap();
    flow.dispatch(Command::ProceedToSeats).unwrap();
    for (row, col) in seats {
        flow.dispatch(Command::ToggleSeat {
            position: SeatPosition::new(*row, *col),
        })
        .unwrap();
    }
    flow.dispatch(Command::ProceedToConfirmation).unwrap();
    flow.dispatch(Command::SetCustomerName {
        name: name.to_string(),
    })
    .unwrap();

    let result = flow.dispatch(Command::Confirm).unwrap();
    match result.event {
        FlowEvent::ReservationCommitted { reservation, .. } => reservation.id,
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn test_confirmed_booking_is_persisted_and_session_reset() {
    let mut flow = create_flow();

    let id = book(&mut flow, "Film 2", &[(1, 1), (3, 4)], "Ada");

    assert_eq!(flow.stage(), Stage::Menu);
    assert!(flow.session().is_empty());

    let stored = flow.repository_mut().get_reservation(id).unwrap();
    assert_eq!(stored.film, "Film 2");
    assert_eq!(stored.seat_labels(), "1,1,3,4");
    assert_eq!(stored.customer_name, "Ada");
}

#[test]
fn test_two_bookings_append_two_rows() {
    let mut flow = create_flow();

    let first = book(&mut flow, "Film 1", &[(9, 9)], "Ada");
    let second = book(&mut flow, "Film 3", &[(2, 2), (2, 3)], "Grace");

    assert!(second > first);
    assert_eq!(flow.repository_mut().count_reservations().unwrap(), 2);
}

#[test]
fn test_confirm_without_film_stores_nothing() {
    let mut flow = create_flow();

    let result = flow.dispatch(Command::ProceedToSeats);

    assert!(matches!(result, Err(CoreError::IncompleteSession(_))));
    assert_eq!(flow.repository_mut().count_reservations().unwrap(), 0);
}
