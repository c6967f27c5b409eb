// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod flow_integration_tests;

use cinema_booking_domain::{Film, Price, ReservationDraft, SeatPosition};

/// Builds a draft for `film` with the given seats.
pub fn create_test_draft(film: &str, seats: &[(u8, u8)], customer_name: &str) -> ReservationDraft {
    ReservationDraft {
        film: Film::new(film),
        seats: seats
            .iter()
            .map(|(row, col)| SeatPosition::new(*row, *col))
            .collect(),
        customer_name: customer_name.to_string(),
        total_price: Price::ZERO,
    }
}
