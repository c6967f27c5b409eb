// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::SeatOutOfRange {
        row: 11,
        col: 5,
        rows: 10,
        cols: 10,
    };
    assert_eq!(
        format!("{err}"),
        "Seat (11,5) is outside the 10x10 seat grid"
    );

    let err: DomainError = DomainError::UnknownFilm(String::from("Film 9"));
    assert_eq!(format!("{err}"), "Film 'Film 9' is not in the catalog");

    let err: DomainError = DomainError::InvalidPrice(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid price: test");

    let err: DomainError = DomainError::InvalidSeatLabel(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid seat label: test");
}
