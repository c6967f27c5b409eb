// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, Film, Price, SeatPosition};

#[test]
fn test_seat_position_label() {
    let position: SeatPosition = SeatPosition::new(3, 4);
    assert_eq!(position.label(), "3,4");
    assert_eq!(format!("{position}"), "3,4");
}

#[test]
fn test_film_name_is_preserved() {
    let film: Film = Film::new("Film 2");
    assert_eq!(film.name(), "Film 2");
    assert_eq!(film.to_string(), "Film 2");
}

#[test]
fn test_price_display() {
    assert_eq!(Price::from_units(27).to_string(), "$27.00");
    assert_eq!(Price::from_cents(1205).to_string(), "$12.05");
    assert_eq!(Price::ZERO.to_string(), "$0.00");
}

#[test]
fn test_price_parse_accepts_whole_and_decimal_amounts() {
    assert_eq!("10".parse::<Price>().unwrap(), Price::from_cents(1000));
    assert_eq!("10.5".parse::<Price>().unwrap(), Price::from_cents(1050));
    assert_eq!("10.05".parse::<Price>().unwrap(), Price::from_cents(1005));
    assert_eq!("0.99".parse::<Price>().unwrap(), Price::from_cents(99));
}

#[test]
fn test_price_parse_rejects_invalid_amounts() {
    for input in ["", "-1", "ten", "10.123", "10.", ".5", "1.2.3"] {
        assert!(
            matches!(input.parse::<Price>(), Err(DomainError::InvalidPrice(_))),
            "expected '{input}' to be rejected"
        );
    }
}

#[test]
fn test_price_scaling_rounds_half_up() {
    assert_eq!(
        Price::from_units(10).checked_scaled_by_percent(150),
        Some(Price::from_units(15))
    );
    // 0.05 * 1.5 = 0.075 -> 0.08
    assert_eq!(
        Price::from_cents(5).checked_scaled_by_percent(150),
        Some(Price::from_cents(8))
    );
}

#[test]
fn test_price_scaling_overflow_is_none() {
    assert_eq!(Price::from_cents(u64::MAX).checked_scaled_by_percent(150), None);
    // The half-up rounding step can overflow on its own.
    assert_eq!(Price::from_cents(u64::MAX).checked_scaled_by_percent(1), None);
}

#[test]
fn test_price_checked_mul() {
    assert_eq!(Price::from_units(12).checked_mul(3), Some(Price::from_units(36)));
    assert_eq!(Price::from_cents(u64::MAX).checked_mul(2), None);
}

#[test]
fn test_price_sum() {
    let total: Price = [Price::from_units(15), Price::from_units(12)]
        .iter()
        .sum();
    assert_eq!(total, Price::from_units(27));
}

#[test]
fn test_price_checked_sub_never_goes_negative() {
    assert_eq!(Price::from_units(1).checked_sub(Price::from_units(2)), None);
}
