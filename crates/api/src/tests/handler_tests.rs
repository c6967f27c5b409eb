// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cinema_booking::Stage;

use crate::{
    ApiError, ConfirmRequest, SelectFilmRequest, ToggleSeatRequest, confirm, list_films, proceed,
    seat_map, select_film, session_view, toggle_seat,
};

use super::helpers::{
    advance_to_confirmation, confirm_request, create_test_flow, create_unavailable_flow,
};

#[test]
fn test_list_films_returns_catalog_in_order() {
    let flow = create_test_flow();

    let response = list_films(&flow);

    assert_eq!(response.films, vec!["Film 1", "Film 2", "Film 3"]);
    assert_eq!(response.selected_film, None);
}

#[test]
fn test_new_session_view_is_empty_menu() {
    let flow = create_test_flow();

    let view = session_view(&flow);

    assert_eq!(view.stage, "Menu");
    assert_eq!(view.selected_film, None);
    assert!(view.selected_seats.is_empty());
    assert_eq!(view.total_price, "$0.00");
    assert_eq!(view.total_price_cents, 0);
}

#[test]
fn test_select_film_records_choice() {
    let mut flow = create_test_flow();

    let view = select_film(
        &mut flow,
        &SelectFilmRequest {
            film: String::from("Film 2"),
        },
    )
    .unwrap();

    assert_eq!(view.stage, "Menu");
    assert_eq!(view.selected_film.as_deref(), Some("Film 2"));
    assert_eq!(list_films(&flow).selected_film.as_deref(), Some("Film 2"));
}

#[test]
fn test_select_unknown_film_is_not_found() {
    let mut flow = create_test_flow();

    let result = select_film(
        &mut flow,
        &SelectFilmRequest {
            film: String::from("Film 9"),
        },
    );

    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
    assert_eq!(session_view(&flow).selected_film, None);
}

#[test]
fn test_proceed_without_film_is_rule_violation() {
    let mut flow = create_test_flow();

    let result = proceed(&mut flow);

    assert!(matches!(result, Err(ApiError::DomainRuleViolation { .. })));
    assert_eq!(flow.stage(), Stage::Menu);
}

#[test]
fn test_proceed_walks_menu_to_confirmation() {
    let mut flow = create_test_flow();
    select_film(
        &mut flow,
        &SelectFilmRequest {
            film: String::from("Film 1"),
        },
    )
    .unwrap();

    assert_eq!(proceed(&mut flow).unwrap().stage, "SeatSelection");
    assert_eq!(proceed(&mut flow).unwrap().stage, "Confirmation");

    let result = proceed(&mut flow);
    assert!(matches!(
        result,
        Err(ApiError::CommandNotAvailable { ref stage, .. }) if stage == "Confirmation"
    ));
}

#[test]
fn test_toggle_seat_reports_running_total() {
    let mut flow = create_test_flow();
    select_film(
        &mut flow,
        &SelectFilmRequest {
            film: String::from("Film 1"),
        },
    )
    .unwrap();
    proceed(&mut flow).unwrap();

    let first = toggle_seat(&mut flow, ToggleSeatRequest { row: 1, col: 1 }).unwrap();
    assert!(first.selected);
    assert_eq!(first.total_price, "$15.00");

    let second = toggle_seat(&mut flow, ToggleSeatRequest { row: 4, col: 2 }).unwrap();
    assert_eq!(second.total_price_cents, 2700);

    let third = toggle_seat(&mut flow, ToggleSeatRequest { row: 1, col: 1 }).unwrap();
    assert!(!third.selected);
    assert_eq!(third.total_price, "$12.00");

    assert_eq!(session_view(&flow).selected_seats, vec!["4,2"]);
}

#[test]
fn test_toggle_seat_outside_grid_is_invalid_input() {
    let mut flow = create_test_flow();
    select_film(
        &mut flow,
        &SelectFilmRequest {
            film: String::from("Film 1"),
        },
    )
    .unwrap();
    proceed(&mut flow).unwrap();

    let result = toggle_seat(&mut flow, ToggleSeatRequest { row: 11, col: 1 });

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "seat"
    ));
    assert_eq!(session_view(&flow).total_price_cents, 0);
}

#[test]
fn test_toggle_seat_in_menu_is_not_available() {
    let mut flow = create_test_flow();

    let result = toggle_seat(&mut flow, ToggleSeatRequest { row: 1, col: 1 });

    assert!(matches!(result, Err(ApiError::CommandNotAvailable { .. })));
}

#[test]
fn test_seat_map_shows_tiers_and_selection() {
    let mut flow = create_test_flow();
    select_film(
        &mut flow,
        &SelectFilmRequest {
            film: String::from("Film 3"),
        },
    )
    .unwrap();
    proceed(&mut flow).unwrap();
    toggle_seat(&mut flow, ToggleSeatRequest { row: 10, col: 10 }).unwrap();

    let map = seat_map(&flow);

    assert_eq!((map.rows, map.cols), (10, 10));
    assert_eq!(map.seats.len(), 100);
    assert_eq!(map.seats[0].tier, "Premium");
    assert_eq!(map.seats[0].price, "$15.00");
    assert_eq!(map.seats[30].tier, "Preferred");
    assert_eq!(map.seats[30].price_cents, 1200);
    let last = map.seats.last().unwrap();
    assert_eq!(last.tier, "Standard");
    assert!(last.selected);
    assert_eq!(map.total_price, "$10.00");
}

#[test]
fn test_confirm_persists_and_resets_session() {
    let mut flow = create_test_flow();
    advance_to_confirmation(&mut flow, "Film 2", &[(1, 1), (3, 4)]);

    let response = confirm(&mut flow, &confirm_request("Ada")).unwrap();

    assert_eq!(response.film, "Film 2");
    assert_eq!(response.seats, "1,1,3,4");
    assert_eq!(response.customer_name, "Ada");
    assert_eq!(response.total_price, "$27.00");

    let view = session_view(&flow);
    assert_eq!(view.stage, "Menu");
    assert_eq!(view.selected_film, None);
    assert!(view.selected_seats.is_empty());

    let stored = flow
        .repository_mut()
        .get_reservation(response.reservation_id)
        .unwrap();
    assert_eq!(stored.seat_labels(), "1,1,3,4");
}

#[test]
fn test_confirm_accepts_empty_name_and_no_seats_by_default() {
    let mut flow = create_test_flow();
    advance_to_confirmation(&mut flow, "Film 1", &[]);

    let response = confirm(&mut flow, &ConfirmRequest::default()).unwrap();

    assert_eq!(response.seats, "");
    assert_eq!(response.customer_name, "");
    assert_eq!(response.total_price_cents, 0);
}

#[test]
fn test_confirm_outside_confirmation_is_not_available() {
    let mut flow = create_test_flow();

    let result = confirm(&mut flow, &confirm_request("Ada"));

    assert!(matches!(result, Err(ApiError::CommandNotAvailable { .. })));
    assert_eq!(flow.repository_mut().count_reservations().unwrap(), 0);
}

#[test]
fn test_failed_commit_keeps_session_for_retry() {
    let mut flow = create_unavailable_flow();
    advance_to_confirmation(&mut flow, "Film 2", &[(2, 2)]);

    let result = confirm(&mut flow, &confirm_request("Ada"));

    assert!(matches!(result, Err(ApiError::PersistenceFailed { .. })));
    let view = session_view(&flow);
    assert_eq!(view.stage, "Confirmation");
    assert_eq!(view.selected_seats, vec!["2,2"]);
    assert_eq!(view.customer_name, "Ada");
}
