// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! One function per user action.
//!
//! Each mutating handler dispatches exactly one core command, except
//! `confirm`, which records the customer name and then commits. Read
//! handlers only look at the session.

use cinema_booking::{
    BookingSession, Command, CoreError, FlowController, FlowEvent, ReservationRepository, Stage,
    TransitionResult,
};
use cinema_booking_domain::{Price, PricingTier, Seat, SeatGrid, SeatPosition, SeatToggle};
use tracing::{debug, error, info, warn};

use crate::error::{ApiError, translate_core_error};
use crate::request_response::{
    ConfirmRequest, ConfirmResponse, ListFilmsResponse, SeatMapResponse, SeatResponse,
    SelectFilmRequest, SessionResponse, ToggleSeatRequest, ToggleSeatResponse,
};

/// Dispatches a command, logging the outcome and translating failures.
fn dispatch<R: ReservationRepository>(
    flow: &mut FlowController<R>,
    command: Command,
) -> Result<TransitionResult, ApiError> {
    let name: &'static str = command.name();

    match flow.dispatch(command) {
        Ok(result) => {
            debug!(command = name, from = %result.from, to = %result.to, "Command applied");
            Ok(result)
        }
        Err(err @ CoreError::PersistenceFailed(_)) => {
            error!(command = name, error = %err, "Reservation could not be stored");
            Err(translate_core_error(err))
        }
        Err(err) => {
            warn!(command = name, stage = %flow.stage(), error = %err, "Command rejected");
            Err(translate_core_error(err))
        }
    }
}

fn session_response(stage: Stage, session: &BookingSession) -> SessionResponse {
    let total: Price = session.total_price();
    SessionResponse {
        stage: stage.to_string(),
        selected_film: session.selected_film().map(ToString::to_string),
        selected_seats: session
            .selected_seats()
            .iter()
            .map(SeatPosition::label)
            .collect(),
        customer_name: session.customer_name().to_string(),
        total_price: total.to_string(),
        total_price_cents: total.cents(),
    }
}

fn seat_response(seat: &Seat) -> SeatResponse {
    let position: SeatPosition = seat.position();
    SeatResponse {
        row: position.row,
        col: position.col,
        tier: PricingTier::for_row(position.row).to_string(),
        price: seat.unit_price().to_string(),
        price_cents: seat.unit_price().cents(),
        selected: seat.is_selected(),
    }
}

/// Lists the films on offer.
#[must_use]
pub fn list_films<R: ReservationRepository>(flow: &FlowController<R>) -> ListFilmsResponse {
    let session: &BookingSession = flow.session();
    ListFilmsResponse {
        films: session
            .config()
            .catalog()
            .films()
            .iter()
            .map(ToString::to_string)
            .collect(),
        selected_film: session.selected_film().map(ToString::to_string),
    }
}

/// Describes the current stage and session.
#[must_use]
pub fn session_view<R: ReservationRepository>(flow: &FlowController<R>) -> SessionResponse {
    session_response(flow.stage(), flow.session())
}

/// Returns every seat with its price and selection state.
#[must_use]
pub fn seat_map<R: ReservationRepository>(flow: &FlowController<R>) -> SeatMapResponse {
    let grid: &SeatGrid = flow.session().seat_grid();
    SeatMapResponse {
        rows: grid.rows(),
        cols: grid.cols(),
        seats: grid.seats().iter().map(seat_response).collect(),
        total_price: grid.total_price().to_string(),
        total_price_cents: grid.total_price().cents(),
    }
}

/// Chooses a film while in the menu.
///
/// # Errors
///
/// Returns an error if the session is not in the menu or the film is not
/// in the catalog.
pub fn select_film<R: ReservationRepository>(
    flow: &mut FlowController<R>,
    request: &SelectFilmRequest,
) -> Result<SessionResponse, ApiError> {
    dispatch(
        flow,
        Command::SelectFilm {
            name: request.film.clone(),
        },
    )?;
    Ok(session_view(flow))
}

/// Advances to the next stage.
///
/// From the menu this starts seat selection; from seat selection it moves
/// to confirmation. Confirmation has no next stage; leaving it requires
/// `confirm`.
///
/// # Errors
///
/// Returns an error if no film is selected when leaving the menu, or if the
/// session is already in confirmation.
pub fn proceed<R: ReservationRepository>(
    flow: &mut FlowController<R>,
) -> Result<SessionResponse, ApiError> {
    let command: Command = match flow.stage() {
        Stage::Menu => Command::ProceedToSeats,
        Stage::SeatSelection | Stage::Confirmation => Command::ProceedToConfirmation,
    };
    dispatch(flow, command)?;
    Ok(session_view(flow))
}

/// Selects or deselects one seat.
///
/// # Errors
///
/// Returns an error if the session is not in seat selection or the seat is
/// outside the grid.
pub fn toggle_seat<R: ReservationRepository>(
    flow: &mut FlowController<R>,
    request: ToggleSeatRequest,
) -> Result<ToggleSeatResponse, ApiError> {
    let position: SeatPosition = SeatPosition::new(request.row, request.col);
    let result: TransitionResult = dispatch(flow, Command::ToggleSeat { position })?;

    match result.event {
        FlowEvent::SeatToggled {
            toggle,
            total_price,
            ..
        } => Ok(ToggleSeatResponse {
            row: position.row,
            col: position.col,
            selected: toggle == SeatToggle::Selected,
            total_price: total_price.to_string(),
            total_price_cents: total_price.cents(),
        }),
        other => Err(ApiError::Internal {
            message: format!("Unexpected event after toggling a seat: {other:?}"),
        }),
    }
}

/// Records the customer name and commits the reservation.
///
/// On success the session is back in the menu with nothing selected. If the
/// commit fails the session stays in confirmation with the name recorded.
///
/// # Errors
///
/// Returns an error if the session is not in confirmation, the draft is
/// incomplete, or the reservation cannot be stored.
pub fn confirm<R: ReservationRepository>(
    flow: &mut FlowController<R>,
    request: &ConfirmRequest,
) -> Result<ConfirmResponse, ApiError> {
    dispatch(
        flow,
        Command::SetCustomerName {
            name: request.customer_name.clone(),
        },
    )?;

    let result: TransitionResult = dispatch(flow, Command::Confirm)?;

    match result.event {
        FlowEvent::ReservationCommitted {
            reservation,
            total_price,
        } => {
            info!(
                reservation_id = reservation.id,
                film = %reservation.film,
                seats = reservation.seats.len(),
                total = %total_price,
                "Reservation confirmed"
            );
            Ok(ConfirmResponse {
                reservation_id: reservation.id,
                seats: reservation.seat_labels(),
                message: format!(
                    "Reserved {} seat(s) for '{}'",
                    reservation.seats.len(),
                    reservation.film
                ),
                film: reservation.film,
                customer_name: reservation.customer_name,
                total_price: total_price.to_string(),
                total_price_cents: total_price.cents(),
            })
        }
        other => Err(ApiError::Internal {
            message: format!("Unexpected event after confirming: {other:?}"),
        }),
    }
}
