// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the cinema booking system.
//!
//! Translates user actions into core commands and core results into
//! serializable responses. Transport concerns live in the server.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{
    confirm, list_films, proceed, seat_map, select_film, session_view, toggle_seat,
};
pub use request_response::{
    ConfirmRequest, ConfirmResponse, ListFilmsResponse, SeatMapResponse, SeatResponse,
    SelectFilmRequest, SessionResponse, ToggleSeatRequest, ToggleSeatResponse,
};
