// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::sync::Arc;

use crate::config::BookingConfig;
use crate::error::CoreError;
use cinema_booking_domain::{
    DomainError, Film, Price, ReservationDraft, SeatGrid, SeatPosition, SeatToggle,
};

/// Everything one pass through the booking flow accumulates.
///
/// The session owns its seat grid. The film catalog and pricing come from
/// the shared configuration and outlive any individual session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSession {
    config: Arc<BookingConfig>,
    selected_film: Option<Film>,
    seat_grid: SeatGrid,
    customer_name: String,
}

impl BookingSession {
    /// Creates an empty session.
    #[must_use]
    pub fn new(config: Arc<BookingConfig>) -> Self {
        let seat_grid: SeatGrid = config.build_seat_grid();
        Self {
            config,
            selected_film: None,
            seat_grid,
            customer_name: String::new(),
        }
    }

    /// Returns the shared configuration.
    #[must_use]
    pub fn config(&self) -> &BookingConfig {
        &self.config
    }

    /// Returns the selected film, if any.
    #[must_use]
    pub const fn selected_film(&self) -> Option<&Film> {
        self.selected_film.as_ref()
    }

    /// Returns the selected film's name, or an empty string.
    #[must_use]
    pub fn selected_film_name(&self) -> &str {
        self.selected_film.as_ref().map_or("", Film::name)
    }

    /// Returns the seat grid.
    #[must_use]
    pub const fn seat_grid(&self) -> &SeatGrid {
        &self.seat_grid
    }

    /// Returns the selected seats in selection order.
    #[must_use]
    pub fn selected_seats(&self) -> &[SeatPosition] {
        self.seat_grid.selected_seats()
    }

    /// Returns the total price of the selected seats.
    #[must_use]
    pub const fn total_price(&self) -> Price {
        self.seat_grid.total_price()
    }

    /// Returns the customer name entered so far.
    #[must_use]
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    /// Returns true if the session holds no film, seats or name.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected_film.is_none()
            && self.seat_grid.selected_seats().is_empty()
            && self.customer_name.is_empty()
    }

    /// Chooses a film from the catalog.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownFilm` if the name is not in the catalog.
    /// The previous choice is kept in that case.
    pub fn select_film(&mut self, name: &str) -> Result<&Film, DomainError> {
        let film: Film = self.config.catalog().resolve(name)?;
        Ok(self.selected_film.insert(film))
    }

    /// Replaces the seat grid with a freshly built, unselected one.
    pub fn start_seat_selection(&mut self) {
        self.seat_grid = self.config.build_seat_grid();
    }

    /// Toggles a seat in the owned grid.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SeatOutOfRange` if the seat is outside the grid.
    pub fn toggle_seat(&mut self, position: SeatPosition) -> Result<SeatToggle, DomainError> {
        self.seat_grid.toggle(position)
    }

    /// Records the customer name. Any value is accepted here.
    pub fn set_customer_name(&mut self, name: &str) {
        self.customer_name = name.to_string();
    }

    /// Builds the reservation draft from the current state.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::IncompleteSession` if:
    /// - No film has been selected
    /// - The draft policy requires a customer name and the name is blank
    /// - The draft policy requires seats and none are selected
    pub fn build_reservation_draft(&self) -> Result<ReservationDraft, CoreError> {
        let film: &Film = self.selected_film.as_ref().ok_or_else(|| {
            CoreError::IncompleteSession(String::from("no film has been selected"))
        })?;

        let policy = self.config.draft_policy();
        if policy.require_customer_name && self.customer_name.trim().is_empty() {
            return Err(CoreError::IncompleteSession(String::from(
                "a customer name is required",
            )));
        }
        if policy.require_seats && self.seat_grid.selected_seats().is_empty() {
            return Err(CoreError::IncompleteSession(String::from(
                "at least one seat must be selected",
            )));
        }

        Ok(ReservationDraft {
            film: film.clone(),
            seats: self.seat_grid.selected_seats().to_vec(),
            customer_name: self.customer_name.clone(),
            total_price: self.seat_grid.total_price(),
        })
    }

    /// Restores the session to its initial empty state.
    pub fn reset(&mut self) {
        self.selected_film = None;
        self.seat_grid.clear_selection();
        self.customer_name.clear();
    }
}
