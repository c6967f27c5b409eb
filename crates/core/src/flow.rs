// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::sync::Arc;

use crate::command::Command;
use crate::config::BookingConfig;
use crate::error::CoreError;
use crate::repository::ReservationRepository;
use crate::session::BookingSession;
use cinema_booking_domain::{Film, Price, Reservation, ReservationDraft, SeatPosition, SeatToggle};

/// A stage of the booking flow.
///
/// The flow is strictly linear: Menu, then `SeatSelection`, then
/// Confirmation, then back to Menu after a commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stage {
    /// Choosing a film.
    #[default]
    Menu,
    /// Toggling seats on the grid.
    SeatSelection,
    /// Entering a name and confirming.
    Confirmation,
}

impl Stage {
    /// Returns the stage name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Menu => "Menu",
            Self::SeatSelection => "SeatSelection",
            Self::Confirmation => "Confirmation",
        }
    }

    /// Returns whether a command is offered in this stage.
    #[must_use]
    pub fn offers(&self, command: &Command) -> bool {
        command.stage() == *self
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a dispatched command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowEvent {
    /// A film was chosen.
    FilmSelected {
        /// The chosen film.
        film: Film,
    },
    /// A fresh seat grid was built and seat selection began.
    SeatSelectionStarted,
    /// A seat was selected or deselected.
    SeatToggled {
        /// The toggled seat.
        position: SeatPosition,
        /// Whether the seat is now selected.
        toggle: SeatToggle,
        /// The total after the toggle.
        total_price: Price,
    },
    /// Seat selection ended and confirmation began.
    ConfirmationStarted,
    /// The customer name was recorded.
    CustomerNameSet,
    /// The reservation was stored and the session reset.
    ReservationCommitted {
        /// The stored reservation.
        reservation: Reservation,
        /// The total price of the reserved seats.
        total_price: Price,
    },
}

/// The result of a successful dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The stage before the command.
    pub from: Stage,
    /// The stage after the command.
    pub to: Stage,
    /// What the command did.
    pub event: FlowEvent,
}

/// Drives one booking session through Menu, `SeatSelection` and
/// Confirmation, committing finished reservations to a repository.
///
/// The controller owns the session and the repository handle for the
/// lifetime of the process. A failed command leaves both the stage and the
/// session as they were.
#[derive(Debug)]
pub struct FlowController<R> {
    stage: Stage,
    session: BookingSession,
    repository: R,
}

impl<R: ReservationRepository> FlowController<R> {
    /// Creates a controller in the Menu stage.
    ///
    /// The repository's schema is bootstrapped before the first command.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::PersistenceFailed` if schema bootstrap fails.
    pub fn new(config: Arc<BookingConfig>, mut repository: R) -> Result<Self, CoreError> {
        repository
            .ensure_schema()
            .map_err(|e| CoreError::PersistenceFailed(e.to_string()))?;

        Ok(Self {
            stage: Stage::Menu,
            session: BookingSession::new(config),
            repository,
        })
    }

    /// Returns the current stage.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// Returns the booking session.
    #[must_use]
    pub const fn session(&self) -> &BookingSession {
        &self.session
    }

    /// Returns the repository.
    #[must_use]
    pub const fn repository(&self) -> &R {
        &self.repository
    }

    /// Returns the repository mutably, for read-side queries that need a
    /// connection. The session cannot be reached this way.
    pub const fn repository_mut(&mut self) -> &mut R {
        &mut self.repository
    }

    /// Applies one command.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The current stage does not offer the command
    /// - The film is not in the catalog
    /// - The seat is outside the grid
    /// - No film is selected when leaving the menu
    /// - The reservation draft is incomplete
    /// - The repository fails to store the reservation
    pub fn dispatch(&mut self, command: Command) -> Result<TransitionResult, CoreError> {
        if !self.stage.offers(&command) {
            return Err(CoreError::CommandNotAvailable {
                command: command.name(),
                stage: self.stage,
            });
        }

        let from: Stage = self.stage;
        let event: FlowEvent = match command {
            Command::SelectFilm { name } => {
                let film: Film = self.session.select_film(&name)?.clone();
                FlowEvent::FilmSelected { film }
            }
            Command::ProceedToSeats => {
                if self.session.selected_film().is_none() {
                    return Err(CoreError::IncompleteSession(String::from(
                        "a film must be selected before choosing seats",
                    )));
                }
                self.session.start_seat_selection();
                self.stage = Stage::SeatSelection;
                FlowEvent::SeatSelectionStarted
            }
            Command::ToggleSeat { position } => {
                let toggle: SeatToggle = self.session.toggle_seat(position)?;
                FlowEvent::SeatToggled {
                    position,
                    toggle,
                    total_price: self.session.total_price(),
                }
            }
            Command::ProceedToConfirmation => {
                self.stage = Stage::Confirmation;
                FlowEvent::ConfirmationStarted
            }
            Command::SetCustomerName { name } => {
                self.session.set_customer_name(&name);
                FlowEvent::CustomerNameSet
            }
            Command::Confirm => self.commit()?,
        };

        Ok(TransitionResult {
            from,
            to: self.stage,
            event,
        })
    }

    /// Builds the draft, stores it, and only then resets the session.
    fn commit(&mut self) -> Result<FlowEvent, CoreError> {
        let draft: ReservationDraft = self.session.build_reservation_draft()?;

        let reservation: Reservation = self
            .repository
            .append(&draft)
            .map_err(|e| CoreError::PersistenceFailed(e.to_string()))?;

        self.session.reset();
        self.stage = Stage::Menu;

        Ok(FlowEvent::ReservationCommitted {
            reservation,
            total_price: draft.total_price,
        })
    }
}
