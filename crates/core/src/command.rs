// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::flow::Stage;
use cinema_booking_domain::SeatPosition;

/// A command represents one user action as data only.
///
/// Commands are the only way to change a booking session through the flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Choose a film from the catalog.
    SelectFilm {
        /// The film's display name.
        name: String,
    },
    /// Leave the menu and start choosing seats.
    ProceedToSeats,
    /// Select or deselect a seat.
    ToggleSeat {
        /// The seat to toggle.
        position: SeatPosition,
    },
    /// Leave seat selection and review the reservation.
    ProceedToConfirmation,
    /// Enter the name the reservation is made under.
    SetCustomerName {
        /// The customer name. May be empty.
        name: String,
    },
    /// Commit the reservation and return to the menu.
    Confirm,
}

impl Command {
    /// Returns the command name used in errors and logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SelectFilm { .. } => "SelectFilm",
            Self::ProceedToSeats => "ProceedToSeats",
            Self::ToggleSeat { .. } => "ToggleSeat",
            Self::ProceedToConfirmation => "ProceedToConfirmation",
            Self::SetCustomerName { .. } => "SetCustomerName",
            Self::Confirm => "Confirm",
        }
    }

    /// Returns the stage in which this command is offered.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        match self {
            Self::SelectFilm { .. } | Self::ProceedToSeats => Stage::Menu,
            Self::ToggleSeat { .. } | Self::ProceedToConfirmation => Stage::SeatSelection,
            Self::SetCustomerName { .. } | Self::Confirm => Stage::Confirmation,
        }
    }
}
