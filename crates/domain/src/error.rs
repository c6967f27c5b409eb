// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A seat was addressed outside the bounds of the grid.
    SeatOutOfRange {
        /// The requested row (1-indexed).
        row: u8,
        /// The requested column (1-indexed).
        col: u8,
        /// The number of rows in the grid.
        rows: u8,
        /// The number of columns in the grid.
        cols: u8,
    },
    /// The film is not part of the configured catalog.
    UnknownFilm(String),
    /// A price could not be parsed or is not representable.
    InvalidPrice(String),
    /// A seat label could not be parsed.
    InvalidSeatLabel(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SeatOutOfRange {
                row,
                col,
                rows,
                cols,
            } => {
                write!(
                    f,
                    "Seat ({row},{col}) is outside the {rows}x{cols} seat grid"
                )
            }
            Self::UnknownFilm(name) => write!(f, "Film '{name}' is not in the catalog"),
            Self::InvalidPrice(msg) => write!(f, "Invalid price: {msg}"),
            Self::InvalidSeatLabel(msg) => write!(f, "Invalid seat label: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}
