// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Prices are sent twice: formatted for display and as integer cents.

/// API request to choose a film from the menu.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SelectFilmRequest {
    /// The film's display name, exactly as listed.
    pub film: String,
}

/// API request to select or deselect one seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ToggleSeatRequest {
    /// The 1-based row.
    pub row: u8,
    /// The 1-based column.
    pub col: u8,
}

/// API request to confirm the reservation.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct ConfirmRequest {
    /// The name to book under. May be empty.
    #[serde(default)]
    pub customer_name: String,
}

/// API response listing the films on offer.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListFilmsResponse {
    /// Film names in catalog order.
    pub films: Vec<String>,
    /// The currently selected film, if any.
    pub selected_film: Option<String>,
}

/// API response describing the booking session.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SessionResponse {
    /// The current stage.
    pub stage: String,
    /// The selected film, if any.
    pub selected_film: Option<String>,
    /// Selected seat labels (`"row,col"`) in selection order.
    pub selected_seats: Vec<String>,
    /// The customer name entered so far.
    pub customer_name: String,
    /// The total of the selected seats, formatted.
    pub total_price: String,
    /// The total of the selected seats in cents.
    pub total_price_cents: u64,
}

/// One seat in a seat map.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SeatResponse {
    /// The 1-based row.
    pub row: u8,
    /// The 1-based column.
    pub col: u8,
    /// The pricing tier of the row.
    pub tier: String,
    /// The unit price, formatted.
    pub price: String,
    /// The unit price in cents.
    pub price_cents: u64,
    /// Whether the seat is currently selected.
    pub selected: bool,
}

/// API response containing the full seat grid.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SeatMapResponse {
    /// The number of rows.
    pub rows: u8,
    /// The number of seats per row.
    pub cols: u8,
    /// All seats in row-major order.
    pub seats: Vec<SeatResponse>,
    /// The total of the selected seats, formatted.
    pub total_price: String,
    /// The total of the selected seats in cents.
    pub total_price_cents: u64,
}

/// API response for a seat toggle.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ToggleSeatResponse {
    /// The 1-based row.
    pub row: u8,
    /// The 1-based column.
    pub col: u8,
    /// Whether the seat is now selected.
    pub selected: bool,
    /// The new total, formatted.
    pub total_price: String,
    /// The new total in cents.
    pub total_price_cents: u64,
}

/// API response for a confirmed reservation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ConfirmResponse {
    /// The identifier assigned by the repository.
    pub reservation_id: i64,
    /// The booked film.
    pub film: String,
    /// The booked seats in stored form (`"1,1,3,4"`).
    pub seats: String,
    /// The name the reservation was made under.
    pub customer_name: String,
    /// The total paid, formatted.
    pub total_price: String,
    /// The total paid in cents.
    pub total_price_cents: u64,
    /// A success message.
    pub message: String,
}
