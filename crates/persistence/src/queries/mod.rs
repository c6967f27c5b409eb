// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries.
//!
//! The booking flow never reads reservations back; these exist for
//! verification and tooling.

pub mod reservations;

pub use reservations::{count_reservations, get_reservation, list_reservations};
