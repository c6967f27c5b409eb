// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Mutation modules.
//!
//! The reservation store is append-only: the only mutation is an insert.

pub mod reservations;

pub use reservations::append_reservation;
