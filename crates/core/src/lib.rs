// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The booking session state machine.
//!
//! A `FlowController` owns exactly one `BookingSession` and one
//! `ReservationRepository` handle. User actions arrive as `Command`s; each
//! is applied completely, or rejected with the session left untouched.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod command;
mod config;
mod error;
mod flow;
mod repository;
mod session;

#[cfg(test)]
mod tests;

// Re-export public types
pub use command::Command;
pub use config::{BookingConfig, ConfigError, DraftPolicy};
pub use error::CoreError;
pub use flow::{FlowController, FlowEvent, Stage, TransitionResult};
pub use repository::ReservationRepository;
pub use session::BookingSession;
