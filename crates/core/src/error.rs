// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::flow::Stage;
use cinema_booking_domain::DomainError;

/// Errors that can occur while driving a booking session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The session does not yet hold what the requested step needs.
    IncompleteSession(String),
    /// The reservation repository failed. The session is left unchanged.
    PersistenceFailed(String),
    /// The command is not offered in the current stage.
    CommandNotAvailable {
        /// The command that was dispatched.
        command: &'static str,
        /// The stage the flow was in.
        stage: Stage,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::IncompleteSession(msg) => write!(f, "Incomplete session: {msg}"),
            Self::PersistenceFailed(msg) => write!(f, "Failed to save reservation: {msg}"),
            Self::CommandNotAvailable { command, stage } => {
                write!(f, "'{command}' is not available during {stage}")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
