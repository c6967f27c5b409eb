// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use cinema_booking::CoreError;
use cinema_booking_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The action is not offered in the current stage.
    CommandNotAvailable {
        /// The command that was attempted.
        command: String,
        /// The stage the session was in.
        stage: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// The reservation could not be stored.
    PersistenceFailed {
        /// A description of the storage failure.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::CommandNotAvailable { command, stage } => {
                write!(f, "'{command}' is not available during {stage}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::PersistenceFailed { message } => {
                write!(f, "Reservation could not be saved: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::SeatOutOfRange { .. } => ApiError::InvalidInput {
            field: String::from("seat"),
            message: err.to_string(),
        },
        DomainError::InvalidSeatLabel(msg) => ApiError::InvalidInput {
            field: String::from("seat"),
            message: msg,
        },
        DomainError::InvalidPrice(msg) => ApiError::InvalidInput {
            field: String::from("price"),
            message: msg,
        },
        DomainError::UnknownFilm(name) => ApiError::ResourceNotFound {
            resource_type: String::from("Film"),
            message: format!("Film '{name}' is not showing"),
        },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::IncompleteSession(msg) => ApiError::DomainRuleViolation {
            rule: String::from("complete_session"),
            message: msg,
        },
        CoreError::CommandNotAvailable { command, stage } => ApiError::CommandNotAvailable {
            command: command.to_string(),
            stage: stage.to_string(),
        },
        CoreError::PersistenceFailed(msg) => ApiError::PersistenceFailed { message: msg },
    }
}
