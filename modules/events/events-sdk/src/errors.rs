//! Error types for the events SDK.

use eventhub_errors::Failure;
use http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EventsError {
    #[error("Event not found")]
    NotFound,

    /// The caller is not the event's creator.
    #[error("Unauthorized")]
    Forbidden,

    /// A store failure reported by the repository, passed through as-is.
    #[error("{message}")]
    Store { status: StatusCode, message: String },

    #[error("Unexpected error: {message}")]
    Internal { message: String },
}

impl EventsError {
    #[must_use]
    pub fn not_found() -> Self {
        Self::NotFound
    }

    #[must_use]
    pub fn forbidden() -> Self {
        Self::Forbidden
    }

    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Store { status, .. } => *status,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<Failure> for EventsError {
    fn from(f: Failure) -> Self {
        Self::Store {
            status: f.status,
            message: f.message,
        }
    }
}

impl From<EventsError> for Failure {
    fn from(e: EventsError) -> Self {
        Failure::new(e.status(), e.to_string())
    }
}
