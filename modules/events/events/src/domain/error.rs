use eventhub_db::DbError;
use eventhub_errors::Failure;
use events_sdk::EventsError;
use http::StatusCode;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Event not found: {id}")]
    NotFound { id: Uuid },

    #[error("User '{acting_user}' may not modify event {id}")]
    Forbidden { id: Uuid, acting_user: String },

    /// Failure reported by the repository envelope.
    #[error("{message}")]
    Store { status: StatusCode, message: String },

    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

impl DomainError {
    #[must_use]
    pub fn not_found(id: Uuid) -> Self {
        Self::NotFound { id }
    }

    #[must_use]
    pub fn forbidden(id: Uuid, acting_user: impl Into<String>) -> Self {
        Self::Forbidden {
            id,
            acting_user: acting_user.into(),
        }
    }

    /// Keep the repository's status and message; use `fallback` when it carried none.
    #[must_use]
    pub fn store(failure: Failure, fallback: &str) -> Self {
        let message = if failure.message.is_empty() {
            fallback.to_owned()
        } else {
            failure.message
        };
        Self::Store {
            status: failure.status,
            message,
        }
    }
}

impl From<DomainError> for EventsError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound { .. } => Self::not_found(),
            DomainError::Forbidden { .. } => Self::forbidden(),
            DomainError::Store { status, message } => Self::Store { status, message },
            DomainError::Database(e) => Self::internal(e.to_string()),
        }
    }
}
