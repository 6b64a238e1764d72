//! Status-carrying success/failure envelope (pure data model, no HTTP framework dependencies)

use http::StatusCode;
use serde::{Serialize, Serializer};

/// Custom serializer for `StatusCode` to u16
#[allow(clippy::trivially_copy_pass_by_ref)] // serde requires &T signature
fn serialize_status_code<S>(status: &StatusCode, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u16(status.as_u16())
}

/// Result envelope returned by repository and service operations.
///
/// The fields are private so that the two legal shapes are the only ones
/// that can exist:
/// - success: `error` is `None`, `result` is `Some`
/// - failure: `error` is `Some`, `result` is `None`
///
/// `Envelope<()>` is the payload-less form. Any envelope can be downgraded to it
/// with [`Envelope::downgrade`] without losing the status or the error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
#[must_use]
pub struct Envelope<T = ()> {
    success: bool,
    #[serde(serialize_with = "serialize_status_code")]
    status_code: StatusCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<T>,
}

impl<T> Envelope<T> {
    /// Successful envelope with status 200.
    pub fn success(value: T) -> Self {
        Self::success_with(value, StatusCode::OK)
    }

    /// Successful envelope with an explicit status.
    pub fn success_with(value: T, status: StatusCode) -> Self {
        Self {
            success: true,
            status_code: status,
            error: None,
            result: Some(value),
        }
    }

    /// Failed envelope with status 400.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::failure_with(message, StatusCode::BAD_REQUEST)
    }

    /// Failed envelope with an explicit status.
    pub fn failure_with(message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            success: false,
            status_code: status,
            error: Some(message.into()),
            result: None,
        }
    }

    /// Build an envelope from a `Result`, using `status` for the success case.
    pub fn from_result<E>(result: Result<T, E>, status: StatusCode) -> Self
    where
        E: Into<Failure>,
    {
        match result {
            Ok(value) => Self::success_with(value, status),
            Err(e) => e.into().into_envelope(),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.success
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status_code
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    /// Replace the status code, keeping the outcome.
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status_code = status;
        self
    }

    /// Transform the payload of a successful envelope.
    pub fn map<U, F>(self, f: F) -> Envelope<U>
    where
        F: FnOnce(T) -> U,
    {
        Envelope {
            success: self.success,
            status_code: self.status_code,
            error: self.error,
            result: self.result.map(f),
        }
    }

    /// Drop the payload, keeping success flag, status and error.
    pub fn downgrade(self) -> Envelope<()> {
        self.map(|_| ())
    }

    /// Split into the payload or a [`Failure`].
    ///
    /// # Errors
    /// Returns the failure status and message when the envelope is not successful.
    pub fn into_result(self) -> Result<T, Failure> {
        match self.result {
            Some(value) if self.success => Ok(value),
            _ => Err(Failure::new(
                self.status_code,
                self.error.unwrap_or_default(),
            )),
        }
    }
}

impl Envelope<()> {
    /// Payload-less success with status 200.
    pub fn ok() -> Self {
        Self::success(())
    }

    /// Payload-less success with an explicit status.
    pub fn ok_with(status: StatusCode) -> Self {
        Self::success_with((), status)
    }
}

/// The failed half of an [`Envelope`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct Failure {
    pub status: StatusCode,
    pub message: String,
}

impl Failure {
    #[must_use]
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Re-wrap as a failed envelope of any payload type.
    pub fn into_envelope<T>(self) -> Envelope<T> {
        Envelope::failure_with(self.message, self.status)
    }
}

impl<T> From<Failure> for Envelope<T> {
    fn from(f: Failure) -> Self {
        f.into_envelope()
    }
}
