use http::StatusCode;
use serde::Serialize;

use crate::client::error::ApiClientError;

/// Typed response envelope of an operation.
///
/// Declared statuses land in `Success`, `NoContent` or `Error`; anything
/// else is kept verbatim in `Unknown`.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedResponse<S, E> {
    /// A declared success status with its decoded payload.
    Success {
        /// The HTTP status.
        status: StatusCode,
        /// The decoded payload.
        value: S,
    },
    /// A declared success status without payload.
    NoContent {
        /// The HTTP status.
        status: StatusCode,
    },
    /// A declared error status with its decoded payload.
    Error {
        /// The HTTP status.
        status: StatusCode,
        /// The decoded payload.
        value: E,
    },
    /// A status the operation does not declare.
    Unknown {
        /// The HTTP status.
        status: StatusCode,
        /// The payload as JSON, a JSON string for non-JSON bodies, `null` when empty.
        value: serde_json::Value,
    },
}

impl<S, E> TypedResponse<S, E> {
    /// The HTTP status.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Success { status, .. }
            | Self::NoContent { status }
            | Self::Error { status, .. }
            | Self::Unknown { status, .. } => *status,
        }
    }

    /// `true` for `Success` and `NoContent`.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. } | Self::NoContent { .. })
    }

    /// The success payload, if any.
    pub fn success(self) -> Option<S> {
        match self {
            Self::Success { value, .. } => Some(value),
            Self::NoContent { .. } | Self::Error { .. } | Self::Unknown { .. } => None,
        }
    }

    /// The declared error payload, if any.
    pub fn error(self) -> Option<E> {
        match self {
            Self::Error { value, .. } => Some(value),
            Self::Success { .. } | Self::NoContent { .. } | Self::Unknown { .. } => None,
        }
    }

    /// Turns non-success responses into [`ApiClientError::UnexpectedStatusCode`].
    ///
    /// `NoContent` yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns the status and the serialized payload for `Error` and `Unknown`.
    pub fn into_result(self) -> Result<Option<S>, ApiClientError>
    where
        E: Serialize,
    {
        match self {
            Self::Success { value, .. } => Ok(Some(value)),
            Self::NoContent { .. } => Ok(None),
            Self::Error { status, value } => Err(ApiClientError::UnexpectedStatusCode {
                status_code: status.as_u16(),
                body: serde_json::to_string(&value)?,
            }),
            Self::Unknown { status, value } => Err(ApiClientError::UnexpectedStatusCode {
                status_code: status.as_u16(),
                body: value.to_string(),
            }),
        }
    }
}
