use std::fmt;

use http::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::raw::RawResponse;
use super::typed::TypedResponse;
use crate::client::error::ApiClientError;

/// Key of a response table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKey {
    /// An exact status code, e.g. `200`.
    Code(u16),
    /// A status class, e.g. `4` for `4XX`.
    Class(u8),
    /// Any other non-2xx status.
    Default,
}

impl StatusKey {
    fn matches(self, status: StatusCode) -> bool {
        match self {
            Self::Code(code) => status.as_u16() == code,
            Self::Class(class) => status.as_u16() / 100 == u16::from(class),
            Self::Default => !status.is_success(),
        }
    }

    fn rank(self) -> u8 {
        match self {
            Self::Code(_) => 0,
            Self::Class(_) => 1,
            Self::Default => 2,
        }
    }
}

impl fmt::Display for StatusKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Code(code) => write!(f, "{code}"),
            Self::Class(class) => write!(f, "{class}XX"),
            Self::Default => write!(f, "default"),
        }
    }
}

type Decoder<T> = Box<dyn Fn(&RawResponse) -> Result<T, ApiClientError> + Send + Sync>;

enum Entry<S, E> {
    Success(Decoder<S>),
    NoContent,
    Error(Decoder<E>),
}

impl<S, E> fmt::Debug for Entry<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(_) => write!(f, "Success"),
            Self::NoContent => write!(f, "NoContent"),
            Self::Error(_) => write!(f, "Error"),
        }
    }
}

/// Per-operation table mapping statuses to payload decoders.
///
/// ```rust
/// use http::StatusCode;
/// use sdkforge_core::{RawResponse, ResponseTable, StatusKey, TypedResponse};
///
/// let table = ResponseTable::<Vec<String>, serde_json::Value>::new()
///     .success(StatusKey::Code(200))
///     .error(StatusKey::Class(4));
///
/// let response = table.resolve(RawResponse::json(StatusCode::OK, r#"["a"]"#))?;
/// assert_eq!(response.success(), Some(vec!["a".to_string()]));
///
/// let response = table.resolve(RawResponse::json(StatusCode::BAD_GATEWAY, "{}"))?;
/// assert!(matches!(response, TypedResponse::Unknown { .. }));
/// # Ok::<(), sdkforge_core::ApiClientError>(())
/// ```
#[derive(Debug)]
pub struct ResponseTable<S, E> {
    entries: Vec<(StatusKey, Entry<S, E>)>,
}

impl<S, E> Default for ResponseTable<S, E> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<S: 'static, E: 'static> ResponseTable<S, E> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a success status decoding into `S`.
    #[must_use]
    pub fn success(self, key: StatusKey) -> Self
    where
        S: DeserializeOwned,
    {
        self.success_with(key, |value: S| value)
    }

    /// Declares a success status decoding a `T` wrapped into `S`.
    #[must_use]
    pub fn success_with<T, F>(mut self, key: StatusKey, wrap: F) -> Self
    where
        T: DeserializeOwned + 'static,
        F: Fn(T) -> S + Send + Sync + 'static,
    {
        let decoder: Decoder<S> = Box::new(move |raw: &RawResponse| raw.decode::<T>().map(&wrap));
        self.entries.push((key, Entry::Success(decoder)));
        self
    }

    /// Declares a success status without payload.
    #[must_use]
    pub fn no_content(mut self, key: StatusKey) -> Self {
        self.entries.push((key, Entry::NoContent));
        self
    }

    /// Declares an error status decoding into `E`.
    #[must_use]
    pub fn error(self, key: StatusKey) -> Self
    where
        E: DeserializeOwned,
    {
        self.error_with(key, |value: E| value)
    }

    /// Declares an error status decoding a `T` wrapped into `E`.
    #[must_use]
    pub fn error_with<T, F>(mut self, key: StatusKey, wrap: F) -> Self
    where
        T: DeserializeOwned + 'static,
        F: Fn(T) -> E + Send + Sync + 'static,
    {
        let decoder: Decoder<E> = Box::new(move |raw: &RawResponse| raw.decode::<T>().map(&wrap));
        self.entries.push((key, Entry::Error(decoder)));
        self
    }

    /// Declares the `default` error response.
    #[must_use]
    pub fn default_error(self) -> Self
    where
        E: DeserializeOwned,
    {
        self.error(StatusKey::Default)
    }

    /// Maps a raw response to the typed envelope.
    ///
    /// Lookup order: exact code, then class, then `default` (non-2xx only).
    /// Without matching entry the payload is returned as
    /// [`TypedResponse::Unknown`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::JsonError`] when a declared payload fails
    /// strict decoding.
    pub fn resolve(&self, raw: RawResponse) -> Result<TypedResponse<S, E>, ApiClientError> {
        let status = raw.status();
        let entry = self
            .entries
            .iter()
            .filter(|(key, _)| key.matches(status))
            .min_by_key(|(key, _)| key.rank());

        let Some((key, entry)) = entry else {
            debug!(%status, "undeclared status, keeping raw payload");
            return Ok(TypedResponse::Unknown {
                status,
                value: raw.to_value(),
            });
        };

        debug!(%status, %key, ?entry, "response entry matched");
        let response = match entry {
            Entry::Success(decode) => TypedResponse::Success {
                status,
                value: decode(&raw)?,
            },
            Entry::NoContent => TypedResponse::NoContent { status },
            Entry::Error(decode) => TypedResponse::Error {
                status,
                value: decode(&raw)?,
            },
        };
        Ok(response)
    }
}
