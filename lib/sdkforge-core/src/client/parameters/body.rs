use headers::ContentType;
use serde::Serialize;

use crate::client::error::ApiClientError;

/// Encoded request payload and its content type.
///
/// An operation has at most one body. It is attached as-is: no wire name.
#[derive(Clone, PartialEq, derive_more::Debug)]
pub struct CallBody {
    pub(in crate::client) content_type: ContentType,
    #[debug(ignore)]
    pub(in crate::client) data: Vec<u8>,
}

impl CallBody {
    /// Creates an `application/json` body.
    ///
    /// ```rust
    /// # use sdkforge_core::CallBody;
    /// # use serde::Serialize;
    /// #[derive(Serialize)]
    /// struct EndpointIn {
    ///     url: String,
    /// }
    ///
    /// let body = CallBody::json(&EndpointIn {
    ///     url: "https://example.com/hook".to_string(),
    /// })?;
    /// # Ok::<(), sdkforge_core::ApiClientError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Fails if the value cannot be serialized.
    pub fn json<T>(value: &T) -> Result<Self, ApiClientError>
    where
        T: Serialize + ?Sized,
    {
        let data = serde_json::to_vec(value)?;
        Ok(Self {
            content_type: ContentType::json(),
            data,
        })
    }

    /// Bytes sent as is under `content_type`.
    pub fn raw(data: Vec<u8>, content_type: ContentType) -> Self {
        Self { content_type, data }
    }

    /// A `text/plain` body.
    pub fn text(text: &str) -> Self {
        Self::raw(text.as_bytes().to_vec(), ContentType::text())
    }

    /// The content type.
    pub fn content_type(&self) -> &ContentType {
        &self.content_type
    }

    /// The encoded payload.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}
