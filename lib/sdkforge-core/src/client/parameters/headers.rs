use http::{HeaderMap, HeaderName, HeaderValue};
use indexmap::IndexMap;

use crate::client::error::ApiClientError;

/// Header parameters of an API call.
///
/// Names are kept as declared; they are validated when the request is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallHeaders {
    headers: IndexMap<String, String>,
}

impl CallHeaders {
    /// No header.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a header, replacing a previous value with the same name.
    pub fn add_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.insert(name.into(), value.into());
    }

    /// Whether no header was added.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Number of distinct header names.
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    /// Validates names and values into a `HeaderMap`.
    pub(in crate::client) fn to_http_headers(&self) -> Result<HeaderMap, ApiClientError> {
        let mut map = HeaderMap::with_capacity(self.headers.len());
        for (name, value) in &self.headers {
            let name = HeaderName::from_bytes(name.as_bytes())?;
            let value = HeaderValue::from_str(value)?;
            map.insert(name, value);
        }
        Ok(map)
    }
}
