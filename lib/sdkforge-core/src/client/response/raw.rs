use std::fmt;

use bytes::Bytes;
use headers::{ContentType, HeaderMapExt};
use http::StatusCode;
use serde::de::DeserializeOwned;

use crate::client::error::ApiClientError;

const BODY_MAX_LENGTH: usize = 1024;

/// A response as returned by the network, before any typing.
#[derive(Clone, PartialEq)]
pub struct RawResponse {
    status: StatusCode,
    content_type: Option<ContentType>,
    body: Bytes,
}

impl fmt::Debug for RawResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = preview(&self.body);
        f.debug_struct("RawResponse")
            .field("status", &self.status)
            .field("content_type", &self.content_type)
            .field("body", &format_args!("{body}"))
            .finish()
    }
}

fn preview(body: &Bytes) -> String {
    let text = String::from_utf8_lossy(body);
    if text.chars().count() > BODY_MAX_LENGTH {
        let truncated = text.chars().take(BODY_MAX_LENGTH).collect::<String>();
        format!("{truncated}... (truncated)")
    } else {
        text.into_owned()
    }
}

impl RawResponse {
    /// Creates a raw response.
    pub fn new(status: StatusCode, content_type: Option<ContentType>, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            content_type,
            body: body.into(),
        }
    }

    /// Creates a raw response with a JSON payload.
    pub fn json(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self::new(status, Some(ContentType::json()), body)
    }

    /// Reads the whole body of a reqwest response.
    ///
    /// # Errors
    ///
    /// Fails if the body cannot be read.
    pub async fn from_reqwest(response: reqwest::Response) -> Result<Self, ApiClientError> {
        let status = response.status();
        let content_type = response.headers().typed_get::<ContentType>();
        let body = response.bytes().await?;
        Ok(Self {
            status,
            content_type,
            body,
        })
    }

    /// The HTTP status.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The announced content type, if any.
    pub fn content_type(&self) -> Option<&ContentType> {
        self.content_type.as_ref()
    }

    /// The payload.
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// The payload as text, replacing invalid UTF-8 sequences.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Strictly decodes the JSON payload.
    ///
    /// Missing required keys, unknown keys and trailing characters are errors.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::JsonError`] with the path of the failing value.
    pub fn decode<T>(&self) -> Result<T, ApiClientError>
    where
        T: DeserializeOwned,
    {
        let deserializer = &mut serde_json::Deserializer::from_slice(&self.body);
        let value: T = serde_path_to_error::deserialize(&mut *deserializer).map_err(|err| {
            ApiClientError::JsonError {
                path: err.path().to_string(),
                error: err.into_inner(),
                body: self.text(),
            }
        })?;
        deserializer.end().map_err(|error| ApiClientError::JsonError {
            path: String::new(),
            error,
            body: self.text(),
        })?;
        Ok(value)
    }

    /// Decodes the payload as a generic JSON value, never failing.
    ///
    /// Empty payloads are `null`, non-JSON payloads a JSON string.
    pub fn to_value(&self) -> serde_json::Value {
        if self.body.iter().all(u8::is_ascii_whitespace) {
            return serde_json::Value::Null;
        }
        serde_json::from_slice(&self.body)
            .unwrap_or_else(|_| serde_json::Value::String(self.text()))
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, PartialEq, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct Item {
        id: String,
    }

    #[derive(Debug, PartialEq, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct Page {
        data: Vec<Item>,
    }

    #[test]
    fn should_decode_json() {
        let raw = RawResponse::json(StatusCode::OK, r#"{"data": [{"id": "a"}]}"#);

        let page = raw.decode::<Page>().unwrap();

        assert_eq!(page.data, vec![Item { id: "a".to_string() }]);
    }

    #[test]
    fn should_report_path_of_unknown_field() {
        let raw = RawResponse::json(StatusCode::OK, r#"{"data": [{"id": "a", "extra": 1}]}"#);

        let err = raw.decode::<Page>().unwrap_err();

        let ApiClientError::JsonError { path, error, .. } = err else {
            panic!("expected a JSON error");
        };
        assert_eq!(path, "data[0].extra");
        assert!(error.to_string().contains("unknown field `extra`"));
    }

    #[test]
    fn should_report_missing_field() {
        let raw = RawResponse::json(StatusCode::OK, r#"{"data": [{}]}"#);

        let err = raw.decode::<Page>().unwrap_err();

        assert!(err.to_string().contains("missing field `id`"));
    }

    #[test]
    fn should_reject_trailing_characters() {
        let raw = RawResponse::json(StatusCode::OK, r#"{"data": []} x"#);

        assert!(raw.decode::<Page>().is_err());
    }

    #[test]
    fn should_convert_any_payload_to_value() {
        let json_raw = RawResponse::json(StatusCode::IM_A_TEAPOT, r#"{"code": "teapot"}"#);
        let text_raw = RawResponse::new(StatusCode::BAD_GATEWAY, None, "upstream down");
        let empty_raw = RawResponse::new(StatusCode::BAD_GATEWAY, None, "");

        assert_eq!(json_raw.to_value(), json!({"code": "teapot"}));
        assert_eq!(text_raw.to_value(), json!("upstream down"));
        assert_eq!(empty_raw.to_value(), serde_json::Value::Null);
    }

    #[test]
    fn should_debug_body_as_text() {
        let raw = RawResponse::json(StatusCode::OK, r#"{"done":true}"#);

        insta::assert_debug_snapshot!(raw, @r#"
        RawResponse {
            status: 200,
            content_type: Some(
                ContentType(
                    "application/json",
                ),
            ),
            body: {"done":true},
        }
        "#);
    }

    #[test]
    fn should_truncate_long_body_in_debug() {
        let raw = RawResponse::new(StatusCode::OK, None, "x".repeat(BODY_MAX_LENGTH + 10));

        let debug = format!("{raw:?}");

        let expected = format!("body: {}... (truncated) }}", "x".repeat(BODY_MAX_LENGTH));
        assert!(debug.ends_with(&expected), "{debug}");
    }
}
