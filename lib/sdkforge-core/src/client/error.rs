use super::auth::AuthenticationError;

/// Errors that can occur when assembling, sending or decoding an API call.
///
/// Declared error statuses are not errors: they come back as
/// [`TypedResponse::Error`](super::response::TypedResponse::Error).
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum ApiClientError {
    /// The transport failed: connection, timeout or TLS.
    ReqwestError(reqwest::Error),

    /// The base path and the operation path do not form a valid URL.
    UrlError(url::ParseError),

    /// A header name is not a valid token.
    InvalidHeaderName(http::header::InvalidHeaderName),

    /// A header value holds forbidden bytes.
    InvalidHeaderValue(http::header::InvalidHeaderValue),

    /// A body or a parameter argument could not be turned into JSON.
    JsonValueError(serde_json::Error),

    /// Form fields could not be URL-encoded.
    FormSerializationError(serde_urlencoded::ser::Error),

    /// A credential could not be turned into a request header.
    Authentication(AuthenticationError),

    /// The configured server URL cannot be a base.
    #[display("Invalid base path: {error}")]
    #[from(skip)]
    InvalidBasePath {
        /// Reason reported by the URL parser.
        error: String,
    },

    /// Strict decoding of a response payload failed.
    ///
    /// Covers both a missing required property and an unknown property.
    #[display("Failed to decode response at '{path}': {error}\n{body}")]
    #[from(skip)]
    JsonError {
        /// Location of the failure in the payload.
        path: String,
        /// Decoder error.
        error: serde_json::Error,
        /// Raw payload.
        body: String,
    },

    /// Some `{name}` segments of the path template got no argument.
    #[display("Path '{path}' is missing required arguments: {missings:?}")]
    #[from(skip)]
    PathUnresolved {
        /// The path template.
        path: String,
        /// Names left without argument.
        missings: Vec<String>,
    },

    /// A required parameter was not provided.
    #[display("Missing required parameter '{name}'")]
    #[from(skip)]
    MissingParameter {
        /// Wire name of the parameter.
        name: String,
    },

    /// A required, non-nullable parameter was given an explicit null.
    #[display("Parameter '{name}' is not nullable")]
    #[from(skip)]
    NullParameter {
        /// Wire name of the parameter.
        name: String,
    },

    /// The argument has no wire form for its parameter.
    #[display("Unsupported parameter value: {message}. Got: {value}")]
    #[from(skip)]
    UnsupportedParameterValue {
        /// What went wrong.
        message: String,
        /// The rejected argument.
        value: serde_json::Value,
    },

    /// A request body was combined with form parameters.
    #[display("Operation cannot carry both a body and form parameters")]
    #[from(skip)]
    ConflictingBody,

    /// The multipart body could not be assembled.
    #[display("Invalid multipart body: {message}")]
    #[from(skip)]
    MultipartError {
        /// Reason of the failure.
        message: String,
    },

    /// The response status is not a declared success.
    #[display("Unexpected status code {status_code}: {body}")]
    #[from(skip)]
    UnexpectedStatusCode {
        /// HTTP status code.
        status_code: u16,
        /// Payload, serialized back to text.
        body: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_be_thread_safe() {
        fn assert_thread_safe<T: Send + Sync + 'static>() {}

        assert_thread_safe::<ApiClientError>();
    }

    #[test]
    fn should_display_parameter_errors() {
        let missing = ApiClientError::MissingParameter {
            name: "tag".to_string(),
        };
        let null = ApiClientError::NullParameter {
            name: "limit".to_string(),
        };

        assert_eq!(missing.to_string(), "Missing required parameter 'tag'");
        assert_eq!(null.to_string(), "Parameter 'limit' is not nullable");
    }

    #[test]
    fn should_display_path_unresolved() {
        let error = ApiClientError::PathUnresolved {
            path: "/app/{app_id}/msg/{msg_id}".to_string(),
            missings: vec!["msg_id".to_string()],
        };

        insta::assert_snapshot!(error, @r#"Path '/app/{app_id}/msg/{msg_id}' is missing required arguments: ["msg_id"]"#);
    }

    #[test]
    fn should_convert_authentication_errors() {
        let error = ApiClientError::from(AuthenticationError::InvalidUsername {
            message: "contains ':'".to_string(),
        });

        assert!(matches!(error, ApiClientError::Authentication(_)));
    }
}
