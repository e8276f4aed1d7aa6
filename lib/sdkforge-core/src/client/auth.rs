use std::fmt;

use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use http::HeaderValue;
use reqwest::header::{AUTHORIZATION, HeaderName};
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A credential that cannot be written into a request.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Error, derive_more::Display)]
pub enum AuthenticationError {
    /// The bearer token is not a valid header value.
    #[display("Bearer token contains invalid characters: {message}")]
    InvalidBearerToken {
        /// Reason reported by `http`.
        message: String,
    },

    /// The Basic username contains a `:`.
    #[display("Basic auth username contains invalid characters: {message}")]
    InvalidUsername {
        /// What is wrong with the username.
        message: String,
    },

    /// The encoded Basic credential is not a valid header value.
    #[display("Basic auth password contains invalid characters: {message}")]
    InvalidPassword {
        /// Reason reported by `http`.
        message: String,
    },

    /// The API key scheme names an invalid header.
    #[display("Invalid API key header name '{header_name}': {message}")]
    InvalidHeaderName {
        /// The header name declared by the operation.
        header_name: String,
        /// Reason reported by `http`.
        message: String,
    },

    /// The API key is not a valid header value.
    #[display("API key contains invalid characters: {message}")]
    InvalidApiKey {
        /// Reason reported by `http`.
        message: String,
    },
}

/// A secret string, zeroed on drop and masked when printed.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecureString(String);

impl SecureString {
    /// Wraps a secret.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// The secret in clear.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwraps the secret; the wrapper is zeroed.
    pub fn into_string(mut self) -> String {
        std::mem::take(&mut self.0)
    }

    fn masked(&self) -> String {
        let count = self.0.chars().count();
        if count <= 8 {
            return "***".to_string();
        }
        let head = self.0.chars().take(4).collect::<String>();
        let tail = self.0.chars().skip(count - 4).collect::<String>();
        format!("{head}...{tail}")
    }
}

impl fmt::Debug for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecureString")
            .field("value", &"[REDACTED]")
            .finish()
    }
}

impl fmt::Display for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}

impl From<String> for SecureString {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SecureString {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Where an API key travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiKeyLocation {
    /// In a request header.
    Header,
    /// In a query parameter.
    Query,
}

/// Authentication method declared by an operation.
///
/// The scheme names *how* a credential is sent; the credential itself comes
/// from the client [`Credentials`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthScheme {
    /// API key sent under `name`.
    ApiKey {
        /// Header or query parameter name.
        name: String,
        /// Where the key is sent.
        location: ApiKeyLocation,
    },
    /// `Authorization: Basic`, from the username and password.
    Basic,
    /// `Authorization: Bearer`, from the bearer token.
    Bearer,
    /// OAuth2 access token, sent as a bearer token.
    OAuth2,
}

impl AuthScheme {
    /// Creates an API key scheme sent in a header.
    pub fn api_key_header(name: impl Into<String>) -> Self {
        Self::ApiKey {
            name: name.into(),
            location: ApiKeyLocation::Header,
        }
    }

    /// Creates an API key scheme sent as query parameter.
    pub fn api_key_query(name: impl Into<String>) -> Self {
        Self::ApiKey {
            name: name.into(),
            location: ApiKeyLocation::Query,
        }
    }

    /// Resolves the scheme against the configured credentials.
    ///
    /// Returns `Ok(None)` when no matching credential is configured; the
    /// request is then sent without authentication.
    ///
    /// # Errors
    ///
    /// Returns `AuthenticationError` if the credential cannot be encoded in an HTTP header.
    pub fn apply(
        &self,
        credentials: &Credentials,
    ) -> Result<Option<AppliedAuth>, AuthenticationError> {
        let applied = match self {
            Self::ApiKey { name, location } => {
                let Some(api_key) = &credentials.api_key else {
                    debug!(%name, "no API key configured, skipping authentication");
                    return Ok(None);
                };
                let value = api_key.value();
                match location {
                    ApiKeyLocation::Header => {
                        let header = HeaderName::from_bytes(name.as_bytes()).map_err(|err| {
                            AuthenticationError::InvalidHeaderName {
                                header_name: name.clone(),
                                message: err.to_string(),
                            }
                        })?;
                        let value = HeaderValue::from_str(&value).map_err(|err| {
                            AuthenticationError::InvalidApiKey {
                                message: err.to_string(),
                            }
                        })?;
                        AppliedAuth::Header(header, value)
                    }
                    ApiKeyLocation::Query => AppliedAuth::Query {
                        name: name.clone(),
                        value,
                    },
                }
            }
            Self::Basic => {
                let Some(basic) = &credentials.basic_auth else {
                    debug!("no basic credentials configured, skipping authentication");
                    return Ok(None);
                };
                AppliedAuth::Header(AUTHORIZATION, basic.to_header_value()?)
            }
            Self::Bearer => {
                let Some(token) = &credentials.bearer_access_token else {
                    debug!("no bearer token configured, skipping authentication");
                    return Ok(None);
                };
                AppliedAuth::Header(AUTHORIZATION, bearer_header(token)?)
            }
            Self::OAuth2 => {
                let Some(token) = &credentials.oauth_access_token else {
                    debug!("no OAuth2 access token configured, skipping authentication");
                    return Ok(None);
                };
                AppliedAuth::Header(AUTHORIZATION, bearer_header(token)?)
            }
        };
        Ok(Some(applied))
    }
}

impl fmt::Display for AuthScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ApiKey { name, location } => write!(f, "ApiKey ({name} in {location:?})"),
            Self::Basic => write!(f, "Basic"),
            Self::Bearer => write!(f, "Bearer"),
            Self::OAuth2 => write!(f, "OAuth2"),
        }
    }
}

/// Credential ready to be attached to a request.
#[derive(Clone)]
pub enum AppliedAuth {
    /// A header to insert.
    Header(HeaderName, HeaderValue),
    /// A query pair to append.
    Query {
        /// Query parameter name.
        name: String,
        /// Query parameter value.
        value: String,
    },
}

impl fmt::Debug for AppliedAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Header(name, _) => f
                .debug_tuple("Header")
                .field(name)
                .field(&"[REDACTED]")
                .finish(),
            Self::Query { name, .. } => f
                .debug_struct("Query")
                .field("name", name)
                .field("value", &"[REDACTED]")
                .finish(),
        }
    }
}

fn bearer_header(token: &SecureString) -> Result<HeaderValue, AuthenticationError> {
    let mut value = HeaderValue::from_str(&format!("Bearer {}", token.as_str())).map_err(|err| {
        AuthenticationError::InvalidBearerToken {
            message: err.to_string(),
        }
    })?;
    value.set_sensitive(true);
    Ok(value)
}

/// API key credential with an optional prefix.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey {
    /// Prefix written before the key, separated by a space.
    pub prefix: Option<String>,
    /// The secret.
    pub key: SecureString,
}

impl ApiKey {
    /// Creates an API key without prefix.
    pub fn new(key: impl Into<SecureString>) -> Self {
        Self {
            prefix: None,
            key: key.into(),
        }
    }

    /// Sets the prefix, e.g. `Token`.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    fn value(&self) -> String {
        match &self.prefix {
            Some(prefix) => format!("{prefix} {}", self.key.as_str()),
            None => self.key.as_str().to_string(),
        }
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKey")
            .field("prefix", &self.prefix)
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// HTTP Basic credential.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicAuth {
    /// The username.
    pub username: String,
    /// The password, if any.
    pub password: Option<SecureString>,
}

impl BasicAuth {
    /// Creates a Basic credential.
    pub fn new(username: impl Into<String>, password: Option<SecureString>) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }

    fn to_header_value(&self) -> Result<HeaderValue, AuthenticationError> {
        if self.username.contains(':') {
            return Err(AuthenticationError::InvalidUsername {
                message: "a username cannot contain ':'".to_string(),
            });
        }

        let password = self.password.as_ref().map_or("", SecureString::as_str);
        let encoded = BASE64_STANDARD.encode(format!("{}:{password}", self.username));

        let mut value = HeaderValue::from_str(&format!("Basic {encoded}")).map_err(|err| {
            AuthenticationError::InvalidPassword {
                message: err.to_string(),
            }
        })?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Credentials held by the client configuration.
///
/// Each slot backs one [`AuthScheme`] kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// Used by [`AuthScheme::ApiKey`].
    pub api_key: Option<ApiKey>,
    /// Used by [`AuthScheme::Basic`].
    pub basic_auth: Option<BasicAuth>,
    /// Used by [`AuthScheme::Bearer`].
    pub bearer_access_token: Option<SecureString>,
    /// Used by [`AuthScheme::OAuth2`].
    pub oauth_access_token: Option<SecureString>,
}
