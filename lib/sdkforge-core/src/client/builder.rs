use std::fmt::Debug;
use std::sync::Arc;
use std::time::Duration;

use http::{HeaderMap, HeaderName, HeaderValue};
use url::Url;

use super::auth::{ApiKey, BasicAuth, Credentials, SecureString};
use super::config::{Configuration, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
use super::executor::ReqwestExecutor;
use super::{ApiClient, ApiClientError};

const DEFAULT_BASE_PATH: &str = "http://127.0.0.1/";

/// Builder for creating `ApiClient` instances.
///
/// # Default Configuration
///
/// - **Server URL**: `http://127.0.0.1/`
/// - **User agent**: `sdkforge/<version>/rust`
/// - **Timeout**: 15 seconds
/// - **Credentials**: none
/// - **HTTP client**: a fresh `reqwest::Client`
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use sdkforge_core::ApiClient;
///
/// # fn example() -> Result<(), sdkforge_core::ApiClientError> {
/// let client = ApiClient::builder()
///     .with_server_url("https://api.example.com")?
///     .with_timeout(Duration::from_secs(30))
///     .with_bearer_token("testsk_xxx")
///     .build()?;
///
/// assert_eq!(client.configuration().base_path.as_str(), "https://api.example.com/");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClientBuilder {
    client: Option<reqwest::Client>,
    base_path: Result<Url, String>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    default_headers: HeaderMap,
    credentials: Credentials,
}

impl Default for ApiClientBuilder {
    fn default() -> Self {
        Self {
            client: None,
            base_path: Url::parse(DEFAULT_BASE_PATH).map_err(|err| err.to_string()),
            user_agent: Some(DEFAULT_USER_AGENT.to_string()),
            timeout: Some(DEFAULT_TIMEOUT),
            default_headers: HeaderMap::new(),
            credentials: Credentials::default(),
        }
    }
}

impl ApiClientBuilder {
    /// Builds the final `ApiClient` instance.
    ///
    /// # Errors
    ///
    /// This method can fail if:
    /// - the server URL cannot be used as base for operation paths,
    /// - the HTTP client cannot be created.
    pub fn build(self) -> Result<ApiClient, ApiClientError> {
        let Self {
            client,
            base_path,
            user_agent,
            timeout,
            default_headers,
            credentials,
        } = self;

        let base_path = base_path.map_err(|error| ApiClientError::InvalidBasePath { error })?;
        let client = match client {
            Some(client) => client,
            None => reqwest::Client::builder().build()?,
        };

        let config = Configuration {
            base_path,
            user_agent,
            default_headers,
            credentials,
            timeout,
        };

        Ok(ApiClient {
            executor: ReqwestExecutor::new(client),
            config: Arc::new(config),
        })
    }

    /// Sets the server URL.
    ///
    /// # Errors
    ///
    /// Fails if the URL does not parse, or is not an `http` / `https` URL.
    pub fn with_server_url(mut self, url: &str) -> Result<Self, ApiClientError> {
        let parsed = Url::parse(url)?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.cannot_be_a_base() {
            return Err(ApiClientError::InvalidBasePath {
                error: format!("'{url}' is not an HTTP base URL"),
            });
        }
        self.base_path = Ok(parsed);
        Ok(self)
    }

    /// Sets the `User-Agent` header value.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sends requests without `User-Agent` header.
    pub fn without_user_agent(mut self) -> Self {
        self.user_agent = None;
        self
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Leaves timeouts to the HTTP client.
    pub fn without_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }

    /// Adds a header sent with every request.
    ///
    /// # Errors
    ///
    /// Fails if the name or the value is not a valid header.
    pub fn with_default_header(mut self, name: &str, value: &str) -> Result<Self, ApiClientError> {
        let name = HeaderName::from_bytes(name.as_bytes())?;
        let value = HeaderValue::from_str(value)?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    /// Sets the bearer token used by `Bearer` operations.
    pub fn with_bearer_token(mut self, token: impl Into<SecureString>) -> Self {
        self.credentials.bearer_access_token = Some(token.into());
        self
    }

    /// Sets the access token used by `OAuth2` operations.
    pub fn with_oauth_access_token(mut self, token: impl Into<SecureString>) -> Self {
        self.credentials.oauth_access_token = Some(token.into());
        self
    }

    /// Sets the API key used by `ApiKey` operations.
    pub fn with_api_key(mut self, api_key: ApiKey) -> Self {
        self.credentials.api_key = Some(api_key);
        self
    }

    /// Sets the Basic credential used by `Basic` operations.
    pub fn with_basic_auth(mut self, basic_auth: BasicAuth) -> Self {
        self.credentials.basic_auth = Some(basic_auth);
        self
    }

    /// Uses a preconfigured HTTP client, e.g. one with TLS or a proxy.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }
}
