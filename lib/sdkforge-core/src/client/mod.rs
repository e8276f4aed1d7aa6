use std::sync::Arc;

use http::Method;
use tracing::debug;

mod builder;
pub use self::builder::ApiClientBuilder;

mod call;
pub use self::call::ApiCall;

mod config;
pub use self::config::{Configuration, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};

mod executor;
pub use self::executor::{HttpExecutor, ReqwestExecutor};

mod parameters;
pub use self::parameters::{
    CallBody, CallForm, CallHeaders, CallPath, CallQuery, Carrier, FilePart, ParamArg, ParamSpec,
    ResolvedArg,
};

mod response;
pub use self::response::{RawResponse, ResponseTable, StatusKey, TypedResponse};

mod auth;
pub use self::auth::{
    ApiKey, ApiKeyLocation, AppliedAuth, AuthScheme, AuthenticationError, BasicAuth, Credentials,
    SecureString,
};

mod error;
pub use self::error::ApiClientError;

/// Shared entry point of generated operations.
///
/// Holds the client [`Configuration`] and the [`HttpExecutor`] performing the
/// network round trip. Cloning is cheap; the configuration is shared.
///
/// # Example
///
/// ```rust,no_run
/// use http::Method;
/// use sdkforge_core::{ApiClient, AuthScheme, ParamArg, ParamSpec, ResponseTable, StatusKey};
///
/// # async fn example() -> Result<(), sdkforge_core::ApiClientError> {
/// let client = ApiClient::builder()
///     .with_server_url("https://api.example.com")?
///     .with_bearer_token("testsk_xxx")
///     .build()?;
///
/// let call = client
///     .get("/api/v1/app/{app_id}")
///     .param(ParamSpec::path("app_id"), ParamArg::value("app_1")?)?
///     .with_auth(AuthScheme::Bearer);
/// let responses = ResponseTable::<serde_json::Value, serde_json::Value>::new()
///     .success(StatusKey::Code(200))
///     .default_error();
///
/// let app = client.execute(call, &responses).await?.into_result()?;
/// # let _ = app;
/// # Ok(())
/// # }
/// ```
///
/// # Thread Safety
///
/// `ApiClient` is `Send + Sync` as soon as its executor is; there is no shared mutable state.
#[derive(Debug, Clone)]
pub struct ApiClient<E = ReqwestExecutor> {
    executor: E,
    config: Arc<Configuration>,
}

// Create
impl ApiClient {
    /// Starts a builder with the default configuration.
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }
}

impl<E> ApiClient<E>
where
    E: HttpExecutor,
{
    /// Creates a client from any executor.
    pub fn new(executor: E, config: Configuration) -> Self {
        Self {
            executor,
            config: Arc::new(config),
        }
    }

    /// The client configuration.
    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    /// The executor.
    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Clones the client with another bearer token.
    ///
    /// The executor, and so the underlying HTTP client, is reused.
    #[must_use]
    pub fn with_bearer_token(&self, token: impl Into<SecureString>) -> Self
    where
        E: Clone,
    {
        let mut config = Configuration::clone(&self.config);
        config.credentials.bearer_access_token = Some(token.into());
        Self {
            executor: self.executor.clone(),
            config: Arc::new(config),
        }
    }

    /// Sends the call and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns assembly errors and transport failures.
    pub async fn send(&self, call: ApiCall) -> Result<RawResponse, ApiClientError> {
        let request = call.into_request(&self.config)?;
        self.executor.execute(request).await
    }

    /// Sends the call and maps the response through the operation table.
    ///
    /// Declared error statuses come back as [`TypedResponse::Error`], other
    /// undeclared statuses as [`TypedResponse::Unknown`].
    ///
    /// # Errors
    ///
    /// Returns assembly errors, transport failures and strict decoding failures.
    pub async fn execute<S, R>(
        &self,
        call: ApiCall,
        responses: &ResponseTable<S, R>,
    ) -> Result<TypedResponse<S, R>, ApiClientError>
    where
        S: 'static,
        R: 'static,
    {
        let raw = self.send(call).await?;
        let status = raw.status();
        let response = responses.resolve(raw)?;
        debug!(%status, success = response.is_success(), "response resolved");
        Ok(response)
    }
}

impl<E> ApiClient<E> {
    /// Starts a request descriptor.
    pub fn call(&self, method: Method, path: impl Into<CallPath>) -> ApiCall {
        ApiCall::new(method, path)
    }

    /// Starts a `GET` request descriptor.
    pub fn get(&self, path: impl Into<CallPath>) -> ApiCall {
        self.call(Method::GET, path)
    }

    /// Starts a `POST` request descriptor.
    pub fn post(&self, path: impl Into<CallPath>) -> ApiCall {
        self.call(Method::POST, path)
    }

    /// Starts a `PUT` request descriptor.
    pub fn put(&self, path: impl Into<CallPath>) -> ApiCall {
        self.call(Method::PUT, path)
    }

    /// Starts a `DELETE` request descriptor.
    pub fn delete(&self, path: impl Into<CallPath>) -> ApiCall {
        self.call(Method::DELETE, path)
    }

    /// Starts a `PATCH` request descriptor.
    pub fn patch(&self, path: impl Into<CallPath>) -> ApiCall {
        self.call(Method::PATCH, path)
    }
}
