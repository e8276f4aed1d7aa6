use std::future::Future;

use reqwest::Request;
use tracing::debug;

use super::error::ApiClientError;
use super::response::RawResponse;

/// Performs the single network round trip of an operation.
///
/// Retries, connection pooling and TLS belong to the implementation.
pub trait HttpExecutor: Send + Sync {
    /// Sends the request and reads the whole response.
    fn execute(
        &self,
        request: Request,
    ) -> impl Future<Output = Result<RawResponse, ApiClientError>> + Send;
}

/// Default executor backed by a `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestExecutor {
    client: reqwest::Client,
}

impl ReqwestExecutor {
    /// Wraps an HTTP client.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// The underlying HTTP client.
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

impl HttpExecutor for ReqwestExecutor {
    async fn execute(&self, request: Request) -> Result<RawResponse, ApiClientError> {
        debug!(?request, "sending...");
        let response = self.client.execute(request).await?;
        debug!(?response, "...receiving");
        RawResponse::from_reqwest(response).await
    }
}
