use headers::HeaderMapExt;
use http::HeaderValue;
use http::header::USER_AGENT;
use reqwest::{Body, Request};
use tracing::debug;
use url::Url;

use super::ApiCall;
use crate::client::auth::AppliedAuth;
use crate::client::config::Configuration;
use crate::client::error::ApiClientError;
use crate::client::parameters::{CallBody, CallPath, CallQuery};

impl ApiCall {
    /// Builds the wire request against the client configuration.
    ///
    /// Headers are layered as follows, a later layer overriding an earlier one:
    /// default headers, user agent, authentication, operation headers, body content type.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - a body is combined with form parameters,
    /// - a path placeholder has no argument,
    /// - the URL, a header or the credential is invalid.
    pub fn into_request(self, config: &Configuration) -> Result<Request, ApiClientError> {
        let Self {
            method,
            path,
            query,
            headers,
            form,
            body,
            auth,
        } = self;

        let form_body = form.to_body()?;
        let body = match (body, form_body) {
            (Some(_), Some(_)) => return Err(ApiClientError::ConflictingBody),
            (body, form_body) => body.or(form_body),
        };

        let applied = match &auth {
            Some(scheme) => scheme.apply(&config.credentials)?,
            None => None,
        };

        let mut url = Self::build_url(&config.base_path, &path, &query)?;
        if let Some(AppliedAuth::Query { name, value }) = &applied {
            url.query_pairs_mut().append_pair(name, value);
        }

        let mut request = Request::new(method, url);
        *request.timeout_mut() = config.timeout;

        let req_headers = request.headers_mut();
        req_headers.extend(config.default_headers.clone());
        if let Some(user_agent) = &config.user_agent {
            req_headers.insert(USER_AGENT, HeaderValue::from_str(user_agent)?);
        }
        if let Some(AppliedAuth::Header(name, value)) = applied {
            req_headers.insert(name, value);
        }
        req_headers.extend(headers.to_http_headers()?);

        if let Some(CallBody { content_type, data }) = body {
            req_headers.typed_insert(content_type);
            *request.body_mut() = Some(Body::from(data));
        }

        debug!(method = %request.method(), url = %request.url(), "request assembled");
        Ok(request)
    }

    pub(super) fn build_url(
        base_path: &Url,
        path: &CallPath,
        query: &CallQuery,
    ) -> Result<Url, ApiClientError> {
        let path_resolved = path.resolve()?;
        let url = format!(
            "{}/{}",
            base_path.as_str().trim_end_matches('/'),
            path_resolved.trim_start_matches('/')
        );
        let mut url = url.parse::<Url>()?;
        query.apply_to(&mut url);

        Ok(url)
    }
}
