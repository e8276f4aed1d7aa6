use headers::ContentType;
use http::Method;
use serde::Serialize;
use tracing::debug;

use super::ApiCall;
use crate::client::auth::AuthScheme;
use crate::client::error::ApiClientError;
use crate::client::parameters::{
    CallBody, CallForm, CallHeaders, CallPath, CallQuery, Carrier, ParamArg, ParamSpec,
    ResolvedArg,
};

impl ApiCall {
    /// Starts a request descriptor for a method and path template.
    pub fn new(method: Method, path: impl Into<CallPath>) -> Self {
        Self {
            method,
            path: path.into(),
            query: CallQuery::default(),
            headers: CallHeaders::default(),
            form: CallForm::default(),
            body: None,
            auth: None,
        }
    }

    /// Resolves a parameter argument and records it under its wire name.
    ///
    /// See [`ParamSpec::resolve`] for the assembly policy.
    ///
    /// # Errors
    ///
    /// Returns the error reported by the assembly policy.
    pub fn param(mut self, spec: ParamSpec, arg: ParamArg) -> Result<Self, ApiClientError> {
        let Some(resolved) = spec.resolve(arg)? else {
            return Ok(self);
        };
        let name = spec.name().to_string();

        match (spec.carrier(), resolved) {
            (Carrier::Path, ResolvedArg::Text(value)) => self.path.add_arg(name, value),
            (Carrier::Query, ResolvedArg::Text(value)) => self.query.add_pair(name, value),
            (Carrier::Header, ResolvedArg::Text(value)) => self.headers.add_header(name, value),
            (Carrier::Form | Carrier::FormFile, ResolvedArg::Text(value)) => {
                self.form.add_field(name, value);
            }
            (_, ResolvedArg::File(file)) => self.form.add_file(name, file),
        }
        Ok(self)
    }

    /// Sets a JSON request body.
    ///
    /// # Errors
    ///
    /// Fails if the value cannot be serialized.
    pub fn json<T>(self, data: &T) -> Result<Self, ApiClientError>
    where
        T: Serialize + ?Sized,
    {
        let body = CallBody::json(data)?;
        Ok(self.with_body(body))
    }

    /// Sets a `text/plain` request body.
    #[must_use]
    pub fn text(self, content: &str) -> Self {
        self.with_body(CallBody::text(content))
    }

    /// Sets a raw request body.
    #[must_use]
    pub fn raw(self, data: Vec<u8>, content_type: ContentType) -> Self {
        self.with_body(CallBody::raw(data, content_type))
    }

    /// Sets the request body, replacing any previous one.
    #[must_use]
    pub fn with_body(mut self, body: CallBody) -> Self {
        self.body = Some(body);
        self
    }

    /// Declares the authentication scheme.
    ///
    /// Only one scheme is effective: a later call replaces the previous one.
    #[must_use]
    pub fn with_auth(mut self, scheme: AuthScheme) -> Self {
        if let Some(previous) = self.auth.replace(scheme) {
            debug!(%previous, "authentication scheme replaced");
        }
        self
    }

    /// The HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The effective authentication scheme.
    pub fn auth(&self) -> Option<&AuthScheme> {
        self.auth.as_ref()
    }
}
