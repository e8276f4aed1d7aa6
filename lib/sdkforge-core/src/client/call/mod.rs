use http::Method;

use super::auth::AuthScheme;
use super::parameters::{CallBody, CallForm, CallHeaders, CallPath, CallQuery};

mod builder;
mod execution;

/// Request descriptor owned by an operation while it assembles its request.
///
/// Generated operations build one `ApiCall` per invocation:
///
/// ```rust
/// use http::Method;
/// use sdkforge_core::{ApiCall, AuthScheme, ParamArg, ParamSpec};
///
/// # fn main() -> Result<(), sdkforge_core::ApiClientError> {
/// let limit: Option<i32> = Some(20);
/// let call = ApiCall::new(Method::GET, "/api/v1/app/{app_id}/attempt/endpoint/{endpoint_id}")
///     .param(ParamSpec::path("app_id"), ParamArg::value("app_1")?)?
///     .param(ParamSpec::path("endpoint_id"), ParamArg::value("ep_1")?)?
///     .param(ParamSpec::query("limit"), ParamArg::optional(limit.as_ref())?)?
///     .with_auth(AuthScheme::Bearer);
/// # let _ = call;
/// # Ok(())
/// # }
/// ```
///
/// # Method Groups
///
/// ## Parameters
/// - [`param(spec, arg)`](Self::param) - Apply the assembly policy and route to the carrier
///
/// ## Request Body Methods
/// - [`json(data)`](Self::json) - Set JSON request body
/// - [`text(content)`](Self::text) - Set plain text request body
/// - [`raw(bytes, content_type)`](Self::raw) - Set raw binary request body
///
/// ## Authentication
/// - [`with_auth(scheme)`](Self::with_auth) - Declare the authentication scheme, last one wins
///
/// ## Wire request
/// - [`into_request(config)`](Self::into_request) - Build the `reqwest::Request`
#[derive(Clone, derive_more::Debug)]
pub struct ApiCall {
    pub(super) method: Method,
    pub(super) path: CallPath,
    pub(super) query: CallQuery,
    pub(super) headers: CallHeaders,
    pub(super) form: CallForm,

    #[debug(ignore)]
    pub(super) body: Option<CallBody>,

    pub(super) auth: Option<AuthScheme>,
}
