//! # SDKForge Core
//!
//! Runtime for OpenAPI-generated HTTP client SDKs.
//!
//! Generated code (see the `sdkforge-gen` crate) is made of two layers that
//! both lean on this crate:
//!
//! - **Models**: plain structs with serde attributes. Optional nullable
//!   fields are [`Nullable<T>`], which keeps *unset*, *explicit null* and
//!   *value* apart.
//! - **Operations**: one function per API operation. It assembles an
//!   [`ApiCall`] from typed parameters, declares its authentication scheme,
//!   and resolves the response through a [`ResponseTable`] into a
//!   [`TypedResponse`].
//!
//! ## Models
//!
//! ```rust
//! use sdkforge_core::Nullable;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
//! #[serde(deny_unknown_fields)]
//! pub struct ListResponseAppOut {
//!     pub data: Vec<String>,
//!     pub done: bool,
//!     #[serde(with = "sdkforge_core::nullable::required")]
//!     pub iterator: Option<String>,
//!     #[serde(
//!         rename = "prevIterator",
//!         default,
//!         skip_serializing_if = "Nullable::is_unset"
//!     )]
//!     pub prev_iterator: Nullable<String>,
//! }
//!
//! # fn main() -> Result<(), serde_json::Error> {
//! let page: ListResponseAppOut =
//!     serde_json::from_str(r#"{"data": [], "done": true, "iterator": "abc"}"#)?;
//! assert!(!page.prev_iterator.is_set());
//!
//! // unknown keys are rejected
//! let err = serde_json::from_str::<ListResponseAppOut>(
//!     r#"{"data": [], "done": true, "iterator": null, "extra": 1}"#,
//! );
//! assert!(err.is_err());
//! # Ok(())
//! # }
//! ```
//!
//! ## Operations
//!
//! ```rust,no_run
//! use sdkforge_core::{
//!     ApiClient, ApiClientError, AuthScheme, ParamArg, ParamSpec, ResponseTable, StatusKey,
//!     TypedResponse,
//! };
//!
//! pub async fn list_apps(
//!     client: &ApiClient,
//!     limit: Option<i32>,
//!     tag: Option<Vec<String>>,
//! ) -> Result<TypedResponse<serde_json::Value, serde_json::Value>, ApiClientError> {
//!     let call = client
//!         .get("/api/v1/app")
//!         .param(ParamSpec::query("limit"), ParamArg::optional(limit.as_ref())?)?
//!         .param(
//!             ParamSpec::query("tag").required().nullable().array(),
//!             ParamArg::nullable(tag.as_ref())?,
//!         )?
//!         .with_auth(AuthScheme::Bearer);
//!     let responses = ResponseTable::new()
//!         .success(StatusKey::Code(200))
//!         .error(StatusKey::Class(4));
//!     client.execute(call, &responses).await
//! }
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), ApiClientError> {
//! let client = ApiClient::builder()
//!     .with_server_url("https://api.example.com")?
//!     .with_bearer_token("testsk_xxx")
//!     .build()?;
//!
//! // `tag` is required but nullable: `None` is sent as `tag=`
//! match list_apps(&client, Some(10), None).await? {
//!     TypedResponse::Success { value, .. } => println!("{value}"),
//!     TypedResponse::Error { status, value } => eprintln!("{status}: {value}"),
//!     other => eprintln!("unexpected response: {other:?}"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Parameter assembly
//!
//! | argument      | required | required, nullable | optional |
//! |---------------|----------|--------------------|----------|
//! | absent        | error    | error              | omitted  |
//! | explicit null | error    | `""`               | omitted  |
//! | value         | string   | string             | string   |
//!
//! Arrays are joined with `,`. See [`ParamSpec::resolve`].
//!
//! ## Executors
//!
//! [`ApiClient`] sends requests through an [`HttpExecutor`]. The default
//! [`ReqwestExecutor`] wraps a `reqwest::Client`; supply a configured client
//! (TLS, proxy) with [`ApiClientBuilder::with_client`], or implement the trait
//! to plug another transport.

mod client;

pub mod nullable;

pub use self::client::{
    ApiCall, ApiClient, ApiClientBuilder, ApiClientError, ApiKey, ApiKeyLocation, AppliedAuth,
    AuthScheme, AuthenticationError, BasicAuth, CallBody, CallForm, CallHeaders, CallPath,
    CallQuery, Carrier, Configuration, Credentials, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, FilePart,
    HttpExecutor, ParamArg, ParamSpec, RawResponse, ReqwestExecutor, ResolvedArg, ResponseTable,
    SecureString, StatusKey, TypedResponse,
};
pub use self::nullable::Nullable;

pub use http::Method;
