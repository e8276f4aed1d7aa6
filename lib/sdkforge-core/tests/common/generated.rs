// This code was automatically generated by sdkforge-gen from Attempts API 1.4.0. Do not edit manually.

#[allow(unused_imports)]
use sdkforge_core::{
    ApiClient, ApiClientError, AuthScheme, FilePart, HttpExecutor, Method, Nullable, ParamArg,
    ParamSpec, ResponseTable, StatusKey, TypedResponse,
};
#[allow(unused_imports)]
use serde::{Deserialize, Serialize};
/// Version of `Attempts API`.
pub const API_VERSION: &str = "1.4.0";
/// First server declared by the document.
/// Production
pub const DEFAULT_SERVER_URL: &str = "https://api.example.com";
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ordering {
    #[serde(rename = "ascending")]
    Ascending,
    #[serde(rename = "descending")]
    Descending,
}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MessageAttemptEndpointOut {
    pub id: String,
    #[serde(rename = "endpointId")]
    pub endpoint_id: String,
    #[serde(rename = "responseStatusCode")]
    pub response_status_code: i64,
}
impl MessageAttemptEndpointOut {
    /// Creates the model from its required fields.
    #[allow(clippy::too_many_arguments)]
    pub fn new(id: String, endpoint_id: String, response_status_code: i64) -> Self {
        Self {
            id,
            endpoint_id,
            response_status_code,
        }
    }
}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListResponseMessageAttemptEndpointOut {
    pub data: Vec<MessageAttemptEndpointOut>,
    pub done: bool,
    #[serde(with = "sdkforge_core::nullable::required")]
    pub iterator: Option<String>,
    #[serde(rename = "prevIterator")]
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub prev_iterator: Nullable<String>,
}
impl ListResponseMessageAttemptEndpointOut {
    /// Creates the model from its required fields.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        data: Vec<MessageAttemptEndpointOut>,
        done: bool,
        iterator: Option<String>,
    ) -> Self {
        Self {
            data,
            done,
            iterator,
            prev_iterator: Nullable::Unset,
        }
    }
    /// Whether the field was assigned, possibly to `null`.
    pub fn has_prev_iterator(&self) -> bool {
        self.prev_iterator.is_set()
    }
    /// The value, or the zero value when unset or null.
    pub fn prev_iterator_or_default(&self) -> String {
        self.prev_iterator.value_or_default()
    }
    /// Assigns a value.
    pub fn set_prev_iterator(&mut self, value: String) {
        self.prev_iterator.set(value);
    }
    /// Assigns an explicit `null`.
    pub fn set_prev_iterator_null(&mut self) {
        self.prev_iterator.set_null();
    }
    /// Leaves the field out of the payload.
    pub fn unset_prev_iterator(&mut self) {
        self.prev_iterator.unset();
    }
    /// Assigns a value, builder style.
    #[must_use]
    pub fn with_prev_iterator(mut self, value: String) -> Self {
        self.prev_iterator.set(value);
        self
    }
}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HttpErrorOut {
    pub code: String,
    pub detail: String,
}
impl HttpErrorOut {
    /// Creates the model from its required fields.
    #[allow(clippy::too_many_arguments)]
    pub fn new(code: String, detail: String) -> Self {
        Self { code, detail }
    }
}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppIn {
    pub name: String,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    pub uid: Nullable<String>,
}
impl AppIn {
    /// Creates the model from its required fields.
    #[allow(clippy::too_many_arguments)]
    pub fn new(name: String) -> Self {
        Self { name, uid: Nullable::Unset }
    }
    /// Whether the field was assigned, possibly to `null`.
    pub fn has_uid(&self) -> bool {
        self.uid.is_set()
    }
    /// The value, or the zero value when unset or null.
    pub fn uid_or_default(&self) -> String {
        self.uid.value_or_default()
    }
    /// Assigns a value.
    pub fn set_uid(&mut self, value: String) {
        self.uid.set(value);
    }
    /// Assigns an explicit `null`.
    pub fn set_uid_null(&mut self) {
        self.uid.set_null();
    }
    /// Leaves the field out of the payload.
    pub fn unset_uid(&mut self) {
        self.uid.unset();
    }
    /// Assigns a value, builder style.
    #[must_use]
    pub fn with_uid(mut self, value: String) -> Self {
        self.uid.set(value);
        self
    }
}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppOut {
    pub id: String,
    pub name: String,
}
impl AppOut {
    /// Creates the model from its required fields.
    #[allow(clippy::too_many_arguments)]
    pub fn new(id: String, name: String) -> Self {
        Self { id, name }
    }
}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskOut {
    #[serde(rename = "taskId")]
    pub task_id: String,
}
impl TaskOut {
    /// Creates the model from its required fields.
    #[allow(clippy::too_many_arguments)]
    pub fn new(task_id: String) -> Self {
        Self { task_id }
    }
}
/// List attempted destinations
/// Attempts sent to one endpoint, newest first.
///
/// `GET /api/v1/app/{app_id}/attempt/endpoint/{endpoint_id}`
pub async fn list_attempted_destinations<E: HttpExecutor>(
    client: &ApiClient<E>,
    app_id: &str,
    endpoint_id: &str,
    limit: Option<i32>,
    iterator: Nullable<&str>,
    order: Option<Ordering>,
    tag: Option<Vec<String>>,
) -> Result<
    TypedResponse<ListResponseMessageAttemptEndpointOut, HttpErrorOut>,
    ApiClientError,
> {
    let call = client
        .get("/api/v1/app/{app_id}/attempt/endpoint/{endpoint_id}")
        .param(ParamSpec::path("app_id"), ParamArg::value(app_id)?)?
        .param(ParamSpec::path("endpoint_id"), ParamArg::value(endpoint_id)?)?
        .param(ParamSpec::query("limit"), ParamArg::optional(limit.as_ref())?)?
        .param(ParamSpec::query("iterator").nullable(), ParamArg::from_nullable(&iterator)?)?
        .param(ParamSpec::query("order"), ParamArg::optional(order.as_ref())?)?
        .param(
            ParamSpec::query("tag").required().nullable().array(),
            ParamArg::nullable(tag.as_ref())?,
        )?
        .with_auth(AuthScheme::Bearer);
    let responses = ResponseTable::new()
        .success(StatusKey::Code(200))
        .error(StatusKey::Class(4))
        .error(StatusKey::Default);
    client.execute(call, &responses).await
}
/// Optional parameters of [`list_attempted_destinations`].
#[derive(Debug, Clone, Default)]
pub struct ListAttemptedDestinationsOptions {
    pub limit: Option<i32>,
    pub iterator: Nullable<String>,
    pub order: Option<Ordering>,
}
/// Payloads of `CreateAppSuccess` responses, one variant per status.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CreateAppSuccess {
    Status200(AppOut),
    Status202(TaskOut),
}
/// `POST /api/v1/app`
pub async fn create_app<E: HttpExecutor>(
    client: &ApiClient<E>,
    body: &AppIn,
) -> Result<TypedResponse<CreateAppSuccess, serde_json::Value>, ApiClientError> {
    let call = client.post("/api/v1/app").with_auth(AuthScheme::Bearer);
    let call = call.json(body)?;
    let responses = ResponseTable::new()
        .success_with(StatusKey::Code(200), CreateAppSuccess::Status200)
        .success_with(StatusKey::Code(202), CreateAppSuccess::Status202);
    client.execute(call, &responses).await
}
/// `POST /api/v1/app/{app_id}/logo`
#[deprecated]
pub async fn application_upload_logo<E: HttpExecutor>(
    client: &ApiClient<E>,
    app_id: &str,
    caption: Option<&str>,
    logo: FilePart,
) -> Result<TypedResponse<(), serde_json::Value>, ApiClientError> {
    let call = client
        .post("/api/v1/app/{app_id}/logo")
        .param(ParamSpec::path("app_id"), ParamArg::value(app_id)?)?
        .param(ParamSpec::form("caption"), ParamArg::optional(caption)?)?
        .param(ParamSpec::form_file("logo").required(), ParamArg::from(logo))?;
    let responses = ResponseTable::new().no_content(StatusKey::Code(204));
    client.execute(call, &responses).await
}
/// Optional parameters of [`application_upload_logo`].
#[derive(Debug, Clone, Default)]
pub struct ApplicationUploadLogoOptions {
    pub caption: Option<String>,
}
/// Operations tagged `message-attempt`.
/// Delivery attempts of messages.
#[derive(Debug)]
pub struct MessageAttemptApi<'a, E> {
    client: &'a ApiClient<E>,
}
impl<'a, E: HttpExecutor> MessageAttemptApi<'a, E> {
    /// Wraps a client.
    pub fn new(client: &'a ApiClient<E>) -> Self {
        Self { client }
    }
    /// List attempted destinations
    /// Attempts sent to one endpoint, newest first.
    ///
    /// `GET /api/v1/app/{app_id}/attempt/endpoint/{endpoint_id}`
    pub async fn list_attempted_destinations(
        &self,
        app_id: &str,
        endpoint_id: &str,
        tag: Option<Vec<String>>,
        options: Option<ListAttemptedDestinationsOptions>,
    ) -> Result<
        TypedResponse<ListResponseMessageAttemptEndpointOut, HttpErrorOut>,
        ApiClientError,
    > {
        let options = options.unwrap_or_default();
        list_attempted_destinations(
                self.client,
                app_id,
                endpoint_id,
                options.limit,
                options.iterator.as_ref().map(String::as_str),
                options.order,
                tag,
            )
            .await
    }
}
/// Operations tagged `application`.
/// Consumer applications.
#[derive(Debug)]
pub struct ApplicationApi<'a, E> {
    client: &'a ApiClient<E>,
}
impl<'a, E: HttpExecutor> ApplicationApi<'a, E> {
    /// Wraps a client.
    pub fn new(client: &'a ApiClient<E>) -> Self {
        Self { client }
    }
    /// `POST /api/v1/app`
    pub async fn create_app(
        &self,
        body: &AppIn,
    ) -> Result<TypedResponse<CreateAppSuccess, serde_json::Value>, ApiClientError> {
        create_app(self.client, body).await
    }
    /// `POST /api/v1/app/{app_id}/logo`
    #[deprecated]
    #[allow(deprecated)]
    pub async fn upload_logo(
        &self,
        app_id: &str,
        logo: FilePart,
        options: Option<ApplicationUploadLogoOptions>,
    ) -> Result<TypedResponse<(), serde_json::Value>, ApiClientError> {
        let options = options.unwrap_or_default();
        application_upload_logo(self.client, app_id, options.caption.as_deref(), logo)
            .await
    }
}
/// Facades grouping the operations by tag.
pub trait Resources<E> {
    /// Operations tagged `message-attempt`.
    fn message_attempt(&self) -> MessageAttemptApi<'_, E>;
    /// Operations tagged `application`.
    fn application(&self) -> ApplicationApi<'_, E>;
}
impl<E: HttpExecutor> Resources<E> for ApiClient<E> {
    fn message_attempt(&self) -> MessageAttemptApi<'_, E> {
        MessageAttemptApi::new(self)
    }
    fn application(&self) -> ApplicationApi<'_, E> {
        ApplicationApi::new(self)
    }
}
