#![allow(
    clippy::missing_errors_doc,
    dead_code,
    missing_docs,
    clippy::expect_used
)]
use std::ops::Deref;

use axum::body::Bytes;
use axum::extract::{Path, RawQuery};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::task::JoinHandle;
use tracing::{error, info};

use sdkforge_core::ApiClient;

pub const TEST_TOKEN: &str = "testsk_integration";

/// In-process API server and a client pointing at it.
#[derive(Debug)]
pub struct TestApp {
    client: ApiClient,
    server: JoinHandle<()>,
}

impl TestApp {
    pub async fn start() -> anyhow::Result<Self> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        info!(%addr, "launching server");
        let server = tokio::spawn(async move {
            if let Err(error) = axum::serve(listener, router()).await {
                error!(?error, "server stopped");
            }
        });

        let client = ApiClient::builder()
            .with_server_url(&format!("http://{addr}"))?
            .with_bearer_token(TEST_TOKEN)
            .build()?;

        Ok(Self { client, server })
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}

impl Deref for TestApp {
    type Target = ApiClient;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self.server.abort();
    }
}

fn router() -> Router {
    Router::new()
        .route(
            "/api/v1/app/{app_id}/attempt/endpoint/{endpoint_id}",
            get(list_attempts),
        )
        .route("/api/v1/echo", get(echo).post(echo_body))
        .route("/api/v1/status/{code}", get(status))
        .route("/api/v1/teapot", get(teapot))
        .route("/api/v1/malformed", get(malformed))
        .route("/api/v1/app", post(create_app))
        .route("/api/v1/app/{app_id}", post(no_content).delete(no_content))
        .route("/api/v1/app/{app_id}/logo", post(upload_logo))
}

/// Echoes the raw query as `iterator`; `ep_first` pages have no `prevIterator` key.
async fn list_attempts(
    Path((app_id, endpoint_id)): Path<(String, String)>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> Response {
    if headers.get(header::AUTHORIZATION).is_none() {
        let body = json!({"code": "authentication_failed", "detail": "missing token"});
        return (StatusCode::UNAUTHORIZED, Json(body)).into_response();
    }
    match app_id.as_str() {
        "app_unknown" => {
            let body = json!({"code": "not_found", "detail": "Application not found"});
            return (StatusCode::NOT_FOUND, Json(body)).into_response();
        }
        "app_teapot" => {
            let body = json!({"code": "teapot", "detail": "short and stout"});
            return (StatusCode::IM_A_TEAPOT, Json(body)).into_response();
        }
        _ => {}
    }

    let mut body = json!({
        "data": [{
            "id": format!("atmpt_{endpoint_id}"),
            "endpointId": endpoint_id,
            "responseStatusCode": 200
        }],
        "done": false,
        "iterator": query,
    });
    if endpoint_id != "ep_first" {
        body["prevIterator"] = Value::Null;
    }
    Json(body).into_response()
}

/// `queued` applications answer `202` with a task.
async fn create_app(Json(app): Json<Value>) -> Response {
    let name = app["name"].as_str().unwrap_or_default();
    if name == "queued" {
        let body = json!({"taskId": "task_1"});
        return (StatusCode::ACCEPTED, Json(body)).into_response();
    }
    let id = app["uid"].as_str().unwrap_or("app_1");
    Json(json!({"id": id, "name": name})).into_response()
}

async fn upload_logo(headers: HeaderMap, body: Bytes) -> StatusCode {
    let multipart = header_value(&headers, header::CONTENT_TYPE)
        .is_some_and(|content_type| content_type.starts_with("multipart/form-data; boundary="));
    let body = String::from_utf8_lossy(&body);
    if multipart
        && body.contains(r#"name="logo"; filename="logo.png""#)
        && body.contains(r#"name="caption""#)
    {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    }
}

async fn echo(headers: HeaderMap, RawQuery(query): RawQuery) -> Json<Value> {
    Json(json!({
        "query": query,
        "authorization": header_value(&headers, header::AUTHORIZATION),
        "userAgent": header_value(&headers, header::USER_AGENT),
    }))
}

async fn echo_body(headers: HeaderMap, body: Bytes) -> Json<Value> {
    Json(json!({
        "contentType": header_value(&headers, header::CONTENT_TYPE),
        "body": String::from_utf8_lossy(&body),
    }))
}

async fn status(Path(code): Path<u16>) -> Response {
    let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = json!({"code": "error", "detail": format!("status {code}")});
    (status, Json(body)).into_response()
}

async fn teapot() -> Response {
    (StatusCode::IM_A_TEAPOT, "short and stout").into_response()
}

async fn malformed() -> Json<Value> {
    Json(json!({
        "data": [],
        "done": true,
        "iterator": null,
        "nextCursor": "unexpected"
    }))
}

async fn no_content() -> StatusCode {
    StatusCode::NO_CONTENT
}

fn header_value(headers: &HeaderMap, name: header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}
