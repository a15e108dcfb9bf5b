#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use roster_api::config::ServerConfig;
use roster_api::router::build_app_router;
use roster_api::state::AppState;
use roster_api::templates::Templates;
use roster_cloud::{ObjectStore, StorageError};
use sqlx::PgPool;
use tower::ServiceExt;

const BOUNDARY: &str = "roster-test-boundary";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router without object storage.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app(pool, test_config(), None)
}

/// Build the full application router with the given object store.
pub fn build_test_app_with_storage(pool: PgPool, storage: Arc<dyn ObjectStore>) -> Router {
    build_app(pool, test_config(), Some(storage))
}

/// Build the full application router with a custom server configuration.
pub fn build_test_app_with_config(pool: PgPool, config: ServerConfig) -> Router {
    build_app(pool, config, None)
}

fn build_app(
    pool: PgPool,
    config: ServerConfig,
    storage: Option<Arc<dyn ObjectStore>>,
) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config),
        storage,
        templates: Arc::new(Templates::load().unwrap()),
    };
    build_app_router(state)
}

// ---------------------------------------------------------------------------
// Object store fakes
// ---------------------------------------------------------------------------

/// Accepts every upload and remembers `(dest_path, content_type, size)`.
#[derive(Default)]
pub struct RecordingStore {
    pub uploads: Mutex<Vec<(String, String, usize)>>,
}

#[async_trait]
impl ObjectStore for RecordingStore {
    async fn upload(
        &self,
        bytes: Vec<u8>,
        dest_path: &str,
        content_type: &str,
    ) -> Result<String, StorageError> {
        self.uploads.lock().unwrap().push((
            dest_path.to_string(),
            content_type.to_string(),
            bytes.len(),
        ));
        Ok(format!("https://storage.test/{dest_path}"))
    }
}

/// Rejects every upload.
pub struct FailingStore;

#[async_trait]
impl ObjectStore for FailingStore {
    async fn upload(
        &self,
        _bytes: Vec<u8>,
        _dest_path: &str,
        _content_type: &str,
    ) -> Result<String, StorageError> {
        Err(StorageError::HttpStatus {
            status: 403,
            body: "bucket is read-only".to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, Body::empty(), None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Body::empty(), None).await
}

pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::POST, uri, Body::empty(), None).await
}

pub async fn put_empty(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::PUT, uri, Body::empty(), None).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(
        app,
        Method::POST,
        uri,
        Body::from(json.to_string()),
        Some("application/json".to_string()),
    )
    .await
}

pub async fn put_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(
        app,
        Method::PUT,
        uri,
        Body::from(json.to_string()),
        Some("application/json".to_string()),
    )
    .await
}

/// An image part for [`post_multipart`]: `(file_name, content_type, bytes)`.
pub type FilePart<'a> = (&'a str, &'a str, &'a [u8]);

/// POST a `multipart/form-data` body made of text fields and an optional
/// `image` file part.
pub async fn post_multipart(
    app: Router,
    uri: &str,
    fields: &[(&str, &str)],
    image: Option<FilePart<'_>>,
) -> Response<Body> {
    send(
        app,
        Method::POST,
        uri,
        Body::from(multipart_body(fields, image)),
        Some(format!("multipart/form-data; boundary={BOUNDARY}")),
    )
    .await
}

fn multipart_body(fields: &[(&str, &str)], image: Option<FilePart<'_>>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((file_name, content_type, bytes)) = image {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Body,
    content_type: Option<String>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create a character through the API and return its ID.
pub async fn create_character(pool: &PgPool, name: &str, alias: Option<&str>) -> i64 {
    let mut fields = vec![("name", name), ("alignment", "hero")];
    if let Some(alias) = alias {
        fields.push(("alias", alias));
    }
    let response = post_multipart(
        build_test_app(pool.clone()),
        "/api/characters",
        &fields,
        None,
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create a team through the API and return its ID.
pub async fn create_team(pool: &PgPool, name: &str) -> i64 {
    let response = post_multipart(
        build_test_app(pool.clone()),
        "/api/teams",
        &[("name", name)],
        None,
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}
