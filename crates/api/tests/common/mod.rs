use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tower::ServiceExt;

use sitebook_api::config::ServerConfig;
use sitebook_api::router::build_app_router;
use sitebook_api::state::AppState;
use sitebook_api::uploads::PhotoStore;
use sitebook_db::Database;

pub const BOUNDARY: &str = "sitebook-test-boundary";

/// Build a test `ServerConfig` with safe defaults, writing uploads to `upload_dir`.
pub fn test_config(upload_dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: String::new(),
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: 30,
        upload_dir: upload_dir.to_path_buf(),
        max_upload_bytes: 1024 * 1024,
    }
}

/// Build the full application router (same middleware stack as production)
/// around the given pool.
pub fn build_test_app(pool: PgPool, upload_dir: &Path) -> Router {
    build_test_app_with_config(pool, test_config(upload_dir))
}

/// Like [`build_test_app`], with a caller-adjusted configuration.
pub fn build_test_app_with_config(pool: PgPool, config: ServerConfig) -> Router {
    let state = AppState {
        db: Arc::new(Database::from_pool(pool)),
        photos: Arc::new(PhotoStore::new(&config.upload_dir)),
    };
    build_app_router(state, &config)
}

/// A pool pointing at a closed port. Any query fails after a short timeout.
pub fn unreachable_pool() -> PgPool {
    unreachable_pool_with_timeout(Duration::from_millis(500))
}

/// A pool pointing at a closed port that keeps retrying for `acquire_timeout`
/// before any query fails.
pub fn unreachable_pool_with_timeout(acquire_timeout: Duration) -> PgPool {
    PgPoolOptions::new()
        .acquire_timeout(acquire_timeout)
        .connect_lazy("postgres://sitebook@127.0.0.1:1/sitebook")
        .unwrap()
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::delete(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::put(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// One part of a hand-built `multipart/form-data` body.
pub enum Part<'a> {
    Text {
        name: &'a str,
        value: &'a str,
    },
    File {
        name: &'a str,
        file_name: &'a str,
        content: &'a [u8],
    },
}

pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text { name, value } => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File {
                name,
                file_name,
                content,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n\
                         Content-Type: application/octet-stream\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(content);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub async fn post_multipart(app: Router, uri: &str, parts: &[Part<'_>]) -> Response<Body> {
    let request = Request::post(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(parts)))
        .unwrap();
    send(app, request).await
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

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

/// Names of the files currently in `dir` (empty if `dir` does not exist).
pub fn files_in(dir: &Path) -> Vec<String> {
    match std::fs::read_dir(dir) {
        Ok(entries) => entries
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect(),
        Err(_) => Vec::new(),
    }
}
