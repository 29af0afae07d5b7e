use crate::config::{Config, DEFAULT_TOKEN};
use crate::models::Entry;
use crate::state::AppState;
use crate::store::EntryStore;
use axum::{body::Body, http::Request, response::Response, Router};
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

pub const TEST_TOKEN: &str = "test-token";

/// Router backed by a store file inside a fresh temporary directory
///
/// The directory is removed when the returned guard is dropped.
pub struct TestApp {
    pub router: Router,
    pub store: EntryStore,
    _dir: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self::with_data_file(dir, PathBuf::from("data.json"))
    }

    /// Use `relative` (inside the temp dir) as the store file
    pub fn with_data_file(dir: TempDir, relative: PathBuf) -> Self {
        let config = Config {
            service_port: 3000,
            service_host: "0.0.0.0".to_string(),
            api_token: TEST_TOKEN.to_string(),
            data_file: dir.path().join(relative),
        };
        assert_ne!(config.api_token, DEFAULT_TOKEN);

        let store = EntryStore::new(config.data_file.clone());
        let state = AppState {
            store: store.clone(),
            config: Arc::new(config),
        };

        Self {
            router: crate::router::build(state),
            store,
            _dir: dir,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> Response {
        use tower::ServiceExt;

        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("Router is infallible")
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.send(Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn create(&self, body: serde_json::Value) -> Response {
        self.send(
            Request::builder()
                .method("POST")
                .uri("/entry")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&body).unwrap()))
                .unwrap(),
        )
        .await
    }

    pub async fn delete(&self, slug: &str) -> Response {
        self.send(
            Request::builder()
                .method("DELETE")
                .uri(format!("/entry/{}", slug))
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn list(&self, authorization: Option<&str>) -> Response {
        let mut builder = Request::builder().method("GET").uri("/entries");
        if let Some(value) = authorization {
            builder = builder.header("authorization", value);
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    pub async fn entries(&self) -> Vec<Entry> {
        self.store.load().await.expect("Failed to load entries")
    }
}

pub async fn body_text(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}
