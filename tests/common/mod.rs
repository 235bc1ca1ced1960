#![allow(dead_code)]

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;

use visitlog::config::Config;

pub struct TestApp {
    pub router: Router,
    pub config: Config,
    // Keeps the storage directory alive for the life of the test.
    pub dir: TempDir,
}

impl TestApp {
    /// App backed by a database file that does not exist yet.
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        Self::in_dir(dir)
    }

    /// App backed by `app.db` inside `dir`, reusing whatever is already there.
    pub fn in_dir(dir: TempDir) -> Self {
        let config = test_config(dir.path().join("app.db").to_string_lossy().into_owned());
        let router = visitlog::build_app(config.clone());
        Self {
            router,
            config,
            dir,
        }
    }

    pub fn db_path(&self) -> std::path::PathBuf {
        self.dir.path().join("app.db")
    }

    /// Send a request through the app and return the response.
    pub async fn request(&self, req: Request<Body>) -> Response {
        tower::ServiceExt::oneshot(self.router.clone(), req)
            .await
            .unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.request(req).await
    }

    /// GET a path and parse the body as JSON.
    pub async fn get_json(&self, uri: &str) -> serde_json::Value {
        let resp = self.get(uri).await;
        assert!(
            resp.status().is_success(),
            "GET {uri} returned {}",
            resp.status()
        );
        serde_json::from_str(&body_string(resp).await).unwrap()
    }
}

pub fn test_config(database_path: String) -> Config {
    Config {
        database_path,
        instance_name: "test-pod-0".to_string(),
        port: 0,
        heavy_iterations: 10_000,
    }
}

/// Read the full response body as a String.
pub async fn body_string(resp: Response) -> String {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Pull the `id` of every visit out of an index response.
pub fn visit_ids(json: &serde_json::Value) -> Vec<i64> {
    json["visits"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_i64().unwrap())
        .collect()
}
