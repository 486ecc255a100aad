use axum::{body::Body, http::Response, Router};
use url::Url;

use crate::state::{AppConfig, AppState, VersionInfo};

pub fn test_state() -> AppState {
    AppState {
        app: AppConfig {
            base_url: Url::parse("https://resume.example.com").unwrap(),
            port: 0,
        },
        versions: VersionInfo {
            git_commit: "test-commit",
            rustc_version: "test-rustc",
        },
    }
}

pub fn create_test_app() -> Router {
    crate::http_server::routes::make_router().with_state(test_state())
}

pub async fn response_body_string(response: Response<Body>) -> String {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body_bytes.to_vec()).unwrap()
}
