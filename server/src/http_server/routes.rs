use axum::{
    http::{StatusCode, Uri},
    response::Redirect,
    routing::get,
    Router,
};
use color_eyre::eyre::eyre;

use super::{errors::ServerError, pages};
use crate::AppState;

pub fn make_router() -> Router<AppState> {
    Router::new()
        .route("/_", get(pages::versions::versions))
        .route("/", get(pages::resume::resume_page))
        .route("/resume", get(|| async { Redirect::permanent("/") }))
        .route("/resume/embed", get(pages::resume::resume_embed))
        .fallback(fallback)
}

async fn fallback(uri: Uri) -> ServerError {
    ServerError(eyre!("No page at {}", uri.path()), StatusCode::NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use scraper::{Html, Selector};
    use tower::ServiceExt;

    use crate::http_server::test_helpers::{create_test_app, response_body_string};

    async fn get(path: &str) -> axum::response::Response {
        create_test_app()
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn home_page_hosts_exactly_one_resume() {
        let response = get("/").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html"));

        let body = response_body_string(response).await;
        let html = Html::parse_document(&body);

        let frames = Selector::parse("body iframe").unwrap();
        let frames = html.select(&frames).collect::<Vec<_>>();
        assert_eq!(frames.len(), 1);
        assert_eq!(
            frames[0].value().attr("src"),
            Some("https://seabassjh.github.io/latex-resume/resume-embed.html")
        );

        let canonical = Selector::parse("link[rel=canonical]").unwrap();
        let canonical = html.select(&canonical).next().unwrap();
        assert_eq!(
            canonical.value().attr("href"),
            Some("https://resume.example.com/")
        );
    }

    #[tokio::test]
    async fn home_page_leaves_component_markup_untouched() {
        let body = response_body_string(get("/").await).await;

        assert!(body.contains(&crate::components::resume().into_string()));
    }

    #[tokio::test]
    async fn embed_is_just_the_component() {
        let response = get("/resume/embed").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = response_body_string(response).await;
        assert_eq!(body, crate::components::resume().into_string());
    }

    #[tokio::test]
    async fn resume_redirects_home() {
        let response = get("/resume").await;

        assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/");
    }

    #[tokio::test]
    async fn versions_are_json() {
        let response = get("/_").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = response_body_string(response).await;
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["git_commit"], "test-commit");
        assert_eq!(json["rustc_version"], "test-rustc");
    }

    #[tokio::test]
    async fn unknown_paths_are_not_found() {
        let response = get("/nope").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = response_body_string(response).await;
        assert_eq!(body, "No page at /nope");
    }

    #[tokio::test]
    async fn repeated_requests_render_the_same_page() {
        let first = response_body_string(get("/").await).await;
        let second = response_body_string(get("/").await).await;

        assert_eq!(first, second);
    }
}
