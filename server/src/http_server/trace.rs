use std::time::Duration;

use axum::{
    extract::MatchedPath,
    http::{self, header, HeaderMap, HeaderName, StatusCode},
};
use tower_http::trace::{MakeSpan, OnResponse};
use tracing::field::Empty;
use url::Url;

const EMBED_ROUTE: &str = "/resume/embed";

/// Request spans for the resume server.
///
/// The embed route is pulled in by other sites, so its spans note which site asked.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Tracer;

impl<Body> MakeSpan<Body> for Tracer {
    fn make_span(&mut self, request: &http::Request<Body>) -> tracing::Span {
        let route = request
            .extensions()
            .get::<MatchedPath>()
            .map(MatchedPath::as_str);
        let embedded_by = embedding_site(route, request.headers());
        let span_name = format!("{} {}", request.method(), route.unwrap_or("unmatched"));

        tracing::info_span!(
            "resume.request",
            otel.name = span_name,
            otel.kind = "server",
            http.request.method = %request.method(),
            http.route = route,
            url.path = request.uri().path(),
            embedded_by = embedded_by.as_deref(),
            user_agent.original = header_str(request.headers(), &header::USER_AGENT),
            http.response.status_code = Empty,
            http.response.body.size = Empty,
        )
    }
}

impl<Body> OnResponse<Body> for Tracer {
    fn on_response(self, response: &http::Response<Body>, latency: Duration, span: &tracing::Span) {
        let status = response.status();
        let body_size = body_size(response.headers());

        span.record("http.response.status_code", status.as_u16());
        span.record("http.response.body.size", body_size);

        let latency_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX);
        match status {
            s if s.is_server_error() => {
                tracing::error!(status = s.as_u16(), latency_ms, "request failed");
            }
            s if s == StatusCode::NOT_FOUND => {
                tracing::warn!(latency_ms, "no page for request");
            }
            s => tracing::info!(status = s.as_u16(), latency_ms, "served"),
        }
    }
}

fn header_str<'h>(headers: &'h HeaderMap, name: &HeaderName) -> Option<&'h str> {
    headers.get(name).and_then(|h| h.to_str().ok())
}

/// Host of the page that framed the embed route, taken from its referer.
fn embedding_site(route: Option<&str>, headers: &HeaderMap) -> Option<String> {
    if route != Some(EMBED_ROUTE) {
        return None;
    }

    let referer = Url::parse(header_str(headers, &header::REFERER)?).ok()?;

    referer.host_str().map(ToOwned::to_owned)
}

fn body_size(headers: &HeaderMap) -> Option<u64> {
    header_str(headers, &header::CONTENT_LENGTH)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers(pairs: &[(HeaderName, &'static str)]) -> HeaderMap {
        pairs
            .iter()
            .map(|(name, value)| (name.clone(), HeaderValue::from_static(*value)))
            .collect()
    }

    #[test]
    fn embed_requests_name_the_framing_site() {
        let headers = headers(&[(header::REFERER, "https://portfolio.example.com/about")]);

        assert_eq!(
            embedding_site(Some("/resume/embed"), &headers).as_deref(),
            Some("portfolio.example.com")
        );
    }

    #[test]
    fn other_routes_are_not_embeds() {
        let headers = headers(&[(header::REFERER, "https://portfolio.example.com/about")]);

        assert_eq!(embedding_site(Some("/"), &headers), None);
        assert_eq!(embedding_site(None, &headers), None);
    }

    #[test]
    fn embed_without_a_usable_referer() {
        assert_eq!(embedding_site(Some("/resume/embed"), &HeaderMap::new()), None);

        let headers = headers(&[(header::REFERER, "not a url")]);
        assert_eq!(embedding_site(Some("/resume/embed"), &headers), None);
    }

    #[test]
    fn reads_body_size_from_content_length() {
        assert_eq!(body_size(&headers(&[(header::CONTENT_LENGTH, "512")])), Some(512));
        assert_eq!(body_size(&headers(&[(header::CONTENT_LENGTH, "lots")])), None);
        assert_eq!(body_size(&HeaderMap::new()), None);
    }
}
