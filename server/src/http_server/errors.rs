use std::fmt::{Debug, Display};

use axum::{http::StatusCode, response::IntoResponse};
use color_eyre::Report;

pub struct ServerError(pub(crate) Report, pub(crate) StatusCode);

impl Display for ServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl Debug for ServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Status Code: {}", self.1)?;
        f.write_str("ServerError: \n")?;

        Debug::fmt(&self.0, f)
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        if self.1.is_server_error() {
            let error: &(dyn std::error::Error + Send + Sync + 'static) = self.0.as_ref();
            sentry::capture_error(error);

            tracing::error!(error = ?self, "ServerError");
        } else {
            tracing::warn!(status = %self.1, error = %self.0, "ServerError");
        }

        (self.1, self.0.to_string()).into_response()
    }
}

impl<E> From<E> for ServerError
where
    E: Into<Report>,
{
    fn from(err: E) -> Self {
        ServerError(err.into(), StatusCode::INTERNAL_SERVER_ERROR)
    }
}

#[cfg(test)]
mod tests {
    use color_eyre::eyre::eyre;

    use super::*;

    #[tokio::test]
    async fn responds_with_status_and_message() {
        let response = ServerError(eyre!("No page at /nope"), StatusCode::NOT_FOUND).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(body.as_ref(), b"No page at /nope");
    }

    #[test]
    fn question_mark_defaults_to_internal_error() {
        fn fallible() -> Result<u16, ServerError> {
            Ok("nope".parse::<u16>()?)
        }

        assert_eq!(
            fallible().unwrap_err().1,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
