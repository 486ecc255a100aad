use std::net::SocketAddr;

use axum::{extract::FromRef, Router};
use color_eyre::eyre::WrapErr;
use tokio::net::TcpListener;

use crate::{
    state::{AppConfig, AppState, VersionInfo},
    Result,
};

pub(crate) mod cmd;
pub mod errors;
pub(crate) mod pages;
pub mod routes;
pub mod templates;
mod trace;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use errors::ServerError;

impl FromRef<AppState> for AppConfig {
    fn from_ref(state: &AppState) -> Self {
        state.app.clone()
    }
}

impl FromRef<AppState> for VersionInfo {
    fn from_ref(state: &AppState) -> Self {
        state.versions.clone()
    }
}

pub async fn run_server(routes: Router, port: u16) -> Result<()> {
    let tracer = trace::Tracer;
    let trace_layer = tower_http::trace::TraceLayer::new_for_http()
        .make_span_with(tracer)
        .on_response(tracer);

    let app = routes.layer(trace_layer);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting server on port {}", port);

    let listener = TcpListener::bind(&addr)
        .await
        .wrap_err("Failed to open port")?;

    let addr = listener.local_addr()?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .wrap_err("Failed to run server")
}
