use tracing::info;

use crate::{
    http_server::{routes, run_server},
    AppState, Result,
};

pub(crate) async fn serve() -> Result<()> {
    let app_state = AppState::from_env()?;
    let port = app_state.app.port;

    info!(base_url = %app_state.app.base_url, "Serving resume");
    run_server(routes::make_router().with_state(app_state), port).await?;

    info!("Main Returning");

    Ok(())
}
