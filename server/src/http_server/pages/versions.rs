use axum::{extract::State, Json};

use crate::state::VersionInfo;

pub(crate) async fn versions(State(versions): State<VersionInfo>) -> Json<VersionInfo> {
    Json(versions)
}
