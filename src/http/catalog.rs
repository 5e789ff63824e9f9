use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::http::state::AppState;

/// GET /api — scan the watched directory and return the catalog as JSON.
///
/// The scan runs on the blocking pool so a slow disk never holds up other
/// connections. Any discovery failure becomes a bare 500.
pub async fn list_catalog(State(state): State<AppState>) -> Response {
    let catalog = state.catalog.clone();
    let result = tokio::task::spawn_blocking(move || catalog.list()).await;

    match result {
        Ok(Ok(items)) => Json(items).into_response(),
        Ok(Err(e)) => {
            tracing::warn!("Catalog request failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
        Err(e) => {
            tracing::error!("Catalog scan task failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
