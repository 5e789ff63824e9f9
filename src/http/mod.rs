pub mod catalog;
pub mod media;
pub mod state;

use axum::{middleware, routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use crate::http::state::AppState;

/// Routes are tried in order: the UI shell, the catalog, then the fallback
/// that looks in the asset root and the watched directory.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route_service("/", media::index_service(&state.config))
        .route("/api", get(catalog::list_catalog))
        .fallback_service(media::file_service(&state.config))
        .layer(middleware::map_response(media::reject_empty_ranges))
        // The catalog is fetched from another device, so every response is cross-origin.
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
