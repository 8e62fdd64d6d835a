use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handler::{self, AppState};

/// Build the axum router with all stampcard endpoints.
///
/// The permissive CORS layer puts the cross-origin header on every
/// response, matching the card's use from static front-end pages.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/stamp", get(handler::stamp_handler))
        .route("/health", get(handler::health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
