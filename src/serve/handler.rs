use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Json, Response};
use serde_json::json;

use crate::assets::{AssetStore, PositionDirectory};
use crate::pipeline;

/// Shared state for request handlers.
#[derive(Clone)]
pub struct AppState {
    pub assets: Arc<AssetStore>,
    pub positions: Arc<PositionDirectory>,
}

/// Serve one stamp-card image.
///
/// The pipeline runs synchronously inside the handler; a request is a
/// single validate, load, composite, encode pass. Every failure kind maps
/// to the same generic client error, so callers learn nothing about the
/// asset layout; the distinguishing kind goes to the log.
pub async fn stamp_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    match pipeline::handle(&state.assets, &state.positions, Some(&params)) {
        Ok(image) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, image.mime)],
            image.bytes,
        )
            .into_response(),
        Err(err) => {
            tracing::warn!(error = %err, "stamp request failed");
            (StatusCode::BAD_REQUEST, Html("<h1>ERROR</h1>")).into_response()
        }
    }
}

/// Liveness probe.
pub async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({
        "name": "stampcard",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
