use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use tickerdeck_core::ValuationRecord;

use crate::main_lib::AppState;

pub fn app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/valuations", get(get_valuations))
        .route("/api/health", get(get_health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// The one inbound operation: the full batch of current valuations.
///
/// Always 200 with one record per position. Upstream outages degrade to
/// simulated or buy-price figures inside the pipeline; they never change
/// this response's shape or status.
async fn get_valuations(State(state): State<Arc<AppState>>) -> Json<Vec<ValuationRecord>> {
    Json(state.snapshot_service.current_valuations().await)
}

async fn get_health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
