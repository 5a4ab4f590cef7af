use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::AppState;

pub async fn liveness() -> &'static str {
    "Mood log API is running"
}

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "moodlog-api",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn readyz(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match state.store.probe().await {
        Ok(present) => (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "checks": { "mood_log": if present { "ok" } else { "empty" } },
            })),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Mood log readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "not_ready",
                    "checks": { "mood_log": "failed" },
                })),
            )
        }
    }
}
