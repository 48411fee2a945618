use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/v1/ping", get(ping))
}

/// Full health check, including a database round trip.
async fn health_check(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    state
        .content()
        .ping()
        .await
        .map_err(|e| ApiError::Internal(format!("database health check failed: {e}")))?;

    Ok(Json(json!({
        "status": "ok",
        "database": "connected",
        "bucket": state.images().bucket(),
    })))
}

/// Lightweight ping; no database check.
async fn ping() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
