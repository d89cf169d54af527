//! Health check endpoints

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    mongodb: bool,
    response_time_ms: u64,
}

/// Create a health check router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// Readiness check - verifies MongoDB connection
async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let mongo = database::mongodb::check_health_detailed(&state.mongo_client).await;

    if let Some(message) = &mongo.message {
        tracing::warn!(response_time_ms = mongo.response_time_ms, %message, "Readiness check failed");
    }

    let status_code = if mongo.healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(HealthResponse {
            status: if mongo.healthy { "ready" } else { "unhealthy" }.to_string(),
            mongodb: mongo.healthy,
            response_time_ms: mongo.response_time_ms,
        }),
    )
}
