//! Welcome and health endpoints.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::services::health_service::{HealthService, ServingStatus};
use crate::AppState;

/// `GET /`
pub async fn root() -> impl IntoResponse {
    Json(json!({ "message": "Welcome to the Bike and Scooter Rental API!" }))
}

/// `GET /health`
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let report = HealthService::new(state).check().await;

    let status = match report.status {
        ServingStatus::Ok => StatusCode::OK,
        ServingStatus::Degraded => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status, Json(report))
}
