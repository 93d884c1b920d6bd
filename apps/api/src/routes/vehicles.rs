//! `/vehicles` handlers.
//!
//! Browsing the catalog is public; changing it needs a bearer token.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::debug;

use crate::dto::{VehicleCreate, VehicleResponse, VehicleUpdate};
use crate::error::ApiResult;
use crate::extract::{ApiJson, ApiPath, CurrentUser};
use crate::services::vehicle_service::VehicleService;
use crate::AppState;

/// `GET /vehicles/`
pub async fn list(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<VehicleResponse>>> {
    let vehicles = VehicleService::new(state).list().await?;
    Ok(Json(vehicles.into_iter().map(VehicleResponse::from).collect()))
}

/// `GET /vehicles/{vehicle_id}`
pub async fn get(
    State(state): State<Arc<AppState>>,
    ApiPath(vehicle_id): ApiPath<i64>,
) -> ApiResult<Json<VehicleResponse>> {
    let vehicle = VehicleService::new(state).get(vehicle_id).await?;
    Ok(Json(vehicle.into()))
}

/// `POST /vehicles/`
pub async fn create(
    State(state): State<Arc<AppState>>,
    current: CurrentUser,
    ApiJson(request): ApiJson<VehicleCreate>,
) -> ApiResult<(StatusCode, Json<VehicleResponse>)> {
    debug!(user_id = current.user.id, "Creating vehicle");
    let vehicle = VehicleService::new(state).create(request).await?;
    Ok((StatusCode::CREATED, Json(vehicle.into())))
}

/// `PUT /vehicles/{vehicle_id}`
pub async fn update(
    State(state): State<Arc<AppState>>,
    current: CurrentUser,
    ApiPath(vehicle_id): ApiPath<i64>,
    ApiJson(request): ApiJson<VehicleUpdate>,
) -> ApiResult<Json<VehicleResponse>> {
    debug!(user_id = current.user.id, vehicle_id, "Updating vehicle");
    let vehicle = VehicleService::new(state)
        .update(vehicle_id, request)
        .await?;
    Ok(Json(vehicle.into()))
}

/// `DELETE /vehicles/{vehicle_id}`
pub async fn delete(
    State(state): State<Arc<AppState>>,
    current: CurrentUser,
    ApiPath(vehicle_id): ApiPath<i64>,
) -> ApiResult<StatusCode> {
    debug!(user_id = current.user.id, vehicle_id, "Deleting vehicle");
    VehicleService::new(state).delete(vehicle_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
