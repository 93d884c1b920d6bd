//! `/rentals` handlers. Every route needs a bearer token.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::dto::{RentalCreate, RentalResponse, RentalUpdate};
use crate::error::ApiResult;
use crate::extract::{ApiJson, ApiPath, CurrentUser};
use crate::services::rental_service::RentalService;
use crate::AppState;

/// `GET /rentals/`
pub async fn list(
    State(state): State<Arc<AppState>>,
    current: CurrentUser,
) -> ApiResult<Json<Vec<RentalResponse>>> {
    let rentals = RentalService::new(state).list(&current.caller).await?;
    Ok(Json(rentals.into_iter().map(RentalResponse::from).collect()))
}

/// `POST /rentals/`
pub async fn create(
    State(state): State<Arc<AppState>>,
    current: CurrentUser,
    ApiJson(request): ApiJson<RentalCreate>,
) -> ApiResult<(StatusCode, Json<RentalResponse>)> {
    let rental = RentalService::new(state)
        .create(&current.caller, request)
        .await?;
    Ok((StatusCode::CREATED, Json(rental.into())))
}

/// `GET /rentals/{rental_id}`
pub async fn get(
    State(state): State<Arc<AppState>>,
    current: CurrentUser,
    ApiPath(rental_id): ApiPath<i64>,
) -> ApiResult<Json<RentalResponse>> {
    let rental = RentalService::new(state)
        .get(&current.caller, rental_id)
        .await?;
    Ok(Json(rental.into()))
}

/// `PUT /rentals/{rental_id}`
pub async fn update(
    State(state): State<Arc<AppState>>,
    current: CurrentUser,
    ApiPath(rental_id): ApiPath<i64>,
    ApiJson(request): ApiJson<RentalUpdate>,
) -> ApiResult<Json<RentalResponse>> {
    let rental = RentalService::new(state)
        .update(&current.caller, rental_id, request)
        .await?;
    Ok(Json(rental.into()))
}

/// `DELETE /rentals/{rental_id}`
pub async fn delete(
    State(state): State<Arc<AppState>>,
    current: CurrentUser,
    ApiPath(rental_id): ApiPath<i64>,
) -> ApiResult<StatusCode> {
    RentalService::new(state)
        .delete(&current.caller, rental_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
