//! `/users` handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::dto::{LoginForm, PasswordChange, TokenResponse, UserCreate, UserResponse, UserUpdate};
use crate::error::ApiResult;
use crate::extract::{ApiForm, ApiJson, ApiPath, CurrentUser};
use crate::services::user_service::UserService;
use crate::AppState;

/// `POST /users/register`
pub async fn register(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<UserCreate>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let user = UserService::new(state.clone()).register(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(UserResponse::from_user(user, &state.config.admin_email)),
    ))
}

/// `POST /users/login` (form-encoded)
pub async fn login(
    State(state): State<Arc<AppState>>,
    ApiForm(form): ApiForm<LoginForm>,
) -> ApiResult<Json<TokenResponse>> {
    let token = UserService::new(state)
        .authenticate(&form.username, &form.password)
        .await?;
    Ok(Json(token))
}

/// `GET /users/me`
pub async fn me(
    State(state): State<Arc<AppState>>,
    current: CurrentUser,
) -> Json<UserResponse> {
    Json(UserResponse::from_user(current.user, &state.config.admin_email))
}

/// `PATCH /users/me`
pub async fn update_me(
    State(state): State<Arc<AppState>>,
    current: CurrentUser,
    ApiJson(request): ApiJson<UserUpdate>,
) -> ApiResult<Json<UserResponse>> {
    let user = UserService::new(state.clone())
        .update_profile(&current.caller, current.user, request)
        .await?;
    Ok(Json(UserResponse::from_user(user, &state.config.admin_email)))
}

/// `POST /users/me/password`
pub async fn change_password(
    State(state): State<Arc<AppState>>,
    current: CurrentUser,
    ApiJson(request): ApiJson<PasswordChange>,
) -> ApiResult<StatusCode> {
    UserService::new(state)
        .change_password(&current.caller, &current.user, request)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /users/` (admin)
pub async fn list(
    State(state): State<Arc<AppState>>,
    current: CurrentUser,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let users = UserService::new(state.clone())
        .list_users(&current.caller)
        .await?;
    let admin_email = &state.config.admin_email;
    Ok(Json(
        users
            .into_iter()
            .map(|user| UserResponse::from_user(user, admin_email))
            .collect(),
    ))
}

/// `DELETE /users/{user_id}` (admin)
pub async fn delete(
    State(state): State<Arc<AppState>>,
    current: CurrentUser,
    ApiPath(user_id): ApiPath<i64>,
) -> ApiResult<StatusCode> {
    UserService::new(state)
        .delete_user(&current.caller, user_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
