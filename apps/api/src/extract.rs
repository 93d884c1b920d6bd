//! Request extractors.
//!
//! - [`CurrentUser`] resolves `Authorization: Bearer <token>` to a live account
//! - [`ApiJson`], [`ApiForm`], [`ApiPath`] wrap axum's extractors so a
//!   malformed body or path answers 400 with the usual error body

use std::sync::Arc;

use axum::extract::{FromRequest, FromRequestParts};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use tracing::debug;

use ridehub_core::{Caller, User};

use crate::auth::{extract_bearer_token, AuthError};
use crate::error::ApiError;
use crate::AppState;

/// JSON body; rejections become `ApiError`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Form body; rejections become `ApiError`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Form), rejection(ApiError))]
pub struct ApiForm<T>(pub T);

/// Path parameters; rejections become `ApiError`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

/// The authenticated account behind a request.
///
/// Rejects with 401 when the header is missing, the token is invalid or
/// expired, or the account it names no longer exists or is inactive.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user: User,
    pub caller: Caller,
}

impl FromRequestParts<Arc<AppState>> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AuthError::MissingToken)?;

        let token = extract_bearer_token(header).ok_or(AuthError::MissingToken)?;
        let claims = state.jwt.validate_access_token(token)?;
        let user_id = claims.user_id()?;

        let user = state
            .db
            .users()
            .get_by_id(user_id)
            .await?
            .filter(|user| user.is_active)
            .ok_or_else(|| {
                debug!(user_id, "Token names a missing or inactive user");
                AuthError::InvalidToken(format!("no active user {}", user_id))
            })?;

        let caller = Caller::for_user(&user, &state.config.admin_email);
        Ok(CurrentUser { user, caller })
    }
}
