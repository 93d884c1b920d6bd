//! Account service.
//!
//! Registration, login, profile maintenance and the admin's user management.
//!
//! ## Admin Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  list_users / delete_user   caller must be the admin        else 403   │
//! │  delete_user(admin)         never, the admin stays          403        │
//! │  update_profile / password  caller must NOT be the admin    else 403   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use tracing::{info, warn};

use ridehub_core::access::require_deletable;
use ridehub_core::validation::{
    validate_email, validate_full_name, validate_password, validate_username,
};
use ridehub_core::{Caller, CoreError, NewUser, ProfileChanges, User};

use crate::auth::{hash_password, verify_dummy_password, verify_password, AuthError};
use crate::dto::{PasswordChange, TokenResponse, UserCreate, UserUpdate};
use crate::error::ApiResult;
use crate::AppState;

/// Account service implementation.
pub struct UserService {
    state: Arc<AppState>,
}

impl UserService {
    /// Create a new user service.
    pub fn new(state: Arc<AppState>) -> Self {
        UserService { state }
    }

    /// Registers a new account.
    ///
    /// ## Errors
    /// * 400 - invalid fields, or the email/username is already registered
    pub async fn register(&self, request: UserCreate) -> ApiResult<User> {
        let username = validate_username(&request.username).map_err(CoreError::from)?;
        let email = validate_email(&request.email).map_err(CoreError::from)?;
        validate_password(&request.password).map_err(CoreError::from)?;
        let full_name = validate_full_name(request.full_name.as_deref()).map_err(CoreError::from)?;

        let users = self.state.db.users();
        if users.get_by_email(&email).await?.is_some() {
            return Err(CoreError::EmailTaken.into());
        }
        if users.get_by_username(&username).await?.is_some() {
            return Err(CoreError::UsernameTaken.into());
        }

        let password_hash = hash_password(&request.password)?;

        // The UNIQUE constraints still catch a concurrent registration.
        let user = users
            .insert(&NewUser {
                username,
                email,
                full_name,
                password_hash,
            })
            .await?;

        info!(user_id = user.id, username = %user.username, "User registered");
        Ok(user)
    }

    /// Checks credentials and issues an access token.
    ///
    /// `identifier` is an email when it contains `@`, a username otherwise.
    ///
    /// ## Errors
    /// * 401 - unknown account, wrong password, or inactive account
    pub async fn authenticate(&self, identifier: &str, password: &str) -> ApiResult<TokenResponse> {
        let identifier = identifier.trim();
        let users = self.state.db.users();

        let user = if identifier.contains('@') {
            users.get_by_email(&identifier.to_lowercase()).await?
        } else {
            users.get_by_username(identifier).await?
        };

        let verified = match &user {
            Some(user) => verify_password(password, &user.password_hash) && user.is_active,
            None => verify_dummy_password(password),
        };
        let user = match user {
            Some(user) if verified => user,
            _ => {
                warn!(identifier = %identifier, "Failed login attempt");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        let access_token = self.state.jwt.issue_access_token(user.id)?;

        info!(user_id = user.id, "Token issued successfully");

        Ok(TokenResponse {
            access_token,
            token_type: "bearer",
            expires_in: self.state.jwt.access_lifetime_secs(),
        })
    }

    /// Updates the caller's own profile. Locked for the admin.
    pub async fn update_profile(
        &self,
        caller: &Caller,
        user: User,
        request: UserUpdate,
    ) -> ApiResult<User> {
        caller.require_mutable_account()?;

        let users = self.state.db.users();
        let mut changes = ProfileChanges::default();

        if let Some(username) = request.username {
            let username = validate_username(&username).map_err(CoreError::from)?;
            if username != user.username {
                // Usernames compare case-insensitively, so the match may be the caller
                if let Some(other) = users.get_by_username(&username).await? {
                    if other.id != user.id {
                        return Err(CoreError::UsernameTaken.into());
                    }
                }
                changes.username = Some(username);
            }
        }

        if let Some(email) = request.email {
            let email = validate_email(&email).map_err(CoreError::from)?;
            if email != user.email {
                if users.get_by_email(&email).await?.is_some() {
                    return Err(CoreError::EmailTaken.into());
                }
                changes.email = Some(email);
            }
        }

        if request.full_name.is_some() {
            changes.full_name =
                validate_full_name(request.full_name.as_deref()).map_err(CoreError::from)?;
        }

        let updated = users.update_profile(&changes.apply(user)).await?;
        info!(user_id = updated.id, "Profile updated");
        Ok(updated)
    }

    /// Replaces the caller's password after checking the current one.
    pub async fn change_password(
        &self,
        caller: &Caller,
        user: &User,
        request: PasswordChange,
    ) -> ApiResult<()> {
        caller.require_mutable_account()?;

        if !verify_password(&request.current_password, &user.password_hash) {
            return Err(CoreError::WrongPassword.into());
        }
        validate_password(&request.new_password).map_err(CoreError::from)?;

        let password_hash = hash_password(&request.new_password)?;
        self.state
            .db
            .users()
            .update_password(user.id, &password_hash)
            .await?;

        info!(user_id = user.id, "Password changed");
        Ok(())
    }

    /// Lists every account. Admin only.
    pub async fn list_users(&self, caller: &Caller) -> ApiResult<Vec<User>> {
        caller.require_admin()?;
        Ok(self.state.db.users().list().await?)
    }

    /// Deletes an account and, through the cascade, its rentals. Admin only;
    /// the admin account itself can never be deleted.
    pub async fn delete_user(&self, caller: &Caller, user_id: i64) -> ApiResult<()> {
        caller.require_admin()?;

        let users = self.state.db.users();
        let target = users
            .get_by_id(user_id)
            .await?
            .ok_or(CoreError::UserNotFound(user_id))?;

        require_deletable(&target, &self.state.config.admin_email)?;

        let rentals = self.state.db.rentals().count_for_user(user_id).await?;
        users.delete(user_id).await?;
        info!(
            user_id,
            rentals_removed = rentals,
            deleted_by = caller.user_id,
            "User deleted"
        );
        Ok(())
    }
}
