//! # User Repository
//!
//! Database operations for user accounts.
//!
//! ## Key Operations
//! - Registration insert (username/email UNIQUE)
//! - Lookup by id, email or username (login accepts either)
//! - Profile and password updates
//! - Deletion, which cascades to the user's rentals

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use ridehub_core::{NewUser, User};

/// Repository for user database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.users();
///
/// let user = repo.get_by_email("rider@example.com").await?;
/// let all = repo.list().await?;
/// ```
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Creates a new UserRepository.
    pub fn new(pool: SqlitePool) -> Self {
        UserRepository { pool }
    }

    /// Inserts a new user.
    ///
    /// ## Returns
    /// * `Ok(User)` - Inserted user with its generated id
    /// * `Err(DbError::UniqueViolation)` - username or email already taken
    pub async fn insert(&self, user: &NewUser) -> DbResult<User> {
        debug!(username = %user.username, "Inserting user");

        let now = Utc::now();

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (
                username, email, full_name, password_hash,
                is_active, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, 1, ?5, ?5)
            RETURNING *
            "#,
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.full_name)
        .bind(&user.password_hash)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    /// Gets a user by id.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    /// Gets a user by email. Emails are stored lower-cased, so the
    /// argument must already be normalized.
    pub async fn get_by_email(&self, email: &str) -> DbResult<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    /// Gets a user by username, ignoring case.
    pub async fn get_by_username(&self, username: &str) -> DbResult<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = ?1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    /// Lists all users ordered by id.
    pub async fn list(&self) -> DbResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        debug!(count = users.len(), "Listed users");
        Ok(users)
    }

    /// Writes the profile fields (username, email, full name) of `user`.
    ///
    /// ## Returns
    /// * `Ok(User)` - The stored row after the update
    /// * `Err(DbError::NotFound)` - User doesn't exist
    /// * `Err(DbError::UniqueViolation)` - new username/email already taken
    pub async fn update_profile(&self, user: &User) -> DbResult<User> {
        debug!(id = user.id, "Updating user profile");

        let updated = sqlx::query_as::<_, User>(
            r#"
            UPDATE users SET
                username = ?2,
                email = ?3,
                full_name = ?4,
                updated_at = ?5
            WHERE id = ?1
            RETURNING *
            "#,
        )
        .bind(user.id)
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.full_name)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        updated.ok_or_else(|| DbError::not_found("User", user.id))
    }

    /// Replaces the stored password hash.
    pub async fn update_password(&self, id: i64, password_hash: &str) -> DbResult<()> {
        debug!(id = id, "Updating user password");

        let result = sqlx::query(
            "UPDATE users SET password_hash = ?2, updated_at = ?3 WHERE id = ?1",
        )
        .bind(id)
        .bind(password_hash)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("User", id));
        }

        Ok(())
    }

    /// Deletes a user. The user's rentals go with it (ON DELETE CASCADE).
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id = id, "Deleting user");

        let result = sqlx::query("DELETE FROM users WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("User", id));
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
