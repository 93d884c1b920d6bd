//! Authentication module.
//!
//! Password hashing (argon2) and JWT access tokens (HS256).
//!
//! ```text
//! POST /users/login ──► verify_password ──► JwtManager::issue_access_token
//!                                                     │
//!   Authorization: Bearer <token> ◄───────────────────┘
//!            │
//!            ▼
//!   extract_bearer_token ──► JwtManager::validate_access_token ──► Claims.sub = user id
//! ```

use std::sync::OnceLock;

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, TokenData, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const ACCESS_TOKEN_TYPE: &str = "access";

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Not authenticated")]
    MissingToken,

    #[error("Could not validate credentials")]
    InvalidToken(String),

    #[error("Token has expired")]
    ExpiredToken,

    #[error("Expected access token")]
    WrongTokenType,

    #[error("Incorrect email or password")]
    InvalidCredentials,

    #[error("Failed to generate token: {0}")]
    TokenCreation(String),

    #[error("Failed to hash password: {0}")]
    Hashing(String),
}

/// JWT claims structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration (Unix timestamp)
    pub exp: i64,

    /// JWT ID (unique identifier for this token)
    pub jti: String,

    /// Token type, always "access"
    pub token_type: String,
}

impl Claims {
    /// The user id carried in `sub`.
    pub fn user_id(&self) -> Result<i64, AuthError> {
        self.sub
            .parse()
            .map_err(|_| AuthError::InvalidToken(format!("bad subject: {}", self.sub)))
    }
}

/// JWT token manager.
pub struct JwtManager {
    secret: String,
    access_lifetime_secs: i64,
}

impl JwtManager {
    /// Create a new JWT manager.
    pub fn new(secret: impl Into<String>, access_lifetime_secs: i64) -> Self {
        JwtManager {
            secret: secret.into(),
            access_lifetime_secs,
        }
    }

    /// Access token lifetime in seconds.
    pub fn access_lifetime_secs(&self) -> i64 {
        self.access_lifetime_secs
    }

    /// Issue an access token for `user_id`.
    pub fn issue_access_token(&self, user_id: i64) -> Result<String, AuthError> {
        let now = Utc::now();
        let exp = Duration::try_seconds(self.access_lifetime_secs)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| {
                AuthError::TokenCreation(format!(
                    "token lifetime of {}s is out of range",
                    self.access_lifetime_secs
                ))
            })?;

        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
            jti: Uuid::new_v4().to_string(),
            token_type: ACCESS_TOKEN_TYPE.to_string(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AuthError::TokenCreation(e.to_string()))
    }

    /// Validate and decode a token.
    pub fn validate_token(&self, token: &str) -> Result<Claims, AuthError> {
        let validation = Validation::default();

        let token_data: TokenData<Claims> = decode(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
            _ => AuthError::InvalidToken(e.to_string()),
        })?;

        Ok(token_data.claims)
    }

    /// Validate that a token is an access token.
    pub fn validate_access_token(&self, token: &str) -> Result<Claims, AuthError> {
        let claims = self.validate_token(token)?;

        if claims.token_type != ACCESS_TOKEN_TYPE {
            return Err(AuthError::WrongTokenType);
        }

        Ok(claims)
    }
}

/// Extract bearer token from authorization header.
pub fn extract_bearer_token(auth_header: &str) -> Option<&str> {
    let (scheme, token) = auth_header.trim().split_once(' ')?;
    let token = token.trim();
    if scheme.eq_ignore_ascii_case("Bearer") && !token.is_empty() {
        Some(token)
    } else {
        None
    }
}

/// Hash a password for storage (argon2id, PHC string, fresh salt per call).
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::Hashing(e.to_string()))?;

    Ok(hash.to_string())
}

/// Check `password` against a stored hash. A malformed hash never verifies.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let parsed_hash = match PasswordHash::new(hash) {
        Ok(h) => h,
        Err(_) => return false,
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

/// Runs a full argon2 verification against a throwaway hash and fails.
///
/// Logins naming no account call this so they take as long as a wrong
/// password does.
pub fn verify_dummy_password(password: &str) -> bool {
    static DUMMY_HASH: OnceLock<Option<String>> = OnceLock::new();

    let dummy = DUMMY_HASH.get_or_init(|| hash_password(&Uuid::new_v4().to_string()).ok());
    if let Some(hash) = dummy {
        verify_password(password, hash);
    }
    false
}
