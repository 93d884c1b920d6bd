//! # Error Types
//!
//! Domain-specific error types for ridehub-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  ridehub-core errors (this file)                                       │
//! │  ├── CoreError        - Business rule violations                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  ridehub-db errors (separate crate)                                    │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  apps/api errors                                                       │
//! │  ├── AuthError        - Hashing / token failures                       │
//! │  └── ApiError         - What HTTP clients see (status + JSON body)      │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → HTTP response          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// Each variant maps to exactly one HTTP status in the API layer.
#[derive(Debug, Error)]
pub enum CoreError {
    /// User cannot be found.
    #[error("User not found: {0}")]
    UserNotFound(i64),

    /// Vehicle cannot be found.
    #[error("Vehicle not found: {0}")]
    VehicleNotFound(i64),

    /// Rental cannot be found.
    #[error("Rental not found: {0}")]
    RentalNotFound(i64),

    /// A rental references an entity that does not exist.
    ///
    /// ## When This Occurs
    /// - Creating a rental for a vehicle id that was never created
    /// - Admin creating a rental on behalf of an unknown user
    #[error("Invalid reference: {entity} {id} does not exist")]
    UnknownReference { entity: String, id: i64 },

    /// Email is already taken by another account.
    #[error("Email already registered")]
    EmailTaken,

    /// Username is already taken by another account.
    #[error("Username already registered")]
    UsernameTaken,

    /// The operation is reserved for the admin account.
    #[error("Admin privileges required")]
    AdminOnly,

    /// The admin account cannot be modified or deleted through the API.
    #[error("The admin account cannot be modified")]
    AdminAccountLocked,

    /// The caller tried to act on a rental owned by someone else.
    #[error("Rental {rental_id} belongs to another user")]
    NotOwner { rental_id: i64 },

    /// The vehicle is flagged as unavailable.
    #[error("Vehicle {0} is not available")]
    VehicleUnavailable(i64),

    /// The vehicle still has rentals and cannot leave the catalog.
    #[error("Vehicle {0} has rentals and cannot be deleted")]
    VehicleInUse(i64),

    /// The supplied current password did not match.
    #[error("Current password is incorrect")]
    WrongPassword,

    /// Validation error (wraps ValidationError).
    #[error("{0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Creates an UnknownReference error.
    pub fn unknown_reference(entity: impl Into<String>, id: i64) -> Self {
        CoreError::UnknownReference {
            entity: entity.into(),
            id,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Invalid format (e.g., malformed email).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// A time window whose end precedes its start.
    #[error("{end} must not be before {start}")]
    InvertedWindow { start: String, end: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(CoreError::EmailTaken.to_string(), "Email already registered");
        assert_eq!(
            CoreError::unknown_reference("vehicle", 42).to_string(),
            "Invalid reference: vehicle 42 does not exist"
        );
        assert_eq!(
            CoreError::NotOwner { rental_id: 7 }.to_string(),
            "Rental 7 belongs to another user"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "username".to_string(),
        };
        assert_eq!(err.to_string(), "username is required");

        let err = ValidationError::InvertedWindow {
            start: "start_time".to_string(),
            end: "end_time".to_string(),
        };
        assert_eq!(err.to_string(), "end_time must not be before start_time");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "email".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert_eq!(core_err.to_string(), "email is required");
    }
}
