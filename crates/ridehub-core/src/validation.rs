//! # Validation Module
//!
//! Input validation for registration, profile updates, the vehicle catalog
//! and rental windows.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP extractors (axum)                                       │
//! │  └── Type validation (JSON / form deserialization)                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Service layer                                                │
//! │  └── THIS MODULE: field rules (length, format, sign, ordering)         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── UNIQUE (username, email)                                          │
//! │  └── FOREIGN KEY (rentals → users, vehicles)                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Normalizing validators return the cleaned value so callers store exactly
//! what was checked.

use chrono::NaiveDateTime;

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

fn required(field: &str, value: &str) -> ValidationResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(value.to_string())
}

fn max_len(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }
    Ok(())
}

// =============================================================================
// Account Validators
// =============================================================================

/// Validates a username.
///
/// ## Rules
/// - 3 to 50 characters after trimming
/// - Letters, digits, `.`, `_` and `-` only
///
/// ## Example
/// ```rust
/// use ridehub_core::validation::validate_username;
///
/// assert_eq!(validate_username("  tester ").unwrap(), "tester");
/// assert!(validate_username("a b").is_err());
/// ```
pub fn validate_username(username: &str) -> ValidationResult<String> {
    let username = required("username", username)?;

    if username.chars().count() < 3 {
        return Err(ValidationError::TooShort {
            field: "username".to_string(),
            min: 3,
        });
    }
    max_len("username", &username, 50)?;

    if !username
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '.' | '_' | '-'))
    {
        return Err(ValidationError::InvalidFormat {
            field: "username".to_string(),
            reason: "must contain only letters, numbers, dots, hyphens, and underscores"
                .to_string(),
        });
    }

    Ok(username)
}

/// Validates and normalizes an email address.
///
/// ## Rules
/// - Exactly one `@` with a non-empty local part
/// - Domain contains a dot and no empty labels
/// - No whitespace, at most 254 characters
///
/// Returns the address lower-cased so uniqueness is case-insensitive.
///
/// ## Example
/// ```rust
/// use ridehub_core::validation::validate_email;
///
/// assert_eq!(validate_email("Tester@Example.COM").unwrap(), "tester@example.com");
/// assert!(validate_email("no-at-sign").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<String> {
    let email = required("email", email)?.to_lowercase();
    max_len("email", &email, 254)?;

    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: reason.to_string(),
    };

    if email.chars().any(char::is_whitespace) {
        return Err(invalid("must not contain whitespace"));
    }

    let (local, domain) = email
        .split_once('@')
        .ok_or_else(|| invalid("must contain '@'"))?;

    if local.is_empty() || domain.contains('@') {
        return Err(invalid("must be of the form name@domain"));
    }

    if !domain.contains('.') || domain.split('.').any(str::is_empty) {
        return Err(invalid("domain must look like example.com"));
    }

    Ok(email)
}

/// Validates a plaintext password before hashing.
///
/// ## Rules
/// - Between MIN_PASSWORD_LENGTH (6) and MAX_PASSWORD_LENGTH (128) characters
/// - Not trimmed: surrounding spaces are part of the password
pub fn validate_password(password: &str) -> ValidationResult<()> {
    let len = password.chars().count();

    if len == 0 {
        return Err(ValidationError::Required {
            field: "password".to_string(),
        });
    }

    if len < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::TooShort {
            field: "password".to_string(),
            min: MIN_PASSWORD_LENGTH,
        });
    }

    if len > MAX_PASSWORD_LENGTH {
        return Err(ValidationError::TooLong {
            field: "password".to_string(),
            max: MAX_PASSWORD_LENGTH,
        });
    }

    Ok(())
}

/// Validates an optional display name. Blank names become `None`.
pub fn validate_full_name(full_name: Option<&str>) -> ValidationResult<Option<String>> {
    match full_name.map(str::trim) {
        None | Some("") => Ok(None),
        Some(name) => {
            max_len("full_name", name, 100)?;
            Ok(Some(name.to_string()))
        }
    }
}

// =============================================================================
// Vehicle Validators
// =============================================================================

/// Validates a vehicle name (required, at most 100 characters).
pub fn validate_vehicle_name(name: &str) -> ValidationResult<String> {
    let name = required("name", name)?;
    max_len("name", &name, 100)?;
    Ok(name)
}

/// Validates a vehicle category tag. Tags are stored lower-cased.
///
/// ## Example
/// ```rust
/// use ridehub_core::validation::validate_vehicle_type;
///
/// assert_eq!(validate_vehicle_type("Scooter").unwrap(), "scooter");
/// assert!(validate_vehicle_type("").is_err());
/// ```
pub fn validate_vehicle_type(vehicle_type: &str) -> ValidationResult<String> {
    let vehicle_type = required("vehicle_type", vehicle_type)?.to_lowercase();
    max_len("vehicle_type", &vehicle_type, 50)?;
    Ok(vehicle_type)
}

/// Validates an optional description. Blank descriptions become `None`.
pub fn validate_description(description: Option<&str>) -> ValidationResult<Option<String>> {
    match description.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => {
            max_len("description", text, 1000)?;
            Ok(Some(text.to_string()))
        }
    }
}

/// Converts and validates a decimal amount (price or cost).
///
/// ## Rules
/// - Must be a finite number
/// - Must be non-negative (zero is allowed: free rides exist)
///
/// ## Example
/// ```rust
/// use ridehub_core::validation::validate_amount;
///
/// assert_eq!(validate_amount("price_per_hour", 7.5).unwrap().cents(), 750);
/// assert!(validate_amount("price_per_hour", -1.0).is_err());
/// ```
pub fn validate_amount(field: &str, amount: f64) -> ValidationResult<Money> {
    let money = Money::from_decimal(amount).ok_or_else(|| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: "must be a finite number".to_string(),
    })?;

    if money.is_negative() {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }

    Ok(money)
}

// =============================================================================
// Rental Validators
// =============================================================================

/// Validates that a rental window is not inverted.
///
/// An open rental (`end_time = None`) is always valid. A zero-length
/// rental is allowed.
pub fn validate_rental_window(
    start_time: NaiveDateTime,
    end_time: Option<NaiveDateTime>,
) -> ValidationResult<()> {
    if let Some(end_time) = end_time {
        if end_time < start_time {
            return Err(ValidationError::InvertedWindow {
                start: "start_time".to_string(),
                end: "end_time".to_string(),
            });
        }
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
