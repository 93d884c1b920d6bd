//! Request and response bodies.
//!
//! Money crosses the wire as a decimal number (`5.0`) and is stored as cents;
//! the conversion happens here and in the services, nowhere else. Rental times
//! use the `2023-10-01T10:00:00` format (UTC, no offset).

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use ridehub_core::access::is_admin_email;
use ridehub_core::{Rental, User, Vehicle};

// =============================================================================
// Users
// =============================================================================

/// `POST /users/register`
#[derive(Debug, Deserialize)]
pub struct UserCreate {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub full_name: Option<String>,
}

/// `POST /users/login` (form-encoded). `username` may be an email.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Successful login.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
    /// Seconds until the token expires
    pub expires_in: i64,
}

/// `PATCH /users/me`
#[derive(Debug, Default, Deserialize)]
pub struct UserUpdate {
    pub username: Option<String>,
    pub email: Option<String>,
    pub full_name: Option<String>,
}

/// `POST /users/me/password`
#[derive(Debug, Deserialize)]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
}

/// Public view of an account. The password hash never leaves the server.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
    pub is_active: bool,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

impl UserResponse {
    pub fn from_user(user: User, admin_email: &str) -> Self {
        UserResponse {
            is_admin: is_admin_email(&user.email, admin_email),
            id: user.id,
            username: user.username,
            email: user.email,
            full_name: user.full_name,
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}

// =============================================================================
// Vehicles
// =============================================================================

/// `POST /vehicles/`
#[derive(Debug, Deserialize)]
pub struct VehicleCreate {
    pub name: String,
    pub vehicle_type: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price_per_hour: f64,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

/// `PUT /vehicles/{id}`; absent fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct VehicleUpdate {
    pub name: Option<String>,
    pub vehicle_type: Option<String>,
    pub description: Option<String>,
    pub price_per_hour: Option<f64>,
    pub available: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: i64,
    pub name: String,
    pub vehicle_type: String,
    pub description: Option<String>,
    pub price_per_hour: f64,
    pub available: bool,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        VehicleResponse {
            price_per_hour: vehicle.price_per_hour().to_decimal(),
            id: vehicle.id,
            name: vehicle.name,
            vehicle_type: vehicle.vehicle_type,
            description: vehicle.description,
            available: vehicle.available,
        }
    }
}

// =============================================================================
// Rentals
// =============================================================================

/// `POST /rentals/`. `user_id` defaults to the caller.
#[derive(Debug, Deserialize)]
pub struct RentalCreate {
    pub vehicle_id: i64,
    pub start_time: NaiveDateTime,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub end_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub total_cost: Option<f64>,
}

/// `PUT /rentals/{id}`
#[derive(Debug, Default, Deserialize)]
pub struct RentalUpdate {
    pub end_time: Option<NaiveDateTime>,
    pub total_cost: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct RentalResponse {
    pub id: i64,
    pub user_id: i64,
    pub vehicle_id: i64,
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    pub total_cost: Option<f64>,
}

impl From<Rental> for RentalResponse {
    fn from(rental: Rental) -> Self {
        RentalResponse {
            total_cost: rental.total_cost().map(|cost| cost.to_decimal()),
            id: rental.id,
            user_id: rental.user_id,
            vehicle_id: rental.vehicle_id,
            start_time: rental.start_time,
            end_time: rental.end_time,
        }
    }
}
