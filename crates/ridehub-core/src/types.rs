//! # Domain Types
//!
//! Core domain types used throughout RideHub.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      User       │   │     Rental      │   │    Vehicle      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │◄──│  user_id (FK)   │   │  id             │       │
//! │  │  username (UQ)  │   │  vehicle_id(FK) │──►│  name           │       │
//! │  │  email (UQ)     │   │  start_time     │   │  vehicle_type   │       │
//! │  │  password_hash  │   │  end_time?      │   │  price/hour     │       │
//! │  │  is_active      │   │  total_cost?    │   │  available      │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  User ──(ON DELETE CASCADE)──► Rental ◄──(ON DELETE RESTRICT)── Vehicle │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Entities vs Drafts vs Patches
//! - Entity (`User`, `Vehicle`, `Rental`): a persisted row, always has an `id`
//! - Draft (`NewUser`, `NewVehicle`, `NewRental`): validated input for an insert
//! - Patch (`ProfileChanges`, `VehiclePatch`, `RentalPatch`): partial update,
//!   `None` means "leave unchanged"

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::money::Money;

// =============================================================================
// User
// =============================================================================

/// A registered account.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct User {
    /// Primary key.
    pub id: i64,

    /// Unique login handle.
    pub username: String,

    /// Unique email, stored lower-cased.
    pub email: String,

    /// Display name.
    pub full_name: Option<String>,

    /// Argon2 PHC string. Never leaves the server.
    pub password_hash: String,

    /// Inactive users cannot authenticate.
    pub is_active: bool,

    /// When the account was created.
    pub created_at: DateTime<Utc>,

    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a user. The password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
    pub password_hash: String,
}

/// Partial profile update sent by the account owner.
#[derive(Debug, Clone, Default)]
pub struct ProfileChanges {
    pub username: Option<String>,
    pub email: Option<String>,
    pub full_name: Option<String>,
}

impl ProfileChanges {
    /// Returns `user` with every provided field replaced.
    pub fn apply(self, mut user: User) -> User {
        if let Some(username) = self.username {
            user.username = username;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(full_name) = self.full_name {
            user.full_name = Some(full_name);
        }
        user
    }
}

// =============================================================================
// Vehicle
// =============================================================================

/// A rentable bike, scooter or similar.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Vehicle {
    /// Primary key.
    pub id: i64,

    /// Display name ("City Bike").
    pub name: String,

    /// Category tag ("bike", "scooter", ...).
    pub vehicle_type: String,

    /// Optional free-text description.
    pub description: Option<String>,

    /// Hourly price in cents.
    pub price_per_hour_cents: i64,

    /// Whether new rentals may be opened for this vehicle.
    pub available: bool,

    /// When the vehicle was added to the catalog.
    pub created_at: DateTime<Utc>,

    /// When the vehicle was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Vehicle {
    /// Returns the hourly price as a Money type.
    #[inline]
    pub fn price_per_hour(&self) -> Money {
        Money::from_cents(self.price_per_hour_cents)
    }
}

/// Input for adding a vehicle to the catalog.
#[derive(Debug, Clone)]
pub struct NewVehicle {
    pub name: String,
    pub vehicle_type: String,
    pub description: Option<String>,
    pub price_per_hour: Money,
    pub available: bool,
}

/// Partial vehicle update.
///
/// `description: Some(None)` clears the description.
#[derive(Debug, Clone, Default)]
pub struct VehiclePatch {
    pub name: Option<String>,
    pub vehicle_type: Option<String>,
    pub description: Option<Option<String>>,
    pub price_per_hour: Option<Money>,
    pub available: Option<bool>,
}

impl VehiclePatch {
    /// Returns `vehicle` with every provided field replaced.
    pub fn apply(self, mut vehicle: Vehicle) -> Vehicle {
        if let Some(name) = self.name {
            vehicle.name = name;
        }
        if let Some(vehicle_type) = self.vehicle_type {
            vehicle.vehicle_type = vehicle_type;
        }
        if let Some(description) = self.description {
            vehicle.description = description;
        }
        if let Some(price) = self.price_per_hour {
            vehicle.price_per_hour_cents = price.cents();
        }
        if let Some(available) = self.available {
            vehicle.available = available;
        }
        vehicle
    }
}

// =============================================================================
// Rental
// =============================================================================

/// A user renting a vehicle over a time interval.
///
/// `start_time`/`end_time` are wall-clock times in UTC without an offset,
/// matching the `2023-10-01T10:00:00` wire format.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Rental {
    /// Primary key.
    pub id: i64,

    /// Renter.
    pub user_id: i64,

    /// Rented vehicle.
    pub vehicle_id: i64,

    /// When the rental starts.
    pub start_time: NaiveDateTime,

    /// When the rental ended; `None` while it is still open.
    pub end_time: Option<NaiveDateTime>,

    /// Final cost in cents, once known.
    pub total_cost_cents: Option<i64>,

    /// When the row was created.
    pub created_at: DateTime<Utc>,
}

impl Rental {
    /// Returns the total cost as a Money type, if set.
    #[inline]
    pub fn total_cost(&self) -> Option<Money> {
        self.total_cost_cents.map(Money::from_cents)
    }

    /// Whether the rental has not been closed yet.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.end_time.is_none()
    }
}

/// Input for opening a rental.
#[derive(Debug, Clone)]
pub struct NewRental {
    pub user_id: i64,
    pub vehicle_id: i64,
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    pub total_cost: Option<Money>,
}

/// Partial rental update (closing a rental, correcting its cost).
#[derive(Debug, Clone, Default)]
pub struct RentalPatch {
    pub end_time: Option<NaiveDateTime>,
    pub total_cost: Option<Money>,
}

impl RentalPatch {
    /// Returns `rental` with every provided field replaced.
    pub fn apply(self, mut rental: Rental) -> Rental {
        if let Some(end_time) = self.end_time {
            rental.end_time = Some(end_time);
        }
        if let Some(cost) = self.total_cost {
            rental.total_cost_cents = Some(cost.cents());
        }
        rental
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 10, 1)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn bike() -> Vehicle {
        Vehicle {
            id: 1,
            name: "City Bike".to_string(),
            vehicle_type: "bike".to_string(),
            description: None,
            price_per_hour_cents: 500,
            available: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_vehicle_patch_only_touches_provided_fields() {
        let patch = VehiclePatch {
            available: Some(false),
            price_per_hour: Some(Money::from_cents(600)),
            ..Default::default()
        };

        let updated = patch.apply(bike());
        assert!(!updated.available);
        assert_eq!(updated.description, None);
        assert_eq!(updated.price_per_hour().cents(), 600);
        assert_eq!(updated.name, "City Bike");
        assert_eq!(updated.vehicle_type, "bike");
    }

    #[test]
    fn test_vehicle_patch_sets_and_clears_description() {
        let described = VehiclePatch {
            description: Some(Some("Step-through frame".to_string())),
            ..Default::default()
        }
        .apply(bike());
        assert_eq!(described.description.as_deref(), Some("Step-through frame"));

        let cleared = VehiclePatch {
            description: Some(None),
            ..Default::default()
        }
        .apply(described.clone());
        assert_eq!(cleared.description, None);

        let untouched = VehiclePatch::default().apply(described);
        assert_eq!(untouched.description.as_deref(), Some("Step-through frame"));
    }

    #[test]
    fn test_rental_patch_closes_rental() {
        let rental = Rental {
            id: 1,
            user_id: 1,
            vehicle_id: 1,
            start_time: at(10),
            end_time: None,
            total_cost_cents: None,
            created_at: Utc::now(),
        };
        assert!(rental.is_open());

        let closed = RentalPatch {
            end_time: Some(at(13)),
            total_cost: None,
        }
        .apply(rental);

        assert!(!closed.is_open());
        assert_eq!(closed.end_time, Some(at(13)));
        assert_eq!(closed.total_cost(), None);
    }

    #[test]
    fn test_profile_changes_keep_unset_fields() {
        let user = User {
            id: 3,
            username: "rider".to_string(),
            email: "rider@example.com".to_string(),
            full_name: Some("Rider One".to_string()),
            password_hash: "hash".to_string(),
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let updated = ProfileChanges {
            email: Some("new@example.com".to_string()),
            ..Default::default()
        }
        .apply(user);

        assert_eq!(updated.email, "new@example.com");
        assert_eq!(updated.username, "rider");
        assert_eq!(updated.full_name.as_deref(), Some("Rider One"));
    }
}
