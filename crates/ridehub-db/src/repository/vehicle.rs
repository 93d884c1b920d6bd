//! # Vehicle Repository
//!
//! Database operations for the vehicle catalog.
//!
//! Vehicles referenced by rentals cannot be deleted: the `rentals.vehicle_id`
//! foreign key is `ON DELETE RESTRICT`, which surfaces here as
//! `DbError::ForeignKeyViolation`.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use ridehub_core::{NewVehicle, Vehicle};

/// Repository for vehicle database operations.
#[derive(Debug, Clone)]
pub struct VehicleRepository {
    pool: SqlitePool,
}

impl VehicleRepository {
    /// Creates a new VehicleRepository.
    pub fn new(pool: SqlitePool) -> Self {
        VehicleRepository { pool }
    }

    /// Inserts a new vehicle and returns it with its generated id.
    pub async fn insert(&self, vehicle: &NewVehicle) -> DbResult<Vehicle> {
        debug!(name = %vehicle.name, "Inserting vehicle");

        let now = Utc::now();

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (
                name, vehicle_type, description, price_per_hour_cents,
                available, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)
            RETURNING *
            "#,
        )
        .bind(&vehicle.name)
        .bind(&vehicle.vehicle_type)
        .bind(&vehicle.description)
        .bind(vehicle.price_per_hour.cents())
        .bind(vehicle.available)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    /// Gets a vehicle by id.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Vehicle>> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    /// Lists the whole catalog ordered by id.
    pub async fn list(&self) -> DbResult<Vec<Vehicle>> {
        let vehicles = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        debug!(count = vehicles.len(), "Listed vehicles");
        Ok(vehicles)
    }

    /// Writes every mutable field of `vehicle`.
    ///
    /// ## Returns
    /// * `Ok(Vehicle)` - The stored row after the update
    /// * `Err(DbError::NotFound)` - Vehicle doesn't exist
    pub async fn update(&self, vehicle: &Vehicle) -> DbResult<Vehicle> {
        debug!(id = vehicle.id, "Updating vehicle");

        let updated = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles SET
                name = ?2,
                vehicle_type = ?3,
                description = ?4,
                price_per_hour_cents = ?5,
                available = ?6,
                updated_at = ?7
            WHERE id = ?1
            RETURNING *
            "#,
        )
        .bind(vehicle.id)
        .bind(&vehicle.name)
        .bind(&vehicle.vehicle_type)
        .bind(&vehicle.description)
        .bind(vehicle.price_per_hour_cents)
        .bind(vehicle.available)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        updated.ok_or_else(|| DbError::not_found("Vehicle", vehicle.id))
    }

    /// Deletes a vehicle.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - Vehicle doesn't exist
    /// * `Err(DbError::ForeignKeyViolation)` - Vehicle still has rentals
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id = id, "Deleting vehicle");

        let result = sqlx::query("DELETE FROM vehicles WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Vehicle", id));
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
