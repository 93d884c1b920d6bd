//! # Rental Repository
//!
//! Database operations for rentals.
//!
//! ## Referential Integrity
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  INSERT rental (user_id = 99)      → ForeignKeyViolation (no user 99)  │
//! │  DELETE FROM users WHERE id = 7    → user 7's rentals deleted too      │
//! │  DELETE FROM vehicles WHERE id = 3 → ForeignKeyViolation if rented     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use ridehub_core::{NewRental, Rental};

/// Repository for rental database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.rentals();
///
/// let mine = repo.list_for_user(caller.user_id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct RentalRepository {
    pool: SqlitePool,
}

impl RentalRepository {
    /// Creates a new RentalRepository.
    pub fn new(pool: SqlitePool) -> Self {
        RentalRepository { pool }
    }

    /// Inserts a new rental.
    ///
    /// ## Returns
    /// * `Ok(Rental)` - Inserted rental with its generated id
    /// * `Err(DbError::ForeignKeyViolation)` - user or vehicle doesn't exist
    pub async fn insert(&self, rental: &NewRental) -> DbResult<Rental> {
        debug!(
            user_id = rental.user_id,
            vehicle_id = rental.vehicle_id,
            "Inserting rental"
        );

        let rental = sqlx::query_as::<_, Rental>(
            r#"
            INSERT INTO rentals (
                user_id, vehicle_id, start_time, end_time,
                total_cost_cents, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            RETURNING *
            "#,
        )
        .bind(rental.user_id)
        .bind(rental.vehicle_id)
        .bind(rental.start_time)
        .bind(rental.end_time)
        .bind(rental.total_cost.map(|cost| cost.cents()))
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(rental)
    }

    /// Gets a rental by id.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Rental>> {
        let rental = sqlx::query_as::<_, Rental>("SELECT * FROM rentals WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(rental)
    }

    /// Lists every rental, most recent start first.
    pub async fn list_all(&self) -> DbResult<Vec<Rental>> {
        let rentals = sqlx::query_as::<_, Rental>(
            "SELECT * FROM rentals ORDER BY start_time DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rentals)
    }

    /// Lists the rentals of one user, most recent start first.
    pub async fn list_for_user(&self, user_id: i64) -> DbResult<Vec<Rental>> {
        let rentals = sqlx::query_as::<_, Rental>(
            "SELECT * FROM rentals WHERE user_id = ?1 ORDER BY start_time DESC, id DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        debug!(user_id = user_id, count = rentals.len(), "Listed rentals");
        Ok(rentals)
    }

    /// Writes `end_time` and `total_cost_cents` of `rental`.
    ///
    /// Owner, vehicle and start time are fixed once a rental exists.
    pub async fn update(&self, rental: &Rental) -> DbResult<Rental> {
        debug!(id = rental.id, "Updating rental");

        let updated = sqlx::query_as::<_, Rental>(
            r#"
            UPDATE rentals SET
                end_time = ?2,
                total_cost_cents = ?3
            WHERE id = ?1
            RETURNING *
            "#,
        )
        .bind(rental.id)
        .bind(rental.end_time)
        .bind(rental.total_cost_cents)
        .fetch_optional(&self.pool)
        .await?;

        updated.ok_or_else(|| DbError::not_found("Rental", rental.id))
    }

    /// Deletes a rental.
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id = id, "Deleting rental");

        let result = sqlx::query("DELETE FROM rentals WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Rental", id));
        }

        Ok(())
    }

    /// Counts the rentals of one user.
    pub async fn count_for_user(&self, user_id: i64) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM rentals WHERE user_id = ?1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig};
    use chrono::{NaiveDate, NaiveDateTime};
    use ridehub_core::{Money, NewUser, NewVehicle, User, Vehicle};

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 10, 1)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    async fn setup() -> (Database, User, Vehicle) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let user = db
            .users()
            .insert(&NewUser {
                username: "tester".to_string(),
                email: "tester@example.com".to_string(),
                full_name: None,
                password_hash: "$argon2id$fake".to_string(),
            })
            .await
            .unwrap();

        let vehicle = db
            .vehicles()
            .insert(&NewVehicle {
                name: "City Bike".to_string(),
                vehicle_type: "bike".to_string(),
                description: None,
                price_per_hour: Money::from_cents(500),
                available: true,
            })
            .await
            .unwrap();

        (db, user, vehicle)
    }

    fn draft(user_id: i64, vehicle_id: i64) -> NewRental {
        NewRental {
            user_id,
            vehicle_id,
            start_time: at(10),
            end_time: None,
            total_cost: None,
        }
    }

    #[tokio::test]
    async fn test_rental_crud() {
        let (db, user, vehicle) = setup().await;
        let repo = db.rentals();

        let rental = repo.insert(&draft(user.id, vehicle.id)).await.unwrap();
        assert_eq!(rental.start_time, at(10));
        assert!(rental.is_open());

        let mut closed = rental.clone();
        closed.end_time = Some(at(12));
        closed.total_cost_cents = Some(1000);
        let updated = repo.update(&closed).await.unwrap();
        assert_eq!(updated.end_time, Some(at(12)));
        assert_eq!(updated.total_cost_cents, Some(1000));

        let fetched = repo.get_by_id(rental.id).await.unwrap().unwrap();
        assert_eq!(fetched, updated);

        repo.delete(rental.id).await.unwrap();
        assert!(repo.get_by_id(rental.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_missing_references_violate_foreign_keys() {
        let (db, user, vehicle) = setup().await;

        let err = db
            .rentals()
            .insert(&draft(user.id, vehicle.id + 50))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));

        let err = db
            .rentals()
            .insert(&draft(user.id + 50, vehicle.id))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));
    }

    #[tokio::test]
    async fn test_deleting_user_cascades_to_rentals() {
        let (db, user, vehicle) = setup().await;
        db.rentals().insert(&draft(user.id, vehicle.id)).await.unwrap();
        db.rentals().insert(&draft(user.id, vehicle.id)).await.unwrap();
        assert_eq!(db.rentals().count_for_user(user.id).await.unwrap(), 2);

        db.users().delete(user.id).await.unwrap();

        assert_eq!(db.rentals().count_for_user(user.id).await.unwrap(), 0);
        assert!(db.rentals().list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rented_vehicle_cannot_be_deleted() {
        let (db, user, vehicle) = setup().await;
        db.rentals().insert(&draft(user.id, vehicle.id)).await.unwrap();

        let err = db.vehicles().delete(vehicle.id).await.unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));
    }

    #[tokio::test]
    async fn test_list_for_user_filters_and_orders() {
        let (db, user, vehicle) = setup().await;
        let other = db
            .users()
            .insert(&NewUser {
                username: "other".to_string(),
                email: "other@example.com".to_string(),
                full_name: None,
                password_hash: "$argon2id$fake".to_string(),
            })
            .await
            .unwrap();

        let early = db.rentals().insert(&draft(user.id, vehicle.id)).await.unwrap();
        let mut later_draft = draft(user.id, vehicle.id);
        later_draft.start_time = at(15);
        let later = db.rentals().insert(&later_draft).await.unwrap();
        db.rentals().insert(&draft(other.id, vehicle.id)).await.unwrap();

        let mine = db.rentals().list_for_user(user.id).await.unwrap();
        let ids: Vec<i64> = mine.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![later.id, early.id]);

        assert_eq!(db.rentals().list_all().await.unwrap().len(), 3);
    }
}
