//! Rental service.
//!
//! ## Opening a Rental
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  POST /rentals  {vehicle_id, start_time, user_id?, end_time?, cost?}    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  renter  = caller.resolve_renter(user_id)     other user → 403 unless  │
//! │                                               admin; unknown → 400     │
//! │  vehicle = vehicles.get(vehicle_id)           unknown → 400            │
//! │                                               unavailable → 400        │
//! │  window  = start ≤ end                        inverted → 400           │
//! │  cost    = explicit total_cost                                         │
//! │          | pricing::rental_cost(price, start, end)  when end is known  │
//! │          | none (open rental)                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  rentals.insert  (FKs re-check user/vehicle)                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Reads, updates and deletes require the caller to own the rental or be the
//! admin (403 otherwise).

use std::sync::Arc;

use tracing::info;

use ridehub_core::pricing::rental_cost;
use ridehub_core::validation::{validate_amount, validate_rental_window};
use ridehub_core::{Caller, CoreError, Money, NewRental, Rental, RentalPatch};

use crate::dto::{RentalCreate, RentalUpdate};
use crate::error::ApiResult;
use crate::AppState;

/// Rental service implementation.
pub struct RentalService {
    state: Arc<AppState>,
}

impl RentalService {
    /// Create a new rental service.
    pub fn new(state: Arc<AppState>) -> Self {
        RentalService { state }
    }

    /// Opens (or records) a rental.
    pub async fn create(&self, caller: &Caller, request: RentalCreate) -> ApiResult<Rental> {
        let user_id = caller.resolve_renter(request.user_id)?;
        if user_id != caller.user_id && self.state.db.users().get_by_id(user_id).await?.is_none() {
            return Err(CoreError::unknown_reference("User", user_id).into());
        }

        let vehicle = self
            .state
            .db
            .vehicles()
            .get_by_id(request.vehicle_id)
            .await?
            .ok_or_else(|| CoreError::unknown_reference("Vehicle", request.vehicle_id))?;

        if !vehicle.available {
            return Err(CoreError::VehicleUnavailable(vehicle.id).into());
        }

        validate_rental_window(request.start_time, request.end_time).map_err(CoreError::from)?;

        let total_cost = match (parse_cost(request.total_cost)?, request.end_time) {
            (Some(cost), _) => Some(cost),
            (None, Some(end_time)) => Some(rental_cost(
                vehicle.price_per_hour(),
                request.start_time,
                end_time,
            )?),
            (None, None) => None,
        };

        let rental = self
            .state
            .db
            .rentals()
            .insert(&NewRental {
                user_id,
                vehicle_id: vehicle.id,
                start_time: request.start_time,
                end_time: request.end_time,
                total_cost,
            })
            .await?;

        info!(
            rental_id = rental.id,
            user_id,
            vehicle_id = vehicle.id,
            "Rental created"
        );
        Ok(rental)
    }

    /// Gets a rental the caller may see.
    pub async fn get(&self, caller: &Caller, rental_id: i64) -> ApiResult<Rental> {
        let rental = self
            .state
            .db
            .rentals()
            .get_by_id(rental_id)
            .await?
            .ok_or(CoreError::RentalNotFound(rental_id))?;

        caller.require_owner(&rental)?;
        Ok(rental)
    }

    /// The admin sees every rental; everyone else sees their own.
    pub async fn list(&self, caller: &Caller) -> ApiResult<Vec<Rental>> {
        let rentals = self.state.db.rentals();
        let list = if caller.is_admin {
            rentals.list_all().await?
        } else {
            rentals.list_for_user(caller.user_id).await?
        };
        Ok(list)
    }

    /// Closes a rental or corrects its cost.
    ///
    /// Without an explicit `total_cost`, a new `end_time` (or a closed rental
    /// that has no cost yet) is priced from the vehicle's hourly rate.
    pub async fn update(
        &self,
        caller: &Caller,
        rental_id: i64,
        request: RentalUpdate,
    ) -> ApiResult<Rental> {
        let current = self.get(caller, rental_id).await?;

        let patch = RentalPatch {
            end_time: request.end_time,
            total_cost: parse_cost(request.total_cost)?,
        };
        let reprice = patch.total_cost.is_none()
            && (patch.end_time.is_some() || current.total_cost_cents.is_none());
        let mut rental = patch.apply(current);

        validate_rental_window(rental.start_time, rental.end_time).map_err(CoreError::from)?;

        if let (true, Some(end_time)) = (reprice, rental.end_time) {
            if let Some(vehicle) = self.state.db.vehicles().get_by_id(rental.vehicle_id).await? {
                let cost = rental_cost(vehicle.price_per_hour(), rental.start_time, end_time)?;
                rental.total_cost_cents = Some(cost.cents());
            }
        }

        let updated = self.state.db.rentals().update(&rental).await?;
        info!(rental_id, "Rental updated");
        Ok(updated)
    }

    /// Deletes a rental the caller may act on.
    pub async fn delete(&self, caller: &Caller, rental_id: i64) -> ApiResult<()> {
        let rental = self.get(caller, rental_id).await?;
        self.state.db.rentals().delete(rental.id).await?;
        info!(rental_id, deleted_by = caller.user_id, "Rental deleted");
        Ok(())
    }
}

fn parse_cost(total_cost: Option<f64>) -> ApiResult<Option<Money>> {
    let cost = total_cost
        .map(|cost| validate_amount("total_cost", cost))
        .transpose()
        .map_err(CoreError::from)?;
    Ok(cost)
}
