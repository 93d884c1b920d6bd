//! Vehicle catalog service.

use std::sync::Arc;

use tracing::info;

use ridehub_core::validation::{
    validate_amount, validate_description, validate_vehicle_name, validate_vehicle_type,
};
use ridehub_core::{CoreError, NewVehicle, Vehicle, VehiclePatch};
use ridehub_db::DbError;

use crate::dto::{VehicleCreate, VehicleUpdate};
use crate::error::ApiResult;
use crate::AppState;

/// Vehicle service implementation.
pub struct VehicleService {
    state: Arc<AppState>,
}

impl VehicleService {
    /// Create a new vehicle service.
    pub fn new(state: Arc<AppState>) -> Self {
        VehicleService { state }
    }

    /// Lists the whole catalog.
    pub async fn list(&self) -> ApiResult<Vec<Vehicle>> {
        Ok(self.state.db.vehicles().list().await?)
    }

    /// Gets one vehicle (404 if missing).
    pub async fn get(&self, vehicle_id: i64) -> ApiResult<Vehicle> {
        let vehicle = self
            .state
            .db
            .vehicles()
            .get_by_id(vehicle_id)
            .await?
            .ok_or(CoreError::VehicleNotFound(vehicle_id))?;
        Ok(vehicle)
    }

    /// Adds a vehicle to the catalog.
    pub async fn create(&self, request: VehicleCreate) -> ApiResult<Vehicle> {
        let draft = NewVehicle {
            name: validate_vehicle_name(&request.name).map_err(CoreError::from)?,
            vehicle_type: validate_vehicle_type(&request.vehicle_type).map_err(CoreError::from)?,
            description: validate_description(request.description.as_deref())
                .map_err(CoreError::from)?,
            price_per_hour: validate_amount("price_per_hour", request.price_per_hour)
                .map_err(CoreError::from)?,
            available: request.available,
        };

        let vehicle = self.state.db.vehicles().insert(&draft).await?;
        info!(vehicle_id = vehicle.id, name = %vehicle.name, "Vehicle created");
        Ok(vehicle)
    }

    /// Applies a partial update; absent fields keep their value.
    pub async fn update(&self, vehicle_id: i64, request: VehicleUpdate) -> ApiResult<Vehicle> {
        let current = self.get(vehicle_id).await?;

        let patch = VehiclePatch {
            name: request
                .name
                .as_deref()
                .map(validate_vehicle_name)
                .transpose()
                .map_err(CoreError::from)?,
            vehicle_type: request
                .vehicle_type
                .as_deref()
                .map(validate_vehicle_type)
                .transpose()
                .map_err(CoreError::from)?,
            // A blank description clears it
            description: request
                .description
                .as_deref()
                .map(|text| validate_description(Some(text)))
                .transpose()
                .map_err(CoreError::from)?,
            price_per_hour: request
                .price_per_hour
                .map(|price| validate_amount("price_per_hour", price))
                .transpose()
                .map_err(CoreError::from)?,
            available: request.available,
        };

        let vehicle = self.state.db.vehicles().update(&patch.apply(current)).await?;
        info!(vehicle_id, "Vehicle updated");
        Ok(vehicle)
    }

    /// Removes a vehicle. Refused while rentals still reference it.
    pub async fn delete(&self, vehicle_id: i64) -> ApiResult<()> {
        match self.state.db.vehicles().delete(vehicle_id).await {
            Ok(()) => {
                info!(vehicle_id, "Vehicle deleted");
                Ok(())
            }
            Err(DbError::NotFound { .. }) => Err(CoreError::VehicleNotFound(vehicle_id).into()),
            Err(DbError::ForeignKeyViolation { .. }) => {
                Err(CoreError::VehicleInUse(vehicle_id).into())
            }
            Err(e) => Err(e.into()),
        }
    }
}
