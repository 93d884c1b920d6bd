//! Health check service.
//!
//! Reports whether the database answers and how far its migrations got.

use std::sync::Arc;

use serde::Serialize;
use tracing::warn;

use crate::AppState;

/// Overall serving status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServingStatus {
    Ok,
    Degraded,
}

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: ServingStatus,
    pub database: &'static str,
    pub migrations_applied: usize,
    pub migrations_total: usize,
    pub version: &'static str,
}

/// Health service implementation.
pub struct HealthService {
    state: Arc<AppState>,
}

impl HealthService {
    /// Create a new health service.
    pub fn new(state: Arc<AppState>) -> Self {
        HealthService { state }
    }

    /// Probes the database.
    pub async fn check(&self) -> HealthReport {
        let reachable = self.state.db.health_check().await;

        let (migrations_total, migrations_applied) = if reachable {
            self.state.db.migration_status().await.unwrap_or((0, 0))
        } else {
            warn!("Health check: database unreachable");
            (0, 0)
        };

        HealthReport {
            status: if reachable {
                ServingStatus::Ok
            } else {
                ServingStatus::Degraded
            },
            database: if reachable { "ok" } else { "unreachable" },
            migrations_applied,
            migrations_total,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}
