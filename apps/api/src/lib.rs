//! # RideHub API
//!
//! REST server for the bike and scooter rental backend.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         RideHub API Services                            │
//! │                                                                         │
//! │  ┌────────────────┐  ┌────────────────┐  ┌────────────────────────────┐│
//! │  │  /users        │  │  /vehicles     │  │  /rentals                  ││
//! │  │                │  │                │  │                            ││
//! │  │ • register     │  │ • list / get   │  │ • list (own / all)         ││
//! │  │ • login        │  │ • create 🔒    │  │ • create / get 🔒          ││
//! │  │ • me / profile │  │ • update 🔒    │  │ • update / delete 🔒       ││
//! │  │ • list/delete👑│  │ • delete 🔒    │  │   (owner or admin)         ││
//! │  └───────┬────────┘  └───────┬────────┘  └─────────────┬──────────────┘│
//! │          ▼                   ▼                         ▼               │
//! │     UserService        VehicleService           RentalService          │
//! │          │                   │                         │               │
//! │  ┌───────▼───────────────────▼─────────────────────────▼────────────┐  │
//! │  │                      Infrastructure                               │  │
//! │  │  ┌──────────────┐  ┌──────────────────┐  ┌─────────────────────┐ │  │
//! │  │  │  ridehub-db  │  │  ridehub-core    │  │  auth               │ │  │
//! │  │  │  SQLite      │  │  rules, pricing  │  │  argon2 + JWT       │ │  │
//! │  │  └──────────────┘  └──────────────────┘  └─────────────────────┘ │  │
//! │  └───────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables (see [`config::ApiConfig`]):
//! - `HOST`, `PORT` - Listener address (default: 0.0.0.0:8000)
//! - `DATABASE_URL` - sqlx connection string (default: sqlite://db/app.db)
//! - `SECRET_KEY` - Secret for JWT signing
//! - `ACCESS_TOKEN_EXPIRE_MINUTES` - Access token lifetime (default: 30)
//! - `ADMIN_EMAIL` - Email of the admin account
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)

pub mod auth;
pub mod config;
pub mod dto;
pub mod error;
pub mod extract;
pub mod routes;
pub mod services;

use ridehub_db::{Database, DbConfig};

use crate::auth::JwtManager;

// Re-exports
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::build_router;

/// Shared application state.
pub struct AppState {
    pub db: Database,
    pub config: ApiConfig,
    pub jwt: JwtManager,
}

impl AppState {
    /// Builds the state around an open database.
    pub fn new(db: Database, config: ApiConfig) -> Self {
        let jwt = JwtManager::new(
            config.secret_key.clone(),
            config.access_token_lifetime_secs(),
        );
        AppState { db, config, jwt }
    }

    /// Opens the configured database (running migrations) and builds the state.
    pub async fn connect(config: ApiConfig) -> ApiResult<Self> {
        let db_config =
            DbConfig::from_url(config.database_url.clone()).max_connections(config.db_max_connections);
        let db = Database::new(db_config).await?;
        Ok(AppState::new(db, config))
    }
}
