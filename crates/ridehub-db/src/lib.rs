//! # ridehub-db: Database Layer for RideHub
//!
//! This crate provides database access for the RideHub rental backend.
//! It uses SQLite with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        RideHub Data Flow                                │
//! │                                                                         │
//! │  HTTP handler (POST /rentals)                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  RentalService (apps/api)                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    ridehub-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │               │    │  (embedded)  │  │   │
//! │  │   │               │    │ UserRepo      │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ VehicleRepo   │    │ 001_initial  │  │   │
//! │  │   │ WAL + FKs     │    │ RentalRepo    │    │ _schema.sql  │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite database (db/app.db by default)                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (user, vehicle, rental)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ridehub_db::{Database, DbConfig};
//!
//! // Connect and migrate
//! let db = Database::new(DbConfig::from_url("sqlite://db/app.db")).await?;
//!
//! // Use repositories
//! let vehicles = db.vehicles().list().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig, DEFAULT_DATABASE_URL};

// Repository re-exports for convenience
pub use repository::rental::RentalRepository;
pub use repository::user::UserRepository;
pub use repository::vehicle::VehicleRepository;
