//! # Repository Module
//!
//! Database repository implementations for RideHub.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Service (apps/api)                                                    │
//! │       │                                                                 │
//! │       │  db.rentals().list_for_user(7)                                 │
//! │       ▼                                                                 │
//! │  RentalRepository                                                      │
//! │  ├── insert(&self, draft)          → Rental (with generated id)        │
//! │  ├── get_by_id(&self, id)          → Option<Rental>                    │
//! │  ├── update(&self, rental)         → Rental                            │
//! │  └── delete(&self, id)             → ()                                │
//! │       │                                                                 │
//! │       │  SQL (sqlx::query_as + FromRow)                                │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Conventions
//! - Lookups return `Ok(None)` for a missing row; the caller decides on 404
//! - Updates and deletes that touch zero rows return `DbError::NotFound`
//! - Inserts use `RETURNING *` so the caller gets the generated id back
//!
//! ## Available Repositories
//!
//! - [`UserRepository`](user::UserRepository) - Accounts and credentials
//! - [`VehicleRepository`](vehicle::VehicleRepository) - Vehicle catalog
//! - [`RentalRepository`](rental::RentalRepository) - Rental records

pub mod rental;
pub mod user;
pub mod vehicle;
