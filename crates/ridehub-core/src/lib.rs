//! # ridehub-core: Pure Business Logic for RideHub
//!
//! This crate contains the rental domain as plain data and pure functions.
//! Nothing in here touches the database, the network or the clock.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        RideHub Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/api (axum)                              │   │
//! │  │    /users ──► /vehicles ──► /rentals                            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ services                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ ridehub-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  pricing  │  │  access   │  │   │
//! │  │   │   User    │  │   Money   │  │ prorated  │  │  Caller   │  │   │
//! │  │   │  Vehicle  │  │  (cents)  │  │   cost    │  │  admin    │  │   │
//! │  │   │  Rental   │  │           │  │           │  │ ownership │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  ridehub-db (Database Layer)                    │   │
//! │  │              SQLite queries, migrations, repositories           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain entities (User, Vehicle, Rental) and their drafts/patches
//! - [`money`] - Money type with integer arithmetic
//! - [`pricing`] - Rental cost computation
//! - [`access`] - Admin gating and rental ownership rules
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use ridehub_core::{pricing, Money};
//!
//! let start = NaiveDate::from_ymd_opt(2023, 10, 1).unwrap().and_hms_opt(10, 0, 0).unwrap();
//! let end = NaiveDate::from_ymd_opt(2023, 10, 1).unwrap().and_hms_opt(12, 0, 0).unwrap();
//!
//! let cost = pricing::rental_cost(Money::from_cents(500), start, end).unwrap();
//! assert_eq!(cost.cents(), 1000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod access;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use access::Caller;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Email address of the built-in admin account when none is configured.
///
/// The admin is an ordinary user row; what makes it special is that its
/// email matches the configured admin address.
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@ridehub.local";

/// Minimum accepted password length.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Maximum accepted password length (argon2 input is bounded anyway).
pub const MAX_PASSWORD_LENGTH: usize = 128;
