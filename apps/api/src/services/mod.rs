//! Service layer.
//!
//! Services sit between the HTTP handlers and the repositories. They validate
//! input with `ridehub-core`, apply the access rules, and talk to `ridehub-db`.
//! Handlers stay thin: extract, call one service method, shape the response.

pub mod health_service;
pub mod rental_service;
pub mod user_service;
pub mod vehicle_service;
