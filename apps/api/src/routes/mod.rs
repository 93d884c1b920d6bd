//! HTTP routes.
//!
//! ```text
//! /                    GET     welcome message
//! /health              GET     database check (200 / 503)
//! /users/register      POST    201
//! /users/login         POST    form → bearer token
//! /users/me            GET PATCH                       🔒
//! /users/me/password   POST    204                     🔒
//! /users[/]            GET                             🔒 admin
//! /users/{id}          DELETE  204                     🔒 admin
//! /vehicles[/]         GET, POST 201 🔒
//! /vehicles/{id}       GET, PUT 🔒, DELETE 204 🔒
//! /rentals[/]          GET, POST 201                   🔒
//! /rentals/{id}        GET, PUT, DELETE 204            🔒 owner or admin
//! ```
//!
//! Collection routes are registered with and without the trailing slash.

pub mod health;
pub mod rentals;
pub mod users;
pub mod vehicles;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Builds the application router with CORS and request tracing.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        // Users
        .route("/users/register", post(users::register))
        .route("/users/login", post(users::login))
        .route("/users/me", get(users::me).patch(users::update_me))
        .route("/users/me/password", post(users::change_password))
        .route("/users", get(users::list))
        .route("/users/", get(users::list))
        .route("/users/{user_id}", axum::routing::delete(users::delete))
        // Vehicles
        .route("/vehicles", get(vehicles::list).post(vehicles::create))
        .route("/vehicles/", get(vehicles::list).post(vehicles::create))
        .route(
            "/vehicles/{vehicle_id}",
            get(vehicles::get)
                .put(vehicles::update)
                .delete(vehicles::delete),
        )
        // Rentals
        .route("/rentals", get(rentals::list).post(rentals::create))
        .route("/rentals/", get(rentals::list).post(rentals::create))
        .route(
            "/rentals/{rental_id}",
            get(rentals::get).put(rentals::update).delete(rentals::delete),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
