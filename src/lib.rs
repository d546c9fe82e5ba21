//! User registration and login API built with Rust.
//!
//! Exposes register/login endpoints backed by PostgreSQL, with Argon2
//! password hashing and stateless HS256 JWTs (7-day expiry).

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;

pub use config::Config;
pub use error::AppError;
pub use handlers::http::AppState;

use axum::routing::{get, post};
use handlers::http;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the API router (auth, health). Used by main and by integration tests.
pub fn create_app(state: AppState) -> axum::Router {
    let auth_routes = axum::Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login));

    axum::Router::new()
        .route("/health", get(http::health))
        .nest("/api/auth", auth_routes)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
