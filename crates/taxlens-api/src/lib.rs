#![deny(warnings)]
//! HTTP service for the taxlens allocation engine.
//!
//! Thin plumbing around `taxlens-core`: token authentication, SQLite
//! persistence of distribution records, and the axum router. The weight
//! table is loaded once at startup and injected into handlers through
//! [`AppState`] rather than accessed as a global.

use std::sync::{Arc, Mutex};

use axum::{
    Router,
    routing::{get, post},
};
use rusqlite::Connection;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use taxlens_core::WeightTable;

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod store;
pub mod types;

pub use config::Config;

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub weights: Arc<WeightTable>,
    pub db: Arc<Mutex<Connection>>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(weights: WeightTable, db: Connection, config: Config) -> Self {
        Self {
            weights: Arc::new(weights),
            db: Arc::new(Mutex::new(db)),
            config: Arc::new(config),
        }
    }
}

/// Builds the full router. Public and protected routes share the same
/// state; protection comes from the [`auth::AuthUser`] extractor on the
/// handlers that need a caller identity.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/signup", post(handlers::signup))
        .route("/api/login", post(handlers::login))
        .route("/api/budget", get(handlers::budget))
        .route("/api/tax-distribution", post(handlers::tax_distribution))
        .route("/api/budget-tax-distribution", post(handlers::budget_tax_distribution))
        .route("/api/tax-history", get(handlers::tax_history))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
