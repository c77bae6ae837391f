//! Request handlers.
//!
//! Validation and authentication run before any allocation work; a
//! persistence failure discards the computed breakdown and surfaces as an
//! error, never as a silently dropped write.

use std::collections::BTreeMap;

use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;
use tracing::info;

use taxlens_core::{allocate_fixed, allocate_proportional};

use crate::AppState;
use crate::auth::{AuthUser, issue_token};
use crate::error::ApiError;
use crate::store;
use crate::types::{
    BudgetDistributionResponse, DistributionRequest, LoginRequest, LoginResponse,
    TaxDistributionResponse, TaxHistoryResponse,
};

const DISTRIBUTION_YEAR: i32 = 2024;

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Registration is out of scope; the endpoint is kept for wire
/// compatibility with existing clients.
pub async fn signup() -> impl IntoResponse {
    Json(json!({ "message": "Signup successful" }))
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let username = req.username.trim();
    if username.is_empty() {
        return Err(ApiError::Validation("username must not be empty".to_string()));
    }

    let token = issue_token(username, &state.config.jwt_secret, state.config.token_ttl_hours)?;
    Ok(Json(LoginResponse { token }))
}

/// Current weight table, exposed for verification.
pub async fn budget(State(state): State<AppState>) -> Json<BTreeMap<String, f64>> {
    Json(state.weights.snapshot().as_ref().clone())
}

/// Fixed-percentage flow: allocate, persist, return the exact breakdown.
pub async fn tax_distribution(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Json(req): Json<DistributionRequest>,
) -> Result<Json<TaxDistributionResponse>, ApiError> {
    let allocation = allocate_fixed(req.total_tax_paid)?;

    {
        let conn = state.db.lock().unwrap();
        store::insert_record(&conn, &identity, &allocation)?;
    }

    info!(identity = %identity, total = req.total_tax_paid, "tax distribution recorded");

    Ok(Json(TaxDistributionResponse {
        year: DISTRIBUTION_YEAR,
        distribution: allocation.amounts,
    }))
}

/// Budget-proportional flow: no identity required, nothing persisted.
pub async fn budget_tax_distribution(
    State(state): State<AppState>,
    Json(req): Json<DistributionRequest>,
) -> Result<Json<BudgetDistributionResponse>, ApiError> {
    let snapshot = state.weights.snapshot();
    let allocation = allocate_proportional(req.total_tax_paid, &snapshot)?;

    Ok(Json(BudgetDistributionResponse {
        total_tax_paid: allocation.total,
        distributed_tax: allocation.formatted(),
    }))
}

/// The caller's records, newest first. No records is an empty list.
pub async fn tax_history(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
) -> Result<Json<TaxHistoryResponse>, ApiError> {
    let conn = state.db.lock().unwrap();
    let records = store::records_for_user(&conn, &identity)?;
    Ok(Json(TaxHistoryResponse { tax_history: records }))
}
