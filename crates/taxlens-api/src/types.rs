//! Wire types, matching the original service's field names.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::store::TaxRecord;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Deserialize)]
pub struct DistributionRequest {
    pub total_tax_paid: f64,
}

/// Fixed-flow response: exact sector amounts for the stated year.
#[derive(Debug, Serialize)]
pub struct TaxDistributionResponse {
    pub year: i32,
    pub distribution: BTreeMap<String, f64>,
}

/// Dynamic-flow response: display-formatted amounts, nothing persisted.
#[derive(Debug, Serialize)]
pub struct BudgetDistributionResponse {
    pub total_tax_paid: f64,
    pub distributed_tax: BTreeMap<String, String>,
}

#[derive(Debug, Serialize)]
pub struct TaxHistoryResponse {
    pub tax_history: Vec<TaxRecord>,
}
