//! Error types for allocation and weight-table loading.

use thiserror::Error;

/// Rejected-request errors from the allocator. Neither is fatal to the
/// process; the service layer maps them onto HTTP responses.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AllocationError {
    /// The amount to distribute must be strictly positive and finite.
    #[error("tax amount must be greater than zero (got {0})")]
    InvalidAmount(f64),

    /// The weight table sums to zero, so shares are undefined.
    #[error("weight table sums to zero, cannot compute shares")]
    DegenerateWeights,
}

/// Errors from loading or replacing the weight table. Any of these at
/// startup is fatal: the process must not serve proportional allocation
/// without a usable table.
#[derive(Error, Debug)]
pub enum WeightTableError {
    #[error("failed to read weight source: {0}")]
    SourceUnreadable(#[from] std::io::Error),

    #[error("failed to parse weight source: {0}")]
    MalformedData(#[from] serde_json::Error),

    #[error("weight table has no entries")]
    EmptyTable,

    #[error("category '{category}' has invalid weight {weight}")]
    NegativeWeight { category: String, weight: f64 },

    #[error("weight table sums to {sum}, must be positive")]
    DegenerateSum { sum: f64 },
}
