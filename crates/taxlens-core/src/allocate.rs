//! Allocation strategies: fixed sector percentages and budget-proportional.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::currency::format_inr;
use crate::error::AllocationError;

/// Sector percentages for the fixed-table strategy. The weights sum to 1.0,
/// so this path needs no normalization.
pub const FIXED_SECTORS: [(&str, f64); 5] = [
    ("Education", 0.15),
    ("Healthcare", 0.20),
    ("Defense", 0.30),
    ("Infrastructure", 0.25),
    ("Other", 0.10),
];

/// Per-category breakdown of a single tax payment.
///
/// Amounts are rounded to cents; after rounding their sum stays within
/// `0.01 × category_count` of `total`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Allocation {
    pub total: f64,
    pub amounts: BTreeMap<String, f64>,
}

impl Allocation {
    /// Display form of the breakdown, each amount rendered as a currency
    /// string. Storage and further computation use `amounts` directly.
    pub fn formatted(&self) -> BTreeMap<String, String> {
        self.amounts
            .iter()
            .map(|(category, &amount)| (category.clone(), format_inr(amount)))
            .collect()
    }
}

/// Splits `total` across [`FIXED_SECTORS`].
pub fn allocate_fixed(total: f64) -> Result<Allocation, AllocationError> {
    validate_amount(total)?;

    let amounts = FIXED_SECTORS
        .iter()
        .map(|&(sector, weight)| (sector.to_string(), round_to_cents(total * weight)))
        .collect();

    Ok(Allocation { total, amounts })
}

/// Splits `total` in proportion to `weights`, which need not sum to 1.
///
/// Each category receives `total × weight / total_weight`, rounded to
/// cents. A zero-sum table is rejected before any division happens.
pub fn allocate_proportional(
    total: f64,
    weights: &BTreeMap<String, f64>,
) -> Result<Allocation, AllocationError> {
    validate_amount(total)?;

    let total_weight: f64 = weights.values().sum();
    if total_weight <= 0.0 {
        return Err(AllocationError::DegenerateWeights);
    }

    let amounts = weights
        .iter()
        .map(|(category, &weight)| {
            (category.clone(), round_to_cents(total * (weight / total_weight)))
        })
        .collect();

    Ok(Allocation { total, amounts })
}

fn validate_amount(total: f64) -> Result<(), AllocationError> {
    if !total.is_finite() || total <= 0.0 {
        return Err(AllocationError::InvalidAmount(total));
    }
    Ok(())
}

/// Rounds half away from zero to two decimal places.
fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
