#![deny(warnings)]
//! Tax-distribution allocation engine.
//!
//! Splits a single tax payment across weighted spending categories. Two
//! strategies share one contract: the fixed sector table, whose weights
//! already sum to 1.0, and the budget-proportional table, whose weights are
//! arbitrary non-negative numbers that get normalized before allocation.
//!
//! The allocator is pure and stateless; the only shared state is the
//! [`WeightTable`], which hands out immutable snapshots so concurrent
//! allocations never block each other. Numeric results stay exact decimals;
//! currency presentation lives in [`currency`] and is applied only at the
//! display boundary.

pub mod allocate;
pub mod currency;
pub mod error;
pub mod weights;

pub use allocate::{Allocation, FIXED_SECTORS, allocate_fixed, allocate_proportional};
pub use currency::format_inr;
pub use error::{AllocationError, WeightTableError};
pub use weights::WeightTable;
