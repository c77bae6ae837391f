//! Currency presentation, kept separate from the numeric allocation so the
//! allocator's contract stays over exact numbers.

/// Formats an amount as Indian rupees with exactly two decimal places.
pub fn format_inr(amount: f64) -> String {
    format!("₹{amount:.2}")
}
