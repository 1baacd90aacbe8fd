//! Division-safe ratio helpers.
//!
//! Every conversion rate on the dashboard is a quotient of non-negative
//! sums. A zero denominator yields `0.0` rather than NaN or infinity, so
//! downstream formatting and threshold comparisons never see an undefined
//! value.

/// `numerator / denominator`, or `0.0` when the denominator is zero.
///
/// Non-finite results (from non-finite inputs) also collapse to `0.0`.
pub fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }
    let q = numerator / denominator;
    if q.is_finite() {
        q
    } else {
        0.0
    }
}

/// Integer-count convenience over [`safe_div`].
pub fn safe_ratio(numerator: u64, denominator: u64) -> f64 {
    safe_div(numerator as f64, denominator as f64)
}

/// `100 * numerator / denominator`, or `0.0` when the denominator is zero.
pub fn safe_pct(numerator: u64, denominator: u64) -> f64 {
    safe_ratio(numerator, denominator) * 100.0
}

/// Round half away from zero to `places` decimal places.
pub fn round_to(value: f64, places: u32) -> f64 {
    let scale = 10f64.powi(places as i32);
    (value * scale).round() / scale
}
