//! Deterministic numeric helpers.

#![forbid(unsafe_code)]

/// Round a floating point value to `decimals` decimal places.
///
/// Ties round away from zero after scaling, so `round_f64(3.15, 1)` is
/// `3.2` even though `3.15` is stored slightly below the midpoint.
#[must_use]
pub fn round_f64(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Round to one decimal place, the precision of every reported minute value.
#[must_use]
pub fn round1(value: f64) -> f64 {
    round_f64(value, 1)
}

/// Convert minutes to hours without rounding.
#[must_use]
pub fn minutes_to_hours(minutes: f64) -> f64 {
    minutes / 60.0
}
