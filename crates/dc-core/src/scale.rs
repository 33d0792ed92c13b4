//! Linear interpolation shared by every position mapping.

/// Map `x` from `[in_min, in_max]` to `[out_min, out_max]` linearly.
///
/// Callers always pass distinct literal domain bounds, so the division
/// cannot be by zero.
pub fn scale(x: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    (x - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}
