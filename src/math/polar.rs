//! Polar/Cartesian conversions and the unit clamp used ahead of `asin`.

use super::CLAMP_WARN_TOLERANCE;

/// Converts `(x, y)` to polar form `(r, theta)` with `theta = atan2(y, x)`.
#[must_use]
pub fn to_polar(x: f64, y: f64) -> (f64, f64) {
    (x.hypot(y), y.atan2(x))
}

/// Converts polar `(r, theta)` back to `(x, y)`.
#[must_use]
pub fn to_rect(r: f64, theta: f64) -> (f64, f64) {
    let (sin, cos) = theta.sin_cos();
    (r * cos, r * sin)
}

/// Clamps `v` into `[-1, 1]`.
///
/// Absorbs floating-point drift before an `asin`. Values further than
/// [`CLAMP_WARN_TOLERANCE`] outside the interval still clamp, but emit a
/// warning.
#[must_use]
pub fn clamp_unit(v: f64) -> f64 {
    if v.abs() > 1.0 + CLAMP_WARN_TOLERANCE {
        tracing::warn!(value = v, "clamp_unit: value well outside [-1, 1]");
    }
    v.clamp(-1.0, 1.0)
}
