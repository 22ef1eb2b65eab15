use std::f64::consts::PI;

use crate::parameters::{MAX_TOOTH_COUNT, MIN_TOOTH_COUNT};

/// Rolling-circle decomposition of an epitrochoid, after clamping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RollingRadii {
    /// Fixed circle radius, `(N - 1)·R / N`.
    pub r1: f64,
    /// Rolling circle radius, `R / N`.
    pub r2: f64,
    /// Pin count actually used.
    pub pin_count: u32,
    /// Eccentricity after limiting it to half the pin diameter.
    pub eccentricity: f64,
    /// Pin radius after limiting it to `R·sin(π/N)`.
    pub pin_radius: f64,
}

/// Splits the outer radius `R = outer_diameter / 2` into the fixed and
/// rolling circles for `pin_count` pins.
///
/// Never fails; inputs are clamped instead:
/// - `pin_count` into `[MIN_TOOTH_COUNT, MAX_TOOTH_COUNT]`
/// - `eccentricity` to at most `pin_diameter / 2`
/// - the pin radius to at most `R·sin(π/N)`, so neighbouring pins cannot overlap
///
/// `r1 + r2 == R` up to rounding.
#[must_use]
pub fn calculate_radii(
    pin_count: u32,
    eccentricity: f64,
    outer_diameter: f64,
    pin_diameter: f64,
) -> RollingRadii {
    let n = pin_count.clamp(MIN_TOOTH_COUNT, MAX_TOOTH_COUNT);
    if n != pin_count {
        tracing::debug!(pin_count, clamped = n, "pin count clamped");
    }
    let nf = f64::from(n);
    let outer_radius = outer_diameter / 2.0;

    let eccentricity = eccentricity.min(pin_diameter / 2.0);
    let pin_radius = (pin_diameter / 2.0).min(outer_radius * (PI / nf).sin());

    let r2 = outer_radius / nf;
    RollingRadii {
        r1: outer_radius - r2,
        r2,
        pin_count: n,
        eccentricity,
        pin_radius,
    }
}
