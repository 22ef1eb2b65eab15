use std::f64::consts::SQRT_2;

use crate::error::{ParameterValidationError, Result};
use crate::math::{clamp_unit, DEGENERATE_TOLERANCE};
use crate::parameters::{Parameters, RadialLimits};

/// Pressure-angle model of a cycloidal disk meshing with its pin ring.
///
/// Built on the reference circle `r3 = tooth_pitch * teeth` and the
/// generating circle `rg = r3 / sqrt(2)`.
///
/// [`PressureAngle::for_disk`] and [`compute_limits`] pass the disk's lobe
/// count, `tooth_count - 1`, as `teeth`, so the limits bound the same curve
/// the profile generator draws. Feeding `tooth_count` itself (through
/// [`PressureAngle::new`]) gives a wider reference circle: for the default
/// bundle the limits move from about `(73.856, 76.547)` to
/// `(81.124, 83.817)`, outside the drawn profile.
#[derive(Debug, Clone, Copy)]
pub struct PressureAngle {
    teeth: f64,
    tooth_pitch: f64,
    roller_diameter: f64,
    eccentricity: f64,
}

/// Integer-degree angles found by the sweep. `None` means no crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SweepAngles {
    pub min_angle: Option<u32>,
    pub max_angle: Option<u32>,
}

impl PressureAngle {
    /// Creates the model from explicit disk dimensions.
    #[must_use]
    pub fn new(teeth: u32, tooth_pitch: f64, roller_diameter: f64, eccentricity: f64) -> Self {
        Self {
            teeth: f64::from(teeth),
            tooth_pitch,
            roller_diameter,
            eccentricity,
        }
    }

    /// Creates the model for the cycloidal disk described by `params`.
    #[must_use]
    pub fn for_disk(params: &Parameters) -> Self {
        Self::new(
            params.lobe_count(),
            params.tooth_pitch,
            params.roller_diameter,
            params.eccentricity,
        )
    }

    fn r3(&self) -> f64 {
        self.tooth_pitch * self.teeth
    }

    fn rg(&self) -> f64 {
        self.r3() / SQRT_2
    }

    /// Pressure angle in degrees at angle `a` (radians) around the disk.
    ///
    /// # Errors
    ///
    /// Returns `DegenerateGeometry` if the contact distance collapses.
    pub fn angle_at(&self, a: f64) -> Result<f64> {
        let (r3, rg) = (self.r3(), self.rg());
        let half_roller = self.roller_diameter / 2.0;
        let pp = rg * (SQRT_2 * SQRT_2 + 1.0 - 2.0 * SQRT_2 * a.cos()).sqrt() - half_roller;
        let denom = pp + half_roller;
        if denom.is_nan() || denom.abs() < DEGENERATE_TOLERANCE {
            return Err(ParameterValidationError::DegenerateGeometry(format!(
                "pressure angle denominator {denom} at {a} rad"
            )));
        }
        Ok(clamp_unit((r3 * a.cos() - rg) / denom).asin().to_degrees())
    }

    /// Radius at which the pressure angle evaluated at `a` (radians) is reached.
    ///
    /// # Errors
    ///
    /// Returns `DegenerateGeometry` if the contact distance collapses.
    pub fn limit_radius_at(&self, a: f64) -> Result<f64> {
        let (r3, rg) = (self.r3(), self.rg());
        let half_roller = self.roller_diameter / 2.0;
        let q = (r3 * r3 + rg * rg - 2.0 * r3 * rg * a.cos()).sqrt();
        if q.is_nan() || q < DEGENERATE_TOLERANCE {
            return Err(ParameterValidationError::DegenerateGeometry(format!(
                "pressure limit distance {q} at {a} rad"
            )));
        }
        let x = rg - self.eccentricity + (q - half_roller) * (r3 * a.cos() - rg) / q;
        let y = (q - half_roller) * r3 * a.sin() / q;
        Ok(x.hypot(y))
    }

    /// Sweeps whole degrees `0..180` for the `limit` crossings.
    ///
    /// # Errors
    ///
    /// Propagates `DegenerateGeometry` from [`PressureAngle::angle_at`].
    pub fn sweep(&self, limit: f64) -> Result<SweepAngles> {
        sweep_angles(limit, |a| self.angle_at(a))
    }

    /// Converts the sweep result into inner and outer radii.
    ///
    /// # Errors
    ///
    /// Returns `DegenerateGeometry` if any evaluation collapses.
    pub fn limits(&self, limit: f64) -> Result<RadialLimits> {
        let angles = self.sweep(limit)?;
        let radius = |angle: Option<u32>| {
            angle
                .map(|deg| self.limit_radius_at(f64::from(deg).to_radians()))
                .transpose()
        };
        Ok(RadialLimits {
            min_rad: radius(angles.min_angle)?,
            max_rad: radius(angles.max_angle)?,
        })
    }
}

/// Finds the first degree where `phi` drops below `+limit` (min angle) and
/// the degree just before it drops below `-limit` (max angle).
fn sweep_angles(limit: f64, mut phi: impl FnMut(f64) -> Result<f64>) -> Result<SweepAngles> {
    let mut angles = SweepAngles::default();
    let mut max_found = false;

    for deg in 0..180_u32 {
        let value = phi(f64::from(deg).to_radians())?;
        if angles.min_angle.is_none() && value < limit {
            tracing::trace!(deg, value, "pressure angle below limit");
            angles.min_angle = Some(deg);
        }
        if !max_found && value < -limit {
            tracing::trace!(deg, value, "pressure angle below negative limit");
            // Crossing at 0 degrees leaves no angle before it.
            angles.max_angle = deg.checked_sub(1);
            max_found = true;
        }
        if angles.min_angle.is_some() && max_found {
            break;
        }
    }

    Ok(angles)
}

/// Validates `params` and returns the radial limits of its cycloidal disk.
///
/// # Errors
///
/// Returns a validation error, or `DegenerateGeometry` when the analysis
/// collapses or the inner limit lands outside the outer one.
pub fn compute_limits(params: &Parameters) -> Result<RadialLimits> {
    params.validate()?;
    let limits = PressureAngle::for_disk(params).limits(params.pressure_angle_limit)?;
    limits.checked_bounds()?;
    tracing::debug!(
        min_rad = ?limits.min_rad,
        max_rad = ?limits.max_rad,
        limit = params.pressure_angle_limit,
        "pressure angle limits"
    );
    Ok(limits)
}
