mod validate;

pub use validate::validate;

use crate::analysis::compute_limits;
use crate::error::{ParameterValidationError, Result};

/// Fewest teeth a cycloidal disk may be generated with.
pub const MIN_TOOTH_COUNT: u32 = 3;
/// Most teeth a cycloidal disk may be generated with.
pub const MAX_TOOTH_COUNT: u32 = 50;
pub const MIN_LINE_SEGMENT_COUNT: u32 = 20;
pub const MAX_LINE_SEGMENT_COUNT: u32 = 10_000;
pub const MIN_DRIVER_HOLE_COUNT: u32 = 3;
/// Smallest accepted roller (pin) diameter in millimeters.
pub const MIN_ROLLER_DIAMETER: f64 = 2.0;
/// Smallest accepted eccentricity in millimeters.
pub const MIN_ECCENTRICITY: f64 = 0.5;
/// Smallest accepted input shaft diameter in millimeters.
pub const MIN_SHAFT_DIAMETER: f64 = 5.0;
pub const MIN_PRESSURE_ANGLE_LIMIT: f64 = 10.0;
pub const MAX_PRESSURE_ANGLE_LIMIT: f64 = 80.0;

/// Inner and outer radii allowed by the pressure-angle limit.
///
/// `None` means the sweep never crossed the corresponding threshold.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RadialLimits {
    pub min_rad: Option<f64>,
    pub max_rad: Option<f64>,
}

impl RadialLimits {
    /// Returns `(min_rad, max_rad)` when both limits were found.
    #[must_use]
    pub fn bounds(&self) -> Option<(f64, f64)> {
        self.min_rad.zip(self.max_rad)
    }

    /// Like [`RadialLimits::bounds`], but rejects a pair that encloses no
    /// annulus.
    ///
    /// # Errors
    ///
    /// Returns `DegenerateGeometry` if a limit is NaN or `min_rad > max_rad`.
    pub fn checked_bounds(&self) -> Result<Option<(f64, f64)>> {
        match self.bounds() {
            Some((min_rad, max_rad))
                if min_rad.is_nan() || max_rad.is_nan() || min_rad > max_rad =>
            {
                Err(ParameterValidationError::DegenerateGeometry(format!(
                    "pressure angle limits are inverted: min {min_rad} > max {max_rad}"
                )))
            }
            bounds => Ok(bounds),
        }
    }
}

/// Design parameters of a cycloidal gearbox.
///
/// Lengths are in millimeters, angles in degrees. The host may change fields
/// freely before a generation call; [`Parameters::validate`] is the gate in
/// front of every generator.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Parameters {
    /// Tooth count of the drive. The pin ring carries `tooth_count` pins and
    /// the disk profile is drawn with [`Parameters::lobe_count`] lobes, one
    /// fewer.
    pub tooth_count: u32,
    /// Samples on the closed disk profile.
    pub line_segment_count: u32,
    pub tooth_pitch: f64,
    pub roller_diameter: f64,
    pub roller_circle_diameter: f64,
    /// Offset of the disk center from the input axis.
    pub eccentricity: f64,
    /// Outside diameter of the pin base.
    pub diameter: f64,
    /// Overall stack height.
    pub height: f64,
    pub base_height: f64,
    pub disk_height: f64,
    pub pressure_angle_limit: f64,
    /// Radial shrink applied to profile samples outside the limits.
    pub pressure_angle_offset: f64,
    pub shaft_diameter: f64,
    pub key_diameter: f64,
    pub key_flat_diameter: f64,
    pub driver_disk_hole_count: u32,
    pub driver_hole_diameter: f64,
    pub driver_circle_diameter: f64,
    /// Additive clearance for mating features.
    pub clearance: f64,
    /// Limits cached by [`Parameters::with_limits`].
    #[cfg_attr(feature = "serde", serde(skip))]
    pub limits: Option<RadialLimits>,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            tooth_count: 12,
            line_segment_count: 400,
            tooth_pitch: 7.27,
            roller_diameter: 9.4,
            roller_circle_diameter: 100.0,
            eccentricity: 2.0,
            diameter: 110.0,
            height: 20.0,
            base_height: 10.0,
            disk_height: 4.0,
            pressure_angle_limit: 50.0,
            pressure_angle_offset: 0.0,
            shaft_diameter: 13.0,
            key_diameter: 8.0,
            key_flat_diameter: 6.0,
            driver_disk_hole_count: 6,
            driver_hole_diameter: 10.0,
            driver_circle_diameter: 100.0,
            clearance: 0.5,
            limits: None,
        }
    }
}

/// Returns the reference parameter bundle.
#[must_use]
pub fn default_parameters() -> Parameters {
    Parameters::default()
}

impl Parameters {
    /// Checks every invariant; see [`validate`].
    ///
    /// # Errors
    ///
    /// Returns the error for the first violated invariant.
    pub fn validate(&self) -> Result<()> {
        validate(self)
    }

    /// Number of lobes on the cycloidal disk (`tooth_count - 1`).
    #[must_use]
    pub fn lobe_count(&self) -> u32 {
        self.tooth_count.saturating_sub(1)
    }

    /// Input turns per output turn.
    #[must_use]
    pub fn reduction_ratio(&self) -> f64 {
        f64::from(self.lobe_count())
    }

    /// Limits cached by [`Parameters::with_limits`], if any.
    ///
    /// The cache is not refreshed when fields change afterwards; generators
    /// always run their own analysis.
    #[must_use]
    pub fn limits(&self) -> Option<RadialLimits> {
        self.limits
    }

    /// Validates, runs the pressure-angle analysis and returns the bundle with
    /// the resulting limits cached.
    ///
    /// # Errors
    ///
    /// Returns a validation error, or `DegenerateGeometry` from the analyzer.
    pub fn with_limits(mut self) -> Result<Self> {
        self.validate()?;
        self.limits = Some(compute_limits(&self)?);
        Ok(self)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_values() {
        let p = default_parameters();
        assert_eq!(p.tooth_count, 12);
        assert_eq!(p.line_segment_count, 400);
        assert_eq!(p.driver_disk_hole_count, 6);
        assert!((p.tooth_pitch - 7.27).abs() < 1e-12);
        assert!((p.roller_diameter - 9.4).abs() < 1e-12);
        assert!((p.pressure_angle_limit - 50.0).abs() < 1e-12);
        assert!(p.pressure_angle_offset.abs() < 1e-12);
        assert!((p.clearance - 0.5).abs() < 1e-12);
        assert!(p.limits().is_none());
    }

    #[test]
    fn lobe_count_is_one_less_than_pins() {
        let p = Parameters::default();
        assert_eq!(p.lobe_count(), 11);
        assert!((p.reduction_ratio() - 11.0).abs() < 1e-12);
    }

    #[test]
    fn with_limits_caches_analysis() {
        let p = Parameters::default().with_limits().unwrap();
        let limits = p.limits().unwrap();
        let (min_rad, max_rad) = limits.bounds().unwrap();
        assert!(min_rad < max_rad);
        assert_eq!(compute_limits(&p).unwrap(), limits);
    }

    #[test]
    fn with_limits_rejects_invalid_bundle() {
        let p = Parameters {
            tooth_count: 2,
            ..Parameters::default()
        };
        assert!(p.with_limits().is_err());
    }

    #[test]
    fn bounds_need_both_limits() {
        let half = RadialLimits {
            min_rad: Some(1.0),
            max_rad: None,
        };
        assert!(half.bounds().is_none());
        assert!(RadialLimits::default().bounds().is_none());
    }

    #[test]
    fn checked_bounds_reject_inverted_pair() {
        let inverted = RadialLimits {
            min_rad: Some(2.989),
            max_rad: Some(2.891),
        };
        assert!(matches!(
            inverted.checked_bounds(),
            Err(ParameterValidationError::DegenerateGeometry(_))
        ));

        let touching = RadialLimits {
            min_rad: Some(3.0),
            max_rad: Some(3.0),
        };
        assert_eq!(touching.checked_bounds(), Ok(Some((3.0, 3.0))));
        assert_eq!(RadialLimits::default().checked_bounds(), Ok(None));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_fills_defaults() {
        let p: Parameters = serde_json::from_str(r#"{ "tooth_count": 20, "eccentricity": 1.5 }"#).unwrap();
        assert_eq!(p.tooth_count, 20);
        assert!((p.eccentricity - 1.5).abs() < 1e-12);
        assert_eq!(p.line_segment_count, 400);
        assert!(p.validate().is_ok());
    }
}
