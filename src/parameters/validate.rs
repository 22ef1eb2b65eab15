use crate::error::{ParameterValidationError, Result};

use super::{
    Parameters, MAX_LINE_SEGMENT_COUNT, MAX_PRESSURE_ANGLE_LIMIT, MAX_TOOTH_COUNT,
    MIN_DRIVER_HOLE_COUNT, MIN_ECCENTRICITY, MIN_LINE_SEGMENT_COUNT, MIN_PRESSURE_ANGLE_LIMIT,
    MIN_ROLLER_DIAMETER, MIN_SHAFT_DIAMETER, MIN_TOOTH_COUNT,
};

/// Checks every invariant of a parameter bundle, failing on the first violation.
///
/// Pure and idempotent: the bundle is only read. Out-of-range values are
/// reported, never clamped.
///
/// Checks run in this order: tooth count, roller diameter, eccentricity,
/// shaft diameter, outer diameter against the roller circle, pressure-angle
/// limit, dimensions, line segment count, driver hole count. Roller diameter
/// comes ahead of eccentricity because the eccentricity bound is half of it,
/// so a bad roller is reported as such rather than as a bad eccentricity.
/// The dimension check also requires `height > base_height`, leaving room
/// for the pins.
///
/// # Errors
///
/// Returns the [`ParameterValidationError`] variant naming the violated
/// invariant.
pub fn validate(params: &Parameters) -> Result<()> {
    if !(MIN_TOOTH_COUNT..=MAX_TOOTH_COUNT).contains(&params.tooth_count) {
        return Err(ParameterValidationError::ToothCountOutOfRange(
            params.tooth_count,
        ));
    }

    if !at_least(params.roller_diameter, MIN_ROLLER_DIAMETER) {
        return Err(ParameterValidationError::RollerDiameterTooSmall(
            params.roller_diameter,
        ));
    }

    let e = params.eccentricity;
    if !(e >= MIN_ECCENTRICITY && e <= params.roller_diameter / 2.0) {
        return Err(ParameterValidationError::EccentricityOutOfRange(e));
    }

    if !at_least(params.shaft_diameter, MIN_SHAFT_DIAMETER) {
        return Err(ParameterValidationError::ShaftDiameterTooSmall(
            params.shaft_diameter,
        ));
    }

    if params.diameter.is_nan() || params.diameter <= params.roller_circle_diameter {
        return Err(ParameterValidationError::DiameterNotLargerThanRollerCircle(
            params.diameter,
            params.roller_circle_diameter,
        ));
    }

    if !(MIN_PRESSURE_ANGLE_LIMIT..=MAX_PRESSURE_ANGLE_LIMIT)
        .contains(&params.pressure_angle_limit)
    {
        return Err(ParameterValidationError::PressureAngleLimitOutOfRange(
            params.pressure_angle_limit,
        ));
    }

    check_dimensions(params)?;

    // Bounded above so the sampling loop stays short and 2π/n a usable step.
    if !(MIN_LINE_SEGMENT_COUNT..=MAX_LINE_SEGMENT_COUNT).contains(&params.line_segment_count) {
        return Err(ParameterValidationError::LineSegmentCountOutOfRange(
            params.line_segment_count,
        ));
    }

    if params.driver_disk_hole_count < MIN_DRIVER_HOLE_COUNT {
        return Err(ParameterValidationError::DriverHoleCountOutOfRange(
            params.driver_disk_hole_count,
        ));
    }

    Ok(())
}

fn at_least(value: f64, min: f64) -> bool {
    value.is_finite() && value >= min
}

/// Every length must be finite and positive; offsets may also be zero.
fn check_dimensions(params: &Parameters) -> Result<()> {
    let positive = [
        ("tooth_pitch", params.tooth_pitch),
        ("roller_diameter", params.roller_diameter),
        ("roller_circle_diameter", params.roller_circle_diameter),
        ("eccentricity", params.eccentricity),
        ("diameter", params.diameter),
        ("height", params.height),
        ("base_height", params.base_height),
        ("disk_height", params.disk_height),
        ("shaft_diameter", params.shaft_diameter),
        ("key_diameter", params.key_diameter),
        ("key_flat_diameter", params.key_flat_diameter),
        ("driver_hole_diameter", params.driver_hole_diameter),
        ("driver_circle_diameter", params.driver_circle_diameter),
    ];
    if let Some(&(field, value)) = positive
        .iter()
        .find(|(_, v)| !v.is_finite() || *v <= 0.0)
    {
        return Err(ParameterValidationError::InvalidDimension { field, value });
    }

    let non_negative = [
        ("pressure_angle_offset", params.pressure_angle_offset),
        ("clearance", params.clearance),
    ];
    if let Some(&(field, value)) = non_negative
        .iter()
        .find(|(_, v)| !v.is_finite() || *v < 0.0)
    {
        return Err(ParameterValidationError::InvalidDimension { field, value });
    }

    if params.height <= params.base_height {
        return Err(ParameterValidationError::InvalidDimension {
            field: "height",
            value: params.height,
        });
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn with(f: impl FnOnce(&mut Parameters)) -> Result<()> {
        let mut p = Parameters::default();
        f(&mut p);
        validate(&p)
    }

    #[test]
    fn defaults_are_valid() {
        assert_eq!(validate(&Parameters::default()), Ok(()));
    }

    #[test]
    fn validation_does_not_mutate_and_is_repeatable() {
        let p = Parameters::default();
        let before = p.clone();
        assert_eq!(validate(&p), validate(&p));
        assert_eq!(p, before);
    }

    #[test]
    fn tooth_count_of_two_fails() {
        assert_eq!(
            with(|p| p.tooth_count = 2),
            Err(ParameterValidationError::ToothCountOutOfRange(2))
        );
        assert_eq!(
            with(|p| p.tooth_count = 51),
            Err(ParameterValidationError::ToothCountOutOfRange(51))
        );
    }

    #[test]
    fn tooth_count_boundaries_pass() {
        assert!(with(|p| p.tooth_count = 3).is_ok());
        assert!(with(|p| p.tooth_count = 50).is_ok());
    }

    #[test]
    fn eccentricity_boundary() {
        assert!(with(|p| p.eccentricity = p.roller_diameter / 2.0).is_ok());

        let too_big = 9.4 / 2.0 + 1e-9;
        assert_eq!(
            with(|p| p.eccentricity = too_big),
            Err(ParameterValidationError::EccentricityOutOfRange(too_big))
        );
        assert_eq!(
            with(|p| p.eccentricity = 0.1),
            Err(ParameterValidationError::EccentricityOutOfRange(0.1))
        );
    }

    #[test]
    fn small_roller_fails_before_eccentricity() {
        // Eccentricity 2.0 also exceeds half of this roller.
        assert_eq!(
            with(|p| p.roller_diameter = 1.0),
            Err(ParameterValidationError::RollerDiameterTooSmall(1.0))
        );
    }

    #[test]
    fn height_must_leave_room_above_base() {
        assert_eq!(
            with(|p| p.height = p.base_height),
            Err(ParameterValidationError::InvalidDimension {
                field: "height",
                value: 10.0
            })
        );
        assert!(with(|p| p.height = p.base_height + 0.1).is_ok());
    }

    #[test]
    fn small_shaft_fails() {
        assert_eq!(
            with(|p| p.shaft_diameter = 2.0),
            Err(ParameterValidationError::ShaftDiameterTooSmall(2.0))
        );
    }

    #[test]
    fn outer_diameter_must_exceed_roller_circle() {
        assert_eq!(
            with(|p| {
                p.diameter = 50.0;
                p.roller_circle_diameter = 80.0;
            }),
            Err(ParameterValidationError::DiameterNotLargerThanRollerCircle(
                50.0, 80.0
            ))
        );
    }

    #[test]
    fn pressure_angle_limit_range() {
        assert!(with(|p| p.pressure_angle_limit = 10.0).is_ok());
        assert!(with(|p| p.pressure_angle_limit = 80.0).is_ok());
        assert_eq!(
            with(|p| p.pressure_angle_limit = 85.0),
            Err(ParameterValidationError::PressureAngleLimitOutOfRange(85.0))
        );
        assert!(matches!(
            with(|p| p.pressure_angle_limit = f64::NAN),
            Err(ParameterValidationError::PressureAngleLimitOutOfRange(_))
        ));
    }

    #[test]
    fn non_positive_dimension_is_named() {
        assert_eq!(
            with(|p| p.disk_height = 0.0),
            Err(ParameterValidationError::InvalidDimension {
                field: "disk_height",
                value: 0.0
            })
        );
        assert!(matches!(
            with(|p| p.tooth_pitch = f64::INFINITY),
            Err(ParameterValidationError::InvalidDimension {
                field: "tooth_pitch",
                ..
            })
        ));
    }

    #[test]
    fn negative_clearance_fails_zero_passes() {
        assert!(with(|p| p.clearance = 0.0).is_ok());
        assert_eq!(
            with(|p| p.clearance = -0.1),
            Err(ParameterValidationError::InvalidDimension {
                field: "clearance",
                value: -0.1
            })
        );
    }

    #[test]
    fn line_segment_count_range() {
        assert!(with(|p| p.line_segment_count = 20).is_ok());
        assert_eq!(
            with(|p| p.line_segment_count = 19),
            Err(ParameterValidationError::LineSegmentCountOutOfRange(19))
        );
        assert_eq!(
            with(|p| p.line_segment_count = 0),
            Err(ParameterValidationError::LineSegmentCountOutOfRange(0))
        );
    }

    #[test]
    fn driver_hole_count_minimum() {
        assert_eq!(
            with(|p| p.driver_disk_hole_count = 2),
            Err(ParameterValidationError::DriverHoleCountOutOfRange(2))
        );
    }

    proptest! {
        #[test]
        fn random_valid_bundles_pass(
            tooth_count in 3u32..=50,
            roller_diameter in 2.0f64..20.0,
            ecc_frac in 0.0f64..=1.0,
            limit in 10.0f64..=80.0,
            segments in 20u32..=10_000,
        ) {
            let max_e = roller_diameter / 2.0;
            let p = Parameters {
                tooth_count,
                roller_diameter,
                eccentricity: (MIN_ECCENTRICITY + ecc_frac * (max_e - MIN_ECCENTRICITY)).min(max_e),
                pressure_angle_limit: limit,
                line_segment_count: segments,
                ..Parameters::default()
            };
            prop_assert_eq!(validate(&p), Ok(()));
        }
    }
}
