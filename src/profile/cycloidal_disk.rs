use std::f64::consts::TAU;

use crate::analysis::compute_limits;
use crate::error::{ParameterValidationError, Result};
use crate::math::{to_polar, to_rect, Point2, DEGENERATE_TOLERANCE, TOLERANCE};
use crate::parameters::{Parameters, RadialLimits};

/// Samples the closed profile of a cycloidal disk.
///
/// With `N` lobes, pitch `p`, eccentricity `e` and roller diameter `d`:
///
/// `P(a) = N·p·(cos a, sin a) + e·(cos (N+1)a, sin (N+1)a) - d/2·(cos(ψ+a), sin(ψ+a))`
///
/// where `ψ(a) = atan(sin Na / (cos Na + N·p / (e·(N+1))))`.
#[derive(Debug, Clone, Copy)]
pub struct CycloidalProfile {
    lobes: f64,
    tooth_pitch: f64,
    eccentricity: f64,
    roller_diameter: f64,
    segments: u32,
    offset: f64,
}

impl CycloidalProfile {
    /// Creates the generator for the disk described by `params`.
    ///
    /// # Errors
    ///
    /// Returns `DegenerateGeometry` when the ψ denominator can reach zero,
    /// i.e. `N·p / (e·(N+1)) <= 1`.
    pub fn new(params: &Parameters) -> Result<Self> {
        let profile = Self {
            lobes: f64::from(params.lobe_count()),
            tooth_pitch: params.tooth_pitch,
            eccentricity: params.eccentricity,
            roller_diameter: params.roller_diameter,
            segments: params.line_segment_count,
            offset: params.pressure_angle_offset,
        };
        let k = profile.phase_ratio();
        if k.is_nan() || k - 1.0 < DEGENERATE_TOLERANCE {
            return Err(ParameterValidationError::DegenerateGeometry(format!(
                "pitch-to-eccentricity ratio {k} lets the phase angle denominator vanish"
            )));
        }
        Ok(profile)
    }

    /// `N·p / (e·(N+1))`, the constant term of the ψ denominator.
    fn phase_ratio(&self) -> f64 {
        self.lobes * self.tooth_pitch / (self.eccentricity * (self.lobes + 1.0))
    }

    /// Auxiliary phase angle ψ at parameter `a`.
    fn phase(&self, a: f64) -> Result<f64> {
        let na = self.lobes * a;
        let denom = na.cos() + self.phase_ratio();
        if denom.is_nan() || denom.abs() < DEGENERATE_TOLERANCE {
            return Err(ParameterValidationError::DegenerateGeometry(format!(
                "phase angle denominator {denom} at {a} rad"
            )));
        }
        Ok((na.sin() / denom).atan())
    }

    /// Evaluates the unclamped profile at parameter `a` (radians).
    ///
    /// # Errors
    ///
    /// Returns `DegenerateGeometry` if ψ is undefined at `a`.
    pub fn point_at(&self, a: f64) -> Result<Point2> {
        let psi = self.phase(a)?;
        let base = self.lobes * self.tooth_pitch;
        let outer = (self.lobes + 1.0) * a;
        let half_roller = self.roller_diameter / 2.0;
        Ok(Point2::new(
            base * a.cos() + self.eccentricity * outer.cos() - half_roller * (psi + a).cos(),
            base * a.sin() + self.eccentricity * outer.sin() - half_roller * (psi + a).sin(),
        ))
    }

    /// Samples `segments + 1` points at `a = 2π·i / segments`; the last
    /// sample closes the curve.
    ///
    /// # Errors
    ///
    /// Returns `DegenerateGeometry` if any sample is undefined.
    pub fn raw_points(&self) -> Result<Vec<Point2>> {
        let step = TAU / f64::from(self.segments);
        (0..=self.segments)
            .map(|i| self.point_at(step * f64::from(i)))
            .collect()
    }

    /// Samples the profile and pulls every point outside the radial limits
    /// back inside.
    ///
    /// A sample beyond `[min_rad, max_rad]` is moved onto the violated limit
    /// circle, then shrunk by the pressure-angle offset. When either limit is
    /// missing the raw curve is returned.
    ///
    /// # Errors
    ///
    /// Returns `DegenerateGeometry` if the limits enclose no annulus, if the
    /// offset would pull samples through the center, or if any sample is
    /// undefined or not finite.
    pub fn execute(&self, limits: &RadialLimits) -> Result<Vec<Point2>> {
        let bounds = limits.checked_bounds()?;
        if let Some((min_rad, _)) = bounds {
            if min_rad - self.offset < TOLERANCE {
                return Err(ParameterValidationError::DegenerateGeometry(format!(
                    "offset {} leaves no room inside min radius {min_rad}",
                    self.offset
                )));
            }
        }

        let mut points = self.raw_points()?;
        if let Some((min_rad, max_rad)) = bounds {
            let mut clamped = 0_usize;
            for p in &mut points {
                if clamp_radius(p, min_rad, max_rad, self.offset) {
                    clamped += 1;
                }
            }
            tracing::debug!(clamped, total = points.len(), "profile clamped to limits");
        } else {
            tracing::debug!("no pressure angle limits, emitting raw profile");
        }

        if let Some(bad) = points.iter().find(|p| !(p.x.is_finite() && p.y.is_finite())) {
            return Err(ParameterValidationError::DegenerateGeometry(format!(
                "profile sample {bad} is not finite"
            )));
        }
        Ok(points)
    }
}

/// Moves `p` radially into `[min_rad, max_rad]` minus `offset`.
/// Returns whether the point was outside. Limits must be ordered.
fn clamp_radius(p: &mut Point2, min_rad: f64, max_rad: f64, offset: f64) -> bool {
    let (r, theta) = to_polar(p.x, p.y);
    if r <= max_rad && r >= min_rad {
        return false;
    }
    let r = r.clamp(min_rad, max_rad) - offset;
    let (x, y) = to_rect(r, theta);
    *p = Point2::new(x, y);
    true
}

/// Validates `params`, analyzes its limits and returns the clamped, closed
/// disk profile of `line_segment_count + 1` points.
///
/// # Errors
///
/// Returns a validation error or `DegenerateGeometry`.
pub fn generate_cycloidal_curve(params: &Parameters) -> Result<Vec<Point2>> {
    let limits = compute_limits(params)?;
    CycloidalProfile::new(params)?.execute(&limits)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::distance_2d::polyline_hausdorff;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    fn radii(points: &[Point2]) -> impl Iterator<Item = f64> + '_ {
        points.iter().map(|p| p.coords.norm())
    }

    fn assert_well_formed(params: &Parameters) {
        let curve = generate_cycloidal_curve(params).unwrap();
        assert_eq!(curve.len(), params.line_segment_count as usize + 1);

        let first = curve[0];
        let last = curve[curve.len() - 1];
        assert!((first - last).norm() < 1e-9, "curve not closed: {first} vs {last}");

        let (min_rad, max_rad) = compute_limits(params).unwrap().bounds().unwrap();
        let low = min_rad - params.pressure_angle_offset - 1e-9;
        for r in radii(&curve) {
            assert!(r >= low && r <= max_rad + 1e-9, "radius {r} outside [{low}, {max_rad}]");
        }
    }

    #[test]
    fn default_curve_has_401_points() {
        let curve = generate_cycloidal_curve(&Parameters::default()).unwrap();
        assert_eq!(curve.len(), 401);
    }

    #[test]
    fn default_curve_is_closed_and_bounded() {
        assert_well_formed(&Parameters::default());
    }

    #[test]
    fn tooth_count_boundaries_are_well_formed() {
        for tooth_count in [3, 50] {
            assert_well_formed(&Parameters {
                tooth_count,
                ..Parameters::default()
            });
        }
    }

    #[test]
    fn offset_shrinks_clamped_points() {
        let params = Parameters {
            pressure_angle_offset: 0.3,
            ..Parameters::default()
        };
        assert_well_formed(&params);

        let (min_rad, _) = compute_limits(&params).unwrap().bounds().unwrap();
        let curve = generate_cycloidal_curve(&params).unwrap();
        let smallest = radii(&curve).fold(f64::INFINITY, f64::min);
        assert_abs_diff_eq!(smallest, min_rad - 0.3, epsilon = 1e-9);
    }

    #[test]
    fn first_raw_point_is_on_the_axis() {
        // At a = 0: N·p + e - d/2 along +X.
        let params = Parameters::default();
        let p = CycloidalProfile::new(&params).unwrap().point_at(0.0).unwrap();
        let expected = 11.0 * 7.27 + 2.0 - 4.7;
        assert_abs_diff_eq!(p.x, expected, epsilon = 1e-9);
        assert_abs_diff_eq!(p.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn missing_limits_emit_raw_curve() {
        let profile = CycloidalProfile::new(&Parameters::default()).unwrap();
        let raw = profile.raw_points().unwrap();
        let half = RadialLimits {
            min_rad: None,
            max_rad: Some(1.0),
        };
        assert_eq!(profile.execute(&half).unwrap(), raw);
    }

    #[test]
    fn clamping_touches_both_limits() {
        let params = Parameters::default();
        let (min_rad, max_rad) = compute_limits(&params).unwrap().bounds().unwrap();
        let curve = generate_cycloidal_curve(&params).unwrap();
        assert!(radii(&curve).any(|r| (r - min_rad).abs() < 1e-9));
        assert!(radii(&curve).any(|r| (r - max_rad).abs() < 1e-9));
    }

    #[test]
    fn sampling_density_does_not_change_the_curve() {
        let coarse = Parameters::default();
        let fine = Parameters {
            line_segment_count: 800,
            ..Parameters::default()
        };
        let a = generate_cycloidal_curve(&coarse).unwrap();
        let b = generate_cycloidal_curve(&fine).unwrap();
        let distance = polyline_hausdorff(&a, &b);
        assert!(distance < coarse.roller_diameter * 1e-2, "hausdorff = {distance}");
    }

    #[test]
    fn small_pitch_is_degenerate() {
        // N·p / (e·(N+1)) = 11 * 0.5 / (4.7 * 12) < 1.
        let params = Parameters {
            tooth_pitch: 0.5,
            eccentricity: 4.7,
            ..Parameters::default()
        };
        assert!(matches!(
            generate_cycloidal_curve(&params),
            Err(ParameterValidationError::DegenerateGeometry(_))
        ));
    }

    #[test]
    fn inverted_limits_yield_no_curve() {
        let params = Parameters {
            tooth_count: 3,
            tooth_pitch: 2.0,
            eccentricity: 0.5,
            pressure_angle_limit: 10.0,
            ..Parameters::default()
        };
        assert!(matches!(
            generate_cycloidal_curve(&params),
            Err(ParameterValidationError::DegenerateGeometry(_))
        ));

        let inverted = RadialLimits {
            min_rad: Some(76.0),
            max_rad: Some(74.0),
        };
        let profile = CycloidalProfile::new(&Parameters::default()).unwrap();
        assert!(matches!(
            profile.execute(&inverted),
            Err(ParameterValidationError::DegenerateGeometry(_))
        ));
    }

    #[test]
    fn offset_reaching_the_center_is_degenerate() {
        let params = Parameters {
            pressure_angle_offset: 3.0,
            ..Parameters::default()
        };
        let limits = RadialLimits {
            min_rad: Some(3.0),
            max_rad: Some(5.0),
        };
        assert!(matches!(
            CycloidalProfile::new(&params).unwrap().execute(&limits),
            Err(ParameterValidationError::DegenerateGeometry(_))
        ));
    }

    proptest! {
        #[test]
        fn valid_bundles_give_closed_curves_inside_the_annulus(
            tooth_count in 3u32..=50,
            tooth_pitch in 2.0f64..20.0,
            eccentricity in 0.5f64..=4.7,
            limit in 10.0f64..=80.0,
            offset in 0.0f64..0.5,
            segments in 20u32..=2000,
        ) {
            let params = Parameters {
                tooth_count,
                tooth_pitch,
                eccentricity,
                pressure_angle_limit: limit,
                pressure_angle_offset: offset,
                line_segment_count: segments,
                ..Parameters::default()
            };
            prop_assert_eq!(params.validate(), Ok(()));

            match generate_cycloidal_curve(&params) {
                Ok(curve) => {
                    prop_assert_eq!(curve.len(), segments as usize + 1);
                    let first = curve[0];
                    let last = curve[curve.len() - 1];
                    let scale = first.coords.norm().max(1.0);
                    prop_assert!((first - last).norm() < 1e-9 * scale, "open: {} vs {}", first, last);

                    if let Some((min_rad, max_rad)) = compute_limits(&params).unwrap().bounds() {
                        let slack = 1e-9 * max_rad.max(1.0);
                        let low = min_rad - offset - slack;
                        for r in radii(&curve) {
                            prop_assert!(
                                r >= low && r <= max_rad + slack,
                                "radius {} outside [{}, {}]", r, low, max_rad
                            );
                        }
                    }
                }
                Err(err) => {
                    prop_assert!(
                        matches!(err, ParameterValidationError::DegenerateGeometry(_)),
                        "unexpected error {}", err
                    );
                }
            }
        }
    }

    #[test]
    fn invalid_bundle_is_rejected_before_sampling() {
        let params = Parameters {
            tooth_count: 2,
            ..Parameters::default()
        };
        assert_eq!(
            generate_cycloidal_curve(&params),
            Err(ParameterValidationError::ToothCountOutOfRange(2))
        );
    }
}
