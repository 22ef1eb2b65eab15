use crate::error::{ParameterValidationError, Result};
use crate::math::{Point2, Point3, TOLERANCE};

/// A right circular cylinder standing on the XY plane along +Z.
///
/// This is a description only: the host kernel builds the solid. `base`
/// is the center of the bottom disc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    base: Point3,
    radius: f64,
    height: f64,
}

impl Cylinder {
    /// Creates a cylinder descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterValidationError::DegenerateGeometry`] if the radius
    /// or height is not a positive finite number.
    pub fn new(base: Point3, radius: f64, height: f64) -> Result<Self> {
        if !radius.is_finite() || radius < TOLERANCE {
            return Err(ParameterValidationError::DegenerateGeometry(format!(
                "cylinder radius must be positive, got {radius}"
            )));
        }
        if !height.is_finite() || height < TOLERANCE {
            return Err(ParameterValidationError::DegenerateGeometry(format!(
                "cylinder height must be positive, got {height}"
            )));
        }
        Ok(Self {
            base,
            radius,
            height,
        })
    }

    /// Creates a cylinder from a planar center, bottom elevation and diameter.
    ///
    /// # Errors
    ///
    /// Same as [`Cylinder::new`].
    pub fn from_diameter(center: Point2, z: f64, diameter: f64, height: f64) -> Result<Self> {
        Self::new(Point3::new(center.x, center.y, z), diameter / 2.0, height)
    }

    /// Returns the center of the bottom disc.
    #[must_use]
    pub fn base(&self) -> &Point3 {
        &self.base
    }

    /// Returns the center projected onto the XY plane.
    #[must_use]
    pub fn center(&self) -> Point2 {
        self.base.xy()
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[must_use]
    pub fn diameter(&self) -> f64 {
        self.radius * 2.0
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Elevation of the top disc.
    #[must_use]
    pub fn top(&self) -> f64 {
        self.base.z + self.height
    }
}

/// Places `count` points evenly on a circle of `radius` around `center`,
/// the first one at `start_angle`.
#[must_use]
pub fn circular_pattern(center: Point2, radius: f64, count: u32, start_angle: f64) -> Vec<Point2> {
    let step = std::f64::consts::TAU / f64::from(count.max(1));
    (0..count)
        .map(|i| {
            let angle = start_angle + step * f64::from(i);
            Point2::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}
