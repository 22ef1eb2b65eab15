use std::f64::consts::PI;

use nalgebra::Isometry2;

use crate::error::Result;
use crate::geometry::{circular_pattern, Cylinder};
use crate::math::{Point2, Vector2};
use crate::parameters::Parameters;

/// One cycloidal disk placed on its eccentric.
#[derive(Debug, Clone, PartialEq)]
pub struct CycloidalDisk {
    pub center: Point2,
    /// Rotation of the disk about its own center, radians.
    pub rotation: f64,
    /// Elevation of the disk's bottom face.
    pub z: f64,
    pub height: f64,
    /// The profile moved to `center` and turned by `rotation`.
    pub outline: Vec<Point2>,
    pub bore: Cylinder,
    pub driver_holes: Vec<Cylinder>,
}

impl CycloidalDisk {
    /// Places disk `index` (0 or 1) of the stack.
    ///
    /// Disk 0 sits on `(+e, 0)`. Disk 1 is the pose a single disk reaches
    /// after half an input turn: center on `(-e, 0)`, turned back by `π/N`.
    ///
    /// # Errors
    ///
    /// Returns `DegenerateGeometry` if a feature has no size.
    pub fn new(params: &Parameters, index: u32, profile: &[Point2], min_rad: f64) -> Result<Self> {
        let (center, rotation) = if index == 0 {
            (Point2::new(params.eccentricity, 0.0), 0.0)
        } else {
            (
                Point2::new(-params.eccentricity, 0.0),
                -PI / f64::from(params.lobe_count()),
            )
        };
        let placement = Isometry2::new(center.coords, rotation);
        let z = params.base_height + f64::from(index) * params.disk_height;

        let outline = profile.iter().map(|p| placement * p).collect();
        let bore = Cylinder::from_diameter(
            center,
            z,
            params.shaft_diameter + params.clearance,
            params.disk_height,
        )?;
        let driver_holes = driver_hole_centers(params, min_rad)
            .iter()
            .map(|c| {
                Cylinder::from_diameter(
                    placement * c,
                    z,
                    driver_hole_diameter(params),
                    params.disk_height,
                )
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            center,
            rotation,
            z,
            height: params.disk_height,
            outline,
            bore,
            driver_holes,
        })
    }

    /// Offset of the disk center from the input axis.
    #[must_use]
    pub fn offset(&self) -> Vector2 {
        self.center.coords
    }
}

/// Hole centers of the driver pattern around the origin, radius `min_rad / 2`.
pub(crate) fn driver_hole_centers(params: &Parameters, min_rad: f64) -> Vec<Point2> {
    circular_pattern(Point2::origin(), min_rad / 2.0, params.driver_disk_hole_count, 0.0)
}

/// Driver hole diameter: two roller diameters plus clearance.
pub(crate) fn driver_hole_diameter(params: &Parameters) -> f64 {
    params.roller_diameter * 2.0 + params.clearance
}
