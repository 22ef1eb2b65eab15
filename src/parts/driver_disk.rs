use crate::error::Result;
use crate::geometry::Cylinder;
use crate::math::Point3;
use crate::parameters::Parameters;

use super::disk::{driver_hole_centers, driver_hole_diameter};

/// Output-side plate above the cycloidal disks.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverDisk {
    pub plate: Cylinder,
    pub holes: Vec<Cylinder>,
}

impl DriverDisk {
    /// Builds a plate of radius `min_rad` on top of both disks with
    /// `driver_disk_hole_count` holes on radius `min_rad / 2`.
    ///
    /// # Errors
    ///
    /// Returns `DegenerateGeometry` if a feature has no size.
    pub fn new(params: &Parameters, min_rad: f64) -> Result<Self> {
        let z = params.base_height + 2.0 * params.disk_height;
        let plate = Cylinder::new(Point3::new(0.0, 0.0, z), min_rad, params.disk_height)?;
        let holes = driver_hole_centers(params, min_rad)
            .into_iter()
            .map(|c| Cylinder::from_diameter(c, z, driver_hole_diameter(params), params.disk_height))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { plate, holes })
    }
}
