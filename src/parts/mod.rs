mod disk;
mod driver_disk;
mod pin_base;
mod shafts;

pub use disk::CycloidalDisk;
pub use driver_disk::DriverDisk;
pub use pin_base::PinBase;
pub use shafts::{EccentricShaft, OutputShaft, ShaftKey};

use crate::error::{ParameterValidationError, Result};
use crate::math::Point2;
use crate::parameters::{Parameters, RadialLimits};

/// Every part of a two-disk cycloidal gearbox, bottom to top.
#[derive(Debug, Clone, PartialEq)]
pub struct PartSet {
    pub limits: RadialLimits,
    /// The clamped disk profile around the origin, unplaced.
    pub profile: Vec<Point2>,
    pub pin_base: PinBase,
    pub disks: [CycloidalDisk; 2],
    pub driver_disk: DriverDisk,
    pub eccentric_shaft: EccentricShaft,
    pub output_shaft: OutputShaft,
}

impl PartSet {
    /// Lays out all parts around `profile`.
    ///
    /// # Errors
    ///
    /// Returns `DegenerateGeometry` if either radial limit is missing, the
    /// limits are inverted, or a feature comes out with no size.
    pub fn build(params: &Parameters, limits: &RadialLimits, profile: Vec<Point2>) -> Result<Self> {
        let (min_rad, max_rad) = limits.checked_bounds()?.ok_or_else(|| {
            ParameterValidationError::DegenerateGeometry(
                "pressure angle limits not found, parts need both".to_owned(),
            )
        })?;

        let pin_base = PinBase::new(params, min_rad, max_rad)?;
        let disks = [
            CycloidalDisk::new(params, 0, &profile, min_rad)?,
            CycloidalDisk::new(params, 1, &profile, min_rad)?,
        ];
        let driver_disk = DriverDisk::new(params, min_rad)?;
        let eccentric_shaft = EccentricShaft::new(params)?;
        let hole_centers: Vec<Point2> = driver_disk.holes.iter().map(|h| h.center()).collect();
        let output_shaft = OutputShaft::new(params, &hole_centers, driver_disk.plate.top())?;

        Ok(Self {
            limits: *limits,
            profile,
            pin_base,
            disks,
            driver_disk,
            eccentric_shaft,
            output_shaft,
        })
    }
}
