use crate::error::Result;
use crate::geometry::{circular_pattern, Cylinder};
use crate::math::Point2;
use crate::parameters::Parameters;

/// The stationary ring: a base plate with the pins standing on it.
#[derive(Debug, Clone, PartialEq)]
pub struct PinBase {
    pub plate: Cylinder,
    /// Radius of the circle the pin centers lie on.
    pub pin_circle_radius: f64,
    pub pins: Vec<Cylinder>,
}

impl PinBase {
    /// Places `tooth_count` pins midway between the radial limits, pushed
    /// out by one roller radius.
    ///
    /// # Errors
    ///
    /// Returns `DegenerateGeometry` if the overall height leaves no room for
    /// pins above the base plate.
    pub fn new(params: &Parameters, min_rad: f64, max_rad: f64) -> Result<Self> {
        let plate = Cylinder::from_diameter(Point2::origin(), 0.0, params.diameter, params.base_height)?;

        let pin_circle_radius = (min_rad + max_rad) / 2.0 + params.roller_diameter / 2.0;
        let pin_height = params.height - params.base_height;
        let pins = circular_pattern(Point2::origin(), pin_circle_radius, params.tooth_count, 0.0)
            .into_iter()
            .map(|c| Cylinder::from_diameter(c, params.base_height, params.roller_diameter, pin_height))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            plate,
            pin_circle_radius,
            pins,
        })
    }
}
