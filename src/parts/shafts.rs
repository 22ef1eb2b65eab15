use std::f64::consts::TAU;

use crate::error::Result;
use crate::geometry::{Cylinder, Pline, PlineVertex};
use crate::math::arc_2d::bulge_from_sweep;
use crate::math::Point2;
use crate::parameters::Parameters;

/// D-shaped bore that keys the input shaft to the eccentric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShaftKey {
    pub diameter: f64,
    /// Twice the distance from the center to the flat.
    pub flat_diameter: f64,
}

impl ShaftKey {
    /// Returns the key outline as a bulge polyline.
    ///
    /// The flat is vertical, at `x = flat_diameter / 2`. When it does not cut
    /// the circle the outline is the full circle.
    #[must_use]
    pub fn pline(&self) -> Pline {
        let r = self.diameter / 2.0;
        let f = self.flat_diameter / 2.0;

        if f >= r {
            return Pline {
                vertices: vec![PlineVertex::new(r, 0.0, 1.0), PlineVertex::new(-r, 0.0, 1.0)],
                closed: true,
            };
        }

        let h = (r * r - f * f).sqrt();
        let sweep = TAU - 2.0 * (f / r).acos();
        Pline {
            vertices: vec![
                PlineVertex::new(f, h, bulge_from_sweep(sweep)),
                PlineVertex::line(f, -h),
            ],
            closed: true,
        }
    }

    /// Closed point outline of the key with at most `tolerance` deviation on
    /// the arc.
    #[must_use]
    pub fn outline(&self, tolerance: f64) -> Vec<Point2> {
        self.pline().to_points(tolerance)
    }
}

/// The eccentric driven by the input shaft.
#[derive(Debug, Clone, PartialEq)]
pub struct EccentricShaft {
    /// One eccentric per disk, offset by `+e` and `-e`, stacked.
    pub lobes: [Cylinder; 2],
    pub key: ShaftKey,
}

impl EccentricShaft {
    /// # Errors
    ///
    /// Returns `DegenerateGeometry` if a feature has no size.
    pub fn new(params: &Parameters) -> Result<Self> {
        let lobe = |sign: f64, level: f64| {
            Cylinder::from_diameter(
                Point2::new(sign * params.eccentricity, 0.0),
                params.base_height + level * params.disk_height,
                params.shaft_diameter,
                params.disk_height,
            )
        };
        Ok(Self {
            lobes: [lobe(1.0, 0.0)?, lobe(-1.0, 1.0)?],
            key: ShaftKey {
                diameter: params.key_diameter,
                flat_diameter: params.key_flat_diameter,
            },
        })
    }

    /// Combined height of both eccentrics.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.lobes[1].top() - self.lobes[0].base().z
    }
}

/// Output shaft with the flange carrying the driver pins.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputShaft {
    pub flange: Cylinder,
    pub shaft: Cylinder,
    /// Driver pins, one per driver-disk hole.
    pub pins: Vec<Cylinder>,
}

impl OutputShaft {
    /// Builds the flange on top of `z`, the shaft above it, and a pin at
    /// every driver hole center.
    ///
    /// # Errors
    ///
    /// Returns `DegenerateGeometry` if a feature has no size.
    pub fn new(params: &Parameters, hole_centers: &[Point2], z: f64) -> Result<Self> {
        let flange = Cylinder::from_diameter(
            Point2::origin(),
            z,
            params.driver_circle_diameter,
            params.disk_height,
        )?;
        let shaft = Cylinder::from_diameter(
            Point2::origin(),
            flange.top(),
            params.shaft_diameter,
            params.height,
        )?;
        let pins = hole_centers
            .iter()
            .map(|&c| Cylinder::from_diameter(c, z, params.driver_hole_diameter, params.disk_height))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            flange,
            shaft,
            pins,
        })
    }
}
