use std::f64::consts::PI;

use crate::math::arc_2d::arc_from_bulge;
use crate::math::Point2;

/// Corner of an outline. `bulge` shapes the edge leaving this corner:
/// zero for a straight edge, `tan(sweep / 4)` for an arc, positive when the
/// arc turns counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlineVertex {
    pub x: f64,
    pub y: f64,
    pub bulge: f64,
}

impl PlineVertex {
    #[must_use]
    pub fn new(x: f64, y: f64, bulge: f64) -> Self {
        Self { x, y, bulge }
    }

    /// Corner followed by a straight edge.
    #[must_use]
    pub fn line(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0)
    }

    fn point(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }
}

/// Planar outline made of straight edges and circular arcs.
///
/// A closed outline has an edge from the last corner back to the first.
#[derive(Debug, Clone)]
pub struct Pline {
    pub vertices: Vec<PlineVertex>,
    pub closed: bool,
}

impl Pline {
    /// Edges of the outline as `(start corner, end point)` pairs.
    fn edges(&self) -> impl Iterator<Item = (&PlineVertex, Point2)> + '_ {
        let n = self.vertices.len();
        (0..self.segment_count()).map(move |i| (&self.vertices[i], self.vertices[(i + 1) % n].point()))
    }

    /// Flattens the outline to points, splitting each arc until no chord is
    /// further than `tolerance` from it.
    ///
    /// A closed outline ends on its first point again.
    #[must_use]
    pub fn to_points(&self, tolerance: f64) -> Vec<Point2> {
        let Some(first) = self.vertices.first() else {
            return Vec::new();
        };

        let mut points = vec![first.point()];
        for (start, end) in self.edges() {
            if let Some(arc) = arc_from_bulge(start.point(), end, start.bulge) {
                let steps = arc_subdivision_count(arc.radius, arc.sweep.abs(), tolerance);
                points.extend((1..steps).map(|j| arc.point_at(f64::from(j) / f64::from(steps))));
            }
            points.push(end);
        }
        points
    }

    /// Number of edges; zero below two corners.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        match self.vertices.len() {
            0 | 1 => 0,
            n if self.closed => n,
            n => n - 1,
        }
    }

    /// Exact length of the polyline, arcs included.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.edges()
            .map(|(start, end)| {
                arc_from_bulge(start.point(), end, start.bulge)
                    .map_or_else(|| (end - start.point()).norm(), |arc| arc.length())
            })
            .sum()
    }
}

/// Chords needed so an arc of `radius` and `abs_sweep` deviates by at most
/// `tolerance`, from the sagitta `r·(1 - cos(θ/2))`.
fn arc_subdivision_count(radius: f64, abs_sweep: f64, tolerance: f64) -> u32 {
    if tolerance <= 0.0 || radius < 1e-12 || abs_sweep < 1e-12 {
        return 1;
    }
    let step = if tolerance < radius {
        2.0 * (1.0 - tolerance / radius).acos()
    } else {
        PI
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let steps = (abs_sweep / step).ceil() as u32;
    steps.max(1)
}
