//! 2D arc/bulge math utilities.
//!
//! Bulge convention: `bulge = tan(sweep_angle / 4)`.
//! - `bulge = 0`: straight line
//! - `bulge > 0`: counter-clockwise arc
//! - `bulge < 0`: clockwise arc
//! - `|bulge| = 1`: semicircle

use super::{Point2, Vector2};

/// Center-radius-angle form of a bulge arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSpan {
    pub center: Point2,
    pub radius: f64,
    pub start_angle: f64,
    pub sweep: f64,
}

impl ArcSpan {
    /// Evaluates a point on the arc at parameter `t` in `[0, 1]`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        let angle = self.start_angle + self.sweep * t;
        Point2::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }

    /// Arc length of the span.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.radius * self.sweep.abs()
    }
}

/// Converts a bulge-defined arc segment from `p0` to `p1` to center-radius-angle form.
///
/// Returns `None` for a zero-length chord or a zero bulge (straight segment).
#[must_use]
pub fn arc_from_bulge(p0: Point2, p1: Point2, bulge: f64) -> Option<ArcSpan> {
    let chord = p1 - p0;
    let chord_len = chord.norm();
    if chord_len < 1e-12 || bulge.abs() < 1e-12 {
        return None;
    }

    // Center lies on the chord bisector, left of the chord for 0 < bulge < 1.
    let sagitta_ratio = (1.0 - bulge * bulge) / (2.0 * bulge);
    let mid = nalgebra::center(&p0, &p1);
    let normal = Vector2::new(-chord.y, chord.x) / chord_len;
    let center = mid + normal * (sagitta_ratio * chord_len * 0.5);

    let radius = (chord_len * 0.5) * (1.0 + bulge * bulge) / (2.0 * bulge.abs());
    let start_angle = (p0.y - center.y).atan2(p0.x - center.x);

    Some(ArcSpan {
        center,
        radius,
        start_angle,
        sweep: 4.0 * bulge.atan(),
    })
}

/// Bulge value for an arc sweeping `sweep` radians (signed, CCW positive).
#[must_use]
pub fn bulge_from_sweep(sweep: f64) -> f64 {
    (sweep / 4.0).tan()
}
