use super::Point2;

/// Returns the minimum distance from `p` to the segment from `a` to `b`.
#[must_use]
pub fn point_to_segment_dist(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    let ab = b - a;
    let len_sq = ab.norm_squared();

    if len_sq < 1e-20 {
        // Degenerate segment (zero length).
        return (p - a).norm();
    }

    // Project point onto the infinite line, clamp to [0, 1].
    let t = ((p - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
    (p - (a + ab * t)).norm()
}

/// Returns the minimum distance from `p` to the polyline through `points`.
///
/// A single-point polyline degenerates to point distance; an empty one
/// returns infinity.
#[must_use]
pub fn point_to_polyline_dist(p: &Point2, points: &[Point2]) -> f64 {
    match points {
        [] => f64::INFINITY,
        [only] => (p - only).norm(),
        _ => points
            .windows(2)
            .map(|w| point_to_segment_dist(p, &w[0], &w[1]))
            .fold(f64::INFINITY, f64::min),
    }
}

/// Symmetric Hausdorff distance between two sampled polylines.
///
/// Each sample is measured against the closest point on the other polyline's
/// segments, so two samplings of the same curve at different densities come
/// out close even when their vertices do not coincide.
#[must_use]
pub fn polyline_hausdorff(a: &[Point2], b: &[Point2]) -> f64 {
    let directed = |from: &[Point2], to: &[Point2]| {
        from.iter()
            .map(|p| point_to_polyline_dist(p, to))
            .fold(0.0_f64, f64::max)
    };
    directed(a, b).max(directed(b, a))
}
