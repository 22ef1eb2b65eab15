pub mod arc_2d;
pub mod distance_2d;
pub mod polar;

pub use polar::{clamp_unit, to_polar, to_rect};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Denominators smaller than this make the geometry degenerate.
pub const DEGENERATE_TOLERANCE: f64 = 1e-12;

/// How far past `[-1, 1]` a value may drift before [`clamp_unit`] warns.
pub const CLAMP_WARN_TOLERANCE: f64 = 1e-6;
