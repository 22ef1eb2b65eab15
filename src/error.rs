use thiserror::Error;

/// Failure raised when a parameter bundle cannot produce valid geometry.
///
/// Every invariant of [`Parameters`](crate::parameters::Parameters) has its own
/// variant, so a caller can tell which field to fix. `DegenerateGeometry`
/// comes out of the analyzer and curve generator when a denominator collapses.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterValidationError {
    #[error("tooth count {0} is out of range [3, 50]")]
    ToothCountOutOfRange(u32),

    #[error("eccentricity {0} must be at least the minimum and at most half the roller diameter")]
    EccentricityOutOfRange(f64),

    #[error("roller diameter {0} is too small")]
    RollerDiameterTooSmall(f64),

    #[error("shaft diameter {0} is too small")]
    ShaftDiameterTooSmall(f64),

    #[error("outer diameter {0} must be larger than the roller circle diameter {1}")]
    DiameterNotLargerThanRollerCircle(f64, f64),

    #[error("pressure angle limit {0} degrees is out of range [10, 80]")]
    PressureAngleLimitOutOfRange(f64),

    #[error("{field} = {value} is not a valid dimension")]
    InvalidDimension { field: &'static str, value: f64 },

    #[error("line segment count {0} is out of range [20, 10000]")]
    LineSegmentCountOutOfRange(u32),

    #[error("driver disk hole count {0} must be at least 3")]
    DriverHoleCountOutOfRange(u32),

    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),
}

/// Convenience type alias for results using [`ParameterValidationError`].
pub type Result<T> = std::result::Result<T, ParameterValidationError>;
