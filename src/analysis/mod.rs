mod pressure_angle;

pub use pressure_angle::{compute_limits, PressureAngle, SweepAngles};
