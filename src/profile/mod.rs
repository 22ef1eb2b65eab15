mod cycloidal_disk;
mod radii;

pub use cycloidal_disk::{generate_cycloidal_curve, CycloidalProfile};
pub use radii::{calculate_radii, RollingRadii};
