pub mod analysis;
pub mod error;
pub mod gearbox;
pub mod geometry;
pub mod math;
pub mod parameters;
pub mod parts;
pub mod profile;

pub use analysis::compute_limits;
pub use error::{ParameterValidationError, Result};
pub use gearbox::{generate_part_descriptors, Gearbox};
pub use parameters::{default_parameters, validate, Parameters, RadialLimits};
pub use parts::PartSet;
pub use profile::{calculate_radii, generate_cycloidal_curve};
