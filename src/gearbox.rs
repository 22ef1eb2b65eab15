//! Whole-gearbox generation behind a process-wide lock.

use std::sync::{Mutex, PoisonError};

use crate::analysis::compute_limits;
use crate::error::Result;
use crate::parameters::Parameters;
use crate::parts::PartSet;
use crate::profile::CycloidalProfile;

/// Serializes generation runs so concurrent callers never interleave.
static GENERATION_LOCK: Mutex<()> = Mutex::new(());

/// Validates `params`, analyzes the pressure angle, generates the disk
/// profile and lays out every part.
///
/// # Errors
///
/// Returns the first validation failure, or `DegenerateGeometry` when the
/// parameters pass validation but yield no usable geometry.
pub fn generate_part_descriptors(params: &Parameters) -> Result<PartSet> {
    let _guard = GENERATION_LOCK
        .lock()
        .unwrap_or_else(PoisonError::into_inner);

    params.validate()?;
    let limits = compute_limits(params)?;
    tracing::debug!(
        tooth_count = params.tooth_count,
        min_rad = ?limits.min_rad,
        max_rad = ?limits.max_rad,
        "generating gearbox"
    );

    let profile = CycloidalProfile::new(params)?.execute(&limits)?;
    let parts = PartSet::build(params, &limits, profile)?;
    tracing::debug!(
        pins = parts.pin_base.pins.len(),
        profile_points = parts.profile.len(),
        "gearbox generated"
    );
    Ok(parts)
}

/// A parameter bundle shared between a host and its generation calls.
#[derive(Debug, Default)]
pub struct Gearbox {
    params: Mutex<Parameters>,
}

impl Gearbox {
    #[must_use]
    pub fn new(params: Parameters) -> Self {
        Self {
            params: Mutex::new(params),
        }
    }

    /// Snapshot of the current parameters.
    #[must_use]
    pub fn parameters(&self) -> Parameters {
        self.params
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Edits the parameters in place. No generation can observe a partial
    /// edit.
    pub fn update<R>(&self, edit: impl FnOnce(&mut Parameters) -> R) -> R {
        let mut params = self.params.lock().unwrap_or_else(PoisonError::into_inner);
        edit(&mut params)
    }

    /// Generates all parts from the current parameters.
    ///
    /// # Errors
    ///
    /// See [`generate_part_descriptors`].
    pub fn generate(&self) -> Result<PartSet> {
        let params = self.params.lock().unwrap_or_else(PoisonError::into_inner);
        generate_part_descriptors(&params)
    }
}
