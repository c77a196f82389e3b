//! Vector magnitude of tri-axial sensor readings
//!
//! Walking shows up as a periodic swing in the length of the acceleration
//! vector regardless of how the device is oriented, so detectors work on the
//! per-sample Euclidean norm rather than on individual axes.

use alloc::vec::Vec;

use crate::{
    constants::layout::AXES_PER_SENSOR,
    errors::{StepError, StepResult},
    matrix::SampleMatrix,
};

/// Euclidean norm of a 3-component reading
///
/// NaN components propagate into the result.
#[inline]
pub fn magnitude(x: f64, y: f64, z: f64) -> f64 {
    libm::sqrt(x * x + y * y + z * z)
}

/// Build the magnitude series of a single sensor
///
/// `samples` must be exactly three columns wide (one sensor's x, y, z axes);
/// slice wider recordings with [`SampleMatrix::columns`] first. Element `i` of
/// the result is the magnitude of row `i`.
pub fn magnitude_series(samples: &SampleMatrix) -> StepResult<Vec<f64>> {
    if samples.width() != AXES_PER_SENSOR {
        return Err(StepError::ColumnMismatch {
            expected: AXES_PER_SENSOR,
            found: samples.width(),
        });
    }
    if samples.is_empty() {
        return Err(StepError::EmptyInput);
    }

    Ok(samples
        .rows()
        .map(|row| magnitude(row[0], row[1], row[2]))
        .collect())
}
