//! Step Counter Orchestration
//!
//! Ties the pieces together for a whole recording:
//!
//! ```text
//! SampleMatrix ──columns(accel)──► magnitude_series ──┐
//!       │                                             ├──► Detector::count ──► steps
//!       └──────columns(gyro)───► magnitude_series ────┘   (gyro only if required)
//! ```
//!
//! The counter holds configuration only. Each call derives fresh magnitude
//! series from its input and keeps nothing afterwards.

use alloc::vec::Vec;

use crate::{
    config::{ColumnLayout, ColumnRange},
    detectors::Detector,
    errors::StepResult,
    magnitude::magnitude_series,
    matrix::SampleMatrix,
};

/// Counts steps in recorded IMU sessions with one configured detector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepCounter {
    detector: Detector,
    layout: ColumnLayout,
}

impl Default for StepCounter {
    fn default() -> Self {
        Self::new(Detector::default())
    }
}

impl StepCounter {
    /// Counter over the standard `ax, ay, az, gx, gy, gz` layout
    pub fn new(detector: Detector) -> Self {
        Self::with_layout(detector, ColumnLayout::standard())
    }

    /// Counter over a custom column layout
    ///
    /// The layout is checked when a matrix is sliced; use
    /// [`CounterConfig::build`](crate::CounterConfig::build) to validate up front.
    pub fn with_layout(detector: Detector, layout: ColumnLayout) -> Self {
        Self { detector, layout }
    }

    /// Configured detector
    pub fn detector(&self) -> &Detector {
        &self.detector
    }

    /// Configured column layout
    pub fn layout(&self) -> &ColumnLayout {
        &self.layout
    }

    /// Count steps in a recording
    ///
    /// `times` holds the elapsed time of each row. No detector reads it; a
    /// length that disagrees with `samples` is logged and otherwise ignored.
    pub fn count_steps(&self, times: &[f64], samples: &SampleMatrix) -> StepResult<usize> {
        if times.len() != samples.len() {
            log_warn!(
                "time series has {} entries but sample matrix has {} rows",
                times.len(),
                samples.len()
            );
        }

        let accel = sensor_magnitudes(samples, self.layout.accel)?;
        let gyro = if self.detector.requires_gyro() {
            Some(sensor_magnitudes(samples, self.layout.gyro)?)
        } else {
            None
        };

        let steps = self.detector.count(&accel, gyro.as_deref())?;

        log_debug!(
            "{} counted {} steps over {} samples",
            self.detector.name(),
            steps,
            samples.len()
        );

        Ok(steps)
    }
}

/// Slice one sensor's columns and reduce them to magnitudes
fn sensor_magnitudes(samples: &SampleMatrix, range: ColumnRange) -> StepResult<Vec<f64>> {
    let axes = samples.columns(range.start, range.end)?;
    magnitude_series(&axes)
}
