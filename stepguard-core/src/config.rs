//! Counter Configuration
//!
//! ## Overview
//!
//! A [`CounterConfig`] names the detector to run, its parameters, and where each
//! sensor's axes sit in the recorded sample matrix. With the `serde` feature it
//! round-trips through any serde format; with `json` it loads straight from a
//! JSON document.
//!
//! ## JSON Shape
//!
//! ```json
//! {
//!   "detector": {
//!     "strategy": "adaptive_window",
//!     "window_radius": 100,
//!     "std_dev_multiplier": 0.5,
//!     "refractory_samples": 15,
//!     "refractory_after_any_peak": true
//!   },
//!   "layout": {
//!     "accel": { "start": 3, "end": 6 },
//!     "gyro":  { "start": 7, "end": 10 }
//!   }
//! }
//! ```
//!
//! Omitted fields fall back to their defaults: simple peak detection over the
//! standard 6-column layout.
//!
//! ## Presets
//!
//! ```rust
//! use stepguard_core::{ColumnLayout, CounterConfig, Detector};
//!
//! // Phone exports with timestamps ahead of the sensor columns
//! let config = CounterConfig {
//!     detector: Detector::hysteresis(),
//!     layout: ColumnLayout::extended(),
//! };
//! let counter = config.build()?;
//! assert_eq!(counter.layout().gyro.start, 7);
//! # Ok::<(), stepguard_core::StepError>(())
//! ```

use crate::{
    constants::layout::{
        ACCEL_COLUMNS, AXES_PER_SENSOR, EXTENDED_ACCEL_COLUMNS, EXTENDED_GYRO_COLUMNS,
        GYRO_COLUMNS,
    },
    counter::StepCounter,
    detectors::Detector,
    errors::{StepError, StepResult},
};

/// Half-open column range `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnRange {
    /// First column (inclusive)
    pub start: usize,
    /// One past the last column
    pub end: usize,
}

impl ColumnRange {
    /// Create a range from its bounds
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of columns covered (zero for empty or inverted ranges)
    pub const fn width(&self) -> usize {
        self.end.saturating_sub(self.start)
    }
}

impl From<(usize, usize)> for ColumnRange {
    fn from((start, end): (usize, usize)) -> Self {
        Self::new(start, end)
    }
}

/// Where each sensor's x, y, z axes sit in a sample row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ColumnLayout {
    /// Accelerometer columns
    pub accel: ColumnRange,
    /// Gyroscope columns
    pub gyro: ColumnRange,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self::standard()
    }
}

impl ColumnLayout {
    /// `ax, ay, az, gx, gy, gz`
    pub fn standard() -> Self {
        Self {
            accel: ACCEL_COLUMNS.into(),
            gyro: GYRO_COLUMNS.into(),
        }
    }

    /// 10-column exports: accelerometer in `[3, 6)`, gyroscope in `[7, 10)`
    pub fn extended() -> Self {
        Self {
            accel: EXTENDED_ACCEL_COLUMNS.into(),
            gyro: EXTENDED_GYRO_COLUMNS.into(),
        }
    }

    /// Both ranges must cover exactly one sensor's three axes
    pub fn validate(&self) -> StepResult<()> {
        for range in [self.accel, self.gyro] {
            if range.start >= range.end {
                return Err(StepError::InvalidColumnRange {
                    start: range.start,
                    end: range.end,
                });
            }
            if range.width() != AXES_PER_SENSOR {
                return Err(StepError::ColumnMismatch {
                    expected: AXES_PER_SENSOR,
                    found: range.width(),
                });
            }
        }
        Ok(())
    }
}

/// Detector choice plus column layout
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CounterConfig {
    /// Strategy and its parameters
    pub detector: Detector,
    /// Sensor column positions
    pub layout: ColumnLayout,
}

impl CounterConfig {
    /// Check detector parameters and layout
    pub fn validate(&self) -> StepResult<()> {
        self.detector.validate()?;
        self.layout.validate()
    }

    /// Validate and produce a ready counter
    pub fn build(&self) -> StepResult<StepCounter> {
        self.validate()?;
        Ok(StepCounter::with_layout(self.detector, self.layout))
    }

    /// Parse from a JSON document and validate
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> StepResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(|_e| {
            log_warn!("rejected counter configuration: {}", _e);
            StepError::ConfigParse
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to a JSON document
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> StepResult<alloc::string::String> {
        serde_json::to_string_pretty(self).map_err(|_| StepError::ConfigParse)
    }
}
