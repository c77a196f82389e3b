//! Step Detection Strategies
//!
//! ## Overview
//!
//! All detectors consume magnitude series (see [`crate::magnitude`]) and return
//! a step count. They are pure functions: no state survives between calls, and
//! the same input always produces the same count.
//!
//! ## Strategies
//!
//! | Detector         | Threshold                    | Spacing      | Sensors       |
//! |------------------|------------------------------|--------------|---------------|
//! | `SimplePeak`     | global `mean + σ`            | none         | accel         |
//! | `Hysteresis`     | global `mean + σ`, then dip  | dip required | accel         |
//! | `PeakTrough`     | peak-trough gap > `mean + σ` | none         | accel         |
//! | `AdaptiveWindow` | local `mean + kσ`            | refractory   | accel         |
//! | `DualSensor`     | global `mean + σ` per sensor | none         | accel + gyro  |
//!
//! ### Choosing a Detector
//!
//! - **SimplePeak** is the baseline. It over-counts when a stride peak breaks
//!   into several local maxima.
//! - **Hysteresis** suppresses that chatter by requiring a relative dip
//!   before crediting the next step.
//! - **PeakTrough** reacts to swing amplitude rather than absolute height, but
//!   keeps counting while a large swing persists (see its module docs).
//! - **AdaptiveWindow** tolerates changing walking intensity within a recording.
//! - **DualSensor** averages accelerometer and gyroscope peak counts.
//!
//! ## Usage Example
//!
//! ```rust
//! use stepguard_core::detectors::Detector;
//!
//! let accel = [9.8, 12.1, 9.6, 9.7, 12.4, 9.5, 9.8, 12.0, 9.7, 9.8];
//!
//! let steps = Detector::SimplePeak.count(&accel, None)?;
//! assert_eq!(steps, 3);
//! # Ok::<(), stepguard_core::StepError>(())
//! ```

mod adaptive;
mod dual;
mod hysteresis;
mod peak_trough;
pub mod peaks;
mod simple;

pub use adaptive::{count_adaptive_steps, AdaptiveParams};
pub use dual::count_dual_sensor_steps;
pub use hysteresis::count_hysteresis_steps;
pub use peak_trough::count_peak_trough_steps;
pub use simple::count_simple_peaks;

use crate::{
    constants::detection::HYSTERESIS_DROP_COEFFICIENT,
    errors::{StepError, StepResult},
};

/// One step detection strategy with its parameters
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "strategy", rename_all = "snake_case"))]
pub enum Detector {
    /// Local peaks above the global `mean + std_dev`
    SimplePeak,

    /// Rise above the global threshold, then dip below a fraction of the peak
    Hysteresis {
        /// Fraction of the running peak the signal must fall below
        #[cfg_attr(feature = "serde", serde(default = "default_drop_coefficient"))]
        drop_coefficient: f64,
    },

    /// Latest peak-trough gap above the global `mean + std_dev`
    PeakTrough,

    /// Local peaks above a sliding-window threshold with refractory spacing
    AdaptiveWindow(AdaptiveParams),

    /// Average of accelerometer and gyroscope peak counts
    DualSensor,
}

#[cfg(feature = "serde")]
fn default_drop_coefficient() -> f64 {
    HYSTERESIS_DROP_COEFFICIENT
}

impl Default for Detector {
    fn default() -> Self {
        Self::SimplePeak
    }
}

impl Detector {
    /// Hysteresis detector with the standard 0.8 drop coefficient
    pub fn hysteresis() -> Self {
        Self::Hysteresis {
            drop_coefficient: HYSTERESIS_DROP_COEFFICIENT,
        }
    }

    /// Adaptive detector with the standard window and spacing
    pub fn adaptive() -> Self {
        Self::AdaptiveWindow(AdaptiveParams::default())
    }

    /// Every strategy with default parameters
    pub fn all() -> [Self; 5] {
        [
            Self::SimplePeak,
            Self::hysteresis(),
            Self::PeakTrough,
            Self::adaptive(),
            Self::DualSensor,
        ]
    }

    /// Stable identifier used in logs and configuration
    pub fn name(&self) -> &'static str {
        match self {
            Self::SimplePeak => "simple_peak",
            Self::Hysteresis { .. } => "hysteresis",
            Self::PeakTrough => "peak_trough",
            Self::AdaptiveWindow(_) => "adaptive_window",
            Self::DualSensor => "dual_sensor",
        }
    }

    /// True when the detector consumes a gyroscope magnitude series
    pub fn requires_gyro(&self) -> bool {
        matches!(self, Self::DualSensor)
    }

    /// Reject parameters the detector cannot use
    pub fn validate(&self) -> StepResult<()> {
        match self {
            Self::Hysteresis { drop_coefficient } => {
                if !(*drop_coefficient > 0.0 && *drop_coefficient <= 1.0) {
                    return Err(StepError::InvalidConfig {
                        reason: "hysteresis drop coefficient must be in (0, 1]",
                    });
                }
                Ok(())
            }
            Self::AdaptiveWindow(params) => params.validate(),
            Self::SimplePeak | Self::PeakTrough | Self::DualSensor => Ok(()),
        }
    }

    /// Count steps in the given magnitude series
    ///
    /// `gyro` is only read by [`Detector::DualSensor`], which fails with
    /// [`StepError::MissingGyroscope`] when it is absent.
    pub fn count(&self, accel: &[f64], gyro: Option<&[f64]>) -> StepResult<usize> {
        self.validate()?;

        match self {
            Self::SimplePeak => count_simple_peaks(accel),
            Self::Hysteresis { drop_coefficient } => {
                count_hysteresis_steps(accel, *drop_coefficient)
            }
            Self::PeakTrough => count_peak_trough_steps(accel),
            Self::AdaptiveWindow(params) => count_adaptive_steps(accel, params),
            Self::DualSensor => {
                let gyro = gyro.ok_or(StepError::MissingGyroscope)?;
                count_dual_sensor_steps(accel, gyro)
            }
        }
    }
}
