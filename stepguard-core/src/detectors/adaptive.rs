//! Adaptive sliding-window peak detection
//!
//! ## Overview
//!
//! Stride energy varies across a recording: slow walking, stairs, and running
//! produce very different peak heights. A single global threshold either misses
//! soft steps or counts noise. This detector derives the threshold for each
//! candidate peak from the statistics of a window centered on it:
//!
//! ```text
//! window(i) = [i - W, i + W)   clamped to the series
//! step at i ⇔ i is a local peak
//!             ∧ x[i] > mean(window) + k × std_dev(window)
//! ```
//!
//! After a counted step the next `R` samples are skipped (refractory period),
//! so a single footfall cannot trigger twice. With
//! [`AdaptiveParams::refractory_after_any_peak`] set, every local peak starts a
//! refractory period, counted or not, so a sub-threshold bump can hide a tall
//! peak right behind it.
//!
//! ## Cost
//!
//! Window statistics come from [`WindowedStats`] prefix sums: O(n) to build,
//! O(1) per window, so the scan is O(n) regardless of `W`.
//!
//! ## Presets
//!
//! | Preset                              | W    | k   | R  | Skip after       |
//! |-------------------------------------|------|-----|----|------------------|
//! | [`AdaptiveParams::default`]         | 1000 | 0.4 | 25 | counted steps    |
//! | [`AdaptiveParams::gyro_assisted`]   | 100  | 0.5 | 15 | every local peak |

use crate::{
    constants::detection::{
        ADAPTIVE_REFRACTORY_SAMPLES, ADAPTIVE_STD_DEV_MULTIPLIER, ADAPTIVE_WINDOW_RADIUS,
        GYRO_ASSISTED_REFRACTORY_SAMPLES, GYRO_ASSISTED_STD_DEV_MULTIPLIER,
        GYRO_ASSISTED_WINDOW_RADIUS, MIN_PEAK_NEIGHBORHOOD,
    },
    errors::{StepError, StepResult},
    stats::WindowedStats,
};

use super::peaks;

/// Parameters of the adaptive detector
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AdaptiveParams {
    /// Window half-width `W` in samples
    pub window_radius: usize,

    /// Standard deviations above the local mean `k`
    pub std_dev_multiplier: f64,

    /// Samples skipped after a counted step `R`
    pub refractory_samples: usize,

    /// Skip `R` samples after every local peak, not only counted ones
    pub refractory_after_any_peak: bool,
}

impl Default for AdaptiveParams {
    fn default() -> Self {
        Self {
            window_radius: ADAPTIVE_WINDOW_RADIUS,
            std_dev_multiplier: ADAPTIVE_STD_DEV_MULTIPLIER,
            refractory_samples: ADAPTIVE_REFRACTORY_SAMPLES,
            refractory_after_any_peak: false,
        }
    }
}

impl AdaptiveParams {
    /// Narrow-window preset tuned for recordings that also carry a gyroscope
    ///
    /// Only the accelerometer series is scanned. Besides the tighter window
    /// and spacing, every local peak starts a refractory period.
    pub fn gyro_assisted() -> Self {
        Self {
            window_radius: GYRO_ASSISTED_WINDOW_RADIUS,
            std_dev_multiplier: GYRO_ASSISTED_STD_DEV_MULTIPLIER,
            refractory_samples: GYRO_ASSISTED_REFRACTORY_SAMPLES,
            refractory_after_any_peak: true,
        }
    }

    /// Reject parameters the scan cannot use
    pub fn validate(&self) -> StepResult<()> {
        if self.window_radius == 0 {
            return Err(StepError::InvalidConfig {
                reason: "window radius must be at least one sample",
            });
        }
        if !self.std_dev_multiplier.is_finite() || self.std_dev_multiplier < 0.0 {
            return Err(StepError::InvalidConfig {
                reason: "std_dev multiplier must be finite and non-negative",
            });
        }
        Ok(())
    }
}

/// Count local peaks above their window's adaptive threshold
///
/// Series shorter than three samples contain no testable index and yield zero
/// without computing any statistics.
pub fn count_adaptive_steps(magnitudes: &[f64], params: &AdaptiveParams) -> StepResult<usize> {
    params.validate()?;

    let len = magnitudes.len();
    if len < MIN_PEAK_NEIGHBORHOOD {
        return Ok(0);
    }
    if params.window_radius >= len {
        log_warn!(
            "adaptive window radius {} covers the whole series of {} samples",
            params.window_radius,
            len
        );
    }

    let windows = WindowedStats::new(magnitudes);
    let last = len - 1;
    let mut steps = 0;
    let mut i = 1;

    while i < last {
        if peaks::is_local_peak(magnitudes, i) {
            let threshold = windows
                .around(i, params.window_radius)?
                .threshold(params.std_dev_multiplier);
            let counted = magnitudes[i] > threshold;
            if counted {
                steps += 1;
                log_trace!("adaptive step at sample {} ({:.3} > {:.3})", i, magnitudes[i], threshold);
            }
            if counted || params.refractory_after_any_peak {
                i = i.saturating_add(params.refractory_samples);
            }
        }
        i = i.saturating_add(1);
    }

    Ok(steps)
}
