//! Peak-to-trough amplitude detection
//!
//! Tracks the most recent local peak and the most recent local trough and
//! counts a step whenever their difference exceeds the global
//! `mean + std_dev` threshold.
//!
//! ## Known quirk
//!
//! The gap is tested at every sample, not once per new extremum, and nothing
//! resets it after a step. A large swing therefore keeps counting at each
//! following sample until a newer peak or trough narrows the gap. Step counts
//! from this detector are reproducible but inflated on long, high-amplitude
//! strides.

use crate::{
    constants::detection::GLOBAL_STD_DEV_MULTIPLIER,
    errors::StepResult,
    stats::SignalStats,
};

use super::peaks;

/// Count samples at which the latest peak-trough gap exceeds the threshold
///
/// Both extrema start at the first sample. The scan stops one sample earlier
/// than the other detectors: the last two samples are never tested.
pub fn count_peak_trough_steps(magnitudes: &[f64]) -> StepResult<usize> {
    let stats = SignalStats::compute(magnitudes)?;
    let threshold = stats.threshold(GLOBAL_STD_DEV_MULTIPLIER);

    let mut max_peak = magnitudes[0];
    let mut min_trough = magnitudes[0];
    let mut steps = 0;

    for i in 1..magnitudes.len().saturating_sub(2) {
        if peaks::is_local_peak(magnitudes, i) {
            max_peak = magnitudes[i];
        }
        if peaks::is_local_trough(magnitudes, i) {
            min_trough = magnitudes[i];
        }
        if max_peak - min_trough > threshold {
            steps += 1;
        }
    }

    Ok(steps)
}
