//! Global-threshold peak counting
//!
//! Baseline detector: every local peak above `mean + std_dev` of the whole
//! recording is a step. No merging or minimum spacing is applied, so a peak
//! that chatters into several local maxima above the threshold counts several
//! times.

use crate::{
    constants::detection::GLOBAL_STD_DEV_MULTIPLIER,
    errors::StepResult,
    stats::SignalStats,
};

use super::peaks;

/// Count local peaks above the global `mean + std_dev` threshold
pub fn count_simple_peaks(magnitudes: &[f64]) -> StepResult<usize> {
    let stats = SignalStats::compute(magnitudes)?;
    let threshold = stats.threshold(GLOBAL_STD_DEV_MULTIPLIER);
    Ok(peaks::count_peaks_above(magnitudes, threshold))
}
