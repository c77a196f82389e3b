//! Local extremum tests shared by the detectors
//!
//! A local peak is strictly greater than both immediate neighbors; a local
//! trough strictly smaller. Plateaus never qualify, and neither do the first
//! and last samples, which lack a neighbor on one side.

use core::ops::Range;

/// Indices that have a neighbor on both sides
#[inline]
pub fn interior(len: usize) -> Range<usize> {
    1..len.saturating_sub(1)
}

/// True when `series[index]` exceeds both neighbors
#[inline]
pub fn is_local_peak(series: &[f64], index: usize) -> bool {
    if index == 0 || index + 1 >= series.len() {
        return false;
    }
    series[index] > series[index - 1] && series[index] > series[index + 1]
}

/// True when `series[index]` is below both neighbors
#[inline]
pub fn is_local_trough(series: &[f64], index: usize) -> bool {
    if index == 0 || index + 1 >= series.len() {
        return false;
    }
    series[index] < series[index - 1] && series[index] < series[index + 1]
}

/// Number of local peaks in the whole series
pub fn count_local_peaks(series: &[f64]) -> usize {
    interior(series.len())
        .filter(|&i| is_local_peak(series, i))
        .count()
}

/// Number of local peaks strictly above `threshold`
pub fn count_peaks_above(series: &[f64], threshold: f64) -> usize {
    interior(series.len())
        .filter(|&i| is_local_peak(series, i) && series[i] > threshold)
        .count()
}
