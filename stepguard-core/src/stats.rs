//! Signal Statistics for Threshold Derivation
//!
//! ## Overview
//!
//! Every detector derives its threshold as `mean + k × std_dev` of a magnitude
//! series, either over the whole recording or over a window around the sample
//! being tested. This module provides both.
//!
//! ## Definitions
//!
//! ```text
//! mean     = Σx / n
//! std_dev  = sqrt( Σ(x - mean)² / (n - 1) )     (sample, unbiased divisor)
//! ```
//!
//! The sample standard deviation is undefined for `n == 1`, and the mean for
//! `n == 0`. Both are reported as errors instead of producing NaN or infinity.
//!
//! ## Windowed Statistics
//!
//! The adaptive detector needs statistics of a window around every index.
//! Recomputing them costs O(W) per index; [`WindowedStats`] instead keeps
//! prefix sums of the series and its squares so any window costs O(1):
//!
//! ```text
//! S1 = Σ_{a ≤ j < b} (x_j - c)        S2 = Σ_{a ≤ j < b} (x_j - c)²
//!
//! mean     = c + S1 / n
//! variance = (S2 - S1² / n) / (n - 1)
//! ```
//!
//! Values are shifted by the global mean `c` before summing. Without the shift
//! the two sums grow with the signal's DC level (gravity is ~9.8 m/s² on
//! every accelerometer sample) and their difference loses precision.

use alloc::vec::Vec;

use crate::errors::{StepError, StepResult};

/// Arithmetic mean of a series
pub fn mean(series: &[f64]) -> StepResult<f64> {
    if series.is_empty() {
        return Err(StepError::EmptyInput);
    }

    let total: f64 = series.iter().sum();
    Ok(total / series.len() as f64)
}

/// Sample standard deviation (N-1 divisor) around a precomputed mean
pub fn std_dev(series: &[f64], mean: f64) -> StepResult<f64> {
    match series.len() {
        0 => Err(StepError::EmptyInput),
        1 => Err(StepError::SingleSample),
        n => {
            let squared: f64 = series
                .iter()
                .map(|&x| (x - mean) * (x - mean))
                .sum();
            Ok(libm::sqrt(squared / (n - 1) as f64))
        }
    }
}

/// Mean and sample standard deviation of a series or window
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SignalStats {
    /// Arithmetic mean
    pub mean: f64,
    /// Sample standard deviation
    pub std_dev: f64,
}

impl SignalStats {
    /// Compute both statistics in two passes
    pub fn compute(series: &[f64]) -> StepResult<Self> {
        let mean = mean(series)?;
        let std_dev = std_dev(series, mean)?;
        Ok(Self { mean, std_dev })
    }

    /// Detection threshold `mean + multiplier × std_dev`
    #[inline]
    pub fn threshold(&self, multiplier: f64) -> f64 {
        self.mean + multiplier * self.std_dev
    }
}

/// Prefix sums answering window statistics in constant time
///
/// Built once per series; immutable afterwards.
#[derive(Debug, Clone)]
pub struct WindowedStats {
    /// Shift applied to every value before summing
    offset: f64,
    /// `sums[k]` = Σ (x_j - offset) for j < k
    sums: Vec<f64>,
    /// `squares[k]` = Σ (x_j - offset)² for j < k
    squares: Vec<f64>,
}

impl WindowedStats {
    /// Precompute prefix sums for `series`
    pub fn new(series: &[f64]) -> Self {
        let offset = mean(series).unwrap_or(0.0);

        let mut sums = Vec::with_capacity(series.len() + 1);
        let mut squares = Vec::with_capacity(series.len() + 1);
        let (mut sum, mut square) = (0.0, 0.0);
        sums.push(sum);
        squares.push(square);

        for &x in series {
            let shifted = x - offset;
            sum += shifted;
            square += shifted * shifted;
            sums.push(sum);
            squares.push(square);
        }

        Self { offset, sums, squares }
    }

    /// Length of the underlying series
    pub fn len(&self) -> usize {
        self.sums.len() - 1
    }

    /// True when built from an empty series
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Statistics of the half-open window `[start, end)`
    pub fn window(&self, start: usize, end: usize) -> StepResult<SignalStats> {
        let len = self.len();
        if start > end || end > len {
            return Err(StepError::WindowOutOfBounds { start, end, len });
        }

        let n = end - start;
        match n {
            0 => return Err(StepError::EmptyInput),
            1 => return Err(StepError::SingleSample),
            _ => {}
        }

        let count = n as f64;
        let s1 = self.sums[end] - self.sums[start];
        let s2 = self.squares[end] - self.squares[start];

        // Rounding can push a flat window's variance a hair below zero
        let variance = ((s2 - s1 * s1 / count) / (count - 1.0)).max(0.0);

        Ok(SignalStats {
            mean: self.offset + s1 / count,
            std_dev: libm::sqrt(variance),
        })
    }

    /// Statistics of `[center - radius, center + radius)` clamped to the series
    pub fn around(&self, center: usize, radius: usize) -> StepResult<SignalStats> {
        let start = center.saturating_sub(radius);
        let end = center.saturating_add(radius).min(self.len());
        self.window(start, end)
    }
}
