//! Error Types for Step Counting Failures
//!
//! ## Design Philosophy
//!
//! Step counting is pure computation over a sample matrix, so every error is an
//! input-contract violation reported at the point it is detected. Nothing is
//! retried and no partial count is ever returned.
//!
//! Errors mirror the embedded-friendly shape used across the crate:
//!
//! 1. **Small Size**: Variants carry a few `usize` fields at most.
//!
//! 2. **No Heap Allocation**: Messages are `&'static str`, never `String`.
//!
//! 3. **Copy Semantics**: Errors are `Copy` and cheap to bubble up with `?`.
//!
//! ## Error Categories
//!
//! ### Statistics
//! - `EmptyInput`: mean/standard deviation over zero samples
//! - `SingleSample`: sample standard deviation with one element (N-1 = 0)
//! - `WindowOutOfBounds`: a window range that does not fit the series
//!
//! ### Matrix Shape
//! - `ColumnMismatch`: magnitude needs exactly 3 columns
//! - `ColumnRangeOutOfBounds` / `InvalidColumnRange`: bad `[start, end)` slice
//! - `RaggedRow`: rows of unequal width
//!
//! ### Configuration
//! - `MissingGyroscope`: a dual-sensor detector ran without gyroscope data
//! - `InvalidConfig` / `ConfigParse`: rejected detector parameters
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use stepguard_core::{StepCounter, StepError, SampleMatrix, Detector};
//!
//! fn steps_or_zero(times: &[f64], samples: &SampleMatrix) -> usize {
//!     let counter = StepCounter::new(Detector::SimplePeak);
//!     match counter.count_steps(times, samples) {
//!         Ok(steps) => steps,
//!         Err(StepError::EmptyInput) | Err(StepError::SingleSample) => {
//!             // Recording too short to say anything
//!             0
//!         }
//!         Err(_) => {
//!             // Shape problems are caller bugs - surface them
//!             0
//!         }
//!     }
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for step counting operations
pub type StepResult<T> = Result<T, StepError>;

/// Step counting errors - kept small and `Copy`
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepError {
    /// Series, window, or matrix has no samples
    #[error("Empty input: at least one sample is required")]
    EmptyInput,

    /// Sample standard deviation needs two samples (divisor N-1)
    #[error("Single sample: standard deviation needs at least two samples")]
    SingleSample,

    /// Magnitude computation needs one sensor's three axes
    #[error("Column mismatch: expected {expected} columns, found {found}")]
    ColumnMismatch {
        /// Number of columns the operation requires
        expected: usize,
        /// Number of columns actually supplied
        found: usize,
    },

    /// Column slice reaches past the matrix width
    #[error("Column range [{start}, {end}) exceeds matrix width {columns}")]
    ColumnRangeOutOfBounds {
        /// First column of the slice (inclusive)
        start: usize,
        /// End of the slice (exclusive)
        end: usize,
        /// Width of the matrix being sliced
        columns: usize,
    },

    /// Column slice is empty or inverted
    #[error("Invalid column range [{start}, {end})")]
    InvalidColumnRange {
        /// First column of the slice (inclusive)
        start: usize,
        /// End of the slice (exclusive)
        end: usize,
    },

    /// Input rows do not all have the same width
    #[error("Ragged row {row}: expected {expected} columns, found {found}")]
    RaggedRow {
        /// Index of the offending row
        row: usize,
        /// Width established by the first row
        expected: usize,
        /// Width of the offending row
        found: usize,
    },

    /// Window statistics requested outside the series
    #[error("Window [{start}, {end}) outside series of length {len}")]
    WindowOutOfBounds {
        /// Window start (inclusive)
        start: usize,
        /// Window end (exclusive)
        end: usize,
        /// Length of the underlying series
        len: usize,
    },

    /// Dual-sensor detection was invoked without gyroscope data
    #[error("Detector requires a gyroscope magnitude series")]
    MissingGyroscope,

    /// Detector or layout parameters failed validation
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// What was rejected
        reason: &'static str,
    },

    /// Configuration document could not be parsed
    #[error("Configuration could not be parsed")]
    ConfigParse,
}

#[cfg(feature = "defmt")]
impl defmt::Format for StepError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::EmptyInput =>
                defmt::write!(fmt, "Empty input"),
            Self::SingleSample =>
                defmt::write!(fmt, "Single sample"),
            Self::ColumnMismatch { expected, found } =>
                defmt::write!(fmt, "Expected {} columns, found {}", expected, found),
            Self::ColumnRangeOutOfBounds { start, end, columns } =>
                defmt::write!(fmt, "Columns [{}, {}) exceed width {}", start, end, columns),
            Self::InvalidColumnRange { start, end } =>
                defmt::write!(fmt, "Invalid columns [{}, {})", start, end),
            Self::RaggedRow { row, expected, found } =>
                defmt::write!(fmt, "Row {} has {} columns, expected {}", row, found, expected),
            Self::WindowOutOfBounds { start, end, len } =>
                defmt::write!(fmt, "Window [{}, {}) outside length {}", start, end, len),
            Self::MissingGyroscope =>
                defmt::write!(fmt, "Missing gyroscope series"),
            Self::InvalidConfig { reason } =>
                defmt::write!(fmt, "Invalid config: {}", reason),
            Self::ConfigParse =>
                defmt::write!(fmt, "Config parse failed"),
        }
    }
}
