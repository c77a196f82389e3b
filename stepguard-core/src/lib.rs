//! Core step-counting engine for StepGuard
//!
//! Converts recorded accelerometer (and optionally gyroscope) samples into a
//! step count by detecting peaks in the magnitude of the acceleration vector.
//! Thresholds come from the signal's own statistics, either over the whole
//! recording or over a window around each candidate peak.
//!
//! Key properties:
//! - Pure functions: no state survives between calls
//! - `no_std` + `alloc` capable (disable default features)
//! - O(n) per recording for every detector
//!
//! ```no_run
//! use stepguard_core::{Detector, SampleMatrix, StepCounter};
//!
//! // Rows of ax, ay, az, gx, gy, gz
//! let samples = SampleMatrix::from_rows(&[
//!     vec![0.1, 9.7, 0.3, 0.01, 0.00, 0.02],
//!     vec![0.4, 12.2, 0.5, 0.08, 0.03, 0.01],
//!     vec![0.2, 9.5, 0.2, 0.02, 0.01, 0.00],
//! ])?;
//! let times = [0.0, 10.0, 20.0];
//!
//! let counter = StepCounter::new(Detector::hysteresis());
//! let steps = counter.count_steps(&times, &samples)?;
//! # Ok::<(), stepguard_core::StepError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

// Macros for optional logging
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_trace {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_trace {
    ($($arg:tt)*) => {};
}

pub mod config;
pub mod constants;
pub mod counter;
pub mod detectors;
pub mod errors;
pub mod magnitude;
pub mod matrix;
pub mod stats;

// Public API
pub use config::{ColumnLayout, ColumnRange, CounterConfig};
pub use counter::StepCounter;
pub use detectors::{AdaptiveParams, Detector};
pub use errors::{StepError, StepResult};
pub use magnitude::{magnitude, magnitude_series};
pub use matrix::SampleMatrix;
pub use stats::{mean, std_dev, SignalStats, WindowedStats};

/// Crate version from Cargo metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
