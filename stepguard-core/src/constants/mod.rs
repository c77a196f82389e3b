//! Constants for StepGuard Core
//!
//! Every tuning value used by the detectors lives here with a note on where
//! it comes from, so detector code never carries magic numbers.
//!
//! ## Organization
//!
//! - **Detection**: thresholds, coefficients, and spacing for the step detectors
//! - **Layout**: column positions of each sensor in a recorded sample matrix

/// Detector thresholds, window sizes, and refractory spacing.
pub mod detection;

/// Column layouts of recorded IMU sample matrices.
pub mod layout;

// Re-export commonly used constants for convenience
pub use detection::{
    HYSTERESIS_DROP_COEFFICIENT, ADAPTIVE_WINDOW_RADIUS, ADAPTIVE_STD_DEV_MULTIPLIER,
    ADAPTIVE_REFRACTORY_SAMPLES, MIN_PEAK_NEIGHBORHOOD,
};

pub use layout::{AXES_PER_SENSOR, ACCEL_COLUMNS, GYRO_COLUMNS};
