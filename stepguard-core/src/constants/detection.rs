//! Step Detection Parameters
//!
//! Thresholds are expressed relative to signal statistics (mean plus a multiple
//! of the sample standard deviation) so that they scale with the sensor's units
//! and the wearer's gait energy.

// ===== PEAK GEOMETRY =====

/// Number of samples needed for a 3-point local extremum test.
///
/// An index qualifies only when it has a neighbor on each side, so series
/// shorter than this never produce a step from peak-based detectors.
pub const MIN_PEAK_NEIGHBORHOOD: usize = 3;

// ===== GLOBAL THRESHOLD =====

/// Standard deviations above the mean a peak must reach in the global detectors.
///
/// Used by simple peak, hysteresis, peak-trough, and dual-sensor detection.
pub const GLOBAL_STD_DEV_MULTIPLIER: f64 = 1.0;

// ===== HYSTERESIS =====

/// Fraction of the running peak the signal must drop below to credit a step.
///
/// 0.8 means a 20% fall from the highest sample seen since the last step.
/// Lower values demand a deeper dip and suppress chatter on noisy plateaus.
pub const HYSTERESIS_DROP_COEFFICIENT: f64 = 0.8;

// ===== ADAPTIVE WINDOW =====

/// Half-width of the local statistics window in samples.
///
/// At 100 Hz this is ±10 s, long enough to span several strides while still
/// following changes in walking intensity across a recording.
pub const ADAPTIVE_WINDOW_RADIUS: usize = 1000;

/// Standard deviations above the local mean a peak must reach.
pub const ADAPTIVE_STD_DEV_MULTIPLIER: f64 = 0.4;

/// Samples skipped after a counted step.
///
/// 25 samples is 250 ms at 100 Hz, roughly the shortest interval between
/// footfalls when running.
pub const ADAPTIVE_REFRACTORY_SAMPLES: usize = 25;

// ===== GYRO-ASSISTED ADAPTIVE PRESET =====

/// Window half-width used alongside a gyroscope stream (samples).
pub const GYRO_ASSISTED_WINDOW_RADIUS: usize = 100;

/// Local threshold multiplier used alongside a gyroscope stream.
pub const GYRO_ASSISTED_STD_DEV_MULTIPLIER: f64 = 0.5;

/// Refractory spacing used alongside a gyroscope stream (samples).
pub const GYRO_ASSISTED_REFRACTORY_SAMPLES: usize = 15;
