//! Sample Matrix Column Layouts
//!
//! Column ranges are half-open `(start, end)` pairs, matching
//! [`SampleMatrix::columns`](crate::SampleMatrix::columns).

/// Axes recorded per inertial sensor (x, y, z).
pub const AXES_PER_SENSOR: usize = 3;

/// Accelerometer columns in the standard 6-column layout (ax, ay, az, gx, gy, gz).
pub const ACCEL_COLUMNS: (usize, usize) = (0, 3);

/// Gyroscope columns in the standard 6-column layout.
pub const GYRO_COLUMNS: (usize, usize) = (3, 6);

/// Accelerometer columns in the extended export layout.
///
/// Columns outside the two sensor ranges carry timestamps and auxiliary
/// fields that the detectors ignore.
pub const EXTENDED_ACCEL_COLUMNS: (usize, usize) = (3, 6);

/// Gyroscope columns in the extended export layout.
pub const EXTENDED_GYRO_COLUMNS: (usize, usize) = (7, 10);
