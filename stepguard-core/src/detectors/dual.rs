//! Dual-sensor averaged peak counting
//!
//! Runs global-threshold peak counting on the accelerometer and the gyroscope
//! magnitude series independently and averages the two counts. A footfall is
//! assumed to produce one peak on each sensor.

use crate::errors::StepResult;

use super::simple::count_simple_peaks;

/// Half the combined peak count of both sensors
///
/// Integer division: an odd total drops its remainder.
pub fn count_dual_sensor_steps(accel: &[f64], gyro: &[f64]) -> StepResult<usize> {
    let accel_peaks = count_simple_peaks(accel)?;
    let gyro_peaks = count_simple_peaks(gyro)?;
    Ok((accel_peaks + gyro_peaks) / 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::StepError;

    const THREE_PEAKS: [f64; 10] = [0.0, 9.0, 0.0, 0.0, 9.0, 0.0, 0.0, 9.0, 0.0, 0.0];
    const TWO_PEAKS: [f64; 10] = [0.0, 0.0, 6.0, 0.0, 0.0, 0.0, 6.0, 0.0, 0.0, 0.0];

    #[test]
    fn averages_both_sensors() {
        assert_eq!(count_dual_sensor_steps(&THREE_PEAKS, &THREE_PEAKS).unwrap(), 3);
    }

    #[test]
    fn odd_total_truncates() {
        assert_eq!(count_dual_sensor_steps(&THREE_PEAKS, &TWO_PEAKS).unwrap(), 2);
    }

    #[test]
    fn gyro_errors_propagate() {
        assert_eq!(
            count_dual_sensor_steps(&THREE_PEAKS, &[1.0]),
            Err(StepError::SingleSample)
        );
    }
}
