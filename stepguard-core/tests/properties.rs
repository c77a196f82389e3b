//! Property tests for detectors and statistics

use proptest::prelude::*;
use stepguard_core::{
    detectors::{count_adaptive_steps, count_simple_peaks, peaks},
    magnitude, AdaptiveParams, Detector, SignalStats, WindowedStats,
};

fn magnitudes(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    proptest::collection::vec(0.0f64..20.0, 3..max_len)
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6 * (1.0 + b.abs())
}

proptest! {
    #[test]
    fn prop_counts_are_repeatable(mags in magnitudes(200)) {
        let gyro: Vec<f64> = mags.iter().rev().copied().collect();
        for detector in Detector::all() {
            let first = detector.count(&mags, Some(&gyro)).unwrap();
            let second = detector.count(&mags, Some(&gyro)).unwrap();
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn prop_constant_series_has_no_steps(value in 0.0f64..20.0, len in 2usize..100) {
        let mags = vec![value; len];
        for detector in Detector::all() {
            prop_assert_eq!(detector.count(&mags, Some(&mags)).unwrap(), 0);
        }
    }

    #[test]
    fn prop_simple_peaks_bounded_by_local_maxima(mags in magnitudes(200)) {
        prop_assert!(count_simple_peaks(&mags).unwrap() <= peaks::count_local_peaks(&mags));
    }

    #[test]
    fn prop_dual_sensor_is_truncated_mean(
        accel in magnitudes(100),
        gyro in magnitudes(100),
    ) {
        let expected = (count_simple_peaks(&accel).unwrap() + count_simple_peaks(&gyro).unwrap()) / 2;
        prop_assert_eq!(Detector::DualSensor.count(&accel, Some(&gyro)).unwrap(), expected);
    }

    #[test]
    fn prop_adaptive_window_beyond_series_is_invariant(
        mags in magnitudes(150),
        extra in 0usize..1000,
        refractory_samples in 0usize..30,
    ) {
        let len = mags.len();
        let base = AdaptiveParams { refractory_samples, ..AdaptiveParams::default() };
        let at_len = AdaptiveParams { window_radius: len, ..base };
        let beyond = AdaptiveParams { window_radius: len + extra, ..base };

        prop_assert_eq!(
            count_adaptive_steps(&mags, &at_len).unwrap(),
            count_adaptive_steps(&mags, &beyond).unwrap()
        );
    }

    #[test]
    fn prop_refractory_never_adds_steps(mags in magnitudes(150), radius in 1usize..50) {
        let unspaced = AdaptiveParams { window_radius: radius, refractory_samples: 0, ..AdaptiveParams::default() };
        let spaced = AdaptiveParams { refractory_samples: 25, ..unspaced };
        prop_assert!(
            count_adaptive_steps(&mags, &spaced).unwrap()
                <= count_adaptive_steps(&mags, &unspaced).unwrap()
        );
    }

    #[test]
    fn prop_windowed_stats_match_two_pass(
        series in proptest::collection::vec(-50.0f64..50.0, 2..300),
        a in any::<prop::sample::Index>(),
        b in any::<prop::sample::Index>(),
    ) {
        let len = series.len();
        let (x, y) = (a.index(len + 1), b.index(len + 1));
        let (start, end) = (x.min(y), x.max(y));
        prop_assume!(end - start >= 2);

        let windowed = WindowedStats::new(&series).window(start, end).unwrap();
        let direct = SignalStats::compute(&series[start..end]).unwrap();

        prop_assert!(close(windowed.mean, direct.mean));
        prop_assert!(close(windowed.std_dev, direct.std_dev));
    }

    #[test]
    fn prop_magnitude_dominates_each_axis(
        x in -100.0f64..100.0,
        y in -100.0f64..100.0,
        z in -100.0f64..100.0,
    ) {
        let m = magnitude(x, y, z);
        prop_assert!(m >= 0.0);
        prop_assert!(m + 1e-9 >= x.abs().max(y.abs()).max(z.abs()));
    }
}
