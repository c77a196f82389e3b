//! Common test utilities and synthetic gait generators
//!
//! Generators are deterministic: the same seed always yields the same
//! recording, so integration tests can assert exact counts.

#![allow(dead_code)]

use stepguard_core::SampleMatrix;

/// Standard gravity on the vertical accelerometer axis
pub const GRAVITY: f64 = 9.81;

/// Shape of a synthetic walking recording
#[derive(Debug, Clone, Copy)]
pub struct GaitProfile {
    /// Number of footfalls
    pub steps: usize,
    /// Samples between footfalls
    pub period: usize,
    /// Samples covered by each footfall's raised-cosine bump
    pub bump_width: usize,
    /// Peak of the accelerometer bump above gravity
    pub accel_amplitude: f64,
    /// Peak of the gyroscope bump
    pub gyro_amplitude: f64,
    /// Flat samples before the first footfall
    pub lead_in: usize,
}

impl Default for GaitProfile {
    fn default() -> Self {
        Self {
            steps: 20,
            period: 50,
            bump_width: 20,
            accel_amplitude: 3.0,
            gyro_amplitude: 1.2,
            lead_in: 10,
        }
    }
}

impl GaitProfile {
    /// Total rows produced for this profile
    pub fn len(&self) -> usize {
        self.lead_in + self.steps * self.period
    }
}

/// Deterministic generator for accelerometer and gyroscope recordings
pub struct GaitGenerator {
    seed: u32,
}

impl GaitGenerator {
    /// Create generator with a fixed seed
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }

    /// Linear congruential step, uniform in [0, 1)
    fn random_unit(&mut self) -> f64 {
        self.seed = self.seed.wrapping_mul(1_103_515_245).wrapping_add(12345);
        (self.seed >> 8) as f64 / (1u32 << 24) as f64
    }

    /// Uniform noise in [-amplitude, amplitude)
    pub fn random_noise(&mut self, amplitude: f64) -> f64 {
        (self.random_unit() * 2.0 - 1.0) * amplitude
    }

    /// Noise-free walk: one raised-cosine bump per footfall on both sensors
    ///
    /// Rows are `ax, ay, az, gx, gy, gz` with gravity on `az`. Every bump has
    /// exactly one strict local maximum; the floor between bumps is flat.
    pub fn clean_walk(&self, profile: &GaitProfile) -> SampleMatrix {
        let rows: Vec<[f64; 6]> = (0..profile.len())
            .map(|i| {
                let bump = footfall(profile, i);
                [
                    0.0,
                    0.0,
                    GRAVITY + profile.accel_amplitude * bump,
                    profile.gyro_amplitude * bump,
                    0.0,
                    0.0,
                ]
            })
            .collect();
        SampleMatrix::from_arrays(&rows).unwrap()
    }

    /// Walk with uniform sensor noise on every axis
    pub fn noisy_walk(&mut self, profile: &GaitProfile, noise: f64) -> SampleMatrix {
        let rows: Vec<[f64; 6]> = (0..profile.len())
            .map(|i| {
                let bump = footfall(profile, i);
                [
                    self.random_noise(noise),
                    self.random_noise(noise),
                    GRAVITY + profile.accel_amplitude * bump + self.random_noise(noise),
                    profile.gyro_amplitude * bump + self.random_noise(noise * 0.1),
                    self.random_noise(noise * 0.1),
                    self.random_noise(noise * 0.1),
                ]
            })
            .collect();
        SampleMatrix::from_arrays(&rows).unwrap()
    }

    /// Uniform random magnitudes in [low, high)
    pub fn random_series(&mut self, len: usize, low: f64, high: f64) -> Vec<f64> {
        (0..len)
            .map(|_| low + self.random_unit() * (high - low))
            .collect()
    }
}

/// Raised-cosine bump value in [0, 1] for row `i`
fn footfall(profile: &GaitProfile, i: usize) -> f64 {
    if i < profile.lead_in {
        return 0.0;
    }
    let phase = (i - profile.lead_in) % profile.period;
    if phase >= profile.bump_width {
        return 0.0;
    }
    let angle = 2.0 * std::f64::consts::PI * phase as f64 / profile.bump_width as f64;
    0.5 - 0.5 * angle.cos()
}

/// Sinusoid `offset + amplitude × sin(2π i / period)`
pub fn sinusoid(len: usize, period: usize, offset: f64, amplitude: f64) -> Vec<f64> {
    (0..len)
        .map(|i| {
            let angle = 2.0 * std::f64::consts::PI * i as f64 / period as f64;
            offset + amplitude * angle.sin()
        })
        .collect()
}

/// Gaussian peaks of `height` at `centers` on a flat `baseline`
pub fn gaussian_peaks(len: usize, centers: &[usize], width: f64, height: f64, baseline: f64) -> Vec<f64> {
    (0..len)
        .map(|i| {
            let bumps: f64 = centers
                .iter()
                .map(|&c| {
                    let d = (i as f64 - c as f64) / width;
                    height * (-0.5 * d * d).exp()
                })
                .sum();
            baseline + bumps
        })
        .collect()
}

/// Accelerometer-only rows carrying `values` on the x axis
pub fn accel_rows(values: &[f64]) -> SampleMatrix {
    let rows: Vec<[f64; 6]> = values.iter().map(|&v| [v, 0.0, 0.0, 0.0, 0.0, 0.0]).collect();
    SampleMatrix::from_arrays(&rows).unwrap()
}

/// Elapsed times at a fixed sample interval in milliseconds
pub fn times(len: usize, interval_ms: f64) -> Vec<f64> {
    (0..len).map(|i| i as f64 * interval_ms).collect()
}
