//! Count steps in a synthetic walking recording with every detector
//!
//! Run with: cargo run --example 01_count_steps -p stepguard-core [steps] [noise]

use std::f64::consts::PI;

use stepguard_core::{Detector, SampleMatrix, StepCounter, StepResult};

const SAMPLE_INTERVAL_MS: f64 = 10.0;
const SAMPLES_PER_STEP: usize = 55;

/// Walking recording: a vertical impact per footfall plus a hip-swing rotation
fn synthetic_walk(steps: usize, noise: f64) -> StepResult<(Vec<f64>, SampleMatrix)> {
    let len = steps * SAMPLES_PER_STEP;
    let mut seed: u32 = 0x5eed;
    let mut jitter = move || {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12345);
        ((seed >> 8) as f64 / (1u32 << 24) as f64 * 2.0 - 1.0) * noise
    };

    let rows: Vec<[f64; 6]> = (0..len)
        .map(|i| {
            let phase = (i % SAMPLES_PER_STEP) as f64 / SAMPLES_PER_STEP as f64;
            let impact = if phase < 0.4 { (PI * phase / 0.4).sin() } else { 0.0 };
            let swing = (2.0 * PI * phase).sin().max(0.0);
            [
                0.3 + jitter(),
                0.1 + jitter(),
                9.81 + 3.5 * impact + jitter(),
                1.1 * swing + jitter() * 0.1,
                0.2 * swing,
                0.0,
            ]
        })
        .collect();

    let times = (0..len).map(|i| i as f64 * SAMPLE_INTERVAL_MS).collect();
    Ok((times, SampleMatrix::from_arrays(&rows)?))
}

fn main() -> StepResult<()> {
    let mut args = std::env::args().skip(1);
    let steps = args.next().and_then(|s| s.parse().ok()).unwrap_or(40);
    let noise = args.next().and_then(|s| s.parse().ok()).unwrap_or(0.15);

    let (times, samples) = synthetic_walk(steps, noise)?;
    println!(
        "{} samples, {} footfalls, noise ±{:.2} m/s²",
        samples.len(),
        steps,
        noise
    );

    for detector in Detector::all() {
        let counter = StepCounter::new(detector);
        let counted = counter.count_steps(&times, &samples)?;
        println!("  {:<16} {:>5}", detector.name(), counted);
    }

    Ok(())
}
