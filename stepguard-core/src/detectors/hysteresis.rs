//! Hysteresis (rise-then-dip) step detection
//!
//! A step is credited once the signal has risen above the global
//! `mean + std_dev` threshold and then dropped below a fraction of the highest
//! value reached since the previous step:
//!
//! ```text
//!        highest ──►  ╭╮
//!   threshold ─ ─ ─ ─╯ ╰─ ─ ─ ─ ─ ─ ─
//!                       ╲
//!   coeff × highest ─ ─ ─╲─ ─ ─ ─ ─ ─   ◄── step credited here
//!                         ╲_____
//! ```
//!
//! Noisy plateaus near the top of a stride produce one step rather than one
//! per local maximum.

use crate::{
    constants::detection::GLOBAL_STD_DEV_MULTIPLIER,
    errors::StepResult,
    stats::SignalStats,
};

use super::peaks;

/// Count rise-then-dip cycles
///
/// Per sample, in order: a value above the threshold clears the dip flag and
/// may raise the running peak; a value below `drop_coefficient × peak` sets the
/// flag; a set flag credits a step and resets both pieces of state. The order
/// of these checks is the tie-break when one sample satisfies several.
pub fn count_hysteresis_steps(magnitudes: &[f64], drop_coefficient: f64) -> StepResult<usize> {
    let stats = SignalStats::compute(magnitudes)?;
    let threshold = stats.threshold(GLOBAL_STD_DEV_MULTIPLIER);

    let mut steps = 0;
    let mut highest_peak = 0.0;
    let mut below_lower = false;

    for i in peaks::interior(magnitudes.len()) {
        let value = magnitudes[i];

        if value > threshold {
            below_lower = false;
            if value > highest_peak {
                highest_peak = value;
            }
        }

        if value < drop_coefficient * highest_peak {
            below_lower = true;
        }

        if below_lower {
            steps += 1;
            highest_peak = 0.0;
            below_lower = false;
        }
    }

    Ok(steps)
}
