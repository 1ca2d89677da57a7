// Copyright 2026 the Metra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick label formatting.

extern crate alloc;

use alloc::format;
use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Formats a tick value using the tick step to pick a decimal count, so every
/// label in one tick run is formatted consistently.
///
/// Steps at or above `1` (and an unknown step of `0` over integral values)
/// print bare integers; fractional steps print just enough decimals to
/// distinguish adjacent ticks, capped at six.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = decimals_for(value, step);
    if decimals == 0 {
        // Normalize negative zero, which otherwise prints as "-0".
        let v = if value == 0.0 { 0.0 } else { value };
        format!("{v:.0}")
    } else {
        format!("{value:.decimals$}")
    }
}

fn decimals_for(value: f64, step: f64) -> usize {
    if step.is_finite() && step >= 1.0 {
        return 0;
    }
    if step.is_finite() && step > 0.0 {
        // Smallest decimal count that represents the step exactly, so ticks
        // like 0.25/0.50/0.75 are not truncated.
        for d in 1_i32..=6 {
            let scaled = step * 10.0_f64.powi(d);
            if (scaled - scaled.round()).abs() < 1.0e-6 * scaled.max(1.0) {
                return d as usize;
            }
        }
        return 6;
    }
    // Unknown step: integral values print bare, everything else gets two
    // decimals.
    if (value - value.round()).abs() < 1.0e-9 {
        0
    } else {
        2
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn integral_steps_print_bare_integers() {
        assert_eq!(format_tick(50.0, 25.0), "50");
        assert_eq!(format_tick(-10.0, 5.0), "-10");
    }

    #[test]
    fn fractional_steps_print_matching_decimals() {
        assert_eq!(format_tick(0.5, 0.25), "0.50");
        assert_eq!(format_tick(0.25, 0.25), "0.25");
        assert_eq!(format_tick(0.1, 0.1), "0.1");
        assert_eq!(format_tick(1.25, 0.05), "1.25");
    }

    #[test]
    fn negative_zero_prints_as_zero() {
        assert_eq!(format_tick(-0.0, 20.0), "0");
    }

    #[test]
    fn unknown_step_falls_back_on_the_value() {
        assert_eq!(format_tick(7.0, 0.0), "7");
        assert_eq!(format_tick(0.75, 0.0), "0.75");
    }
}
