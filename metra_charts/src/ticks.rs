// Copyright 2026 the Metra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick generation for axes and gridlines.
//!
//! Tick values come from either an explicit step or a target count; pixel
//! positions come from applying the chart's [`ScaleLinear`] to each value.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::format::format_tick;
use crate::scale::ScaleLinear;

/// Hard cap on generated ticks, guarding against tiny steps over huge spans.
const MAX_TICKS: usize = 10_000;

/// How tick values are chosen over a domain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickRule {
    /// Explicit step: `min, min + step, …` up to and including the first
    /// value at or above the domain maximum.
    Step(f64),
    /// Approximate count: the step is the nice number (1, 2, 5 × 10ⁿ)
    /// closest to `span / count`, and ticks are the step multiples inside
    /// the domain.
    Count(usize),
}

/// A positioned, labeled tick.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Tick value in data units.
    pub value: f64,
    /// Pixel position from the chart's scale.
    pub position: f64,
    /// Formatted label.
    pub label: String,
}

/// Returns tick values for the given domain and rule.
///
/// Degenerate inputs produce exactly one tick at the domain minimum: a
/// collapsed domain (`min == max`), a requested count of zero, or a
/// non-positive/non-finite step.
pub fn tick_values(min: f64, max: f64, rule: TickRule) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || min == max {
        return alloc::vec![min];
    }
    let (min, max) = if min <= max { (min, max) } else { (max, min) };

    match rule {
        TickRule::Step(step) => {
            if !step.is_finite() || step <= 0.0 {
                return alloc::vec![min];
            }
            let mut out = Vec::new();
            for i in 0..MAX_TICKS {
                let v = min + step * i as f64;
                out.push(v);
                if v >= max - 1.0e-9 * step {
                    break;
                }
            }
            out
        }
        TickRule::Count(count) => {
            if count == 0 {
                return alloc::vec![min];
            }
            let step = nice_step((max - min) / count as f64);
            if step == 0.0 {
                return alloc::vec![min, max];
            }

            let start = (min / step).ceil();
            let stop = (max / step).floor();
            if stop < start {
                return alloc::vec![min];
            }

            let n_f = (stop - start).min(MAX_TICKS as f64);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "non-negative and capped at MAX_TICKS"
            )]
            let n = n_f as usize;
            (0..=n).map(|i| (start + i as f64) * step).collect()
        }
    }
}

/// Positions and labels ticks for a scale.
pub fn ticks(scale: &ScaleLinear, rule: TickRule) -> Vec<Tick> {
    let values = tick_values(scale.domain_min(), scale.domain_max(), rule);
    let step = tick_step(&values);
    values
        .into_iter()
        .map(|value| Tick {
            value,
            position: scale.map(value),
            label: format_tick(value, step),
        })
        .collect()
}

/// Returns the smallest gap between adjacent tick values, or `0.0` for fewer
/// than two ticks. Used for consistent decimal formatting across a tick run.
pub fn tick_step(values: &[f64]) -> f64 {
    let step = values
        .windows(2)
        .map(|w| (w[1] - w[0]).abs())
        .fold(f64::INFINITY, f64::min);
    if step.is_finite() { step } else { 0.0 }
}

/// Rounds a raw step to the nearest "nice" step (1, 2, 5 × 10ⁿ).
fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    #[allow(
        clippy::cast_possible_truncation,
        reason = "tick step exponents are far inside the i32 range"
    )]
    let base = 10.0_f64.powi(power.clamp(-300.0, 300.0) as i32);
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}
