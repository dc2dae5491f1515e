// Copyright 2025 the Chartframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! "Nice" tick step selection.
//!
//! Steps take the form `factor * 10^power` with `factor` one of 1, 2 or 5,
//! giving the familiar sequence `..., 0.5, 1, 2, 5, 10, 20, 50, ...`.
//! [`TickSelector`] is a cursor over that sequence: axes seed it near a
//! reference step and walk it up or down while resolving label overlap.

use alloc::format;
use alloc::string::String;

use thiserror::Error;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// The largest power the selector will reach.
pub const MAX_POWER: i32 = 300;
/// The smallest power the selector will reach.
pub const MIN_POWER: i32 = -300;

/// Errors returned by [`TickSelector::select`].
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum TickSelectorError {
    /// The reference step is not a finite, strictly positive number.
    #[error("tick selector: `reference` must be finite and > 0, got {0}")]
    InvalidReference(f64),
}

/// The mantissa of a tick step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TickFactor {
    /// `1 * 10^power`.
    One,
    /// `2 * 10^power`.
    Two,
    /// `5 * 10^power`.
    Five,
}

impl TickFactor {
    /// The numeric multiplier.
    pub fn value(self) -> f64 {
        match self {
            Self::One => 1.0,
            Self::Two => 2.0,
            Self::Five => 5.0,
        }
    }
}

/// How tick labels for a given step size should be formatted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickFormat {
    /// Fixed-point with the given number of decimal places.
    Fixed {
        /// Digits after the decimal point.
        decimals: usize,
    },
    /// Shortest representation that round-trips, however many digits that takes.
    Full,
    /// Scientific notation (`1.5e7`).
    Exponential,
}

impl TickFormat {
    /// Formats `value` as a tick label.
    pub fn format(&self, value: f64) -> String {
        match *self {
            Self::Fixed { decimals } => {
                let v = round_to(value, decimals);
                format!("{v:.decimals$}")
            }
            Self::Full => format!("{}", normalize_zero(value)),
            Self::Exponential => format!("{:e}", normalize_zero(value)),
        }
    }
}

/// A stateful cursor over nice tick steps.
///
/// The current step is `factor * 10^power`, with `power` kept within
/// [`MIN_POWER`]`..=`[`MAX_POWER`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickSelector {
    power: i32,
    factor: TickFactor,
}

impl Default for TickSelector {
    fn default() -> Self {
        Self::new(0, TickFactor::One)
    }
}

impl TickSelector {
    /// Creates a selector positioned at `factor * 10^power`.
    ///
    /// `power` is clamped to the supported bounds.
    pub fn new(power: i32, factor: TickFactor) -> Self {
        Self {
            power: power.clamp(MIN_POWER, MAX_POWER),
            factor,
        }
    }

    /// The current power of ten.
    pub fn power(&self) -> i32 {
        self.power
    }

    /// The current factor.
    pub fn factor(&self) -> TickFactor {
        self.factor
    }

    /// Repositions the cursor at the power of ten at or above `reference`
    /// and returns that step.
    pub fn select(&mut self, reference: f64) -> Result<f64, TickSelectorError> {
        if !reference.is_finite() || reference <= 0.0 {
            return Err(TickSelectorError::InvalidReference(reference));
        }
        let power = reference
            .log10()
            .ceil()
            .clamp(f64::from(MIN_POWER), f64::from(MAX_POWER));
        #[allow(
            clippy::cast_possible_truncation,
            reason = "integral and clamped to the supported power bounds"
        )]
        {
            self.power = power as i32;
        }
        self.factor = TickFactor::One;
        Ok(self.current_tick_size())
    }

    /// The current step, `factor * 10^power`.
    pub fn current_tick_size(&self) -> f64 {
        self.factor.value() * pow10(self.power)
    }

    /// A label format with enough decimal places for the current step.
    pub fn current_tick_format(&self) -> TickFormat {
        match self.power {
            p if p < -4 => TickFormat::Full,
            p @ -4..=-1 => TickFormat::Fixed {
                decimals: p.unsigned_abs() as usize,
            },
            0..=6 => TickFormat::Fixed { decimals: 0 },
            _ => TickFormat::Exponential,
        }
    }

    /// Moves to the next larger step.
    ///
    /// Returns `false`, leaving the cursor unchanged, at the ceiling
    /// (`5 * 10^MAX_POWER`).
    pub fn next(&mut self) -> bool {
        match self.factor {
            TickFactor::One => self.factor = TickFactor::Two,
            TickFactor::Two => self.factor = TickFactor::Five,
            TickFactor::Five => {
                if self.power >= MAX_POWER {
                    return false;
                }
                self.power += 1;
                self.factor = TickFactor::One;
            }
        }
        true
    }

    /// Moves to the next smaller step.
    ///
    /// Returns `false`, leaving the cursor unchanged, at the floor
    /// (`1 * 10^MIN_POWER`).
    pub fn previous(&mut self) -> bool {
        match self.factor {
            TickFactor::Five => self.factor = TickFactor::Two,
            TickFactor::Two => self.factor = TickFactor::One,
            TickFactor::One => {
                if self.power <= MIN_POWER {
                    return false;
                }
                self.power -= 1;
                self.factor = TickFactor::Five;
            }
        }
        true
    }
}

/// `10^power`, computed so negative powers come out correctly rounded.
pub(crate) fn pow10(power: i32) -> f64 {
    if power >= 0 {
        10_f64.powi(power)
    } else {
        1.0 / 10_f64.powi(-power)
    }
}

fn round_to(value: f64, decimals: usize) -> f64 {
    let Ok(d) = i32::try_from(decimals) else {
        return normalize_zero(value);
    };
    let scale = pow10(d.min(MAX_POWER));
    let rounded = (value * scale).round() / scale;
    if rounded.is_finite() {
        normalize_zero(rounded)
    } else {
        normalize_zero(value)
    }
}

/// Maps `-0.0` to `0.0` so labels never read "-0".
fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec::Vec;

    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-12 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn select_rounds_up_to_a_power_of_ten() {
        let mut t = TickSelector::default();
        assert!(close(t.select(1234.0).unwrap(), 10_000.0));
        assert_eq!(t.factor(), TickFactor::One);
        assert!(close(t.select(0.07).unwrap(), 0.1));
        assert!(close(t.select(1.0).unwrap(), 1.0));
        assert!(t.select(0.0).is_err());
        assert!(t.select(-3.0).is_err());
        assert!(t.select(f64::NAN).is_err());
    }

    #[test]
    fn next_walks_the_nice_sequence() {
        let mut t = TickSelector::default();
        t.select(1.0).unwrap();
        let mut seen = Vec::new();
        for _ in 0..7 {
            seen.push(t.current_tick_size());
            assert!(t.next(), "no ceiling near 1");
        }
        let expected = [1.0, 2.0, 5.0, 10.0, 20.0, 50.0, 100.0];
        for (a, b) in seen.iter().zip(expected) {
            assert!(close(*a, b), "{a} != {b}");
        }
    }

    #[test]
    fn previous_is_strictly_decreasing_and_reversible() {
        let mut t = TickSelector::default();
        t.select(1234.0).unwrap();
        let mut last = t.current_tick_size();
        while t.current_tick_size() > 1.0 {
            assert!(t.previous(), "no floor near 1");
            let size = t.current_tick_size();
            assert!(size < last, "{size} !< {last}");
            last = size;

            let mut probe = t;
            assert!(probe.next());
            assert!(probe.previous());
            assert_eq!(probe, t, "next/previous must be locally invertible");
        }
        assert!(close(t.current_tick_size(), 1.0));
        t.next();
        assert!(close(t.current_tick_size(), 2.0));
    }

    #[test]
    fn bounded_at_ceiling_and_floor() {
        let mut top = TickSelector::new(MAX_POWER, TickFactor::Five);
        assert!(!top.next());
        assert_eq!(top, TickSelector::new(MAX_POWER, TickFactor::Five));
        assert!(top.previous());

        let mut bottom = TickSelector::new(MIN_POWER, TickFactor::One);
        assert!(!bottom.previous());
        assert_eq!(bottom.power(), MIN_POWER);
        assert!(bottom.next());

        let mut huge = TickSelector::default();
        assert_eq!(huge.select(f64::MAX).map(|_| huge.power()), Ok(MAX_POWER));
    }

    #[test]
    fn format_tracks_power() {
        let fmt = |p| TickSelector::new(p, TickFactor::One).current_tick_format();
        assert_eq!(fmt(-4), TickFormat::Fixed { decimals: 4 });
        assert_eq!(fmt(-2), TickFormat::Fixed { decimals: 2 });
        assert_eq!(fmt(0), TickFormat::Fixed { decimals: 0 });
        assert_eq!(fmt(6), TickFormat::Fixed { decimals: 0 });
        assert_eq!(fmt(-5), TickFormat::Full);
        assert_eq!(fmt(7), TickFormat::Exponential);
    }

    #[test]
    fn formats_render_labels() {
        assert_eq!(TickFormat::Fixed { decimals: 2 }.format(0.125_1), "0.13");
        assert_eq!(TickFormat::Fixed { decimals: 0 }.format(-0.2), "0");
        assert_eq!(TickFormat::Fixed { decimals: 1 }.format(2.0), "2.0");
        assert_eq!(TickFormat::Full.format(0.000_012_5), "0.0000125");
        assert_eq!(TickFormat::Exponential.format(20_000_000.0), "2e7");
    }
}
