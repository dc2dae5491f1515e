// Copyright 2025 the Chartframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Numeric intervals.
//!
//! A [`Range`] is immutable. Zooming, panning and auto-ranging always produce
//! a new value.

use thiserror::Error;

/// Errors returned when building a [`Range`].
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum RangeError {
    /// `lower` is not strictly below `upper`.
    #[error("range: `lower` ({lower}) must be less than `upper` ({upper})")]
    Inverted {
        /// Requested lower bound.
        lower: f64,
        /// Requested upper bound.
        upper: f64,
    },
    /// A bound is NaN or infinite.
    #[error("range: bounds must be finite, got [{lower}, {upper}]")]
    NonFinite {
        /// Requested lower bound.
        lower: f64,
        /// Requested upper bound.
        upper: f64,
    },
    /// The bounds are finite but `upper - lower` is not.
    #[error("range: length of [{lower}, {upper}] overflows")]
    Overflow {
        /// Requested lower bound.
        lower: f64,
        /// Requested upper bound.
        upper: f64,
    },
}

/// A closed numeric interval with `lower < upper`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    lower: f64,
    upper: f64,
}

impl Range {
    /// Creates a range.
    ///
    /// Both bounds and the length must be finite, and `lower < upper`.
    pub fn new(lower: f64, upper: f64) -> Result<Self, RangeError> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(RangeError::NonFinite { lower, upper });
        }
        if lower >= upper {
            return Err(RangeError::Inverted { lower, upper });
        }
        if !(upper - lower).is_finite() {
            return Err(RangeError::Overflow { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// The lower bound.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// The upper bound.
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// `upper - lower`; always positive.
    pub fn length(&self) -> f64 {
        self.upper - self.lower
    }

    /// The midpoint.
    pub fn center(&self) -> f64 {
        self.lower + 0.5 * self.length()
    }

    /// Returns `true` if `lower <= value <= upper`.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Returns `true` if `[lower, upper]` overlaps this range.
    pub fn intersects(&self, lower: f64, upper: f64) -> bool {
        lower <= self.upper && upper >= self.lower
    }

    /// Clamps `value` into the range.
    pub fn constrain(&self, value: f64) -> f64 {
        value.clamp(self.lower, self.upper)
    }

    /// Where `value` sits in the range: `0.0` at `lower`, `1.0` at `upper`.
    ///
    /// Values outside the range map outside `[0, 1]`.
    pub fn percent(&self, value: f64) -> f64 {
        (value - self.lower) / self.length()
    }

    /// The inverse of [`Range::percent`].
    pub fn value(&self, percent: f64) -> f64 {
        self.lower + percent * self.length()
    }

    /// Grows the range by fractions of its length on each side.
    ///
    /// Negative margins shrink it; the result must still be a valid range.
    pub fn expanded(&self, lower_margin: f64, upper_margin: f64) -> Result<Self, RangeError> {
        let length = self.length();
        Self::new(
            self.lower - length * lower_margin,
            self.upper + length * upper_margin,
        )
    }

    /// The smallest range covering both this range and `value`.
    ///
    /// Non-finite values, and values that would make the length overflow,
    /// are ignored.
    pub fn combine_value(&self, value: f64) -> Self {
        Self::new(self.lower.min(value), self.upper.max(value)).unwrap_or(*self)
    }

    /// The range shifted by `delta` in value space.
    pub fn shifted(&self, delta: f64) -> Result<Self, RangeError> {
        Self::new(self.lower + delta, self.upper + delta)
    }
}
