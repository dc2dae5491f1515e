// Copyright 2025 the Chartframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reserved space around a data area.
//!
//! Axes, titles and legends each declare how many pixels they need on one
//! edge of a candidate data rectangle. [`AxisSpace`] adds those contributions
//! up during a single layout pass; [`AxisSpace::inner_rect`] then subtracts the
//! totals from the plot bounds.

use core::fmt;
use core::str::FromStr;

use kurbo::Rect;
use thiserror::Error;

use crate::geometry::{Insets, shrink_rect};

/// A rectangle edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    /// The top edge.
    Top,
    /// The left edge.
    Left,
    /// The bottom edge.
    Bottom,
    /// The right edge.
    Right,
}

impl Edge {
    /// All four edges, in `top, left, bottom, right` order.
    pub const ALL: [Self; 4] = [Self::Top, Self::Left, Self::Bottom, Self::Right];

    /// Returns `true` for top and bottom, the edges that hold horizontal axes.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    /// Returns `true` for left and right.
    pub fn is_vertical(self) -> bool {
        !self.is_horizontal()
    }

    /// The edge code, e.g. `"LEFT"`.
    pub fn code(self) -> &'static str {
        match self {
            Self::Top => "TOP",
            Self::Left => "LEFT",
            Self::Bottom => "BOTTOM",
            Self::Right => "RIGHT",
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Edge {
    type Err = AxisSpaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|e| e.code().eq_ignore_ascii_case(s.trim()))
            .ok_or(AxisSpaceError::UnknownEdge)
    }
}

/// Errors returned by [`AxisSpace`].
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum AxisSpaceError {
    /// The amount is NaN or infinite.
    #[error("axis space: `amount` for {edge} must be a finite number, got {amount}")]
    NonFinite {
        /// Edge being extended.
        edge: Edge,
        /// The rejected amount.
        amount: f64,
    },
    /// The edge code is not one of `TOP`, `LEFT`, `BOTTOM`, `RIGHT`.
    #[error("axis space: `edge` must be one of TOP, LEFT, BOTTOM, RIGHT")]
    UnknownEdge,
}

/// A running total of reserved pixels per edge.
///
/// Build one per layout pass and pass it by `&mut` to every contributor.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxisSpace {
    top: f64,
    left: f64,
    bottom: f64,
    right: f64,
}

impl AxisSpace {
    /// An empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&mut self, edge: Edge) -> &mut f64 {
        match edge {
            Edge::Top => &mut self.top,
            Edge::Left => &mut self.left,
            Edge::Bottom => &mut self.bottom,
            Edge::Right => &mut self.right,
        }
    }

    /// Adds `amount` pixels to `edge`.
    pub fn extend(&mut self, amount: f64, edge: Edge) -> Result<(), AxisSpaceError> {
        if !amount.is_finite() {
            return Err(AxisSpaceError::NonFinite { edge, amount });
        }
        *self.slot(edge) += amount;
        Ok(())
    }

    /// [`AxisSpace::extend`] with the edge given by its code (`"LEFT"` etc).
    pub fn extend_code(&mut self, amount: f64, edge: &str) -> Result<(), AxisSpaceError> {
        let edge = edge.parse()?;
        self.extend(amount, edge)
    }

    /// Raises `edge` to at least `amount` pixels.
    pub fn ensure_at_least(&mut self, amount: f64, edge: Edge) -> Result<(), AxisSpaceError> {
        if !amount.is_finite() {
            return Err(AxisSpaceError::NonFinite { edge, amount });
        }
        let slot = self.slot(edge);
        *slot = slot.max(amount);
        Ok(())
    }

    /// Adds every edge of `other` to this accumulator.
    pub fn add(&mut self, other: &Self) {
        self.top += other.top;
        self.left += other.left;
        self.bottom += other.bottom;
        self.right += other.right;
    }

    /// The total reserved on `edge`.
    pub fn get(&self, edge: Edge) -> f64 {
        match edge {
            Edge::Top => self.top,
            Edge::Left => self.left,
            Edge::Bottom => self.bottom,
            Edge::Right => self.right,
        }
    }

    /// Returns the current totals as [`Insets`].
    pub fn insets(&self) -> Insets {
        // Every contribution went through a finiteness check.
        Insets::new(self.top, self.left, self.bottom, self.right).unwrap_or_default()
    }

    /// The rectangle left after pulling each edge of `source` in by its total.
    ///
    /// Width and height never go negative.
    pub fn inner_rect(&self, source: Rect) -> Rect {
        shrink_rect(source, self.top, self.left, self.bottom, self.right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::rect_xywh;

    #[test]
    fn extend_accumulates_per_edge() {
        let mut space = AxisSpace::new();
        space.extend(10.0, Edge::Left).unwrap();
        space.extend(5.0, Edge::Left).unwrap();
        let inner = space.inner_rect(rect_xywh(0.0, 0.0, 100.0, 100.0));
        assert_eq!(inner.x0, 15.0);
        assert_eq!(inner.width(), 85.0);
        assert_eq!(inner.y0, 0.0);
        assert_eq!(inner.height(), 100.0);
    }

    #[test]
    fn inner_rect_is_pure() {
        let mut space = AxisSpace::new();
        space.extend(3.0, Edge::Bottom).unwrap();
        let source = rect_xywh(0.0, 0.0, 10.0, 10.0);
        let a = space.inner_rect(source);
        let b = space.inner_rect(source);
        assert_eq!(a, b);
        assert_eq!(space.get(Edge::Bottom), 3.0);
    }

    #[test]
    fn rejects_bad_amounts_and_codes() {
        let mut space = AxisSpace::new();
        let err = space.extend(f64::NAN, Edge::Top).unwrap_err();
        assert!(matches!(err, AxisSpaceError::NonFinite { edge: Edge::Top, .. }));
        assert_eq!(space.extend_code(1.0, "MIDDLE"), Err(AxisSpaceError::UnknownEdge));
        space.extend_code(4.0, "right").unwrap();
        assert_eq!(space.get(Edge::Right), 4.0);
        assert_eq!(space.get(Edge::Top), 0.0);
    }

    #[test]
    fn ensure_at_least_only_raises() {
        let mut space = AxisSpace::new();
        space.extend(8.0, Edge::Top).unwrap();
        space.ensure_at_least(5.0, Edge::Top).unwrap();
        assert_eq!(space.get(Edge::Top), 8.0);
        space.ensure_at_least(12.0, Edge::Top).unwrap();
        assert_eq!(space.get(Edge::Top), 12.0);
    }

    #[test]
    fn combined_spaces_shrink_all_edges() {
        let mut a = AxisSpace::new();
        a.extend(10.0, Edge::Left).unwrap();
        let mut b = AxisSpace::new();
        b.extend(20.0, Edge::Bottom).unwrap();
        b.extend(5.0, Edge::Top).unwrap();
        a.add(&b);
        let inner = a.inner_rect(rect_xywh(0.0, 0.0, 200.0, 100.0));
        assert_eq!(inner, Rect::new(10.0, 5.0, 200.0, 80.0));
        assert_eq!(a.insets().vertical(), 25.0);
    }
}
