// Copyright 2025 the Chartframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry value types.
//!
//! Sizes, points, offsets and rectangles are the `kurbo` types
//! ([`Size`], [`kurbo::Point`], [`kurbo::Vec2`], [`Rect`]). This module adds [`Insets`],
//! which (unlike `kurbo::Insets`) is validated on construction and named by
//! edge, plus a few helpers shared by the layout code.

use kurbo::{Rect, Size};
use thiserror::Error;

use crate::axis_space::Edge;

/// Errors returned when building [`Insets`].
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum InsetsError {
    /// One of the components is NaN or infinite.
    #[error("insets: `{edge}` must be a finite number, got {value}")]
    NonFinite {
        /// The offending edge.
        edge: Edge,
        /// The offending value.
        value: f64,
    },
}

/// Space around the four edges of a rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Insets {
    top: f64,
    left: f64,
    bottom: f64,
    right: f64,
}

impl Insets {
    /// No space on any edge.
    pub const ZERO: Self = Self {
        top: 0.0,
        left: 0.0,
        bottom: 0.0,
        right: 0.0,
    };

    /// Creates insets from the four edge amounts, in `top, left, bottom, right` order.
    pub fn new(top: f64, left: f64, bottom: f64, right: f64) -> Result<Self, InsetsError> {
        for (edge, value) in [
            (Edge::Top, top),
            (Edge::Left, left),
            (Edge::Bottom, bottom),
            (Edge::Right, right),
        ] {
            if !value.is_finite() {
                return Err(InsetsError::NonFinite { edge, value });
            }
        }
        Ok(Self {
            top,
            left,
            bottom,
            right,
        })
    }

    /// Creates insets with the same amount on every edge.
    pub fn uniform(amount: f64) -> Result<Self, InsetsError> {
        Self::new(amount, amount, amount, amount)
    }

    /// Returns the amount for `edge`.
    pub fn get(&self, edge: Edge) -> f64 {
        match edge {
            Edge::Top => self.top,
            Edge::Left => self.left,
            Edge::Bottom => self.bottom,
            Edge::Right => self.right,
        }
    }

    /// Top inset.
    pub fn top(&self) -> f64 {
        self.top
    }

    /// Left inset.
    pub fn left(&self) -> f64 {
        self.left
    }

    /// Bottom inset.
    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    /// Right inset.
    pub fn right(&self) -> f64 {
        self.right
    }

    /// `left + right`.
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// `top + bottom`.
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }

    /// Grows `size` by these insets.
    pub fn grow(&self, size: Size) -> Size {
        Size::new(size.width + self.horizontal(), size.height + self.vertical())
    }

    /// Pulls the edges of `rect` inward, never past each other.
    pub fn shrink(&self, rect: Rect) -> Rect {
        shrink_rect(rect, self.top, self.left, self.bottom, self.right)
    }
}

impl From<Insets> for kurbo::Insets {
    fn from(value: Insets) -> Self {
        Self::new(value.left, value.top, value.right, value.bottom)
    }
}

/// Builds a rectangle from its origin and extent, `(x, y, width, height)`.
pub fn rect_xywh(x: f64, y: f64, width: f64, height: f64) -> Rect {
    Rect::from_origin_size((x, y), (width, height))
}

/// Clamps `size` so it fits inside `bounds` in both dimensions.
pub(crate) fn clamp_size(size: Size, bounds: Size) -> Size {
    Size::new(
        size.width.min(bounds.width).max(0.0),
        size.height.min(bounds.height).max(0.0),
    )
}

/// Clamps `rect` into `bounds`; a rect outside collapses onto the nearest edge.
pub(crate) fn clamp_rect(rect: Rect, bounds: Rect) -> Rect {
    let (rect, bounds) = (rect.abs(), bounds.abs());
    let x0 = rect.x0.max(bounds.x0).min(bounds.x1);
    let y0 = rect.y0.max(bounds.y0).min(bounds.y1);
    Rect::new(
        x0,
        y0,
        rect.x1.min(bounds.x1).max(x0),
        rect.y1.min(bounds.y1).max(y0),
    )
}

/// Pulls the edges of `rect` in; when opposing insets overlap the rectangle
/// collapses to zero extent at the pulled-in near edge.
pub(crate) fn shrink_rect(rect: Rect, top: f64, left: f64, bottom: f64, right: f64) -> Rect {
    let rect = rect.abs();
    let x0 = (rect.x0 + left).min(rect.x1);
    let y0 = (rect.y0 + top).min(rect.y1);
    let x1 = (rect.x1 - right).max(x0);
    let y1 = (rect.y1 - bottom).max(y0);
    Rect::new(x0, y0, x1, y1)
}
