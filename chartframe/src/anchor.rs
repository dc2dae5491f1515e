// Copyright 2025 the Chartframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchored rectangle fitting.
//!
//! A [`RefPoint`] names one of nine positions on a rectangle. An [`Anchor`]
//! adds an inward pixel offset, and a [`Fit`] combines an anchor with a
//! [`ScaleMode`] to place (and optionally stretch) a source size inside a
//! target rectangle. The horizontal and vertical rules are independent, so
//! `TopLeft` is simply "left" on x and "top" on y.

use core::fmt;
use core::str::FromStr;

use kurbo::{Point, Rect, Size, Vec2};
use thiserror::Error;

use crate::geometry::rect_xywh;

/// Errors returned when parsing a [`RefPoint`] code.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RefPointError {
    /// The code does not name one of the nine reference points.
    #[error("ref point: `{0}` is not a recognized reference point code")]
    Unknown(alloc::string::String),
}

/// One of the nine standard reference points on a rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RefPoint {
    /// Top-left corner.
    TopLeft,
    /// Middle of the top edge.
    Top,
    /// Top-right corner.
    TopRight,
    /// Middle of the left edge.
    Left,
    /// The center.
    Center,
    /// Middle of the right edge.
    Right,
    /// Bottom-left corner.
    BottomLeft,
    /// Middle of the bottom edge.
    Bottom,
    /// Bottom-right corner.
    BottomRight,
}

impl RefPoint {
    /// All reference points, row by row from the top-left.
    pub const ALL: [Self; 9] = [
        Self::TopLeft,
        Self::Top,
        Self::TopRight,
        Self::Left,
        Self::Center,
        Self::Right,
        Self::BottomLeft,
        Self::Bottom,
        Self::BottomRight,
    ];

    /// On the left edge.
    pub fn is_left(self) -> bool {
        matches!(self, Self::TopLeft | Self::Left | Self::BottomLeft)
    }

    /// On the right edge.
    pub fn is_right(self) -> bool {
        matches!(self, Self::TopRight | Self::Right | Self::BottomRight)
    }

    /// On the top edge.
    pub fn is_top(self) -> bool {
        matches!(self, Self::TopLeft | Self::Top | Self::TopRight)
    }

    /// On the bottom edge.
    pub fn is_bottom(self) -> bool {
        matches!(self, Self::BottomLeft | Self::Bottom | Self::BottomRight)
    }

    /// Centered horizontally (`Top`, `Center`, `Bottom`).
    pub fn is_horizontal_center(self) -> bool {
        matches!(self, Self::Top | Self::Center | Self::Bottom)
    }

    /// Centered vertically (`Left`, `Center`, `Right`).
    pub fn is_vertical_center(self) -> bool {
        matches!(self, Self::Left | Self::Center | Self::Right)
    }

    /// The code for this point, e.g. `"TOP_LEFT"`.
    pub fn code(self) -> &'static str {
        match self {
            Self::TopLeft => "TOP_LEFT",
            Self::Top => "TOP",
            Self::TopRight => "TOP_RIGHT",
            Self::Left => "LEFT",
            Self::Center => "CENTER",
            Self::Right => "RIGHT",
            Self::BottomLeft => "BOTTOM_LEFT",
            Self::Bottom => "BOTTOM",
            Self::BottomRight => "BOTTOM_RIGHT",
        }
    }
}

impl fmt::Display for RefPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for RefPoint {
    type Err = RefPointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| RefPointError::Unknown(s.into()))
    }
}

/// A reference point plus an offset pulling inward from it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    /// The reference point.
    pub ref_point: RefPoint,
    /// Inward offset; `x` applies to left/right anchors, `y` to top/bottom.
    pub offset: Vec2,
}

impl Anchor {
    /// Creates an anchor.
    pub fn new(ref_point: RefPoint, offset: Vec2) -> Self {
        Self { ref_point, offset }
    }

    /// An anchor with no offset.
    pub fn at(ref_point: RefPoint) -> Self {
        Self::new(ref_point, Vec2::ZERO)
    }

    /// Resolves this anchor against `rect`.
    pub fn anchor_point(&self, rect: Rect) -> Point {
        let rect = rect.abs();
        let center = rect.center();
        let p = self.ref_point;
        let x = if p.is_left() {
            rect.x0 + self.offset.x
        } else if p.is_right() {
            rect.x1 - self.offset.x
        } else {
            center.x
        };
        let y = if p.is_top() {
            rect.y0 + self.offset.y
        } else if p.is_bottom() {
            rect.y1 - self.offset.y
        } else {
            center.y
        };
        Point::new(x, y)
    }
}

/// Which dimensions a [`Fit`] stretches to the target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScaleMode {
    /// Keep the source size.
    #[default]
    None,
    /// Stretch the width.
    Horizontal,
    /// Stretch the height.
    Vertical,
    /// Replace the source with the target rectangle.
    Both,
}

impl ScaleMode {
    /// Whether the width is taken from the target.
    pub fn scales_x(self) -> bool {
        matches!(self, Self::Horizontal | Self::Both)
    }

    /// Whether the height is taken from the target.
    pub fn scales_y(self) -> bool {
        matches!(self, Self::Vertical | Self::Both)
    }
}

/// Places a source size within a target rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fit {
    /// Where the source attaches to the target.
    pub anchor: Anchor,
    /// Which dimensions are stretched.
    pub scale_mode: ScaleMode,
}

impl Fit {
    /// Creates a fit.
    pub fn new(anchor: Anchor, scale_mode: ScaleMode) -> Self {
        Self { anchor, scale_mode }
    }

    /// A fit with zero offset that never scales.
    pub fn no_scaling(ref_point: RefPoint) -> Self {
        Self::new(Anchor::at(ref_point), ScaleMode::None)
    }

    /// Computes where `source` lands inside `target`.
    pub fn fit(&self, source: Size, target: Rect) -> Rect {
        let target = target.abs();
        if self.scale_mode == ScaleMode::Both {
            return target;
        }
        let p = self.anchor.ref_point;
        let offset = self.anchor.offset;

        let width = if self.scale_mode.scales_x() {
            if p.is_horizontal_center() {
                target.width()
            } else {
                (target.width() - 2.0 * offset.x).max(0.0)
            }
        } else {
            source.width
        };
        let height = if self.scale_mode.scales_y() {
            if p.is_vertical_center() {
                target.height()
            } else {
                (target.height() - 2.0 * offset.y).max(0.0)
            }
        } else {
            source.height
        };

        let point = self.anchor.anchor_point(target);
        let center = target.center();
        let x = if p.is_left() {
            point.x
        } else if p.is_right() {
            point.x - width
        } else {
            center.x - width / 2.0
        };
        let y = if p.is_top() {
            point.y
        } else if p.is_bottom() {
            point.y - height
        } else {
            center.y - height / 2.0
        };
        rect_xywh(x, y, width, height)
    }
}
