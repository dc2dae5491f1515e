// Copyright 2025 the Chartframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing capability consumed by `draw` passes.
//!
//! Layout code only ever calls [`Graphics`] from `draw`; the measure and
//! layout passes need nothing beyond a [`TextMeasurer`]. Backends (SVG,
//! canvas, a GPU renderer) implement this trait downstream.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{BezPath, Point, Rect};
use peniko::Brush;

use crate::measure::{HeuristicTextMeasurer, TextMeasurer, TextMetrics, TextStyle};

/// A stateful 2D drawing surface.
///
/// Fill, stroke and font are current-state settings, applied by the
/// following primitive calls.
pub trait Graphics: TextMeasurer {
    /// Sets the paint used by [`Graphics::fill_rect`] and [`Graphics::fill_path`],
    /// and by [`Graphics::draw_string`].
    fn set_fill(&mut self, brush: &Brush);
    /// Sets the paint and width used by [`Graphics::draw_rect`] and [`Graphics::stroke_path`].
    fn set_stroke(&mut self, brush: &Brush, width: f64);
    /// Sets the font used by [`Graphics::draw_string`].
    fn set_font(&mut self, style: &TextStyle);
    /// Fills `rect` with the current fill.
    fn fill_rect(&mut self, rect: Rect);
    /// Outlines `rect` with the current stroke.
    fn draw_rect(&mut self, rect: Rect);
    /// Draws one line of text with its baseline starting at `origin`.
    fn draw_string(&mut self, text: &str, origin: Point);
    /// Fills `path` with the current fill.
    fn fill_path(&mut self, path: &BezPath);
    /// Strokes `path` with the current stroke.
    fn stroke_path(&mut self, path: &BezPath);
}

/// A single recorded [`Graphics`] call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// [`Graphics::set_fill`].
    SetFill(Brush),
    /// [`Graphics::set_stroke`].
    SetStroke {
        /// Stroke paint.
        brush: Brush,
        /// Stroke width.
        width: f64,
    },
    /// [`Graphics::set_font`].
    SetFont(TextStyle),
    /// [`Graphics::fill_rect`].
    FillRect(Rect),
    /// [`Graphics::draw_rect`].
    DrawRect(Rect),
    /// [`Graphics::draw_string`].
    DrawString {
        /// The text.
        text: String,
        /// Baseline origin.
        origin: Point,
    },
    /// [`Graphics::fill_path`].
    FillPath(BezPath),
    /// [`Graphics::stroke_path`].
    StrokePath(BezPath),
}

/// A [`Graphics`] implementation that records every call.
///
/// Useful for asserting on draw output and for exporting a layout to a
/// backend later.
#[derive(Clone, Debug, Default)]
pub struct RecordingGraphics<M = HeuristicTextMeasurer> {
    measurer: M,
    /// Calls in the order they were made.
    pub ops: Vec<DrawOp>,
}

impl<M: TextMeasurer> RecordingGraphics<M> {
    /// Creates an empty recording that measures text with `measurer`.
    pub fn new(measurer: M) -> Self {
        Self {
            measurer,
            ops: Vec::new(),
        }
    }

    /// Rectangles passed to [`Graphics::fill_rect`], in call order.
    pub fn filled_rects(&self) -> impl Iterator<Item = Rect> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::FillRect(r) => Some(*r),
            _ => None,
        })
    }

    /// Strings passed to [`Graphics::draw_string`] with their origins.
    pub fn strings(&self) -> impl Iterator<Item = (&str, Point)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::DrawString { text, origin } => Some((text.as_str(), *origin)),
            _ => None,
        })
    }
}

impl<M: TextMeasurer> TextMeasurer for RecordingGraphics<M> {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        self.measurer.measure(text, style)
    }
}

impl<M: TextMeasurer> Graphics for RecordingGraphics<M> {
    fn set_fill(&mut self, brush: &Brush) {
        self.ops.push(DrawOp::SetFill(brush.clone()));
    }

    fn set_stroke(&mut self, brush: &Brush, width: f64) {
        self.ops.push(DrawOp::SetStroke {
            brush: brush.clone(),
            width,
        });
    }

    fn set_font(&mut self, style: &TextStyle) {
        self.ops.push(DrawOp::SetFont(style.clone()));
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.ops.push(DrawOp::FillRect(rect));
    }

    fn draw_rect(&mut self, rect: Rect) {
        self.ops.push(DrawOp::DrawRect(rect));
    }

    fn draw_string(&mut self, text: &str, origin: Point) {
        self.ops.push(DrawOp::DrawString {
            text: text.into(),
            origin,
        });
    }

    fn fill_path(&mut self, path: &BezPath) {
        self.ops.push(DrawOp::FillPath(path.clone()));
    }

    fn stroke_path(&mut self, path: &BezPath) {
        self.ops.push(DrawOp::StrokePath(path.clone()));
    }
}
