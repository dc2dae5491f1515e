// Copyright 2025 the Chartframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Background painters for table elements.

use kurbo::Rect;
use peniko::Brush;
use peniko::color::palette::css;

use crate::graphics::Graphics;

/// A paint + width pair for outlines.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width.
    pub width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, width: f64) -> Self {
        Self {
            brush: brush.into(),
            width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// Paints the background of an element's rectangle.
pub trait RectanglePainter {
    /// Paints `rect`.
    fn paint(&self, graphics: &mut dyn Graphics, rect: Rect);
}

/// Fills and/or outlines the rectangle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StandardRectanglePainter {
    /// Fill paint, if any.
    pub fill: Option<Brush>,
    /// Outline, if any.
    pub stroke: Option<StrokeStyle>,
}

impl StandardRectanglePainter {
    /// A painter that only fills.
    pub fn filled(fill: impl Into<Brush>) -> Self {
        Self {
            fill: Some(fill.into()),
            stroke: None,
        }
    }

    /// Adds an outline.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = Some(stroke);
        self
    }
}

impl RectanglePainter for StandardRectanglePainter {
    fn paint(&self, graphics: &mut dyn Graphics, rect: Rect) {
        if let Some(fill) = &self.fill {
            graphics.set_fill(fill);
            graphics.fill_rect(rect);
        }
        if let Some(stroke) = &self.stroke {
            graphics.set_stroke(&stroke.brush, stroke.width);
            graphics.draw_rect(rect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::rect_xywh;
    use crate::graphics::{DrawOp, RecordingGraphics};
    use crate::measure::HeuristicTextMeasurer;

    #[test]
    fn fill_then_outline() {
        let mut g = RecordingGraphics::new(HeuristicTextMeasurer::default());
        let rect = rect_xywh(1.0, 2.0, 3.0, 4.0);
        StandardRectanglePainter::filled(css::WHITE)
            .with_stroke(StrokeStyle::solid(css::GRAY, 0.5))
            .paint(&mut g, rect);
        assert_eq!(
            g.ops,
            [
                DrawOp::SetFill(css::WHITE.into()),
                DrawOp::FillRect(rect),
                DrawOp::SetStroke {
                    brush: css::GRAY.into(),
                    width: 0.5
                },
                DrawOp::DrawRect(rect),
            ]
        );
    }

    #[test]
    fn empty_painter_draws_nothing() {
        let mut g = RecordingGraphics::new(HeuristicTextMeasurer::default());
        StandardRectanglePainter::default().paint(&mut g, rect_xywh(0.0, 0.0, 1.0, 1.0));
        assert!(g.ops.is_empty());
    }
}
