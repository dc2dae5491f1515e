// Copyright 2025 the Chartframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swatch legends built on the table layout tree.
//!
//! A [`LegendSpec`] is unpositioned. Use it with the usual two steps:
//! - Measure: [`LegendSpec::measure`] (or [`LegendSpec::reserve`] to claim an
//!   edge of the plot during data-area negotiation).
//! - Arrange: [`LegendSpec::place`] fits the measured size into a target
//!   rectangle and keeps the built table for drawing.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Circle, Rect, Size};
use peniko::color::palette::css;
use peniko::{Brush, Color};

use crate::anchor::{Fit, RefPoint};
use crate::axis_space::{AxisSpace, AxisSpaceError, Edge};
use crate::geometry::Insets;
use crate::graphics::Graphics;
use crate::measure::{TextMeasurer, TextStyle};
use crate::table::{GridElement, RectangleElement, ShapeElement, TableElement, TextElement};

/// One legend entry.
#[derive(Clone, Debug)]
pub struct LegendItem {
    /// The label string shown next to the swatch.
    pub label: String,
    /// The swatch fill paint.
    pub fill: Brush,
}

impl LegendItem {
    /// Convenience constructor for a solid-color swatch.
    pub fn solid(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            fill: Brush::Solid(color),
        }
    }
}

/// Swatch shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LegendShape {
    /// A filled square.
    #[default]
    Square,
    /// A filled circle.
    Circle,
    /// A short horizontal bar, for line series.
    Line,
}

/// An unpositioned legend: a grid of swatches with labels.
#[derive(Clone, Debug)]
pub struct LegendSpec {
    /// Swatch width and height.
    pub swatch_size: f64,
    /// Swatch shape.
    pub shape: LegendShape,
    /// Horizontal gap between swatch and label.
    pub label_gap: f64,
    /// Vertical gap between rows.
    pub row_gap: f64,
    /// Number of columns.
    ///
    /// Items are laid out top-to-bottom, then left-to-right into columns.
    pub columns: usize,
    /// Horizontal gap between columns.
    pub column_gap: f64,
    /// Label font.
    pub font: TextStyle,
    /// Label color.
    pub text_fill: Brush,
    /// Space around the whole legend.
    pub padding: Insets,
    /// Items in display order.
    pub items: Vec<LegendItem>,
}

impl LegendSpec {
    /// Creates a legend with default styling.
    pub fn new(items: Vec<LegendItem>) -> Self {
        Self {
            swatch_size: 10.0,
            shape: LegendShape::Square,
            label_gap: 6.0,
            row_gap: 6.0,
            columns: 1,
            column_gap: 12.0,
            font: TextStyle::new(10.0),
            text_fill: css::BLACK.into(),
            padding: Insets::ZERO,
            items,
        }
    }

    /// Set the label text paint.
    pub fn with_text_fill(mut self, text_fill: impl Into<Brush>) -> Self {
        self.text_fill = text_fill.into();
        self
    }

    /// Set the label font.
    pub fn with_font(mut self, font: TextStyle) -> Self {
        self.font = font;
        self
    }

    /// Set the swatch size.
    pub fn with_swatch_size(mut self, swatch_size: f64) -> Self {
        self.swatch_size = swatch_size;
        self
    }

    /// Set the swatch shape.
    pub fn with_shape(mut self, shape: LegendShape) -> Self {
        self.shape = shape;
        self
    }

    /// Sets the number of columns.
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns.max(1);
        self
    }

    /// Sets the gap between columns.
    pub fn with_column_gap(mut self, column_gap: f64) -> Self {
        self.column_gap = column_gap.max(0.0);
        self
    }

    /// Sets the gap between rows.
    pub fn with_row_gap(mut self, row_gap: f64) -> Self {
        self.row_gap = row_gap.max(0.0);
        self
    }

    /// Sets the padding around the legend.
    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    fn swatch(&self, item: &LegendItem) -> TableElement {
        let s = self.swatch_size.max(0.0);
        match self.shape {
            LegendShape::Square => RectangleElement::new(s, s, item.fill.clone()).into(),
            LegendShape::Circle => {
                ShapeElement::new(&Circle::new((0.0, 0.0), 0.5 * s), item.fill.clone()).into()
            }
            LegendShape::Line => {
                RectangleElement::new(s, (0.2 * s).max(1.0), item.fill.clone()).into()
            }
        }
    }

    /// Builds the legend table.
    ///
    /// Each item becomes a swatch cell and a left-aligned label cell in the
    /// same row; gaps are carried as cell insets.
    pub fn build(&self) -> TableElement {
        let columns = self.columns.max(1);
        let rows = self.items.len().div_ceil(columns);
        let mut grid = GridElement::new();
        for (i, item) in self.items.iter().enumerate() {
            let col = i / rows;
            let row = i % rows;
            let below = if row + 1 < rows { self.row_gap.max(0.0) } else { 0.0 };
            let after = if col + 1 < columns && (col + 1) * rows < self.items.len() {
                self.column_gap.max(0.0)
            } else {
                0.0
            };
            let row_key = format!("row{row}");
            let swatch_insets = Insets::new(0.0, 0.0, below, 0.0).unwrap_or_default();
            let label_insets =
                Insets::new(0.0, self.label_gap.max(0.0), below, after).unwrap_or_default();
            grid.add(
                row_key.clone(),
                format!("swatch{col}"),
                self.swatch(item).with_insets(swatch_insets),
            );
            grid.add(
                row_key,
                format!("label{col}"),
                TableElement::from(
                    TextElement::new(item.label.clone(), self.font.clone())
                        .with_fill(self.text_fill.clone()),
                )
                .with_insets(label_insets)
                .with_ref_point(RefPoint::Left),
            );
        }
        TableElement::from(grid).with_insets(self.padding)
    }

    /// The size the legend wants when unconstrained.
    pub fn measure(&self, measurer: &dyn TextMeasurer) -> Size {
        let unbounded = Rect::new(0.0, 0.0, f64::MAX, f64::MAX);
        self.build().preferred_size(measurer, unbounded)
    }

    /// Reserves the legend's extent plus `gap` on `edge`.
    pub fn reserve(
        &self,
        measurer: &dyn TextMeasurer,
        edge: Edge,
        gap: f64,
        space: &mut AxisSpace,
    ) -> Result<(), AxisSpaceError> {
        let size = self.measure(measurer);
        let extent = if edge.is_horizontal() {
            size.height
        } else {
            size.width
        };
        space.extend(extent + gap.max(0.0), edge)
    }

    /// Fits the legend into `target`.
    ///
    /// A legend larger than `target` is clamped to it.
    pub fn place(&self, measurer: &dyn TextMeasurer, target: Rect, fit: &Fit) -> LegendLayout {
        let element = self.build();
        let size = element.preferred_size(measurer, target);
        LegendLayout {
            bounds: fit.fit(size, target),
            element,
        }
    }
}

/// A placed legend.
#[derive(Clone, Debug)]
pub struct LegendLayout {
    /// The legend table.
    pub element: TableElement,
    /// Where the table goes.
    pub bounds: Rect,
}

impl LegendLayout {
    /// Rectangles for the table and its cells.
    pub fn layout_elements(&self, measurer: &dyn TextMeasurer) -> Vec<Rect> {
        self.element.layout_elements(measurer, self.bounds)
    }

    /// Draws the legend.
    pub fn draw(&self, graphics: &mut dyn Graphics) {
        self.element.draw(graphics, self.bounds);
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use kurbo::Vec2;

    use super::*;
    use crate::anchor::{Anchor, ScaleMode};
    use crate::geometry::rect_xywh;
    use crate::graphics::RecordingGraphics;
    use crate::measure::HeuristicTextMeasurer;

    fn items() -> Vec<LegendItem> {
        vec![
            LegendItem::solid("A", css::BLACK),
            LegendItem::solid("BBBB", css::RED),
            LegendItem::solid("CC", css::GREEN),
            LegendItem::solid("DDDDDD", css::BLUE),
        ]
    }

    #[test]
    fn measure_accounts_for_columns() {
        let measurer = HeuristicTextMeasurer::default();
        let s1 = LegendSpec::new(items()).with_columns(1).measure(&measurer);
        let s2 = LegendSpec::new(items()).with_columns(2).measure(&measurer);
        assert!(s2.width > s1.width);
        assert!(s2.height < s1.height);
    }

    #[test]
    fn single_column_size_is_exact() {
        let m = HeuristicTextMeasurer::SQUARE;
        let spec = LegendSpec::new(items())
            .with_font(TextStyle::new(10.0))
            .with_padding(Insets::uniform(2.0).unwrap());
        // Swatch 10 + gap 6 + "DDDDDD" 60; four 10px rows with three 6px gaps.
        assert_eq!(spec.measure(&m), Size::new(80.0, 62.0));
    }

    #[test]
    fn place_fits_into_corner() {
        let m = HeuristicTextMeasurer::SQUARE;
        let spec = LegendSpec::new(items());
        let size = spec.measure(&m);
        let target = rect_xywh(0.0, 0.0, 400.0, 300.0);
        let fit = Fit::new(
            Anchor::new(RefPoint::TopRight, Vec2::new(8.0, 8.0)),
            ScaleMode::None,
        );
        let placed = spec.place(&m, target, &fit);
        assert_eq!(
            placed.bounds,
            rect_xywh(392.0 - size.width, 8.0, size.width, size.height)
        );

        let rects = placed.layout_elements(&m);
        assert_eq!(rects.len(), 1 + 2 * 4);
        assert_eq!(rects[0], placed.bounds);

        let mut g = RecordingGraphics::new(m);
        placed.draw(&mut g);
        let labels: Vec<&str> = g.strings().map(|(t, _)| t).collect();
        assert_eq!(labels, ["A", "BBBB", "CC", "DDDDDD"]);
        assert_eq!(g.filled_rects().count(), 4);
    }

    #[test]
    fn oversized_legend_stays_inside_target() {
        let m = HeuristicTextMeasurer::SQUARE;
        let target = rect_xywh(300.0, 20.0, 40.0, 30.0);
        let placed = LegendSpec::new(items()).place(
            &m,
            target,
            &Fit::no_scaling(RefPoint::TopLeft),
        );
        assert_eq!(placed.bounds, target);
        let rects = placed.layout_elements(&m);
        let slack = target.inflate(1e-9, 1e-9);
        for r in rects {
            assert_eq!(slack.union(r), slack, "{r:?} escapes {target:?}");
        }
    }

    #[test]
    fn circle_swatches_draw_paths() {
        let m = HeuristicTextMeasurer::default();
        let target = rect_xywh(0.0, 0.0, 200.0, 200.0);
        let placed = LegendSpec::new(items())
            .with_shape(LegendShape::Circle)
            .place(&m, target, &Fit::no_scaling(RefPoint::Center));
        let mut g = RecordingGraphics::new(m);
        placed.draw(&mut g);
        let paths = g
            .ops
            .iter()
            .filter(|op| matches!(op, crate::graphics::DrawOp::FillPath(_)))
            .count();
        assert_eq!(paths, 4);
    }

    #[test]
    fn reserve_claims_width_on_side_edges() {
        let m = HeuristicTextMeasurer::SQUARE;
        let spec = LegendSpec::new(items());
        let size = spec.measure(&m);
        let mut space = AxisSpace::new();
        spec.reserve(&m, Edge::Right, 18.0, &mut space).unwrap();
        spec.reserve(&m, Edge::Top, 4.0, &mut space).unwrap();
        assert_eq!(space.get(Edge::Right), size.width + 18.0);
        assert_eq!(space.get(Edge::Top), size.height + 4.0);
    }
}
