// Copyright 2025 the Chartframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, BezPath, Rect, Shape, Size};
use peniko::Brush;

use super::ElementProps;
use super::painter::StrokeStyle;
use crate::graphics::Graphics;

/// Flattening tolerance used when converting curved shapes to paths.
const PATH_TOLERANCE: f64 = 0.1;

/// An arbitrary shape, drawn centered in its content rectangle.
///
/// The shape is drawn at its natural size; a clamped content rectangle
/// does not scale it.
#[derive(Clone, Debug)]
pub struct ShapeElement {
    /// Shared element settings.
    pub props: ElementProps,
    path: BezPath,
    /// Fill paint.
    pub fill: Brush,
    /// Optional outline.
    pub outline: Option<StrokeStyle>,
}

impl ShapeElement {
    /// Wraps any [`kurbo::Shape`].
    pub fn new(shape: &impl Shape, fill: impl Into<Brush>) -> Self {
        Self {
            props: ElementProps::default(),
            path: shape.to_path(PATH_TOLERANCE),
            fill: fill.into(),
            outline: None,
        }
    }

    /// Adds an outline.
    pub fn with_outline(mut self, outline: StrokeStyle) -> Self {
        self.outline = Some(outline);
        self
    }

    /// The shape in its own coordinates.
    pub fn path(&self) -> &BezPath {
        &self.path
    }

    pub(super) fn content_size(&self) -> Size {
        if self.path.elements().is_empty() {
            return Size::ZERO;
        }
        self.path.bounding_box().size()
    }

    pub(super) fn draw_content(&self, graphics: &mut dyn Graphics, content: Rect) {
        if self.path.elements().is_empty() {
            return;
        }
        let delta = content.center() - self.path.bounding_box().center();
        let placed = Affine::translate(delta) * self.path.clone();
        graphics.set_fill(&self.fill);
        graphics.fill_path(&placed);
        if let Some(outline) = &self.outline {
            graphics.set_stroke(&outline.brush, outline.width);
            graphics.stroke_path(&placed);
        }
    }
}
