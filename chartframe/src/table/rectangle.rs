// Copyright 2025 the Chartframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size};
use peniko::Brush;

use super::ElementProps;
use crate::graphics::Graphics;

/// A filled rectangle of fixed size.
#[derive(Clone, Debug)]
pub struct RectangleElement {
    /// Shared element settings.
    pub props: ElementProps,
    /// Requested size; negative extents count as zero.
    pub size: Size,
    /// Fill paint.
    pub fill: Brush,
}

impl RectangleElement {
    /// Creates a `width` by `height` rectangle.
    pub fn new(width: f64, height: f64, fill: impl Into<Brush>) -> Self {
        Self {
            props: ElementProps::default(),
            size: Size::new(width, height),
            fill: fill.into(),
        }
    }

    pub(super) fn content_size(&self) -> Size {
        Size::new(self.size.width.max(0.0), self.size.height.max(0.0))
    }

    pub(super) fn draw_content(&self, graphics: &mut dyn Graphics, content: Rect) {
        graphics.set_fill(&self.fill);
        graphics.fill_rect(content);
    }
}
