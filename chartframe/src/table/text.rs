// Copyright 2025 the Chartframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use kurbo::{Point, Rect, Size};
use peniko::Brush;
use peniko::color::palette::css;

use super::ElementProps;
use crate::graphics::Graphics;
use crate::measure::{TextMeasurer, TextStyle, text_dim};

/// Horizontal placement of each line inside a text element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HorizontalAlign {
    /// Flush left.
    #[default]
    Left,
    /// Centered.
    Center,
    /// Flush right.
    Right,
}

/// A text leaf. Lines are separated by `\n`.
#[derive(Clone, Debug)]
pub struct TextElement {
    /// Shared element settings.
    pub props: ElementProps,
    /// The text.
    pub text: String,
    /// Font.
    pub style: TextStyle,
    /// Text paint.
    pub fill: Brush,
    /// Line alignment.
    pub align: HorizontalAlign,
}

impl TextElement {
    /// Black, left-aligned text.
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            props: ElementProps::default(),
            text: text.into(),
            style,
            fill: css::BLACK.into(),
            align: HorizontalAlign::Left,
        }
    }

    /// Sets the text paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the line alignment.
    pub fn with_align(mut self, align: HorizontalAlign) -> Self {
        self.align = align;
        self
    }

    pub(super) fn content_size(&self, measurer: &dyn TextMeasurer) -> Size {
        text_dim(measurer, &self.text, &self.style)
    }

    pub(super) fn draw_content(&self, graphics: &mut dyn Graphics, content: Rect) {
        graphics.set_font(&self.style);
        graphics.set_fill(&self.fill);
        let mut top = content.y0;
        for line in self.text.split('\n') {
            let metrics = graphics.measure(line, &self.style);
            let x = match self.align {
                HorizontalAlign::Left => content.x0,
                HorizontalAlign::Center => {
                    content.x0 + 0.5 * (content.width() - metrics.advance_width)
                }
                HorizontalAlign::Right => content.x1 - metrics.advance_width,
            };
            graphics.draw_string(line, Point::new(x, top + metrics.ascent));
            top += metrics.line_height();
        }
    }
}
