// Copyright 2025 the Chartframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for layout.
//!
//! Layout never shapes text itself; it asks a [`TextMeasurer`] supplied by the
//! caller. [`text_dim`] is the size-only view used by table text elements and
//! axis tick labels.

use kurbo::Size;

pub use chartframe_text::{
    FontFamily, FontStyle, FontWeight, HeuristicTextMeasurer, TextMeasurer, TextMetrics,
    TextStyle,
};

/// The width and height `text` occupies in `style`, honoring line breaks.
pub fn text_dim(measurer: &dyn TextMeasurer, text: &str, style: &TextStyle) -> Size {
    let metrics = measurer.measure_lines(text, style);
    Size::new(metrics.advance_width.max(0.0), metrics.line_height().max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_dim_uses_line_height() {
        let m = HeuristicTextMeasurer::default();
        let size = text_dim(&m, "Mg", &TextStyle::new(10.0));
        assert!((size.width - 12.0).abs() < 1e-9, "2 glyphs at 0.6em");
        assert!((size.height - 10.0).abs() < 1e-9);
        let two = text_dim(&m, "a\nb", &TextStyle::new(10.0));
        assert!((two.height - 20.0).abs() < 1e-9);
    }
}
