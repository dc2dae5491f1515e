// Copyright 2025 the Chartframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for chart layout.
//!
//! Axis tick labels, legend entries and titles all need to know how much room
//! a string occupies before anything is drawn. Shaping and glyph rendering live
//! downstream, so layout code depends only on the small [`TextMeasurer`]
//! interface defined here.
//!
//! This crate is:
//! - `no_std` (it uses `alloc` for owned font family names),
//! - renderer-agnostic: a canvas backend, a shaping engine and the
//!   [`HeuristicTextMeasurer`] can all implement the same trait.

#![no_std]

extern crate alloc;

use alloc::sync::Arc;

/// A minimal text measurement interface used by layout.
///
/// This is the `textDim(string, font)` capability: axes use it to estimate
/// tick label extents and table text elements use it for their preferred size.
pub trait TextMeasurer {
    /// Measure a single line of text.
    ///
    /// `text` is treated as a single line; see [`TextMeasurer::measure_lines`]
    /// for text containing `\n`.
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;

    /// Measure text that may span several lines.
    ///
    /// The result is as wide as the widest line. Ascent comes from the first
    /// line and every following line adds a full line height to the descent.
    fn measure_lines(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let mut lines = text.split('\n');
        let first = self.measure(lines.next().unwrap_or(""), style);
        lines.fold(first, |acc, line| {
            let m = self.measure(line, style);
            TextMetrics {
                advance_width: acc.advance_width.max(m.advance_width),
                ascent: acc.ascent,
                descent: acc.descent + acc.leading + m.ascent + m.descent,
                leading: m.leading,
            }
        })
    }
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        (**self).measure(text, style)
    }
}

/// Text styling inputs relevant to measurement.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in chart coordinates (typically pixels).
    pub font_size: f64,
    /// The preferred font family.
    pub font_family: FontFamily,
    /// Font weight (e.g. `400` for normal, `700` for bold).
    pub font_weight: FontWeight,
    /// Font style (normal/italic/oblique).
    pub font_style: FontStyle,
}

impl TextStyle {
    /// Creates a sans-serif, normal-weight `TextStyle` with the given `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_family: FontFamily::SansSerif,
            font_weight: FontWeight::NORMAL,
            font_style: FontStyle::Normal,
        }
    }

    /// Sets the font family.
    #[must_use]
    pub fn with_family(mut self, font_family: FontFamily) -> Self {
        self.font_family = font_family;
        self
    }

    /// Sets the font weight.
    #[must_use]
    pub fn with_weight(mut self, font_weight: FontWeight) -> Self {
        self.font_weight = font_weight;
        self
    }

    /// Sets the font style.
    #[must_use]
    pub fn with_style(mut self, font_style: FontStyle) -> Self {
        self.font_style = font_style;
        self
    }

    /// Shorthand for `with_weight(FontWeight::BOLD)`.
    #[must_use]
    pub fn bold(self) -> Self {
        self.with_weight(FontWeight::BOLD)
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(12.0)
    }
}

/// Font family selection for measurement.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic serif family (CSS `serif`).
    Serif,
    /// A generic sans-serif family (CSS `sans-serif`).
    SansSerif,
    /// A generic monospace family (CSS `monospace`).
    Monospace,
    /// A named family (e.g. `"Inter"`, `"Helvetica Neue"`).
    Named(Arc<str>),
}

impl FontFamily {
    /// Returns the font family string for CSS-style font declarations.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

/// CSS-style font weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Normal weight (`400`).
    pub const NORMAL: Self = Self(400);
    /// Bold weight (`700`).
    pub const BOLD: Self = Self(700);
}

/// CSS-style font styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// Normal style.
    Normal,
    /// Italic style.
    Italic,
    /// Oblique style.
    Oblique,
}

/// Measured metrics for a run of text.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextMetrics {
    /// The advance width.
    pub advance_width: f64,
    /// Distance from baseline to the top of typical glyphs.
    pub ascent: f64,
    /// Distance from baseline to the bottom of typical glyphs.
    pub descent: f64,
    /// Additional line spacing beyond ascent+descent.
    pub leading: f64,
}

impl TextMetrics {
    /// Returns `ascent + descent + leading`.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.ascent + self.descent + self.leading
    }
}

/// A heuristic text measurer for tests, demos and early layout.
///
/// Every glyph is assumed to be `char_width` em wide; the baseline sits
/// `ascent` em below the top of the line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeuristicTextMeasurer {
    /// Average glyph advance, in em.
    pub char_width: f64,
    /// Ascent, in em.
    pub ascent: f64,
    /// Descent, in em.
    pub descent: f64,
}

impl HeuristicTextMeasurer {
    /// A measurer where every glyph is exactly one em square with no descent.
    ///
    /// Handy in tests because the numbers stay round.
    pub const SQUARE: Self = Self {
        char_width: 1.0,
        ascent: 1.0,
        descent: 0.0,
    };
}

impl Default for HeuristicTextMeasurer {
    fn default() -> Self {
        Self {
            char_width: 0.6,
            ascent: 0.8,
            descent: 0.2,
        }
    }
}

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let em = style.font_size.max(0.0);
        TextMetrics {
            advance_width: self.char_width * em * text.chars().count() as f64,
            ascent: self.ascent * em,
            descent: self.descent * em,
            leading: 0.0,
        }
    }
}
