// Copyright 2025 the Chartframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value axes: mapping between data values and pixel coordinates.
//!
//! An axis owns a [`Range`] and maps it onto a pixel interval `[r0, r1]`
//! supplied by the caller, so the same axis serves whatever data area the
//! current layout pass produced. `r0` is where the lower bound lands; vertical
//! axes usually pass `(data.y1, data.y0)` so values grow upward.
//!
//! Zooming and panning are expressed in percent space and therefore behave the
//! same for [`LinearAxis`] and [`LogAxis`].

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use kurbo::Rect;
use thiserror::Error;

use crate::axis_space::{AxisSpace, AxisSpaceError, Edge};
use crate::log::{debug, trace};
use crate::measure::{TextMeasurer, TextStyle};
use crate::range::{Range, RangeError};
use crate::tick::{TickFormat, TickSelector, TickSelectorError};

/// Tick counts above this are treated as "does not fit".
const MAX_TICKS: f64 = 10_000.0;

/// Errors returned by axis operations.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum AxisError {
    /// The operation would produce an invalid range.
    #[error(transparent)]
    Range(#[from] RangeError),
    /// Reserving space failed.
    #[error(transparent)]
    Space(#[from] AxisSpaceError),
    /// Tick selection was seeded with an invalid reference.
    #[error(transparent)]
    Tick(#[from] TickSelectorError),
    /// A zoom factor was not finite and positive.
    #[error("axis: zoom `factor` must be finite and > 0, got {0}")]
    InvalidZoomFactor(f64),
    /// A logarithmic axis was given a non-positive value.
    #[error("axis: log axis bounds must be > 0, got {0}")]
    NonPositiveLog(f64),
}

/// A tick position and its label.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Tick value in data units.
    pub value: f64,
    /// Formatted label.
    pub label: String,
}

/// Axis settings that affect layout and auto-ranging.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisConfig {
    /// Length of tick marks drawn outside the data area.
    pub tick_mark_length: f64,
    /// Gap between tick marks and their labels.
    pub tick_label_gap: f64,
    /// Font for tick labels.
    pub tick_label_font: TextStyle,
    /// Minimum free space between neighbouring tick labels.
    pub min_label_spacing: f64,
    /// Optional axis label, drawn beyond the tick labels.
    pub label: Option<String>,
    /// Font for the axis label.
    pub label_font: TextStyle,
    /// Gap between the tick labels and the axis label.
    pub label_gap: f64,
    /// Whether [`ValueAxis::auto_adjust_range`] may change the range.
    pub auto_range: bool,
    /// Whether auto-ranging always includes zero.
    pub auto_range_includes_zero: bool,
    /// Fraction of the data length added below the data when auto-ranging.
    pub lower_margin: f64,
    /// Fraction of the data length added above the data when auto-ranging.
    pub upper_margin: f64,
    /// Range length used when the data collapses to a single value.
    ///
    /// Measured in decades for [`LogAxis`].
    pub default_auto_length: f64,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            tick_mark_length: 4.0,
            tick_label_gap: 4.0,
            tick_label_font: TextStyle::new(11.0),
            min_label_spacing: 8.0,
            label: None,
            label_font: TextStyle::new(12.0),
            label_gap: 6.0,
            auto_range: true,
            auto_range_includes_zero: false,
            lower_margin: 0.05,
            upper_margin: 0.05,
            default_auto_length: 1.0,
        }
    }
}

impl AxisConfig {
    /// Sets the axis label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the tick label font.
    pub fn with_tick_label_font(mut self, font: TextStyle) -> Self {
        self.tick_label_font = font;
        self
    }

    /// Sets the tick mark length.
    pub fn with_tick_mark_length(mut self, length: f64) -> Self {
        self.tick_mark_length = length;
        self
    }

    /// Sets the gap between tick marks and labels.
    pub fn with_tick_label_gap(mut self, gap: f64) -> Self {
        self.tick_label_gap = gap;
        self
    }

    /// Sets the minimum spacing between tick labels.
    pub fn with_min_label_spacing(mut self, spacing: f64) -> Self {
        self.min_label_spacing = spacing;
        self
    }

    /// Sets the lower and upper auto-range margins.
    pub fn with_margins(mut self, lower: f64, upper: f64) -> Self {
        self.lower_margin = lower;
        self.upper_margin = upper;
        self
    }

    /// Enables or disables auto-ranging.
    pub fn with_auto_range(mut self, auto_range: bool) -> Self {
        self.auto_range = auto_range;
        self
    }

    /// Forces auto-ranging to include zero.
    pub fn with_auto_range_includes_zero(mut self, includes_zero: bool) -> Self {
        self.auto_range_includes_zero = includes_zero;
        self
    }

    /// Sets the length used for single-value data.
    pub fn with_default_auto_length(mut self, length: f64) -> Self {
        self.default_auto_length = length;
        self
    }

    fn auto_length(&self) -> f64 {
        if self.default_auto_length.is_finite() && self.default_auto_length > 0.0 {
            self.default_auto_length
        } else {
            1.0
        }
    }
}

/// A continuous axis mapping a [`Range`] onto pixel coordinates.
pub trait ValueAxis {
    /// The current range.
    fn range(&self) -> Range;

    /// Replaces the range and turns auto-ranging off.
    fn set_range(&mut self, range: Range) -> Result<(), AxisError>;

    /// Layout and auto-range settings.
    fn config(&self) -> &AxisConfig;

    /// Where `value` sits along the axis: `0.0` at the lower bound, `1.0` at the upper.
    fn percent(&self, value: f64) -> f64;

    /// The inverse of [`ValueAxis::percent`].
    fn value_at(&self, percent: f64) -> f64;

    /// Derives the range from data bounds when auto-ranging is on.
    fn auto_adjust_range(&mut self, data_min: f64, data_max: f64) -> Result<(), AxisError>;

    /// Tick values and labels for the pixel interval `[r0, r1]` on `edge`.
    ///
    /// The step is the smallest nice step whose labels do not overlap.
    fn ticks(
        &self,
        measurer: &dyn TextMeasurer,
        edge: Edge,
        r0: f64,
        r1: f64,
    ) -> Result<Vec<Tick>, AxisError>;

    /// Maps `value` into `[r0, r1]`.
    fn value_to_coordinate(&self, value: f64, r0: f64, r1: f64) -> f64 {
        r0 + self.percent(value) * (r1 - r0)
    }

    /// Maps a pixel coordinate back to a value.
    ///
    /// An empty pixel interval maps everything to the lower bound.
    fn coordinate_to_value(&self, coordinate: f64, r0: f64, r1: f64) -> f64 {
        let span = r1 - r0;
        if span == 0.0 {
            return self.range().lower();
        }
        self.value_at((coordinate - r0) / span)
    }

    /// Sets the bounds to the values at two percentages of the current range.
    fn set_bounds_by_percent(&mut self, p0: f64, p1: f64) -> Result<(), AxisError> {
        let lower = self.value_at(p0);
        let upper = self.value_at(p1);
        self.set_range(Range::new(lower, upper)?)
    }

    /// Zooms around `anchor_value`; `factor > 1` zooms out, `factor < 1` zooms in.
    ///
    /// The anchor keeps its position on screen.
    fn resize_range(&mut self, factor: f64, anchor_value: f64) -> Result<(), AxisError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(AxisError::InvalidZoomFactor(factor));
        }
        let a = self.percent(anchor_value);
        self.set_bounds_by_percent(a * (1.0 - factor), a + (1.0 - a) * factor)
    }

    /// Shifts the range by `percent` of its extent without changing it.
    fn pan(&mut self, percent: f64) -> Result<(), AxisError> {
        self.set_bounds_by_percent(percent, 1.0 + percent)
    }

    /// Adds the space this axis needs on `edge` of `data_area` to `space`.
    ///
    /// That is tick marks, the label gap, the largest tick label and, when
    /// configured, the axis label line.
    fn reserve_space(
        &self,
        measurer: &dyn TextMeasurer,
        data_area: Rect,
        edge: Edge,
        space: &mut AxisSpace,
    ) -> Result<(), AxisError> {
        let config = self.config();
        let (r0, r1) = pixel_interval(data_area, edge);
        let ticks = self.ticks(measurer, edge, r0, r1)?;

        let mut amount = config.tick_mark_length.max(0.0);
        if !ticks.is_empty() {
            let widest = ticks
                .iter()
                .map(|t| {
                    let m = measurer.measure(&t.label, &config.tick_label_font);
                    // Across the axis, not along it.
                    if edge.is_horizontal() {
                        m.line_height()
                    } else {
                        m.advance_width
                    }
                })
                .fold(0.0_f64, f64::max);
            amount += config.tick_label_gap.max(0.0) + widest;
        }
        if let Some(label) = &config.label {
            let m = measurer.measure(label, &config.label_font);
            amount += config.label_gap.max(0.0) + m.line_height();
        }
        trace!(%edge, amount, ticks = ticks.len(), "axis reserves space");
        space.extend(amount, edge)?;
        Ok(())
    }
}

/// The pixel interval an axis on `edge` maps onto.
///
/// Horizontal axes run left to right, vertical axes bottom to top.
pub fn pixel_interval(data_area: Rect, edge: Edge) -> (f64, f64) {
    if edge.is_horizontal() {
        (data_area.x0, data_area.x1)
    } else {
        (data_area.y1, data_area.y0)
    }
}

/// A linear value axis.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearAxis {
    range: Range,
    config: AxisConfig,
}

impl LinearAxis {
    /// Creates an axis showing `range` with default settings.
    pub fn new(range: Range) -> Self {
        Self {
            range,
            config: AxisConfig::default(),
        }
    }

    /// Replaces the settings.
    pub fn with_config(mut self, config: AxisConfig) -> Self {
        self.config = config;
        self
    }

    /// Mutable access to the settings.
    pub fn config_mut(&mut self) -> &mut AxisConfig {
        &mut self.config
    }

    /// The tick step [`ValueAxis::ticks`] would use for `[r0, r1]`.
    pub fn tick_step(
        &self,
        measurer: &dyn TextMeasurer,
        edge: Edge,
        r0: f64,
        r1: f64,
    ) -> Result<f64, AxisError> {
        let selector = select_linear_step(&self.range, &self.config, measurer, edge, r1 - r0)?;
        Ok(selector.current_tick_size())
    }
}

impl ValueAxis for LinearAxis {
    fn range(&self) -> Range {
        self.range
    }

    fn set_range(&mut self, range: Range) -> Result<(), AxisError> {
        self.range = range;
        self.config.auto_range = false;
        Ok(())
    }

    fn config(&self) -> &AxisConfig {
        &self.config
    }

    fn percent(&self, value: f64) -> f64 {
        self.range.percent(value)
    }

    fn value_at(&self, percent: f64) -> f64 {
        self.range.value(percent)
    }

    fn auto_adjust_range(&mut self, data_min: f64, data_max: f64) -> Result<(), AxisError> {
        if !self.config.auto_range {
            return Ok(());
        }
        if !data_min.is_finite() || !data_max.is_finite() {
            return Err(RangeError::NonFinite {
                lower: data_min,
                upper: data_max,
            }
            .into());
        }
        let includes_zero = self.config.auto_range_includes_zero;
        let mut lower = data_min.min(data_max);
        let mut upper = data_min.max(data_max);
        if includes_zero {
            lower = lower.min(0.0);
            upper = upper.max(0.0);
        }
        if upper <= lower {
            let half = (0.5 * self.config.auto_length()).max(lower.abs() * 1e-9);
            lower -= half;
            upper += half;
        }
        let length = upper - lower;
        // A zero bound pinned by `includes_zero` stays on the axis line.
        if !(includes_zero && lower == 0.0) {
            lower -= length * self.config.lower_margin;
        }
        if !(includes_zero && upper == 0.0) {
            upper += length * self.config.upper_margin;
        }
        self.range = Range::new(lower, upper)?;
        debug!(lower, upper, "linear axis auto-range");
        Ok(())
    }

    fn ticks(
        &self,
        measurer: &dyn TextMeasurer,
        edge: Edge,
        r0: f64,
        r1: f64,
    ) -> Result<Vec<Tick>, AxisError> {
        if r1 == r0 {
            return Ok(Vec::new());
        }
        let selector = select_linear_step(&self.range, &self.config, measurer, edge, r1 - r0)?;
        Ok(linear_ticks(&self.range, &selector))
    }
}

/// A base-10 logarithmic value axis.
///
/// Both bounds must stay positive.
#[derive(Clone, Debug, PartialEq)]
pub struct LogAxis {
    range: Range,
    config: AxisConfig,
}

impl LogAxis {
    /// Creates an axis showing `range`, which must lie above zero.
    pub fn new(range: Range) -> Result<Self, AxisError> {
        check_log_range(range)?;
        Ok(Self {
            range,
            config: AxisConfig::default(),
        })
    }

    /// Replaces the settings.
    pub fn with_config(mut self, config: AxisConfig) -> Self {
        self.config = config;
        self
    }

    /// Mutable access to the settings.
    pub fn config_mut(&mut self) -> &mut AxisConfig {
        &mut self.config
    }

    fn log_bounds(&self) -> (f64, f64) {
        (self.range.lower().log10(), self.range.upper().log10())
    }
}

fn check_log_range(range: Range) -> Result<(), AxisError> {
    if range.lower() <= 0.0 {
        return Err(AxisError::NonPositiveLog(range.lower()));
    }
    Ok(())
}

impl ValueAxis for LogAxis {
    fn range(&self) -> Range {
        self.range
    }

    fn set_range(&mut self, range: Range) -> Result<(), AxisError> {
        check_log_range(range)?;
        self.range = range;
        self.config.auto_range = false;
        Ok(())
    }

    fn config(&self) -> &AxisConfig {
        &self.config
    }

    /// Non-positive values have no logarithm and map to NaN or negative infinity.
    fn percent(&self, value: f64) -> f64 {
        let (lo, hi) = self.log_bounds();
        (value.log10() - lo) / (hi - lo)
    }

    fn value_at(&self, percent: f64) -> f64 {
        let (lo, hi) = self.log_bounds();
        10_f64.powf(lo + percent * (hi - lo))
    }

    fn auto_adjust_range(&mut self, data_min: f64, data_max: f64) -> Result<(), AxisError> {
        if !self.config.auto_range {
            return Ok(());
        }
        if !data_min.is_finite() || !data_max.is_finite() {
            return Err(RangeError::NonFinite {
                lower: data_min,
                upper: data_max,
            }
            .into());
        }
        let lower = data_min.min(data_max);
        if lower <= 0.0 {
            return Err(AxisError::NonPositiveLog(lower));
        }
        let mut lo = lower.log10();
        let mut hi = data_min.max(data_max).log10();
        if hi <= lo {
            let half = 0.5 * self.config.auto_length();
            lo -= half;
            hi += half;
        }
        let decades = hi - lo;
        lo -= decades * self.config.lower_margin;
        hi += decades * self.config.upper_margin;
        self.range = Range::new(10_f64.powf(lo), 10_f64.powf(hi))?;
        check_log_range(self.range)?;
        debug!(lower = self.range.lower(), upper = self.range.upper(), "log axis auto-range");
        Ok(())
    }

    fn ticks(
        &self,
        measurer: &dyn TextMeasurer,
        edge: Edge,
        r0: f64,
        r1: f64,
    ) -> Result<Vec<Tick>, AxisError> {
        if r1 == r0 {
            return Ok(Vec::new());
        }
        let (lo, hi) = self.log_bounds();
        if hi - lo < 1.0 {
            // Less than a decade: decade ticks would leave the axis bare.
            let selector = select_linear_step(&self.range, &self.config, measurer, edge, r1 - r0)?;
            return Ok(linear_ticks(&self.range, &selector));
        }

        let pixels = (r1 - r0).abs();
        let spacing = self.config.min_label_spacing.max(0.0);
        let fits = |step: f64| {
            let count = ((hi - lo) / step).floor() + 1.0;
            let font = &self.config.tick_label_font;
            let widest = [lo.ceil(), hi.floor()]
                .map(|e| label_extent(measurer, font, &decade_label(e), edge))
                .into_iter()
                .fold(0.0_f64, f64::max);
            count <= MAX_TICKS && count * (widest + spacing) <= pixels
        };
        let mut selector = TickSelector::default();
        while !fits(selector.current_tick_size())
            && (hi - lo) >= selector.current_tick_size()
            && selector.next()
        {
            trace!(step = selector.current_tick_size(), "decade step grows");
        }

        let step = selector.current_tick_size();
        let ticks = tick_multiples((lo / step).ceil(), (hi / step).floor())
            .map(|k| {
                let exponent = k * step;
                Tick {
                    value: 10_f64.powf(exponent),
                    label: decade_label(exponent),
                }
            })
            .collect();
        Ok(ticks)
    }
}

/// Label for `10^exponent`.
fn decade_label(exponent: f64) -> String {
    let value = 10_f64.powf(exponent);
    if (-4.0..=6.0).contains(&exponent) {
        let decimals = if exponent < 0.0 {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "exponent is integral and within -4..0"
            )]
            {
                (-exponent) as usize
            }
        } else {
            0
        };
        TickFormat::Fixed { decimals }.format(value)
    } else {
        TickFormat::Exponential.format(value)
    }
}

fn label_extent(measurer: &dyn TextMeasurer, font: &TextStyle, label: &str, edge: Edge) -> f64 {
    let m = measurer.measure(label, font);
    // Along the axis.
    if edge.is_horizontal() {
        m.advance_width
    } else {
        m.line_height()
    }
}

fn linear_tick_count(range: &Range, step: f64) -> f64 {
    (range.length() / step).floor() + 1.0
}

fn linear_labels_fit(
    range: &Range,
    config: &AxisConfig,
    measurer: &dyn TextMeasurer,
    edge: Edge,
    pixels: f64,
    selector: &TickSelector,
) -> bool {
    let step = selector.current_tick_size();
    let count = linear_tick_count(range, step);
    if count > MAX_TICKS {
        return false;
    }
    let format = selector.current_tick_format();
    let widest = [range.lower(), range.upper()]
        .map(|v| {
            let snapped = (v / step).round() * step;
            label_extent(measurer, &config.tick_label_font, &format.format(snapped), edge)
        })
        .into_iter()
        .fold(0.0_f64, f64::max);
    count * (widest + config.min_label_spacing.max(0.0)) <= pixels.abs()
}

/// Chooses the smallest nice step whose labels fit in `pixels`.
///
/// Seeds at a tenth of the range, then walks up while labels overlap or down
/// while the next smaller step still fits.
fn select_linear_step(
    range: &Range,
    config: &AxisConfig,
    measurer: &dyn TextMeasurer,
    edge: Edge,
    pixels: f64,
) -> Result<TickSelector, AxisError> {
    let mut selector = TickSelector::default();
    selector.select(range.length() / 10.0)?;
    let fits = |s: &TickSelector| linear_labels_fit(range, config, measurer, edge, pixels, s);

    if fits(&selector) {
        loop {
            let mut probe = selector;
            if !probe.previous() || !fits(&probe) {
                break;
            }
            selector = probe;
            trace!(step = selector.current_tick_size(), "tick step shrinks");
        }
    } else {
        // Once a single tick remains a larger step cannot help.
        while !fits(&selector)
            && linear_tick_count(range, selector.current_tick_size()) > 1.0
            && selector.next()
        {
            trace!(step = selector.current_tick_size(), "tick step grows");
        }
    }
    debug!(
        step = selector.current_tick_size(),
        pixels, "selected tick step"
    );
    Ok(selector)
}

fn linear_ticks(range: &Range, selector: &TickSelector) -> Vec<Tick> {
    let step = selector.current_tick_size();
    let format = selector.current_tick_format();
    let first = (range.lower() / step).ceil();
    let last = (range.upper() / step).floor();
    tick_multiples(first, last)
        .map(|k| {
            let value = k * step;
            Tick {
                value,
                label: format.format(value),
            }
        })
        .collect()
}

/// The integers `first..=last`, at most [`MAX_TICKS`] of them.
fn tick_multiples(first: f64, last: f64) -> impl Iterator<Item = f64> {
    let count = if first.is_finite() && last.is_finite() && last >= first {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "non-negative, integral and capped at MAX_TICKS"
        )]
        {
            (last - first).min(MAX_TICKS - 1.0) as usize + 1
        }
    } else {
        0
    };
    (0..count).map(move |i| first + i as f64)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::geometry::rect_xywh;
    use crate::measure::HeuristicTextMeasurer;

    fn axis(lower: f64, upper: f64) -> LinearAxis {
        LinearAxis::new(Range::new(lower, upper).unwrap())
    }

    #[test]
    fn coordinate_round_trip() {
        let a = axis(-20.0, 80.0);
        for (r0, r1) in [(0.0, 400.0), (300.0, 20.0), (10.5, 11.0)] {
            for i in 0..=8 {
                let c = r0 + (r1 - r0) * f64::from(i) / 8.0;
                let back = a.value_to_coordinate(a.coordinate_to_value(c, r0, r1), r0, r1);
                assert!((back - c).abs() < 1e-9, "{c} -> {back}");
            }
        }
        assert_eq!(a.value_to_coordinate(30.0, 0.0, 100.0), 50.0);
        assert_eq!(a.coordinate_to_value(5.0, 7.0, 7.0), -20.0);
    }

    #[test]
    fn zoom_keeps_anchor_in_place() {
        let mut a = axis(0.0, 100.0);
        a.resize_range(0.5, 50.0).unwrap();
        assert_eq!(a.range(), Range::new(25.0, 75.0).unwrap());

        let mut a = axis(0.0, 100.0);
        let before = a.percent(20.0);
        a.resize_range(2.0, 20.0).unwrap();
        assert!((a.percent(20.0) - before).abs() < 1e-12);
        assert!((a.range().length() - 200.0).abs() < 1e-9);
        assert!(!a.config().auto_range, "user zoom disables auto-range");

        assert_eq!(
            a.resize_range(0.0, 1.0),
            Err(AxisError::InvalidZoomFactor(0.0))
        );
    }

    #[test]
    fn pan_shifts_without_resizing() {
        let mut a = axis(10.0, 20.0);
        a.pan(0.25).unwrap();
        assert!((a.range().lower() - 12.5).abs() < 1e-12);
        assert!((a.range().length() - 10.0).abs() < 1e-12);
        a.pan(-0.5).unwrap();
        assert!((a.range().lower() - 7.5).abs() < 1e-12);
    }

    #[test]
    fn bounds_by_percent_uses_current_range() {
        let mut a = axis(0.0, 200.0);
        a.set_bounds_by_percent(0.25, 0.5).unwrap();
        assert_eq!(a.range(), Range::new(50.0, 100.0).unwrap());
        assert!(matches!(
            a.set_bounds_by_percent(0.6, 0.6),
            Err(AxisError::Range(RangeError::Inverted { .. }))
        ));
    }

    #[test]
    fn auto_range_applies_margins_and_zero() {
        let mut a = axis(0.0, 1.0);
        a.auto_adjust_range(10.0, 110.0).unwrap();
        assert!((a.range().lower() - 5.0).abs() < 1e-9);
        assert!((a.range().upper() - 115.0).abs() < 1e-9);

        let mut a = axis(0.0, 1.0).with_config(
            AxisConfig::default()
                .with_auto_range_includes_zero(true)
                .with_margins(0.1, 0.1),
        );
        a.auto_adjust_range(20.0, 40.0).unwrap();
        assert_eq!(a.range().lower(), 0.0);
        assert!((a.range().upper() - 44.0).abs() < 1e-9);

        let mut a = axis(0.0, 1.0).with_config(AxisConfig::default().with_margins(0.0, 0.0));
        a.auto_adjust_range(3.0, 3.0).unwrap();
        assert_eq!(a.range(), Range::new(2.5, 3.5).unwrap());

        let mut fixed = axis(0.0, 1.0);
        fixed.set_range(Range::new(-1.0, 1.0).unwrap()).unwrap();
        fixed.auto_adjust_range(100.0, 200.0).unwrap();
        assert_eq!(fixed.range(), Range::new(-1.0, 1.0).unwrap());
    }

    #[test]
    fn ticks_are_nice_and_inside_range() {
        let m = HeuristicTextMeasurer::default();
        let a = axis(0.0, 100.0);
        let ticks = a.ticks(&m, Edge::Bottom, 0.0, 500.0).unwrap();
        assert!(ticks.len() >= 2);
        let step = ticks[1].value - ticks[0].value;
        let mantissa = step / 10_f64.powf(step.log10().floor());
        assert!(
            [1.0, 2.0, 5.0].iter().any(|f| (mantissa - f).abs() < 1e-9),
            "step {step} is not 1/2/5 x 10^n"
        );
        assert!(ticks.iter().all(|t| a.range().contains(t.value)));
        assert_eq!(ticks[0].label, "0");
    }

    #[test]
    fn fewer_pixels_choose_larger_steps() {
        let m = HeuristicTextMeasurer::default();
        let a = axis(0.0, 1000.0);
        let wide = a.tick_step(&m, Edge::Bottom, 0.0, 1000.0).unwrap();
        let narrow = a.tick_step(&m, Edge::Bottom, 0.0, 100.0).unwrap();
        assert!(narrow > wide, "{narrow} <= {wide}");

        // Labels never overlap at the chosen step.
        let ticks = a.ticks(&m, Edge::Bottom, 0.0, 100.0).unwrap();
        let font = &a.config().tick_label_font;
        let widest = ticks
            .iter()
            .map(|t| m.measure(&t.label, font).advance_width)
            .fold(0.0, f64::max);
        assert!(ticks.len() as f64 * widest <= 100.0);
    }

    #[test]
    fn reserve_space_counts_marks_labels_and_title() {
        let m = HeuristicTextMeasurer::SQUARE;
        let config = AxisConfig::default()
            .with_tick_mark_length(2.0)
            .with_tick_label_gap(3.0)
            .with_tick_label_font(TextStyle::new(10.0))
            .with_label("Value");
        let a = axis(0.0, 10.0).with_config(config);
        let data = rect_xywh(0.0, 0.0, 400.0, 300.0);

        let mut space = AxisSpace::new();
        a.reserve_space(&m, data, Edge::Bottom, &mut space).unwrap();
        // 2 + 3 + 10 (label line) + 6 + 12 (title line)
        assert_eq!(space.get(Edge::Bottom), 33.0);

        let mut space = AxisSpace::new();
        a.reserve_space(&m, data, Edge::Left, &mut space).unwrap();
        let ticks = a.ticks(&m, Edge::Left, 300.0, 0.0).unwrap();
        let widest = ticks.iter().map(|t| t.label.chars().count()).max().unwrap();
        assert_eq!(space.get(Edge::Left), 2.0 + 3.0 + 10.0 * widest as f64 + 6.0 + 12.0);
    }

    #[test]
    fn log_axis_maps_decades_evenly() {
        let a = LogAxis::new(Range::new(1.0, 1000.0).unwrap()).unwrap();
        assert!((a.value_to_coordinate(10.0, 0.0, 300.0) - 100.0).abs() < 1e-9);
        let v = a.coordinate_to_value(200.0, 0.0, 300.0);
        assert!((v - 100.0).abs() < 1e-9);
        for c in [0.0, 37.0, 150.0, 300.0] {
            let back = a.value_to_coordinate(a.coordinate_to_value(c, 0.0, 300.0), 0.0, 300.0);
            assert!((back - c).abs() < 1e-9);
        }
    }

    #[test]
    fn log_axis_rejects_non_positive_bounds() {
        assert_eq!(
            LogAxis::new(Range::new(0.0, 10.0).unwrap()),
            Err(AxisError::NonPositiveLog(0.0))
        );
        let mut a = LogAxis::new(Range::new(1.0, 10.0).unwrap()).unwrap();
        assert!(a.auto_adjust_range(-1.0, 5.0).is_err());
    }

    #[test]
    fn log_axis_ticks_at_powers_of_ten() {
        let m = HeuristicTextMeasurer::default();
        let a = LogAxis::new(Range::new(1.0, 10_000.0).unwrap()).unwrap();
        let ticks = a.ticks(&m, Edge::Bottom, 0.0, 800.0).unwrap();
        let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["1", "10", "100", "1000", "10000"]);
    }

    #[test]
    fn log_zoom_is_symmetric_in_log_space() {
        let mut a = LogAxis::new(Range::new(1.0, 10_000.0).unwrap()).unwrap();
        a.resize_range(0.5, 100.0).unwrap();
        assert!((a.range().lower() - 10.0).abs() < 1e-9);
        assert!((a.range().upper() - 1000.0).abs() < 1e-6);
    }
}
