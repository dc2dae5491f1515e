// Copyright 2025 the Chartframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Data-area negotiation between a plot and its axes.
//!
//! Axes need to know the data area to pick tick labels, and the data area is
//! whatever the axes leave over. [`DataAreaLayout::arrange`] resolves this by
//! iterating: estimate the data area, let every axis reserve space against the
//! estimate, shrink the plot bounds by the total, and repeat until two
//! estimates agree.
//!
//! Fixed reservations (a title, an outside legend) are added before the axes
//! and stay outermost.

use alloc::vec::Vec;

use kurbo::Rect;

use crate::axis::{AxisError, ValueAxis};
use crate::axis_space::{AxisSpace, AxisSpaceError, Edge};
use crate::log::{debug, trace};
use crate::measure::TextMeasurer;

/// An axis and the edge of the data area it is attached to.
#[derive(Clone, Copy)]
pub struct AxisPlacement<'a> {
    /// The axis.
    pub axis: &'a dyn ValueAxis,
    /// Which side of the data area it sits on.
    pub edge: Edge,
}

impl<'a> AxisPlacement<'a> {
    /// Attaches `axis` to `edge`.
    pub fn new(axis: &'a dyn ValueAxis, edge: Edge) -> Self {
        Self { axis, edge }
    }
}

impl core::fmt::Debug for AxisPlacement<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AxisPlacement")
            .field("range", &self.axis.range())
            .field("edge", &self.edge)
            .finish_non_exhaustive()
    }
}

/// Settings for the data-area fixed point iteration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataAreaLayout {
    /// Upper bound on estimate/reserve rounds.
    pub max_iterations: usize,
    /// Largest per-edge change, in pixels, still counted as agreement.
    pub tolerance: f64,
    /// Space reserved before any axis is asked.
    pub fixed: AxisSpace,
}

impl Default for DataAreaLayout {
    fn default() -> Self {
        Self {
            max_iterations: 8,
            tolerance: 0.5,
            fixed: AxisSpace::new(),
        }
    }
}

impl DataAreaLayout {
    /// Default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the iteration limit; at least one round always runs.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the convergence tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Replaces the fixed reservations.
    pub fn with_fixed(mut self, fixed: AxisSpace) -> Self {
        self.fixed = fixed;
        self
    }

    /// Adds a fixed reservation of `amount` pixels on `edge`.
    pub fn reserve(mut self, amount: f64, edge: Edge) -> Result<Self, AxisSpaceError> {
        self.fixed.extend(amount, edge)?;
        Ok(self)
    }

    /// Negotiates the data area inside `bounds` for `axes`.
    ///
    /// Axes sharing an edge stack outward from the data area in slice order.
    /// Returns the last estimate when the iteration limit is hit first.
    pub fn arrange(
        &self,
        measurer: &dyn TextMeasurer,
        bounds: Rect,
        axes: &[AxisPlacement<'_>],
    ) -> Result<DataArea, AxisError> {
        let bounds = bounds.abs();
        let tolerance = if self.tolerance.is_finite() {
            self.tolerance.max(0.0)
        } else {
            0.0
        };
        let max_iterations = self.max_iterations.max(1);

        let mut data = self.fixed.inner_rect(bounds);
        let mut space = self.fixed;
        let mut amounts = Vec::with_capacity(axes.len());
        let mut iterations = 0;
        let mut converged = false;

        while iterations < max_iterations {
            iterations += 1;
            let mut next_space = self.fixed;
            amounts.clear();
            for placement in axes {
                let mut own = AxisSpace::new();
                placement
                    .axis
                    .reserve_space(measurer, data, placement.edge, &mut own)?;
                amounts.push(own.get(placement.edge));
                next_space.add(&own);
            }
            let next = next_space.inner_rect(bounds);
            let delta = max_edge_delta(data, next);
            trace!(iterations, delta, "data area estimate");
            data = next;
            space = next_space;
            if delta <= tolerance {
                converged = true;
                break;
            }
        }
        debug!(iterations, converged, "data area negotiated");

        let axis_bands = axis_bands(data, axes, &amounts);
        Ok(DataArea {
            bounds,
            data,
            space,
            axis_bands,
            iterations,
            converged,
        })
    }
}

fn max_edge_delta(a: Rect, b: Rect) -> f64 {
    (a.x0 - b.x0)
        .abs()
        .max((a.y0 - b.y0).abs())
        .max((a.x1 - b.x1).abs())
        .max((a.y1 - b.y1).abs())
}

fn axis_bands(data: Rect, axes: &[AxisPlacement<'_>], amounts: &[f64]) -> Vec<Rect> {
    // Space already stacked on each edge, indexed by `Edge as usize`.
    let mut used = [0.0_f64; 4];
    axes.iter()
        .zip(amounts)
        .map(|(placement, &amount)| {
            let edge = placement.edge;
            let slot = &mut used[edge as usize];
            let start = *slot;
            let end = start + amount;
            *slot = end;
            match edge {
                Edge::Top => Rect::new(data.x0, data.y0 - end, data.x1, data.y0 - start),
                Edge::Bottom => Rect::new(data.x0, data.y1 + start, data.x1, data.y1 + end),
                Edge::Left => Rect::new(data.x0 - end, data.y0, data.x0 - start, data.y1),
                Edge::Right => Rect::new(data.x1 + start, data.y0, data.x1 + end, data.y1),
            }
        })
        .collect()
}

/// Output of [`DataAreaLayout::arrange`].
#[derive(Clone, Debug, PartialEq)]
pub struct DataArea {
    /// The plot bounds the data area was carved from.
    pub bounds: Rect,
    /// The negotiated data area.
    pub data: Rect,
    /// Total reserved space; `data == space.inner_rect(bounds)`.
    pub space: AxisSpace,
    /// The band each axis occupies, in placement order.
    pub axis_bands: Vec<Rect>,
    /// Rounds run.
    pub iterations: usize,
    /// Whether the last two estimates agreed within the tolerance.
    pub converged: bool,
}

impl DataArea {
    /// The whole strip between the data area and the bounds on `edge`.
    pub fn edge_band(&self, edge: Edge) -> Rect {
        let (b, d) = (self.bounds, self.data);
        match edge {
            Edge::Top => Rect::new(d.x0, b.y0, d.x1, d.y0),
            Edge::Bottom => Rect::new(d.x0, d.y1, d.x1, b.y1),
            Edge::Left => Rect::new(b.x0, d.y0, d.x0, d.y1),
            Edge::Right => Rect::new(d.x1, d.y0, b.x1, d.y1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::{AxisConfig, LinearAxis};
    use crate::geometry::rect_xywh;
    use crate::measure::HeuristicTextMeasurer;
    use crate::range::Range;

    fn linear(lower: f64, upper: f64) -> LinearAxis {
        LinearAxis::new(Range::new(lower, upper).unwrap())
    }

    #[test]
    fn left_and_bottom_axes_converge() {
        let m = HeuristicTextMeasurer::default();
        let x = linear(0.0, 100.0);
        let y = linear(-5_000.0, 5_000.0);
        let bounds = rect_xywh(0.0, 0.0, 640.0, 480.0);
        let area = DataAreaLayout::new()
            .arrange(
                &m,
                bounds,
                &[
                    AxisPlacement::new(&x, Edge::Bottom),
                    AxisPlacement::new(&y, Edge::Left),
                ],
            )
            .unwrap();
        assert!(area.converged, "took {} rounds", area.iterations);
        assert_eq!(area.data, area.space.inner_rect(bounds));
        assert!(area.space.get(Edge::Left) > 0.0);
        assert!(area.space.get(Edge::Bottom) > 0.0);
        assert_eq!(area.space.get(Edge::Top), 0.0);
        assert_eq!(area.data.y0, 0.0);
        assert_eq!(area.data.x1, 640.0);
    }

    #[test]
    fn fixed_reservations_stay_outermost() {
        let m = HeuristicTextMeasurer::SQUARE;
        let x = linear(0.0, 10.0).with_config(AxisConfig::default().with_label("x"));
        let bounds = rect_xywh(0.0, 0.0, 400.0, 300.0);
        let area = DataAreaLayout::new()
            .reserve(20.0, Edge::Bottom)
            .unwrap()
            .arrange(&m, bounds, &[AxisPlacement::new(&x, Edge::Bottom)])
            .unwrap();
        let band = area.axis_bands[0];
        assert_eq!(band.y0, area.data.y1);
        assert!((band.y1 - (300.0 - 20.0)).abs() < 1e-9);
        assert_eq!(area.edge_band(Edge::Bottom).y1, 300.0);
    }

    #[test]
    fn axes_on_one_edge_stack_outward() {
        let m = HeuristicTextMeasurer::default();
        let inner = linear(0.0, 1.0);
        let outer = linear(0.0, 1_000_000.0);
        let area = DataAreaLayout::new()
            .arrange(
                &m,
                rect_xywh(0.0, 0.0, 500.0, 400.0),
                &[
                    AxisPlacement::new(&inner, Edge::Left),
                    AxisPlacement::new(&outer, Edge::Left),
                ],
            )
            .unwrap();
        let (a, b) = (area.axis_bands[0], area.axis_bands[1]);
        assert_eq!(a.x1, area.data.x0);
        assert!((b.x1 - a.x0).abs() < 1e-9);
        assert!((b.x0 - 0.0).abs() < 1e-9);
    }

    #[test]
    fn bands_stack_per_edge_independently() {
        let m = HeuristicTextMeasurer::default();
        let x = linear(0.0, 10.0);
        let y = linear(0.0, 10.0);
        let y2 = linear(0.0, 10.0);
        let area = DataAreaLayout::new()
            .arrange(
                &m,
                rect_xywh(0.0, 0.0, 500.0, 400.0),
                &[
                    AxisPlacement::new(&y, Edge::Left),
                    AxisPlacement::new(&x, Edge::Bottom),
                    AxisPlacement::new(&y2, Edge::Left),
                ],
            )
            .unwrap();
        let [left, bottom, outer_left] = area.axis_bands[..] else {
            panic!("expected three bands");
        };
        assert_eq!(bottom.y0, area.data.y1);
        assert!((bottom.y1 - 400.0).abs() < 1e-9);
        assert_eq!(left.x1, area.data.x0);
        assert!((outer_left.x1 - left.x0).abs() < 1e-9);
        assert!(outer_left.x0.abs() < 1e-9);
    }

    #[test]
    fn iteration_limit_is_respected() {
        let m = HeuristicTextMeasurer::default();
        let x = linear(0.0, 100.0);
        let area = DataAreaLayout::new()
            .with_max_iterations(0)
            .with_tolerance(-1.0)
            .arrange(
                &m,
                rect_xywh(0.0, 0.0, 300.0, 200.0),
                &[AxisPlacement::new(&x, Edge::Bottom)],
            )
            .unwrap();
        assert_eq!(area.iterations, 1);
    }

    #[test]
    fn tiny_bounds_clamp_instead_of_failing() {
        let m = HeuristicTextMeasurer::default();
        let y = linear(0.0, 1.0).with_config(AxisConfig::default().with_label("Label"));
        let area = DataAreaLayout::new()
            .arrange(
                &m,
                rect_xywh(0.0, 0.0, 10.0, 10.0),
                &[AxisPlacement::new(&y, Edge::Left)],
            )
            .unwrap();
        assert!(area.data.width() >= 0.0);
        assert!(area.data.height() >= 0.0);
    }
}
