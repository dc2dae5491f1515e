// Copyright 2025 the Chartframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The geometric layout and coordinate-mapping engine for charts.
//!
//! This crate sits between a chart's data and whatever draws it:
//! - **Axes** map data values to pixel coordinates and back, zoom and pan,
//!   and pick "nice" tick steps whose labels do not overlap.
//! - **Space negotiation** lets axes and legends reserve pixels on each edge
//!   of the plot until the data area settles.
//! - **Anchored fitting** places rectangles relative to one of nine
//!   reference points, optionally stretching them.
//! - **Table layout** is a small two-pass layout tree (preferred size, then
//!   layout) used to build legends and other chart furniture.
//!
//! Text measurement and drawing are supplied by the caller through
//! [`TextMeasurer`] and [`Graphics`]; nothing here renders, shapes text or
//! touches a dataset.
//!
//! A typical flow:
//!
//! ```
//! use chartframe::{
//!     AxisPlacement, DataAreaLayout, Edge, HeuristicTextMeasurer, LinearAxis, Range, ValueAxis,
//!     rect_xywh,
//! };
//!
//! let measurer = HeuristicTextMeasurer::default();
//! let x = LinearAxis::new(Range::new(0.0, 100.0)?);
//! let y = LinearAxis::new(Range::new(-1.0, 1.0)?);
//! let bounds = rect_xywh(0.0, 0.0, 640.0, 480.0);
//!
//! let area = DataAreaLayout::new().arrange(
//!     &measurer,
//!     bounds,
//!     &[AxisPlacement::new(&x, Edge::Bottom), AxisPlacement::new(&y, Edge::Left)],
//! )?;
//! let px = x.value_to_coordinate(50.0, area.data.x0, area.data.x1);
//! assert!(px > area.data.x0 && px < area.data.x1);
//! # Ok::<(), chartframe::AxisError>(())
//! ```

#![no_std]

extern crate alloc;

mod anchor;
mod axis;
mod axis_space;
#[cfg(not(feature = "std"))]
mod float;
mod geometry;
mod graphics;
mod legend;
mod log;
mod measure;
mod plot_layout;
mod range;
pub mod table;
mod tick;

pub use anchor::{Anchor, Fit, RefPoint, RefPointError, ScaleMode};
pub use axis::{AxisConfig, AxisError, LinearAxis, LogAxis, Tick, ValueAxis, pixel_interval};
pub use axis_space::{AxisSpace, AxisSpaceError, Edge};
pub use geometry::{Insets, InsetsError, rect_xywh};
pub use graphics::{DrawOp, Graphics, RecordingGraphics};
pub use legend::{LegendItem, LegendLayout, LegendShape, LegendSpec};
pub use measure::{
    FontFamily, FontStyle, FontWeight, HeuristicTextMeasurer, TextMeasurer, TextMetrics,
    TextStyle, text_dim,
};
pub use plot_layout::{AxisPlacement, DataArea, DataAreaLayout};
pub use range::{Range, RangeError};
pub use table::{TableElement, TableElementVisitor};
pub use tick::{MAX_POWER, MIN_POWER, TickFactor, TickFormat, TickSelector, TickSelectorError};
