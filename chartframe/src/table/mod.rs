// Copyright 2025 the Chartframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small layout tree for legends and other chart furniture.
//!
//! Layout runs in two passes over [`TableElement`]:
//! - **Preferred size**: what the element wants, never more than the bounds
//!   it is offered.
//! - **Layout**: final rectangles for the element and, for containers, each
//!   child.
//!
//! [`TableElement::draw`] repeats the layout against the same bounds and only
//! then talks to [`Graphics`]. Nothing here fails: content that does not fit
//! is clamped, so children may end up with zero-size rectangles but are
//! never dropped.
//!
//! Every element has [`ElementProps`]: insets between its rectangle and its
//! content, a [`RefPoint`] placing its preferred size inside the offered
//! bounds, and an optional background painter.

use alloc::sync::Arc;
use alloc::vec::Vec;

use kurbo::{Rect, Size};

use crate::anchor::{Fit, RefPoint};
use crate::geometry::{Insets, clamp_size};
use crate::graphics::Graphics;
use crate::log::trace;
use crate::measure::TextMeasurer;

mod flow;
mod grid;
mod painter;
mod rectangle;
mod shape;
mod text;

pub use flow::{FlowDirection, FlowElement};
pub use grid::GridElement;
pub use painter::{RectanglePainter, StandardRectanglePainter, StrokeStyle};
pub use rectangle::RectangleElement;
pub use shape::ShapeElement;
pub use text::{HorizontalAlign, TextElement};

/// Settings shared by every element kind.
#[derive(Clone)]
pub struct ElementProps {
    /// Space between the element's rectangle and its content.
    pub insets: Insets,
    /// Where the preferred size sits inside the offered bounds.
    pub ref_point: RefPoint,
    /// Painted over the element's rectangle before its content.
    pub background: Option<Arc<dyn RectanglePainter>>,
}

impl Default for ElementProps {
    fn default() -> Self {
        Self {
            insets: Insets::ZERO,
            ref_point: RefPoint::Center,
            background: None,
        }
    }
}

impl core::fmt::Debug for ElementProps {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ElementProps")
            .field("insets", &self.insets)
            .field("ref_point", &self.ref_point)
            .field("background", &self.background.is_some())
            .finish()
    }
}

/// A node of the layout tree.
#[derive(Clone, Debug)]
pub enum TableElement {
    /// A text leaf.
    Text(TextElement),
    /// A filled rectangle leaf.
    Rectangle(RectangleElement),
    /// An arbitrary shape leaf.
    Shape(ShapeElement),
    /// Children at row/column keys.
    Grid(GridElement),
    /// Children in sequence.
    Flow(FlowElement),
}

macro_rules! impl_from_kind {
    ($($kind:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for TableElement {
                fn from(value: $ty) -> Self {
                    Self::$kind(value)
                }
            }
        )*
    };
}

impl_from_kind!(
    Text(TextElement),
    Rectangle(RectangleElement),
    Shape(ShapeElement),
    Grid(GridElement),
    Flow(FlowElement),
);

/// Receives elements during [`TableElement::receive`] and [`TableElement::walk`].
pub trait TableElementVisitor {
    /// Called once per visited element.
    fn visit(&mut self, element: &TableElement);
}

impl<F: FnMut(&TableElement)> TableElementVisitor for F {
    fn visit(&mut self, element: &TableElement) {
        self(element);
    }
}

impl TableElement {
    /// Shared settings.
    pub fn props(&self) -> &ElementProps {
        match self {
            Self::Text(e) => &e.props,
            Self::Rectangle(e) => &e.props,
            Self::Shape(e) => &e.props,
            Self::Grid(e) => &e.props,
            Self::Flow(e) => &e.props,
        }
    }

    /// Mutable shared settings.
    pub fn props_mut(&mut self) -> &mut ElementProps {
        match self {
            Self::Text(e) => &mut e.props,
            Self::Rectangle(e) => &mut e.props,
            Self::Shape(e) => &mut e.props,
            Self::Grid(e) => &mut e.props,
            Self::Flow(e) => &mut e.props,
        }
    }

    /// Sets the insets.
    pub fn with_insets(mut self, insets: Insets) -> Self {
        self.props_mut().insets = insets;
        self
    }

    /// Sets the reference point.
    pub fn with_ref_point(mut self, ref_point: RefPoint) -> Self {
        self.props_mut().ref_point = ref_point;
        self
    }

    /// Sets the background painter.
    pub fn with_background(mut self, painter: impl RectanglePainter + 'static) -> Self {
        self.props_mut().background = Some(Arc::new(painter));
        self
    }

    /// Direct children; empty for leaves.
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Grid(g) => g.children(),
            Self::Flow(f) => f.children(),
            Self::Text(_) | Self::Rectangle(_) | Self::Shape(_) => &[],
        }
    }

    /// Whether this kind holds children.
    pub fn is_container(&self) -> bool {
        matches!(self, Self::Grid(_) | Self::Flow(_))
    }

    /// The size this element wants inside `bounds`, including insets.
    ///
    /// Never exceeds `bounds` in either dimension.
    pub fn preferred_size(&self, measurer: &dyn TextMeasurer, bounds: Rect) -> Size {
        let bounds = bounds.abs();
        let insets = self.props().insets;
        let available = insets.shrink(bounds).size();
        let content = match self {
            Self::Text(e) => e.content_size(measurer),
            Self::Rectangle(e) => e.content_size(),
            Self::Shape(e) => e.content_size(),
            Self::Grid(e) => e.content_size(measurer, available),
            Self::Flow(e) => e.content_size(measurer, available),
        };
        let wanted = insets.grow(content);
        let size = clamp_size(wanted, bounds.size());
        if size != wanted {
            trace!(
                wanted_width = wanted.width,
                wanted_height = wanted.height,
                width = size.width,
                height = size.height,
                "table element clamped"
            );
        }
        size
    }

    /// This element's rectangle: its preferred size placed in `bounds` at its
    /// reference point.
    pub fn own_rect(&self, measurer: &dyn TextMeasurer, bounds: Rect) -> Rect {
        let size = self.preferred_size(measurer, bounds);
        Fit::no_scaling(self.props().ref_point).fit(size, bounds)
    }

    /// Final rectangles: this element's own first, then one per child in
    /// [`TableElement::children`] order.
    pub fn layout_elements(&self, measurer: &dyn TextMeasurer, bounds: Rect) -> Vec<Rect> {
        let own = self.own_rect(measurer, bounds);
        let mut out = Vec::with_capacity(1 + self.children().len());
        out.push(own);
        out.extend(self.layout_children(measurer, own));
        out
    }

    fn layout_children(&self, measurer: &dyn TextMeasurer, own: Rect) -> Vec<Rect> {
        let content = self.props().insets.shrink(own);
        match self {
            Self::Grid(g) => g.layout_children(measurer, content),
            Self::Flow(f) => f.layout_children(measurer, content),
            Self::Text(_) | Self::Rectangle(_) | Self::Shape(_) => Vec::new(),
        }
    }

    /// Paints the background, then the content, recursing into children.
    pub fn draw(&self, graphics: &mut dyn Graphics, bounds: Rect) {
        let (own, child_rects) = {
            let measurer: &dyn TextMeasurer = &*graphics;
            let own = self.own_rect(measurer, bounds);
            (own, self.layout_children(measurer, own))
        };
        if let Some(background) = &self.props().background {
            background.paint(graphics, own);
        }
        let content = self.props().insets.shrink(own);
        match self {
            Self::Text(e) => e.draw_content(graphics, content),
            Self::Rectangle(e) => e.draw_content(graphics, content),
            Self::Shape(e) => e.draw_content(graphics, content),
            Self::Grid(_) | Self::Flow(_) => {
                for (child, rect) in self.children().iter().zip(child_rects) {
                    child.draw(graphics, rect);
                }
            }
        }
    }

    /// Hands this element to `visitor`.
    pub fn receive(&self, visitor: &mut dyn TableElementVisitor) {
        visitor.visit(self);
    }

    /// Visits this element and then its descendants, depth first.
    pub fn walk(&self, visitor: &mut dyn TableElementVisitor) {
        self.receive(visitor);
        for child in self.children() {
            child.walk(visitor);
        }
    }
}
