// Copyright 2025 the Chartframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Rect, Size};

use super::{ElementProps, TableElement};
use crate::geometry::{clamp_rect, rect_xywh};
use crate::measure::TextMeasurer;

/// The axis children are placed along.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FlowDirection {
    /// Left to right.
    #[default]
    Horizontal,
    /// Top to bottom.
    Vertical,
}

/// Children placed one after another along a [`FlowDirection`].
#[derive(Clone, Debug, Default)]
pub struct FlowElement {
    /// Shared element settings.
    pub props: ElementProps,
    /// Flow axis.
    pub direction: FlowDirection,
    /// Space between neighbouring children.
    pub gap: f64,
    children: Vec<TableElement>,
}

impl FlowElement {
    /// An empty flow along `direction`.
    pub fn new(direction: FlowDirection) -> Self {
        Self {
            direction,
            ..Self::default()
        }
    }

    /// Sets the gap between children.
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Appends a child.
    pub fn push(&mut self, element: impl Into<TableElement>) -> &mut Self {
        self.children.push(element.into());
        self
    }

    /// Builder form of [`FlowElement::push`].
    pub fn with(mut self, element: impl Into<TableElement>) -> Self {
        self.push(element);
        self
    }

    /// Children in flow order.
    pub fn children(&self) -> &[TableElement] {
        &self.children
    }

    fn gap(&self) -> f64 {
        if self.gap.is_finite() {
            self.gap.max(0.0)
        } else {
            0.0
        }
    }

    /// `(along, across)` for `size`.
    fn split(&self, size: Size) -> (f64, f64) {
        match self.direction {
            FlowDirection::Horizontal => (size.width, size.height),
            FlowDirection::Vertical => (size.height, size.width),
        }
    }

    fn join(&self, along: f64, across: f64) -> Size {
        match self.direction {
            FlowDirection::Horizontal => Size::new(along, across),
            FlowDirection::Vertical => Size::new(across, along),
        }
    }

    pub(super) fn content_size(&self, measurer: &dyn TextMeasurer, available: Size) -> Size {
        let bounds = rect_xywh(0.0, 0.0, available.width, available.height);
        let mut along = 0.0;
        let mut across = 0.0_f64;
        for (i, child) in self.children.iter().enumerate() {
            let (a, c) = self.split(child.preferred_size(measurer, bounds));
            if i > 0 {
                along += self.gap();
            }
            along += a;
            across = across.max(c);
        }
        self.join(along, across)
    }

    pub(super) fn layout_children(&self, measurer: &dyn TextMeasurer, content: Rect) -> Vec<Rect> {
        let (total_along, total_across) = self.split(content.size());
        let mut cursor = 0.0;
        self.children
            .iter()
            .map(|child| {
                let remaining = self.join((total_along - cursor).max(0.0), total_across);
                let origin = content.origin() + self.join(cursor, 0.0).to_vec2();
                let available = Rect::from_origin_size(origin, remaining);
                let (along, _) = self.split(child.preferred_size(measurer, available));
                let cell = Rect::from_origin_size(origin, self.join(along, total_across));
                cursor += along + self.gap();
                clamp_rect(cell, content)
            })
            .collect()
    }
}
