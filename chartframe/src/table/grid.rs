// Copyright 2025 the Chartframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::{Rect, Size};
use smallvec::SmallVec;

use super::{ElementProps, TableElement};
use crate::geometry::{clamp_rect, rect_xywh};
use crate::measure::TextMeasurer;

type Tracks = SmallVec<[f64; 8]>;

/// Children placed at named row and column keys.
///
/// Rows and columns are ordered by the first insertion of their key. Each
/// column is as wide as its widest cell, each row as tall as its tallest.
#[derive(Clone, Debug, Default)]
pub struct GridElement {
    /// Shared element settings.
    pub props: ElementProps,
    rows: Vec<String>,
    columns: Vec<String>,
    row_index: HashMap<String, usize>,
    column_index: HashMap<String, usize>,
    cells: HashMap<(usize, usize), usize>,
    positions: Vec<(usize, usize)>,
    children: Vec<TableElement>,
}

impl GridElement {
    /// An empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts `element` at (`row`, `column`), replacing any existing child there.
    pub fn add(
        &mut self,
        row: impl Into<String>,
        column: impl Into<String>,
        element: impl Into<TableElement>,
    ) -> &mut Self {
        let r = key_index(&mut self.rows, &mut self.row_index, row.into());
        let c = key_index(&mut self.columns, &mut self.column_index, column.into());
        let element = element.into();
        match self.cells.get(&(r, c)) {
            Some(&i) => self.children[i] = element,
            None => {
                self.cells.insert((r, c), self.children.len());
                self.positions.push((r, c));
                self.children.push(element);
            }
        }
        self
    }

    /// Builder form of [`GridElement::add`].
    pub fn with(
        mut self,
        row: impl Into<String>,
        column: impl Into<String>,
        element: impl Into<TableElement>,
    ) -> Self {
        self.add(row, column, element);
        self
    }

    /// The child at (`row`, `column`).
    pub fn get(&self, row: &str, column: &str) -> Option<&TableElement> {
        let r = self.row_index.get(row)?;
        let c = self.column_index.get(column)?;
        self.cells.get(&(*r, *c)).map(|&i| &self.children[i])
    }

    /// Row keys in display order.
    pub fn row_keys(&self) -> &[String] {
        &self.rows
    }

    /// Column keys in display order.
    pub fn column_keys(&self) -> &[String] {
        &self.columns
    }

    /// Children in insertion order.
    pub fn children(&self) -> &[TableElement] {
        &self.children
    }

    /// The number of occupied cells.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether no cell is occupied.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    fn tracks(&self, measurer: &dyn TextMeasurer, available: Size) -> (Tracks, Tracks) {
        let mut widths: Tracks = SmallVec::from_elem(0.0, self.columns.len());
        let mut heights: Tracks = SmallVec::from_elem(0.0, self.rows.len());
        let bounds = rect_xywh(0.0, 0.0, available.width, available.height);
        for (child, &(r, c)) in self.children.iter().zip(&self.positions) {
            let size = child.preferred_size(measurer, bounds);
            widths[c] = widths[c].max(size.width);
            heights[r] = heights[r].max(size.height);
        }
        (widths, heights)
    }

    pub(super) fn content_size(&self, measurer: &dyn TextMeasurer, available: Size) -> Size {
        let (widths, heights) = self.tracks(measurer, available);
        Size::new(widths.iter().sum(), heights.iter().sum())
    }

    pub(super) fn layout_children(&self, measurer: &dyn TextMeasurer, content: Rect) -> Vec<Rect> {
        let (widths, heights) = self.tracks(measurer, content.size());
        let xs = offsets(content.x0, &widths);
        let ys = offsets(content.y0, &heights);
        self.positions
            .iter()
            .map(|&(r, c)| {
                let cell = Rect::new(xs[c], ys[r], xs[c] + widths[c], ys[r] + heights[r]);
                clamp_rect(cell, content)
            })
            .collect()
    }
}

fn key_index(keys: &mut Vec<String>, index: &mut HashMap<String, usize>, key: String) -> usize {
    if let Some(&i) = index.get(&key) {
        return i;
    }
    let i = keys.len();
    keys.push(key.clone());
    index.insert(key, i);
    i
}

fn offsets(start: f64, tracks: &[f64]) -> Tracks {
    let mut at = start;
    tracks
        .iter()
        .map(|t| {
            let here = at;
            at += t;
            here
        })
        .collect()
}
