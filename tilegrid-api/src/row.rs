//! Rows - ordered runs of rectangles sharing one horizontal band.

use serde::Serialize;

use crate::Rectangle;

/// An ordered sequence of rectangles, in blueprint order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Row {
    rects: Vec<Rectangle>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, rect: Rectangle) {
        self.rects.push(rect);
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Rectangle> {
        self.rects.get(index)
    }

    pub fn first(&self) -> Option<&Rectangle> {
        self.rects.first()
    }

    pub fn last(&self) -> Option<&Rectangle> {
        self.rects.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rectangle> {
        self.rects.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Rectangle> {
        self.rects.iter_mut()
    }

    pub fn as_slice(&self) -> &[Rectangle] {
        &self.rects
    }

    /// Sum of member widths.
    pub fn total_width(&self) -> u64 {
        self.rects.iter().map(|r| u64::from(r.w())).sum()
    }

    /// Total width if a rectangle of width `more` were appended.
    pub fn width_with(&self, more: u32) -> u64 {
        self.total_width() + u64::from(more)
    }

    /// Height of the first member, or 0 for an empty row.
    pub fn first_height(&self) -> u32 {
        self.rects.first().map_or(0, Rectangle::h)
    }

    /// Height of the tallest member, or 0 for an empty row.
    pub fn tallest(&self) -> u32 {
        self.rects.iter().map(Rectangle::h).max().unwrap_or(0)
    }

    pub fn has_elastic_width(&self) -> bool {
        self.rects.iter().any(Rectangle::is_elastic_w)
    }

    pub fn has_elastic_height(&self) -> bool {
        self.rects.iter().any(Rectangle::is_elastic_h)
    }

    /// Serializable view of this row for diagnostic sinks.
    pub fn snapshot(&self, index: usize) -> RowSnapshot<'_> {
        RowSnapshot {
            row: index,
            width: self.total_width(),
            height: self.tallest(),
            rectangles: &self.rects,
        }
    }
}

impl FromIterator<Rectangle> for Row {
    fn from_iter<I: IntoIterator<Item = Rectangle>>(iter: I) -> Self {
        Self {
            rects: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = &'a Rectangle;
    type IntoIter = std::slice::Iter<'a, Rectangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.rects.iter()
    }
}

/// A borrowed, serializable picture of one row.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RowSnapshot<'a> {
    /// Position of the row in the grid.
    pub row: usize,
    pub width: u64,
    /// Tallest member's height.
    pub height: u32,
    pub rectangles: &'a [Rectangle],
}
