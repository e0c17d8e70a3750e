//! Rectangles - blueprints after placement.
//!
//! A rectangle starts at its blueprint's minimum size with no position.
//! The layout stages may only grow it and place it; nothing shrinks it.

use serde::Serialize;
use std::fmt;

use crate::{Blueprint, GroupId};

/// Absolute geometry of a placed rectangle.
///
/// `y` is wider than the sizes: stacked row heights are unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub x: u32,
    pub y: u64,
    pub w: u32,
    pub h: u32,
}

impl Bounds {
    /// Exclusive right edge.
    #[inline]
    pub fn right(&self) -> u64 {
        u64::from(self.x) + u64::from(self.w)
    }

    /// Exclusive bottom edge.
    #[inline]
    pub fn bottom(&self) -> u64 {
        self.y + u64::from(self.h)
    }

    /// Whether the half-open X intervals `[x, x+w)` intersect.
    #[inline]
    pub fn overlaps_x(&self, other: &Bounds) -> bool {
        !(self.right() <= u64::from(other.x) || other.right() <= u64::from(self.x))
    }

    /// Whether the half-open Y intervals `[y, y+h)` intersect.
    #[inline]
    pub fn overlaps_y(&self, other: &Bounds) -> bool {
        !(self.bottom() <= other.y || other.bottom() <= self.y)
    }

    /// Overlap on both axes.
    #[inline]
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.overlaps_x(other) && self.overlaps_y(other)
    }
}

/// A rectangle derived from a blueprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rectangle {
    /// Position of the source blueprint in the input sequence.
    ordinal: usize,
    x: Option<u32>,
    y: Option<u64>,
    w: u32,
    h: u32,
    elastic_w: bool,
    elastic_h: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    uuid: Option<String>,
    group_id: GroupId,
}

impl Rectangle {
    /// Map a blueprint to an unplaced rectangle at its minimum size.
    pub fn from_blueprint(ordinal: usize, blueprint: Blueprint) -> Self {
        Self {
            ordinal,
            x: None,
            y: None,
            w: blueprint.min_w,
            h: blueprint.min_h,
            elastic_w: blueprint.elastic_w,
            elastic_h: blueprint.elastic_h,
            uuid: blueprint.uuid,
            group_id: blueprint.group_id,
        }
    }

    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    pub fn x(&self) -> Option<u32> {
        self.x
    }

    pub fn y(&self) -> Option<u64> {
        self.y
    }

    pub fn w(&self) -> u32 {
        self.w
    }

    pub fn h(&self) -> u32 {
        self.h
    }

    pub fn is_elastic_w(&self) -> bool {
        self.elastic_w
    }

    pub fn is_elastic_h(&self) -> bool {
        self.elastic_h
    }

    pub fn uuid(&self) -> Option<&str> {
        self.uuid.as_deref()
    }

    pub fn group_id(&self) -> GroupId {
        self.group_id
    }

    /// Whether coordinates have been assigned.
    pub fn is_placed(&self) -> bool {
        self.x.is_some() && self.y.is_some()
    }

    /// Geometry, once placed.
    pub fn bounds(&self) -> Option<Bounds> {
        Some(Bounds {
            x: self.x?,
            y: self.y?,
            w: self.w,
            h: self.h,
        })
    }

    /// Widen by `by` units.
    pub fn grow_w(&mut self, by: u32) {
        self.w += by;
    }

    /// Raise the height to `h`. Lower values are ignored.
    pub fn grow_h_to(&mut self, h: u32) {
        self.h = self.h.max(h);
    }

    /// Assign absolute coordinates.
    pub fn place(&mut self, x: u32, y: u64) {
        self.x = Some(x);
        self.y = Some(y);
    }

    /// Overlap test between two placed rectangles.
    ///
    /// Unplaced rectangles never overlap anything.
    pub fn overlaps(&self, other: &Rectangle) -> bool {
        match (self.bounds(), other.bounds()) {
            (Some(a), Some(b)) => a.overlaps(&b),
            _ => false,
        }
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.uuid {
            Some(uuid) => write!(f, "rectangle '{}'", uuid)?,
            None => write!(f, "rectangle #{}", self.ordinal)?,
        }
        write!(f, " {}x{}", self.w, self.h)?;
        if let (Some(x), Some(y)) = (self.x, self.y) {
            write!(f, " @ ({}, {})", x, y)?;
        }
        Ok(())
    }
}
