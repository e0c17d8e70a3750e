//! Identifier index over placed rectangles.
//!
//! The index stores stable (row, column) slots rather than copies, so a
//! lookup always sees the grid's current rectangle.

use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::Serialize;
use tilegrid_api::{Rectangle, Row};

use crate::error::LayoutError;

/// Position of a rectangle within the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Slot {
    pub row: usize,
    pub column: usize,
}

/// Identifier to slot mapping, in placement order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Index {
    slots: IndexMap<String, Slot>,
}

impl Index {
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<Slot> {
        self.slots.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.slots.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Slot)> {
        self.slots.iter().map(|(id, slot)| (id.as_str(), *slot))
    }

    /// Resolve an identifier against the rows it was built from.
    pub fn resolve<'a>(&self, rows: &'a [Row], id: &str) -> Option<&'a Rectangle> {
        let slot = self.get(id)?;
        rows.get(slot.row)?.get(slot.column)
    }
}

/// Index every rectangle that declares an identifier.
///
/// Rectangles without one are left out. Two rectangles sharing an identifier
/// is an error.
pub fn build_index(rows: &[Row]) -> Result<Index, LayoutError> {
    let mut slots = IndexMap::new();

    for (row, members) in rows.iter().enumerate() {
        for (column, rect) in members.iter().enumerate() {
            let Some(id) = rect.uuid() else {
                continue;
            };
            match slots.entry(id.to_string()) {
                Entry::Occupied(entry) => {
                    return Err(LayoutError::DuplicateIdentifier(entry.key().clone()));
                }
                Entry::Vacant(entry) => {
                    entry.insert(Slot { row, column });
                }
            }
        }
    }

    tracing::debug!("indexed {} identifiers", slots.len());
    Ok(Index { slots })
}
