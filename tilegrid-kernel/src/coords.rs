//! Coordinate assignment - rows to absolute positions.

use serde::{Deserialize, Serialize};
use tilegrid_api::Row;

/// How far a row advances the vertical offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowHeight {
    /// Height of the row's first member.
    ///
    /// Only correct when every member ends up the same height; a taller
    /// rigid member later in the row will overlap the next row.
    #[default]
    FirstMember,
    /// Height of the row's tallest member.
    Tallest,
}

impl RowHeight {
    pub fn of(self, row: &Row) -> u32 {
        match self {
            RowHeight::FirstMember => row.first_height(),
            RowHeight::Tallest => row.tallest(),
        }
    }
}

/// Place rows top to bottom and members left to right, starting at (0, 0).
///
/// The vertical offset is kept in `u64`, so any number of rows of any `u32`
/// height stacks without wrapping.
pub fn assign_coordinates(rows: &mut [Row], rule: RowHeight) {
    let mut y = 0u64;
    for row in rows.iter_mut() {
        let mut x = 0u32;
        for rect in row.iter_mut() {
            rect.place(x, y);
            x += rect.w();
        }
        y += u64::from(rule.of(row));
    }
    tracing::debug!("assigned coordinates to {} rows, total height {}", rows.len(), y);
}
