//! Validation - size cap and pairwise overlap checks over a placed grid.

use tilegrid_api::{Rectangle, Row};

use crate::error::LayoutError;

/// Check every rectangle against `limit`, then every pair for overlap.
///
/// The cap check runs over the whole grid first, so an oversized rectangle
/// is reported ahead of any overlap.
///
/// The overlap check compares rectangles across the whole grid, not only
/// within a row, and is quadratic in the number of rectangles. All
/// rectangles must have been placed.
pub fn validate_rows(rows: &[Row], limit: u32) -> Result<(), LayoutError> {
    let rects: Vec<&Rectangle> = rows.iter().flat_map(Row::iter).collect();

    for rect in &rects {
        if rect.w() > limit {
            return Err(LayoutError::ElasticityLimitExceeded {
                rect: Box::new((*rect).clone()),
                limit,
            });
        }
    }

    if let Some(rect) = rects.iter().find(|r| !r.is_placed()) {
        return Err(LayoutError::Unplaced {
            rect: Box::new((*rect).clone()),
        });
    }

    for (i, first) in rects.iter().enumerate() {
        for second in &rects[i + 1..] {
            if first.overlaps(second) {
                return Err(LayoutError::OverlapDetected {
                    first: Box::new((*first).clone()),
                    second: Box::new((*second).clone()),
                });
            }
        }
    }

    tracing::debug!("validated {} rectangles", rects.len());
    Ok(())
}
