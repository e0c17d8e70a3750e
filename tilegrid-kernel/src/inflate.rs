//! Inflation - growing elastic rectangles to fill their rows.
//!
//! Width inflation spreads a row's leftover width over its elastic-width
//! members one unit at a time, round-robin. Height inflation raises every
//! elastic-height member to the row's tallest member.

use tilegrid_api::{Rectangle, Row};

use crate::error::LayoutError;

/// Inflate every row's elastic widths up to `target`.
///
/// Rows are processed in order; on failure the rows before the failing one
/// keep their new widths and the failing row is left untouched.
pub fn inflate_widths(rows: &mut [Row], target: u32, cap: u32) -> Result<(), LayoutError> {
    for (index, row) in rows.iter_mut().enumerate() {
        inflate_row_width(index, row, target, cap)?;
    }
    tracing::debug!("inflated widths of {} rows to {}", rows.len(), target);
    Ok(())
}

/// Grow the elastic-width members of one row until it is `target` wide.
///
/// No-op when the row has no elastic member, when any member is already at
/// or past `cap`, or when the row is already at least `target` wide.
/// Overflowing rows are never shrunk.
pub fn inflate_row_width(
    index: usize,
    row: &mut Row,
    target: u32,
    cap: u32,
) -> Result<(), LayoutError> {
    if !row.has_elastic_width() {
        return Ok(());
    }
    if row.iter().any(|r| r.w() >= cap) {
        tracing::trace!("row {}: a member is at the elasticity cap, skipping", index);
        return Ok(());
    }

    let total = row.total_width();
    let target = u64::from(target);
    if total >= target {
        return Ok(());
    }
    let mut diff = target - total;

    // Every member is below the cap here, so the subtraction cannot wrap.
    let headroom: u64 = row
        .iter()
        .filter(|r| r.is_elastic_w())
        .map(|r| u64::from(cap - r.w()))
        .sum();
    if headroom < diff {
        return Err(LayoutError::InsufficientElasticHeadroom {
            row: index,
            required: diff,
            headroom,
        });
    }

    while diff > 0 {
        for rect in row.iter_mut() {
            if diff == 0 {
                break;
            }
            if rect.is_elastic_w() && rect.w() < cap {
                rect.grow_w(1);
                diff -= 1;
            }
        }
    }

    tracing::trace!("row {}: widened to {}", index, row.total_width());
    Ok(())
}

/// Raise elastic heights to each row's tallest member.
pub fn inflate_heights(rows: &mut [Row]) {
    for row in rows.iter_mut() {
        inflate_row_height(row);
    }
    tracing::debug!("inflated heights of {} rows", rows.len());
}

/// Raise the elastic-height members of one row to its tallest member.
///
/// Rigid members keep their height, so a mixed row can stay ragged.
pub fn inflate_row_height(row: &mut Row) {
    if !row.has_elastic_height() {
        return;
    }
    let highest = row.tallest();
    row.iter_mut()
        .filter(|r| r.is_elastic_h())
        .for_each(|r| r.grow_h_to(highest));
}
