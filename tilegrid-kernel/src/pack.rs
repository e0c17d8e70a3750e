//! Row packing - greedy partition of blueprints into rows.

use tilegrid_api::{Blueprint, Rectangle, Row};

/// Partition blueprints into rows no wider than `max_row_width`.
///
/// Single pass, no lookahead. A blueprint joins the current row when the row
/// is empty, or when it fits and carries the same group as the row's last
/// member. Otherwise the current row is closed and the blueprint starts a new
/// one. A blueprint wider than the limit still gets a row of its own.
pub fn pack_rows<I>(blueprints: I, max_row_width: u32) -> Vec<Row>
where
    I: IntoIterator<Item = Blueprint>,
{
    let limit = u64::from(max_row_width);
    let mut rows = Vec::new();
    let mut current = Row::new();

    for (ordinal, blueprint) in blueprints.into_iter().enumerate() {
        if let Some(last) = current.last() {
            let fits = current.width_with(blueprint.min_w) <= limit;
            let same_group = last.group_id() == blueprint.group_id;
            if !(fits && same_group) {
                rows.push(std::mem::take(&mut current));
            }
        }
        current.push(Rectangle::from_blueprint(ordinal, blueprint));
    }

    if !current.is_empty() {
        rows.push(current);
    }

    tracing::debug!(
        "packed {} rectangles into {} rows",
        rows.iter().map(Row::len).sum::<usize>(),
        rows.len()
    );
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widths(rows: &[Row]) -> Vec<Vec<u32>> {
        rows.iter()
            .map(|row| row.iter().map(Rectangle::w).collect())
            .collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(pack_rows(Vec::new(), 10).is_empty());
    }

    #[test]
    fn test_single_row() {
        let rows = pack_rows(vec![Blueprint::new(3, 1); 3], 10);
        assert_eq!(widths(&rows), vec![vec![3, 3, 3]]);
    }

    #[test]
    fn test_exact_fill_stays_in_row() {
        let rows = pack_rows(vec![Blueprint::new(5, 1), Blueprint::new(5, 1)], 10);
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_width_break() {
        let rows = pack_rows(vec![Blueprint::new(6, 1), Blueprint::new(6, 1)], 10);
        assert_eq!(widths(&rows), vec![vec![6], vec![6]]);
    }

    #[test]
    fn test_group_break() {
        let rows = pack_rows(
            vec![
                Blueprint::new(2, 1).group(0),
                Blueprint::new(2, 1).group(0),
                Blueprint::new(2, 1).group(1),
            ],
            10,
        );
        assert_eq!(widths(&rows), vec![vec![2, 2], vec![2]]);
    }

    #[test]
    fn test_group_spans_rows_after_width_break() {
        // Group 0 overflows mid-run, then group 1 starts fresh.
        let rows = pack_rows(
            vec![
                Blueprint::new(4, 1).group(0),
                Blueprint::new(4, 1).group(0),
                Blueprint::new(4, 1).group(0),
                Blueprint::new(1, 1).group(1),
            ],
            10,
        );
        assert_eq!(widths(&rows), vec![vec![4, 4], vec![4], vec![1]]);
        assert_eq!(rows[1].first().unwrap().group_id(), rows[0].first().unwrap().group_id());
    }

    #[test]
    fn test_oversized_blueprint_gets_own_row() {
        let rows = pack_rows(
            vec![Blueprint::new(12, 1), Blueprint::new(2, 1), Blueprint::new(2, 1)],
            10,
        );
        assert_eq!(widths(&rows), vec![vec![12], vec![2, 2]]);
    }

    #[test]
    fn test_preserves_order_and_ordinals() {
        let rows = pack_rows(
            (0..7).map(|i| Blueprint::new(1 + i % 4, 1).uuid(format!("b{}", i))),
            5,
        );
        let ordinals: Vec<usize> = rows.iter().flat_map(Row::iter).map(Rectangle::ordinal).collect();
        assert_eq!(ordinals, (0..7).collect::<Vec<_>>());
        for rect in rows.iter().flat_map(Row::iter) {
            assert_eq!(rect.uuid(), Some(format!("b{}", rect.ordinal()).as_str()));
        }
    }
}
