//! Free-space search for newly placed widgets.

use super::position::saturate_coord;
use super::{FREE_SPACE_ROW_SLACK, GridPosition, check_collision_with_items};
use crate::config::GridConfig;

/// Finds the first unoccupied region of `width` x `height` cells.
///
/// The grid is scanned row-major (top to bottom, then left to right) and the
/// first candidate that collides with none of `items` wins. Rows are scanned
/// up to `FREE_SPACE_ROW_SLACK` rows below the lowest occupied row, and never
/// past the row cap when one is configured.
///
/// When nothing fits, the widget is placed at column 0 directly below the
/// lowest occupied row. The result may then fall outside the grid (for
/// example when the row cap is exhausted); callers run it through
/// [`constrain_to_bounds`](super::constrain_to_bounds) before committing.
#[must_use]
pub fn find_empty_space(
    width: i32,
    height: i32,
    items: &[GridPosition],
    config: &GridConfig,
) -> GridPosition {
    let max_y = items.iter().map(GridPosition::bottom).max().unwrap_or(0).max(0);

    let slack_limit = max_y + i64::from(FREE_SPACE_ROW_SLACK);
    let row_limit = config
        .max_rows
        .map_or(slack_limit, |max_rows| {
            (i64::from(max_rows) - i64::from(height) + 1).min(slack_limit)
        })
        .min(i64::from(i32::MAX) + 1);
    let last_x = i64::from(config.cols) - i64::from(width);

    // A widget wider than the grid fits nowhere, so skip the scan.
    let mut y = if last_x < 0 { row_limit } else { 0 };
    while y < row_limit {
        let mut x = 0_i64;
        while x <= last_x {
            // `x <= cols - width` and `y <= i32::MAX`, so both fit.
            #[allow(clippy::cast_possible_truncation)]
            let candidate = GridPosition::new(x as i32, y as i32, width, height);

            if !check_collision_with_items(&candidate, items, None, &[]) {
                return candidate;
            }
            x += 1;
        }
        y += 1;
    }

    let fallback_y = saturate_coord(max_y);
    tracing::warn!(
        width,
        height,
        cols = config.cols,
        max_rows = ?config.max_rows,
        fallback_y,
        "no free space found, placing below the layout"
    );

    GridPosition::new(0, fallback_y, width, height)
}
