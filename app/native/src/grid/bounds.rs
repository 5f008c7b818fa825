//! Bounds validation and clamping against a grid configuration.

use super::GridPosition;
use crate::config::GridConfig;

/// Returns true if `position` lies entirely inside the grid.
///
/// Requires `w >= 1`, `h >= 1`, `x >= 0`, `y >= 0` and `x + w <= cols`. The
/// bottom edge is only checked when the grid has a row cap.
#[must_use]
pub fn is_within_bounds(position: &GridPosition, config: &GridConfig) -> bool {
    if position.w < 1 || position.h < 1 {
        return false;
    }

    if position.x < 0 || position.y < 0 {
        return false;
    }

    if i64::from(position.x) + i64::from(position.w) > i64::from(config.cols) {
        return false;
    }

    config
        .max_rows
        .is_none_or(|max_rows| i64::from(position.y) + i64::from(position.h) <= i64::from(max_rows))
}

/// Clamps `position` into the grid.
///
/// - `w` and `h` are raised to at least 1
/// - `w` is shrunk to `cols`, and `h` to `max_rows` when the grid has a row cap
/// - `x` is clamped into `[0, cols - w]`
/// - `y` is clamped to `>= 0`, and to `<= max_rows - h` when the grid has a row cap
///
/// Never fails. For a validated configuration the result always satisfies
/// [`is_within_bounds`].
#[must_use]
pub fn constrain_to_bounds(position: &GridPosition, config: &GridConfig) -> GridPosition {
    let cols = config.cols_i32();

    let w = position.w.min(cols).max(1);
    let x = position.x.clamp(0, (cols - w).max(0));

    let (y, h) = match config.max_rows_i32() {
        Some(max_rows) => {
            let h = position.h.min(max_rows).max(1);
            (position.y.clamp(0, (max_rows - h).max(0)), h)
        }
        None => (position.y.max(0), position.h.max(1)),
    };

    GridPosition { x, y, w, h }
}
