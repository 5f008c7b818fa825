//! Layout compaction.
//!
//! Compaction removes gaps by pulling every widget toward the origin along
//! one axis. It is a single greedy first-fit pass, not a packing optimizer:
//!
//! 1. Widgets are visited in reading order for the chosen axis (`(y, x)` for
//!    vertical, `(x, y)` for horizontal). Ties keep their input order.
//! 2. Each widget keeps its cross-axis coordinate and is placed at the lowest
//!    main-axis coordinate, starting from 0, where it overlaps none of the
//!    widgets placed before it.
//! 3. The scan gives up after `MAX_COMPACT_STEPS` steps and places the widget
//!    at the last coordinate tried, even if it overlaps. This keeps the pass
//!    bounded for pathological input.
//!
//! The returned positions are in the same order as the input, so index `i`
//! of the output always belongs to the widget at index `i` of the input.

use super::{GridPosition, MAX_COMPACT_STEPS, check_collision};
use crate::config::{CompactType, GridConfig};

/// Compacts a full widget set along one axis.
///
/// `items` must be the entire layout. Compacting a subset ignores the
/// positions left out and can produce overlaps with them.
///
/// The input is not modified. The output has the same length and order.
#[must_use]
pub fn compact_layout(
    items: &[GridPosition],
    config: &GridConfig,
    compact_type: CompactType,
) -> Vec<GridPosition> {
    let mut order: Vec<usize> = (0..items.len()).collect();
    match compact_type {
        CompactType::Vertical => order.sort_by_key(|&i| (items[i].y, items[i].x)),
        CompactType::Horizontal => order.sort_by_key(|&i| (items[i].x, items[i].y)),
    }

    let mut placed: Vec<GridPosition> = Vec::with_capacity(items.len());
    let mut result = items.to_vec();
    let mut runaway = 0_usize;

    for index in order {
        let (position, settled) = settle(&items[index], &placed, compact_type);
        if !settled {
            runaway += 1;
            tracing::warn!(
                index,
                position = %position,
                steps = MAX_COMPACT_STEPS,
                "compaction step limit reached, widget may overlap"
            );
        }

        placed.push(position);
        result[index] = position;
    }

    tracing::debug!(
        widgets = items.len(),
        cols = config.cols,
        ?compact_type,
        runaway,
        "compacted layout"
    );

    result
}

/// Finds the first free main-axis coordinate for `item`.
///
/// Returns the chosen position and whether it is actually free.
fn settle(
    item: &GridPosition,
    placed: &[GridPosition],
    compact_type: CompactType,
) -> (GridPosition, bool) {
    let at = |offset: i32| match compact_type {
        CompactType::Vertical => GridPosition { y: offset, ..*item },
        CompactType::Horizontal => GridPosition { x: offset, ..*item },
    };
    let is_free = |candidate: &GridPosition| !placed.iter().any(|p| check_collision(candidate, p));

    let mut offset = 0;
    let mut candidate = at(offset);

    for _ in 0..MAX_COMPACT_STEPS {
        if is_free(&candidate) {
            return (candidate, true);
        }
        offset += 1;
        candidate = at(offset);
    }

    let settled = is_free(&candidate);
    (candidate, settled)
}
