//! Collision resolution by pushing widgets out of the way.
//!
//! After a widget is dropped onto occupied cells, every widget it overlaps is
//! moved to the row just below it. Moved widgets are queued and resolved in
//! turn, so the push cascades down the layout. Static widgets never move;
//! a widget overlapping one is pushed below it instead.
//!
//! Resizing pushes differently: a widget grown into its neighbours shoves
//! them down or sideways, whichever the overlap calls for, and each widget
//! is resolved at most once.

use std::collections::VecDeque;

use crate::config::GridConfig;
use crate::grid::{GridPosition, check_collision, constrain_to_bounds, saturate_coord};

/// Step budget for resolving a moved widget.
pub const MOVE_PUSH_GUARD: usize = 2000;

/// Step budget for resolving a swapped pair.
pub const SWAP_PUSH_GUARD: usize = 1000;

/// Step budget for resolving a resized widget.
pub const RESIZE_PUSH_GUARD: usize = 1000;

/// Pushes widgets apart until no seed-driven collision remains or the step
/// budget is spent.
///
/// `pinned[i]` marks static widgets. Every moved position is clamped to the
/// grid, so with a row cap some collisions may be impossible to resolve; the
/// budget bounds the work in that case.
///
/// Returns true if the queue drained before the budget ran out.
pub fn resolve_by_pushing(
    positions: &mut [GridPosition],
    pinned: &[bool],
    seeds: &[usize],
    config: &GridConfig,
    guard: usize,
) -> bool {
    let mut queue: VecDeque<usize> = seeds.iter().copied().collect();
    let mut steps = 0;

    while let Some(current) = queue.pop_front() {
        if steps >= guard {
            tracing::warn!(guard, pending = queue.len() + 1, "push resolution step limit reached");
            return false;
        }
        steps += 1;

        for other in 0..positions.len() {
            if other == current {
                continue;
            }

            let moving = positions[current];
            let blocker = positions[other];
            if !check_collision(&moving, &blocker) {
                continue;
            }

            if pinned.get(other).copied().unwrap_or(false) {
                // Cannot displace a static widget: step below it and retry.
                let below = moving.with_origin(moving.x, saturate_coord(blocker.bottom()));
                positions[current] = constrain_to_bounds(&below, config);
                queue.push_back(current);
                break;
            }

            let below = blocker.with_origin(blocker.x, saturate_coord(moving.bottom()));
            positions[other] = constrain_to_bounds(&below, config);
            queue.push_back(other);
        }
    }

    tracing::debug!(steps, "push resolution finished");
    true
}

/// Pushes widgets out of the way of a resized widget at `seed`.
///
/// Widgets are visited breadth-first and each is resolved once. A widget
/// overlapped by the one being resolved moves just below it when the
/// vertical overlap is no deeper than its own height. Otherwise it moves just
/// right of it when the horizontal overlap is no deeper than its width, and
/// stays put when neither holds. Static widgets are skipped and may be left
/// overlapping.
///
/// Returns true if the queue drained before the budget ran out.
pub fn resolve_resize_push(
    positions: &mut [GridPosition],
    pinned: &[bool],
    seed: usize,
    config: &GridConfig,
    guard: usize,
) -> bool {
    let mut queue = VecDeque::from([seed]);
    let mut processed = vec![false; positions.len()];
    let mut steps = 0;

    while let Some(current) = queue.pop_front() {
        if steps >= guard {
            tracing::warn!(guard, pending = queue.len() + 1, "resize push step limit reached");
            return false;
        }
        steps += 1;

        if processed.get(current).copied().unwrap_or(true) {
            continue;
        }
        processed[current] = true;

        let pusher = positions[current];
        for other in 0..positions.len() {
            if other == current || processed[other] || pinned.get(other).copied().unwrap_or(false)
            {
                continue;
            }

            let pushed = positions[other];
            if !check_collision(&pusher, &pushed) {
                continue;
            }

            let depth_y = pusher.bottom() - i64::from(pushed.y);
            let depth_x = pusher.right() - i64::from(pushed.x);

            if depth_y <= i64::from(pushed.h) {
                let below = pushed.with_origin(pushed.x, saturate_coord(pusher.bottom()));
                positions[other] = constrain_to_bounds(&below, config);
            } else if depth_x <= i64::from(pushed.w) {
                let beside = pushed.with_origin(saturate_coord(pusher.right()), pushed.y);
                positions[other] = constrain_to_bounds(&beside, config);
            }
            queue.push_back(other);
        }
    }

    tracing::debug!(steps, "resize push finished");
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::find_overlapping_pairs;

    fn pos(x: i32, y: i32, w: i32, h: i32) -> GridPosition { GridPosition::new(x, y, w, h) }

    #[test]
    fn test_no_collision_is_noop() {
        let mut positions = vec![pos(0, 0, 2, 2), pos(2, 0, 2, 2)];
        let config = GridConfig::with_cols(4);
        let resolved = resolve_by_pushing(&mut positions, &[false, false], &[0], &config, 10);

        assert!(resolved);
        assert_eq!(positions, vec![pos(0, 0, 2, 2), pos(2, 0, 2, 2)]);
    }

    #[test]
    fn test_pushes_overlapped_widget_below() {
        let mut positions = vec![pos(0, 0, 2, 2), pos(0, 1, 2, 1)];
        resolve_by_pushing(&mut positions, &[false, false], &[0], &GridConfig::with_cols(4), 10);
        assert_eq!(positions[1], pos(0, 2, 2, 1));
    }

    #[test]
    fn test_push_cascades() {
        let mut positions = vec![pos(0, 0, 4, 2), pos(0, 1, 4, 1), pos(0, 2, 4, 1)];
        let resolved = resolve_by_pushing(
            &mut positions,
            &[false; 3],
            &[0],
            &GridConfig::with_cols(4),
            MOVE_PUSH_GUARD,
        );

        assert!(resolved);
        assert_eq!(positions[1], pos(0, 2, 4, 1));
        assert_eq!(positions[2], pos(0, 3, 4, 1));
        assert!(find_overlapping_pairs(&positions).is_empty());
    }

    #[test]
    fn test_static_widget_pushes_mover_instead() {
        let mut positions = vec![pos(0, 0, 2, 1), pos(0, 0, 2, 2)];
        resolve_by_pushing(&mut positions, &[false, true], &[0], &GridConfig::with_cols(4), 10);

        assert_eq!(positions[1], pos(0, 0, 2, 2));
        assert_eq!(positions[0], pos(0, 2, 2, 1));
    }

    #[test]
    fn test_guard_bounds_unresolvable_layout() {
        // Two full-width widgets in a single-row grid can never be separated.
        let config = GridConfig::with_cols(2).with_max_rows(1);
        let mut positions = vec![pos(0, 0, 2, 1), pos(0, 0, 2, 1)];
        let resolved = resolve_by_pushing(&mut positions, &[false, false], &[0], &config, 50);
        assert!(!resolved);
    }

    #[test]
    fn test_resize_push_moves_neighbour_down() {
        let mut positions = vec![pos(0, 0, 2, 2), pos(0, 1, 2, 1)];
        let config = GridConfig::with_cols(4);
        let resolved =
            resolve_resize_push(&mut positions, &[false, false], 0, &config, RESIZE_PUSH_GUARD);

        assert!(resolved);
        assert_eq!(positions[1], pos(0, 2, 2, 1));
    }

    #[test]
    fn test_resize_push_falls_back_to_sideways() {
        // The overlap is deeper than the neighbour is tall, but only one
        // column wide.
        let mut positions = vec![pos(0, 0, 2, 3), pos(1, 1, 1, 1)];
        let config = GridConfig::with_cols(4);
        resolve_resize_push(&mut positions, &[false, false], 0, &config, RESIZE_PUSH_GUARD);

        assert_eq!(positions[1], pos(2, 1, 1, 1));
    }

    #[test]
    fn test_resize_push_cascades_once_per_widget() {
        let mut positions = vec![pos(0, 0, 4, 2), pos(0, 1, 4, 1), pos(0, 2, 4, 1)];
        let config = GridConfig::with_cols(4);
        resolve_resize_push(&mut positions, &[false; 3], 0, &config, RESIZE_PUSH_GUARD);

        assert_eq!(positions, vec![pos(0, 0, 4, 2), pos(0, 2, 4, 1), pos(0, 3, 4, 1)]);
        assert!(find_overlapping_pairs(&positions).is_empty());
    }

    #[test]
    fn test_resize_push_skips_static_widgets() {
        let mut positions = vec![pos(0, 0, 2, 2), pos(1, 1, 1, 1)];
        let config = GridConfig::with_cols(4);
        resolve_resize_push(&mut positions, &[false, true], 0, &config, RESIZE_PUSH_GUARD);

        assert_eq!(positions[1], pos(1, 1, 1, 1));
    }

    #[test]
    fn test_resize_push_guard() {
        let mut positions = vec![pos(0, 0, 4, 2), pos(0, 1, 4, 1), pos(0, 2, 4, 1)];
        let config = GridConfig::with_cols(4);
        assert!(!resolve_resize_push(&mut positions, &[false; 3], 0, &config, 1));
    }

    #[test]
    fn test_push_at_i32_limit_saturates_and_stops() {
        // There is no row below `i32::MAX`, so the pair can never separate.
        let mut positions = vec![pos(0, i32::MAX - 1, 1, 4), pos(0, i32::MAX, 1, 1)];
        let config = GridConfig::with_cols(1);
        let resolved = resolve_by_pushing(&mut positions, &[false, false], &[0], &config, 20);

        assert!(!resolved);
        assert!(positions.iter().all(|p| p.y >= i32::MAX - 1));
    }
}
