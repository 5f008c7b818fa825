//! Axis-aligned collision tests between grid positions.
//!
//! Two positions collide only when their projections overlap on both axes.
//! Positions that merely share an edge are not colliding.

use smallvec::SmallVec;

use super::{COLLISION_INLINE_CAP, GridPosition};

/// Indices of positions that collide with a probe.
///
/// Dashboards rarely hold more than a handful of widgets, so results stay on
/// the stack in the common case.
pub type CollisionList = SmallVec<[usize; COLLISION_INLINE_CAP]>;

/// Returns true if the two positions overlap.
///
/// The test is strict: `a.right == b.left` (or any other shared edge) is not
/// a collision. The relation is symmetric.
#[must_use]
pub const fn check_collision(a: &GridPosition, b: &GridPosition) -> bool {
    a.bounds().overlaps(&b.bounds())
}

/// Returns the indices of every position in `items` that collides with `item`.
///
/// `exclude_index`, when given, is skipped. Use it when `item` is a candidate
/// for one of the entries in `items`.
#[must_use]
pub fn get_collisions(
    item: &GridPosition,
    items: &[GridPosition],
    exclude_index: Option<usize>,
) -> CollisionList {
    items
        .iter()
        .enumerate()
        .filter(|(index, _)| Some(*index) != exclude_index)
        .filter(|(_, other)| check_collision(item, other))
        .map(|(index, _)| index)
        .collect()
}

/// Returns true if `item` collides with any position in `items`.
///
/// Exclusion works by external id rather than by index: when `exclude_id` is
/// set, the entry whose id in `item_ids` (parallel to `items`) matches it is
/// skipped. Entries without a corresponding id are always tested.
#[must_use]
pub fn check_collision_with_items(
    item: &GridPosition,
    items: &[GridPosition],
    exclude_id: Option<&str>,
    item_ids: &[&str],
) -> bool {
    items.iter().enumerate().any(|(index, other)| {
        let excluded = exclude_id.is_some_and(|id| item_ids.get(index).is_some_and(|it| *it == id));
        !excluded && check_collision(item, other)
    })
}

/// Returns every colliding pair `(i, j)` with `i < j`.
///
/// Used by layout diagnostics; the engine itself never needs the full set.
#[must_use]
pub fn find_overlapping_pairs(items: &[GridPosition]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();

    for (i, a) in items.iter().enumerate() {
        for (offset, b) in items[i + 1..].iter().enumerate() {
            if check_collision(a, b) {
                pairs.push((i, i + 1 + offset));
            }
        }
    }

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: i32, y: i32, w: i32, h: i32) -> GridPosition { GridPosition::new(x, y, w, h) }

    #[test]
    fn test_overlapping_positions_collide() {
        assert!(check_collision(&pos(0, 0, 2, 2), &pos(1, 1, 2, 2)));
    }

    #[test]
    fn test_edge_touching_is_not_collision() {
        assert!(!check_collision(&pos(0, 0, 2, 2), &pos(2, 0, 2, 2)));
        assert!(!check_collision(&pos(0, 0, 2, 2), &pos(0, 2, 2, 2)));
    }

    #[test]
    fn test_corner_touching_is_not_collision() {
        assert!(!check_collision(&pos(0, 0, 2, 2), &pos(2, 2, 2, 2)));
    }

    #[test]
    fn test_containment_collides() {
        assert!(check_collision(&pos(0, 0, 4, 4), &pos(1, 1, 1, 1)));
        assert!(check_collision(&pos(1, 1, 1, 1), &pos(0, 0, 4, 4)));
    }

    #[test]
    fn test_collision_is_symmetric() {
        let samples = [
            pos(0, 0, 2, 2),
            pos(1, 0, 2, 1),
            pos(2, 0, 2, 2),
            pos(0, 3, 4, 1),
            pos(3, 1, 1, 5),
            pos(5, 5, 1, 1),
        ];

        for a in &samples {
            for b in &samples {
                assert_eq!(check_collision(a, b), check_collision(b, a), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn test_positions_near_i32_limit() {
        let far_right = pos(i32::MAX - 1, 0, 5, 1);
        assert!(!check_collision(&far_right, &pos(0, 0, 1, 1)));
        assert!(check_collision(&far_right, &pos(i32::MAX, 0, 1, 1)));
        assert!(check_collision(&pos(i32::MAX, 0, 1, 1), &far_right));

        let far_down = pos(0, i32::MAX - 1, 1, 5);
        assert!(check_collision(&far_down, &pos(0, i32::MAX, 1, 3)));
        assert!(!check_collision(&far_down, &pos(0, i32::MAX - 3, 1, 2)));
    }

    #[test]
    fn test_get_collisions_returns_indices() {
        let items = [pos(0, 0, 2, 2), pos(2, 0, 2, 2), pos(1, 1, 2, 2)];
        let hits = get_collisions(&pos(1, 0, 2, 1), &items, None);
        assert_eq!(hits.as_slice(), &[0, 1]);
    }

    #[test]
    fn test_get_collisions_skips_excluded_index() {
        let items = [pos(0, 0, 2, 2), pos(1, 1, 2, 2)];
        let hits = get_collisions(&pos(0, 0, 2, 2), &items, Some(0));
        assert_eq!(hits.as_slice(), &[1]);
    }

    #[test]
    fn test_collision_with_items_without_exclusion() {
        let items = [pos(0, 0, 2, 2), pos(4, 0, 2, 2)];
        assert!(check_collision_with_items(&pos(1, 1, 1, 1), &items, None, &[]));
        assert!(!check_collision_with_items(&pos(2, 0, 2, 2), &items, None, &[]));
    }

    #[test]
    fn test_collision_with_items_excludes_by_id() {
        let items = [pos(0, 0, 2, 2), pos(4, 0, 2, 2)];
        let ids = ["calendar", "todo"];

        assert!(!check_collision_with_items(&pos(0, 0, 2, 2), &items, Some("calendar"), &ids));
        assert!(check_collision_with_items(&pos(0, 0, 2, 2), &items, Some("todo"), &ids));
    }

    #[test]
    fn test_collision_with_items_missing_ids_are_tested() {
        let items = [pos(0, 0, 2, 2), pos(4, 0, 2, 2)];
        assert!(check_collision_with_items(&pos(4, 0, 1, 1), &items, Some("x"), &["x"]));
    }

    #[test]
    fn test_find_overlapping_pairs() {
        let items = [pos(0, 0, 2, 2), pos(1, 1, 2, 2), pos(5, 5, 1, 1), pos(0, 1, 1, 1)];
        assert_eq!(find_overlapping_pairs(&items), vec![(0, 1), (0, 3)]);
    }
}
