//! Soft geometric queries used for drag affordances.

use super::{GridPosition, is_within_bounds};
use crate::config::GridConfig;

/// Returns the fraction of the smaller position covered by the overlap.
///
/// The result is in `[0, 1]`: 0 for disjoint (or edge-touching) positions and
/// 1 when one position contains the other. Suitable for highlighting drop
/// targets; collision decisions use [`check_collision`](super::check_collision).
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn get_overlap_ratio(a: &GridPosition, b: &GridPosition) -> f64 {
    let Some(shared) = a.bounds().intersection(&b.bounds()) else {
        return 0.0;
    };

    let smaller = a.area().min(b.area());
    if smaller <= 0 {
        return 0.0;
    }

    shared.area() as f64 / smaller as f64
}

/// Returns true if two widgets can trade places.
///
/// Each widget keeps its own size and takes the other's origin; both results
/// must lie within the grid. Other widgets in the layout are not considered,
/// so a swap allowed here can still overlap a third widget. Callers that
/// need a clean result resolve that afterwards (see the layout set's swap).
#[must_use]
pub fn can_swap_widgets(first: &GridPosition, second: &GridPosition, config: &GridConfig) -> bool {
    let first_moved = first.with_origin(second.x, second.y);
    let second_moved = second.with_origin(first.x, first.y);

    is_within_bounds(&first_moved, config) && is_within_bounds(&second_moved, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::check_collision;

    fn pos(x: i32, y: i32, w: i32, h: i32) -> GridPosition { GridPosition::new(x, y, w, h) }

    #[test]
    fn test_overlap_ratio_identical_is_one() {
        let a = pos(1, 1, 3, 2);
        assert_eq!(get_overlap_ratio(&a, &a), 1.0);
    }

    #[test]
    fn test_overlap_ratio_disjoint_is_zero() {
        assert_eq!(get_overlap_ratio(&pos(0, 0, 2, 2), &pos(5, 5, 2, 2)), 0.0);
    }

    #[test]
    fn test_overlap_ratio_edge_touching_is_zero() {
        assert_eq!(get_overlap_ratio(&pos(0, 0, 2, 2), &pos(2, 0, 2, 2)), 0.0);
    }

    #[test]
    fn test_overlap_ratio_containment_is_one() {
        assert_eq!(get_overlap_ratio(&pos(0, 0, 4, 4), &pos(1, 1, 2, 2)), 1.0);
        assert_eq!(get_overlap_ratio(&pos(1, 1, 2, 2), &pos(0, 0, 4, 4)), 1.0);
    }

    #[test]
    fn test_overlap_ratio_uses_smaller_area() {
        // Overlap is 1x2 = 2 cells, the smaller widget covers 2x2 = 4.
        let ratio = get_overlap_ratio(&pos(0, 0, 4, 4), &pos(3, 0, 2, 2));
        assert!((ratio - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_overlap_ratio_is_symmetric() {
        let a = pos(0, 0, 3, 3);
        let b = pos(2, 1, 3, 1);
        assert_eq!(get_overlap_ratio(&a, &b), get_overlap_ratio(&b, &a));
    }

    #[test]
    fn test_overlap_ratio_empty_position_is_zero() {
        assert_eq!(get_overlap_ratio(&pos(0, 0, 0, 0), &pos(0, 0, 2, 2)), 0.0);
    }

    #[test]
    fn test_overlap_ratio_near_i32_limit() {
        let a = pos(i32::MAX - 1, i32::MAX - 1, 4, 4);
        let b = pos(i32::MAX, i32::MAX, 2, 2);
        assert_eq!(get_overlap_ratio(&a, &b), 1.0);
        assert_eq!(get_overlap_ratio(&a, &pos(0, 0, 2, 2)), 0.0);
    }

    #[test]
    fn test_can_swap_equal_sizes() {
        let config = GridConfig::with_cols(4);
        assert!(can_swap_widgets(&pos(0, 0, 2, 2), &pos(2, 0, 2, 2), &config));
    }

    #[test]
    fn test_cannot_swap_when_wide_widget_overflows() {
        let config = GridConfig::with_cols(4);
        // The 3-wide widget would start at column 3.
        assert!(!can_swap_widgets(&pos(0, 0, 3, 1), &pos(3, 0, 1, 1), &config));
    }

    #[test]
    fn test_cannot_swap_past_row_cap() {
        let config = GridConfig::with_cols(4).with_max_rows(4);
        assert!(!can_swap_widgets(&pos(0, 0, 1, 3), &pos(1, 3, 1, 1), &config));
    }

    #[test]
    fn test_can_swap_ignores_third_widgets() {
        // A third widget sitting where the swap lands is not consulted.
        let config = GridConfig::with_cols(4);
        let first = pos(0, 0, 2, 1);
        let second = pos(2, 0, 1, 1);
        let third = pos(3, 0, 1, 1);

        assert!(check_collision(&first.with_origin(second.x, second.y), &third));
        assert!(can_swap_widgets(&first, &second, &config));
    }
}
