//! Grid layout engine for dashboard widgets.
//!
//! Widgets are rectangles on a discrete grid of `cols` columns and an
//! optionally capped number of rows. Every function in this module is pure:
//! inputs are borrowed, results are new values, and nothing is cached between
//! calls. A rejected candidate is simply never committed by the caller.
//!
//! # Components
//!
//! - **Collision**: strict axis-aligned overlap tests (`collision`)
//! - **Bounds**: validation and soft clamping against the grid (`bounds`)
//! - **Free space**: first-fit search for new widgets (`free_space`)
//! - **Compaction**: order-preserving greedy re-flow (`compact`)
//! - **Coordinates**: pixel and grid conversion, drag snapping (`coords`)
//! - **Swap and overlap**: soft queries for drop affordances (`swap`)
//!
//! # Complexity
//!
//! Compaction is O(n²) and free-space search is O(rows · cols · n). Both are
//! fine at dashboard sizes (tens of widgets).

mod bounds;
mod breakpoint;
mod collision;
mod compact;
mod coords;
mod free_space;
mod position;
mod sizing;
mod swap;

pub use bounds::{constrain_to_bounds, is_within_bounds};
pub use breakpoint::{Breakpoint, DESKTOP_MIN_WIDTH, TABLET_MIN_WIDTH};
pub use collision::{
    CollisionList, check_collision, check_collision_with_items, find_overlapping_pairs,
    get_collisions,
};
pub use compact::compact_layout;
pub use coords::{CellMetrics, delta_to_grid, grid_to_pixels, pixels_to_grid};
pub use free_space::find_empty_space;
pub use position::{GridBounds, GridDelta, GridPosition, PixelRect, saturate_coord};
pub use sizing::{WidgetKind, WidgetSizeLimits};
pub use swap::{can_swap_widgets, get_overlap_ratio};

// ============================================================================
// Constants
// ============================================================================

/// Inline capacity for collision index lists.
pub const COLLISION_INLINE_CAP: usize = 16;

/// Number of rows below the lowest widget scanned by free-space search.
pub const FREE_SPACE_ROW_SLACK: i32 = 20;

/// Maximum number of single-cell steps compaction takes per widget.
pub const MAX_COMPACT_STEPS: usize = 100;

/// Default fraction of a cell a drag must cover before it snaps.
pub const DEFAULT_SNAP_THRESHOLD: f64 = 0.5;
