//! Grid position types.
//!
//! Positions are expressed in whole grid cells, never in pixels. Pixel
//! geometry only appears at the edges of the engine (see `coords`).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// Grid Position
// ============================================================================

/// A widget's placement on the grid, in grid units.
///
/// Fields are signed so that raw input from a gesture (which may be negative
/// or zero-sized) can be represented before it is clamped by
/// [`constrain_to_bounds`](super::constrain_to_bounds).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
pub struct GridPosition {
    /// Column of the left edge (0-based).
    pub x: i32,
    /// Row of the top edge (0-based).
    pub y: i32,
    /// Width in columns.
    pub w: i32,
    /// Height in rows.
    pub h: i32,
}

impl GridPosition {
    /// Creates a new grid position.
    #[must_use]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self { Self { x, y, w, h } }

    /// Returns the same size placed at another origin.
    #[must_use]
    pub const fn with_origin(self, x: i32, y: i32) -> Self { Self { x, y, ..self } }

    /// Returns the same origin with another size.
    #[must_use]
    pub const fn with_size(self, w: i32, h: i32) -> Self { Self { w, h, ..self } }

    /// Column just past the right edge.
    ///
    /// Widened to `i64` so positions near the end of the `i32` range still
    /// have a well-defined edge.
    #[must_use]
    pub const fn right(&self) -> i64 { self.x as i64 + self.w as i64 }

    /// Row just past the bottom edge. See [`right`](Self::right).
    #[must_use]
    pub const fn bottom(&self) -> i64 { self.y as i64 + self.h as i64 }

    /// Number of cells covered.
    #[must_use]
    pub const fn area(&self) -> i64 { self.w as i64 * self.h as i64 }

    /// Returns the edge representation of this position.
    #[must_use]
    pub const fn bounds(&self) -> GridBounds {
        GridBounds {
            left: self.x as i64,
            right: self.right(),
            top: self.y as i64,
            bottom: self.bottom(),
            width: self.w as i64,
            height: self.h as i64,
        }
    }
}

/// Narrows an edge back to a grid coordinate, saturating at the `i32` range.
#[must_use]
pub fn saturate_coord(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

impl std::fmt::Display for GridPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}) {}x{}", self.x, self.y, self.w, self.h)
    }
}

// ============================================================================
// Grid Bounds
// ============================================================================

/// Edges of a grid position. Right and bottom are exclusive.
///
/// Edges are `i64` so that `x + w` never overflows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridBounds {
    pub left: i64,
    pub right: i64,
    pub top: i64,
    pub bottom: i64,
    pub width: i64,
    pub height: i64,
}

impl GridBounds {
    /// Returns true if the two rectangles share at least one cell.
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.left < other.right
            && other.left < self.right
            && self.top < other.bottom
            && other.top < self.bottom
    }

    /// Returns the shared rectangle, or `None` when nothing is shared.
    #[must_use]
    pub const fn intersection(&self, other: &Self) -> Option<Self> {
        let left = if self.left > other.left { self.left } else { other.left };
        let right = if self.right < other.right { self.right } else { other.right };
        let top = if self.top > other.top { self.top } else { other.top };
        let bottom = if self.bottom < other.bottom { self.bottom } else { other.bottom };

        if right <= left || bottom <= top {
            return None;
        }

        Some(Self {
            left,
            right,
            top,
            bottom,
            width: right - left,
            height: bottom - top,
        })
    }

    /// Number of cells covered.
    #[must_use]
    pub const fn area(&self) -> i64 { self.width * self.height }
}

impl From<GridPosition> for GridBounds {
    fn from(position: GridPosition) -> Self { position.bounds() }
}

// ============================================================================
// Pixel Geometry
// ============================================================================

/// A rectangle in pixels, relative to the grid container's top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PixelRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PixelRect {
    /// Creates a new pixel rectangle.
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }
}

/// A whole-cell movement produced from a pointer delta.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDelta {
    pub dx: i32,
    pub dy: i32,
}

impl GridDelta {
    /// Returns true when the delta does not move anything.
    #[must_use]
    pub const fn is_zero(&self) -> bool { self.dx == 0 && self.dy == 0 }
}
