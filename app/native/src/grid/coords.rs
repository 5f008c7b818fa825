//! Conversion between pixel space and grid space.
//!
//! A cell spans `cell + gap` pixels of pitch. A widget spanning `n` cells is
//! `n * cell + (n - 1) * gap` pixels wide, since the gaps between its own
//! cells belong to it.

use super::{DEFAULT_SNAP_THRESHOLD, GridDelta, GridPosition, PixelRect};
use crate::config::GridConfig;

/// Pixel dimensions of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    /// Width of one column in pixels.
    pub cell_width: f64,
    /// Height of one row in pixels.
    pub cell_height: f64,
    /// Gap between cells in pixels.
    pub gap: f64,
    /// Fraction of a cell a drag must cover before it registers.
    pub snap_threshold: f64,
}

impl CellMetrics {
    /// Creates cell metrics with the default snap threshold.
    #[must_use]
    pub const fn new(cell_width: f64, cell_height: f64, gap: f64) -> Self {
        Self {
            cell_width,
            cell_height,
            gap,
            snap_threshold: DEFAULT_SNAP_THRESHOLD,
        }
    }

    /// Derives cell metrics for a container of `width` pixels.
    ///
    /// Column width is whatever remains after the inner gaps, split evenly.
    /// Row height comes straight from the configuration.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_container(width: f64, config: &GridConfig) -> Self {
        let cols = f64::from(config.cols.max(1));
        let inner_gaps = config.gap * (cols - 1.0);
        let cell_width = ((width - inner_gaps) / cols).max(0.0);

        Self::new(cell_width, config.row_height, config.gap)
    }

    /// Returns a copy with another snap threshold.
    #[must_use]
    pub const fn with_snap_threshold(mut self, snap_threshold: f64) -> Self {
        self.snap_threshold = snap_threshold;
        self
    }

    /// Converts a pixel point with these metrics. See [`pixels_to_grid`].
    #[must_use]
    pub fn to_grid(&self, px: f64, py: f64) -> GridPosition {
        pixels_to_grid(px, py, self.cell_width, self.cell_height, self.gap)
    }

    /// Converts a position to pixels with these metrics. See [`grid_to_pixels`].
    #[must_use]
    pub fn to_pixels(&self, position: &GridPosition) -> PixelRect {
        grid_to_pixels(position, self.cell_width, self.cell_height, self.gap)
    }

    /// Converts a drag delta with these metrics. See [`delta_to_grid`].
    #[must_use]
    pub fn delta(&self, dx: f64, dy: f64) -> GridDelta {
        delta_to_grid(dx, dy, self.cell_width, self.cell_height, self.gap, self.snap_threshold)
    }
}

/// Converts a pixel point to the nearest 1x1 grid cell.
///
/// Each axis is rounded to the nearest whole cell pitch, so a point past the
/// midpoint of a cell resolves to the next one.
#[must_use]
pub fn pixels_to_grid(
    px: f64,
    py: f64,
    cell_width: f64,
    cell_height: f64,
    gap: f64,
) -> GridPosition {
    let x = to_cells(px / (cell_width + gap));
    let y = to_cells(py / (cell_height + gap));
    GridPosition::new(x, y, 1, 1)
}

/// Converts a grid position to its pixel rectangle.
#[must_use]
pub fn grid_to_pixels(
    position: &GridPosition,
    cell_width: f64,
    cell_height: f64,
    gap: f64,
) -> PixelRect {
    let (x, y) = (f64::from(position.x), f64::from(position.y));
    let (w, h) = (f64::from(position.w), f64::from(position.h));

    PixelRect {
        left: x * (cell_width + gap),
        top: y * (cell_height + gap),
        width: w.mul_add(cell_width, (w - 1.0) * gap),
        height: h.mul_add(cell_height, (h - 1.0) * gap),
    }
}

/// Converts a pixel drag delta to a whole-cell delta.
///
/// Each axis moves by the rounded number of cells covered, but only once the
/// pointer has travelled at least `snap_threshold` of a cell pitch. Smaller
/// motions yield 0, which keeps sub-cell jitter from moving a widget.
#[must_use]
pub fn delta_to_grid(
    dx: f64,
    dy: f64,
    cell_width: f64,
    cell_height: f64,
    gap: f64,
    snap_threshold: f64,
) -> GridDelta {
    let snap = |cells: f64| {
        if cells.abs() >= snap_threshold { to_cells(cells) } else { 0 }
    };

    GridDelta {
        dx: snap(dx / (cell_width + gap)),
        dy: snap(dy / (cell_height + gap)),
    }
}

/// Rounds a fractional cell count to a grid coordinate.
///
/// Halves round toward positive infinity, so `-0.5` becomes 0 and `-1.5`
/// becomes -1. Non-finite input (a zero-sized pitch) maps to 0 and
/// out-of-range values saturate.
#[allow(clippy::cast_possible_truncation)]
fn to_cells(cells: f64) -> i32 {
    if cells.is_finite() { (cells + 0.5).floor() as i32 } else { 0 }
}
