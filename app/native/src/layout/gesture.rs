//! Drag and resize gesture evaluation.
//!
//! The gesture state machine (idle, dragging or resizing, committed or
//! reverted) belongs to the UI. On every pointer step it asks this module
//! what the gesture would produce right now. Nothing is recorded here, so a
//! cancelled gesture needs no cleanup: the UI just never commits the last
//! candidate.

use crate::config::GridConfig;
use crate::grid::{CellMetrics, GridPosition, check_collision_with_items, constrain_to_bounds};

/// The kind of gesture in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    /// The widget is being moved; the delta shifts its origin.
    Move,
    /// The widget is being resized from its bottom-right corner; the delta
    /// changes its size.
    Resize,
}

/// Candidate produced by one gesture step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// The candidate is in bounds and overlaps nothing.
    Valid(GridPosition),
    /// The candidate is in bounds but overlaps another widget.
    Colliding(GridPosition),
}

impl GestureOutcome {
    /// The candidate position, regardless of validity.
    #[must_use]
    pub const fn position(&self) -> GridPosition {
        match self {
            Self::Valid(position) | Self::Colliding(position) => *position,
        }
    }

    /// Returns true if the candidate can be committed as-is.
    #[must_use]
    pub const fn is_valid(&self) -> bool { matches!(self, Self::Valid(_)) }
}

/// Evaluates a gesture step.
///
/// `origin` is the widget's position when the gesture started and the pixel
/// delta is measured from the gesture's start point. `others` must not
/// contain the widget itself.
#[must_use]
pub fn evaluate_gesture(
    kind: GestureKind,
    origin: &GridPosition,
    pixel_dx: f64,
    pixel_dy: f64,
    metrics: &CellMetrics,
    others: &[GridPosition],
    config: &GridConfig,
) -> GestureOutcome {
    let delta = metrics.delta(pixel_dx, pixel_dy);

    let raw = match kind {
        GestureKind::Move => origin.with_origin(
            origin.x.saturating_add(delta.dx),
            origin.y.saturating_add(delta.dy),
        ),
        GestureKind::Resize => origin.with_size(
            origin.w.saturating_add(delta.dx),
            origin.h.saturating_add(delta.dy),
        ),
    };
    let candidate = constrain_to_bounds(&raw, config);

    if check_collision_with_items(&candidate, others, None, &[]) {
        GestureOutcome::Colliding(candidate)
    } else {
        GestureOutcome::Valid(candidate)
    }
}
