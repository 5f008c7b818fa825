//! Error types for layout set operations.

use thiserror::Error;

use crate::grid::GridPosition;

/// Result type alias for layout set operations.
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Errors returned by [`WidgetLayout`](super::WidgetLayout) operations.
///
/// A failed operation never leaves the layout partially updated.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// No widget with the given id exists in the layout.
    #[error("Widget not found: {0}")]
    UnknownWidget(String),

    /// A widget with the given id is already part of the layout.
    #[error("Widget already exists: {0}")]
    DuplicateId(String),

    /// The candidate position overlaps another widget and the grid prevents
    /// collisions.
    #[error("Widget {id} would collide at {position}")]
    Collision {
        /// The widget being placed.
        id: String,
        /// The rejected candidate position.
        position: GridPosition,
    },

    /// The layout could not be exported or imported.
    #[error("Layout serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
