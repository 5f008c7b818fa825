//! Widget records stored in a layout set.

use serde::{Deserialize, Serialize};

use crate::grid::{GridPosition, WidgetKind};

/// A widget placed on the grid.
///
/// The engine only looks at the id, the position, the size limits and the
/// static flag. Widget content lives with the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Widget {
    /// Caller-owned identity. Unique within a layout.
    pub id: String,

    /// Kind of widget, used for default sizing.
    #[serde(default)]
    pub kind: WidgetKind,

    /// Current placement.
    pub position: GridPosition,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_w: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_w: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_h: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_h: Option<i32>,

    /// Static widgets are never pushed out of the way by other widgets.
    #[serde(default, rename = "static", skip_serializing_if = "std::ops::Not::not")]
    pub is_static: bool,
}

impl Widget {
    /// Creates a custom widget at a position, with no size limits.
    #[must_use]
    pub fn new(id: impl Into<String>, position: GridPosition) -> Self {
        Self {
            id: id.into(),
            kind: WidgetKind::Custom,
            position,
            min_w: None,
            max_w: None,
            min_h: None,
            max_h: None,
            is_static: false,
        }
    }

    /// Creates a widget of `kind` with that kind's default size and limits,
    /// anchored at `(x, y)`.
    #[must_use]
    pub fn of_kind(id: impl Into<String>, kind: WidgetKind, x: i32, y: i32) -> Self {
        let limits = kind.default_size();
        Self {
            id: id.into(),
            kind,
            position: GridPosition::new(x, y, limits.width, limits.height),
            min_w: limits.min_width,
            max_w: limits.max_width,
            min_h: limits.min_height,
            max_h: limits.max_height,
            is_static: false,
        }
    }

    /// Marks the widget as static.
    #[must_use]
    pub const fn pinned(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Applies this widget's min/max limits to a requested size.
    ///
    /// Minimums are applied first, so a maximum wins when the two conflict.
    #[must_use]
    pub fn apply_size_limits(&self, position: GridPosition) -> GridPosition {
        let mut w = position.w;
        let mut h = position.h;

        if let Some(min_w) = self.min_w {
            w = w.max(min_w);
        }
        if let Some(max_w) = self.max_w {
            w = w.min(max_w);
        }
        if let Some(min_h) = self.min_h {
            h = h.max(min_h);
        }
        if let Some(max_h) = self.max_h {
            h = h.min(max_h);
        }

        position.with_size(w, h)
    }
}
