//! Widget layout sets.
//!
//! A [`WidgetLayout`] is a caller-owned, contiguous array of widgets plus an
//! id-to-index map. It applies the pure grid engine to a whole dashboard:
//! adding, moving, resizing, swapping and compacting widgets by id.
//!
//! Every operation either commits completely or returns an error with the
//! layout untouched. Nothing is stored outside the value itself, so a layout
//! per breakpoint is just another `WidgetLayout`.

mod error;
mod gesture;
mod push;
mod widget;

use std::collections::HashMap;

pub use error::{LayoutError, LayoutResult};
pub use gesture::{GestureKind, GestureOutcome, evaluate_gesture};
pub use push::{
    MOVE_PUSH_GUARD, RESIZE_PUSH_GUARD, SWAP_PUSH_GUARD, resolve_by_pushing, resolve_resize_push,
};
use serde::{Deserialize, Serialize};
pub use widget::Widget;

use crate::config::{CompactType, GridConfig};
use crate::grid::{
    GridPosition, can_swap_widgets, check_collision, check_collision_with_items, compact_layout,
    constrain_to_bounds, find_empty_space, find_overlapping_pairs, is_within_bounds,
};

// ============================================================================
// Layout Set
// ============================================================================

/// An ordered set of widgets keyed by id.
///
/// Widget order is preserved by every operation, so callers can rely on it
/// for rendering order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetLayout {
    widgets: Vec<Widget>,
    index: HashMap<String, usize>,
}

/// Serialized form of a layout.
#[derive(Serialize, Deserialize)]
struct LayoutFile {
    widgets: Vec<Widget>,
}

/// Problems found by [`WidgetLayout::diagnose`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutReport {
    /// Pairs of widget ids that overlap.
    pub overlaps: Vec<(String, String)>,
    /// Ids of widgets that fall outside the grid.
    pub out_of_bounds: Vec<String>,
}

impl LayoutReport {
    /// Returns true if no problems were found.
    #[must_use]
    pub fn is_clean(&self) -> bool { self.overlaps.is_empty() && self.out_of_bounds.is_empty() }
}

impl WidgetLayout {
    /// Creates an empty layout.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Creates a layout from existing widgets, keeping their positions as-is.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::DuplicateId` if two widgets share an id.
    pub fn from_widgets(widgets: Vec<Widget>) -> LayoutResult<Self> {
        let mut index = HashMap::with_capacity(widgets.len());
        for (i, widget) in widgets.iter().enumerate() {
            if index.insert(widget.id.clone(), i).is_some() {
                return Err(LayoutError::DuplicateId(widget.id.clone()));
            }
        }

        Ok(Self { widgets, index })
    }

    /// Number of widgets.
    #[must_use]
    pub fn len(&self) -> usize { self.widgets.len() }

    /// Returns true if the layout holds no widgets.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.widgets.is_empty() }

    /// Widgets in layout order.
    #[must_use]
    pub fn widgets(&self) -> &[Widget] { &self.widgets }

    /// Looks up a widget by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Widget> { self.index.get(id).map(|&i| &self.widgets[i]) }

    /// Positions in layout order.
    #[must_use]
    pub fn positions(&self) -> Vec<GridPosition> {
        self.widgets.iter().map(|widget| widget.position).collect()
    }

    /// Ids in layout order.
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        self.widgets.iter().map(|widget| widget.id.as_str()).collect()
    }

    fn index_of(&self, id: &str) -> LayoutResult<usize> {
        self.index.get(id).copied().ok_or_else(|| LayoutError::UnknownWidget(id.to_string()))
    }

    fn rebuild_index(&mut self) {
        self.index =
            self.widgets.iter().enumerate().map(|(i, widget)| (widget.id.clone(), i)).collect();
    }

    fn pinned(&self) -> Vec<bool> { self.widgets.iter().map(|widget| widget.is_static).collect() }

    /// Returns true if `position` would overlap any widget other than `id`.
    fn blocked(&self, id: &str, position: &GridPosition) -> bool {
        let positions = self.positions();
        check_collision_with_items(position, &positions, Some(id), &self.ids())
    }

    /// Finds an in-bounds spot for a new `width` x `height` widget.
    #[must_use]
    pub fn find_space(&self, width: i32, height: i32, config: &GridConfig) -> GridPosition {
        let found = find_empty_space(width, height, &self.positions(), config);
        constrain_to_bounds(&found, config)
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Adds a widget, relocating it if its requested position is taken.
    ///
    /// The requested position is clamped to the grid first. If it overlaps an
    /// existing widget, the first free spot of the same size is used instead.
    ///
    /// Returns the committed position.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::DuplicateId` if the id is already present.
    pub fn add_widget(
        &mut self,
        mut widget: Widget,
        config: &GridConfig,
    ) -> LayoutResult<GridPosition> {
        if self.index.contains_key(&widget.id) {
            return Err(LayoutError::DuplicateId(widget.id));
        }

        let requested = constrain_to_bounds(&widget.position, config);
        let positions = self.positions();

        widget.position = if check_collision_with_items(&requested, &positions, None, &[]) {
            let relocated = self.find_space(requested.w, requested.h, config);
            tracing::debug!(
                id = %widget.id,
                requested = %requested,
                relocated = %relocated,
                "requested position taken, relocating widget"
            );
            relocated
        } else {
            requested
        };

        let position = widget.position;
        self.index.insert(widget.id.clone(), self.widgets.len());
        self.widgets.push(widget);

        Ok(position)
    }

    /// Removes a widget and returns it.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::UnknownWidget` if the id is not present.
    pub fn remove_widget(&mut self, id: &str) -> LayoutResult<Widget> {
        let index = self.index_of(id)?;
        let widget = self.widgets.remove(index);
        self.rebuild_index();
        Ok(widget)
    }

    /// Moves a widget to `position`, keeping every other widget in place.
    ///
    /// The position is clamped to the grid. When the grid prevents collisions
    /// (and does not allow overlap), a clamped position overlapping any other
    /// widget is rejected.
    ///
    /// Returns the committed position.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::UnknownWidget` or `LayoutError::Collision`.
    pub fn move_widget(
        &mut self,
        id: &str,
        position: GridPosition,
        config: &GridConfig,
    ) -> LayoutResult<GridPosition> {
        let index = self.index_of(id)?;
        let candidate = constrain_to_bounds(&position, config);
        self.commit(index, candidate, config)
    }

    /// Resizes a widget, applying its own size limits before the grid's.
    ///
    /// Collision handling matches [`move_widget`](Self::move_widget).
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::UnknownWidget` or `LayoutError::Collision`.
    pub fn resize_widget(
        &mut self,
        id: &str,
        position: GridPosition,
        config: &GridConfig,
    ) -> LayoutResult<GridPosition> {
        let index = self.index_of(id)?;
        let limited = self.widgets[index].apply_size_limits(position);
        let candidate = constrain_to_bounds(&limited, config);
        self.commit(index, candidate, config)
    }

    /// Resizes a widget and pushes the widgets it grows into out of the way.
    ///
    /// Size limits and clamping match [`resize_widget`](Self::resize_widget).
    /// Overlapped widgets are pushed down, or sideways when the overlap is
    /// too deep to clear vertically. A resize that would cover a static
    /// widget is cancelled.
    ///
    /// Returns true if every push resolved within the step budget.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::UnknownWidget`, or `LayoutError::Collision` when
    /// the resized widget would overlap a static widget.
    pub fn resize_widget_with_push(
        &mut self,
        id: &str,
        position: GridPosition,
        config: &GridConfig,
    ) -> LayoutResult<bool> {
        let index = self.index_of(id)?;
        let limited = self.widgets[index].apply_size_limits(position);
        let candidate = constrain_to_bounds(&limited, config);

        let hits_static = self.widgets.iter().enumerate().any(|(i, widget)| {
            i != index && widget.is_static && check_collision(&candidate, &widget.position)
        });
        if hits_static {
            tracing::debug!(id, candidate = %candidate, "resize blocked by a static widget");
            return Err(LayoutError::Collision {
                id: id.to_string(),
                position: candidate,
            });
        }

        let mut positions = self.positions();
        positions[index] = candidate;

        let resolved =
            resolve_resize_push(&mut positions, &self.pinned(), index, config, RESIZE_PUSH_GUARD);
        self.apply_positions(&positions);

        Ok(resolved)
    }

    fn commit(
        &mut self,
        index: usize,
        candidate: GridPosition,
        config: &GridConfig,
    ) -> LayoutResult<GridPosition> {
        let id = &self.widgets[index].id;

        if config.prevent_collision && !config.allow_overlap && self.blocked(id, &candidate) {
            return Err(LayoutError::Collision {
                id: id.clone(),
                position: candidate,
            });
        }

        self.widgets[index].position = candidate;
        Ok(candidate)
    }

    /// Moves a widget to `position` and pushes overlapped widgets downward.
    ///
    /// Returns true if every collision was resolved within the step budget.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::UnknownWidget` if the id is not present.
    pub fn move_widget_with_push(
        &mut self,
        id: &str,
        position: GridPosition,
        config: &GridConfig,
    ) -> LayoutResult<bool> {
        let index = self.index_of(id)?;

        let mut positions = self.positions();
        positions[index] = constrain_to_bounds(&position, config);

        let resolved =
            resolve_by_pushing(&mut positions, &self.pinned(), &[index], config, MOVE_PUSH_GUARD);
        self.apply_positions(&positions);

        Ok(resolved)
    }

    /// Exchanges the origins of two widgets, then pushes apart anything the
    /// swap made overlap. Each widget keeps its own size.
    ///
    /// Returns true if every collision was resolved within the step budget.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::UnknownWidget` if either id is not present.
    pub fn swap_widgets(
        &mut self,
        first_id: &str,
        second_id: &str,
        config: &GridConfig,
    ) -> LayoutResult<bool> {
        let first = self.index_of(first_id)?;
        let second = self.index_of(second_id)?;
        if first == second {
            return Ok(true);
        }

        let mut positions = self.positions();
        let (a, b) = (positions[first], positions[second]);

        if !can_swap_widgets(&a, &b, config) {
            tracing::debug!(first_id, second_id, "swapped widgets need clamping to fit the grid");
        }

        positions[first] = constrain_to_bounds(&a.with_origin(b.x, b.y), config);
        positions[second] = constrain_to_bounds(&b.with_origin(a.x, a.y), config);

        let resolved = resolve_by_pushing(
            &mut positions,
            &self.pinned(),
            &[first, second],
            config,
            SWAP_PUSH_GUARD,
        );
        self.apply_positions(&positions);

        Ok(resolved)
    }

    /// Compacts the whole layout along one axis.
    ///
    /// Returns the number of widgets that moved.
    pub fn compact(&mut self, config: &GridConfig, compact_type: CompactType) -> usize {
        let before = self.positions();
        let after = compact_layout(&before, config, compact_type);
        let moved = before.iter().zip(&after).filter(|(a, b)| a != b).count();

        self.apply_positions(&after);
        tracing::debug!(moved, widgets = after.len(), "layout compacted");
        moved
    }

    fn apply_positions(&mut self, positions: &[GridPosition]) {
        for (widget, position) in self.widgets.iter_mut().zip(positions) {
            widget.position = *position;
        }
    }

    // ========================================================================
    // Diagnostics and Serialization
    // ========================================================================

    /// Reports overlapping pairs and out-of-bounds widgets.
    #[must_use]
    pub fn diagnose(&self, config: &GridConfig) -> LayoutReport {
        let positions = self.positions();

        let overlaps = find_overlapping_pairs(&positions)
            .into_iter()
            .map(|(i, j)| (self.widgets[i].id.clone(), self.widgets[j].id.clone()))
            .collect();

        let out_of_bounds = self
            .widgets
            .iter()
            .filter(|widget| !is_within_bounds(&widget.position, config))
            .map(|widget| widget.id.clone())
            .collect();

        LayoutReport { overlaps, out_of_bounds }
    }

    /// Exports the layout as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::Serialization` if encoding fails.
    pub fn to_json(&self) -> LayoutResult<String> {
        let file = LayoutFile {
            widgets: self.widgets.clone(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// Imports a layout exported by [`to_json`](Self::to_json).
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::Serialization` for malformed JSON and
    /// `LayoutError::DuplicateId` if two widgets share an id.
    pub fn from_json(source: &str) -> LayoutResult<Self> {
        let file: LayoutFile = serde_json::from_str(source)?;
        Self::from_widgets(file.widgets)
    }
}

// ============================================================================
// Tests
// ============================================================================
