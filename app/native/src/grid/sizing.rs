//! Default sizes and size limits per widget kind.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Width and height used when a limit is not set for a kind.
const FALLBACK_MIN: i32 = 1;
const FALLBACK_MAX: i32 = 9;

/// Built-in widget kinds.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum WidgetKind {
    Calendar,
    ProjectSummary,
    KpiMetrics,
    TaxDeadline,
    TodoList,
    #[default]
    Custom,
}

/// Default size and resize limits of a widget kind, in grid units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetSizeLimits {
    pub width: i32,
    pub height: i32,
    pub min_width: Option<i32>,
    pub min_height: Option<i32>,
    pub max_width: Option<i32>,
    pub max_height: Option<i32>,
}

impl WidgetSizeLimits {
    const fn new(min_width: i32, min_height: i32) -> Self {
        Self {
            width: 2,
            height: 2,
            min_width: Some(min_width),
            min_height: Some(min_height),
            max_width: Some(5),
            max_height: Some(5),
        }
    }
}

impl WidgetKind {
    /// Returns the serialized name of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Calendar => "calendar",
            Self::ProjectSummary => "projectSummary",
            Self::KpiMetrics => "kpiMetrics",
            Self::TaxDeadline => "taxDeadline",
            Self::TodoList => "todoList",
            Self::Custom => "custom",
        }
    }

    /// Returns the default size and limits for this kind.
    #[must_use]
    pub const fn default_size(self) -> WidgetSizeLimits {
        match self {
            Self::Calendar | Self::ProjectSummary | Self::TodoList => WidgetSizeLimits::new(2, 2),
            Self::KpiMetrics | Self::TaxDeadline => WidgetSizeLimits::new(1, 2),
            Self::Custom => WidgetSizeLimits::new(1, 1),
        }
    }

    /// Returns the default size adjusted for a narrow grid.
    ///
    /// Grids of up to 4 columns widen widgets by half, up to 6 columns by a
    /// fifth. The width is rounded down and never exceeds `cols`.
    #[must_use]
    pub fn responsive_size(self, cols: u32) -> WidgetSizeLimits {
        let defaults = self.default_size();
        let cols = i32::try_from(cols).unwrap_or(i32::MAX);

        let width = match cols {
            ..=4 => defaults.width * 3 / 2,
            5..=6 => defaults.width * 6 / 5,
            _ => return defaults,
        };

        WidgetSizeLimits {
            width: width.min(cols),
            ..defaults
        }
    }

    /// Returns true if `width` x `height` respects this kind's limits.
    #[must_use]
    pub fn is_valid_size(self, width: i32, height: i32) -> bool {
        let limits = self.default_size();
        let (min_w, max_w) = width_range(&limits);
        let (min_h, max_h) = height_range(&limits);

        (min_w..=max_w).contains(&width) && (min_h..=max_h).contains(&height)
    }

    /// Clamps `width` x `height` into this kind's limits.
    #[must_use]
    pub fn constrain_size(self, width: i32, height: i32) -> (i32, i32) {
        let limits = self.default_size();
        let (min_w, max_w) = width_range(&limits);
        let (min_h, max_h) = height_range(&limits);

        (width.max(min_w).min(max_w), height.max(min_h).min(max_h))
    }
}

fn width_range(limits: &WidgetSizeLimits) -> (i32, i32) {
    (
        limits.min_width.unwrap_or(FALLBACK_MIN),
        limits.max_width.unwrap_or(FALLBACK_MAX),
    )
}

fn height_range(limits: &WidgetSizeLimits) -> (i32, i32) {
    (
        limits.min_height.unwrap_or(FALLBACK_MIN),
        limits.max_height.unwrap_or(FALLBACK_MAX),
    )
}
