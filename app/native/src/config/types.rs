//! Configuration types for Dashgrid.
//!
//! This module provides the configuration types and loading functionality.
//! The configuration file supports JSONC format (JSON with comments).
//! Both single-line (`//`) and multi-line (`/* */`) comments are allowed.

use std::fs;
use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid::{Breakpoint, CellMetrics};

/// Supported configuration file names, in lookup order.
const CONFIG_FILE_NAMES: [&str; 2] = ["config.jsonc", "config.json"];

/// Directory name used under the user's config directories.
const CONFIG_DIR_NAME: &str = "dashgrid";

// ============================================================================
// Grid Configuration
// ============================================================================

/// Geometry and policy of a dashboard grid.
///
/// `prevent_collision` and `allow_overlap` are policy flags read by the layout
/// set and the CLI. The geometric primitives do not consult them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct GridConfig {
    /// Number of columns. Must be greater than zero.
    /// Default: 9
    pub cols: u32,

    /// Height of one row in pixels.
    /// Default: 120
    pub row_height: f64,

    /// Gap between cells in pixels.
    /// Default: 16
    pub gap: f64,

    /// Optional cap on the number of rows. When omitted the grid grows
    /// vertically without limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rows: Option<u32>,

    /// Reject moves and resizes that would overlap another widget.
    /// Default: true
    pub prevent_collision: bool,

    /// Allow widgets to overlap each other.
    /// Default: false
    pub allow_overlap: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cols: Breakpoint::Desktop.default_cols(),
            row_height: 120.0,
            gap: 16.0,
            max_rows: None,
            prevent_collision: true,
            allow_overlap: false,
        }
    }
}

impl GridConfig {
    /// Creates a validated configuration with default policy flags.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if any value is out of range.
    pub fn new(cols: u32, row_height: f64, gap: f64) -> Result<Self, ConfigError> {
        let config = Self {
            cols,
            row_height,
            gap,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Creates a configuration with only a column count, leaving the pixel
    /// geometry at its defaults. Intended for tests and quick tools.
    #[must_use]
    pub fn with_cols(cols: u32) -> Self { Self { cols, ..Self::default() } }

    /// Returns a copy capped at `max_rows`.
    #[must_use]
    pub const fn with_max_rows(mut self, max_rows: u32) -> Self {
        self.max_rows = Some(max_rows);
        self
    }

    /// Column count as a signed grid coordinate.
    #[must_use]
    pub fn cols_i32(&self) -> i32 { i32::try_from(self.cols).unwrap_or(i32::MAX) }

    /// Row cap as a signed grid coordinate, if any.
    #[must_use]
    pub fn max_rows_i32(&self) -> Option<i32> {
        self.max_rows.map(|rows| i32::try_from(rows).unwrap_or(i32::MAX))
    }

    /// Returns a copy with the column count for the given breakpoint.
    ///
    /// Positions are not migrated; callers re-run their layout against the
    /// returned configuration.
    #[must_use]
    pub fn for_breakpoint(&self, breakpoint: Breakpoint, columns: &BreakpointConfig) -> Self {
        Self {
            cols: columns.cols_for(breakpoint),
            ..self.clone()
        }
    }

    /// Checks that the configuration describes a usable grid.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` describing the first offending value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cols == 0 {
            return Err(ConfigError::Invalid(GridConfigIssue::ZeroColumns));
        }
        if !self.row_height.is_finite() || self.row_height <= 0.0 {
            return Err(ConfigError::Invalid(GridConfigIssue::RowHeight(self.row_height)));
        }
        if !self.gap.is_finite() || self.gap < 0.0 {
            return Err(ConfigError::Invalid(GridConfigIssue::Gap(self.gap)));
        }
        if self.max_rows == Some(0) {
            return Err(ConfigError::Invalid(GridConfigIssue::ZeroMaxRows));
        }
        Ok(())
    }
}

// ============================================================================
// Compaction
// ============================================================================

/// Axis along which compaction pulls widgets toward the origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum CompactType {
    /// Pull widgets up. This is the default.
    #[default]
    Vertical,
    /// Pull widgets left.
    Horizontal,
}

// ============================================================================
// Breakpoints
// ============================================================================

/// Column counts per breakpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct BreakpointConfig {
    /// Columns at desktop widths (>= 1100px).
    /// Default: 9
    pub desktop: u32,
    /// Columns at tablet widths (>= 768px).
    /// Default: 6
    pub tablet: u32,
    /// Columns below tablet widths.
    /// Default: 2
    pub mobile: u32,
}

impl Default for BreakpointConfig {
    fn default() -> Self {
        Self {
            desktop: Breakpoint::Desktop.default_cols(),
            tablet: Breakpoint::Tablet.default_cols(),
            mobile: Breakpoint::Mobile.default_cols(),
        }
    }
}

impl BreakpointConfig {
    /// Returns the configured column count for a breakpoint.
    #[must_use]
    pub const fn cols_for(&self, breakpoint: Breakpoint) -> u32 {
        match breakpoint {
            Breakpoint::Desktop => self.desktop,
            Breakpoint::Tablet => self.tablet,
            Breakpoint::Mobile => self.mobile,
        }
    }
}

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure for Dashgrid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct DashgridConfig {
    /// Grid geometry and collision policy.
    pub grid: GridConfig,

    /// Axis used by auto-arrange.
    /// Default: "vertical"
    pub compact_type: CompactType,

    /// Fraction of a cell a drag must cover before it moves a whole cell.
    /// Must be within 0.0-1.0.
    /// Default: 0.5
    pub snap_threshold: f64,

    /// Column counts per breakpoint.
    pub breakpoints: BreakpointConfig,
}

impl Default for DashgridConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            compact_type: CompactType::default(),
            snap_threshold: 0.5,
            breakpoints: BreakpointConfig::default(),
        }
    }
}

impl DashgridConfig {
    /// Validates the grid and every value derived from it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` describing the first offending value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.grid.validate()?;

        if !(0.0..=1.0).contains(&self.snap_threshold) {
            return Err(ConfigError::Invalid(GridConfigIssue::SnapThreshold(self.snap_threshold)));
        }

        for breakpoint in Breakpoint::ALL {
            if self.breakpoints.cols_for(breakpoint) == 0 {
                return Err(ConfigError::Invalid(GridConfigIssue::BreakpointColumns(breakpoint)));
            }
        }

        Ok(())
    }

    /// Returns the grid configuration for a container width in pixels.
    #[must_use]
    pub fn grid_for_width(&self, width: f64) -> GridConfig {
        self.grid.for_breakpoint(Breakpoint::for_width(width), &self.breakpoints)
    }

    /// Returns cell metrics for a container `width` pixels wide, using the
    /// breakpoint grid for that width and the configured snap threshold.
    #[must_use]
    pub fn cell_metrics(&self, width: f64) -> CellMetrics {
        CellMetrics::from_container(width, &self.grid_for_width(width))
            .with_snap_threshold(self.snap_threshold)
    }
}

// ============================================================================
// Errors
// ============================================================================

/// A value that makes a grid configuration unusable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridConfigIssue {
    #[error("cols must be greater than zero")]
    ZeroColumns,
    #[error("rowHeight must be a positive number, got {0}")]
    RowHeight(f64),
    #[error("gap must be a non-negative number, got {0}")]
    Gap(f64),
    #[error("maxRows must be greater than zero when set")]
    ZeroMaxRows,
    #[error("snapThreshold must be within 0.0-1.0, got {0}")]
    SnapThreshold(f64),
    #[error("breakpoint {0} must have at least one column")]
    BreakpointColumns(Breakpoint),
}

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No configuration file was found in any of the search paths.
    #[error("No configuration file found")]
    NotFound,
    /// An I/O error occurred while reading the configuration file.
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),
    /// The configuration file contains invalid JSON.
    #[error("Failed to parse configuration file: {0}")]
    Parse(#[from] serde_json::Error),
    /// The configuration parsed but describes an unusable grid.
    #[error("Invalid grid configuration: {0}")]
    Invalid(GridConfigIssue),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the list of configuration file paths to search, in priority order.
#[must_use]
pub fn config_paths() -> Vec<PathBuf> {
    let mut dirs_to_search = Vec::new();

    // Check XDG_CONFIG_HOME first if explicitly set
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        dirs_to_search.push(PathBuf::from(xdg_config).join(CONFIG_DIR_NAME));
    }

    // Always check ~/.config/dashgrid/ (common for CLI tools)
    if let Some(home) = dirs::home_dir() {
        dirs_to_search.push(home.join(".config").join(CONFIG_DIR_NAME));
    }

    // Platform native config directory
    if let Some(config_dir) = dirs::config_dir() {
        dirs_to_search.push(config_dir.join(CONFIG_DIR_NAME));
    }

    let mut paths: Vec<PathBuf> = Vec::new();
    for dir in dirs_to_search {
        for filename in CONFIG_FILE_NAMES {
            let path = dir.join(filename);
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
    }

    paths
}

/// Parses a JSONC string into a validated configuration.
///
/// # Errors
///
/// Returns an error if the input is not valid JSON or fails validation.
pub fn parse_config(source: &str) -> Result<DashgridConfig, ConfigError> {
    let reader = json_comments::StripComments::new(source.as_bytes());
    let config: DashgridConfig = serde_json::from_reader(reader)?;
    config.validate()?;
    Ok(config)
}

/// Loads the configuration from a specific file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or validated.
pub fn load_config_from_path(path: &Path) -> Result<(DashgridConfig, PathBuf), ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound);
    }

    let file = fs::File::open(path)?;
    // Strip comments from JSONC before parsing
    let reader = json_comments::StripComments::new(file);
    let config: DashgridConfig = serde_json::from_reader(reader)?;
    config.validate()?;

    tracing::debug!(path = %path.display(), cols = config.grid.cols, "loaded configuration");
    Ok((config, path.to_path_buf()))
}

/// Loads the configuration from the first existing file in the search paths.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if no file exists, or the loading error of
/// the first file found.
pub fn load_config() -> Result<(DashgridConfig, PathBuf), ConfigError> {
    config_paths()
        .into_iter()
        .find(|path| path.exists())
        .map_or(Err(ConfigError::NotFound), |path| load_config_from_path(&path))
}
